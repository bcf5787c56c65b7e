//! Reading and writing Docusaurus-style `code.json` translation files.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{I18nError, Message};

const CODE_JSON: &str = "code.json";

/// One `code.json` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Entry {
    pub(crate) message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
}

impl From<&Message> for Entry {
    fn from(message: &Message) -> Self {
        Self {
            message: message.message.to_owned(),
            description: message.description.map(str::to_owned),
        }
    }
}

/// Outcome of [`write_code_json`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    /// File that was written.
    pub path: PathBuf,
    /// Inventory entries not present before, written with default text.
    pub added: usize,
    /// Existing translations preserved.
    pub kept: usize,
    /// Existing entries whose id is no longer in the inventory.
    pub stale: usize,
}

/// Location of the translation file for `locale` under `dir`.
#[must_use]
pub fn code_json_path(dir: &Path, locale: &str) -> PathBuf {
    dir.join(locale).join(CODE_JSON)
}

/// Read entries from `path`, or `None` if the file does not exist.
pub(crate) fn read_entries(path: &Path) -> Result<Option<BTreeMap<String, Entry>>, I18nError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| I18nError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Write the message inventory to `<dir>/<locale>/code.json`.
///
/// Existing translations are preserved and descriptions refreshed from the
/// inventory. Entries for ids no longer in the inventory are kept untouched.
/// With `override_existing`, the file is rewritten from default texts alone.
///
/// Output is sorted by id, so repeated runs produce identical files.
///
/// # Errors
///
/// Returns an error if the existing file is malformed or I/O fails.
pub fn write_code_json<'a>(
    dir: &Path,
    locale: &str,
    messages: impl IntoIterator<Item = &'a Message>,
    override_existing: bool,
) -> Result<WriteSummary, I18nError> {
    let path = code_json_path(dir, locale);
    let mut existing = if override_existing {
        BTreeMap::new()
    } else {
        read_entries(&path)?.unwrap_or_default()
    };

    let mut entries = BTreeMap::new();
    let mut added = 0;
    let mut kept = 0;
    for message in messages {
        let entry = match existing.remove(message.id) {
            Some(previous) => {
                kept += 1;
                Entry {
                    message: previous.message,
                    description: message.description.map(str::to_owned),
                }
            }
            None => {
                added += 1;
                Entry::from(message)
            }
        };
        entries.insert(message.id.to_owned(), entry);
    }

    let stale = existing.len();
    if stale > 0 {
        tracing::warn!(locale, stale, "Translation file has entries for unknown ids");
    }
    entries.append(&mut existing);

    let mut json = serde_json::to_string_pretty(&entries).map_err(I18nError::Serialize)?;
    json.push('\n');

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, json)?;
    tracing::info!(locale, path = %path.display(), added, kept, "Wrote translations");

    Ok(WriteSummary {
        path,
        added,
        kept,
        stale,
    })
}
