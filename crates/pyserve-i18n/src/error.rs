//! Translation error types.

use std::path::PathBuf;

/// Error raised while loading or writing translation files.
///
/// Missing translations are never an error; they resolve to the default text.
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Translation file is not valid `code.json`.
    #[error("Invalid translation file {}: {source}", path.display())]
    Parse {
        /// Offending file.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// Serialization of a translation file failed.
    #[error("Failed to serialize translations: {0}")]
    Serialize(serde_json::Error),
    /// Two distinct messages share one identifier.
    #[error("Duplicate translation id '{id}'")]
    DuplicateId {
        /// The colliding identifier.
        id: String,
    },
}
