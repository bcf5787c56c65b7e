//! Per-locale translation catalogs.

use std::collections::HashMap;
use std::path::Path;

use crate::code_json::{self, Entry};
use crate::{I18nError, Message};

/// Resolves messages for a single locale.
///
/// Resolution never fails: when [`Translator::lookup`] has nothing for an
/// identifier, [`Translator::translate`] returns the message's default text.
pub trait Translator: Send + Sync {
    /// Locale this translator resolves for.
    fn locale(&self) -> &str;

    /// Translated text for `id`, if the locale has one.
    fn lookup(&self, id: &str) -> Option<&str>;

    /// Resolve `message` for this locale.
    fn translate<'a>(&'a self, message: &'a Message) -> &'a str {
        self.lookup(message.id).unwrap_or(message.message)
    }
}

/// Translator that always returns default texts.
///
/// Used for the default locale, whose strings are the literal defaults.
#[derive(Debug, Clone)]
pub struct Fallback {
    locale: String,
}

impl Fallback {
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
        }
    }
}

impl Translator for Fallback {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn lookup(&self, _id: &str) -> Option<&str> {
        None
    }
}

/// Translations for one locale, loaded from `code.json`.
///
/// Immutable after loading, so one catalog can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    locale: String,
    messages: HashMap<String, String>,
}

impl Translations {
    /// Create an empty catalog: every message falls back to its default.
    #[must_use]
    pub fn empty(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            messages: HashMap::new(),
        }
    }

    /// Create a catalog from `(id, text)` pairs.
    ///
    /// Empty texts are dropped so they resolve to the default.
    #[must_use]
    pub fn from_pairs<I, K, V>(locale: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let messages = pairs
            .into_iter()
            .map(|(id, text)| (id.into(), text.into()))
            .filter(|(_, text)| !text.is_empty())
            .collect();
        Self {
            locale: locale.into(),
            messages,
        }
    }

    /// Load `<dir>/<locale>/code.json`.
    ///
    /// A missing file yields an empty catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(dir: &Path, locale: &str) -> Result<Self, I18nError> {
        let path = code_json::code_json_path(dir, locale);
        let Some(entries) = code_json::read_entries(&path)? else {
            tracing::debug!(locale, path = %path.display(), "No translation file, using defaults");
            return Ok(Self::empty(locale));
        };

        let catalog = Self::from_pairs(
            locale,
            entries
                .into_iter()
                .map(|(id, Entry { message, .. })| (id, message)),
        );
        tracing::debug!(locale, count = catalog.len(), "Loaded translations");
        Ok(catalog)
    }

    /// Number of non-empty translations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Translator for Translations {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn lookup(&self, id: &str) -> Option<&str> {
        self.messages.get(id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TITLE: Message = Message::new("homepage.hero.title", "PyServe");
    const TAGLINE: Message = Message::new(
        "homepage.tagline",
        "Lightweight and Fast HTTP Server in Python",
    );

    #[test]
    fn test_fallback_returns_default() {
        let translator = Fallback::new("en");
        assert_eq!(translator.locale(), "en");
        assert_eq!(translator.translate(&TITLE), "PyServe");
    }

    #[test]
    fn test_translation_overrides_default() {
        let translations = Translations::from_pairs(
            "ru",
            [("homepage.tagline", "Легкий и быстрый HTTP-сервер на Python")],
        );
        assert_eq!(
            translations.translate(&TAGLINE),
            "Легкий и быстрый HTTP-сервер на Python"
        );
        assert_eq!(translations.translate(&TITLE), "PyServe");
    }

    #[test]
    fn test_empty_translation_falls_back() {
        let translations = Translations::from_pairs("ru", [("homepage.hero.title", "")]);
        assert!(translations.is_empty());
        assert_eq!(translations.translate(&TITLE), "PyServe");
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let translations = Translations::load(dir.path(), "fr").unwrap();
        assert_eq!(translations.locale(), "fr");
        assert!(translations.is_empty());
        assert_eq!(translations.translate(&TITLE), "PyServe");
    }

    #[test]
    fn test_load_code_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("ru")).unwrap();
        std::fs::write(
            dir.path().join("ru/code.json"),
            r#"{
  "homepage.tagline": {
    "message": "Легкий и быстрый HTTP-сервер на Python",
    "description": "The tagline for PyServe homepage"
  },
  "homepage.hero.title": { "message": "" }
}"#,
        )
        .unwrap();

        let translations = Translations::load(dir.path(), "ru").unwrap();
        assert_eq!(translations.len(), 1);
        assert_eq!(
            translations.lookup("homepage.tagline"),
            Some("Легкий и быстрый HTTP-сервер на Python")
        );
        assert_eq!(translations.translate(&TITLE), "PyServe");
    }

    #[test]
    fn test_load_malformed_json_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("ru")).unwrap();
        std::fs::write(dir.path().join("ru/code.json"), "{ not json").unwrap();

        let err = Translations::load(dir.path(), "ru").unwrap_err();
        assert!(matches!(err, I18nError::Parse { .. }));
        assert!(err.to_string().contains("code.json"));
    }

    #[test]
    fn test_translator_is_object_safe() {
        let translators: Vec<Box<dyn Translator>> = vec![
            Box::new(Fallback::new("en")),
            Box::new(Translations::from_pairs("ru", [("homepage.hero.title", "ПайСерв")])),
        ];
        let resolved: Vec<&str> = translators.iter().map(|t| t.translate(&TITLE)).collect();
        assert_eq!(resolved, vec!["PyServe", "ПайСерв"]);
    }
}
