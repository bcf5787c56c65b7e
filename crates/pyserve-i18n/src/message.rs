//! Translatable message declarations.

use std::collections::HashSet;

use crate::I18nError;

/// A user-visible string: resolution identifier plus literal default.
///
/// Identifiers must be unique across the whole inventory and stable across
/// releases, since translation files are keyed by them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Message {
    /// Resolution identifier (e.g., `homepage.hero.title`).
    pub id: &'static str,
    /// Default text, used when the active locale has no translation.
    pub message: &'static str,
    /// Hint for translators.
    pub description: Option<&'static str>,
}

impl Message {
    /// Declare a message without a translator hint.
    #[must_use]
    pub const fn new(id: &'static str, message: &'static str) -> Self {
        Self {
            id,
            message,
            description: None,
        }
    }

    /// Attach a hint for translators.
    #[must_use]
    pub const fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

/// Check that no two messages share an identifier.
///
/// # Errors
///
/// Returns [`I18nError::DuplicateId`] naming the first repeated identifier.
pub fn ensure_unique_ids<'a>(
    messages: impl IntoIterator<Item = &'a Message>,
) -> Result<(), I18nError> {
    let mut seen = HashSet::new();
    for message in messages {
        if !seen.insert(message.id) {
            return Err(I18nError::DuplicateId {
                id: message.id.to_owned(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_const_construction() {
        const MSG: Message =
            Message::new("page.title", "Title").with_description("The page title");
        assert_eq!(MSG.id, "page.title");
        assert_eq!(MSG.message, "Title");
        assert_eq!(MSG.description, Some("The page title"));
    }

    #[test]
    fn test_unique_ids_pass() {
        let messages = [Message::new("a", "A"), Message::new("b", "B")];
        assert!(ensure_unique_ids(&messages).is_ok());
    }

    #[test]
    fn test_duplicate_id_detected() {
        let messages = [
            Message::new("a", "A"),
            Message::new("b", "B"),
            Message::new("a", "Other"),
        ];
        let err = ensure_unique_ids(&messages).unwrap_err();
        assert!(matches!(err, I18nError::DuplicateId { ref id } if id == "a"));
    }

    #[test]
    fn test_empty_inventory_is_unique() {
        assert!(ensure_unique_ids(&[]).is_ok());
    }
}
