//! Inventory of every user-visible homepage string.

use pyserve_i18n::Message;

use crate::features::FEATURES;

pub const PAGE_TITLE: Message =
    Message::new("homepage.title", "PyServe - Lightweight HTTP Server")
        .with_description("The page title for the homepage");

pub const PAGE_DESCRIPTION: Message = Message::new(
    "homepage.description",
    "PyServe is a lightweight and fast HTTP server written in Python for quick deployment and serving static files",
)
.with_description("The page description for the homepage");

pub const HERO_TITLE: Message =
    Message::new("homepage.hero.title", "PyServe").with_description("The hero title on homepage");

pub const TAGLINE: Message = Message::new(
    "homepage.tagline",
    "Lightweight and Fast HTTP Server in Python",
)
.with_description("The tagline for PyServe homepage");

pub const GET_STARTED: Message =
    Message::new("homepage.hero.getStarted", "Get Started - 5min ⏱️");

pub const VIEW_ON_GITHUB: Message = Message::new("homepage.hero.viewGitHub", "View on GitHub");

/// Page-level strings, in order of appearance.
pub static PAGE_MESSAGES: [&Message; 6] = [
    &PAGE_TITLE,
    &PAGE_DESCRIPTION,
    &HERO_TITLE,
    &TAGLINE,
    &GET_STARTED,
    &VIEW_ON_GITHUB,
];

/// Every message the homepage resolves: page strings, then each feature's
/// title and description in catalog order.
pub fn inventory() -> Vec<&'static Message> {
    PAGE_MESSAGES
        .iter()
        .copied()
        .chain(
            FEATURES
                .iter()
                .flat_map(|feature| [&feature.title, &feature.description]),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn inventory_covers_page_and_features() {
        assert_eq!(inventory().len(), PAGE_MESSAGES.len() + 2 * FEATURES.len());
    }

    #[test]
    fn identifiers_are_unique() {
        let inventory = inventory();
        let ids: HashSet<_> = inventory.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), inventory.len());
        assert!(pyserve_i18n::ensure_unique_ids(inventory.iter().copied()).is_ok());
    }

    #[test]
    fn identifiers_are_namespaced() {
        for message in inventory() {
            assert!(message.id.starts_with("homepage."), "{}", message.id);
            assert!(!message.message.is_empty(), "{}", message.id);
        }
    }
}
