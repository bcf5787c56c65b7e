//! Translation resolution for the PyServe documentation site.
//!
//! Every user-visible string is declared as a [`Message`]: a stable
//! identifier paired with the literal default text. A [`Translator`]
//! resolves a message for its locale and falls back to the default when no
//! translation exists, so resolution never fails.
//!
//! Translations live in Docusaurus-compatible `code.json` files:
//!
//! ```json
//! {
//!   "homepage.hero.title": {
//!     "message": "PyServe",
//!     "description": "The hero title on homepage"
//!   }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use pyserve_i18n::{Fallback, Message, Translator};
//!
//! const TITLE: Message = Message::new("homepage.hero.title", "PyServe");
//!
//! let translator = Fallback::new("en");
//! assert_eq!(translator.translate(&TITLE), "PyServe");
//! ```

mod catalog;
mod code_json;
mod error;
mod message;

pub use catalog::{Fallback, Translations, Translator};
pub use code_json::{WriteSummary, code_json_path, write_code_json};
pub use error::I18nError;
pub use message::{Message, ensure_unique_ids};
