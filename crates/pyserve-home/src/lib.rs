//! Homepage composition for the PyServe documentation site.
//!
//! The homepage is a pure function of static data and a [`Translator`]:
//!
//! - [`features`]: the fixed feature catalog and its card renderer
//! - [`header`]: the hero banner with the two call-to-action links
//! - [`page`]: the composition root assembling header and features inside
//!   the [`Layout`] shell
//!
//! Every user-visible string is a [`pyserve_i18n::Message`] listed in
//! [`strings::inventory`].
//!
//! # Example
//!
//! ```
//! use pyserve_home::{SiteContext, render_home};
//! use pyserve_i18n::Fallback;
//!
//! let html = render_home(&SiteContext::default(), &Fallback::new("en"));
//! assert!(html.contains(r#"href="/docs/intro""#));
//! ```
//!
//! [`Translator`]: pyserve_i18n::Translator

pub mod features;
pub mod header;
pub mod html;
mod icons;
mod layout;
pub mod page;
pub mod strings;

pub use features::{FEATURES, FeatureDescriptor};
pub use icons::Icon;
pub use layout::{Layout, SiteContext};
pub use page::render_home;
