//! Static homepage generation for the PyServe documentation site.

mod builder;

pub use builder::{BuildConfig, BuildError, BuildReport, LocaleReport, StaticSiteBuilder};
