//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod write_translations;

pub(crate) use build::BuildArgs;
pub(crate) use write_translations::WriteTranslationsArgs;
