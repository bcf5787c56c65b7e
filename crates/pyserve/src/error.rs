//! CLI error types.

use pyserve_build::BuildError;
use pyserve_config::ConfigError;
use pyserve_i18n::I18nError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    I18n(#[from] I18nError),

    #[error("{0}")]
    Build(#[from] BuildError),
}
