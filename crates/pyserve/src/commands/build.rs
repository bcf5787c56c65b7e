//! `pyserve-site build` command implementation.

use std::path::PathBuf;

use clap::Args;
use pyserve_build::{BuildConfig, StaticSiteBuilder};
use pyserve_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover pyserve-site.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory for the generated site (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Translations directory (overrides config).
    #[arg(long)]
    i18n_dir: Option<PathBuf>,

    /// Build only these locales (repeatable; default: all configured).
    #[arg(short, long = "locale")]
    locales: Vec<String>,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            output_dir: self.output_dir,
            i18n_dir: self.i18n_dir,
            locales: (!self.locales.is_empty()).then_some(self.locales),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(
            config_path = ?config.config_path,
            locales = ?config.i18n_resolved.locales,
            "Loaded configuration"
        );
        let build_config = BuildConfig::from_config(&config);

        output.info(&format!(
            "Translations: {}",
            build_config.i18n_dir.display()
        ));
        output.info(&format!("Output: {}", build_config.output_dir.display()));

        let default_locale = build_config.default_locale.clone();
        let output_dir = build_config.output_dir.clone();
        let report = StaticSiteBuilder::new(build_config).build()?;

        for page in &report.locales {
            let total = page.translated + page.fallback;
            output.info(&format!(
                "  {}: {} ({}/{} strings translated)",
                page.locale,
                page.path.display(),
                page.translated,
                total
            ));
            if page.locale != default_locale && page.fallback > 0 {
                output.warning(&format!(
                    "  {}: {} strings use default text",
                    page.locale, page.fallback
                ));
            }
        }

        output.success(&format!(
            "Site built successfully to {}",
            output_dir.display()
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        args: BuildArgs,
    }

    #[test]
    fn locale_flag_is_repeatable() {
        let cli = Cli::try_parse_from(["build", "-l", "en", "--locale", "ru"]).unwrap();
        assert_eq!(cli.args.locales, vec!["en".to_owned(), "ru".to_owned()]);
        assert_eq!(cli.args.output_dir, None);
    }

    #[test]
    fn repeated_locale_rejected_before_build() {
        let dir = std::env::temp_dir().join("pyserve-site-repeated-locale");
        let args = BuildArgs {
            config: None,
            output_dir: Some(dir.join("build")),
            i18n_dir: None,
            locales: vec!["en".to_owned(), "en".to_owned()],
        };

        let err = args.execute().unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().contains("'en' more than once"));
        assert!(!dir.join("build").exists());
    }
}
