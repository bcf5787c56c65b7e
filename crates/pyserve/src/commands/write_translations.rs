//! `pyserve-site write-translations` command implementation.

use std::path::PathBuf;

use clap::Args;
use pyserve_config::{CliSettings, Config};
use pyserve_home::strings;
use pyserve_i18n::{ensure_unique_ids, write_code_json};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the write-translations command.
#[derive(Args)]
pub(crate) struct WriteTranslationsArgs {
    /// Path to configuration file (default: auto-discover pyserve-site.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Translations directory (overrides config).
    #[arg(long)]
    i18n_dir: Option<PathBuf>,

    /// Locales to write (repeatable; default: every non-default locale).
    #[arg(short, long = "locale")]
    locales: Vec<String>,

    /// Replace existing translations with default texts.
    #[arg(long = "override")]
    override_existing: bool,
}

impl WriteTranslationsArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let explicit = !self.locales.is_empty();
        let cli_settings = CliSettings {
            i18n_dir: self.i18n_dir,
            locales: explicit.then_some(self.locales),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(config_path = ?config.config_path, "Loaded configuration");
        let i18n = &config.i18n_resolved;

        let inventory = strings::inventory();
        ensure_unique_ids(inventory.iter().copied())?;

        let locales: Vec<&str> = if explicit {
            i18n.locales.iter().map(String::as_str).collect()
        } else {
            i18n.translated_locales().collect()
        };
        if locales.is_empty() {
            output.warning("No locales to write: add locales to [i18n] or pass --locale");
            return Ok(());
        }

        for locale in locales {
            let summary = write_code_json(
                &i18n.dir,
                locale,
                inventory.iter().copied(),
                self.override_existing,
            )?;
            output.info(&format!(
                "  {locale}: {} ({} added, {} kept)",
                summary.path.display(),
                summary.added,
                summary.kept
            ));
            if summary.stale > 0 {
                output.warning(&format!(
                    "  {locale}: {} entries no longer used",
                    summary.stale
                ));
            }
        }

        output.success(&format!(
            "{} messages written to {}",
            inventory.len(),
            i18n.dir.display()
        ));
        Ok(())
    }
}
