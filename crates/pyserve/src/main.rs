//! PyServe site CLI - documentation homepage generator.
//!
//! Provides commands for:
//! - `build`: Render the homepage for every configured locale
//! - `write-translations`: Write `code.json` translation files

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, WriteTranslationsArgs};
use output::Output;

/// PyServe documentation site generator.
#[derive(Parser)]
#[command(name = "pyserve-site", version, about)]
struct Cli {
    /// Enable verbose output (per-page logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the static homepage.
    Build(BuildArgs),
    /// Write translation files for translators to fill in.
    WriteTranslations(WriteTranslationsArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::WriteTranslations(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_build_with_locales() {
        let cli = Cli::try_parse_from([
            "pyserve-site",
            "build",
            "--locale",
            "en",
            "--locale",
            "ru",
            "--output-dir",
            "out",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Build(_)));
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_write_translations_override() {
        let cli = Cli::try_parse_from([
            "pyserve-site",
            "-v",
            "write-translations",
            "--locale",
            "ru",
            "--override",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::WriteTranslations(_)));
        assert!(cli.verbose);
    }
}
