//! Configuration management for the PyServe documentation site.
//!
//! Parses `pyserve-site.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.title`
//! - `site.stylesheet`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override build output directory.
    pub output_dir: Option<PathBuf>,
    /// Override translations directory.
    pub i18n_dir: Option<PathBuf>,
    /// Restrict the build to these locales.
    pub locales: Option<Vec<String>>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "pyserve-site.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,
    /// Localization settings (paths are relative strings from TOML).
    i18n: I18nConfigRaw,
    /// Build settings (paths are relative strings from TOML).
    build: BuildConfigRaw,

    /// Resolved localization configuration (set after loading).
    #[serde(skip)]
    pub i18n_resolved: I18nConfig,
    /// Resolved build configuration (set after loading).
    #[serde(skip)]
    pub build_resolved: BuildConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site-wide settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title, appended to page titles.
    pub title: String,
    /// Separator between page title and site title.
    pub title_delimiter: String,
    /// Stylesheet href linked from every page.
    pub stylesheet: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "PyServe".to_owned(),
            title_delimiter: "|".to_owned(),
            stylesheet: None,
        }
    }
}

/// Raw i18n configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct I18nConfigRaw {
    default_locale: Option<String>,
    locales: Option<Vec<String>>,
    dir: Option<String>,
}

/// Resolved localization configuration with absolute paths.
#[derive(Debug, Default)]
pub struct I18nConfig {
    /// Locale served at the site root.
    pub default_locale: String,
    /// All locales to build, default locale included.
    pub locales: Vec<String>,
    /// Directory holding `<locale>/code.json` files.
    pub dir: PathBuf,
}

impl I18nConfig {
    /// Locales other than the default one.
    pub fn translated_locales(&self) -> impl Iterator<Item = &str> {
        self.locales
            .iter()
            .map(String::as_str)
            .filter(|locale| *locale != self.default_locale)
    }
}

/// Raw build configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct BuildConfigRaw {
    output_dir: Option<String>,
}

/// Resolved build configuration with absolute paths.
#[derive(Debug, Default)]
pub struct BuildConfig {
    /// Directory receiving generated HTML.
    pub output_dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.title`").
        field: String,
        /// Error message (e.g., "${`SITE_TITLE`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a locale to be a tag usable as a single path segment.
fn require_locale_tag(locale: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(locale, field)?;
    if !locale
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ConfigError::Validation(format!(
            "{field}: '{locale}' must contain only ASCII letters, digits, '-' or '_'"
        )));
    }
    Ok(())
}

/// Require every locale to be a valid tag, listed once.
fn validate_locale_list(locales: &[String], field: &str) -> Result<(), ConfigError> {
    for (i, locale) in locales.iter().enumerate() {
        require_locale_tag(locale, field)?;
        if locales[..i].contains(locale) {
            return Err(ConfigError::Validation(format!(
                "{field} contains '{locale}' more than once"
            )));
        }
    }
    Ok(())
}

const DEFAULT_LOCALE: &str = "en";

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `pyserve-site.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings)?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    ///
    /// A locale restriction must name configured locales only, each once.
    fn apply_cli_settings(&mut self, settings: &CliSettings) -> Result<(), ConfigError> {
        if let Some(output_dir) = &settings.output_dir {
            self.build_resolved.output_dir.clone_from(output_dir);
        }
        if let Some(i18n_dir) = &settings.i18n_dir {
            self.i18n_resolved.dir.clone_from(i18n_dir);
        }
        if let Some(locales) = &settings.locales {
            validate_locale_list(locales, "--locale")?;
            if let Some(unknown) = locales
                .iter()
                .find(|l| !self.i18n_resolved.locales.contains(l))
            {
                return Err(ConfigError::Validation(format!(
                    "locale '{unknown}' is not listed in i18n.locales"
                )));
            }
            self.i18n_resolved.locales.clone_from(locales);
        }
        Ok(())
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            i18n: I18nConfigRaw::default(),
            build: BuildConfigRaw::default(),
            i18n_resolved: I18nConfig {
                default_locale: DEFAULT_LOCALE.to_owned(),
                locales: vec![DEFAULT_LOCALE.to_owned()],
                dir: base.join("i18n"),
            },
            build_resolved: BuildConfig {
                output_dir: base.join("build"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_i18n()?;
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        require_non_empty(&self.site.title_delimiter, "site.title_delimiter")?;
        if let Some(ref stylesheet) = self.site.stylesheet {
            require_non_empty(stylesheet, "site.stylesheet")?;
        }
        Ok(())
    }

    fn validate_i18n(&self) -> Result<(), ConfigError> {
        let i18n = &self.i18n_resolved;
        require_locale_tag(&i18n.default_locale, "i18n.default_locale")?;
        validate_locale_list(&i18n.locales, "i18n.locales")?;

        if !i18n.locales.contains(&i18n.default_locale) {
            return Err(ConfigError::Validation(format!(
                "i18n.default_locale '{}' must be listed in i18n.locales",
                i18n.default_locale
            )));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.title = expand::expand_env(&self.site.title, "site.title")?;
        if let Some(ref stylesheet) = self.site.stylesheet {
            self.site.stylesheet = Some(expand::expand_env(stylesheet, "site.stylesheet")?);
        }
        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        let default_locale = self
            .i18n
            .default_locale
            .clone()
            .unwrap_or_else(|| DEFAULT_LOCALE.to_owned());
        let locales = self
            .i18n
            .locales
            .clone()
            .unwrap_or_else(|| vec![default_locale.clone()]);

        self.i18n_resolved = I18nConfig {
            default_locale,
            locales,
            dir: resolve(self.i18n.dir.as_deref(), "i18n"),
        };

        self.build_resolved = BuildConfig {
            output_dir: resolve(self.build.output_dir.as_deref(), "build"),
        };
    }
}
