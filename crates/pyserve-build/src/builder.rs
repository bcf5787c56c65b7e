//! Static site builder for the homepage.
//!
//! Renders one homepage per locale. The default locale lands at the site
//! root (`index.html`), every other locale under its own prefix
//! (`<locale>/index.html`). Locales render in parallel on the global rayon
//! pool; the catalog and string inventory are immutable statics shared
//! across workers.

use std::fs;
use std::path::{Path, PathBuf};

use pyserve_config::Config;
use pyserve_home::{SiteContext, render_home, strings};
use pyserve_i18n::{I18nError, Message, Translations, Translator, ensure_unique_ids};
use rayon::prelude::*;

/// Configuration for static site building.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory receiving generated HTML.
    pub output_dir: PathBuf,
    /// Directory holding `<locale>/code.json` files.
    pub i18n_dir: PathBuf,
    /// Locale served at the site root.
    pub default_locale: String,
    /// Locales to build.
    pub locales: Vec<String>,
    /// Site-wide settings handed to the layout.
    pub site: SiteContext,
}

impl BuildConfig {
    /// Build configuration from loaded site configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            output_dir: config.build_resolved.output_dir.clone(),
            i18n_dir: config.i18n_resolved.dir.clone(),
            default_locale: config.i18n_resolved.default_locale.clone(),
            locales: config.i18n_resolved.locales.clone(),
            site: SiteContext {
                title: config.site.title.clone(),
                title_delimiter: config.site.title_delimiter.clone(),
                stylesheet: config.site.stylesheet.clone(),
            },
        }
    }

    /// Output file for `locale`.
    #[must_use]
    pub fn page_path(&self, locale: &str) -> PathBuf {
        if locale == self.default_locale {
            self.output_dir.join("index.html")
        } else {
            self.output_dir.join(locale).join("index.html")
        }
    }
}

/// Error returned by the static site builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("I/O error writing {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{0}")]
    I18n(#[from] I18nError),
}

/// Per-locale build outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleReport {
    pub locale: String,
    /// Written page.
    pub path: PathBuf,
    /// Strings resolved from the locale's translations.
    pub translated: usize,
    /// Strings that fell back to their default text.
    pub fallback: usize,
}

/// Outcome of a full build, one entry per locale in configured order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub locales: Vec<LocaleReport>,
}

/// Builds the static homepage for every configured locale.
pub struct StaticSiteBuilder {
    config: BuildConfig,
}

impl StaticSiteBuilder {
    #[must_use]
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Render and write every locale's homepage.
    ///
    /// # Errors
    ///
    /// Fails if the string inventory has duplicate ids, a translation file
    /// is malformed, or a page cannot be written.
    pub fn build(&self) -> Result<BuildReport, BuildError> {
        let inventory = strings::inventory();
        ensure_unique_ids(inventory.iter().copied())?;

        let catalogs = self
            .config
            .locales
            .iter()
            .map(|locale| Translations::load(&self.config.i18n_dir, locale))
            .collect::<Result<Vec<_>, _>>()?;

        let locales = catalogs
            .par_iter()
            .map(|catalog| self.build_locale(catalog, &inventory))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(
            pages = locales.len(),
            output_dir = %self.config.output_dir.display(),
            "Site build completed"
        );
        Ok(BuildReport { locales })
    }

    fn build_locale(
        &self,
        catalog: &Translations,
        inventory: &[&Message],
    ) -> Result<LocaleReport, BuildError> {
        let locale = catalog.locale();
        let html = render_home(&self.config.site, catalog);
        let path = self.config.page_path(locale);
        write_page(&path, &html)?;

        let translated = inventory
            .iter()
            .filter(|message| catalog.lookup(message.id).is_some())
            .count();
        let fallback = inventory.len() - translated;
        tracing::info!(locale, path = %path.display(), translated, fallback, "Wrote page");

        Ok(LocaleReport {
            locale: locale.to_owned(),
            path,
            translated,
            fallback,
        })
    }
}

fn write_page(path: &Path, html: &str) -> Result<(), BuildError> {
    let io_err = |source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, html).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(root: &Path, locales: &[&str]) -> BuildConfig {
        BuildConfig {
            output_dir: root.join("build"),
            i18n_dir: root.join("i18n"),
            default_locale: "en".to_owned(),
            locales: locales.iter().map(|l| (*l).to_owned()).collect(),
            site: SiteContext::default(),
        }
    }

    #[test]
    fn page_path_default_locale_at_root() {
        let config = config(Path::new("/site"), &["en", "ru"]);
        assert_eq!(config.page_path("en"), PathBuf::from("/site/build/index.html"));
        assert_eq!(
            config.page_path("ru"),
            PathBuf::from("/site/build/ru/index.html")
        );
    }

    #[test]
    fn build_writes_default_locale() {
        let dir = tempfile::tempdir().unwrap();
        let report = StaticSiteBuilder::new(config(dir.path(), &["en"]))
            .build()
            .unwrap();

        assert_eq!(report.locales.len(), 1);
        let en = &report.locales[0];
        assert_eq!(en.locale, "en");
        assert_eq!(en.translated, 0);
        assert_eq!(en.fallback, strings::inventory().len());

        let html = fs::read_to_string(dir.path().join("build/index.html")).unwrap();
        assert_eq!(html, render_home(&SiteContext::default(), &Translations::empty("en")));
    }

    #[test]
    fn build_writes_translated_locale() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("i18n/ru")).unwrap();
        fs::write(
            dir.path().join("i18n/ru/code.json"),
            r#"{ "homepage.hero.viewGitHub": { "message": "Открыть на GitHub" } }"#,
        )
        .unwrap();

        let report = StaticSiteBuilder::new(config(dir.path(), &["en", "ru"]))
            .build()
            .unwrap();

        let locales: Vec<_> = report.locales.iter().map(|r| r.locale.as_str()).collect();
        assert_eq!(locales, vec!["en", "ru"]);
        assert_eq!(report.locales[1].translated, 1);

        let ru = fs::read_to_string(dir.path().join("build/ru/index.html")).unwrap();
        assert!(ru.contains("<html lang=\"ru\">"));
        assert!(ru.contains("Открыть на GitHub</a>"));
        assert!(ru.contains("<h1 class=\"hero__title\">PyServe</h1>"));
        assert!(ru.contains("href=\"/docs/intro\""));
    }

    #[test]
    fn build_is_reproducible() {
        let dir = tempfile::tempdir().unwrap();
        let builder = StaticSiteBuilder::new(config(dir.path(), &["en"]));
        builder.build().unwrap();
        let first = fs::read(dir.path().join("build/index.html")).unwrap();
        builder.build().unwrap();
        let second = fs::read(dir.path().join("build/index.html")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn build_fails_on_malformed_translations() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("i18n/ru")).unwrap();
        fs::write(dir.path().join("i18n/ru/code.json"), "{").unwrap();

        let err = StaticSiteBuilder::new(config(dir.path(), &["en", "ru"]))
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::I18n(I18nError::Parse { .. })));
        assert!(!dir.path().join("build/index.html").exists());
    }

    #[test]
    fn from_config_maps_site_settings() {
        let config = Config::default();
        let build = BuildConfig::from_config(&config);
        assert_eq!(build.default_locale, "en");
        assert_eq!(build.locales, vec!["en".to_owned()]);
        assert_eq!(build.site, SiteContext::default());
    }
}
