//! Page-level layout shell.
//!
//! Wraps a rendered body into a complete HTML5 document with title and
//! description metadata.

use std::fmt::Write;

use crate::html::escape;

/// Site-wide settings available to every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContext {
    /// Site title, appended to page titles.
    pub title: String,
    /// Separator between page title and site title.
    pub title_delimiter: String,
    /// Stylesheet href, if any.
    pub stylesheet: Option<String>,
}

impl Default for SiteContext {
    fn default() -> Self {
        Self {
            title: "PyServe".to_owned(),
            title_delimiter: "|".to_owned(),
            stylesheet: None,
        }
    }
}

/// Layout shell for one page.
pub struct Layout<'a> {
    pub site: &'a SiteContext,
    /// Value of the `lang` attribute.
    pub locale: &'a str,
    /// Page title, without the site suffix.
    pub title: &'a str,
    /// Meta description.
    pub description: &'a str,
}

impl Layout<'_> {
    /// Full document title: `"{title} {delimiter} {site}"`, or the site title
    /// alone when the page has none.
    #[must_use]
    pub fn document_title(&self) -> String {
        if self.title.is_empty() {
            self.site.title.clone()
        } else {
            format!(
                "{} {} {}",
                self.title, self.site.title_delimiter, self.site.title
            )
        }
    }

    /// Render a complete HTML document around `body`.
    #[must_use]
    pub fn render(&self, body: &str) -> String {
        let mut html = String::with_capacity(body.len() + 1024);
        let title = escape(&self.document_title());
        let description = escape(self.description);

        html.push_str("<!DOCTYPE html>\n");
        let _ = writeln!(html, "<html lang=\"{}\">", escape(self.locale));
        html.push_str("<head>\n<meta charset=\"utf-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        let _ = writeln!(html, "<title>{title}</title>");
        let _ = writeln!(html, "<meta name=\"description\" content=\"{description}\">");
        let _ = writeln!(html, "<meta property=\"og:title\" content=\"{title}\">");
        let _ = writeln!(
            html,
            "<meta property=\"og:description\" content=\"{description}\">"
        );
        if let Some(ref stylesheet) = self.site.stylesheet {
            let _ = writeln!(
                html,
                "<link rel=\"stylesheet\" href=\"{}\">",
                escape(stylesheet)
            );
        }
        html.push_str("</head>\n<body>\n<div class=\"main-wrapper\">\n");
        html.push_str(body);
        html.push_str("</div>\n</body>\n</html>\n");
        html
    }
}
