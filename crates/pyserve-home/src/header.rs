//! Hero banner: title, tagline and the two call-to-action links.

use pyserve_i18n::Translator;

use crate::html::{self, HeadingLevel, LinkTarget};
use crate::strings::{GET_STARTED, HERO_TITLE, TAGLINE, VIEW_ON_GITHUB};

/// Route of the "Get Started" action.
pub const GET_STARTED_ROUTE: &str = "/docs/intro";

/// Source repository opened by the "View on GitHub" action.
pub const REPOSITORY_URL: &str = "https://github.com/ShiftyX1/PyServe";

/// Render the hero banner into `out`.
pub fn render_header(out: &mut String, translator: &dyn Translator) {
    out.push_str("<header class=\"hero hero--primary heroBanner\">\n<div class=\"container\">\n");
    html::heading(
        out,
        HeadingLevel::H1,
        Some("hero__title"),
        translator.translate(&HERO_TITLE),
    );
    out.push_str("<p class=\"hero__subtitle\">");
    out.push_str(&html::escape(translator.translate(&TAGLINE)));
    out.push_str("</p>\n<div class=\"buttons\">\n");
    html::link(
        out,
        LinkTarget::Route(GET_STARTED_ROUTE),
        "button button--secondary button--lg",
        translator.translate(&GET_STARTED),
    );
    html::link(
        out,
        LinkTarget::External(REPOSITORY_URL),
        "button button--outline button--lg",
        translator.translate(&VIEW_ON_GITHUB),
    );
    out.push_str("</div>\n</div>\n</header>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use pyserve_i18n::{Fallback, Translations};

    #[test]
    fn header_markup_with_defaults() {
        let mut out = String::new();
        render_header(&mut out, &Fallback::new("en"));
        assert_eq!(
            out,
            "<header class=\"hero hero--primary heroBanner\">\n\
             <div class=\"container\">\n\
             <h1 class=\"hero__title\">PyServe</h1>\n\
             <p class=\"hero__subtitle\">Lightweight and Fast HTTP Server in Python</p>\n\
             <div class=\"buttons\">\n\
             <a class=\"button button--secondary button--lg\" href=\"/docs/intro\">Get Started - 5min ⏱️</a>\n\
             <a class=\"button button--outline button--lg\" href=\"https://github.com/ShiftyX1/PyServe\" \
             target=\"_blank\" rel=\"noopener noreferrer\">View on GitHub</a>\n\
             </div>\n\
             </div>\n\
             </header>\n"
        );
    }

    #[test]
    fn links_ignore_translations() {
        let translations = Translations::from_pairs(
            "ru",
            [
                ("homepage.hero.getStarted", "Начать - 5 минут ⏱️"),
                ("homepage.hero.viewGitHub", "Открыть на GitHub"),
            ],
        );
        let mut out = String::new();
        render_header(&mut out, &translations);
        assert!(out.contains("href=\"/docs/intro\">Начать - 5 минут ⏱️</a>"));
        assert!(out.contains(
            "href=\"https://github.com/ShiftyX1/PyServe\" target=\"_blank\" \
             rel=\"noopener noreferrer\">Открыть на GitHub</a>"
        ));
    }
}
