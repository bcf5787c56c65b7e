//! Homepage composition root.

use pyserve_i18n::Translator;

use crate::features;
use crate::header;
use crate::layout::{Layout, SiteContext};
use crate::strings::{PAGE_DESCRIPTION, PAGE_TITLE};

/// Render the complete homepage document.
///
/// Pure function of `site` and the translator's catalog: repeated calls with
/// the same inputs return identical output.
#[must_use]
pub fn render_home(site: &SiteContext, translator: &dyn Translator) -> String {
    let mut body = String::with_capacity(8192);
    header::render_header(&mut body, translator);
    body.push_str("<main>\n");
    body.push_str(&features::render_section(translator));
    body.push_str("</main>\n");

    Layout {
        site,
        locale: translator.locale(),
        title: translator.translate(&PAGE_TITLE),
        description: translator.translate(&PAGE_DESCRIPTION),
    }
    .render(&body)
}
