//! The feature catalog: a fixed, ordered list of cards.

use std::fmt::Write;

use pyserve_i18n::{Message, Translator};

use crate::html::{self, HeadingLevel};
use crate::icons::{self, Icon};

/// One feature card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureDescriptor {
    pub title: Message,
    pub icon: Icon,
    pub description: Message,
}

/// Features in display order.
pub static FEATURES: [FeatureDescriptor; 3] = [
    FeatureDescriptor {
        title: Message::new("homepage.feature.quickStart.title", "Quick Start"),
        icon: icons::QUICK_START,
        description: Message::new(
            "homepage.feature.quickStart.description",
            "Launch the server with a single command and get to work. \
             PyServe is designed for rapid deployment and minimal configuration.",
        ),
    },
    FeatureDescriptor {
        title: Message::new("homepage.feature.staticFiles.title", "Static Files"),
        icon: icons::STATIC_FILES,
        description: Message::new(
            "homepage.feature.staticFiles.description",
            "Serve HTML, CSS, JavaScript and other static files efficiently. \
             Perfect for hosting static websites, documentation, and web applications.",
        ),
    },
    FeatureDescriptor {
        title: Message::new("homepage.feature.logging.title", "Built-in Logging"),
        icon: icons::LOGGING,
        description: Message::new(
            "homepage.feature.logging.description",
            "Beautiful built-in logging of all requests with detailed information. \
             Monitor your server activity with comprehensive request tracking.",
        ),
    },
];

const ICON_CLASS: &str = "featureSvg";

/// Render one card: icon region, third-level heading, paragraph.
#[must_use]
pub fn render_card(feature: &FeatureDescriptor, translator: &dyn Translator) -> String {
    let mut html = String::with_capacity(feature.icon.svg().len() + 512);
    html.push_str("<div class=\"col col--4\">\n");
    let _ = writeln!(
        html,
        "<div class=\"text--center\">\n{}\n</div>",
        feature.icon.render(ICON_CLASS)
    );
    html.push_str("<div class=\"text--center padding-horiz--md\">\n");
    html::heading(
        &mut html,
        HeadingLevel::H3,
        None,
        translator.translate(&feature.title),
    );
    let _ = writeln!(
        html,
        "<p>{}</p>",
        html::escape(translator.translate(&feature.description))
    );
    html.push_str("</div>\n</div>\n");
    html
}

/// Render every card in catalog order.
#[must_use]
pub fn render_all(translator: &dyn Translator) -> Vec<String> {
    FEATURES
        .iter()
        .map(|feature| render_card(feature, translator))
        .collect()
}

/// Render the catalog as a responsive grid section.
#[must_use]
pub fn render_section(translator: &dyn Translator) -> String {
    let mut html = String::from(
        "<section class=\"features\">\n<div class=\"container\">\n<div class=\"row\">\n",
    );
    for card in render_all(translator) {
        html.push_str(&card);
    }
    html.push_str("</div>\n</div>\n</section>\n");
    html
}
