//! Feature icons, embedded at compile time.
//!
//! Assets are pulled in with `include_str!`, so a missing file fails the
//! build rather than the render.

/// Inline SVG graphic referenced by a stable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    /// Stable asset name.
    pub name: &'static str,
    svg: &'static str,
}

impl Icon {
    pub(crate) const fn new(name: &'static str, svg: &'static str) -> Self {
        Self { name, svg }
    }

    /// Raw SVG markup.
    #[must_use]
    pub fn svg(&self) -> &'static str {
        self.svg
    }

    /// SVG markup with `class` and `role="img"` set on the root element.
    #[must_use]
    pub fn render(&self, class: &str) -> String {
        let svg = self.svg.trim();
        match svg.find("<svg") {
            Some(pos) => {
                let (head, tail) = svg.split_at(pos + "<svg".len());
                format!("{head} class=\"{class}\" role=\"img\"{tail}")
            }
            None => svg.to_owned(),
        }
    }
}

pub(crate) const QUICK_START: Icon =
    Icon::new("quick_start", include_str!("../static/img/quick_start.svg"));
pub(crate) const STATIC_FILES: Icon =
    Icon::new("static_files", include_str!("../static/img/static_files.svg"));
pub(crate) const LOGGING: Icon = Icon::new("logging", include_str!("../static/img/logging.svg"));
