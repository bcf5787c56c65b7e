//! Markup primitives shared by the homepage sections.
//!
//! Text arguments are escaped here, so callers pass resolved strings as is.

use std::fmt::Write;

/// Escape HTML special characters.
#[must_use]
pub fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Destination of a navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// Site-internal route, emitted verbatim.
    Route(&'a str),
    /// Absolute URL, opened in a new tab.
    External(&'a str),
}

impl LinkTarget<'_> {
    /// The `href` value.
    #[must_use]
    pub fn href(&self) -> &str {
        match self {
            Self::Route(route) => route,
            Self::External(url) => url,
        }
    }
}

/// Semantic heading level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Tag name (`h1`..`h6`).
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }
}

/// Render an anchor for `target` with escaped `text`.
pub fn link(out: &mut String, target: LinkTarget<'_>, class: &str, text: &str) {
    let _ = write!(
        out,
        "<a class=\"{}\" href=\"{}\"",
        escape(class),
        escape(target.href())
    );
    if matches!(target, LinkTarget::External(_)) {
        out.push_str(" target=\"_blank\" rel=\"noopener noreferrer\"");
    }
    let _ = writeln!(out, ">{}</a>", escape(text));
}

/// Render a heading at `level` with escaped `text`.
pub fn heading(out: &mut String, level: HeadingLevel, class: Option<&str>, text: &str) {
    let tag = level.tag();
    match class {
        Some(class) => {
            let _ = writeln!(
                out,
                "<{tag} class=\"{}\">{}</{tag}>",
                escape(class),
                escape(text)
            );
        }
        None => {
            let _ = writeln!(out, "<{tag}>{}</{tag}>", escape(text));
        }
    }
}
