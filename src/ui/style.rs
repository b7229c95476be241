//! # Styles
//!
//! Color functions available to templates and the icons used by the default
//! templates.
//!
//! A [`Styles`] value is built once per session from a single question: can
//! the terminal show color? It is never mutated afterwards. Without color
//! every style function is the identity, so plain-text output stays
//! byte-for-byte predictable.

use crossterm::style::{self as term, Attribute, Color, Stylize};

/// A named text style usable as a template function (`{{ . | red }}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Fg(Color),
    Bg(Color),
    Attr(Attribute),
}

const PALETTE: [(&str, Color); 8] = [
    ("black", Color::Black),
    ("red", Color::DarkRed),
    ("green", Color::DarkGreen),
    ("yellow", Color::DarkYellow),
    ("blue", Color::DarkBlue),
    ("magenta", Color::DarkMagenta),
    ("cyan", Color::DarkCyan),
    ("white", Color::Grey),
];

impl Style {
    /// Looks up a template function name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bold" => return Some(Style::Attr(Attribute::Bold)),
            "faint" => return Some(Style::Attr(Attribute::Dim)),
            "italic" => return Some(Style::Attr(Attribute::Italic)),
            "underline" | "underlined" => return Some(Style::Attr(Attribute::Underlined)),
            _ => {}
        }

        if let Some(bg) = name.strip_prefix("bg") {
            let bg = bg.to_ascii_lowercase();
            return PALETTE
                .iter()
                .find(|(n, _)| *n == bg)
                .map(|(_, c)| Style::Bg(*c));
        }

        PALETTE
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, c)| Style::Fg(*c))
    }

    fn paint(self, text: &str) -> String {
        match self {
            Style::Fg(color) => term::style(text).with(color).to_string(),
            Style::Bg(color) => term::style(text).on(color).to_string(),
            Style::Attr(attr) => term::style(text).attribute(attr).to_string(),
        }
    }
}

/// Immutable styling configuration handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styles {
    color: bool,
    pub icon_initial: String,
    pub icon_good: String,
    pub icon_bad: String,
    pub icon_select: String,
    /// Shown in front of the search input while a list is filtered.
    pub search_prompt: String,
}

impl Styles {
    pub fn new(color: bool) -> Self {
        let paint = |style: Style, text: &str| {
            if color {
                style.paint(text)
            } else {
                text.to_string()
            }
        };

        Self {
            color,
            icon_initial: paint(Style::Fg(Color::DarkBlue), "?"),
            icon_good: paint(Style::Fg(Color::DarkGreen), "\u{2714}"),
            icon_bad: paint(Style::Fg(Color::DarkRed), "\u{2717}"),
            icon_select: paint(Style::Attr(Attribute::Bold), "\u{25b8}"),
            search_prompt: "Search: ".to_string(),
        }
    }

    /// Styles without any escape sequences.
    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn apply(&self, style: Style, text: &str) -> String {
        if self.color {
            style.paint(text)
        } else {
            text.to_string()
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::plain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Style::from_name("red"), Some(Style::Fg(Color::DarkRed)));
        assert_eq!(Style::from_name("bgCyan"), Some(Style::Bg(Color::DarkCyan)));
        assert_eq!(
            Style::from_name("faint"),
            Some(Style::Attr(Attribute::Dim))
        );
        assert_eq!(Style::from_name("sparkly"), None);
        assert_eq!(Style::from_name("bgSparkly"), None);
    }

    #[test]
    fn test_plain_styles_are_identity() {
        let styles = Styles::plain();
        assert_eq!(styles.apply(Style::Fg(Color::DarkRed), "x"), "x");
        assert_eq!(styles.icon_good, "\u{2714}");
        assert_eq!(styles.icon_select, "\u{25b8}");
        assert!(!styles.color());
    }

    #[test]
    fn test_icons_match_default_templates() {
        let styles = Styles::plain();
        let icons = [
            &styles.icon_initial,
            &styles.icon_good,
            &styles.icon_bad,
            &styles.icon_select,
        ];
        assert_eq!(icons, ["?", "\u{2714}", "\u{2717}", "\u{25b8}"]);
    }

    #[test]
    fn test_color_styles_wrap_text() {
        let styles = Styles::new(true);
        let bold = styles.apply(Style::Attr(Attribute::Bold), "x");
        assert!(bold.contains('x'));
        assert!(bold.starts_with("\x1b["), "{bold:?}");
        assert!(styles.icon_select.contains('\u{25b8}'));
    }
}
