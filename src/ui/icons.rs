//! Unified status vocabulary for consistent output.
//!
//! `StatusKind` maps a report status to the glyph shown by the viewer and
//! the bracketed tag printed by the console renderer.

use super::theme::RtcheckTheme;
use crate::report::Status;

/// Canonical status kinds used across all rtcheck output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// The check passed or does not apply.
    Ok,
    /// The check found something to fix.
    Warning,
}

impl StatusKind {
    /// Build from a pass/fail flag.
    pub fn from_passed(passed: bool) -> Self {
        if passed {
            Self::Ok
        } else {
            Self::Warning
        }
    }

    /// Unicode glyph for interactive output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Ok => "✔",
            Self::Warning => "✘",
        }
    }

    /// Bracketed tag for console output.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Ok => "[ OK ]",
            Self::Warning => "[ WARNING ]",
        }
    }

    /// Styled glyph using the given theme.
    pub fn styled(self, theme: &RtcheckTheme) -> String {
        self.style(theme).apply_to(self.icon()).to_string()
    }

    /// Styled bracketed tag using the given theme.
    pub fn styled_tag(self, theme: &RtcheckTheme) -> String {
        self.style(theme).apply_to(self.bracketed()).to_string()
    }

    fn style(self, theme: &RtcheckTheme) -> &console::Style {
        match self {
            Self::Ok => &theme.ok,
            Self::Warning => &theme.warning,
        }
    }
}

impl From<Status> for StatusKind {
    fn from(status: Status) -> Self {
        Self::from_passed(status.passed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_match_viewer_glyphs() {
        assert_eq!(StatusKind::Ok.icon(), "✔");
        assert_eq!(StatusKind::Warning.icon(), "✘");
    }

    #[test]
    fn bracketed_tags() {
        assert_eq!(StatusKind::Ok.bracketed(), "[ OK ]");
        assert_eq!(StatusKind::Warning.bracketed(), "[ WARNING ]");
    }

    #[test]
    fn not_applicable_maps_to_ok() {
        assert_eq!(StatusKind::from(Status::NotApplicable), StatusKind::Ok);
        assert_eq!(StatusKind::from(Status::Pass), StatusKind::Ok);
        assert_eq!(StatusKind::from(Status::Fail), StatusKind::Warning);
    }

    #[test]
    fn plain_theme_leaves_text_unstyled() {
        let theme = RtcheckTheme::plain();
        assert_eq!(StatusKind::Ok.styled(&theme), "✔");
        assert_eq!(StatusKind::Warning.styled_tag(&theme), "[ WARNING ]");
    }
}
