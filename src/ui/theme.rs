//! Visual theme and styling.

use console::Style;

/// rtcheck's visual theme.
#[derive(Debug, Clone)]
pub struct RtcheckTheme {
    /// Style for passing checks (green).
    pub ok: Style,
    /// Style for failing checks (red).
    pub warning: Style,
    /// Style for check headlines (bold).
    pub headline: Style,
    /// Style for the version banner (bold cyan).
    pub header: Style,
}

impl Default for RtcheckTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl RtcheckTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            ok: Style::new().green(),
            warning: Style::new().red(),
            headline: Style::new().bold(),
            header: Style::new().bold().cyan(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            ok: Style::new(),
            warning: Style::new(),
            headline: Style::new(),
            header: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_output(use_color: bool) -> Self {
        if use_color {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format the `rtcheck - version X` banner.
    pub fn format_banner(&self, version: &str) -> String {
        format!("{}", self.header.apply_to(format!("rtcheck - version {}", version)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_contains_version() {
        let theme = RtcheckTheme::plain();
        assert_eq!(theme.format_banner("1.2.3"), "rtcheck - version 1.2.3");
    }

    #[test]
    fn plain_theme_adds_no_escapes() {
        let theme = RtcheckTheme::plain();
        assert_eq!(theme.ok.apply_to("[ OK ]").to_string(), "[ OK ]");
        assert_eq!(theme.warning.apply_to("[ WARNING ]").to_string(), "[ WARNING ]");
    }

    #[test]
    fn for_output_selects_theme() {
        let theme = RtcheckTheme::for_output(false);
        assert_eq!(theme.headline.apply_to("Swappiness").to_string(), "Swappiness");
        let _ = RtcheckTheme::for_output(true).ok.apply_to("x");
    }

    #[test]
    fn default_impl_matches_new() {
        let default = RtcheckTheme::default();
        let new = RtcheckTheme::new();
        assert_eq!(default.format_banner("0.1"), new.format_banner("0.1"));
    }
}
