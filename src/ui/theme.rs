//! Visual theme and styling.

use console::Style;

/// Mob's visual theme.
#[derive(Debug, Clone)]
pub struct MobTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for echoed git invocations (dim italic).
    pub command: Style,
    /// Style for echoed git output (dim).
    pub dim: Style,
}

impl Default for MobTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl MobTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            command: Style::new().dim().italic(),
            dim: Style::new().dim(),
        }
    }

    /// Create a theme without any styling.
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            command: Style::new(),
            dim: Style::new(),
        }
    }

    /// Format a success message.
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(msg))
    }

    /// Format a warning message.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(msg))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format an echoed command line.
    pub fn format_command(&self, cmdline: &str) -> String {
        format!("{}", self.command.apply_to(format!("[{}]", cmdline)))
    }
}

/// Check if colors should be used.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_leaves_text_untouched() {
        let theme = MobTheme::plain();
        assert_eq!(theme.format_success("start hacking"), "start hacking");
        assert_eq!(theme.format_warning("careful"), "careful");
    }

    #[test]
    fn error_has_icon() {
        let theme = MobTheme::plain();
        assert_eq!(theme.format_error("boom"), "✗ boom");
    }

    #[test]
    fn command_is_bracketed() {
        let theme = MobTheme::plain();
        assert_eq!(theme.format_command("git fetch"), "[git fetch]");
    }

    #[test]
    fn default_theme_creates_without_panic() {
        let theme = MobTheme::default();
        assert!(theme.format_success("ok").contains("ok"));
    }
}
