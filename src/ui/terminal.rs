//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, MobTheme, UserInterface};

/// Terminal UI implementation.
///
/// Everything but errors goes to stdout; errors go to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: MobTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            MobTheme::new()
        } else {
            MobTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.out, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn command(&mut self, cmdline: &str) {
        writeln!(self.out, "{}", self.theme.format_command(cmdline)).ok();
    }

    fn command_output(&mut self, output: &str) {
        let trimmed = output.trim_end();
        if !trimmed.is_empty() {
            writeln!(self.out, "{}", self.theme.dim.apply_to(trimmed)).ok();
        }
    }
}
