//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use mob::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("joining mob session");
//! ui.success("start hacking");
//!
//! assert!(ui.messages().contains(&"joining mob session".to_string()));
//! assert!(ui.has_success("hacking"));
//! ```

use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    commands: Vec<String>,
    command_outputs: Vec<String>,
    /// Every line in the order it was emitted, regardless of kind.
    transcript: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all echoed command lines.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Get all echoed command output.
    pub fn command_outputs(&self) -> &[String] {
        &self.command_outputs
    }

    /// Get every emitted line in order.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
        self.transcript.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
        self.transcript.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
        self.transcript.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
        self.transcript.push(msg.to_string());
    }

    fn command(&mut self, cmdline: &str) {
        self.commands.push(cmdline.to_string());
        self.transcript.push(cmdline.to_string());
    }

    fn command_output(&mut self, output: &str) {
        self.command_outputs.push(output.to_string());
        self.transcript.push(output.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_each_kind_separately() {
        let mut ui = MockUI::new();
        ui.message("m");
        ui.success("s");
        ui.warning("w");
        ui.error("e");
        ui.command("git fetch");
        ui.command_output("Already up to date.");

        assert_eq!(ui.messages(), ["m"]);
        assert_eq!(ui.successes(), ["s"]);
        assert_eq!(ui.warnings(), ["w"]);
        assert_eq!(ui.errors(), ["e"]);
        assert_eq!(ui.commands(), ["git fetch"]);
        assert_eq!(ui.command_outputs(), ["Already up to date."]);
    }

    #[test]
    fn transcript_keeps_order() {
        let mut ui = MockUI::new();
        ui.warning("first");
        ui.message("second");
        assert_eq!(ui.transcript(), ["first", "second"]);
    }

    #[test]
    fn has_helpers_match_substrings() {
        let mut ui = MockUI::new();
        ui.warning("uncommitted changes, aborting 'mob start'");
        assert!(ui.has_warning("uncommitted changes"));
        assert!(!ui.has_message("uncommitted changes"));
        assert!(!ui.has_error("uncommitted"));
    }
}
