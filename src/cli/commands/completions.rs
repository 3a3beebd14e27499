//! Shell completions generation.
//!
//! The `mob completions` command generates shell completion scripts.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::git::GitBackend;
use crate::ui::UserInterface;
use clap::CommandFactory;

use super::dispatcher::Command;

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl Command for CompletionsCommand {
    fn execute(
        &self,
        _git: &mut dyn GitBackend,
        _ui: &mut dyn UserInterface,
    ) -> crate::error::Result<()> {
        let mut cmd = Cli::command();
        clap_complete::generate(self.args.shell, &mut cmd, "mob", &mut std::io::stdout());
        Ok(())
    }
}
