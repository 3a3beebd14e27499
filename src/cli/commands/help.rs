//! Help command implementation.

use crate::error::Result;
use crate::git::GitBackend;
use crate::ui::UserInterface;

use super::dispatcher::Command;

/// Usage lines, one per command.
pub const USAGE: &[&str] = &[
    "usage",
    "\tmob [s]tart [<minutes>]\t# start mobbing as typist",
    "\tmob [n]ext \t# hand over to next typist",
    "\tmob [d]one \t# finish mob session",
    "\tmob [r]eset \t# resets any unfinished mob session",
    "\tmob [t]imer <minutes>\t# start a timer",
    "\tmob status \t# show status of mob session",
    "\tmob [h]elp \t# prints this help",
];

/// The help command implementation.
#[derive(Debug, Default)]
pub struct HelpCommand;

impl HelpCommand {
    /// Create a new help command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for HelpCommand {
    fn execute(
        &self,
        _git: &mut dyn GitBackend,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        for line in USAGE {
            ui.message(line);
        }
        Ok(())
    }
}
