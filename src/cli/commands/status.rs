//! Status command implementation.
//!
//! The `mob status` command shows whether a session is in progress and the
//! commits it has produced so far.

use crate::cli::args::StatusArgs;
use crate::error::Result;
use crate::git::{GitBackend, GitRunner};
use crate::session::{status, Session};
use crate::settings::Settings;
use crate::ui::UserInterface;

use super::dispatcher::Command;

/// The status command implementation.
pub struct StatusCommand {
    settings: Settings,
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(settings: Settings, args: StatusArgs) -> Self {
        Self { settings, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &StatusArgs {
        &self.args
    }
}

impl Command for StatusCommand {
    fn execute(
        &self,
        git: &mut dyn GitBackend,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let runner = GitRunner::new(git, self.settings.debug);
        let current = Session::new(runner, &self.settings).status(ui)?;

        if self.args.json {
            status::report_json(ui, &current)?;
        } else {
            status::report(ui, &current);
        }

        Ok(())
    }
}
