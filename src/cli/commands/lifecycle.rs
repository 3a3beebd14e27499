//! Session lifecycle commands: `start`, `next`, `done` and `reset`.

use crate::cli::args::StartArgs;
use crate::error::Result;
use crate::git::{GitBackend, GitRunner};
use crate::session::Session;
use crate::settings::Settings;
use crate::timer::Timer;
use crate::ui::UserInterface;

use super::dispatcher::Command;

/// The start command implementation.
pub struct StartCommand {
    settings: Settings,
    args: StartArgs,
}

impl StartCommand {
    /// Create a new start command.
    pub fn new(settings: Settings, args: StartArgs) -> Self {
        Self { settings, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &StartArgs {
        &self.args
    }
}

impl Command for StartCommand {
    fn execute(
        &self,
        git: &mut dyn GitBackend,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let runner = GitRunner::new(git, self.settings.debug);
        let started = Session::new(runner, &self.settings).start(ui)?;

        if let (Some(_), Some(minutes)) = (started, &self.args.minutes) {
            Timer::new(&self.settings.timer_notify, self.settings.debug).start(ui, minutes);
        }

        Ok(())
    }
}

/// The next command implementation.
pub struct NextCommand {
    settings: Settings,
}

impl NextCommand {
    /// Create a new next command.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

impl Command for NextCommand {
    fn execute(
        &self,
        git: &mut dyn GitBackend,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let runner = GitRunner::new(git, self.settings.debug);
        Session::new(runner, &self.settings).next(ui)?;
        Ok(())
    }
}

/// The done command implementation.
pub struct DoneCommand {
    settings: Settings,
}

impl DoneCommand {
    /// Create a new done command.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

impl Command for DoneCommand {
    fn execute(
        &self,
        git: &mut dyn GitBackend,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let runner = GitRunner::new(git, self.settings.debug);
        Session::new(runner, &self.settings).done(ui)?;
        Ok(())
    }
}

/// The reset command implementation.
pub struct ResetCommand {
    settings: Settings,
}

impl ResetCommand {
    /// Create a new reset command.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

impl Command for ResetCommand {
    fn execute(
        &self,
        git: &mut dyn GitBackend,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let runner = GitRunner::new(git, self.settings.debug);
        Session::new(runner, &self.settings).reset(ui)?;
        Ok(())
    }
}
