//! Timer command implementation.
//!
//! `mob timer <minutes>` only starts a timer; it does not report status.

use crate::cli::args::TimerArgs;
use crate::error::Result;
use crate::git::GitBackend;
use crate::settings::Settings;
use crate::timer::Timer;
use crate::ui::UserInterface;

use super::dispatcher::Command;

/// The timer command implementation.
pub struct TimerCommand {
    settings: Settings,
    args: TimerArgs,
}

impl TimerCommand {
    /// Create a new timer command.
    pub fn new(settings: Settings, args: TimerArgs) -> Self {
        Self { settings, args }
    }
}

impl Command for TimerCommand {
    fn execute(
        &self,
        _git: &mut dyn GitBackend,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        if let Some(minutes) = &self.args.minutes {
            Timer::new(&self.settings.timer_notify, self.settings.debug).start(ui, minutes);
        }
        Ok(())
    }
}
