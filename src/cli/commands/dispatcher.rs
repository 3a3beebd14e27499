//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands, StatusArgs};
use crate::error::Result;
use crate::git::GitBackend;
use crate::settings::Settings;
use crate::ui::UserInterface;

use super::completions::CompletionsCommand;
use super::help::HelpCommand;
use super::lifecycle::{DoneCommand, NextCommand, ResetCommand, StartCommand};
use super::status::StatusCommand;
use super::timer::TimerCommand;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `git` - Backend every git invocation goes through
    /// * `ui` - User interface for displaying output
    fn execute(
        &self,
        git: &mut dyn GitBackend,
        ui: &mut dyn UserInterface,
    ) -> Result<()>;
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    settings: Settings,
}

impl CommandDispatcher {
    /// Create a new dispatcher with resolved settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Dispatch and execute a command.
    ///
    /// Session commands are always followed by a status report. Timer, help
    /// and completions are not.
    pub fn dispatch(
        &self,
        cli: &Cli,
        git: &mut dyn GitBackend,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let settings = self.settings.clone();
        match &cli.command {
            Some(Commands::Start(args)) => {
                StartCommand::new(settings, args.clone()).execute(git, ui)?;
                self.status(git, ui)
            }
            Some(Commands::Next(_)) => {
                NextCommand::new(settings).execute(git, ui)?;
                self.status(git, ui)
            }
            Some(Commands::Done(_)) => {
                DoneCommand::new(settings).execute(git, ui)?;
                self.status(git, ui)
            }
            Some(Commands::Reset(_)) => {
                ResetCommand::new(settings).execute(git, ui)?;
                self.status(git, ui)
            }
            Some(Commands::Timer(args)) => {
                TimerCommand::new(settings, args.clone()).execute(git, ui)
            }
            Some(Commands::Status(args)) => {
                StatusCommand::new(settings, args.clone()).execute(git, ui)
            }
            Some(Commands::Help(_)) => HelpCommand::new().execute(git, ui),
            Some(Commands::Completions(args)) => {
                CompletionsCommand::new(args.clone()).execute(git, ui)
            }
            None => self.fallback(git, ui),
        }
    }

    /// What runs for a missing or unrecognized command: status, then usage.
    pub fn fallback(
        &self,
        git: &mut dyn GitBackend,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        self.status(git, ui)?;
        HelpCommand::new().execute(git, ui)
    }

    fn status(
        &self,
        git: &mut dyn GitBackend,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        StatusCommand::new(self.settings.clone(), StatusArgs::default()).execute(git, ui)
    }
}
