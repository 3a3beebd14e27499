//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

/// mob - Fast git handover for remote mob programming.
#[derive(Debug, Parser)]
#[command(name = "mob")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_subcommand = true, disable_help_flag = true)]
pub struct Cli {
    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Echo every git command and its output (same as setting MOB_DEBUG)
    #[arg(long, global = true)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start mobbing as typist
    #[command(visible_alias = "s")]
    Start(StartArgs),

    /// Hand over to the next typist
    #[command(visible_alias = "n")]
    Next(PlainArgs),

    /// Finish the mob session
    #[command(visible_alias = "d")]
    Done(PlainArgs),

    /// Reset any unfinished mob session
    #[command(visible_alias = "r")]
    Reset(PlainArgs),

    /// Start a hand-over timer
    #[command(visible_alias = "t")]
    Timer(TimerArgs),

    /// Show status of the mob session
    Status(StatusArgs),

    /// Print usage
    #[command(visible_alias = "h")]
    Help(PlainArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for commands without a value of their own.
///
/// A trailing word is accepted and ignored.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PlainArgs {
    #[arg(hide = true)]
    pub ignored: Option<String>,
}

/// Arguments for the `start` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StartArgs {
    /// Also start a timer for this many minutes
    #[arg(allow_hyphen_values = true)]
    pub minutes: Option<String>,
}

/// Arguments for the `timer` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TimerArgs {
    /// Minutes until the timer goes off
    #[arg(allow_hyphen_values = true)]
    pub minutes: Option<String>,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(hide = true)]
    pub ignored: Option<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
