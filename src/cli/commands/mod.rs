//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations and appends the status report
//! after every session command.

pub mod completions;
pub mod dispatcher;
pub mod help;
pub mod lifecycle;
pub mod status;
pub mod timer;

pub use dispatcher::{Command, CommandDispatcher};
