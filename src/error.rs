//! Error types for mob operations.
//!
//! This module defines [`MobError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A failing git invocation is always fatal: it surfaces as
//!   [`MobError::GitFailed`], propagates to `main` and becomes exit code 1
//! - A timer that cannot be spawned is a [`MobError::Spawn`]; the timer
//!   reports it as a warning and mob carries on
//! - Guard violations (dirty tree, not mobbing) are not errors; commands
//!   report them to the user and carry on
//! - Use `anyhow::Error` (via `MobError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for mob operations.
#[derive(Debug, Error)]
pub enum MobError {
    /// A git command exited unsuccessfully or could not be launched.
    #[error("git command failed with exit code {code:?}: {command}")]
    GitFailed {
        command: String,
        code: Option<i32>,
        output: String,
    },

    /// A background process could not be spawned.
    #[error("Failed to spawn '{command}': {message}")]
    Spawn { command: String, message: String },

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for mob operations.
pub type Result<T> = std::result::Result<T, MobError>;
