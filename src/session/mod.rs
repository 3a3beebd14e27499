//! The mob session lifecycle.
//!
//! A session is nothing but a shared branch. Whether it exists locally,
//! remotely, or is checked out is re-derived from git on every query; no
//! state is kept between invocations or even between two checks of the same
//! invocation.
//!
//! - [`predicates`] - the four questions asked of git
//! - [`machine`] - `start`, `next`, `done` and `reset`
//! - [`status`] - the read-only status report

pub mod machine;
pub mod predicates;
pub mod status;

pub use machine::StartPath;
pub use status::{CommitSummary, SessionStatus};

use crate::git::GitRunner;
use crate::settings::Settings;

/// Fixed commit message for hand-over commits.
pub const WIP_MESSAGE: &str = "WIP in Mob Session [ci-skip]";

/// Fixed commit message for the final commit of a session.
pub const DONE_MESSAGE: &str = "Mob Session DONE [ci-skip]";

/// Session operations bound to one git runner and one set of settings.
pub struct Session<'a> {
    git: GitRunner<'a>,
    settings: &'a Settings,
}

impl<'a> Session<'a> {
    /// Create a session handle.
    pub fn new(git: GitRunner<'a>, settings: &'a Settings) -> Self {
        Self { git, settings }
    }
}
