//! mob - Fast git handover for remote mob programming.
//!
//! A mob session is a shared git branch. `mob start` creates or joins it,
//! `mob next` commits and pushes whatever the typist did and hands over,
//! `mob done` squashes the session onto the base branch, and `mob reset`
//! throws an abandoned session away. All state lives in git; mob only
//! drives the `git` command line.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`git`] - Running git and the in-memory test repository
//! - [`session`] - The session state machine and status report
//! - [`settings`] - Settings resolved from `MOB_*` environment variables
//! - [`timer`] - Detached hand-over timer
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use mob::git::{GitRunner, MockGit};
//! use mob::session::{Session, StartPath};
//! use mob::settings::Settings;
//! use mob::ui::MockUI;
//!
//! let settings = Settings::default();
//! let mut git = MockGit::new();
//! let mut ui = MockUI::new();
//!
//! let mut session = Session::new(GitRunner::new(&mut git, false), &settings);
//! let path = session.start(&mut ui).unwrap();
//! assert_eq!(path, Some(StartPath::CreateFresh));
//! assert!(session.status(&mut ui).unwrap().mobbing);
//! ```

pub mod cli;
pub mod error;
pub mod git;
pub mod session;
pub mod settings;
pub mod timer;
pub mod ui;

pub use error::{MobError, Result};
