//! Runs git commands with mob's echo and failure policy.
//!
//! Two flavours exist. [`GitRunner::visible`] echoes the command line before
//! running it; [`GitRunner::silent`] only does so in debug mode. Debug mode
//! additionally echoes every captured output. Any non-zero exit is turned
//! into [`MobError::GitFailed`], which callers propagate unchanged.

use tracing::{debug, warn};

use crate::error::{MobError, Result};
use crate::ui::UserInterface;

use super::backend::GitBackend;
use super::cmdline;

/// How loudly a git invocation is announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Echo {
    /// Queries; shown only in debug mode.
    Silent,
    /// Mutations; always shown.
    Visible,
}

/// Applies the echo and failure policy around a [`GitBackend`].
pub struct GitRunner<'a> {
    backend: &'a mut dyn GitBackend,
    debug: bool,
}

impl<'a> GitRunner<'a> {
    /// Create a runner over the given backend.
    pub fn new(backend: &'a mut dyn GitBackend, debug: bool) -> Self {
        Self { backend, debug }
    }

    /// Run a query. On failure the captured output is shown before the error
    /// is returned.
    pub fn silent(&mut self, ui: &mut dyn UserInterface, args: &[&str]) -> Result<String> {
        self.run(ui, args, Echo::Silent)
    }

    /// Run a mutation, announcing it first.
    pub fn visible(&mut self, ui: &mut dyn UserInterface, args: &[&str]) -> Result<String> {
        self.run(ui, args, Echo::Visible)
    }

    /// Run `git <args>` with the given echo policy.
    pub fn run(&mut self, ui: &mut dyn UserInterface, args: &[&str], echo: Echo) -> Result<String> {
        let command = cmdline(args);

        if self.debug || echo == Echo::Visible {
            ui.command(&command);
        }

        debug!(%command, ?echo, "running git");
        let result = self.backend.exec(args)?;

        if self.debug {
            ui.command_output(&result.output);
        }

        if !result.success {
            warn!(%command, code = ?result.code, "git failed");
            if echo == Echo::Silent && !self.debug {
                ui.command_output(&result.output);
            }
            return Err(MobError::GitFailed {
                command,
                code: result.code,
                output: result.output,
            });
        }

        Ok(result.output)
    }
}
