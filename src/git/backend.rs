//! The capability through which mob talks to git.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::{MobError, Result};

/// Outcome of one git invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitOutput {
    /// Exit code (None if killed by signal).
    pub code: Option<i32>,

    /// Combined output: stdout followed by stderr.
    pub output: String,

    /// Whether git exited with status 0.
    pub success: bool,
}

impl GitOutput {
    /// Create a success result.
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            output: output.into(),
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(code: Option<i32>, output: impl Into<String>) -> Self {
        Self {
            code,
            output: output.into(),
            success: false,
        }
    }
}

/// Executes git with an argument vector.
///
/// Implementations return `Ok` for any invocation that ran, successful or
/// not; `Err` is reserved for git not being launchable at all.
pub trait GitBackend {
    /// Run `git <args>` to completion.
    fn exec(&mut self, args: &[&str]) -> Result<GitOutput>;
}

/// Runs the real `git` binary.
#[derive(Debug, Clone, Default)]
pub struct CliGit {
    cwd: Option<PathBuf>,
}

impl CliGit {
    /// Run git in the current working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git in the given directory.
    pub fn in_dir(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: Some(cwd.into()),
        }
    }
}

impl GitBackend for CliGit {
    fn exec(&mut self, args: &[&str]) -> Result<GitOutput> {
        let mut cmd = Command::new("git");
        cmd.args(args);
        cmd.stdin(Stdio::null());

        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }

        let output = cmd.output().map_err(|e| MobError::GitFailed {
            command: super::cmdline(args),
            code: None,
            output: e.to_string(),
        })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        if output.status.success() {
            Ok(GitOutput::success(combined))
        } else {
            Ok(GitOutput::failure(output.status.code(), combined))
        }
    }
}
