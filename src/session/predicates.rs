//! Status predicates.
//!
//! Each predicate runs one git query and checks its text output by plain
//! substring containment. A branch whose name extends the session branch
//! name (e.g. `mob-session-old`) therefore also counts as a match.

use crate::error::Result;
use crate::ui::UserInterface;

use super::Session;

/// True if `git status --short` output shows no changes.
pub fn tree_is_clean(status_output: &str) -> bool {
    status_output.trim().is_empty()
}

/// True if `git branch` output shows `branch` checked out.
pub fn lists_current_branch(branch_output: &str, branch: &str) -> bool {
    branch_output.contains(&format!("* {branch}"))
}

/// True if `git branch` output lists `branch`, checked out or not.
pub fn lists_local_branch(branch_output: &str, branch: &str) -> bool {
    branch_output.contains(&format!("  {branch}")) || lists_current_branch(branch_output, branch)
}

/// True if `git branch --remotes` output lists `remote/branch`.
pub fn lists_remote_branch(remotes_output: &str, remote: &str, branch: &str) -> bool {
    remotes_output.contains(&format!("  {remote}/{branch}"))
}

impl Session<'_> {
    /// Whether the working tree has no pending changes.
    pub fn is_nothing_to_commit(&mut self, ui: &mut dyn UserInterface) -> Result<bool> {
        let output = self.git.silent(ui, &["status", "--short"])?;
        Ok(tree_is_clean(&output))
    }

    /// Whether the session branch is checked out.
    pub fn is_mobbing(&mut self, ui: &mut dyn UserInterface) -> Result<bool> {
        let output = self.git.silent(ui, &["branch"])?;
        Ok(lists_current_branch(&output, &self.settings.branch))
    }

    /// Whether the session branch exists locally.
    pub fn has_mobbing_branch(&mut self, ui: &mut dyn UserInterface) -> Result<bool> {
        let output = self.git.silent(ui, &["branch"])?;
        Ok(lists_local_branch(&output, &self.settings.branch))
    }

    /// Whether the session branch exists on the remote. Fetches first.
    pub fn has_mobbing_branch_origin(&mut self, ui: &mut dyn UserInterface) -> Result<bool> {
        self.git.silent(ui, &["fetch"])?;
        let output = self.git.silent(ui, &["branch", "--remotes"])?;
        Ok(lists_remote_branch(
            &output,
            &self.settings.remote,
            &self.settings.branch,
        ))
    }
}
