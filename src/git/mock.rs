//! In-memory git repository for testing.
//!
//! `MockGit` implements [`GitBackend`] by simulating the handful of git
//! commands mob issues against a tiny model of a clone: local branches,
//! branches on one remote, the checked-out branch, upstream tracking and a
//! dirty working tree. Output is shaped like real git output so that the
//! textual predicates run against it unchanged. Every invocation is recorded.
//!
//! # Example
//!
//! ```
//! use mob::git::{GitBackend, MockGit};
//!
//! let mut git = MockGit::new().with_remote_branch("mob-session");
//! let listing = git.exec(&["branch", "--remotes"]).unwrap();
//!
//! assert!(listing.output.contains("  origin/mob-session"));
//! assert_eq!(git.cmdlines(), ["git branch --remotes"]);
//! ```

use std::collections::BTreeMap;

use crate::error::Result;

use super::backend::{GitBackend, GitOutput};
use super::cmdline;

const BASE: &str = "master";
const AUTHOR: &str = "Mob Tester";

/// Commands that only read repository state.
const QUERIES: &[&[&str]] = &[
    &["status", "--short"],
    &["branch"],
    &["branch", "--remotes"],
    &["fetch"],
];

/// Simulated git clone with a single remote.
#[derive(Debug, Clone)]
pub struct MockGit {
    remote_name: String,
    local: BTreeMap<String, Vec<String>>,
    remote: BTreeMap<String, Vec<String>>,
    upstream: BTreeMap<String, String>,
    current: String,
    dirty: Vec<String>,
    staged: bool,
    squashed: Option<String>,
    failures: Vec<String>,
    calls: Vec<Vec<String>>,
}

impl Default for MockGit {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGit {
    /// A clean clone of `origin` with only `master`, checked out.
    pub fn new() -> Self {
        let initial = vec!["initial commit".to_string()];
        let mut local = BTreeMap::new();
        local.insert(BASE.to_string(), initial.clone());
        let mut remote = BTreeMap::new();
        remote.insert(BASE.to_string(), initial);
        let mut upstream = BTreeMap::new();
        upstream.insert(BASE.to_string(), format!("origin/{BASE}"));

        Self {
            remote_name: "origin".to_string(),
            local,
            remote,
            upstream,
            current: BASE.to_string(),
            dirty: Vec::new(),
            staged: false,
            squashed: None,
            failures: Vec::new(),
            calls: Vec::new(),
        }
    }

    /// Add a local branch forked from `master`.
    pub fn with_local_branch(mut self, name: &str) -> Self {
        let commits = self.local[BASE].clone();
        self.local.entry(name.to_string()).or_insert(commits);
        self
    }

    /// Add a branch on the remote forked from `master`.
    pub fn with_remote_branch(mut self, name: &str) -> Self {
        let commits = self.remote[BASE].clone();
        self.remote.entry(name.to_string()).or_insert(commits);
        self
    }

    /// Add a commit to an existing remote branch.
    pub fn with_remote_commit(mut self, branch: &str, message: &str) -> Self {
        if let Some(commits) = self.remote.get_mut(branch) {
            commits.push(message.to_string());
        }
        self
    }

    /// Add a commit to an existing local branch.
    pub fn with_local_commit(mut self, branch: &str, message: &str) -> Self {
        if let Some(commits) = self.local.get_mut(branch) {
            commits.push(message.to_string());
        }
        self
    }

    /// Check out `name`, creating it locally if needed.
    pub fn on_branch(mut self, name: &str) -> Self {
        self = self.with_local_branch(name);
        self.current = name.to_string();
        self
    }

    /// Mark files as modified in the working tree.
    pub fn with_dirty_files(mut self, files: &[&str]) -> Self {
        self.dirty.extend(files.iter().map(|f| f.to_string()));
        self
    }

    /// Make every invocation whose command line starts with `git <prefix>` fail.
    pub fn fail_on(mut self, prefix: &str) -> Self {
        self.failures.push(cmdline(&[prefix]));
        self
    }

    /// Every invocation so far, as argument vectors.
    pub fn calls(&self) -> &[Vec<String>] {
        &self.calls
    }

    /// Every invocation so far, as echoed command lines.
    pub fn cmdlines(&self) -> Vec<String> {
        self.calls
            .iter()
            .map(|args| {
                let args: Vec<&str> = args.iter().map(String::as_str).collect();
                cmdline(&args)
            })
            .collect()
    }

    /// Invocations that could change repository state.
    pub fn mutating_cmdlines(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter(|args| !is_query(args))
            .map(|args| {
                let args: Vec<&str> = args.iter().map(String::as_str).collect();
                cmdline(&args)
            })
            .collect()
    }

    /// Forget recorded invocations.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// The checked-out branch.
    pub fn current_branch(&self) -> &str {
        &self.current
    }

    /// Whether `name` exists locally.
    pub fn has_local(&self, name: &str) -> bool {
        self.local.contains_key(name)
    }

    /// Whether `name` exists on the remote.
    pub fn has_remote(&self, name: &str) -> bool {
        self.remote.contains_key(name)
    }

    /// The upstream configured for a local branch, e.g. `origin/mob-session`.
    pub fn upstream_of(&self, name: &str) -> Option<&str> {
        self.upstream.get(name).map(String::as_str)
    }

    /// Commit messages on a local branch, oldest first.
    pub fn local_commits(&self, name: &str) -> &[String] {
        self.local.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Commit messages on a remote branch, oldest first.
    pub fn remote_commits(&self, name: &str) -> &[String] {
        self.remote.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the working tree has modifications.
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Branch most recently squash-merged and left uncommitted.
    pub fn squashed(&self) -> Option<&str> {
        self.squashed.as_deref()
    }

    fn remote_ref(&self, name: &str) -> String {
        format!("{}/{}", self.remote_name, name)
    }

    fn strip_remote<'a>(&self, reference: &'a str) -> Option<&'a str> {
        reference
            .strip_prefix(self.remote_name.as_str())
            .and_then(|r| r.strip_prefix('/'))
    }

    fn status(&self) -> GitOutput {
        let lines: String = self.dirty.iter().map(|f| format!(" M {f}\n")).collect();
        GitOutput::success(lines)
    }

    fn list_local(&self) -> GitOutput {
        let lines: String = self
            .local
            .keys()
            .map(|name| {
                let marker = if *name == self.current { '*' } else { ' ' };
                format!("{marker} {name}\n")
            })
            .collect();
        GitOutput::success(lines)
    }

    fn list_remote(&self) -> GitOutput {
        let lines: String = self
            .remote
            .keys()
            .map(|name| format!("  {}\n", self.remote_ref(name)))
            .collect();
        GitOutput::success(lines)
    }

    fn checkout(&mut self, name: &str) -> GitOutput {
        if self.local.contains_key(name) {
            self.current = name.to_string();
            return GitOutput::success(format!("Switched to branch '{name}'\n"));
        }
        if let Some(commits) = self.remote.get(name).cloned() {
            let tracking = self.remote_ref(name);
            self.local.insert(name.to_string(), commits);
            self.upstream.insert(name.to_string(), tracking.clone());
            self.current = name.to_string();
            return GitOutput::success(format!(
                "branch '{name}' set up to track '{tracking}'.\nSwitched to a new branch '{name}'\n"
            ));
        }
        GitOutput::failure(
            Some(1),
            format!("error: pathspec '{name}' did not match any file(s) known to git\n"),
        )
    }

    fn merge(&mut self, reference: &str) -> GitOutput {
        let incoming = match self.strip_remote(reference) {
            Some(name) => self.remote.get(name).cloned(),
            None => self.local.get(reference).cloned(),
        };
        let Some(incoming) = incoming else {
            return GitOutput::failure(
                Some(1),
                format!("merge: {reference} - not something we can merge\n"),
            );
        };
        let Some(ours) = self.local.get_mut(&self.current) else {
            return GitOutput::failure(Some(128), "fatal: HEAD does not point to a branch\n");
        };
        let before = ours.len();
        for commit in incoming.iter().skip(common_prefix(ours, &incoming)) {
            ours.push(commit.clone());
        }
        if ours.len() == before {
            GitOutput::success("Already up to date.\n")
        } else {
            GitOutput::success("Fast-forward\n")
        }
    }

    fn squash(&mut self, name: &str) -> GitOutput {
        if !self.local.contains_key(name) {
            return GitOutput::failure(
                Some(1),
                format!("merge: {name} - not something we can merge\n"),
            );
        }
        self.squashed = Some(name.to_string());
        GitOutput::success("Squash commit -- not updating HEAD\n")
    }

    fn create_branch(&mut self, name: &str) -> GitOutput {
        if self.local.contains_key(name) {
            return GitOutput::failure(
                Some(128),
                format!("fatal: a branch named '{name}' already exists\n"),
            );
        }
        let commits = self.local_commits(&self.current).to_vec();
        self.local.insert(name.to_string(), commits);
        GitOutput::success("")
    }

    fn delete_branch(&mut self, name: &str) -> GitOutput {
        if name == self.current {
            return GitOutput::failure(
                Some(1),
                format!("error: Cannot delete branch '{name}' checked out\n"),
            );
        }
        if self.local.remove(name).is_none() {
            return GitOutput::failure(Some(1), format!("error: branch '{name}' not found.\n"));
        }
        self.upstream.remove(name);
        GitOutput::success(format!("Deleted branch {name}.\n"))
    }

    fn set_upstream(&mut self, reference: &str, name: &str) -> GitOutput {
        let exists = self
            .strip_remote(reference)
            .is_some_and(|remote| self.remote.contains_key(remote));
        if !exists || !self.local.contains_key(name) {
            return GitOutput::failure(
                Some(128),
                format!("fatal: the requested upstream branch '{reference}' does not exist\n"),
            );
        }
        self.upstream.insert(name.to_string(), reference.to_string());
        GitOutput::success(format!(
            "branch '{name}' set up to track '{reference}'.\n"
        ))
    }

    fn push(&mut self, name: &str, track: bool) -> GitOutput {
        let Some(commits) = self.local.get(name).cloned() else {
            return GitOutput::failure(
                Some(1),
                format!("error: src refspec {name} does not match any\n"),
            );
        };
        if let Some(theirs) = self.remote.get(name) {
            if common_prefix(theirs, &commits) < theirs.len() {
                return GitOutput::failure(
                    Some(1),
                    format!("! [rejected] {name} -> {name} (non-fast-forward)\n"),
                );
            }
        }
        self.remote.insert(name.to_string(), commits);
        if track {
            let tracking = self.remote_ref(name);
            self.upstream.insert(name.to_string(), tracking);
        }
        GitOutput::success(format!(" * {name} -> {name}\n"))
    }

    fn delete_remote(&mut self, name: &str) -> GitOutput {
        if self.remote.remove(name).is_none() {
            return GitOutput::failure(
                Some(1),
                format!("error: unable to delete '{name}': remote ref does not exist\n"),
            );
        }
        GitOutput::success(format!(" - [deleted]         {name}\n"))
    }

    fn commit(&mut self, message: &str) -> GitOutput {
        if self.dirty.is_empty() || !self.staged {
            return GitOutput::failure(Some(1), "nothing to commit, working tree clean\n");
        }
        let current = self.current.clone();
        self.local
            .entry(current)
            .or_default()
            .push(message.to_string());
        self.dirty.clear();
        self.staged = false;
        GitOutput::success(format!("[{}] {message}\n", self.current))
    }

    fn log(&self, range: &str) -> GitOutput {
        let Some((base, head)) = range.split_once("..") else {
            return GitOutput::failure(Some(128), format!("fatal: bad revision '{range}'\n"));
        };
        let (Some(base), Some(head)) = (self.local.get(base), self.local.get(head)) else {
            return GitOutput::failure(
                Some(128),
                format!("fatal: ambiguous argument '{range}': unknown revision\n"),
            );
        };
        let shared = common_prefix(base, head);
        let lines: Vec<String> = head
            .iter()
            .enumerate()
            .skip(shared)
            .rev()
            .map(|(i, _)| format!("{:07x} {} minutes ago <{AUTHOR}>", 0xa1b2c00 + i, i))
            .collect();
        GitOutput::success(lines.join("\n"))
    }
}

impl GitBackend for MockGit {
    fn exec(&mut self, args: &[&str]) -> Result<GitOutput> {
        self.calls.push(args.iter().map(|a| a.to_string()).collect());

        let line = cmdline(args);
        if self.failures.iter().any(|prefix| line.starts_with(prefix)) {
            return Ok(GitOutput::failure(
                Some(1),
                format!("fatal: simulated failure of '{line}'\n"),
            ));
        }

        let remote = self.remote_name.clone();
        let output = match args {
            ["status", "--short"] => self.status(),
            ["branch"] => self.list_local(),
            ["branch", "--remotes"] => self.list_remote(),
            ["fetch"] => GitOutput::success(""),
            ["checkout", name] => self.checkout(name),
            ["merge", "--squash", name] => self.squash(name),
            ["merge", reference] => self.merge(reference),
            ["branch", "-D", name] => self.delete_branch(name),
            ["branch", flag, name] if flag.starts_with("--set-upstream-to=") => {
                let reference = flag.trim_start_matches("--set-upstream-to=");
                self.set_upstream(reference, name)
            }
            ["branch", name] => self.create_branch(name),
            ["push", "--set-upstream", r, name] if *r == remote => self.push(name, true),
            ["push", r, "--delete", name] if *r == remote => self.delete_remote(name),
            ["push", r, name] if *r == remote => self.push(name, false),
            ["add", ".", "--all"] => {
                self.staged = true;
                GitOutput::success("")
            }
            ["commit", "--message", message] => self.commit(message),
            ["--no-pager", "log", range, ..] => self.log(range),
            _ => GitOutput::failure(Some(1), format!("git: '{line}' is not simulated\n")),
        };
        Ok(output)
    }
}

fn is_query(args: &[String]) -> bool {
    QUERIES
        .iter()
        .any(|q| q.len() == args.len() && q.iter().zip(args).all(|(a, b)| a == b))
        || args.get(1).is_some_and(|a| a == "log")
}

fn common_prefix(a: &[String], b: &[String]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
