//! Session state machine.
//!
//! Every operation is a fixed sequence of git commands. The only decisions
//! are made by the predicates, which are asked afresh each time.

use std::fmt;

use tracing::{debug, info};

use crate::error::Result;
use crate::ui::UserInterface;

use super::{Session, DONE_MESSAGE, WIP_MESSAGE};

/// Which of the four branch-state combinations `start` found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartPath {
    /// Local and remote session branch exist.
    Rejoin,
    /// No session branch anywhere.
    CreateFresh,
    /// Only the remote session branch exists.
    Join,
    /// Only a stale local session branch exists.
    PurgeAndRecreate,
}

impl StartPath {
    /// Pick the path for the given branch existence.
    pub fn select(has_local: bool, has_remote: bool) -> Self {
        match (has_local, has_remote) {
            (true, true) => Self::Rejoin,
            (false, false) => Self::CreateFresh,
            (false, true) => Self::Join,
            (true, false) => Self::PurgeAndRecreate,
        }
    }
}

impl fmt::Display for StartPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rejoin => "rejoin",
            Self::CreateFresh => "create-fresh",
            Self::Join => "join",
            Self::PurgeAndRecreate => "purge-and-recreate",
        };
        f.write_str(name)
    }
}

impl Session<'_> {
    /// Start or join the session.
    ///
    /// Returns `None` without touching the repository when the working tree
    /// is dirty.
    pub fn start(&mut self, ui: &mut dyn UserInterface) -> Result<Option<StartPath>> {
        if !self.is_nothing_to_commit(ui)? {
            ui.warning("uncommitted changes, aborting 'mob start'");
            return Ok(None);
        }

        self.git.visible(ui, &["fetch"])?;

        let has_local = self.has_mobbing_branch(ui)?;
        let has_remote = self.has_mobbing_branch_origin(ui)?;
        let path = StartPath::select(has_local, has_remote);
        info!(%path, has_local, has_remote, "starting session");

        let settings = self.settings;
        let branch = settings.branch.as_str();
        match path {
            StartPath::Rejoin => {
                ui.message("rejoining mob session");
                let remote_branch = settings.remote_branch();
                let upstream = format!("--set-upstream-to={remote_branch}");
                self.git.visible(ui, &["checkout", branch])?;
                self.git.visible(ui, &["merge", &remote_branch])?;
                self.git.visible(ui, &["branch", &upstream, branch])?;
            }
            StartPath::CreateFresh => {
                ui.message(&format!(
                    "create {} from {}",
                    branch, settings.base_branch
                ));
                self.create_from_base(ui)?;
            }
            StartPath::Join => {
                ui.message("joining mob session");
                self.git.visible(ui, &["checkout", branch])?;
            }
            StartPath::PurgeAndRecreate => {
                ui.message(&format!(
                    "purging local branch and start new mob session from {}",
                    settings.base_branch
                ));
                self.git.visible(ui, &["branch", "-D", branch])?;
                self.create_from_base(ui)?;
            }
        }

        ui.success("start hacking");
        Ok(Some(path))
    }

    /// Hand over to the next typist.
    ///
    /// Returns `false` when not mobbing.
    pub fn next(&mut self, ui: &mut dyn UserInterface) -> Result<bool> {
        if !self.is_mobbing(ui)? {
            ui.warning("nothing was done, because you aren't mobbing");
            return Ok(false);
        }

        let settings = self.settings;
        if self.is_nothing_to_commit(ui)? {
            ui.message("nothing was done, so nothing to commit");
        } else {
            self.commit_all(ui, WIP_MESSAGE)?;
            self.git
                .visible(ui, &["push", &settings.remote, &settings.branch])?;
        }

        self.git.visible(ui, &["checkout", &settings.base_branch])?;
        ui.success("join the 'rest of the mob'");
        Ok(true)
    }

    /// Finish the session, leaving a squash merge staged on the base branch.
    ///
    /// Returns `false` when not mobbing.
    pub fn done(&mut self, ui: &mut dyn UserInterface) -> Result<bool> {
        if !self.is_mobbing(ui)? {
            ui.warning("nothing was done, because you aren't mobbing");
            return Ok(false);
        }

        let settings = self.settings;
        let (remote, branch) = (settings.remote.as_str(), settings.branch.as_str());

        self.git.visible(ui, &["fetch"])?;

        if !self.is_nothing_to_commit(ui)? {
            self.commit_all(ui, DONE_MESSAGE)?;
        }
        self.git.visible(ui, &["push", remote, branch])?;

        self.git.visible(ui, &["checkout", &settings.base_branch])?;
        self.git.visible(ui, &["merge", "--squash", branch])?;

        self.git.visible(ui, &["branch", "-D", branch])?;
        self.git.visible(ui, &["push", remote, "--delete", branch])?;

        ui.success("lean back, you survived your mob session :-)");
        ui.message("execute 'git commit' to describe what the mob achieved");
        Ok(true)
    }

    /// Remove every trace of the session branch. Does not look at the
    /// working tree.
    pub fn reset(&mut self, ui: &mut dyn UserInterface) -> Result<()> {
        let settings = self.settings;
        let (remote, branch) = (settings.remote.as_str(), settings.branch.as_str());

        self.git.visible(ui, &["fetch"])?;
        self.git.visible(ui, &["checkout", &settings.base_branch])?;

        if self.has_mobbing_branch(ui)? {
            self.git.visible(ui, &["branch", "-D", branch])?;
        } else {
            debug!(branch, "no local session branch to delete");
        }

        if self.has_mobbing_branch_origin(ui)? {
            self.git.visible(ui, &["push", remote, "--delete", branch])?;
        } else {
            debug!(branch, remote, "no remote session branch to delete");
        }

        Ok(())
    }

    fn create_from_base(&mut self, ui: &mut dyn UserInterface) -> Result<()> {
        let settings = self.settings;
        let branch = settings.branch.as_str();

        self.git.visible(ui, &["checkout", &settings.base_branch])?;
        self.git
            .visible(ui, &["merge", &settings.remote_base_branch()])?;
        self.git.visible(ui, &["branch", branch])?;
        self.git.visible(ui, &["checkout", branch])?;
        self.git
            .visible(ui, &["push", "--set-upstream", &settings.remote, branch])?;
        Ok(())
    }

    fn commit_all(&mut self, ui: &mut dyn UserInterface, message: &str) -> Result<()> {
        self.git.visible(ui, &["add", ".", "--all"])?;
        self.git.visible(ui, &["commit", "--message", message])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MobError;
    use crate::git::{GitRunner, MockGit};
    use crate::settings::Settings;
    use crate::ui::MockUI;

    const BRANCH: &str = "mob-session";

    fn with_session<T>(
        git: &mut MockGit,
        ui: &mut MockUI,
        op: impl FnOnce(&mut Session<'_>, &mut MockUI) -> T,
    ) -> T {
        let settings = Settings::default();
        let mut session = Session::new(GitRunner::new(git, false), &settings);
        op(&mut session, ui)
    }

    fn assert_tracking_session(git: &MockGit) {
        assert!(git.has_local(BRANCH));
        assert!(git.has_remote(BRANCH));
        assert_eq!(git.upstream_of(BRANCH), Some("origin/mob-session"));
        assert_eq!(git.current_branch(), BRANCH);
    }

    #[test]
    fn select_covers_all_combinations() {
        assert_eq!(StartPath::select(true, true), StartPath::Rejoin);
        assert_eq!(StartPath::select(false, false), StartPath::CreateFresh);
        assert_eq!(StartPath::select(false, true), StartPath::Join);
        assert_eq!(StartPath::select(true, false), StartPath::PurgeAndRecreate);
    }

    #[test]
    fn start_with_dirty_tree_only_checks_status() {
        let mut git = MockGit::new().with_dirty_files(&["a.txt"]);
        let mut ui = MockUI::new();

        let path = with_session(&mut git, &mut ui, |s, ui| s.start(ui)).unwrap();

        assert_eq!(path, None);
        assert_eq!(git.cmdlines(), ["git status --short"]);
        assert!(ui.has_warning("uncommitted changes, aborting 'mob start'"));
        assert!(!ui.has_success("start hacking"));
        assert!(!git.has_local(BRANCH));
    }

    #[test]
    fn start_fresh_creates_branch_everywhere() {
        let mut git = MockGit::new();
        let mut ui = MockUI::new();

        let path = with_session(&mut git, &mut ui, |s, ui| s.start(ui)).unwrap();

        assert_eq!(path, Some(StartPath::CreateFresh));
        assert_tracking_session(&git);
        assert!(ui.has_message("create mob-session from master"));
        assert!(ui.has_success("start hacking"));
        assert_eq!(
            git.mutating_cmdlines(),
            [
                "git checkout master",
                "git merge origin/master",
                "git branch mob-session",
                "git checkout mob-session",
                "git push --set-upstream origin mob-session",
            ]
        );
    }

    #[test]
    fn start_joins_remote_session() {
        let mut git = MockGit::new()
            .with_remote_branch(BRANCH)
            .with_remote_commit(BRANCH, "WIP in Mob Session [ci-skip]");
        let mut ui = MockUI::new();

        let path = with_session(&mut git, &mut ui, |s, ui| s.start(ui)).unwrap();

        assert_eq!(path, Some(StartPath::Join));
        assert_tracking_session(&git);
        assert_eq!(git.mutating_cmdlines(), ["git checkout mob-session"]);
        assert_eq!(git.local_commits(BRANCH), git.remote_commits(BRANCH));
        assert!(ui.has_message("joining mob session"));
    }

    #[test]
    fn start_rejoins_and_merges_remote_work() {
        let mut git = MockGit::new()
            .with_local_branch(BRANCH)
            .with_remote_branch(BRANCH)
            .with_remote_commit(BRANCH, "from teammate");
        let mut ui = MockUI::new();

        let path = with_session(&mut git, &mut ui, |s, ui| s.start(ui)).unwrap();

        assert_eq!(path, Some(StartPath::Rejoin));
        assert_tracking_session(&git);
        assert_eq!(
            git.mutating_cmdlines(),
            [
                "git checkout mob-session",
                "git merge origin/mob-session",
                "git branch --set-upstream-to=origin/mob-session mob-session",
            ]
        );
        assert!(git
            .local_commits(BRANCH)
            .contains(&"from teammate".to_string()));
        assert!(ui.has_message("rejoining mob session"));
    }

    #[test]
    fn start_purges_stale_local_branch() {
        let mut git = MockGit::new()
            .with_local_branch(BRANCH)
            .with_local_commit(BRANCH, "stale work");
        let mut ui = MockUI::new();

        let path = with_session(&mut git, &mut ui, |s, ui| s.start(ui)).unwrap();

        assert_eq!(path, Some(StartPath::PurgeAndRecreate));
        assert_tracking_session(&git);
        assert_eq!(git.mutating_cmdlines()[0], "git branch -D mob-session");
        assert!(!git
            .local_commits(BRANCH)
            .contains(&"stale work".to_string()));
        assert!(ui.has_message("purging local branch"));
    }

    #[test]
    fn start_aborts_when_fetch_fails() {
        let mut git = MockGit::new().fail_on("fetch");
        let mut ui = MockUI::new();

        let err = with_session(&mut git, &mut ui, |s, ui| s.start(ui)).unwrap_err();

        assert!(matches!(err, MobError::GitFailed { .. }));
        assert!(git.mutating_cmdlines().is_empty());
        assert!(!ui.has_success("start hacking"));
    }

    #[test]
    fn next_commits_pushes_and_returns_to_base() {
        let mut git = MockGit::new()
            .with_remote_branch(BRANCH)
            .on_branch(BRANCH)
            .with_dirty_files(&["a.txt", "b.txt"]);
        let mut ui = MockUI::new();

        let handed_over = with_session(&mut git, &mut ui, |s, ui| s.next(ui)).unwrap();

        assert!(handed_over);
        assert_eq!(
            git.mutating_cmdlines(),
            [
                "git add . --all",
                "git commit --message WIP in Mob Session [ci-skip]",
                "git push origin mob-session",
                "git checkout master",
            ]
        );
        assert_eq!(git.current_branch(), "master");
        assert!(!git.is_dirty());
        assert_eq!(
            git.remote_commits(BRANCH).last().map(String::as_str),
            Some(WIP_MESSAGE)
        );
        assert!(ui.has_success("join the 'rest of the mob'"));
    }

    #[test]
    fn next_with_clean_tree_skips_commit() {
        let mut git = MockGit::new().with_remote_branch(BRANCH).on_branch(BRANCH);
        let mut ui = MockUI::new();

        with_session(&mut git, &mut ui, |s, ui| s.next(ui)).unwrap();

        assert_eq!(git.mutating_cmdlines(), ["git checkout master"]);
        assert!(ui.has_message("nothing was done, so nothing to commit"));
        assert_eq!(git.current_branch(), "master");
    }

    #[test]
    fn next_when_not_mobbing_is_noop() {
        let mut git = MockGit::new().with_dirty_files(&["a.txt"]);
        let mut ui = MockUI::new();

        let handed_over = with_session(&mut git, &mut ui, |s, ui| s.next(ui)).unwrap();

        assert!(!handed_over);
        assert!(git.mutating_cmdlines().is_empty());
        assert!(git.is_dirty());
        assert!(ui.has_warning("you aren't mobbing"));
    }

    #[test]
    fn done_with_clean_tree_squashes_and_cleans_up() {
        let mut git = MockGit::new()
            .with_remote_branch(BRANCH)
            .with_remote_commit(BRANCH, WIP_MESSAGE)
            .on_branch(BRANCH)
            .with_local_commit(BRANCH, WIP_MESSAGE);
        let mut ui = MockUI::new();

        let finished = with_session(&mut git, &mut ui, |s, ui| s.done(ui)).unwrap();

        assert!(finished);
        assert_eq!(
            git.mutating_cmdlines(),
            [
                "git push origin mob-session",
                "git checkout master",
                "git merge --squash mob-session",
                "git branch -D mob-session",
                "git push origin --delete mob-session",
            ]
        );
        assert_eq!(git.current_branch(), "master");
        assert_eq!(git.squashed(), Some(BRANCH));
        assert!(!git.has_local(BRANCH));
        assert!(!git.has_remote(BRANCH));
        assert!(ui.has_message("execute 'git commit'"));
    }

    #[test]
    fn done_with_dirty_tree_commits_first() {
        let mut git = MockGit::new()
            .with_remote_branch(BRANCH)
            .on_branch(BRANCH)
            .with_dirty_files(&["a.txt"]);
        let mut ui = MockUI::new();

        with_session(&mut git, &mut ui, |s, ui| s.done(ui)).unwrap();

        let mutations = git.mutating_cmdlines();
        assert_eq!(mutations[0], "git add . --all");
        assert_eq!(mutations[1], "git commit --message Mob Session DONE [ci-skip]");
        assert_eq!(mutations[2], "git push origin mob-session");
        assert!(ui.has_success("lean back, you survived your mob session :-)"));
    }

    #[test]
    fn done_when_not_mobbing_is_noop() {
        let mut git = MockGit::new().with_local_branch(BRANCH);
        let mut ui = MockUI::new();

        let finished = with_session(&mut git, &mut ui, |s, ui| s.done(ui)).unwrap();

        assert!(!finished);
        assert!(git.mutating_cmdlines().is_empty());
        assert!(git.has_local(BRANCH));
    }

    #[test]
    fn reset_removes_both_branches() {
        let mut git = MockGit::new()
            .with_remote_branch(BRANCH)
            .on_branch(BRANCH)
            .with_dirty_files(&["ignored.txt"]);
        let mut ui = MockUI::new();

        with_session(&mut git, &mut ui, |s, ui| s.reset(ui)).unwrap();

        assert_eq!(git.current_branch(), "master");
        assert!(!git.has_local(BRANCH));
        assert!(!git.has_remote(BRANCH));
    }

    #[test]
    fn reset_twice_deletes_nothing_the_second_time() {
        let mut git = MockGit::new().with_remote_branch(BRANCH).with_local_branch(BRANCH);
        let mut ui = MockUI::new();

        with_session(&mut git, &mut ui, |s, ui| s.reset(ui)).unwrap();
        git.clear_calls();
        with_session(&mut git, &mut ui, |s, ui| s.reset(ui)).unwrap();

        assert_eq!(git.mutating_cmdlines(), ["git checkout master"]);
        assert!(!git.has_local(BRANCH));
        assert!(!git.has_remote(BRANCH));
    }

    #[test]
    fn reset_then_status_is_not_mobbing() {
        let mut git = MockGit::new().with_remote_branch(BRANCH).on_branch(BRANCH);
        let mut ui = MockUI::new();

        let status = with_session(&mut git, &mut ui, |s, ui| {
            s.reset(ui).unwrap();
            s.status(ui).unwrap()
        });

        assert!(!status.mobbing);
    }

    #[test]
    fn full_round_trip_between_two_typists() {
        let mut git = MockGit::new();
        let mut ui = MockUI::new();

        with_session(&mut git, &mut ui, |s, ui| s.start(ui)).unwrap();
        git = git.with_dirty_files(&["feature.rs"]);
        with_session(&mut git, &mut ui, |s, ui| s.next(ui)).unwrap();
        assert_eq!(git.current_branch(), "master");

        let path = with_session(&mut git, &mut ui, |s, ui| s.start(ui)).unwrap();
        assert_eq!(path, Some(StartPath::Rejoin));

        with_session(&mut git, &mut ui, |s, ui| s.done(ui)).unwrap();
        assert_eq!(git.squashed(), Some(BRANCH));
        assert!(!git.has_local(BRANCH));
        assert!(!git.has_remote(BRANCH));
    }
}
