//! Session status report.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::Result;
use crate::ui::UserInterface;

use super::Session;

/// `git log` pretty format used for the commit list: hash, relative time, author.
pub const LOG_FORMAT: &str = "--pretty=format:%h %cr <%an>";

static LOG_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<hash>[0-9a-f]+) (?P<when>.+) <(?P<author>[^<>]*)>$")
        .expect("valid log line regex")
});

/// One commit on the session branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitSummary {
    /// Abbreviated hash.
    pub hash: String,
    /// Relative commit time, e.g. "3 minutes ago".
    pub when: String,
    /// Author name.
    pub author: String,
}

/// Snapshot of the session as seen from this clone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionStatus {
    /// Whether the session branch is checked out.
    pub mobbing: bool,
    /// Session branch name.
    pub branch: String,
    /// Commits on the session branch that are not on the base branch,
    /// newest first. Empty when not mobbing.
    pub commits: Vec<CommitSummary>,
    /// The log exactly as git printed it.
    #[serde(skip)]
    pub log: String,
}

/// Parse `git log` output produced with [`LOG_FORMAT`].
///
/// Lines that do not have the expected shape are skipped.
pub fn parse_log(output: &str) -> Vec<CommitSummary> {
    output
        .lines()
        .filter_map(|line| LOG_LINE.captures(line.trim_end()))
        .map(|caps| CommitSummary {
            hash: caps["hash"].to_string(),
            when: caps["when"].to_string(),
            author: caps["author"].to_string(),
        })
        .collect()
}

impl Session<'_> {
    /// Collect the session status.
    pub fn status(&mut self, ui: &mut dyn UserInterface) -> Result<SessionStatus> {
        let branch = self.settings.branch.clone();

        if !self.is_mobbing(ui)? {
            return Ok(SessionStatus {
                mobbing: false,
                branch,
                commits: Vec::new(),
                log: String::new(),
            });
        }

        let range = format!("{}..{}", self.settings.base_branch, branch);
        let log = self.git.silent(
            ui,
            &["--no-pager", "log", &range, LOG_FORMAT, "--abbrev-commit"],
        )?;

        Ok(SessionStatus {
            mobbing: true,
            branch,
            commits: parse_log(&log),
            log,
        })
    }
}

/// Print a status report.
pub fn report(ui: &mut dyn UserInterface, status: &SessionStatus) {
    if status.mobbing {
        ui.message("mobbing in progress");
        let log = status.log.trim_end();
        if !log.is_empty() {
            ui.message(log);
        }
    } else {
        ui.message("you aren't mobbing right now");
    }
}

/// Print a status report as JSON.
pub fn report_json(ui: &mut dyn UserInterface, status: &SessionStatus) -> Result<()> {
    let json = serde_json::to_string_pretty(status).map_err(anyhow::Error::from)?;
    ui.message(&json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::{GitRunner, MockGit};
    use crate::settings::Settings;
    use crate::ui::MockUI;

    #[test]
    fn parses_log_lines() {
        let output = "a1b2c3d 5 minutes ago <Ada Lovelace>\n9f8e7d6 2 hours ago <Grace Hopper>";
        let commits = parse_log(output);
        assert_eq!(commits.len(), 2);
        assert_eq!(
            commits[0],
            CommitSummary {
                hash: "a1b2c3d".into(),
                when: "5 minutes ago".into(),
                author: "Ada Lovelace".into(),
            }
        );
        assert_eq!(commits[1].when, "2 hours ago");
    }

    #[test]
    fn skips_unexpected_lines() {
        let output = "warning: something odd\n\na1b2c3d 1 day ago <Bob>\n";
        let commits = parse_log(output);
        assert_eq!(commits.len(), 1);
        assert_eq!(commits[0].author, "Bob");
    }

    #[test]
    fn not_mobbing_runs_no_log() {
        let settings = Settings::default();
        let mut git = MockGit::new().with_local_branch("mob-session");
        let mut ui = MockUI::new();

        let status = {
            let mut session = Session::new(GitRunner::new(&mut git, false), &settings);
            session.status(&mut ui).unwrap()
        };
        report(&mut ui, &status);

        assert!(!status.mobbing);
        assert!(status.commits.is_empty());
        assert_eq!(git.cmdlines(), ["git branch"]);
        assert!(ui.has_message("you aren't mobbing right now"));
    }

    #[test]
    fn mobbing_lists_session_commits() {
        let settings = Settings::default();
        let mut git = MockGit::new()
            .on_branch("mob-session")
            .with_local_commit("mob-session", "WIP in Mob Session [ci-skip]")
            .with_local_commit("mob-session", "WIP in Mob Session [ci-skip]");
        let mut ui = MockUI::new();

        let status = {
            let mut session = Session::new(GitRunner::new(&mut git, false), &settings);
            session.status(&mut ui).unwrap()
        };
        report(&mut ui, &status);

        assert!(status.mobbing);
        assert_eq!(status.commits.len(), 2);
        assert!(status.commits.iter().all(|c| c.author == "Mob Tester"));
        assert_eq!(ui.messages()[0], "mobbing in progress");
        assert_eq!(ui.messages()[1].lines().count(), 2);
        assert_eq!(
            git.cmdlines().last().map(String::as_str),
            Some("git --no-pager log master..mob-session --pretty=format:%h %cr <%an> --abbrev-commit")
        );
    }

    #[test]
    fn json_report_omits_raw_log() {
        let status = SessionStatus {
            mobbing: true,
            branch: "mob-session".into(),
            commits: parse_log("abc1234 now <Eve>"),
            log: "abc1234 now <Eve>".into(),
        };
        let mut ui = MockUI::new();

        report_json(&mut ui, &status).unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["mobbing"], true);
        assert_eq!(value["branch"], "mob-session");
        assert_eq!(value["commits"][0]["author"], "Eve");
        assert!(value.get("log").is_none());
    }
}
