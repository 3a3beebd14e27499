//! Runtime settings resolved from the environment.
//!
//! All knobs are environment variables so that a whole team can share them
//! through a dotfile or CI config:
//!
//! | Variable           | Default            |
//! |--------------------|--------------------|
//! | `MOB_DEBUG`        | unset (presence enables debug mode) |
//! | `MOB_BRANCH`       | `mob-session`      |
//! | `MOB_REMOTE`       | `origin`           |
//! | `MOB_BASE_BRANCH`  | `master`           |
//! | `MOB_TIMER_NOTIFY` | `say "time's up"`  |

use std::collections::HashMap;

/// Default name of the shared session branch.
pub const DEFAULT_BRANCH: &str = "mob-session";

/// Default remote name.
pub const DEFAULT_REMOTE: &str = "origin";

/// Default base branch that sessions start from and merge into.
pub const DEFAULT_BASE_BRANCH: &str = "master";

/// Default command the timer runs when it expires.
pub const DEFAULT_TIMER_NOTIFY: &str = "say \"time's up\"";

/// Resolved settings for a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Session branch name.
    pub branch: String,

    /// Remote that hosts the session branch.
    pub remote: String,

    /// Base branch.
    pub base_branch: String,

    /// Echo every git invocation and its output.
    pub debug: bool,

    /// Shell command run by the timer when it expires.
    pub timer_notify: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            branch: DEFAULT_BRANCH.to_string(),
            remote: DEFAULT_REMOTE.to_string(),
            base_branch: DEFAULT_BASE_BRANCH.to_string(),
            debug: false,
            timer_notify: DEFAULT_TIMER_NOTIFY.to_string(),
        }
    }
}

impl Settings {
    /// Resolve settings from the process environment.
    pub fn from_env() -> Self {
        let vars: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with("MOB_"))
            .collect();
        Self::from_vars(&vars)
    }

    /// Resolve settings from an explicit variable map (for testing).
    ///
    /// Empty values fall back to the defaults, except `MOB_DEBUG`, whose
    /// value is ignored entirely.
    pub fn from_vars(vars: &HashMap<String, String>) -> Self {
        let pick = |key: &str, default: &str| {
            vars.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_string()
        };

        Self {
            branch: pick("MOB_BRANCH", DEFAULT_BRANCH),
            remote: pick("MOB_REMOTE", DEFAULT_REMOTE),
            base_branch: pick("MOB_BASE_BRANCH", DEFAULT_BASE_BRANCH),
            debug: vars.contains_key("MOB_DEBUG"),
            timer_notify: pick("MOB_TIMER_NOTIFY", DEFAULT_TIMER_NOTIFY),
        }
    }

    /// Force debug mode on (the `--debug` flag).
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug |= debug;
        self
    }

    /// The session branch as seen in the remote namespace, e.g. `origin/mob-session`.
    pub fn remote_branch(&self) -> String {
        format!("{}/{}", self.remote, self.branch)
    }

    /// The base branch as seen in the remote namespace, e.g. `origin/master`.
    pub fn remote_base_branch(&self) -> String {
        format!("{}/{}", self.remote, self.base_branch)
    }
}
