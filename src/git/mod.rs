//! Git invocation.
//!
//! - [`backend`] - the [`GitBackend`] capability and the real [`CliGit`]
//! - [`runner`] - echo and failure policy ([`GitRunner`])
//! - [`mock`] - an in-memory repository ([`MockGit`]) for tests

pub mod backend;
pub mod mock;
pub mod runner;

pub use backend::{CliGit, GitBackend, GitOutput};
pub use mock::MockGit;
pub use runner::{Echo, GitRunner};

/// Render an argument vector the way it is echoed to the user.
pub fn cmdline(args: &[&str]) -> String {
    let mut line = String::from("git");
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cmdline_prefixes_git() {
        assert_eq!(cmdline(&["checkout", "master"]), "git checkout master");
        assert_eq!(cmdline(&[]), "git");
    }
}
