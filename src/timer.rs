//! Hand-over timer.
//!
//! The timer is a detached `sh` process that sleeps and then runs the
//! notification command. It is launched and abandoned: mob keeps no handle,
//! never waits for it, and cannot cancel it. It outlives the mob process.

use std::process::{Command, Stdio};

use chrono::{DateTime, Local, TimeDelta};
use tracing::debug;

use crate::error::{MobError, Result};
use crate::ui::UserInterface;

/// Parse a minutes argument. Anything that is not a whole number counts as 0.
pub fn parse_minutes(arg: &str) -> u64 {
    arg.trim().parse().unwrap_or(0)
}

/// Shell script that waits `seconds` in the background and then notifies.
pub fn script(seconds: u64, notify: &str) -> String {
    format!("( sleep {seconds} && {notify} & )")
}

/// Launch `sh -c <script>` without waiting and without keeping the child.
pub fn spawn_detached(script: &str) -> Result<()> {
    Command::new("sh")
        .arg("-c")
        .arg(script)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(drop)
        .map_err(|e| MobError::Spawn {
            command: format!("sh -c {script}"),
            message: e.to_string(),
        })
}

/// Local wall-clock time `minutes` from now, if representable.
fn end_time(minutes: u64) -> Option<DateTime<Local>> {
    let delta = TimeDelta::try_minutes(i64::try_from(minutes).ok()?)?;
    Local::now().checked_add_signed(delta)
}

/// Starts hand-over timers.
#[derive(Debug, Clone)]
pub struct Timer {
    notify: String,
    debug: bool,
}

impl Timer {
    /// Create a timer that runs `notify` when it expires.
    pub fn new(notify: impl Into<String>, debug: bool) -> Self {
        Self {
            notify: notify.into(),
            debug,
        }
    }

    /// The script that would be run for `minutes`.
    pub fn script_for(&self, minutes: u64) -> String {
        script(minutes.saturating_mul(60), &self.notify)
    }

    /// Start a timer for the raw `minutes` argument.
    ///
    /// Returns whether the background process was launched. A launch failure
    /// is reported to the user and never propagates.
    pub fn start(&self, ui: &mut dyn UserInterface, minutes_arg: &str) -> bool {
        ui.message(&format!("starting {} minutes timer", minutes_arg));

        let minutes = parse_minutes(minutes_arg);
        let script = self.script_for(minutes);
        if self.debug {
            ui.command(&format!("sh -c {script}"));
        }
        debug!(minutes, %script, "spawning timer");

        match spawn_detached(&script) {
            Ok(()) => {
                if let Some(ends) = end_time(minutes) {
                    ui.message(&format!("timer ends at {}", ends.format("%H:%M")));
                }
                true
            }
            Err(e) => {
                debug!(error = %e, "timer spawn failed");
                ui.warning("timer couldn't be started...");
                false
            }
        }
    }
}
