//! Launcher over `std::process`.

use std::io;
use std::process::{Child, Command, Stdio};

use crate::config::StdioPolicy;
use crate::core::{Launcher, PollStatus};

/// Process launcher backed by `std::process::Command` and
/// `Child::try_wait`.
///
/// Children get a null stdin so they never contend for the driver's own
/// input; stdout/stderr follow the configured [`StdioPolicy`].
pub struct OsLauncher {
    stdio: StdioPolicy,
}

impl OsLauncher {
    /// Create a launcher applying the given output policy to every spawn.
    pub const fn new(stdio: StdioPolicy) -> Self {
        Self { stdio }
    }
}

impl Launcher for OsLauncher {
    type Handle = Child;

    fn spawn(&mut self, command: &[String]) -> io::Result<Child> {
        let (program, args) = command.split_first().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "empty command")
        })?;

        let mut cmd = Command::new(program);
        cmd.args(args).stdin(Stdio::null());
        match self.stdio {
            StdioPolicy::Inherit => cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit()),
            StdioPolicy::Discard => cmd.stdout(Stdio::null()).stderr(Stdio::null()),
        };
        cmd.spawn()
    }

    fn poll(&mut self, child: &mut Child) -> PollStatus {
        match child.try_wait() {
            Ok(None) => PollStatus::StillRunning,
            // No exit code means death by signal; route to the error path.
            Ok(Some(status)) => PollStatus::Exited(status.code().unwrap_or(-1)),
            Err(err) => {
                tracing::warn!(error = %err, "try_wait failed, treating child as exited");
                PollStatus::Exited(-1)
            }
        }
    }
}
