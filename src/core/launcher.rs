//! The process-launch seam between the pool and the operating system.

use std::io;

/// Result of one non-blocking status poll of a spawned process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollStatus {
    /// The process has not terminated yet.
    StillRunning,
    /// The process terminated with the given exit code. Abnormal
    /// termination without a code (killed by a signal) is reported as -1.
    Exited(i32),
}

/// Abstraction over process spawning and non-blocking status polling.
///
/// The pool consumes exactly two primitives: spawn a command, and poll a
/// handle without blocking. Production code uses
/// [`crate::infra::launcher::OsLauncher`]; tests substitute scripted
/// launchers to make scheduling decisions deterministic.
pub trait Launcher {
    /// Exclusively-owned handle to one spawned process. Dropping the handle
    /// is the pool's reap point: implementations must not require a
    /// blocking wait afterwards.
    type Handle;

    /// Spawn a process for `command` (program path plus literal arguments,
    /// no shell). Fails with the underlying OS error if the process cannot
    /// be started.
    fn spawn(&mut self, command: &[String]) -> io::Result<Self::Handle>;

    /// Poll the process's exit status. Must return immediately regardless
    /// of child state; the pool never calls a blocking wait.
    fn poll(&mut self, handle: &mut Self::Handle) -> PollStatus;
}
