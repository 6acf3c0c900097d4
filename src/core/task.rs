//! The task contract: a command plus three lifecycle hooks.

/// Result type for lifecycle hooks.
///
/// Hooks run arbitrary caller code, so failures are opaque `anyhow` errors;
/// the pool reports them as [`crate::core::PoolError::Hook`] without
/// inspecting them.
pub type HookResult = Result<(), anyhow::Error>;

/// A unit of work backed by one external process.
///
/// Implementors supply the command line to spawn and the three lifecycle
/// hooks. There are no default hook bodies: the pool is generic over the
/// full capability set, and every implementation decides what launch,
/// success, and error mean for its domain (log a line, update a database
/// row, enqueue follow-up work).
///
/// Hook contract, guaranteed by the pool:
///
/// - `on_launch` fires exactly once, synchronously, immediately after the
///   process is spawned.
/// - Exactly one of `on_success` / `on_error` fires, exactly once, after
///   the process terminates; never before `on_launch`.
///
/// Hooks take `&mut self` so tasks can accumulate state across their own
/// lifecycle. A hook returning `Err` does not disturb scheduling (see
/// [`crate::core::PoolError::Hook`]), but keeping hooks failure-free is the
/// caller's job.
pub trait Task {
    /// The command to spawn: program path followed by literal arguments.
    /// Never passed through a shell. An empty command surfaces as a launch
    /// failure at admission, not at submit.
    fn command(&self) -> &[String];

    /// Called once, right after this task's process was spawned.
    fn on_launch(&mut self) -> HookResult;

    /// Called once if the process exited with status 0.
    fn on_success(&mut self) -> HookResult;

    /// Called once if the process exited with a nonzero status (including
    /// death by signal).
    fn on_error(&mut self) -> HookResult;
}
