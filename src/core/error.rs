//! Error types for pool operations.

use thiserror::Error;

/// Errors produced by [`crate::core::ProcessPool::step`] and the builders.
///
/// A task process exiting nonzero is *not* an error at this level; that is
/// the expected failure path and is routed to the task's `on_error` hook.
#[derive(Debug, Error)]
pub enum PoolError {
    /// Spawning a task's process failed (bad executable, permissions,
    /// resource limits). The affected task is retired as failed; tasks
    /// still pending remain queued for subsequent steps.
    #[error("failed to spawn `{command}`: {source}")]
    Launch {
        /// The command line that failed to spawn, joined for display.
        command: String,
        /// The underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// The running set exceeded the configured ceiling. This can only come
    /// from a scheduler bug, never from external conditions, and is never
    /// silently clamped.
    #[error("running set exceeds capacity: {running} running > {max_concurrent} allowed")]
    CapacityInvariant {
        /// Observed running-set size.
        running: usize,
        /// Configured concurrency ceiling.
        max_concurrent: usize,
    },

    /// A caller-supplied lifecycle hook returned an error. The step still
    /// runs to completion (all terminal hooks dispatched, capacity
    /// refilled) before the first such failure is reported.
    #[error("lifecycle hook failed: {source}")]
    Hook {
        /// The error returned by the hook.
        #[source]
        source: anyhow::Error,
    },

    /// Configuration validation failed.
    #[error("invalid configuration: {0}")]
    Config(String),
}
