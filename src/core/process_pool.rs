//! The process pool: pending queue, bounded running set, and the step loop.

use std::collections::VecDeque;

use uuid::Uuid;

use crate::core::{Launcher, PollStatus, PoolError, Task};

/// Identifier assigned to a task at submission, used for log correlation.
pub type TaskId = Uuid;

/// Point-in-time view of pool occupancy and lifetime totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Configured concurrency ceiling.
    pub max_concurrent: usize,
    /// Tasks waiting for admission.
    pub pending: usize,
    /// Tasks currently running.
    pub running: usize,
    /// Total processes spawned.
    pub launched: u64,
    /// Total tasks that exited with status 0.
    pub succeeded: u64,
    /// Total tasks that exited nonzero or failed to spawn.
    pub failed: u64,
}

/// A submitted task waiting in the pending queue.
struct Submitted<T> {
    id: TaskId,
    task: T,
}

/// A running task paired with its exclusively-owned process handle.
///
/// The handle exists only while the task is in the running set; retirement
/// drops it, which is the reap point for the underlying process.
struct Active<T, H> {
    id: TaskId,
    task: T,
    handle: H,
}

/// Bounded-concurrency scheduler for externally spawned processes.
///
/// The pool owns a FIFO pending queue and a running set capped at
/// `max_concurrent`. It has no internal concurrency: the caller drives it by
/// invoking [`ProcessPool::step`] from a timer, idle loop, or event loop,
/// and nothing inside a step blocks on a child process.
///
/// Tasks flow one direction, pending → running → retired, and never return.
pub struct ProcessPool<T, L: Launcher> {
    max_concurrent: usize,
    launcher: L,
    pending: VecDeque<Submitted<T>>,
    running: Vec<Active<T, L::Handle>>,
    launched: u64,
    succeeded: u64,
    failed: u64,
}

impl<T: Task, L: Launcher> ProcessPool<T, L> {
    /// Create a pool that runs at most `max_concurrent` processes at once.
    ///
    /// `max_concurrent` must be at least 1; construction through
    /// [`crate::builders::build_pool`] enforces this via configuration
    /// validation.
    pub fn new(max_concurrent: usize, launcher: L) -> Self {
        Self {
            max_concurrent,
            launcher,
            pending: VecDeque::new(),
            running: Vec::with_capacity(max_concurrent),
            launched: 0,
            succeeded: 0,
            failed: 0,
        }
    }

    /// Append a task to the tail of the pending queue.
    ///
    /// Never blocks and performs no validation; a malformed command surfaces
    /// later as a [`PoolError::Launch`] at admission. Returns the id
    /// assigned to the task for log correlation.
    pub fn submit(&mut self, task: T) -> TaskId {
        let id = Uuid::new_v4();
        tracing::debug!(task = %id, "task enqueued");
        self.pending.push_back(Submitted { id, task });
        id
    }

    /// True iff any task is pending or running. Pure query.
    pub fn has_work(&self) -> bool {
        !self.pending.is_empty() || !self.running.is_empty()
    }

    /// Snapshot of occupancy and lifetime counters.
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            max_concurrent: self.max_concurrent,
            pending: self.pending.len(),
            running: self.running.len(),
            launched: self.launched,
            succeeded: self.succeeded,
            failed: self.failed,
        }
    }

    /// Run one non-blocking scheduling cycle: poll, dispatch, retire, admit.
    ///
    /// Returns `Ok(false)` without mutating anything when the pool holds no
    /// work. Otherwise polls every running task's process exactly once,
    /// retires the ones whose snapshot status is terminal (firing
    /// `on_success` / `on_error`), refills freed capacity from the pending
    /// queue in FIFO order (firing `on_launch` per spawn), and returns
    /// `Ok(true)`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::CapacityInvariant`] if the running set already exceeds
    ///   the ceiling; nothing else is touched.
    /// - [`PoolError::Launch`] if a spawn fails during admission. The
    ///   affected task is retired as failed; later pending tasks stay
    ///   queued and are considered again next step.
    /// - [`PoolError::Hook`] if any lifecycle hook returned an error. The
    ///   cycle still runs to completion first, so scheduling state is
    ///   intact and the exactly-once hook contract holds.
    pub fn step(&mut self) -> Result<bool, PoolError> {
        if !self.has_work() {
            return Ok(false);
        }

        if self.running.len() > self.max_concurrent {
            return Err(PoolError::CapacityInvariant {
                running: self.running.len(),
                max_concurrent: self.max_concurrent,
            });
        }

        // Poll every running task exactly once, before any retire or admit
        // decision. This snapshot is the sole source of truth for the rest
        // of the step: a second poll of the same handle could observe a
        // later status and race the dispatch decision against the OS
        // process table.
        let launcher = &mut self.launcher;
        let snapshot: Vec<(Active<T, L::Handle>, PollStatus)> = self
            .running
            .drain(..)
            .map(|mut active| {
                let status = launcher.poll(&mut active.handle);
                (active, status)
            })
            .collect();

        let mut hook_failure: Option<anyhow::Error> = None;

        for (active, status) in snapshot {
            match status {
                // Retained even if the process exited after the snapshot
                // was taken; it is retired on a subsequent step.
                PollStatus::StillRunning => self.running.push(active),
                PollStatus::Exited(code) => {
                    let Active { id, mut task, handle } = active;
                    drop(handle);
                    let outcome = if code == 0 {
                        self.succeeded += 1;
                        tracing::debug!(task = %id, "task succeeded");
                        task.on_success()
                    } else {
                        self.failed += 1;
                        tracing::debug!(task = %id, code, "task exited nonzero");
                        task.on_error()
                    };
                    if let Err(source) = outcome {
                        tracing::error!(task = %id, error = %source, "terminal hook failed");
                        hook_failure.get_or_insert(source);
                    }
                }
            }
        }

        // Refill freed capacity, strictly FIFO.
        while self.running.len() < self.max_concurrent {
            let Some(Submitted { id, mut task }) = self.pending.pop_front() else {
                break;
            };
            let handle = match self.launcher.spawn(task.command()) {
                Ok(handle) => handle,
                Err(source) => {
                    // The task is retired as failed rather than vanishing
                    // from the books; the spawn error is the caller's to
                    // see, distinct from a task's own nonzero exit.
                    self.failed += 1;
                    let command = task.command().join(" ");
                    tracing::error!(task = %id, %command, error = %source, "spawn failed");
                    return Err(PoolError::Launch { command, source });
                }
            };
            self.launched += 1;
            tracing::debug!(task = %id, "task launched");
            let outcome = task.on_launch();
            self.running.push(Active { id, task, handle });
            if let Err(source) = outcome {
                tracing::error!(task = %id, error = %source, "launch hook failed");
                hook_failure.get_or_insert(source);
            }
        }

        match hook_failure {
            Some(source) => Err(PoolError::Hook { source }),
            None => Ok(true),
        }
    }
}
