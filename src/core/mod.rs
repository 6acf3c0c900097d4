//! Core scheduling abstractions and the step loop.

pub mod error;
pub mod launcher;
pub mod process_pool;
pub mod task;

pub use error::PoolError;
pub use launcher::{Launcher, PollStatus};
pub use process_pool::{PoolStats, ProcessPool, TaskId};
pub use task::{HookResult, Task};
