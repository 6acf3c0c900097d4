//! Configuration models for pools and stdio policy.

pub mod pool;

pub use pool::{PoolConfig, StdioPolicy};
