//! # Spawnpool
//!
//! A bounded-concurrency scheduler for externally spawned processes.
//!
//! Spawnpool admits a stream of submitted tasks, launches at most
//! `max_concurrent` of their backing OS processes at a time, detects
//! completion via non-blocking status polls, and fires lifecycle hooks
//! (launch, success, error) as each process transitions. It is the
//! scheduling layer for workloads that are really just "run these commands,
//! but never more than N at once": batch encoders, test runners, render
//! jobs, crawler fleets.
//!
//! ## Core Problem Solved
//!
//! Driving a fleet of child processes from one thread is easy to get subtly
//! wrong:
//!
//! - **Capacity**: launching everything at submit time floods the machine;
//!   admission must be gated on a fixed concurrency ceiling.
//! - **Poll Races**: a child's exit status can change between two reads
//!   within the same scheduling pass. Decisions must come from a single
//!   status snapshot per pass, never from a second look at the process
//!   table.
//! - **Exactly-Once Hooks**: callers build their own bookkeeping on the
//!   launch/success/error callbacks, so each must fire exactly once.
//!
//! ## Key Features
//!
//! - **Cooperative Scheduling**: the pool is driven entirely by repeated
//!   calls to [`core::ProcessPool::step`]; nothing inside blocks on a child.
//! - **Snapshot Polling**: every running task is polled exactly once per
//!   step, and that snapshot is the sole basis for retire/admit decisions.
//! - **FIFO Admission**: tasks launch in submission order whenever capacity
//!   allows.
//! - **Typed Errors**: spawn failures, capacity-invariant violations, and
//!   hook failures surface as distinct [`core::PoolError`] variants instead
//!   of halting the driving loop.
//! - **Pluggable Launcher**: the process-spawn seam is a trait; tests drive
//!   the pool with scripted launchers, production uses
//!   [`infra::launcher::OsLauncher`] over `std::process`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use spawnpool::builders::build_pool;
//! use spawnpool::config::PoolConfig;
//!
//! let cfg = PoolConfig::from_json_str(r#"{"max_concurrent": 4}"#)?;
//! let mut pool = build_pool::<MyTask>(&cfg)?;
//!
//! pool.submit(MyTask::new(vec!["ffmpeg".into(), "-i".into(), input]));
//!
//! // Drive the pool from a timer or idle loop.
//! while pool.has_work() {
//!     pool.step()?;
//!     std::thread::sleep(std::time::Duration::from_millis(50));
//! }
//! ```
//!
//! For complete examples, see `tests/pool_scheduling_test.rs`.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core scheduling abstractions: pool, task contract, launcher seam, errors.
pub mod core;
/// Configuration models for pools and stdio policy.
pub mod config;
/// Builders to construct pools from configuration.
pub mod builders;
/// Infrastructure adapters for process launching.
pub mod infra;
/// Shared utilities.
pub mod util;
