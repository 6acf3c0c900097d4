//! End-to-end tests driving real child processes through the OS launcher.
//!
//! Unix-only: the scenarios rely on `true`, `false`, and `sleep` being on
//! the PATH.

#![cfg(unix)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use spawnpool::builders::build_pool;
use spawnpool::config::{PoolConfig, StdioPolicy};
use spawnpool::core::{HookResult, ProcessPool, Task};
use spawnpool::infra::launcher::OsLauncher;
use spawnpool::util::init_tracing;

/// Task wrapping a real command, recording hook invocations.
struct ShellTask {
    name: String,
    command: Vec<String>,
    events: Rc<RefCell<Vec<String>>>,
}

impl ShellTask {
    fn new(name: &str, command: &[&str], events: &Rc<RefCell<Vec<String>>>) -> Self {
        Self {
            name: name.to_string(),
            command: command.iter().map(ToString::to_string).collect(),
            events: Rc::clone(events),
        }
    }

    fn record(&self, hook: &str) {
        self.events.borrow_mut().push(format!("{hook}:{}", self.name));
    }
}

impl Task for ShellTask {
    fn command(&self) -> &[String] {
        &self.command
    }
    fn on_launch(&mut self) -> HookResult {
        self.record("launch");
        Ok(())
    }
    fn on_success(&mut self) -> HookResult {
        self.record("success");
        Ok(())
    }
    fn on_error(&mut self) -> HookResult {
        self.record("error");
        Ok(())
    }
}

/// Drive the pool to quiescence, asserting the capacity invariant after
/// every step. Panics if the children do not finish within the deadline.
fn drive(pool: &mut ProcessPool<ShellTask, OsLauncher>) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while pool.has_work() {
        assert!(Instant::now() < deadline, "children did not finish in time");
        pool.step().unwrap();
        assert!(pool.stats().running <= pool.stats().max_concurrent);
        std::thread::sleep(Duration::from_millis(10));
    }
}

fn quiet_config(max_concurrent: usize) -> PoolConfig {
    PoolConfig {
        max_concurrent,
        stdio: StdioPolicy::Discard,
    }
}

#[test]
fn mixed_exit_codes_route_to_the_right_hooks() {
    init_tracing();
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut pool = build_pool(&quiet_config(2)).unwrap();

    pool.submit(ShellTask::new("ok1", &["true"], &events));
    pool.submit(ShellTask::new("ok2", &["true"], &events));
    pool.submit(ShellTask::new("bad", &["false"], &events));
    drive(&mut pool);

    let events = events.borrow();
    let count = |entry: &str| events.iter().filter(|e| *e == entry).count();
    for name in ["ok1", "ok2", "bad"] {
        assert_eq!(count(&format!("launch:{name}")), 1);
    }
    assert_eq!(count("success:ok1"), 1);
    assert_eq!(count("success:ok2"), 1);
    assert_eq!(count("error:bad"), 1);
    assert_eq!(count("success:bad"), 0);

    let stats = pool.stats();
    assert_eq!((stats.launched, stats.succeeded, stats.failed), (3, 2, 1));
}

#[test]
fn single_slot_pool_runs_children_one_at_a_time() {
    init_tracing();
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut pool = build_pool(&quiet_config(1)).unwrap();

    pool.submit(ShellTask::new("first", &["sleep", "0.2"], &events));
    pool.submit(ShellTask::new("second", &["true"], &events));
    drive(&mut pool);

    let events = events.borrow();
    let position = |entry: &str| events.iter().position(|e| e == entry).unwrap();
    assert!(position("launch:second") > position("success:first"));
}

#[test]
fn missing_executable_surfaces_as_launch_error() {
    init_tracing();
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut pool = build_pool(&quiet_config(2)).unwrap();

    pool.submit(ShellTask::new(
        "ghost",
        &["spawnpool-test-definitely-not-a-binary"],
        &events,
    ));
    pool.submit(ShellTask::new("ok", &["true"], &events));

    assert!(pool.step().is_err());
    assert!(events.borrow().is_empty());

    drive(&mut pool);
    let stats = pool.stats();
    assert_eq!(stats.failed, 1);
    assert_eq!(stats.succeeded, 1);
    assert_eq!(*events.borrow(), ["launch:ok", "success:ok"]);
}
