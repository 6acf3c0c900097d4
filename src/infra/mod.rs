//! Infrastructure adapters for process launching.

pub mod launcher;

pub use launcher::OsLauncher;
