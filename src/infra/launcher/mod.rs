//! Launcher backends.

pub mod os;

pub use os::OsLauncher;
