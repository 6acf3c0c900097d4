//! Build process pools over the OS launcher from configuration.

use crate::config::PoolConfig;
use crate::core::{PoolError, ProcessPool, Task};
use crate::infra::launcher::OsLauncher;

/// Build a [`ProcessPool`] backed by the real OS launcher from validated
/// configuration.
///
/// # Errors
///
/// Returns [`PoolError::Config`] if the configuration fails validation.
pub fn build_pool<T: Task>(cfg: &PoolConfig) -> Result<ProcessPool<T, OsLauncher>, PoolError> {
    cfg.validate().map_err(PoolError::Config)?;
    Ok(ProcessPool::new(
        cfg.max_concurrent,
        OsLauncher::new(cfg.stdio),
    ))
}
