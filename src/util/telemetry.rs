//! Tracing setup helper.

/// Install an env-filtered fmt subscriber unless one is already set.
///
/// The library itself only emits events; binaries and test harnesses call
/// this once at startup. Filtering follows `RUST_LOG`.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();
}
