//! Worker management for the fan-in sorter.
//!
//! - `pool`: one-shot pool with one thread per input value
//!
//! Workers never receive anything. Each one sends a single value on the
//! shared completion channel and exits.

pub(crate) mod pool;

/// Prefix for worker thread names, followed by the input position.
pub(crate) const WORKER_THREAD_PREFIX: &str = "sleep-sort-worker";

pub(crate) fn worker_thread_name(worker_id: usize) -> String {
    format!("{}-{}", WORKER_THREAD_PREFIX, worker_id)
}
