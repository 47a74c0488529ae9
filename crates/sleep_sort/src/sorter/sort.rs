//! src/sorter/sort.rs
//!
//! The `SleepSorter` and the default `sleep_sort` entry point.
//!
//! A sort runs in three steps:
//! 1. `WorkerPool::spawn` starts one worker per value on a shared rendezvous channel.
//! 2. `collect` receives exactly N values in arrival order.
//! 3. The pool is joined; by then every worker has handed off its value.
//!
//! Empty input returns immediately: no channel, no threads.

use anyhow::{Context, Result};
use std::time::Instant;
use tracing::{debug, warn};

use super::collector::collect;
use super::config::SleepSortConfig;
use super::stream::SortStream;
use super::workers::pool::WorkerPool;

/// Concurrent fan-in sorter.
///
/// Holds a validated, immutable configuration. A single sorter can run any
/// number of sorts, including concurrently from several threads.
#[derive(Debug, Clone, Default)]
pub struct SleepSorter {
    config: SleepSortConfig,
}

impl SleepSorter {
    /// Creates a sorter after validating `config`.
    pub fn new(config: SleepSortConfig) -> Result<Self> {
        config.validate().context("Invalid SleepSortConfig")?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SleepSortConfig {
        &self.config
    }

    /// Sorts `values` by letting each one sleep for `value × time_unit`.
    ///
    /// The result is always a permutation of `values`. Distinct values that
    /// are far enough apart relative to scheduler jitter come out ascending;
    /// equal values come out in any order.
    ///
    /// # Errors
    /// - input exceeds `max_workers` or `max_delay` (checked before any thread starts)
    /// - a worker thread cannot be spawned
    /// - `timeout` passes before all values arrive
    pub fn sort(&self, values: &[u64]) -> Result<Vec<u64>> {
        if values.is_empty() {
            return Ok(Vec::new());
        }
        self.config.check_input(values)?;

        let deadline = self
            .config
            .timeout
            .and_then(|timeout| Instant::now().checked_add(timeout));

        let pool = WorkerPool::spawn(values, self.config.time_unit)?;

        match collect(&pool.output_rx, values.len(), deadline) {
            Ok(sorted) => {
                pool.join()
                    .context("All values were collected but a worker did not exit cleanly")?;
                debug!(count = sorted.len(), "sleep sort complete");
                Ok(sorted)
            }
            Err(e) => {
                warn!(error = %e, "sleep sort abandoned");
                pool.detach();
                Err(e)
            }
        }
    }

    /// Starts the workers and returns their values as they complete.
    ///
    /// The stream ends when the completion channel closes, i.e. once every
    /// worker has delivered its value. `timeout` does not apply here; the
    /// caller paces the stream.
    pub fn stream(&self, values: &[u64]) -> Result<SortStream> {
        if values.is_empty() {
            return Ok(SortStream::empty());
        }
        self.config.check_input(values)?;

        let pool = WorkerPool::spawn(values, self.config.time_unit)?;
        Ok(SortStream::new(pool, values.len()))
    }
}

/// Sorts `values` with the default configuration: 1 ms per unit, no caps,
/// no timeout.
///
/// ```ignore
/// assert_eq!(sleep_sort(&[30, 10, 20])?, vec![10, 20, 30]);
/// ```
pub fn sleep_sort(values: &[u64]) -> Result<Vec<u64>> {
    SleepSorter::default().sort(values)
}
