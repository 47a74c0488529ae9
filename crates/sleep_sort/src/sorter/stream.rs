//! Streaming view of a running sort.
//!
//! Unlike `SleepSorter::sort`, which counts values, `SortStream` reads until
//! the completion channel closes. Each worker holds one sender and drops it on
//! exit, so closure means every value has been delivered.

use std::iter::FusedIterator;
use tracing::warn;

use super::workers::pool::WorkerPool;

/// Values of a running sort in completion order.
///
/// Dropping the stream early detaches the remaining workers; they exit when
/// they wake and find nobody receiving.
pub struct SortStream {
    pool: Option<WorkerPool>,
    remaining: usize,
}

impl SortStream {
    pub(crate) fn new(pool: WorkerPool, expected: usize) -> Self {
        Self {
            pool: Some(pool),
            remaining: expected,
        }
    }

    pub(crate) fn empty() -> Self {
        Self {
            pool: None,
            remaining: 0,
        }
    }

    /// Number of values not yet yielded.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl Iterator for SortStream {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let pool = self.pool.as_ref()?;

        match pool.output_rx.recv() {
            Ok(value) => {
                self.remaining = self.remaining.saturating_sub(1);
                Some(value)
            }
            Err(_) => {
                // Closed: every worker has exited.
                if let Some(pool) = self.pool.take() {
                    if let Err(e) = pool.join() {
                        warn!("Failed to wait for sleep-sort workers: {}", e);
                    }
                }
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SortStream {}

impl FusedIterator for SortStream {}

impl Drop for SortStream {
    fn drop(&mut self) {
        if let Some(pool) = self.pool.take() {
            pool.detach();
        }
    }
}
