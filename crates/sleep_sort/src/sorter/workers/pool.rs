//! One-shot worker pool for the fan-in sorter.
//!
//! Spawns one named thread per input value. Each worker sleeps for its
//! value's delay, sends the value on the shared completion channel, and exits.
//!
//! # Channels
//! - Completion channel: Workers -> Collector, `bounded(0)`. A send only
//!   completes once the collector has taken the value, so a worker lives
//!   until its value is accepted.
//!
//! The pool drops its own copy of the sender after spawning. Once the last
//! worker exits, the channel reports disconnection, which is what lets
//! `SortStream` end without counting.

use anyhow::{anyhow, Context, Result};
use crossbeam_channel::{bounded, Receiver};
use std::thread;
use std::time::Duration;
use tracing::{debug, trace};

use super::worker_thread_name;
use crate::delay::delay_for;

/// Worker threads plus the receiving half of their completion channel.
pub(crate) struct WorkerPool {
    pub(crate) workers: Vec<thread::JoinHandle<()>>,
    pub(crate) output_rx: Receiver<u64>,
}

impl WorkerPool {
    /// Starts one worker per value.
    ///
    /// If a thread fails to spawn, the receiver is dropped on return, so the
    /// workers already started give up on their send and exit.
    pub(crate) fn spawn(values: &[u64], time_unit: Duration) -> Result<Self> {
        let (output_tx, output_rx) = bounded::<u64>(0);
        let mut workers = Vec::with_capacity(values.len());

        for (worker_id, &value) in values.iter().enumerate() {
            let output_tx = output_tx.clone();
            let delay = delay_for(value, time_unit);

            let handle = thread::Builder::new()
                .name(worker_thread_name(worker_id))
                .spawn(move || {
                    thread::sleep(delay);
                    match output_tx.send(value) {
                        Ok(()) => trace!(worker_id, value, "worker emitted value"),
                        Err(_) => debug!(worker_id, value, "collector gone, value dropped"),
                    }
                })
                .with_context(|| format!("Failed to spawn worker thread {}", worker_id))?;

            workers.push(handle);
        }

        drop(output_tx);
        debug!(workers = workers.len(), ?time_unit, "spawned sleep-sort workers");

        Ok(Self { workers, output_rx })
    }

    /// Waits for every worker to exit.
    ///
    /// The receiver is dropped first, so workers that have not sent yet
    /// fail their send after waking instead of blocking forever.
    pub(crate) fn join(self) -> Result<()> {
        let Self { workers, output_rx } = self;
        drop(output_rx);

        let panicked: Vec<usize> = workers
            .into_iter()
            .enumerate()
            .filter_map(|(worker_id, handle)| handle.join().err().map(|_| worker_id))
            .collect();

        if panicked.is_empty() {
            Ok(())
        } else {
            Err(anyhow!("Worker(s) {:?} panicked", panicked))
        }
    }

    /// Stops tracking the workers without waiting for them.
    ///
    /// Sleeping workers keep sleeping; they exit when their send fails.
    pub(crate) fn detach(self) {
        let Self { workers, output_rx } = self;
        drop(output_rx);
        debug!(workers = workers.len(), "detached sleep-sort workers");
    }
}
