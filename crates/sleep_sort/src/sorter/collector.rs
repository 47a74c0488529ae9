//! Collection side of the fan-in sorter.
//!
//! The collector is the only reader of the completion channel. It knows how
//! many values to expect and stops after exactly that many, so it never waits
//! on channel closure.

use anyhow::{anyhow, Result};
use crossbeam_channel::{Receiver, RecvTimeoutError};
use std::time::Instant;

/// Receives exactly `expected` values in arrival order.
///
/// With a `deadline`, fails once it passes; the error says how many values
/// had arrived. Disconnection before `expected` values means workers died.
pub(crate) fn collect(
    output_rx: &Receiver<u64>,
    expected: usize,
    deadline: Option<Instant>,
) -> Result<Vec<u64>> {
    let mut out = Vec::with_capacity(expected);

    while out.len() < expected {
        let value = match deadline {
            Some(deadline) => output_rx.recv_deadline(deadline).map_err(|e| match e {
                RecvTimeoutError::Timeout => anyhow!(
                    "Sort timed out after receiving {} of {} values",
                    out.len(),
                    expected
                ),
                RecvTimeoutError::Disconnected => disconnected(out.len(), expected),
            })?,
            None => output_rx
                .recv()
                .map_err(|_| disconnected(out.len(), expected))?,
        };
        out.push(value);
    }

    Ok(out)
}

fn disconnected(received: usize, expected: usize) -> anyhow::Error {
    anyhow!(
        "Completion channel disconnected after {} of {} values - workers may have crashed",
        received,
        expected
    )
}
