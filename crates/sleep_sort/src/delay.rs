//! src/delay.rs
//!
//! Conversions between input values and worker sleep durations.
//!
//! Values are unsigned, so a negative delay cannot reach a worker through the
//! primary API. Callers holding signed data go through [`delays_from_signed`],
//! which rejects negatives instead of clamping them.

use anyhow::{anyhow, Result};
use std::time::Duration;

/// Sleep duration for `value` units of `unit`.
///
/// Saturates at `u64::MAX` nanoseconds instead of overflowing.
pub fn delay_for(value: u64, unit: Duration) -> Duration {
    let nanos = unit.as_nanos().saturating_mul(u128::from(value));
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}

/// Converts signed delays into the unsigned form the sorter accepts.
///
/// Fails on the first negative value, naming its position.
pub fn delays_from_signed(values: &[i64]) -> Result<Vec<u64>> {
    values
        .iter()
        .enumerate()
        .map(|(position, &value)| {
            u64::try_from(value).map_err(|_| {
                anyhow!(
                    "Invalid delay {} at position {}: delays must be non-negative",
                    value,
                    position
                )
            })
        })
        .collect()
}
