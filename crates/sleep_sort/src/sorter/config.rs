//! src/sorter/config.rs
//!
//! Configuration for SleepSorter behaviour
//!
//! The `SleepSortConfig` struct stores the parameters that control how
//! values are turned into delays and how long the collector is willing to
//! wait. It is built once and only read afterwards.
//!
//! Example:
//! ```ignore
//! let config = SleepSortConfig::builder()
//!     .time_unit(Duration::from_millis(2))
//!     .max_workers(10_000)
//!     .timeout(Duration::from_secs(5))
//!     .build();
//! ```
//!
//! # Considerations:
//! - `time_unit`: Larger units separate close values more reliably but make
//!                every sort slower (total time is roughly max(value) × unit).
//! - `max_workers`: Every value costs one OS thread for its whole delay.
//! - `max_delay`: Bounds the wall-clock time of a single sort.

use anyhow::{anyhow, Result};
use std::time::Duration;

/// Configuration for SleepSorter
#[derive(Debug, Clone)]
pub struct SleepSortConfig {
    /// Duration of one unit of delay. A value `v` sleeps for `v × time_unit`.
    /// Default: 1ms
    pub time_unit: Duration,
    /// Maximum number of values (and therefore threads) per sort.
    /// `None` means unbounded.
    pub max_workers: Option<usize>,
    /// Largest value accepted. `None` means unbounded.
    pub max_delay: Option<u64>,
    /// Maximum time the collector waits for all values.
    /// If exceeded, `sort` returns an error. `None` waits forever.
    pub timeout: Option<Duration>,
}

impl Default for SleepSortConfig {
    fn default() -> Self {
        Self {
            time_unit: Duration::from_millis(1),
            max_workers: None,
            max_delay: None,
            timeout: None,
        }
    }
}

impl SleepSortConfig {
    pub fn builder() -> SleepSortConfigBuilder {
        SleepSortConfigBuilder::default()
    }

    /// Checks the settings that can never produce a useful sort.
    pub fn validate(&self) -> Result<()> {
        if self.max_workers == Some(0) {
            return Err(anyhow!(
                "max_workers must be > 0. \
                Leave it unset for an unbounded number of workers."
            ));
        }

        if self.timeout == Some(Duration::ZERO) {
            return Err(anyhow!(
                "timeout must be > 0. Leave it unset to wait indefinitely."
            ));
        }

        Ok(())
    }

    /// Rejects inputs that exceed the configured caps.
    pub(crate) fn check_input(&self, values: &[u64]) -> Result<()> {
        if let Some(max_workers) = self.max_workers {
            if values.len() > max_workers {
                return Err(anyhow!(
                    "Input has {} values but max_workers is {}",
                    values.len(),
                    max_workers
                ));
            }
        }

        if let Some(max_delay) = self.max_delay {
            if let Some((position, value)) =
                values.iter().enumerate().find(|&(_, &v)| v > max_delay)
            {
                return Err(anyhow!(
                    "Value {} at position {} exceeds max_delay {}",
                    value,
                    position,
                    max_delay
                ));
            }
        }

        Ok(())
    }
}

/// Builder for SleepSortConfig with method chaining
#[derive(Default)]
pub struct SleepSortConfigBuilder {
    config: SleepSortConfig,
}

impl SleepSortConfigBuilder {
    /// Set the duration of one unit of delay
    pub fn time_unit(mut self, unit: Duration) -> Self {
        self.config.time_unit = unit;
        self
    }

    /// Set the maximum number of values per sort (must be > 0)
    pub fn max_workers(mut self, workers: usize) -> Self {
        self.config.max_workers = Some(workers);
        self
    }

    /// Set the largest accepted value
    pub fn max_delay(mut self, delay: u64) -> Self {
        self.config.max_delay = Some(delay);
        self
    }

    /// Set the collection deadline.
    ///
    /// - Too low: Fails sorts whose largest value has not woken up yet.
    /// - Too high: Delays detection of a stalled sort.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> SleepSortConfig {
        self.config
    }
}
