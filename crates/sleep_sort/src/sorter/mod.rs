//! src/sorter/mod.rs
//!
//! This module implements the `SleepSorter`.
//!
//! Every input value gets its own worker thread. A worker sleeps for a time
//! proportional to its value, then hands the value to a single collector over
//! a shared rendezvous channel. The collector appends values in arrival order,
//! so the output is ordered by completion time, which for well-spaced values
//! is ascending order.
//!
//! # Architecture Overview
//!
//! ```text
//!               [15, 8, 42, 16, 4, 23]
//!                         │
//!                         ↓
//!                  ┌──────────────┐
//!                  │ SleepSorter  │ ←───── Config (time_unit, caps, timeout)
//!                  └──────┬───────┘
//!                         │ one thread per value
//!                         ↓
//!                 [Worker Threads] sleep(v × time_unit), then send v
//!                         │
//!                         │ bounded(0): each send waits for a receive
//!                         ↓
//!                   ┌───────────┐
//!                   │ Collector │ (receives exactly N values)
//!                   └─────┬─────┘
//!                         ↓
//!               [4, 8, 15, 16, 23, 42]
//! ```
//!
//! # Module Structure
//!
//! ```text
//! src/sorter/
//! ├── mod.rs         # Public API exports + module-level docs
//! ├── config.rs      # SleepSortConfig, builder, and validation
//! ├── sort.rs        # SleepSorter and the `sleep_sort` entry point
//! ├── collector.rs   # Count-based collection with an optional deadline
//! ├── stream.rs      # SortStream: completions as an iterator
//! └── workers/
//!     ├── mod.rs     # Worker naming
//!     └── pool.rs    # One-shot WorkerPool: spawn, join, detach
//! ```
//!
//! # Example Usage
//!
//! ## Default configuration (1 ms per unit, no caps, no timeout):
//! ```ignore
//! let sorted = sleep_sort(&[30, 10, 20])?;
//! assert_eq!(sorted, vec![10, 20, 30]);
//! ```
//!
//! ## Bounded:
//! ```ignore
//! let config = SleepSortConfig::builder()
//!     .time_unit(Duration::from_micros(500))
//!     .max_workers(1_000)
//!     .max_delay(10_000)
//!     .timeout(Duration::from_secs(10))
//!     .build();
//!
//! let sorter = SleepSorter::new(config)?;
//! let sorted = sorter.sort(&values)?;
//! ```
//!
//! ## Streaming:
//! ```ignore
//! for value in sorter.stream(&values)? {
//!     println!("done: {}", value);
//! }
//! ```
//!
//! # Notes:
//! - Equal values race; their relative order is not specified.
//! - Values closer together than the scheduler's jitter may swap. Widen
//!   `time_unit` to separate them.
//! - Memory and thread usage are O(N). Use `max_workers` for untrusted input.

mod collector;
mod config;
mod sort;
mod stream;
mod workers;

pub use config::{SleepSortConfig, SleepSortConfigBuilder};
pub use sort::{sleep_sort, SleepSorter};
pub use stream::SortStream;
