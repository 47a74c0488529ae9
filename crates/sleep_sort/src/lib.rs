pub mod delay;
pub mod sorter;

pub use delay::{delay_for, delays_from_signed};
pub use sorter::{sleep_sort, SleepSortConfig, SleepSortConfigBuilder, SleepSorter, SortStream};
