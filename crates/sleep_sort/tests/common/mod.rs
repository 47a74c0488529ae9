use anyhow::Result;
use sleep_sort::{SleepSortConfig, SleepSorter};
use std::time::Duration;

/// Unit wide enough that adjacent integers rarely swap under load.
pub const TEST_UNIT: Duration = Duration::from_millis(5);

/// Sorter with a widened time unit and a generous safety timeout.
pub fn test_sorter() -> Result<SleepSorter> {
    SleepSorter::new(
        SleepSortConfig::builder()
            .time_unit(TEST_UNIT)
            .timeout(Duration::from_secs(30))
            .build(),
    )
}

/// Returns `values` sorted, for multiset comparisons.
pub fn sorted_copy(values: &[u64]) -> Vec<u64> {
    let mut v = values.to_vec();
    v.sort_unstable();
    v
}
