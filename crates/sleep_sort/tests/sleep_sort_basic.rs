//! Ordering and permutation tests for the fan-in sorter.
//!
//! Tests cover:
//! - Edge cases (empty, single value, zero delays)
//! - Ordering of distinct values
//! - Duplicates and ties
//! - Repeated runs and concurrent sorts

mod common;
use common::{sorted_copy, test_sorter};
use sleep_sort::{sleep_sort, SleepSortConfig, SleepSorter};

use anyhow::{anyhow, Result};
use rand::seq::SliceRandom;
use std::thread;
use std::time::{Duration, Instant};

// ============================================================================
// 1. Edge Cases
// ============================================================================

#[test]
fn test_empty_input() -> Result<()> {
    assert!(sleep_sort(&[])?.is_empty());
    assert!(test_sorter()?.sort(&[])?.is_empty());
    Ok(())
}

#[test]
fn test_empty_input_returns_immediately() -> Result<()> {
    // A one-hour unit would be noticed if anything were spawned.
    let sorter = SleepSorter::new(
        SleepSortConfig::builder()
            .time_unit(Duration::from_secs(3600))
            .build(),
    )?;

    let start = Instant::now();
    assert!(sorter.sort(&[])?.is_empty());
    assert!(start.elapsed() < Duration::from_secs(1));
    Ok(())
}

#[test]
fn test_single_value() -> Result<()> {
    assert_eq!(sleep_sort(&[5])?, vec![5]);
    Ok(())
}

#[test]
fn test_all_zero_delays() -> Result<()> {
    let out = sleep_sort(&[0, 0, 0, 0])?;
    assert_eq!(out, vec![0, 0, 0, 0]);
    Ok(())
}

// ============================================================================
// 2. Ordering
// ============================================================================

#[test]
fn test_three_values() -> Result<()> {
    let out = test_sorter()?.sort(&[30, 10, 20])?;
    assert_eq!(out, vec![10, 20, 30]);
    Ok(())
}

#[test]
fn test_demo_values() -> Result<()> {
    let values = [15, 8, 42, 16, 4, 23];
    let out = test_sorter()?.sort(&values)?;
    assert_eq!(out, vec![4, 8, 15, 16, 23, 42]);
    Ok(())
}

#[test]
fn test_distinct_shuffled_values_come_out_ascending() -> Result<()> {
    let mut rng = rand::rng();
    // Spaced by 4 units so neighbours are 20ms apart.
    let mut values: Vec<u64> = (0..25).map(|i| i * 4).collect();
    values.shuffle(&mut rng);

    let out = test_sorter()?.sort(&values)?;
    assert_eq!(out, sorted_copy(&values));
    Ok(())
}

#[test]
fn test_default_unit_is_milliseconds() -> Result<()> {
    let start = Instant::now();
    let out = sleep_sort(&[60, 20])?;
    let elapsed = start.elapsed();

    assert_eq!(out, vec![20, 60]);
    assert!(
        elapsed >= Duration::from_millis(60),
        "sort finished after {:?}, before the largest delay",
        elapsed
    );
    Ok(())
}

// ============================================================================
// 3. Duplicates
// ============================================================================

#[test]
fn test_duplicates_follow_smaller_value() -> Result<()> {
    let out = test_sorter()?.sort(&[10, 10, 5])?;
    assert_eq!(out.len(), 3);
    assert_eq!(out[0], 5);
    assert_eq!(&out[1..], &[10, 10]);
    Ok(())
}

#[test]
fn test_output_is_permutation_with_many_ties() -> Result<()> {
    let values: Vec<u64> = (0..60).map(|i| i % 3).collect();
    let out = sleep_sort(&values)?;
    assert_eq!(sorted_copy(&out), sorted_copy(&values));
    Ok(())
}

// ============================================================================
// 4. Repetition & Concurrency
// ============================================================================

#[test]
fn test_repeated_runs_same_multiset() -> Result<()> {
    let values = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
    let sorter = SleepSorter::default();
    let expected = sorted_copy(&values);

    for _ in 0..5 {
        let out = sorter.sort(&values)?;
        assert_eq!(sorted_copy(&out), expected);
    }
    Ok(())
}

#[test]
fn test_concurrent_sorts_do_not_mix() -> Result<()> {
    let sorter = test_sorter()?;

    let handles: Vec<_> = (0..4u64)
        .map(|offset| {
            let sorter = sorter.clone();
            // Each thread sorts its own residue class, so mixing would show.
            let values: Vec<u64> = (0..6).rev().map(|i| i * 8 + offset).collect();
            thread::spawn(move || sorter.sort(&values).map(|out| (values, out)))
        })
        .collect();

    for handle in handles {
        let (values, out) = handle.join().map_err(|_| anyhow!("sort thread panicked"))??;
        assert_eq!(out, sorted_copy(&values));
    }
    Ok(())
}
