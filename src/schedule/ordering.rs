//! Task ordering primitives. Every sort here is stable.

use crate::care::domain::Task;
use std::cmp::Ordering;

/// Compares two tasks by planning rank: required before optional, then
/// higher priority first. Equal ranks compare equal.
#[must_use]
pub fn compare(a: &Task, b: &Task) -> Ordering {
    a.rank_key().cmp(&b.rank_key())
}

/// Returns the tasks ordered by planning rank, keeping input order for ties.
#[must_use]
pub fn prioritize<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<&'a Task> {
    let mut ordered: Vec<&Task> = tasks.into_iter().collect();
    ordered.sort_by_key(|task| task.rank_key());
    ordered
}

/// Returns the tasks ordered by clock time, earliest first.
///
/// Untimed tasks come after all timed ones and keep their relative input
/// order.
#[must_use]
pub fn sort_by_time<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<&'a Task> {
    let mut ordered: Vec<&Task> = tasks.into_iter().collect();
    ordered.sort_by_key(|task| {
        task.time()
            .map_or((true, 0), |time| (false, time.minutes_since_midnight()))
    });
    ordered
}

/// Sums task durations in minutes.
#[must_use]
pub fn calculate_total_time<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> u64 {
    tasks
        .into_iter()
        .map(|task| u64::from(task.duration().minutes()))
        .sum()
}
