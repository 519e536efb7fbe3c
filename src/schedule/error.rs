//! Error and warning types raised by the planning engine.

use thiserror::Error;

/// Errors returned while building a daily plan.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PlanningError {
    /// Required tasks alone need more minutes than the owner has.
    #[error(
        "required tasks need {required_minutes} min but only {available_minutes} min are available"
    )]
    CapacityExceeded {
        /// Sum of all required task durations.
        required_minutes: u64,
        /// The owner's time budget.
        available_minutes: u32,
    },
}

impl PlanningError {
    /// Returns how many minutes the required tasks overshoot the budget.
    #[must_use]
    pub fn shortfall(&self) -> u64 {
        match self {
            Self::CapacityExceeded {
                required_minutes,
                available_minutes,
            } => required_minutes.saturating_sub(u64::from(*available_minutes)),
        }
    }
}

/// Divergence between a scheduler snapshot and the live household.
///
/// This is a warning value: nothing fails automatically when a snapshot goes
/// stale. Hosts may surface it as an error since it implements
/// [`std::error::Error`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error(
    "scheduler snapshot is stale: {added_tasks} added, {removed_tasks} removed, \
     {modified_tasks} modified task(s); budget changed: {budget_changed}"
)]
pub struct StaleSnapshot {
    /// Tasks present in the household but missing from the snapshot.
    pub added_tasks: usize,
    /// Tasks in the snapshot that the household no longer holds.
    pub removed_tasks: usize,
    /// Tasks whose live state differs from the snapshot copy.
    pub modified_tasks: usize,
    /// Whether the owner's time budget changed.
    pub budget_changed: bool,
}
