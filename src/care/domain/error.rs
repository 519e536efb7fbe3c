//! Error types for care domain validation and parsing.

use super::{PetId, TaskId};
use thiserror::Error;

/// Errors returned while constructing or mutating household values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CareDomainError {
    /// The priority lies outside the accepted `1..=5` range.
    #[error("invalid priority {0}, expected a value between 1 and 5")]
    InvalidPriority(u8),

    /// The task duration is zero.
    #[error("invalid duration {0}, expected a positive number of minutes")]
    InvalidDuration(u32),

    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// The pet name is empty after trimming.
    #[error("pet name must not be empty")]
    EmptyPetName,

    /// The owner name is empty after trimming.
    #[error("owner name must not be empty")]
    EmptyOwnerName,

    /// The clock-of-day label is not a valid `HH:MM` value.
    #[error("invalid time of day '{0}', expected HH:MM")]
    InvalidTimeOfDay(String),

    /// No task with the identifier exists in the household.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// No pet with the identifier exists in the household.
    #[error("pet not found: {0}")]
    PetNotFound(PetId),

    /// The task already belongs to a different pet.
    #[error("task {task_id} already belongs to pet {pet_id}")]
    TaskHeldByAnotherPet {
        /// The task being added.
        task_id: TaskId,
        /// The pet currently holding it.
        pet_id: PetId,
    },

    /// The same task identifier appears more than once in a household.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The same pet identifier appears more than once in a household.
    #[error("duplicate pet identifier: {0}")]
    DuplicatePet(PetId),
}

/// Error returned while parsing task frequencies from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task frequency: {0}")]
pub struct ParseFrequencyError(pub String);
