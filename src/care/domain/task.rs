//! Care task entity and its recurrence state machine.

use super::{CareDomainError, ParseFrequencyError, PetId, Priority, TaskDuration, TaskId, TimeOfDay};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

/// How often a task recurs once completed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    /// The task happens a single time.
    Once,
    /// The task recurs every day.
    #[default]
    Daily,
    /// The task recurs every seven days.
    Weekly,
}

impl Frequency {
    /// Returns the canonical text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Once => "once",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }

    /// Returns the offset between two consecutive occurrences, or `None` for
    /// non-recurring tasks.
    #[must_use]
    pub const fn recurrence_interval(self) -> Option<TimeDelta> {
        match self {
            Self::Once => None,
            Self::Daily => TimeDelta::try_days(1),
            Self::Weekly => TimeDelta::try_days(7),
        }
    }

    /// Returns `true` when completing the task schedules a successor.
    #[must_use]
    pub const fn is_recurring(self) -> bool {
        !matches!(self, Self::Once)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Frequency {
    type Error = ParseFrequencyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "once" => Ok(Self::Once),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            _ => Err(ParseFrequencyError(value.to_owned())),
        }
    }
}

impl FromStr for Frequency {
    type Err = ParseFrequencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

/// Completion state of a single task occurrence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    /// The occurrence still needs doing.
    #[default]
    Pending,
    /// The occurrence has been done. Terminal.
    Completed,
}

impl TaskState {
    /// Returns the canonical text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort key ranking required tasks first, then higher priority first.
pub type RankKey = (bool, Reverse<Priority>);

/// Outcome of [`Task::complete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The task was already completed; nothing changed.
    AlreadyCompleted,
    /// The task was completed and does not recur.
    Completed,
    /// The task was completed and its next occurrence was created.
    Rescheduled(Task),
}

impl Completion {
    /// Returns the successor occurrence, if one was created.
    #[must_use]
    pub const fn successor(&self) -> Option<&Task> {
        match self {
            Self::Rescheduled(next) => Some(next),
            Self::AlreadyCompleted | Self::Completed => None,
        }
    }

    /// Consumes the outcome, returning the successor occurrence if any.
    #[must_use]
    pub fn into_successor(self) -> Option<Task> {
        match self {
            Self::Rescheduled(next) => Some(next),
            Self::AlreadyCompleted | Self::Completed => None,
        }
    }

    /// Returns `true` when the call had no effect.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        matches!(self, Self::AlreadyCompleted)
    }
}

/// A single occurrence of a pet-care task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: String,
    duration: TaskDuration,
    priority: Priority,
    category: String,
    required: bool,
    frequency: Frequency,
    time: Option<TimeOfDay>,
    state: TaskState,
    due_date: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
    pet_id: Option<PetId>,
}

impl Task {
    /// Creates a pending, optional, daily task with an empty category.
    ///
    /// # Errors
    ///
    /// Returns [`CareDomainError::EmptyTaskName`],
    /// [`CareDomainError::InvalidDuration`] or
    /// [`CareDomainError::InvalidPriority`] when the corresponding input is
    /// invalid.
    pub fn new(
        name: impl Into<String>,
        duration_minutes: u32,
        priority: u8,
    ) -> Result<Self, CareDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CareDomainError::EmptyTaskName);
        }

        Ok(Self {
            id: TaskId::new(),
            name: trimmed.to_owned(),
            duration: TaskDuration::from_minutes(duration_minutes)?,
            priority: Priority::new(priority)?,
            category: String::new(),
            required: false,
            frequency: Frequency::default(),
            time: None,
            state: TaskState::Pending,
            due_date: None,
            completed_at: None,
            pet_id: None,
        })
    }

    /// Sets the free-text category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Marks the task as required (or optional).
    #[must_use]
    pub const fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Sets the recurrence frequency.
    #[must_use]
    pub const fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sets the clock-of-day label.
    #[must_use]
    pub const fn with_time(mut self, time: TimeOfDay) -> Self {
        self.time = Some(time);
        self
    }

    /// Sets the due date of this occurrence.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the task duration.
    #[must_use]
    pub const fn duration(&self) -> TaskDuration {
        self.duration
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the free-text category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns `true` when the task must appear in every valid plan.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Returns the recurrence frequency.
    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the clock-of-day label, if any.
    #[must_use]
    pub const fn time(&self) -> Option<TimeOfDay> {
        self.time
    }

    /// Returns the completion state.
    #[must_use]
    pub const fn state(&self) -> TaskState {
        self.state
    }

    /// Returns `true` once the occurrence has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self.state, TaskState::Completed)
    }

    /// Returns the due date of this occurrence, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns when the occurrence was completed, if it has been.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the owning pet, if the task is attached to one.
    #[must_use]
    pub const fn pet_id(&self) -> Option<PetId> {
        self.pet_id
    }

    /// Returns the key used to rank tasks for planning.
    #[must_use]
    pub const fn rank_key(&self) -> RankKey {
        (!self.required, Reverse(self.priority))
    }

    /// Updates the priority.
    ///
    /// # Errors
    ///
    /// Returns [`CareDomainError::InvalidPriority`] when the value lies
    /// outside `1..=5`; the previous priority is kept.
    pub fn set_priority(&mut self, value: u8) -> Result<(), CareDomainError> {
        self.priority = Priority::new(value)?;
        Ok(())
    }

    /// Completes this occurrence.
    ///
    /// Completing an already completed task is a no-op. Completing a daily
    /// or weekly task returns its next occurrence, due one or seven days
    /// after the current due date (or after `clock.utc()` when no due date
    /// is set). The successor is not attached to any pet; the caller decides
    /// where it belongs.
    pub fn complete(&mut self, clock: &impl Clock) -> Completion {
        if self.is_completed() {
            return Completion::AlreadyCompleted;
        }

        let now = clock.utc();
        self.state = TaskState::Completed;
        self.completed_at = Some(now);

        match self.frequency.recurrence_interval() {
            None => Completion::Completed,
            Some(interval) => {
                let anchor = self.due_date.unwrap_or(now);
                let next_due = anchor
                    .checked_add_signed(interval)
                    .unwrap_or(DateTime::<Utc>::MAX_UTC);
                Completion::Rescheduled(self.next_occurrence(next_due))
            }
        }
    }

    fn next_occurrence(&self, due_date: DateTime<Utc>) -> Self {
        Self {
            id: TaskId::new(),
            name: self.name.clone(),
            duration: self.duration,
            priority: self.priority,
            category: self.category.clone(),
            required: self.required,
            frequency: self.frequency,
            time: self.time,
            state: TaskState::Pending,
            due_date: Some(due_date),
            completed_at: None,
            pet_id: None,
        }
    }

    pub(crate) const fn attach_to(&mut self, pet_id: PetId) {
        self.pet_id = Some(pet_id);
    }

    pub(crate) const fn detach(&mut self) {
        self.pet_id = None;
    }
}
