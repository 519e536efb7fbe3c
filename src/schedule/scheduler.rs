//! Greedy daily plan builder over a household snapshot.

use super::{
    PlanSummary, PlannerConfig, PlanningError, StaleSnapshot, TimeConflict,
    conflict::detect_time_conflicts,
    ordering::{calculate_total_time, prioritize, sort_by_time},
};
use crate::care::domain::{Owner, OwnerId, PetId, Task, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

/// Copy of an owner's tasks and budget captured at a known instant.
#[derive(Debug, Clone, PartialEq)]
struct HouseholdSnapshot {
    owner_id: OwnerId,
    available_minutes: u32,
    pet_names: HashMap<PetId, String>,
    tasks: Vec<Task>,
    captured_at: DateTime<Utc>,
}

impl HouseholdSnapshot {
    fn capture(owner: &Owner, clock: &impl Clock) -> Self {
        Self {
            owner_id: owner.id(),
            available_minutes: owner.get_available_time(),
            pet_names: owner
                .pets()
                .iter()
                .map(|pet| (pet.id(), pet.name().to_owned()))
                .collect(),
            tasks: owner.get_all_tasks().into_iter().cloned().collect(),
            captured_at: clock.utc(),
        }
    }
}

/// Plans one day of care for a single owner.
///
/// The scheduler works on a snapshot taken at construction. Changes made to
/// the owner afterwards are not seen until [`Scheduler::refresh`] is called;
/// [`Scheduler::staleness`] reports whether that is needed.
#[derive(Debug, Clone)]
pub struct Scheduler {
    config: PlannerConfig,
    snapshot: HouseholdSnapshot,
    daily_plan: Vec<Task>,
}

impl Scheduler {
    /// Creates a scheduler with the default configuration.
    #[must_use]
    pub fn new(owner: &Owner, clock: &impl Clock) -> Self {
        Self::with_config(owner, PlannerConfig::default(), clock)
    }

    /// Creates a scheduler with an explicit configuration.
    #[must_use]
    pub fn with_config(owner: &Owner, config: PlannerConfig, clock: &impl Clock) -> Self {
        let snapshot = HouseholdSnapshot::capture(owner, clock);
        debug!(
            owner_id = %snapshot.owner_id,
            task_count = snapshot.tasks.len(),
            available_minutes = snapshot.available_minutes,
            "scheduler snapshot captured"
        );
        Self {
            config,
            snapshot,
            daily_plan: Vec::new(),
        }
    }

    /// Re-reads the owner's tasks and budget and discards the current plan.
    pub fn refresh(&mut self, owner: &Owner, clock: &impl Clock) {
        self.snapshot = HouseholdSnapshot::capture(owner, clock);
        self.daily_plan.clear();
        debug!(
            owner_id = %self.snapshot.owner_id,
            task_count = self.snapshot.tasks.len(),
            "scheduler snapshot refreshed"
        );
    }

    /// Compares the snapshot with the live owner.
    ///
    /// Returns `None` when they agree.
    #[must_use]
    pub fn staleness(&self, owner: &Owner) -> Option<StaleSnapshot> {
        let live = owner.get_all_tasks();
        let captured: HashMap<TaskId, &Task> = self
            .snapshot
            .tasks
            .iter()
            .map(|task| (task.id(), task))
            .collect();
        let live_ids: HashSet<TaskId> = live.iter().map(|task| task.id()).collect();

        let mut added_tasks = 0;
        let mut modified_tasks = 0;
        for task in &live {
            match captured.get(&task.id()) {
                None => added_tasks += 1,
                Some(copy) if *copy != *task => modified_tasks += 1,
                Some(_) => {}
            }
        }
        let removed_tasks = captured
            .keys()
            .filter(|id| !live_ids.contains(*id))
            .count();
        let budget_changed = owner.get_available_time() != self.snapshot.available_minutes;

        if added_tasks == 0 && removed_tasks == 0 && modified_tasks == 0 && !budget_changed {
            return None;
        }

        let stale = StaleSnapshot {
            added_tasks,
            removed_tasks,
            modified_tasks,
            budget_changed,
        };
        warn!(owner_id = %self.snapshot.owner_id, %stale, "scheduler snapshot is stale");
        Some(stale)
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Returns the owner the snapshot was taken from.
    #[must_use]
    pub const fn owner_id(&self) -> OwnerId {
        self.snapshot.owner_id
    }

    /// Returns the time budget captured in the snapshot.
    #[must_use]
    pub const fn available_minutes(&self) -> u32 {
        self.snapshot.available_minutes
    }

    /// Returns when the snapshot was taken.
    #[must_use]
    pub const fn captured_at(&self) -> DateTime<Utc> {
        self.snapshot.captured_at
    }

    /// Returns every task in the snapshot, pet by pet.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.snapshot.tasks
    }

    /// Returns the most recently generated plan, empty if none.
    #[must_use]
    pub fn daily_plan(&self) -> &[Task] {
        &self.daily_plan
    }

    /// Returns the snapshot tasks belonging to one pet.
    #[must_use]
    pub fn tasks_for_pet(&self, pet_id: PetId) -> Vec<&Task> {
        self.snapshot
            .tasks
            .iter()
            .filter(|task| task.pet_id() == Some(pet_id))
            .collect()
    }

    /// Returns the required snapshot tasks.
    #[must_use]
    pub fn required_tasks(&self) -> Vec<&Task> {
        self.snapshot
            .tasks
            .iter()
            .filter(|task| task.is_required())
            .collect()
    }

    /// Returns the plannable tasks ranked required-first, then by descending
    /// priority. Ties keep snapshot order.
    #[must_use]
    pub fn prioritize_tasks(&self) -> Vec<&Task> {
        let skip_completed = self.config.skip_completed;
        prioritize(
            self.snapshot
                .tasks
                .iter()
                .filter(|task| !(skip_completed && task.is_completed())),
        )
    }

    /// Returns every snapshot task ordered by clock time, untimed last.
    #[must_use]
    pub fn sort_all_by_time(&self) -> Vec<&Task> {
        sort_by_time(&self.snapshot.tasks)
    }

    /// Builds and stores the daily plan.
    ///
    /// All required tasks are planned when their combined duration fits the
    /// budget. Optional tasks are then taken in rank order whenever they
    /// still fit; a task that does not fit is skipped, not swapped. The plan
    /// is returned in clock-time order. Any previous plan is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningError::CapacityExceeded`] when required tasks alone
    /// exceed the budget. No plan is kept in that case.
    pub fn generate_daily_plan(&mut self) -> Result<&[Task], PlanningError> {
        match self.select_plan() {
            Ok(plan) => {
                self.daily_plan = plan;
                info!(
                    owner_id = %self.snapshot.owner_id,
                    planned = self.daily_plan.len(),
                    total_minutes = calculate_total_time(&self.daily_plan),
                    available_minutes = self.snapshot.available_minutes,
                    "daily plan generated"
                );
                Ok(self.daily_plan.as_slice())
            }
            Err(err) => {
                self.daily_plan.clear();
                warn!(
                    owner_id = %self.snapshot.owner_id,
                    shortfall = err.shortfall(),
                    "{err}"
                );
                Err(err)
            }
        }
    }

    fn select_plan(&self) -> Result<Vec<Task>, PlanningError> {
        let available_minutes = self.snapshot.available_minutes;
        let budget = u64::from(available_minutes);
        let (required, optional): (Vec<&Task>, Vec<&Task>) = self
            .prioritize_tasks()
            .into_iter()
            .partition(|task| task.is_required());

        let required_minutes = calculate_total_time(required.iter().copied());
        if required_minutes > budget {
            return Err(PlanningError::CapacityExceeded {
                required_minutes,
                available_minutes,
            });
        }

        let mut running_total = required_minutes;
        let mut selected = required;
        for task in optional {
            let minutes = u64::from(task.duration().minutes());
            if running_total + minutes <= budget {
                running_total += minutes;
                selected.push(task);
            } else {
                debug!(
                    task = task.name(),
                    minutes,
                    remaining = budget - running_total,
                    "optional task does not fit"
                );
            }
        }

        Ok(sort_by_time(selected).into_iter().cloned().collect())
    }

    /// Summarises the stored plan against the snapshot.
    #[must_use]
    pub fn get_plan_summary(&self) -> PlanSummary {
        let planned: HashSet<TaskId> = self.daily_plan.iter().map(Task::id).collect();
        PlanSummary {
            total_minutes: calculate_total_time(&self.daily_plan),
            task_count: self.daily_plan.len(),
            included: self
                .daily_plan
                .iter()
                .map(|task| task.name().to_owned())
                .collect(),
            excluded: self
                .snapshot
                .tasks
                .iter()
                .filter(|task| !planned.contains(&task.id()))
                .map(|task| task.name().to_owned())
                .collect(),
        }
    }

    /// Reports tasks sharing an exact start time.
    ///
    /// Looks at every snapshot task, or only at the stored plan when
    /// [`PlannerConfig::conflicts_in_plan_only`] is set.
    #[must_use]
    pub fn detect_time_conflicts(&self) -> Vec<TimeConflict> {
        let source = if self.config.conflicts_in_plan_only {
            &self.daily_plan
        } else {
            &self.snapshot.tasks
        };
        self.detect_conflicts_among(source)
    }

    /// Reports tasks sharing an exact start time within `tasks`, naming pets
    /// from the snapshot.
    #[must_use]
    pub fn detect_conflicts_among<'a>(
        &self,
        tasks: impl IntoIterator<Item = &'a Task>,
    ) -> Vec<TimeConflict> {
        detect_time_conflicts(tasks, |pet_id| {
            self.snapshot.pet_names.get(&pet_id).cloned()
        })
    }

    /// Returns one warning line per conflicting time slot.
    #[must_use]
    pub fn conflict_warnings(&self) -> Vec<String> {
        self.detect_time_conflicts()
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}
