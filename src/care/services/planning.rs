//! Service layer that plans days and records completions for stored
//! households.

use crate::{
    care::{
        domain::{CareDomainError, Completion, Owner, OwnerId, Task, TaskId},
        ports::{HouseholdRepository, HouseholdRepositoryError},
    },
    schedule::{PlanSummary, PlannerConfig, PlanningError, Scheduler, TimeConflict},
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Everything a presentation layer needs to show one day's plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPlan {
    /// Planned tasks in clock-time order.
    pub tasks: Vec<Task>,
    /// Totals and included/excluded task names.
    pub summary: PlanSummary,
    /// Start-time collisions.
    pub conflicts: Vec<TimeConflict>,
}

/// Service-level errors for care planning operations.
#[derive(Debug, Error)]
pub enum CarePlanningError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] CareDomainError),
    /// The required workload does not fit the owner's budget.
    #[error(transparent)]
    Planning(#[from] PlanningError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] HouseholdRepositoryError),
    /// No household is stored for the owner.
    #[error("owner not found: {0}")]
    OwnerNotFound(OwnerId),
}

/// Result type for care planning service operations.
pub type CarePlanningResult<T> = Result<T, CarePlanningError>;

/// Care planning orchestration service.
///
/// Each call reads its own copy of the household from the repository, so a
/// plan is never computed over state another caller is changing. Writers
/// replace the whole household; serialising writes to one owner is the
/// host's responsibility.
#[derive(Clone)]
pub struct CarePlanningService<R, C>
where
    R: HouseholdRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
    config: PlannerConfig,
}

impl<R, C> CarePlanningService<R, C>
where
    R: HouseholdRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new service with the default planner configuration.
    #[must_use]
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            config: PlannerConfig::default(),
        }
    }

    /// Replaces the planner configuration.
    #[must_use]
    pub const fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Stores a new household.
    ///
    /// # Errors
    ///
    /// Returns [`CarePlanningError::Repository`] when the repository rejects
    /// the owner.
    pub fn register_owner(&self, owner: &Owner) -> CarePlanningResult<()> {
        self.repository.store(owner)?;
        info!(owner_id = %owner.id(), pets = owner.pets().len(), "household registered");
        Ok(())
    }

    /// Retrieves a copy of a stored household.
    ///
    /// Returns `Ok(None)` when no household exists for the owner.
    ///
    /// # Errors
    ///
    /// Returns [`CarePlanningError::Repository`] when lookup fails.
    pub fn find_owner(&self, owner_id: OwnerId) -> CarePlanningResult<Option<Owner>> {
        Ok(self.repository.find_by_id(owner_id)?)
    }

    /// Builds today's plan for a stored household.
    ///
    /// # Errors
    ///
    /// Returns [`CarePlanningError::OwnerNotFound`] for unknown owners,
    /// [`CarePlanningError::Planning`] when required tasks exceed the budget,
    /// or [`CarePlanningError::Repository`] when lookup fails.
    pub fn plan_day(&self, owner_id: OwnerId) -> CarePlanningResult<DailyPlan> {
        let owner = self.load(owner_id)?;
        let mut scheduler = Scheduler::with_config(&owner, self.config, &*self.clock);
        let tasks = scheduler.generate_daily_plan()?.to_vec();
        Ok(DailyPlan {
            tasks,
            summary: scheduler.get_plan_summary(),
            conflicts: scheduler.detect_time_conflicts(),
        })
    }

    /// Completes a task and stores the household, including any successor
    /// occurrence attached to the task's pet.
    ///
    /// Completing an already completed task returns
    /// [`Completion::AlreadyCompleted`] and writes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`CarePlanningError::OwnerNotFound`] for unknown owners,
    /// [`CarePlanningError::Domain`] when the task does not exist, or
    /// [`CarePlanningError::Repository`] when storage fails.
    pub fn complete_task(
        &self,
        owner_id: OwnerId,
        task_id: TaskId,
    ) -> CarePlanningResult<Completion> {
        let mut owner = self.load(owner_id)?;
        let completion = owner.complete_task(task_id, &*self.clock)?;
        if completion.is_noop() {
            warn!(%owner_id, %task_id, "task already completed");
            return Ok(completion);
        }
        self.repository.update(&owner)?;
        Ok(completion)
    }

    /// Changes a task's priority and stores the household.
    ///
    /// # Errors
    ///
    /// Returns [`CarePlanningError::Domain`] for unknown tasks or invalid
    /// priorities (the stored priority is unchanged),
    /// [`CarePlanningError::OwnerNotFound`] for unknown owners, or
    /// [`CarePlanningError::Repository`] when storage fails.
    pub fn set_task_priority(
        &self,
        owner_id: OwnerId,
        task_id: TaskId,
        priority: u8,
    ) -> CarePlanningResult<()> {
        let mut owner = self.load(owner_id)?;
        owner.set_task_priority(task_id, priority)?;
        self.repository.update(&owner)?;
        Ok(())
    }

    fn load(&self, owner_id: OwnerId) -> CarePlanningResult<Owner> {
        self.repository
            .find_by_id(owner_id)?
            .ok_or(CarePlanningError::OwnerNotFound(owner_id))
    }
}
