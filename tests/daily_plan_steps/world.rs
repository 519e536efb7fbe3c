//! Shared world state for daily care planning BDD scenarios.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use eyre::WrapErr;
use mockable::Clock;
use pawplan::care::{
    adapters::memory::InMemoryHouseholdRepository,
    domain::{Completion, Owner, OwnerId, Pet, Task, TaskId},
    services::{CarePlanningError, CarePlanningService, DailyPlan},
};
use rstest::fixture;

/// Clock frozen at the scenario start.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioClock(pub DateTime<Utc>);

impl Clock for ScenarioClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Service type used by the BDD world.
pub type TestPlanningService = CarePlanningService<InMemoryHouseholdRepository, ScenarioClock>;

/// Scenario world for daily planning behaviour tests.
pub struct PlanWorld {
    pub service: TestPlanningService,
    pub clock: ScenarioClock,
    pub available_minutes: u32,
    pub pets: Vec<Pet>,
    pub pending_tasks: Vec<(usize, Task)>,
    pub owner_id: Option<OwnerId>,
    pub last_plan_result: Option<Result<DailyPlan, CarePlanningError>>,
    pub last_completion: Option<Completion>,
}

impl PlanWorld {
    /// Creates a world with an empty household.
    #[must_use]
    pub fn new() -> Self {
        let clock = ScenarioClock(
            Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0)
                .single()
                .unwrap_or_default(),
        );
        Self {
            service: CarePlanningService::new(
                Arc::new(InMemoryHouseholdRepository::new()),
                Arc::new(clock),
            ),
            clock,
            available_minutes: 0,
            pets: Vec::new(),
            pending_tasks: Vec::new(),
            owner_id: None,
            last_plan_result: None,
            last_completion: None,
        }
    }

    /// Registers the household on first use and returns its owner id.
    ///
    /// # Errors
    ///
    /// Returns an error if the owner is invalid or cannot be stored.
    pub fn registered_owner(&mut self) -> eyre::Result<OwnerId> {
        if let Some(owner_id) = self.owner_id {
            return Ok(owner_id);
        }
        let mut pets = std::mem::take(&mut self.pets);
        for (pet_index, task) in self.pending_tasks.drain(..) {
            pets.get_mut(pet_index)
                .ok_or_else(|| eyre::eyre!("task queued for a missing pet"))?
                .add_task(task);
        }
        let mut owner = Owner::new("Sam", self.available_minutes)?;
        for pet in pets {
            owner.add_pet(pet);
        }
        self.service
            .register_owner(&owner)
            .wrap_err("register scenario household")?;
        self.owner_id = Some(owner.id());
        Ok(owner.id())
    }

    /// Loads the stored household.
    ///
    /// # Errors
    ///
    /// Returns an error if the household has not been registered.
    pub fn stored_owner(&self) -> eyre::Result<Owner> {
        let owner_id = self
            .owner_id
            .ok_or_else(|| eyre::eyre!("household not registered in scenario world"))?;
        self.service
            .find_owner(owner_id)?
            .ok_or_else(|| eyre::eyre!("household missing from repository"))
    }

    /// Finds the first stored task with `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if no such task exists.
    pub fn task_named(&self, name: &str) -> eyre::Result<TaskId> {
        self.stored_owner()?
            .get_all_tasks()
            .into_iter()
            .find(|task| task.name() == name)
            .map(Task::id)
            .ok_or_else(|| eyre::eyre!("no task named {name}"))
    }
}

impl Default for PlanWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> PlanWorld {
    PlanWorld::default()
}
