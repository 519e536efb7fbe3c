//! Shared test helpers for in-memory household integration tests.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use pawplan::care::{
    adapters::memory::InMemoryHouseholdRepository,
    domain::{Owner, Pet, Task, TimeOfDay},
    services::CarePlanningService,
};
use rstest::fixture;

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Service type used by the integration tests.
pub type TestService = CarePlanningService<InMemoryHouseholdRepository, FixedClock>;

/// Provides a clock fixed at 2026-03-02 08:00 UTC.
#[fixture]
pub fn clock() -> FixedClock {
    FixedClock(
        Utc.with_ymd_and_hms(2026, 3, 2, 8, 0, 0)
            .single()
            .unwrap_or_default(),
    )
}

/// Provides a service over a fresh in-memory repository.
#[fixture]
pub fn service(clock: FixedClock) -> TestService {
    CarePlanningService::new(
        Arc::new(InMemoryHouseholdRepository::new()),
        Arc::new(clock),
    )
}

/// Builds a task with an optional start time label.
///
/// # Errors
///
/// Returns an error if the task fields or the time label are invalid.
pub fn timed_task(
    name: &str,
    duration: u32,
    priority: u8,
    required: bool,
    time: &str,
) -> eyre::Result<Task> {
    Ok(Task::new(name, duration, priority)?
        .with_required(required)
        .with_time(TimeOfDay::parse(time)?))
}

/// Builds the two-pet household used across the integration tests.
///
/// Max the dog and Whiskers the cat share a 120 minute budget, and both have
/// a required task at 09:30.
///
/// # Errors
///
/// Returns an error if any domain value is invalid.
pub fn two_pet_household() -> eyre::Result<Owner> {
    let mut max = Pet::new("Max", "Dog", 5)?.with_special_needs(vec![
        "Hip dysplasia".to_owned(),
        "Medication at 8am".to_owned(),
    ]);
    max.add_task(timed_task("Play Fetch", 20, 3, false, "16:00")?.with_category("Exercise"));
    max.add_task(timed_task("Morning Walk", 30, 5, true, "09:30")?.with_category("Exercise"));
    max.add_task(timed_task("Grooming", 45, 2, false, "14:00")?.with_category("Grooming"));
    max.add_task(timed_task("Give Medication", 5, 5, true, "08:00")?.with_category("Health"));

    let mut whiskers = Pet::new("Whiskers", "Cat", 3)?;
    whiskers.add_task(
        timed_task("Interactive Play", 25, 3, false, "18:00")?.with_category("Enrichment"),
    );
    whiskers.add_task(timed_task("Feed Breakfast", 10, 5, true, "07:30")?.with_category("Feeding"));
    whiskers.add_task(
        timed_task("Clean Litter Box", 15, 4, true, "09:30")?.with_category("Hygiene"),
    );

    let mut owner = Owner::new("Sarah Johnson", 120)?;
    owner.add_pet(max);
    owner.add_pet(whiskers);
    Ok(owner)
}

/// Returns the id of the first task with `name`.
///
/// # Errors
///
/// Returns an error if no task carries that name.
pub fn task_id_named(owner: &Owner, name: &str) -> eyre::Result<pawplan::care::domain::TaskId> {
    owner
        .get_all_tasks()
        .into_iter()
        .find(|task| task.name() == name)
        .map(Task::id)
        .ok_or_else(|| eyre::eyre!("no task named {name}"))
}
