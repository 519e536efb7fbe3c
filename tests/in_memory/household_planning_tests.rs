//! In-memory integration tests for planning a stored household's day.

use std::sync::Arc;

use super::helpers::{FixedClock, TestService, clock, service, timed_task, two_pet_household};
use pawplan::{
    care::{
        adapters::memory::InMemoryHouseholdRepository,
        domain::{Owner, Pet, Task},
        services::{CarePlanningError, CarePlanningService},
    },
    schedule::{PlannerConfig, PlanningError, Scheduler},
};
use rstest::rstest;

fn planned_names(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(Task::name).collect()
}

#[rstest]
fn two_pet_household_plan_fits_budget(service: TestService) -> eyre::Result<()> {
    let owner = two_pet_household()?;
    service.register_owner(&owner)?;

    let plan = service.plan_day(owner.id())?;

    eyre::ensure!(
        planned_names(&plan.tasks)
            == [
                "Feed Breakfast",
                "Give Medication",
                "Morning Walk",
                "Clean Litter Box",
                "Play Fetch",
                "Interactive Play",
            ],
        "unexpected plan order: {:?}",
        planned_names(&plan.tasks)
    );
    eyre::ensure!(plan.summary.total_minutes == 105);
    eyre::ensure!(plan.summary.task_count == 6);
    eyre::ensure!(plan.summary.excluded == ["Grooming"]);
    let warnings: Vec<String> = plan.conflicts.iter().map(ToString::to_string).collect();
    eyre::ensure!(
        warnings == ["time conflict at 09:30: Morning Walk (Max), Clean Litter Box (Whiskers)"],
        "unexpected warnings: {warnings:?}"
    );
    Ok(())
}

#[rstest]
fn shrinking_budget_drops_lowest_ranked_optional_tasks(
    service: TestService,
) -> eyre::Result<()> {
    let mut owner = two_pet_household()?;
    owner.set_available_minutes(80);
    service.register_owner(&owner)?;

    let plan = service.plan_day(owner.id())?;

    eyre::ensure!(plan.summary.total_minutes == 80);
    eyre::ensure!(plan.summary.excluded == ["Grooming", "Interactive Play"]);
    Ok(())
}

#[rstest]
fn required_overload_is_reported_with_shortfall(service: TestService) -> eyre::Result<()> {
    let mut owner = two_pet_household()?;
    owner.set_available_minutes(45);
    service.register_owner(&owner)?;

    let result = service.plan_day(owner.id());

    let Err(CarePlanningError::Planning(err)) = result else {
        return Err(eyre::eyre!("expected capacity error, got {result:?}"));
    };
    eyre::ensure!(
        err == PlanningError::CapacityExceeded {
            required_minutes: 60,
            available_minutes: 45,
        }
    );
    eyre::ensure!(err.shortfall() == 15);
    Ok(())
}

#[rstest]
fn plan_only_conflicts_follow_service_configuration(clock: FixedClock) -> eyre::Result<()> {
    let mut dog = Pet::new("Max", "Dog", 5)?;
    dog.add_task(timed_task("Morning Walk", 30, 5, true, "09:30")?);
    dog.add_task(timed_task("Vet Visit", 60, 2, false, "09:30")?);
    let mut owner = Owner::new("Sarah", 45)?;
    owner.add_pet(dog);
    let plan_only = CarePlanningService::new(
        Arc::new(InMemoryHouseholdRepository::new()),
        Arc::new(clock),
    )
    .with_config(PlannerConfig::pending_only());
    plan_only.register_owner(&owner)?;

    let plan = plan_only.plan_day(owner.id())?;

    eyre::ensure!(plan.summary.excluded == ["Vet Visit"]);
    eyre::ensure!(plan.conflicts.is_empty());
    Ok(())
}

#[rstest]
fn scheduler_over_stored_copy_matches_service_plan(
    service: TestService,
    clock: FixedClock,
) -> eyre::Result<()> {
    let owner = two_pet_household()?;
    service.register_owner(&owner)?;
    let stored = service
        .find_owner(owner.id())?
        .ok_or_else(|| eyre::eyre!("household should be stored"))?;

    let mut scheduler = Scheduler::new(&stored, &clock);
    let direct = scheduler.generate_daily_plan()?.to_vec();
    let plan = service.plan_day(owner.id())?;

    eyre::ensure!(direct == plan.tasks);
    eyre::ensure!(scheduler.get_plan_summary() == plan.summary);
    Ok(())
}
