//! In-memory integration tests for completing recurring tasks.

use super::helpers::{FixedClock, TestService, clock, service, task_id_named, two_pet_household};
use chrono::TimeDelta;
use pawplan::care::{
    domain::{CareDomainError, Completion, Frequency, TaskId},
    services::CarePlanningError,
};
use rstest::rstest;

#[rstest]
fn completing_daily_walk_queues_tomorrows_walk(
    service: TestService,
    clock: FixedClock,
) -> eyre::Result<()> {
    let owner = two_pet_household()?;
    let walk_id = task_id_named(&owner, "Morning Walk")?;
    service.register_owner(&owner)?;

    let completion = service.complete_task(owner.id(), walk_id)?;

    let Completion::Rescheduled(successor) = completion else {
        return Err(eyre::eyre!("daily walk should be rescheduled, got {completion:?}"));
    };
    eyre::ensure!(successor.frequency() == Frequency::Daily);
    eyre::ensure!(successor.due_date() == Some(clock.0 + TimeDelta::days(1)));

    let stored = service
        .find_owner(owner.id())?
        .ok_or_else(|| eyre::eyre!("household should be stored"))?;
    let max = stored
        .pets()
        .iter()
        .find(|pet| pet.name() == "Max")
        .ok_or_else(|| eyre::eyre!("Max should be stored"))?;
    eyre::ensure!(max.tasks().len() == 5);
    eyre::ensure!(max.completed_task_count() == 1);
    eyre::ensure!(max.task(successor.id()).is_some_and(|task| !task.is_completed()));
    Ok(())
}

#[rstest]
fn repeated_completion_leaves_household_unchanged(service: TestService) -> eyre::Result<()> {
    let owner = two_pet_household()?;
    let feed_id = task_id_named(&owner, "Feed Breakfast")?;
    service.register_owner(&owner)?;
    service.complete_task(owner.id(), feed_id)?;
    let before = service.find_owner(owner.id())?;

    let second = service.complete_task(owner.id(), feed_id)?;

    eyre::ensure!(second == Completion::AlreadyCompleted);
    eyre::ensure!(service.find_owner(owner.id())? == before);
    Ok(())
}

#[rstest]
fn successor_is_planned_alongside_completed_original(service: TestService) -> eyre::Result<()> {
    let owner = two_pet_household()?;
    let medication_id = task_id_named(&owner, "Give Medication")?;
    service.register_owner(&owner)?;
    service.complete_task(owner.id(), medication_id)?;

    let plan = service.plan_day(owner.id())?;

    let medication_entries = plan
        .tasks
        .iter()
        .filter(|task| task.name() == "Give Medication")
        .count();
    eyre::ensure!(medication_entries == 2, "history and next occurrence both planned");
    eyre::ensure!(plan.summary.total_minutes == 110);
    Ok(())
}

#[rstest]
fn completing_unknown_task_is_a_domain_error(service: TestService) -> eyre::Result<()> {
    let owner = two_pet_household()?;
    service.register_owner(&owner)?;
    let missing = TaskId::new();

    let result = service.complete_task(owner.id(), missing);

    eyre::ensure!(
        matches!(
            result,
            Err(CarePlanningError::Domain(CareDomainError::TaskNotFound(id))) if id == missing
        ),
        "unexpected result: {result:?}"
    );
    Ok(())
}

#[rstest]
fn priority_updates_are_persisted(service: TestService) -> eyre::Result<()> {
    let owner = two_pet_household()?;
    let grooming_id = task_id_named(&owner, "Grooming")?;
    service.register_owner(&owner)?;

    service.set_task_priority(owner.id(), grooming_id, 5)?;

    let stored = service
        .find_owner(owner.id())?
        .ok_or_else(|| eyre::eyre!("household should be stored"))?;
    eyre::ensure!(
        stored
            .find_task(grooming_id)
            .is_some_and(|task| task.priority().value() == 5)
    );
    Ok(())
}
