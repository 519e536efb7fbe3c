//! When steps for daily care planning BDD scenarios.

use super::world::PlanWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when("the daily plan is generated")]
fn daily_plan_generated(world: &mut PlanWorld) -> Result<(), eyre::Report> {
    let owner_id = world.registered_owner()?;
    world.last_plan_result = Some(world.service.plan_day(owner_id));
    Ok(())
}

#[when(r#"the task "{name}" is completed"#)]
fn task_completed(world: &mut PlanWorld, name: String) -> Result<(), eyre::Report> {
    let owner_id = world.registered_owner()?;
    let task_id = world.task_named(&name)?;
    let completion = world
        .service
        .complete_task(owner_id, task_id)
        .wrap_err("complete scenario task")?;
    world.last_completion = Some(completion);
    Ok(())
}
