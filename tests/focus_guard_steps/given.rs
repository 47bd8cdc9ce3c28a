//! Given steps for focus-task guard BDD scenarios.

use super::world::{FocusGuardWorld, invite_code};
use fanquest::api::ApiError;
use fanquest::focus::{
    domain::{FocusTaskStatus, FocusTaskSummary, TaskId, parse_backend_timestamp},
    ports::FocusStatusQueryError,
    services::FocusSwitch,
};
use rstest_bdd_macros::given;
use uuid::Uuid;

#[given(r#"the invite code "{code}" has no focus task"#)]
fn has_no_focus_task(world: &mut FocusGuardWorld, code: String) -> Result<(), eyre::Report> {
    world
        .statuses
        .set_status(invite_code(&code)?, FocusTaskStatus::vacant());
    Ok(())
}

#[given(r#"the invite code "{code}" has the focus task "{title}""#)]
fn has_focus_task(
    world: &mut FocusGuardWorld,
    code: String,
    title: String,
) -> Result<(), eyre::Report> {
    let task = FocusTaskSummary::new(TaskId::from_uuid(Uuid::from_u128(1)), title);
    world.statuses.set_status(
        invite_code(&code)?,
        FocusTaskStatus::vacant().with_focus_task(task),
    );
    Ok(())
}

#[given(r#"the invite code "{code}" changed its focus task at "{changed_at}""#)]
fn changed_focus_task_at(
    world: &mut FocusGuardWorld,
    code: String,
    changed_at: String,
) -> Result<(), eyre::Report> {
    let changed_at = parse_backend_timestamp(&changed_at)?;
    world.statuses.set_status(
        invite_code(&code)?,
        FocusTaskStatus::vacant().with_cooldown_since(changed_at),
    );
    Ok(())
}

#[given(r#"the status service times out for "{code}""#)]
fn status_service_times_out(world: &mut FocusGuardWorld, code: String) -> Result<(), eyre::Report> {
    world.statuses.fail_with(
        invite_code(&code)?,
        FocusStatusQueryError::Api(ApiError::Timeout),
    );
    Ok(())
}

#[given("a task form whose focus switch is off")]
fn task_form_switch_off(world: &mut FocusGuardWorld) {
    world.switch = Some(FocusSwitch::new(false));
}
