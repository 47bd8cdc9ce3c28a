//! When steps for focus-task guard BDD scenarios.

use super::world::{FocusGuardWorld, run_async};
use fanquest::focus::services::SwitchOutcome;
use rstest_bdd_macros::when;

#[when(r#"focus is requested on for "{code}""#)]
fn request_focus_on(world: &mut FocusGuardWorld, code: String) {
    let decision = run_async(world.guard.evaluate_transition(&code, true, false));
    world.last_decision = Some(decision);
}

#[when("focus is requested on without an invite code")]
fn request_focus_on_without_code(world: &mut FocusGuardWorld) {
    let decision = run_async(world.guard.evaluate_transition("", true, false));
    world.last_decision = Some(decision);
}

#[when(r#"focus is requested off for "{code}""#)]
fn request_focus_off(world: &mut FocusGuardWorld, code: String) {
    let decision = run_async(world.guard.evaluate_transition(&code, false, false));
    world.last_decision = Some(decision);
}

#[when(r#"the active focus task of "{code}" is turned off while editing"#)]
fn turn_off_while_editing(world: &mut FocusGuardWorld, code: String) {
    let decision = run_async(world.guard.evaluate_transition(&code, false, true));
    world.last_decision = Some(decision);
}

#[when(r#"the focus switch is flipped on for "{code}""#)]
fn flip_switch_on(world: &mut FocusGuardWorld, code: String) -> Result<(), eyre::Report> {
    let switch = world
        .switch
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing focus switch in scenario world"))?;
    match run_async(switch.toggle(&world.guard, &code, true)) {
        SwitchOutcome::Decided(decision) => {
            world.last_decision = Some(decision);
            Ok(())
        }
        other => Err(eyre::eyre!("expected a decision, got {other:?}")),
    }
}
