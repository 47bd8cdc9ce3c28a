//! Then steps for focus-task guard BDD scenarios.

use super::world::FocusGuardWorld;
use fanquest::focus::domain::{Approval, FocusDecision};
use rstest_bdd_macros::then;

#[then("the change is allowed without confirmation")]
fn allowed_without_confirmation(world: &FocusGuardWorld) -> Result<(), eyre::Report> {
    let decision = world.decision()?;
    if *decision != FocusDecision::Allowed(Approval::Unchecked) {
        return Err(eyre::eyre!("expected a silent approval, got {decision:?}"));
    }
    Ok(())
}

#[then("the change is allowed after confirmation")]
fn allowed_after_confirmation(world: &FocusGuardWorld) -> Result<(), eyre::Report> {
    let decision = world.decision()?;
    if !decision.requires_confirmation() {
        return Err(eyre::eyre!("expected a confirmation prompt, got {decision:?}"));
    }
    Ok(())
}

#[then(r#"the change is rejected as "{kind}""#)]
fn rejected_as(world: &FocusGuardWorld, kind: String) -> Result<(), eyre::Report> {
    let decision = world.decision()?;
    if decision.is_allowed() || decision.kind().as_str() != kind {
        return Err(eyre::eyre!("expected rejection {kind}, got {decision:?}"));
    }
    Ok(())
}

#[then(r#"the rejection mentions "{text}""#)]
fn rejection_mentions(world: &FocusGuardWorld, text: String) -> Result<(), eyre::Report> {
    let rejection = world
        .decision()?
        .rejection()
        .ok_or_else(|| eyre::eyre!("expected a rejection"))?;
    let message = rejection.to_string();
    if !message.contains(&text) {
        return Err(eyre::eyre!("expected '{message}' to mention '{text}'"));
    }
    Ok(())
}

#[then("no status query was made")]
fn no_status_query(world: &FocusGuardWorld) -> Result<(), eyre::Report> {
    let count = world.statuses.query_count();
    if count != 0 {
        return Err(eyre::eyre!("expected no status query, found {count}"));
    }
    Ok(())
}

#[then("the focus switch is off")]
fn switch_is_off(world: &FocusGuardWorld) -> Result<(), eyre::Report> {
    let switch = world
        .switch
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing focus switch in scenario world"))?;
    if switch.is_on() || switch.is_checking() {
        return Err(eyre::eyre!("expected the focus switch to be off and idle"));
    }
    Ok(())
}
