//! Behaviour tests for the focus-task guard.

#[path = "focus_guard_steps/mod.rs"]
mod focus_guard_steps_defs;

use focus_guard_steps_defs::world::{FocusGuardWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/focus_guard.feature",
    name = "Turning focus off needs no status check"
)]
#[tokio::test(flavor = "multi_thread")]
async fn deactivation_needs_no_check(world: FocusGuardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/focus_guard.feature",
    name = "Activation requires an invite code"
)]
#[tokio::test(flavor = "multi_thread")]
async fn activation_requires_invite_code(world: FocusGuardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/focus_guard.feature",
    name = "Another task already holds the focus slot"
)]
#[tokio::test(flavor = "multi_thread")]
async fn occupied_focus_slot(world: FocusGuardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/focus_guard.feature",
    name = "The invite code is cooling down"
)]
#[tokio::test(flavor = "multi_thread")]
async fn cooling_down(world: FocusGuardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/focus_guard.feature",
    name = "A vacant slot outside cooldown asks for confirmation"
)]
#[tokio::test(flavor = "multi_thread")]
async fn vacant_slot_needs_confirmation(world: FocusGuardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/focus_guard.feature",
    name = "An active focus task cannot be turned off while editing"
)]
#[tokio::test(flavor = "multi_thread")]
async fn editing_active_focus_is_locked(world: FocusGuardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/focus_guard.feature",
    name = "An unreachable backend blocks activation"
)]
#[tokio::test(flavor = "multi_thread")]
async fn unreachable_backend_blocks(world: FocusGuardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/focus_guard.feature",
    name = "The focus switch reverts after a rejection"
)]
#[tokio::test(flavor = "multi_thread")]
async fn switch_reverts_after_rejection(world: FocusGuardWorld) {
    let _ = world;
}
