//! Application services for focus-task decisions.

mod guard;
mod switch;

pub use guard::FocusTaskGuard;
pub use switch::{FocusSwitch, SwitchOutcome};
