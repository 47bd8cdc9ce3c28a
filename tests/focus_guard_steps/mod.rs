//! Step definitions for focus-task guard scenarios.

mod given;
mod then;
mod when;
pub mod world;
