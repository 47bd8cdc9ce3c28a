//! Port contracts for focus-task decisions.
//!
//! Ports define infrastructure-agnostic interfaces used by focus services.

pub mod status_query;

pub use status_query::{FocusStatusQuery, FocusStatusQueryError, FocusStatusQueryResult};

#[cfg(test)]
pub(crate) use status_query::MockFocusStatusQuery;
