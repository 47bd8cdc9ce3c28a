//! HTTP plumbing shared by every backend adapter.
//!
//! [`ApiClient`] owns the base URL, the request timeout and the link to the
//! [`SessionContext`](crate::session::SessionContext) that supplies bearer
//! tokens. Adapters build endpoint URLs through it and decode JSON bodies with
//! [`ApiClient::get_json`].

mod client;
mod error;

pub use client::ApiClient;
pub use error::ApiError;
