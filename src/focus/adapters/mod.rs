//! Adapter implementations for focus status queries.

pub mod http;
pub mod memory;

pub use http::HttpFocusStatusClient;
pub use memory::InMemoryFocusStatusQuery;
