//! Unit tests for the focus module.
