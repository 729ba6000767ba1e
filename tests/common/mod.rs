//! Common test utilities and helpers
//!
//! Shared fixtures for the integration tests: JSON documents written into a
//! temporary directory that lives as long as the returned guard.

pub mod fixtures;
