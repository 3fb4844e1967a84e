//! HTTP layer for the external auth API.

pub mod api;
pub mod types;
