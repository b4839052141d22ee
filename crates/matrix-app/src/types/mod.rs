//! Wire types for the HTTP API and the statistics service

pub mod api;
pub mod stats;
