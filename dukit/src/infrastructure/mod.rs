//! Process-level plumbing: configuration loading and logging.

pub mod config;
pub mod telemetry;
