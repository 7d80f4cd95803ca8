//! DUKIT developer utilities.
//!
//! Hosts the file comparison tool on top of the `diff-engine` crate:
//! configuration, logging, the blocking-pool runner with its timeout, and
//! terminal rendering. The `dukit` binary wires these together through
//! [`app`].

pub mod app;
pub mod cli;
pub mod infrastructure;
pub mod render;
pub mod tools;
