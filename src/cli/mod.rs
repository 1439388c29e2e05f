//! CLI command handlers
//!
//! Each subcommand group is implemented in its own module.

pub mod config;
pub mod evaluate;
pub mod helpers;
pub mod history;
pub mod subjects;
