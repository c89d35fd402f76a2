//! CLI library components for the bait trial report.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod summary;
