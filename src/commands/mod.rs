//! Command implementations for the playoff report CLI.

pub mod report;
