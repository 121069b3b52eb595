//! Subcommand implementations.

pub mod auth;
pub mod memories;
pub mod plan;
pub mod trips;
