//! Core services for backend operations.
//!
//! This module provides the service layer that bridges the front-end with
//! the remote planning and user endpoints.

pub mod auth;
pub mod planner;

pub use auth::{AuthClient, Credentials};
pub use planner::PlannerClient;
