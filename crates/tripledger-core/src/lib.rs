//! # tripledger-core
//!
//! Core business logic for the `TripLedger` travel planner.
//!
//! This crate provides:
//! - Trip plan models and local JSON storage
//! - Trip generation via the remote AI planning service
//! - Progress phase tracking for long-running generation requests
//! - Session state mirrored to disk for reload survival
//! - **Travel Memories** - map pins persisted entirely client-side
//!
//! Rendering is left to the front-end; everything here is headless.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod config;
mod error;
pub mod memories;
pub mod progress;
pub mod service;
pub mod session;
pub mod trip;

pub use config::BackendConfig;
pub use error::{Error, Result};
pub use memories::{MemoryStore, TravelMemory};
pub use progress::{GENERATION_PHASES, PHASE_DWELL, PhaseState, ProgressTracker};
pub use service::{AuthClient, Credentials, PlannerClient};
pub use session::{AuthUser, SessionMirror};
pub use trip::{
    Budget, PlanDetails, TripFormData, TripPlan, TripStore, ValidationError, ValidationResult,
    generate_trip_id, sample_plan_details, validate_form,
};
