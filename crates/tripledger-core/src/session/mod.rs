//! Session management module.
//!
//! Holds the authenticated user in memory and mirrors it to disk so the
//! session survives restarts.

mod mirror;
mod model;

pub use mirror::{SESSION_FILE, SessionMirror};
pub use model::AuthUser;
