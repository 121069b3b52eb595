//! Travel memories module.
//!
//! Map pins created, edited and deleted entirely client-side, persisted as
//! one flat list with no backend involvement.

mod model;
mod repository;

pub use model::TravelMemory;
pub use repository::{MEMORY_STORE_FILE, MemoryStore};
