//! Trip planning module.
//!
//! Provides the trip plan data model, form validation, identifier
//! generation, an offline sample plan builder, and local storage.

mod id;
mod mock;
mod model;
mod repository;
mod validation;

pub use id::generate_trip_id;
pub use mock::sample_plan_details;
pub use model::{
    Accommodation, AlternativeOption, Budget, DayPlan, ExpenseItem, Hotel, PlanDetails,
    TotalCost, TransportLeg, TravelPlan, TripDates, TripFormData, TripPlan, TripSummary,
};
pub use repository::{TRIP_STORE_FILE, TripStore};
pub use validation::{ValidationError, ValidationResult, validate_form, validate_form_at};
