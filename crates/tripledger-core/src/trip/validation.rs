//! Trip form validation.
//!
//! All checks run before any network call; failures are surfaced per field.

use chrono::{Local, NaiveDate};

use super::model::TripFormData;

/// Validation error for the trip form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Origin city is empty.
    EmptyOrigin,
    /// Destination is empty.
    EmptyDestination,
    /// Departure date is before today.
    DepartureInPast,
    /// Return date is not strictly after the departure date.
    ReturnNotAfterDeparture,
    /// Traveler count is zero.
    NoTravelers,
}

impl ValidationError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::EmptyOrigin => "Origin city is required",
            Self::EmptyDestination => "Destination is required",
            Self::DepartureInPast => "Departure date cannot be in the past",
            Self::ReturnNotAfterDeparture => "Return date must be after departure date",
            Self::NoTravelers => "At least one traveler is required",
        }
    }

    /// Get the field name this error relates to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyOrigin => "origin",
            Self::EmptyDestination => "destination",
            Self::DepartureInPast => "departure_date",
            Self::ReturnNotAfterDeparture => "return_date",
            Self::NoTravelers => "travelers",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Result of validating a trip form.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Validate a trip form against today's date.
///
/// Returns `Ok(())` if valid, or `Err(Vec<ValidationError>)` with all errors.
///
/// # Errors
///
/// Returns a vector of `ValidationError` if any fields are invalid.
pub fn validate_form(form: &TripFormData) -> ValidationResult {
    validate_form_at(form, Local::now().date_naive())
}

/// Validate a trip form against an explicit "today".
///
/// Departure on `today` itself is accepted; only earlier dates are rejected.
///
/// # Errors
///
/// Returns a vector of `ValidationError` if any fields are invalid.
pub fn validate_form_at(form: &TripFormData, today: NaiveDate) -> ValidationResult {
    let mut errors = Vec::new();

    if form.origin.trim().is_empty() {
        errors.push(ValidationError::EmptyOrigin);
    }

    if form.destination.trim().is_empty() {
        errors.push(ValidationError::EmptyDestination);
    }

    if form.departure_date < today {
        errors.push(ValidationError::DepartureInPast);
    }

    if form.return_date <= form.departure_date {
        errors.push(ValidationError::ReturnNotAfterDeparture);
    }

    if form.travelers == 0 {
        errors.push(ValidationError::NoTravelers);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::trip::Budget;

    fn form(departure: &str, ret: &str) -> TripFormData {
        TripFormData {
            origin: "Mumbai".to_string(),
            destination: "Goa".to_string(),
            departure_date: departure.parse().unwrap(),
            return_date: ret.parse().unwrap(),
            travelers: 2,
            budget: Budget::MidRange,
        }
    }

    fn today() -> NaiveDate {
        "2025-01-10".parse().unwrap()
    }

    #[test]
    fn valid_form_passes() {
        assert!(validate_form_at(&form("2025-01-10", "2025-01-15"), today()).is_ok());
    }

    #[test]
    fn departure_today_accepted() {
        assert!(validate_form_at(&form("2025-01-10", "2025-01-11"), today()).is_ok());
    }

    #[test]
    fn departure_in_past_rejected() {
        let errors = validate_form_at(&form("2025-01-09", "2025-01-15"), today()).unwrap_err();
        assert!(errors.contains(&ValidationError::DepartureInPast));
    }

    #[test]
    fn return_equal_to_departure_rejected() {
        let errors = validate_form_at(&form("2025-01-10", "2025-01-10"), today()).unwrap_err();
        assert!(errors.contains(&ValidationError::ReturnNotAfterDeparture));
    }

    #[test]
    fn return_before_departure_rejected() {
        let errors = validate_form_at(&form("2025-01-12", "2025-01-11"), today()).unwrap_err();
        assert!(errors.contains(&ValidationError::ReturnNotAfterDeparture));
    }

    #[test]
    fn empty_locations_rejected() {
        let mut f = form("2025-01-10", "2025-01-15");
        f.origin = "  ".to_string();
        f.destination = String::new();
        let errors = validate_form_at(&f, today()).unwrap_err();
        assert!(errors.contains(&ValidationError::EmptyOrigin));
        assert!(errors.contains(&ValidationError::EmptyDestination));
    }

    #[test]
    fn zero_travelers_rejected() {
        let mut f = form("2025-01-10", "2025-01-15");
        f.travelers = 0;
        let errors = validate_form_at(&f, today()).unwrap_err();
        assert_eq!(errors, vec![ValidationError::NoTravelers]);
    }

    #[test]
    fn error_fields_and_messages() {
        assert_eq!(ValidationError::DepartureInPast.field(), "departure_date");
        assert_eq!(
            ValidationError::ReturnNotAfterDeparture.message(),
            "Return date must be after departure date"
        );
    }
}
