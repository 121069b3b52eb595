//! Trip plan model types.
//!
//! `PlanDetails` mirrors the JSON the planning backend returns; `TripPlan`
//! is that payload completed with a locally generated id and save timestamp.
//! Backend fields are free-form display strings (price ranges, durations,
//! ratings) and are kept as such.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Form input for a new trip request. Transient, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripFormData {
    /// Origin city.
    pub origin: String,
    /// Destination city or region.
    pub destination: String,
    /// Departure date.
    pub departure_date: NaiveDate,
    /// Return date.
    pub return_date: NaiveDate,
    /// Number of travelers.
    pub travelers: u32,
    /// Selected budget tier.
    pub budget: Budget,
}

/// Budget tier options recognized by the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Budget {
    /// Affordable accommodations and local transport.
    Budget,
    /// Comfortable hotels and mixed transport.
    MidRange,
    /// Premium accommodations and private transport.
    Luxury,
}

impl Budget {
    /// Wire/display value for the tier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::MidRange => "mid-range",
            Self::Luxury => "luxury",
        }
    }

    /// Label shown in the budget selector.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Budget => "Budget (₹20,000 - ₹50,000)",
            Self::MidRange => "Mid-range (₹50,000 - ₹1,00,000)",
            Self::Luxury => "Luxury (₹1,00,000+)",
        }
    }

    /// One-line description of what the tier buys.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Budget => "Affordable accommodations and local transport",
            Self::MidRange => "Comfortable hotels and mixed transport",
            Self::Luxury => "Premium accommodations and private transport",
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Budget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "budget" => Ok(Self::Budget),
            "mid-range" => Ok(Self::MidRange),
            "luxury" => Ok(Self::Luxury),
            other => Err(format!(
                "unknown budget tier {other:?}, expected budget, mid-range or luxury"
            )),
        }
    }
}

/// A generated trip plan persisted in the local store.
///
/// `id` and `createdAt` are assigned locally at save time; the backend
/// response carries neither. Records are immutable after save except via
/// full delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    /// Locally generated identifier.
    pub id: String,
    /// When the plan was saved.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// The backend-provided plan content.
    #[serde(flatten)]
    pub details: PlanDetails,
}

impl TripPlan {
    /// Complete a backend draft with a locally generated id and timestamp.
    #[must_use]
    pub fn from_details(
        id: impl Into<String>,
        created_at: DateTime<Utc>,
        details: PlanDetails,
    ) -> Self {
        Self {
            id: id.into(),
            created_at,
            details,
        }
    }
}

/// Plan content as returned by the planning backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanDetails {
    /// High-level summary of the trip.
    pub trip_summary: TripSummary,
    /// Outbound/return transport and alternatives.
    pub travel: TravelPlan,
    /// Recommended lodgings.
    pub accommodation: Accommodation,
    /// Day key (`day_1`, `day_2`, ...) to plan for that day.
    pub daily_itinerary: BTreeMap<String, DayPlan>,
    /// Expense category to amount and description.
    pub expense_breakdown: BTreeMap<String, ExpenseItem>,
    /// Overall cost estimate.
    pub total_estimated_cost: TotalCost,
    /// Free-text tips, in backend order.
    pub travel_tips: Vec<String>,
}

impl PlanDetails {
    /// Day entries in itinerary order.
    ///
    /// Day keys follow the `day_N` convention; ordering is by the numeric
    /// suffix, so `day_10` comes after `day_9` rather than after `day_1`.
    #[must_use]
    pub fn ordered_days(&self) -> Vec<(&str, &DayPlan)> {
        let mut days: Vec<(&str, &DayPlan)> = self
            .daily_itinerary
            .iter()
            .map(|(key, plan)| (key.as_str(), plan))
            .collect();
        days.sort_by_key(|(key, _)| (day_index(key), *key));
        days
    }
}

/// Numeric suffix of a `day_N` key; keys without one sort last.
fn day_index(key: &str) -> u32 {
    key.rsplit('_')
        .next()
        .and_then(|n| n.parse().ok())
        .unwrap_or(u32::MAX)
}

/// High-level trip summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripSummary {
    /// Destination city or region.
    pub destination: String,
    /// Origin city.
    pub origin: String,
    /// Departure and return dates.
    pub dates: TripDates,
    /// Human-readable duration, e.g. `5 days, 4 nights`.
    pub duration: String,
}

/// Departure and return dates of a trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripDates {
    /// Departure date, `YYYY-MM-DD`.
    pub departure: String,
    /// Return date, `YYYY-MM-DD`.
    #[serde(rename = "return")]
    pub return_date: String,
}

/// Transport section of a plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelPlan {
    /// Primary transport mode, e.g. `flight`.
    pub mode: String,
    /// Outbound leg.
    pub outbound: TransportLeg,
    /// Return leg.
    #[serde(rename = "return")]
    pub return_leg: TransportLeg,
    /// Other ways to make the trip.
    pub alternative_options: Vec<AlternativeOption>,
}

/// One transport leg.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportLeg {
    /// Kind of transport, e.g. `airline`.
    pub transport_type: String,
    /// Operating company.
    pub operator: String,
    /// Departure time description.
    pub departure_time: String,
    /// Arrival time description.
    pub arrival_time: String,
    /// Leg duration description.
    pub duration: String,
    /// Distance description.
    pub distance: String,
    /// Price range for the leg.
    pub price_range: String,
    /// Route detail text.
    pub route_details: String,
    /// Booking link.
    pub link: String,
}

/// An alternative transport option.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlternativeOption {
    /// Transport mode.
    pub mode: String,
    /// Duration description.
    pub duration: String,
    /// Cost description.
    pub cost: String,
    /// Pros and cons text.
    pub pros_cons: String,
}

/// Accommodation section of a plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Accommodation {
    /// Recommended lodgings.
    pub recommended_hotels: Vec<Hotel>,
}

/// A recommended lodging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hotel {
    /// Hotel name.
    pub name: String,
    /// Location description.
    pub location: String,
    /// Nightly price range.
    pub price_per_night: String,
    /// Rating description, e.g. `4-star`.
    pub rating: String,
    /// Amenity tags.
    pub amenities: Vec<String>,
    /// Booking link.
    pub link: String,
}

/// One day of the itinerary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayPlan {
    /// Date for this day, `YYYY-MM-DD`.
    pub date: String,
    /// Activity descriptions in display order.
    pub activities: Vec<String>,
    /// Estimated cost for the day.
    pub estimated_cost: String,
}

/// One expense category entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpenseItem {
    /// Amount description.
    pub amount: String,
    /// What the amount covers.
    pub description: String,
}

/// Overall cost estimate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TotalCost {
    /// Total amount description.
    pub amount: String,
    /// Per-person amount description.
    pub per_person: String,
    /// Currency label.
    pub currency: String,
}
