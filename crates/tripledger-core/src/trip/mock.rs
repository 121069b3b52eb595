//! Offline sample plan builder.
//!
//! Produces a fully populated [`PlanDetails`] from a form without calling
//! the backend. Used by the CLI's offline mode and as a realistic test
//! fixture.

use chrono::Days;

use super::model::{
    Accommodation, AlternativeOption, Budget, DayPlan, ExpenseItem, Hotel, PlanDetails,
    TotalCost, TransportLeg, TravelPlan, TripDates, TripFormData, TripSummary,
};

const DAY_ACTIVITIES: [&[&str]; 3] = [
    &[
        "Arrival and check-in to hotel",
        "Explore local markets and street food",
        "Visit main city attractions",
    ],
    &[
        "Morning sightseeing tour",
        "Lunch at traditional restaurant",
        "Evening cultural show",
    ],
    &[
        "Adventure activities",
        "Local cuisine tasting",
        "Shopping for souvenirs",
    ],
];

const TRAVEL_TIPS: [&str; 5] = [
    "Book flights and accommodation in advance for better rates",
    "Pack according to the weather conditions of your destination",
    "Keep important documents and copies in separate bags",
    "Learn basic local phrases to enhance your experience",
    "Respect local customs and traditions",
];

/// Build a sample plan for the given form, without any backend call.
///
/// Costs scale with the traveler count and budget tier; the itinerary covers
/// every day of the trip.
#[must_use]
pub fn sample_plan_details(form: &TripFormData) -> PlanDetails {
    let multiplier = budget_multiplier(form.budget);
    let nights = (form.return_date - form.departure_date).num_days().max(1);
    let days = nights + 1;
    let base_cost = scale(25_000 * i64::from(form.travelers), multiplier);

    let mut daily_itinerary = std::collections::BTreeMap::new();
    for day in 0..days {
        #[allow(clippy::cast_sign_loss)]
        let date = form
            .departure_date
            .checked_add_days(Days::new(day as u64))
            .unwrap_or(form.departure_date);
        #[allow(clippy::cast_sign_loss)]
        let activities = DAY_ACTIVITIES[(day as usize) % DAY_ACTIVITIES.len()];
        daily_itinerary.insert(
            format!("day_{}", day + 1),
            DayPlan {
                date: date.to_string(),
                activities: activities.iter().map(ToString::to_string).collect(),
                estimated_cost: inr(scale(2_000, multiplier)),
            },
        );
    }

    let mut expense_breakdown = std::collections::BTreeMap::new();
    expense_breakdown.insert(
        "transportation".to_string(),
        ExpenseItem {
            amount: inr(scale(16_000 * i64::from(form.travelers), multiplier)),
            description: format!("Round trip flights for {} traveler(s)", form.travelers),
        },
    );
    expense_breakdown.insert(
        "accommodation".to_string(),
        ExpenseItem {
            amount: inr(scale(12_000, multiplier)),
            description: "Hotel accommodation for entire stay".to_string(),
        },
    );
    expense_breakdown.insert(
        "food".to_string(),
        ExpenseItem {
            amount: inr(scale(8_000 * i64::from(form.travelers), multiplier)),
            description: format!("Meals and dining for {} traveler(s)", form.travelers),
        },
    );

    let leg = |from: &str, to: &str, departure: &str, arrival: &str| TransportLeg {
        transport_type: "airline".to_string(),
        operator: "IndiGo".to_string(),
        departure_time: departure.to_string(),
        arrival_time: arrival.to_string(),
        duration: "2 hours 30 minutes".to_string(),
        distance: "N/A".to_string(),
        price_range: format!("{} - {}", inr(scale(8_000, multiplier)), inr(scale(12_000, multiplier))),
        route_details: format!("{from} to {to}"),
        link: String::new(),
    };

    PlanDetails {
        trip_summary: TripSummary {
            destination: form.destination.clone(),
            origin: form.origin.clone(),
            dates: TripDates {
                departure: form.departure_date.to_string(),
                return_date: form.return_date.to_string(),
            },
            duration: format!("{days} days, {nights} nights"),
        },
        travel: TravelPlan {
            mode: "flight".to_string(),
            outbound: leg(&form.origin, &form.destination, "Morning", "Afternoon"),
            return_leg: leg(&form.destination, &form.origin, "Afternoon", "Evening"),
            alternative_options: vec![AlternativeOption {
                mode: "train".to_string(),
                duration: "18-24 hours".to_string(),
                cost: format!("{} - {}", inr(scale(2_000, multiplier)), inr(scale(4_000, multiplier))),
                pros_cons: "Longer duration but more scenic route and budget-friendly".to_string(),
            }],
        },
        accommodation: Accommodation {
            recommended_hotels: vec![Hotel {
                name: match form.budget {
                    Budget::Luxury => "Luxury Resort & Spa",
                    Budget::MidRange => "Premium Hotel",
                    Budget::Budget => "Comfort Inn",
                }
                .to_string(),
                location: format!("Central {}", form.destination),
                price_per_night: format!(
                    "{} - {}",
                    inr(scale(3_000, multiplier)),
                    inr(scale(5_000, multiplier))
                ),
                rating: match form.budget {
                    Budget::Luxury => "5-star",
                    Budget::MidRange => "4-star",
                    Budget::Budget => "3-star",
                }
                .to_string(),
                amenities: vec!["Wi-Fi".to_string(), "Restaurant".to_string()],
                link: String::new(),
            }],
        },
        daily_itinerary,
        expense_breakdown,
        total_estimated_cost: TotalCost {
            amount: format!("{} - {}", inr(base_cost * 4 / 5), inr(base_cost * 6 / 5)),
            per_person: inr(base_cost / i64::from(form.travelers.max(1))),
            currency: "INR".to_string(),
        },
        travel_tips: TRAVEL_TIPS.iter().map(ToString::to_string).collect(),
    }
}

const fn budget_multiplier(budget: Budget) -> i64 {
    // Multiplier in tenths: budget 1.0x, mid-range 1.5x, luxury 2.5x.
    match budget {
        Budget::Budget => 10,
        Budget::MidRange => 15,
        Budget::Luxury => 25,
    }
}

const fn scale(amount: i64, multiplier_tenths: i64) -> i64 {
    amount * multiplier_tenths / 10
}

/// Format an amount as rupees with thousands separators.
fn inr(amount: i64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("₹{grouped}")
}
