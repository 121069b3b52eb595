//! Plain-text rendering of trip plans.

use tripledger_core::trip::TransportLeg;
use tripledger_core::{PlanDetails, TripPlan};

/// Print a full plan to stdout.
pub fn plan(plan: &TripPlan) {
    let details = &plan.details;
    let summary = &details.trip_summary;

    println!(
        "{} -> {}  ({})",
        summary.origin, summary.destination, summary.duration
    );
    println!(
        "  {} to {}",
        summary.dates.departure, summary.dates.return_date
    );

    travel(details);
    accommodation(details);
    itinerary(details);
    expenses(details);

    if !details.travel_tips.is_empty() {
        println!();
        println!("Travel tips:");
        for tip in &details.travel_tips {
            println!("  - {tip}");
        }
    }
}

fn travel(details: &PlanDetails) {
    let travel = &details.travel;
    if travel.mode.is_empty() {
        return;
    }
    println!();
    println!("Travel ({}):", travel.mode);
    leg("Outbound", &travel.outbound);
    leg("Return", &travel.return_leg);
    for option in &travel.alternative_options {
        println!(
            "  Alternative: {} ({}, {})",
            option.mode, option.duration, option.cost
        );
    }
}

fn leg(label: &str, leg: &TransportLeg) {
    if leg.route_details.is_empty() && leg.operator.is_empty() {
        return;
    }
    println!(
        "  {label}: {} via {}, {} ({})",
        leg.route_details, leg.operator, leg.duration, leg.price_range
    );
}

fn accommodation(details: &PlanDetails) {
    let hotels = &details.accommodation.recommended_hotels;
    if hotels.is_empty() {
        return;
    }
    println!();
    println!("Accommodation:");
    for hotel in hotels {
        println!(
            "  {} ({}), {}, {}/night",
            hotel.name, hotel.rating, hotel.location, hotel.price_per_night
        );
    }
}

fn itinerary(details: &PlanDetails) {
    let days = details.ordered_days();
    if days.is_empty() {
        return;
    }
    println!();
    println!("Itinerary:");
    for (key, day) in days {
        println!("  {key} ({}), {}:", day.date, day.estimated_cost);
        for activity in &day.activities {
            println!("    - {activity}");
        }
    }
}

fn expenses(details: &PlanDetails) {
    if details.expense_breakdown.is_empty() && details.total_estimated_cost.amount.is_empty() {
        return;
    }
    println!();
    println!("Expenses:");
    for (category, item) in &details.expense_breakdown {
        println!("  {category}: {} ({})", item.amount, item.description);
    }
    let total = &details.total_estimated_cost;
    if !total.amount.is_empty() {
        println!(
            "  Total: {} ({} per person, {})",
            total.amount, total.per_person, total.currency
        );
    }
}
