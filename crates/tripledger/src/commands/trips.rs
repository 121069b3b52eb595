//! The `trips`, `show` and `delete` subcommands.

use tripledger_core::{TripPlan, TripStore};

use crate::render;

pub fn list() -> anyhow::Result<()> {
    let store = TripStore::open_default()?;
    let mut plans = store.list()?;
    plans.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    render_list(&plans);
    Ok(())
}

pub fn show(id: &str) -> anyhow::Result<()> {
    let store = TripStore::open_default()?;
    match store.get_by_id(id)? {
        Some(plan) => render::plan(&plan),
        None => {
            // Unknown ids fall back to the overview instead of failing.
            eprintln!("No trip plan with id {id}, showing all plans");
            let mut plans = store.list()?;
            plans.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            render_list(&plans);
        }
    }
    Ok(())
}

pub fn delete(id: &str) -> anyhow::Result<()> {
    let store = TripStore::open_default()?;
    store.delete_by_id(id)?;
    println!("Deleted trip plan {id}");
    Ok(())
}

fn render_list(plans: &[TripPlan]) {
    if plans.is_empty() {
        println!("No saved trip plans yet. Run `tripledger plan` to create one.");
        return;
    }
    for plan in plans {
        println!(
            "{}  {} -> {}  {}  (saved {})",
            plan.id,
            plan.details.trip_summary.origin,
            plan.details.trip_summary.destination,
            plan.details.trip_summary.duration,
            plan.created_at.format("%Y-%m-%d %H:%M"),
        );
    }
}
