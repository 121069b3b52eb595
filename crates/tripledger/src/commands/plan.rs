//! The `plan` subcommand.

use anyhow::bail;
use chrono::Utc;
use tracing::debug;
use tripledger_core::{
    BackendConfig, PhaseState, PlannerClient, ProgressTracker, SessionMirror, TripFormData,
    TripPlan, TripStore, generate_trip_id, sample_plan_details, validate_form,
};

use crate::cli::PlanArgs;
use crate::render;

pub async fn run(args: PlanArgs) -> anyhow::Result<()> {
    let form = TripFormData {
        origin: args.from,
        destination: args.to,
        departure_date: args.departure,
        return_date: args.return_date,
        travelers: args.travelers,
        budget: args.budget,
    };

    if let Err(errors) = validate_form(&form) {
        for error in &errors {
            eprintln!("{}: {}", error.field(), error.message());
        }
        bail!("invalid trip form");
    }

    let store = TripStore::open_default()?;

    let plan = if args.offline {
        let plan = TripPlan::from_details(generate_trip_id(), Utc::now(), sample_plan_details(&form));
        store.save(&plan)?;
        plan
    } else {
        let session = SessionMirror::open_default()?;
        let tracker = ProgressTracker::new();
        let printer = tokio::spawn(print_phases(tracker.subscribe(), tracker.labels().to_vec()));

        let client = PlannerClient::new(BackendConfig::from_env());
        let result = client.plan_trip(&form, &session, &store, &tracker).await;
        if let Err(err) = printer.await {
            debug!("phase printer task ended abnormally: {err}");
        }
        result?
    };

    println!("Saved trip plan {}", plan.id);
    println!();
    render::plan(&plan);
    Ok(())
}

/// Print each phase label as it activates, until the indicator hides.
async fn print_phases(
    mut rx: tokio::sync::watch::Receiver<PhaseState>,
    labels: Vec<String>,
) {
    while rx.changed().await.is_ok() {
        let state = *rx.borrow_and_update();
        match state {
            PhaseState::Active(index) => {
                if let Some(label) = labels.get(index) {
                    eprintln!("[{}/{}] {label}", index + 1, labels.len());
                }
            }
            PhaseState::Hidden => break,
            PhaseState::Idle => {}
        }
    }
}
