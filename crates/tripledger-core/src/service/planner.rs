//! Trip generation client for the remote planning service.

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::BackendConfig;
use crate::error::{Error, Result};
use crate::progress::ProgressTracker;
use crate::session::SessionMirror;
use crate::trip::{PlanDetails, TripFormData, TripPlan, TripStore, generate_trip_id};

/// Path of the plan generation endpoint.
const GENERATE_PLAN_PATH: &str = "/api/v1/generate-plan-aggressive";

/// Request body for the generation endpoint.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    user_prompt: &'a str,
    user_id: &'a Value,
}

/// Client for the remote trip planning service.
#[derive(Debug, Clone)]
pub struct PlannerClient {
    config: BackendConfig,
    http_client: reqwest::Client,
}

impl PlannerClient {
    /// Create a client against the given backend.
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Build the natural-language prompt for a validated form.
    ///
    /// The prompt embeds origin, destination, both dates and the traveler
    /// count verbatim; the backend parses it on its side.
    #[must_use]
    pub fn build_prompt(form: &TripFormData) -> String {
        format!(
            "i want to travel from {} to {} dates {} to {} with a group of {}",
            form.origin, form.destination, form.departure_date, form.return_date, form.travelers
        )
    }

    /// Request a plan draft from the backend.
    ///
    /// One request, no retry, no backoff, no partial results.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GenerationFailed`] for any non-success response, and
    /// propagates transport and decode failures.
    pub async fn generate(&self, form: &TripFormData, user_id: &Value) -> Result<PlanDetails> {
        let user_prompt = Self::build_prompt(form);
        debug!("requesting plan: {user_prompt}");

        let response = self
            .http_client
            .post(self.config.endpoint(GENERATE_PLAN_PATH))
            .json(&GenerateRequest {
                user_prompt: &user_prompt,
                user_id,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::GenerationFailed);
        }

        response.json().await.map_err(Into::into)
    }

    /// Generate a plan and persist it, driving the progress tracker
    /// alongside.
    ///
    /// The phase animation and the network request run independently and are
    /// joined once the request settles: on success the draft is completed
    /// with a fresh id and timestamp, saved as the newest record, and
    /// returned after the animation has also finished. On failure the
    /// indicator is hidden immediately and no record is created.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotLoggedIn`] without touching the network when the
    /// session carries no user id. Propagates generation and storage
    /// failures.
    pub async fn plan_trip(
        &self,
        form: &TripFormData,
        session: &SessionMirror,
        store: &TripStore,
        progress: &ProgressTracker,
    ) -> Result<TripPlan> {
        let Some(user_id) = session.current().and_then(|user| user.id().cloned()) else {
            return Err(Error::NotLoggedIn);
        };

        let animation = progress.run();
        let request = self.generate(form, &user_id);
        tokio::pin!(animation);
        tokio::pin!(request);

        let details = tokio::select! {
            result = &mut request => match result {
                Ok(details) => {
                    animation.await;
                    details
                }
                Err(err) => {
                    progress.hide();
                    return Err(err);
                }
            },
            () = &mut animation => match request.await {
                Ok(details) => details,
                Err(err) => {
                    progress.hide();
                    return Err(err);
                }
            },
        };

        let plan = TripPlan::from_details(generate_trip_id(), Utc::now(), details);
        store.save(&plan)?;
        info!("saved trip plan {}", plan.id);
        Ok(plan)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::trip::Budget;
    use proptest::prelude::*;

    fn form(origin: &str, destination: &str, travelers: u32) -> TripFormData {
        TripFormData {
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure_date: "2025-01-10".parse().unwrap(),
            return_date: "2025-01-15".parse().unwrap(),
            travelers,
            budget: Budget::MidRange,
        }
    }

    #[test]
    fn prompt_matches_original_wording() {
        let prompt = PlannerClient::build_prompt(&form("Mumbai", "Goa", 2));
        assert_eq!(
            prompt,
            "i want to travel from Mumbai to Goa dates 2025-01-10 to 2025-01-15 with a group of 2"
        );
    }

    proptest! {
        #[test]
        fn prompt_embeds_every_field_verbatim(
            origin in "[A-Za-z][A-Za-z ]{0,19}",
            destination in "[A-Za-z][A-Za-z ]{0,19}",
            travelers in 1u32..=8,
        ) {
            let form = form(&origin, &destination, travelers);
            let prompt = PlannerClient::build_prompt(&form);
            prop_assert!(prompt.contains(&origin));
            prop_assert!(prompt.contains(&destination));
            prop_assert!(prompt.contains("2025-01-10"));
            prop_assert!(prompt.contains("2025-01-15"));
            prop_assert!(prompt.contains(&travelers.to_string()));
        }
    }
}
