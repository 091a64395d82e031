//! HTTP client for the external meal-plan generator service.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::error::{Result, WizardError};
use crate::models::{MealPlan, PlanRequest};

/// Default generator endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/generate-plan";

/// Fixed message shown for a non-success response, whatever the body says.
pub const GENERATION_FAILED: &str = "Failed to generate meal plan. Please try again.";

pub struct PlanClient {
    client: Client,
    endpoint: String,
}

impl PlanClient {
    /// Build a client for the given endpoint.
    ///
    /// No request timeout: generation can take minutes and the request runs
    /// to completion once submitted.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder().timeout(None::<Duration>).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// POST the preference record and wait for the generated plan.
    pub fn generate(&self, request: &PlanRequest) -> Result<MealPlan> {
        debug!(
            endpoint = %self.endpoint,
            days = request.number_of_days,
            calories = request.daily_calories,
            "submitting plan request"
        );

        let response = self.client.post(&self.endpoint).json(request).send()?;

        let status = response.status();
        if !status.is_success() {
            debug!(%status, "generator returned non-success status");
            return Err(WizardError::Api(GENERATION_FAILED.to_string()));
        }

        let plan: MealPlan = response.json()?;
        debug!(
            days = plan.days.len(),
            generation_time = plan.generation_time,
            "plan received"
        );
        Ok(plan)
    }
}
