use super::ApiClient;
use crate::types::{Id, Result, StepPatch, StepPayload};
use reqwest::Method;

/// `/api/steps`: admin only.
#[derive(Clone)]
pub struct StepService {
    client: ApiClient,
}

impl StepService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// POST /api/steps
    pub async fn create(&self, payload: &StepPayload) -> Result<()> {
        self.client
            .send(Method::POST, "/api/steps", Some(payload))
            .await?;
        tracing::debug!(manual = %payload.manual_id, "Step created");
        Ok(())
    }

    /// PATCH /api/steps/:id
    pub async fn update(&self, id: &Id, patch: &StepPatch) -> Result<()> {
        self.client
            .send(Method::PATCH, &format!("/api/steps/{}", id), Some(patch))
            .await?;
        tracing::debug!(%id, "Step updated");
        Ok(())
    }
}
