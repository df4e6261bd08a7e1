use super::{created_id, ApiClient};
use crate::types::{Id, Result, Technology, TechnologyPayload};
use reqwest::Method;

/// `/api/technology`: public catalog, admin creation.
#[derive(Clone)]
pub struct TechnologyService {
    client: ApiClient,
}

impl TechnologyService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// GET /api/technology
    pub async fn get_all(&self) -> Result<Vec<Technology>> {
        self.client.get("/api/technology").await
    }

    /// POST /api/technology
    pub async fn create(&self, payload: &TechnologyPayload) -> Result<Option<Id>> {
        let body = self
            .client
            .send(Method::POST, "/api/technology", Some(payload))
            .await?;
        let id = created_id(&body);
        tracing::debug!(id = ?id, name = %payload.name, "Technology created");
        Ok(id)
    }
}
