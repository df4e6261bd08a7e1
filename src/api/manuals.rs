use super::ApiClient;
use crate::types::{Id, Manual, ManualPatch, ManualPayload, Result};
use reqwest::Method;

/// `/api/manuals`: admin only.
#[derive(Clone)]
pub struct ManualService {
    client: ApiClient,
}

impl ManualService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// GET /api/manuals/:projectId
    pub async fn get_all_by_project(&self, project_id: &Id) -> Result<Vec<Manual>> {
        self.client
            .get(&format!("/api/manuals/{}", project_id))
            .await
    }

    /// POST /api/manuals
    pub async fn create(&self, payload: &ManualPayload) -> Result<()> {
        self.client
            .send(Method::POST, "/api/manuals", Some(payload))
            .await?;
        tracing::debug!(project = %payload.project_id, title = %payload.title, "Manual created");
        Ok(())
    }

    /// PATCH /api/manuals/:id
    pub async fn update(&self, id: &Id, patch: &ManualPatch) -> Result<()> {
        self.client
            .send(Method::PATCH, &format!("/api/manuals/{}", id), Some(patch))
            .await?;
        tracing::debug!(%id, "Manual updated");
        Ok(())
    }

    /// PATCH /api/manuals/:projectId/:id/set-active
    ///
    /// The backend deactivates every other manual of the project.
    pub async fn set_active(&self, project_id: &Id, manual_id: &Id) -> Result<()> {
        self.client
            .send::<()>(
                Method::PATCH,
                &format!("/api/manuals/{}/{}/set-active", project_id, manual_id),
                None,
            )
            .await?;
        tracing::debug!(project = %project_id, manual = %manual_id, "Active manual changed");
        Ok(())
    }

    /// DELETE /api/manuals/:id
    pub async fn delete(&self, id: &Id) -> Result<()> {
        self.client
            .send::<()>(Method::DELETE, &format!("/api/manuals/{}", id), None)
            .await?;
        tracing::debug!(%id, "Manual deleted");
        Ok(())
    }
}
