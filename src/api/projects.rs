use super::{created_id, ApiClient};
use crate::types::{Id, Project, ProjectPayload, Result};
use reqwest::Method;

/// `/api/projects`: public reads, admin writes.
#[derive(Clone)]
pub struct ProjectService {
    client: ApiClient,
}

impl ProjectService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// GET /api/projects
    pub async fn get_all(&self) -> Result<Vec<Project>> {
        self.client.get("/api/projects").await
    }

    /// GET /api/projects/:id, including tech stack and manuals.
    pub async fn get_one(&self, id: &Id) -> Result<Project> {
        self.client.get(&format!("/api/projects/{}", id)).await
    }

    /// POST /api/projects
    pub async fn create(&self, payload: &ProjectPayload) -> Result<Option<Id>> {
        let body = self
            .client
            .send(Method::POST, "/api/projects", Some(payload))
            .await?;
        let id = created_id(&body);
        tracing::debug!(id = ?id, name = %payload.name, "Project created");
        Ok(id)
    }

    /// PUT /api/projects/:id
    pub async fn update(&self, id: &Id, payload: &ProjectPayload) -> Result<()> {
        self.client
            .send(Method::PUT, &format!("/api/projects/{}", id), Some(payload))
            .await?;
        tracing::debug!(%id, "Project updated");
        Ok(())
    }

    /// DELETE /api/projects/:id
    pub async fn delete(&self, id: &Id) -> Result<()> {
        self.client
            .send::<()>(Method::DELETE, &format!("/api/projects/{}", id), None)
            .await?;
        tracing::debug!(%id, "Project deleted");
        Ok(())
    }
}
