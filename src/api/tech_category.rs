use super::ApiClient;
use crate::types::{Result, TechCategory};

/// `/api/tech-category`: read-only, never authenticated.
#[derive(Clone)]
pub struct TechCategoryService {
    client: ApiClient,
}

impl TechCategoryService {
    /// The client's credentials are dropped.
    pub fn new(client: ApiClient) -> Self {
        Self {
            client: client.without_auth(),
        }
    }

    /// GET /api/tech-category
    pub async fn get_all(&self) -> Result<Vec<TechCategory>> {
        self.client.get("/api/tech-category").await
    }
}
