use super::ApiClient;
use crate::types::{AppError, LoginRequest, LoginResponse, Result, User};
use reqwest::Method;

/// `/auth`: credential exchange and token verification.
#[derive(Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// POST /auth/login
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse> {
        let body = self
            .client
            .send(Method::POST, "/auth/login", Some(credentials))
            .await
            .map_err(|e| match e {
                AppError::Api { message, .. } => AppError::Auth(message),
                other => other,
            })?;

        serde_json::from_value(body).map_err(|e| AppError::Decode(e.to_string()))
    }

    /// GET /auth/verify with the stored token.
    pub async fn verify(&self) -> Result<User> {
        self.client.get("/auth/verify").await.map_err(|e| match e {
            AppError::Api { message, .. } => AppError::Auth(message),
            other => other,
        })
    }
}
