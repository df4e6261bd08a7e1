use super::TokenStore;
use crate::api::PortfolioApi;
use crate::types::{AppError, LoginRequest, Result, User};
use std::fmt;
use std::sync::Arc;

/// Login status and identity of the current user.
///
/// Passed explicitly to every page that needs it. Cloning shares the token
/// store but not the user snapshot.
#[derive(Clone)]
pub struct AuthContext {
    store: Arc<dyn TokenStore>,
    user: Option<User>,
}

impl fmt::Debug for AuthContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthContext")
            .field("user", &self.user)
            .field("has_token", &self.store.token().is_some())
            .finish()
    }
}

impl AuthContext {
    /// Anonymous context over `store`. Call [`authenticate`](Self::authenticate)
    /// to pick up a token left by an earlier session.
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store, user: None }
    }

    /// Context that is already logged in as `user`.
    pub fn logged_in(store: Arc<dyn TokenStore>, user: User) -> Self {
        Self {
            store,
            user: Some(user),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    /// Resolve the stored token into a user.
    ///
    /// A token the backend rejects is removed so the next session starts
    /// anonymous. Without a token this is a no-op.
    pub async fn authenticate(&mut self, api: &dyn PortfolioApi) -> Result<()> {
        if self.store.token().is_none() {
            self.user = None;
            return Ok(());
        }

        match api.verify().await {
            Ok(user) => {
                tracing::debug!(name = %user.name, "Token verified");
                self.user = Some(user);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Stored token rejected: {}", e);
                self.store.clear();
                self.user = None;
                Err(e)
            }
        }
    }

    /// Exchange credentials for a token, store it and resolve the user.
    pub async fn login(&mut self, api: &dyn PortfolioApi, email: &str, password: &str) -> Result<()> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AppError::InvalidInput(
                "Email and password are required".to_string(),
            ));
        }

        let response = api
            .login(&LoginRequest {
                email: email.trim().to_string(),
                password: password.to_string(),
            })
            .await?;
        self.store.store(&response.auth_token)?;
        self.authenticate(api).await
    }

    /// Forget the token and the user.
    pub fn logout(&mut self) {
        self.store.clear();
        self.user = None;
        tracing::info!("Logged out");
    }
}
