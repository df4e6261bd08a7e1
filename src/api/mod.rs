//! REST client for the portfolio backend
//!
//! One service object per resource, each wrapping the shared [`ApiClient`].
//! [`HttpBackend`] bundles them and implements [`PortfolioApi`], the seam that
//! pages and forms depend on.
//!
//! # Module Structure
//!
//! - [`api::projects`](crate::api::projects) - `/api/projects`
//! - [`api::manuals`](crate::api::manuals) - `/api/manuals`
//! - [`api::steps`](crate::api::steps) - `/api/steps`
//! - [`api::technology`](crate::api::technology) - `/api/technology`
//! - [`api::tech_category`](crate::api::tech_category) - `/api/tech-category`
//! - [`api::auth`](crate::api::auth) - `/auth/login`, `/auth/verify`
//!
//! # Authentication
//!
//! Every client except tech-category attaches the stored token, when one
//! exists, to every request it makes:
//! ```text
//! Authorization: Bearer <token>
//! ```

pub mod auth;
pub mod manuals;
pub mod projects;
pub mod steps;
pub mod tech_category;
pub mod technology;

pub use auth::AuthService;
pub use manuals::ManualService;
pub use projects::ProjectService;
pub use steps::StepService;
pub use tech_category::TechCategoryService;
pub use technology::TechnologyService;

use crate::auth::TokenStore;
use crate::types::{
    ApiErrorBody, AppError, Id, LoginRequest, LoginResponse, Manual, ManualPatch, ManualPayload,
    Project, ProjectPayload, Result, StepPatch, StepPayload, TechCategory, Technology,
    TechnologyPayload, User,
};
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Default backend location when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5005";

/// Base HTTP client shared by the resource services.
///
/// Cheap to clone: the underlying connection pool and token store are shared.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    tokens: Option<Arc<dyn TokenStore>>,
}

impl ApiClient {
    /// Client that attaches the stored bearer token whenever one exists.
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            tokens: Some(tokens),
        }
    }

    /// Client that never sends credentials.
    pub fn anonymous(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            tokens: None,
        }
    }

    /// Same connection pool and base URL, without credentials.
    pub fn without_auth(&self) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            tokens: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(%method, path, "API request");
        let req = self.http.request(method, self.url(path));
        match self.tokens.as_ref().and_then(|store| store.token()) {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// GET `path` and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = self
            .request(Method::GET, path)
            .send()
            .await
            .map_err(|e| AppError::Http(e.to_string()))?;
        let resp = Self::check(resp).await?;

        resp.json::<T>()
            .await
            .map_err(|e| AppError::Decode(e.to_string()))
    }

    /// Send `method` to `path` with an optional JSON body.
    ///
    /// Mutation responses are not typed by the backend contract, so the body
    /// comes back as raw JSON (`Value::Null` when empty).
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Value> {
        let req = self.request(method, path);
        let req = match body {
            Some(body) => req.json(body),
            None => req,
        };

        let resp = req
            .send()
            .await
            .map_err(|e| AppError::Http(e.to_string()))?;
        let resp = Self::check(resp).await?;

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| AppError::Http(e.to_string()))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|e| AppError::Decode(e.to_string()))
    }

    async fn check(resp: Response) -> Result<Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let message = resp
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(ApiErrorBody::into_message)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });
        tracing::warn!(status = status.as_u16(), "API error: {}", message);

        Err(AppError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Identifier of a freshly created entity, when the response carries one.
pub(crate) fn created_id(body: &Value) -> Option<Id> {
    serde_json::from_value(body.get("id")?.clone()).ok()
}

/// Everything the pages need from the backend.
///
/// Implemented over HTTP by [`HttpBackend`]; tests substitute in-memory
/// fakes.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait PortfolioApi: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<Project>>;
    async fn get_project(&self, id: &Id) -> Result<Project>;
    /// Returns the new project's id when the backend echoes it.
    async fn create_project(&self, payload: &ProjectPayload) -> Result<Option<Id>>;
    async fn update_project(&self, id: &Id, payload: &ProjectPayload) -> Result<()>;
    async fn delete_project(&self, id: &Id) -> Result<()>;

    async fn list_manuals(&self, project_id: &Id) -> Result<Vec<Manual>>;
    async fn create_manual(&self, payload: &ManualPayload) -> Result<()>;
    async fn update_manual(&self, id: &Id, patch: &ManualPatch) -> Result<()>;
    /// Make `manual_id` the only active manual of `project_id`.
    async fn set_active_manual(&self, project_id: &Id, manual_id: &Id) -> Result<()>;
    async fn delete_manual(&self, id: &Id) -> Result<()>;

    async fn create_step(&self, payload: &StepPayload) -> Result<()>;
    async fn update_step(&self, id: &Id, patch: &StepPatch) -> Result<()>;

    async fn list_technologies(&self) -> Result<Vec<Technology>>;
    /// Returns the new technology's id when the backend echoes it.
    async fn create_technology(&self, payload: &TechnologyPayload) -> Result<Option<Id>>;
    async fn list_tech_categories(&self) -> Result<Vec<TechCategory>>;

    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse>;
    async fn verify(&self) -> Result<User>;
}

/// The portfolio backend over HTTP.
#[derive(Clone)]
pub struct HttpBackend {
    pub projects: ProjectService,
    pub manuals: ManualService,
    pub steps: StepService,
    pub technology: TechnologyService,
    pub categories: TechCategoryService,
    pub auth: AuthService,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenStore>) -> Self {
        let client = ApiClient::new(base_url, tokens);
        Self {
            projects: ProjectService::new(client.clone()),
            manuals: ManualService::new(client.clone()),
            steps: StepService::new(client.clone()),
            technology: TechnologyService::new(client.clone()),
            categories: TechCategoryService::new(client.without_auth()),
            auth: AuthService::new(client),
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl PortfolioApi for HttpBackend {
    async fn list_projects(&self) -> Result<Vec<Project>> {
        self.projects.get_all().await
    }

    async fn get_project(&self, id: &Id) -> Result<Project> {
        self.projects.get_one(id).await
    }

    async fn create_project(&self, payload: &ProjectPayload) -> Result<Option<Id>> {
        self.projects.create(payload).await
    }

    async fn update_project(&self, id: &Id, payload: &ProjectPayload) -> Result<()> {
        self.projects.update(id, payload).await
    }

    async fn delete_project(&self, id: &Id) -> Result<()> {
        self.projects.delete(id).await
    }

    async fn list_manuals(&self, project_id: &Id) -> Result<Vec<Manual>> {
        self.manuals.get_all_by_project(project_id).await
    }

    async fn create_manual(&self, payload: &ManualPayload) -> Result<()> {
        self.manuals.create(payload).await
    }

    async fn update_manual(&self, id: &Id, patch: &ManualPatch) -> Result<()> {
        self.manuals.update(id, patch).await
    }

    async fn set_active_manual(&self, project_id: &Id, manual_id: &Id) -> Result<()> {
        self.manuals.set_active(project_id, manual_id).await
    }

    async fn delete_manual(&self, id: &Id) -> Result<()> {
        self.manuals.delete(id).await
    }

    async fn create_step(&self, payload: &StepPayload) -> Result<()> {
        self.steps.create(payload).await
    }

    async fn update_step(&self, id: &Id, patch: &StepPatch) -> Result<()> {
        self.steps.update(id, patch).await
    }

    async fn list_technologies(&self) -> Result<Vec<Technology>> {
        self.technology.get_all().await
    }

    async fn create_technology(&self, payload: &TechnologyPayload) -> Result<Option<Id>> {
        self.technology.create(payload).await
    }

    async fn list_tech_categories(&self) -> Result<Vec<TechCategory>> {
        self.categories.get_all().await
    }

    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse> {
        self.auth.login(credentials).await
    }

    async fn verify(&self) -> Result<User> {
        self.auth.verify().await
    }
}
