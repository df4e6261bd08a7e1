use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

// ============= Identifiers =============

/// Entity identifier as emitted by the backend.
///
/// The API is not consistent about identifier types (integers for some
/// tables, strings for others), so the original representation is kept and
/// written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Int(i64),
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Int(n) => write!(f, "{}", n),
            Id::Text(s) => f.write_str(s),
        }
    }
}

impl Id {
    /// Id typed by a user or taken from a route: numeric text becomes
    /// [`Id::Int`], anything else [`Id::Text`].
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        match s.parse::<i64>() {
            Ok(n) => Id::Int(n),
            Err(_) => Id::Text(s.to_string()),
        }
    }
}

impl FromStr for Id {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Id::parse(s))
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Int(n)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::Text(s.to_string())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::Text(s)
    }
}

/// Treat an explicit JSON `null` the same as a missing field.
fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============= Entities =============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Id,
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description_short: String,
    #[serde(default, deserialize_with = "nullable")]
    pub client_github_url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub client_deploy_url: String,
    #[serde(default)]
    pub server_github_url: Option<String>,
    #[serde(default)]
    pub server_deploy_url: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub image_url: String,
    #[serde(rename = "techStack", default, deserialize_with = "nullable")]
    pub tech_stack: Vec<TechStackEntry>,
    #[serde(default, deserialize_with = "nullable")]
    pub manuals: Vec<Manual>,
}

impl Project {
    /// Identifiers of the technologies attached through the tech stack.
    pub fn technology_ids(&self) -> Vec<Id> {
        self.tech_stack
            .iter()
            .map(|entry| entry.technology.id.clone())
            .collect()
    }
}

/// Join row between a project and a technology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechStackEntry {
    pub id: Id,
    pub technology: Technology,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technology {
    pub id: Id,
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub logo_url: String,
    #[serde(default, deserialize_with = "nullable")]
    pub official_site_url: String,
    #[serde(rename = "categoryId", default)]
    pub category_id: Option<Id>,
    #[serde(default)]
    pub category: Option<TechCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechCategory {
    pub id: Id,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manual {
    pub id: Id,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub version: String,
    #[serde(rename = "isActive", default)]
    pub is_active: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub steps: Vec<Step>,
    #[serde(rename = "projectId", default)]
    pub project_id: Option<Id>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub id: Id,
    pub step_number: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(rename = "manualId", default)]
    pub manual_id: Option<Id>,
}

/// Identity resolved from a bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id", default)]
    pub id: Option<Id>,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub email: String,
}

// ============= Request Payloads =============

/// Body of `POST /api/projects` and `PUT /api/projects/:id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectPayload {
    pub name: String,
    pub description_short: String,
    pub client_github_url: String,
    pub client_deploy_url: String,
    pub server_github_url: String,
    pub server_deploy_url: String,
    pub image_url: String,
    #[serde(rename = "technologyIds")]
    pub technology_ids: Vec<Id>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualPayload {
    #[serde(rename = "projectId")]
    pub project_id: Id,
    pub title: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManualPatch {
    pub title: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepPayload {
    #[serde(rename = "manualId")]
    pub manual_id: Id,
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepPatch {
    pub description: String,
    /// Omitted when the step has no image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnologyPayload {
    pub name: String,
    pub logo_url: String,
    pub official_site_url: String,
    #[serde(rename = "categoryId")]
    pub category_id: Option<Id>,
}

// ============= Authentication Types =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "authToken")]
    pub auth_token: String,
}

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error)
    }
}

// ============= Error Types =============

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Http(String),

    #[error("Request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Precondition(String),

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    /// Status code for errors that came back from the API.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
