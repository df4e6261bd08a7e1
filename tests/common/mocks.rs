//! Mock backend for testing.
//!
//! [`MockApi`] implements `PortfolioApi` in memory. Reads are scripted as a
//! sequence of snapshots: each read returns the next snapshot and the last
//! one repeats, so a test can tell the fetch before a mutation from the
//! refetch after it. Every call is recorded, and individual methods can be
//! made to fail.

use async_trait::async_trait;
use folio::api::PortfolioApi;
use folio::types::{
    AppError, Id, LoginRequest, LoginResponse, Manual, ManualPatch, ManualPayload, Project,
    ProjectPayload, Result, StepPatch, StepPayload, TechCategory, Technology, TechnologyPayload,
    User,
};
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::{HashSet, VecDeque};

/// One recorded call: method name plus its arguments as JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub args: Value,
}

/// Sequence of responses where the last one repeats.
#[derive(Debug)]
struct Script<T> {
    queue: VecDeque<T>,
}

impl<T: Clone> Script<T> {
    fn new(items: Vec<T>) -> Self {
        Self {
            queue: items.into(),
        }
    }

    fn next(&mut self) -> Option<T> {
        if self.queue.len() > 1 {
            self.queue.pop_front()
        } else {
            self.queue.front().cloned()
        }
    }
}

impl<T> Default for Script<T> {
    fn default() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

#[derive(Default)]
struct State {
    projects: Script<Vec<Project>>,
    project: Script<Project>,
    manuals: Script<Vec<Manual>>,
    catalog: Script<Vec<Technology>>,
    categories: Vec<TechCategory>,
    user: Option<User>,
    created_project_id: Option<Id>,
    created_technology_id: Option<Id>,
    failing: HashSet<&'static str>,
    calls: Vec<Call>,
}

/// In-memory `PortfolioApi` with scripted reads.
///
/// # Examples
///
/// ```ignore
/// let api = MockApi::new()
///     .with_project(vec![before, after])
///     .failing("create_step");
/// ```
#[derive(Default)]
pub struct MockApi {
    state: Mutex<State>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_projects(self, snapshots: Vec<Vec<Project>>) -> Self {
        self.state.lock().projects = Script::new(snapshots);
        self
    }

    pub fn with_project(self, snapshots: Vec<Project>) -> Self {
        self.state.lock().project = Script::new(snapshots);
        self
    }

    pub fn with_manuals(self, snapshots: Vec<Vec<Manual>>) -> Self {
        self.state.lock().manuals = Script::new(snapshots);
        self
    }

    pub fn with_catalog(self, snapshots: Vec<Vec<Technology>>) -> Self {
        self.state.lock().catalog = Script::new(snapshots);
        self
    }

    pub fn with_categories(self, categories: Vec<TechCategory>) -> Self {
        self.state.lock().categories = categories;
        self
    }

    pub fn with_user(self, user: User) -> Self {
        self.state.lock().user = Some(user);
        self
    }

    pub fn with_created_project_id(self, id: Id) -> Self {
        self.state.lock().created_project_id = Some(id);
        self
    }

    pub fn with_created_technology_id(self, id: Id) -> Self {
        self.state.lock().created_technology_id = Some(id);
        self
    }

    /// Make every call to `method` fail with a 500.
    pub fn failing(self, method: &'static str) -> Self {
        self.state.lock().failing.insert(method);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().calls.clone()
    }

    pub fn count(&self, method: &str) -> usize {
        self.state
            .lock()
            .calls
            .iter()
            .filter(|c| c.method == method)
            .count()
    }

    /// Arguments of the last call to `method`.
    pub fn last_args(&self, method: &str) -> Option<Value> {
        self.state
            .lock()
            .calls
            .iter()
            .rev()
            .find(|c| c.method == method)
            .map(|c| c.args.clone())
    }

    /// Names of the calls that are not reads.
    pub fn writes(&self) -> Vec<&'static str> {
        self.state
            .lock()
            .calls
            .iter()
            .map(|c| c.method)
            .filter(|m| !m.starts_with("list_") && !m.starts_with("get_") && *m != "verify")
            .collect()
    }

    fn record(&self, method: &'static str, args: Value) -> Result<()> {
        let mut state = self.state.lock();
        state.calls.push(Call { method, args });
        if state.failing.contains(method) {
            return Err(AppError::Api {
                status: 500,
                message: format!("{} failed", method),
            });
        }
        Ok(())
    }

    fn missing(what: &str) -> AppError {
        AppError::Api {
            status: 404,
            message: format!("No {} scripted", what),
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

#[async_trait]
impl PortfolioApi for MockApi {
    async fn list_projects(&self) -> Result<Vec<Project>> {
        self.record("list_projects", Value::Null)?;
        Ok(self.state.lock().projects.next().unwrap_or_default())
    }

    async fn get_project(&self, id: &Id) -> Result<Project> {
        self.record("get_project", json!({ "id": id }))?;
        self.state
            .lock()
            .project
            .next()
            .ok_or_else(|| Self::missing("project"))
    }

    async fn create_project(&self, payload: &ProjectPayload) -> Result<Option<Id>> {
        self.record("create_project", to_json(payload))?;
        Ok(self.state.lock().created_project_id.clone())
    }

    async fn update_project(&self, id: &Id, payload: &ProjectPayload) -> Result<()> {
        self.record("update_project", json!({ "id": id, "payload": to_json(payload) }))
    }

    async fn delete_project(&self, id: &Id) -> Result<()> {
        self.record("delete_project", json!({ "id": id }))
    }

    async fn list_manuals(&self, project_id: &Id) -> Result<Vec<Manual>> {
        self.record("list_manuals", json!({ "project_id": project_id }))?;
        Ok(self.state.lock().manuals.next().unwrap_or_default())
    }

    async fn create_manual(&self, payload: &ManualPayload) -> Result<()> {
        self.record("create_manual", to_json(payload))
    }

    async fn update_manual(&self, id: &Id, patch: &ManualPatch) -> Result<()> {
        self.record("update_manual", json!({ "id": id, "patch": to_json(patch) }))
    }

    async fn set_active_manual(&self, project_id: &Id, manual_id: &Id) -> Result<()> {
        self.record(
            "set_active_manual",
            json!({ "project_id": project_id, "manual_id": manual_id }),
        )
    }

    async fn delete_manual(&self, id: &Id) -> Result<()> {
        self.record("delete_manual", json!({ "id": id }))
    }

    async fn create_step(&self, payload: &StepPayload) -> Result<()> {
        self.record("create_step", to_json(payload))
    }

    async fn update_step(&self, id: &Id, patch: &StepPatch) -> Result<()> {
        self.record("update_step", json!({ "id": id, "patch": to_json(patch) }))
    }

    async fn list_technologies(&self) -> Result<Vec<Technology>> {
        self.record("list_technologies", Value::Null)?;
        Ok(self.state.lock().catalog.next().unwrap_or_default())
    }

    async fn create_technology(&self, payload: &TechnologyPayload) -> Result<Option<Id>> {
        self.record("create_technology", to_json(payload))?;
        Ok(self.state.lock().created_technology_id.clone())
    }

    async fn list_tech_categories(&self) -> Result<Vec<TechCategory>> {
        self.record("list_tech_categories", Value::Null)?;
        Ok(self.state.lock().categories.clone())
    }

    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse> {
        self.record("login", json!({ "email": credentials.email }))?;
        Ok(LoginResponse {
            auth_token: "mock-token".to_string(),
        })
    }

    async fn verify(&self) -> Result<User> {
        self.record("verify", Value::Null)?;
        self.state
            .lock()
            .user
            .clone()
            .ok_or_else(|| AppError::Auth("Invalid token".to_string()))
    }
}
