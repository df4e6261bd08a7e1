use super::{alert, PageState};
use crate::api::PortfolioApi;
use crate::forms::ProjectForm;
use crate::types::{AppError, Id, Project, Result, Technology};
use std::collections::HashSet;
use std::sync::Arc;

pub const LOAD_ERROR: &str = "Failed to load projects. Please try again later.";
pub const CONFIRM_DELETE_PROJECT: &str = "Are you sure you want to delete this project?";

/// Every technology used by any project, once, in first-seen order.
pub fn unique_technologies(projects: &[Project]) -> Vec<Technology> {
    let mut seen = HashSet::new();
    projects
        .iter()
        .flat_map(|p| p.tech_stack.iter())
        .filter(|ts| seen.insert(ts.technology.id.clone()))
        .map(|ts| ts.technology.clone())
        .collect()
}

/// Landing page: hero badges and the project grid, plus project admin.
#[derive(Clone)]
pub struct HomePage {
    api: Arc<dyn PortfolioApi>,
    state: PageState<Vec<Project>>,
    technologies: Vec<Technology>,
    form: ProjectForm,
    alert: Option<String>,
}

impl HomePage {
    pub fn new(api: Arc<dyn PortfolioApi>) -> Self {
        Self {
            api,
            state: PageState::default(),
            technologies: Vec::new(),
            form: ProjectForm::new(),
            alert: None,
        }
    }

    pub async fn fetch(api: &dyn PortfolioApi) -> Result<Vec<Project>> {
        api.list_projects().await
    }

    pub fn apply(&mut self, fetched: Result<Vec<Project>>) {
        self.state.settle(fetched, LOAD_ERROR);
        if let Some(projects) = self.state.data() {
            self.technologies = unique_technologies(projects);
        }
    }

    pub async fn load(&mut self) {
        self.state.begin();
        let fetched = Self::fetch(self.api.as_ref()).await;
        self.apply(fetched);
    }

    pub fn state(&self) -> &PageState<Vec<Project>> {
        &self.state
    }

    pub fn projects(&self) -> &[Project] {
        self.state.data().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn technologies(&self) -> &[Technology] {
        &self.technologies
    }

    pub fn form(&self) -> &ProjectForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProjectForm {
        &mut self.form
    }

    /// Last alert raised by a failed write, if not yet shown.
    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    pub async fn open_create(&mut self) {
        self.form.open(self.api.as_ref(), None).await;
    }

    /// Open the form on a project from the current snapshot.
    pub async fn open_edit(&mut self, id: &Id) -> Result<()> {
        let project = self
            .projects()
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| AppError::Precondition(format!("Project {} not found", id)))?;
        self.form.open(self.api.as_ref(), Some(&project)).await;
        Ok(())
    }

    pub fn close_form(&mut self) {
        self.form.close();
    }

    /// Create or update depending on the form's mode, then refetch.
    ///
    /// A validation error or a failed request leaves the form open.
    pub async fn submit_form(&mut self) -> Result<()> {
        let (payload, id) = match self.form.submit() {
            Ok(submitted) => submitted,
            Err(e) => {
                self.alert = Some(e.to_string());
                return Err(e);
            }
        };

        let (result, action) = match &id {
            None => (
                self.api.create_project(&payload).await.map(|_| ()),
                "create project",
            ),
            Some(id) => (self.api.update_project(id, &payload).await, "update project"),
        };

        match result {
            Ok(()) => {
                tracing::info!(name = %payload.name, "Project saved");
                self.form.close();
                self.load().await;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Error saving project: {}", e);
                self.alert = Some(alert(action));
                Err(e)
            }
        }
    }

    /// Delete after confirmation. Returns `Ok(false)` when declined.
    pub async fn delete_project(
        &mut self,
        id: &Id,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Result<bool> {
        if !confirm(CONFIRM_DELETE_PROJECT) {
            return Ok(false);
        }
        match self.api.delete_project(id).await {
            Ok(()) => {
                tracing::info!(project = %id, "Project deleted");
                self.load().await;
                Ok(true)
            }
            Err(e) => {
                tracing::error!("Error deleting project: {}", e);
                self.alert = Some(alert("delete project"));
                Err(e)
            }
        }
    }
}
