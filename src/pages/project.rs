use super::{alert, PageState};
use crate::api::PortfolioApi;
use crate::forms::{ManualDraft, ManualEdit, StepDraft, StepEditor};
use crate::types::{AppError, Id, Manual, Project, Result, Step};
use std::sync::Arc;

pub const LOAD_ERROR: &str = "Failed to load project. Please try again later.";
pub const NO_ACTIVE_MANUAL: &str = "No active manual found. Please set a manual as active first.";
pub const CONFIRM_DELETE_MANUAL: &str = "Are you sure you want to delete this manual?";

/// First manual flagged active. The server keeps at most one.
pub fn active_manual(project: &Project) -> Option<&Manual> {
    project.manuals.iter().find(|m| m.is_active)
}

/// Steps of the active manual by ascending `step_number`; empty when no
/// manual is active.
pub fn sorted_steps(project: &Project) -> Vec<&Step> {
    let mut steps: Vec<&Step> = active_manual(project)
        .map(|m| m.steps.iter().collect())
        .unwrap_or_default();
    steps.sort_by_key(|s| s.step_number);
    steps
}

/// One fetch of the project page: the project with its embedded manuals and
/// steps, plus the admin manual list.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSnapshot {
    pub project: Project,
    pub manuals: Vec<Manual>,
}

/// Project detail page with manual and step administration.
#[derive(Clone)]
pub struct ProjectPage {
    api: Arc<dyn PortfolioApi>,
    project_id: Id,
    logged_in: bool,
    state: PageState<ProjectSnapshot>,
    manual_edit: Option<ManualEdit>,
    new_manual: Option<ManualDraft>,
    new_step: Option<StepDraft>,
    alert: Option<String>,
}

impl ProjectPage {
    pub fn new(api: Arc<dyn PortfolioApi>, project_id: Id, logged_in: bool) -> Self {
        Self {
            api,
            project_id,
            logged_in,
            state: PageState::default(),
            manual_edit: None,
            new_manual: None,
            new_step: None,
            alert: None,
        }
    }

    /// Project and, for admins, its manual list. The two reads run
    /// concurrently and either failing fails the fetch.
    pub async fn fetch(
        api: &dyn PortfolioApi,
        project_id: &Id,
        logged_in: bool,
    ) -> Result<ProjectSnapshot> {
        if logged_in {
            let (project, manuals) = futures::future::try_join(
                api.get_project(project_id),
                api.list_manuals(project_id),
            )
            .await?;
            Ok(ProjectSnapshot { project, manuals })
        } else {
            let project = api.get_project(project_id).await?;
            Ok(ProjectSnapshot {
                project,
                manuals: Vec::new(),
            })
        }
    }

    pub fn apply(&mut self, fetched: Result<ProjectSnapshot>) {
        if let Ok(snapshot) = &fetched {
            let active = snapshot
                .project
                .manuals
                .iter()
                .filter(|m| m.is_active)
                .count();
            if active > 1 {
                tracing::warn!(
                    project = %self.project_id,
                    active,
                    "More than one active manual, showing the first"
                );
            }
        }
        self.state.settle(fetched, LOAD_ERROR);
    }

    pub async fn load(&mut self) {
        self.state.begin();
        let fetched = Self::fetch(self.api.as_ref(), &self.project_id, self.logged_in).await;
        self.apply(fetched);
    }

    pub fn project_id(&self) -> &Id {
        &self.project_id
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn state(&self) -> &PageState<ProjectSnapshot> {
        &self.state
    }

    pub fn project(&self) -> Option<&Project> {
        self.state.data().map(|s| &s.project)
    }

    pub fn manuals(&self) -> &[Manual] {
        self.state
            .data()
            .map(|s| s.manuals.as_slice())
            .unwrap_or_default()
    }

    pub fn active_manual(&self) -> Option<&Manual> {
        self.project().and_then(active_manual)
    }

    pub fn steps(&self) -> Vec<&Step> {
        self.project().map(sorted_steps).unwrap_or_default()
    }

    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    pub fn show_manuals_panel(&self) -> bool {
        self.logged_in
    }

    pub fn show_steps_section(&self) -> bool {
        self.logged_in || !self.steps().is_empty()
    }

    pub fn steps_heading(&self) -> String {
        match self.active_manual() {
            Some(m) => format!("{} - Steps", m.title),
            None => "Manual Steps".to_string(),
        }
    }

    /// Record a rejected draft and hand the error back.
    fn invalid(&mut self, e: AppError) -> AppError {
        self.alert = Some(e.to_string());
        e
    }

    /// Record a failed write and hand the error back.
    fn fail(&mut self, action: &str, e: AppError) -> AppError {
        tracing::error!("Failed to {}: {}", action, e);
        self.alert = Some(alert(action));
        e
    }

    // ---- manual inline edit ----

    pub fn manual_edit(&self) -> Option<&ManualEdit> {
        self.manual_edit.as_ref()
    }

    pub fn manual_edit_mut(&mut self) -> Option<&mut ManualEdit> {
        self.manual_edit.as_mut()
    }

    /// Put a manual into edit mode. Any other open edit is discarded.
    pub fn begin_manual_edit(&mut self, manual_id: &Id) -> Result<()> {
        let edit = self
            .manuals()
            .iter()
            .chain(self.project().map(|p| p.manuals.iter()).into_iter().flatten())
            .find(|m| &m.id == manual_id)
            .map(ManualEdit::begin)
            .ok_or_else(|| AppError::Precondition(format!("Manual {} not found", manual_id)))?;
        self.manual_edit = Some(edit);
        Ok(())
    }

    pub fn cancel_manual_edit(&mut self) {
        self.manual_edit = None;
    }

    pub async fn save_manual_edit(&mut self) -> Result<()> {
        let (id, patch) = match &self.manual_edit {
            Some(edit) => (edit.manual_id.clone(), edit.draft.to_patch()),
            None => {
                return Err(AppError::Precondition(
                    "No manual is being edited".to_string(),
                ))
            }
        };
        let patch = patch.map_err(|e| self.invalid(e))?;

        match self.api.update_manual(&id, &patch).await {
            Ok(()) => {
                tracing::info!(manual = %id, "Manual updated");
                self.manual_edit = None;
                self.load().await;
                Ok(())
            }
            Err(e) => Err(self.fail("update manual", e)),
        }
    }

    // ---- manual create / delete / activate ----

    pub fn new_manual(&self) -> Option<&ManualDraft> {
        self.new_manual.as_ref()
    }

    pub fn new_manual_mut(&mut self) -> Option<&mut ManualDraft> {
        self.new_manual.as_mut()
    }

    pub fn open_new_manual(&mut self) {
        self.new_manual.get_or_insert_with(ManualDraft::default);
    }

    pub fn cancel_new_manual(&mut self) {
        self.new_manual = None;
    }

    pub async fn create_manual(&mut self) -> Result<()> {
        let payload = self
            .new_manual
            .clone()
            .unwrap_or_default()
            .to_payload(&self.project_id)
            .map_err(|e| self.invalid(e))?;

        match self.api.create_manual(&payload).await {
            Ok(()) => {
                tracing::info!(title = %payload.title, "Manual created");
                self.new_manual = None;
                self.load().await;
                Ok(())
            }
            Err(e) => Err(self.fail("create manual", e)),
        }
    }

    /// Delete after confirmation. Returns `Ok(false)` when declined.
    pub async fn delete_manual(
        &mut self,
        manual_id: &Id,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Result<bool> {
        if !confirm(CONFIRM_DELETE_MANUAL) {
            return Ok(false);
        }
        match self.api.delete_manual(manual_id).await {
            Ok(()) => {
                tracing::info!(manual = %manual_id, "Manual deleted");
                if self
                    .manual_edit
                    .as_ref()
                    .is_some_and(|edit| edit.is_for(manual_id))
                {
                    self.manual_edit = None;
                }
                self.load().await;
                Ok(true)
            }
            Err(e) => Err(self.fail("delete manual", e)),
        }
    }

    /// Ask the server to make `manual_id` the only active manual. Flags are
    /// never flipped locally; the refetch shows the result.
    pub async fn set_active(&mut self, manual_id: &Id) -> Result<()> {
        match self.api.set_active_manual(&self.project_id, manual_id).await {
            Ok(()) => {
                tracing::info!(manual = %manual_id, "Manual activated");
                self.load().await;
                Ok(())
            }
            Err(e) => Err(self.fail("set active manual", e)),
        }
    }

    // ---- steps ----

    pub fn new_step(&self) -> Option<&StepDraft> {
        self.new_step.as_ref()
    }

    pub fn new_step_mut(&mut self) -> Option<&mut StepDraft> {
        self.new_step.as_mut()
    }

    pub fn open_new_step(&mut self) {
        self.new_step.get_or_insert_with(StepDraft::default);
    }

    pub fn cancel_new_step(&mut self) {
        self.new_step = None;
    }

    /// Upload callback target for the new-step form.
    pub fn set_new_step_image(&mut self, url: String) {
        self.new_step.get_or_insert_with(StepDraft::default).image_url = url;
    }

    /// Append a step to the active manual.
    ///
    /// Refused without a request when no manual is active.
    pub async fn create_step(&mut self) -> Result<()> {
        let Some(manual_id) = self.active_manual().map(|m| m.id.clone()) else {
            self.alert = Some(NO_ACTIVE_MANUAL.to_string());
            return Err(AppError::Precondition(NO_ACTIVE_MANUAL.to_string()));
        };
        let payload = self
            .new_step
            .clone()
            .unwrap_or_default()
            .to_payload(&manual_id)
            .map_err(|e| self.invalid(e))?;

        match self.api.create_step(&payload).await {
            Ok(()) => {
                tracing::info!(manual = %manual_id, "Step created");
                self.new_step = None;
                self.load().await;
                Ok(())
            }
            Err(e) => Err(self.fail("create step", e)),
        }
    }

    /// Save an inline step edit. The editor stays in edit mode on failure.
    pub async fn update_step(&mut self, editor: &mut StepEditor) -> Result<()> {
        let id = editor.step().id.clone();
        let patch = editor.draft().to_patch().map_err(|e| self.invalid(e))?;

        match self.api.update_step(&id, &patch).await {
            Ok(()) => {
                tracing::info!(step = %id, "Step updated");
                editor.saved();
                self.load().await;
                Ok(())
            }
            Err(e) => Err(self.fail("update step", e)),
        }
    }
}
