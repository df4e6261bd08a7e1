use super::{optional_url, require, require_url, TechnologyForm};
use crate::api::PortfolioApi;
use crate::selector::TechnologySelector;
use crate::types::{AppError, Id, Project, ProjectPayload, Result, TechCategory, Technology};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(Id),
}

impl FormMode {
    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Create => "Add New Project",
            FormMode::Edit(_) => "Edit Project",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Create Project",
            FormMode::Edit(_) => "Update Project",
        }
    }
}

/// Editable copy of a project's fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDraft {
    pub name: String,
    pub description_short: String,
    pub client_github_url: String,
    pub client_deploy_url: String,
    pub server_github_url: String,
    pub server_deploy_url: String,
    pub image_url: String,
    pub technology_ids: Vec<Id>,
}

impl ProjectDraft {
    pub fn from_project(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            description_short: project.description_short.clone(),
            client_github_url: project.client_github_url.clone(),
            client_deploy_url: project.client_deploy_url.clone(),
            server_github_url: project.server_github_url.clone().unwrap_or_default(),
            server_deploy_url: project.server_deploy_url.clone().unwrap_or_default(),
            image_url: project.image_url.clone(),
            technology_ids: project.technology_ids(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        require(&self.name, "Project name")?;
        require(&self.description_short, "Short description")?;
        require_url(&self.client_github_url, "Client GitHub URL")?;
        require_url(&self.client_deploy_url, "Client deploy URL")?;
        optional_url(&self.server_github_url, "Server GitHub URL")?;
        optional_url(&self.server_deploy_url, "Server deploy URL")?;
        if self.technology_ids.is_empty() {
            return Err(AppError::InvalidInput(
                "Select at least one technology".to_string(),
            ));
        }
        Ok(())
    }

    pub fn to_payload(&self) -> ProjectPayload {
        ProjectPayload {
            name: self.name.trim().to_string(),
            description_short: self.description_short.trim().to_string(),
            client_github_url: self.client_github_url.trim().to_string(),
            client_deploy_url: self.client_deploy_url.trim().to_string(),
            server_github_url: self.server_github_url.trim().to_string(),
            server_deploy_url: self.server_deploy_url.trim().to_string(),
            image_url: self.image_url.clone(),
            technology_ids: self.technology_ids.clone(),
        }
    }
}

/// Create/edit dialog for a project.
///
/// The owner drives it with [`sync`](Self::sync) (or the async
/// [`open`](Self::open)) whenever its open flag or target project changes.
/// Fields are re-populated only when the dialog opens or the target project's
/// id changes, so re-rendering an open dialog never clobbers user input.
#[derive(Debug, Clone)]
pub struct ProjectForm {
    open: bool,
    mode: FormMode,
    draft: ProjectDraft,
    catalog: Vec<Technology>,
    categories: Vec<TechCategory>,
    technology_form: Option<TechnologyForm>,
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self {
            open: false,
            mode: FormMode::Create,
            draft: ProjectDraft::default(),
            catalog: Vec::new(),
            categories: Vec::new(),
            technology_form: None,
        }
    }
}

impl ProjectForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn draft(&self) -> &ProjectDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ProjectDraft {
        &mut self.draft
    }

    pub fn catalog(&self) -> &[Technology] {
        &self.catalog
    }

    /// Apply the owner's open flag and target project.
    ///
    /// Returns `true` when the dialog just opened, which is the moment the
    /// catalog has to be (re)fetched.
    pub fn sync(&mut self, open: bool, project: Option<&Project>) -> bool {
        let opened = open && !self.open;
        let target = match project {
            Some(p) => FormMode::Edit(p.id.clone()),
            None => FormMode::Create,
        };

        if opened || target != self.mode {
            self.draft = project.map(ProjectDraft::from_project).unwrap_or_default();
            self.mode = target;
        }
        if !open {
            self.technology_form = None;
        }
        self.open = open;
        opened
    }

    /// Open for `project` (edit) or blank (create) and load the catalog.
    pub async fn open(&mut self, api: &dyn PortfolioApi, project: Option<&Project>) {
        if self.sync(true, project) {
            let fetched = api.list_technologies().await;
            self.apply_catalog(fetched);
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        self.technology_form = None;
    }

    /// Store a fetched catalog. A failed fetch keeps the previous one.
    pub fn apply_catalog(&mut self, fetched: Result<Vec<Technology>>) {
        match fetched {
            Ok(catalog) => self.catalog = catalog,
            Err(e) => tracing::error!("Error fetching technologies: {}", e),
        }
    }

    pub fn selector(&self) -> TechnologySelector<'_> {
        TechnologySelector::new(&self.catalog, &self.draft.technology_ids)
    }

    pub fn set_technologies(&mut self, ids: Vec<Id>) {
        self.draft.technology_ids = ids;
    }

    pub fn add_technology(&mut self, id: &Id) -> bool {
        let mut next = None;
        let added = self.selector().add(id, |ids| next = Some(ids));
        if let Some(ids) = next {
            self.set_technologies(ids);
        }
        added
    }

    pub fn remove_technology(&mut self, id: &Id) {
        let mut next = None;
        self.selector().remove(id, |ids| next = Some(ids));
        if let Some(ids) = next {
            self.set_technologies(ids);
        }
    }

    /// Upload callback target; the only way the image field changes.
    pub fn set_image(&mut self, url: String) {
        self.draft.image_url = url;
    }

    /// Validated payload plus the id of the project being edited.
    pub fn submit(&self) -> Result<(ProjectPayload, Option<Id>)> {
        self.draft.validate()?;
        let id = match &self.mode {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id.clone()),
        };
        Ok((self.draft.to_payload(), id))
    }

    // ---- add-new technology ----

    pub fn technology_form(&self) -> Option<&TechnologyForm> {
        self.technology_form.as_ref()
    }

    pub fn technology_form_mut(&mut self) -> Option<&mut TechnologyForm> {
        self.technology_form.as_mut()
    }

    /// Open the technology dialog over the given categories. A failed
    /// category fetch falls back to the last known list.
    pub fn begin_add_technology(&mut self, categories: Result<Vec<TechCategory>>) {
        match categories {
            Ok(categories) => self.categories = categories,
            Err(e) => tracing::error!("Error fetching categories: {}", e),
        }
        self.technology_form = Some(TechnologyForm::open(self.categories.clone()));
    }

    pub fn cancel_add_technology(&mut self) {
        self.technology_form = None;
    }

    /// Close the technology dialog after a successful create, take the
    /// refetched catalog and select the new technology.
    ///
    /// When the backend does not echo the new id, the technology is looked
    /// up in the new catalog by name.
    pub fn technology_created(
        &mut self,
        new_id: Option<Id>,
        name: &str,
        catalog: Result<Vec<Technology>>,
    ) {
        self.technology_form = None;
        self.apply_catalog(catalog);

        let id = new_id.or_else(|| {
            self.catalog
                .iter()
                .rev()
                .find(|t| t.name == name)
                .map(|t| t.id.clone())
        });
        match id {
            Some(id) => {
                self.add_technology(&id);
            }
            None => tracing::warn!("Created technology {} not found in catalog", name),
        }
    }

    /// Full add-new flow: fetch categories and open the technology dialog.
    pub async fn open_technology_form(&mut self, api: &dyn PortfolioApi) {
        let categories = api.list_tech_categories().await;
        self.begin_add_technology(categories);
    }

    /// Post the technology dialog. On failure the dialog stays open.
    pub async fn submit_technology(&mut self, api: &dyn PortfolioApi) -> Result<()> {
        let payload = match &self.technology_form {
            Some(form) => form.submit()?,
            None => {
                return Err(AppError::Precondition(
                    "No technology form is open".to_string(),
                ))
            }
        };

        let new_id = api.create_technology(&payload).await?;
        tracing::info!(name = %payload.name, "Technology created");
        let catalog = api.list_technologies().await;
        self.technology_created(new_id, &payload.name, catalog);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TechStackEntry;

    fn tech(id: i64, name: &str) -> Technology {
        Technology {
            id: Id::Int(id),
            name: name.to_string(),
            logo_url: String::new(),
            official_site_url: String::new(),
            category_id: None,
            category: None,
        }
    }

    fn project() -> Project {
        Project {
            id: Id::Int(10),
            name: "Folio".to_string(),
            description_short: "Portfolio".to_string(),
            client_github_url: "https://github.com/VeraV/folio".to_string(),
            client_deploy_url: "https://folio.example.com".to_string(),
            server_github_url: None,
            server_deploy_url: None,
            image_url: "https://res.cloudinary.com/x/folio.png".to_string(),
            tech_stack: vec![
                TechStackEntry {
                    id: Id::Int(100),
                    technology: tech(1, "React"),
                },
                TechStackEntry {
                    id: Id::Int(101),
                    technology: tech(2, "Node"),
                },
            ],
            manuals: vec![],
        }
    }

    #[test]
    fn test_sync_reports_open_transition_only() {
        let mut form = ProjectForm::new();
        assert!(form.sync(true, None));
        assert!(!form.sync(true, None));
        assert!(!form.sync(false, None));
        assert!(form.sync(true, None));
    }

    #[test]
    fn test_open_flag_rerender_keeps_input() {
        let p = project();
        let mut form = ProjectForm::new();
        form.sync(true, Some(&p));
        form.draft_mut().name = "Renamed".to_string();

        form.sync(true, Some(&p));
        assert_eq!(form.draft().name, "Renamed");
    }

    #[test]
    fn test_submit_requires_technology() {
        let p = project();
        let mut form = ProjectForm::new();
        form.sync(true, Some(&p));
        form.set_technologies(vec![]);
        assert_eq!(
            form.submit(),
            Err(AppError::InvalidInput(
                "Select at least one technology".to_string()
            ))
        );
    }

    #[test]
    fn test_technology_created_selects_by_name_without_id() {
        let mut form = ProjectForm::new();
        form.sync(true, None);
        form.begin_add_technology(Ok(vec![]));
        assert!(form.technology_form().is_some());

        form.technology_created(None, "Rust", Ok(vec![tech(1, "React"), tech(9, "Rust")]));
        assert!(form.technology_form().is_none());
        assert_eq!(form.draft().technology_ids, vec![Id::Int(9)]);
    }

    #[test]
    fn test_failed_catalog_fetch_keeps_previous() {
        let mut form = ProjectForm::new();
        form.apply_catalog(Ok(vec![tech(1, "React")]));
        form.apply_catalog(Err(AppError::Http("down".to_string())));
        assert_eq!(form.catalog().len(), 1);
    }
}
