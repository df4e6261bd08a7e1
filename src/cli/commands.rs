//! Command handlers
//!
//! Each handler builds the page controller a browser session would use,
//! loads it and performs the same actions, printing the page's alerts.

use super::output::Output;
use super::{Commands, ManualCommands, ProjectArgs, ProjectCommands, StepCommands, TechCommands};
use crate::api::PortfolioApi;
use crate::auth::{AuthContext, Gate};
use crate::forms::{StepEditor, TechnologyForm};
use crate::pages::{HomePage, ProjectPage};
use crate::types::{AppError, Id, Project};
use crate::upload::{upload_into, Uploader};
use anyhow::{bail, Context as _};
use std::path::Path;
use std::sync::Arc;

const PASSWORD_VAR: &str = "FOLIO_PASSWORD";

/// Everything a command needs.
pub struct Session {
    pub api: Arc<dyn PortfolioApi>,
    pub auth: AuthContext,
    pub uploader: Arc<dyn Uploader>,
    pub output: Output,
}

impl Session {
    pub async fn run(&mut self, command: Commands) -> anyhow::Result<()> {
        // Auth state only matters for what a page shows; a rejected token
        // degrades to anonymous.
        if let Err(e) = self.auth.authenticate(self.api.as_ref()).await {
            self.output.warning(&format!("Stored token rejected ({}), continuing anonymously", e));
        }

        if command.requires_login() && !Gate::Private.admits(&self.auth) {
            bail!("This command needs a login. Run `folio login` first.");
        }

        match command {
            Commands::Projects => self.projects().await,
            Commands::Project(cmd) => self.project(cmd).await,
            Commands::Manual(cmd) => self.manual(cmd).await,
            Commands::Step(cmd) => self.step(cmd).await,
            Commands::Tech(cmd) => self.tech(cmd).await,
            Commands::Categories => self.categories().await,
            Commands::Login { email, password } => self.login(email, password).await,
            Commands::Logout => {
                self.auth.logout();
                self.output.success("Logged out");
                Ok(())
            }
            Commands::Whoami => {
                match self.auth.user() {
                    Some(user) => {
                        self.output.kv("Name", &user.name);
                        self.output.kv("Email", &user.email);
                    }
                    None => {
                        self.output.info("Not logged in");
                        self.output.hint("Run `folio login` to manage projects");
                    }
                }
                Ok(())
            }
        }
    }

    /// Print the pending alert and turn `e` into the exit error.
    fn fail(&self, alert: Option<String>, e: AppError) -> anyhow::Error {
        if let Some(alert) = alert {
            self.output.alert(&alert);
        }
        anyhow::Error::new(e)
    }

    async fn home(&self) -> anyhow::Result<HomePage> {
        let mut page = HomePage::new(self.api.clone());
        page.load().await;
        if let Some(error) = page.state().error() {
            bail!("{}", error);
        }
        Ok(page)
    }

    async fn project_page(&self, id: &str) -> anyhow::Result<ProjectPage> {
        let mut page = ProjectPage::new(self.api.clone(), Id::parse(id), self.auth.is_logged_in());
        page.load().await;
        if let Some(error) = page.state().error() {
            bail!("{}", error);
        }
        Ok(page)
    }

    /// Upload a local image and hand the hosted URL to `apply`.
    async fn upload(&self, path: &Path, apply: impl FnOnce(String)) -> anyhow::Result<()> {
        let bytes = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if !upload_into(self.uploader.as_ref(), &name, bytes, apply).await {
            // Upload failures leave the field as it was.
            self.output.warning(&format!("Image {} was not uploaded", name));
        }
        Ok(())
    }

    // ---- projects ----

    async fn projects(&self) -> anyhow::Result<()> {
        let page = self.home().await?;

        self.output.header("Projects");
        self.output.table_header(&["ID", "Name", "Stack"]);
        for project in page.projects() {
            let stack: Vec<&str> = project
                .tech_stack
                .iter()
                .map(|ts| ts.technology.name.as_str())
                .collect();
            self.output
                .table_row(&[&project.id.to_string(), &project.name, &stack.join(", ")]);
        }

        self.output.subheader("Technologies I Work With");
        for tech in page.technologies() {
            self.output.list_item(&tech.name);
        }
        Ok(())
    }

    async fn project(&self, cmd: ProjectCommands) -> anyhow::Result<()> {
        match cmd {
            ProjectCommands::Show { id } => self.show_project(&id).await,
            ProjectCommands::Create(args) => {
                let mut page = self.home().await?;
                page.open_create().await;
                self.fill_project(&mut page, args).await?;
                page.submit_form()
                    .await
                    .map_err(|e| self.fail(page.take_alert(), e))?;
                self.output.success("Project created");
                Ok(())
            }
            ProjectCommands::Edit { id, fields } => {
                let mut page = self.home().await?;
                page.open_edit(&Id::parse(&id)).await?;
                self.fill_project(&mut page, fields).await?;
                page.submit_form()
                    .await
                    .map_err(|e| self.fail(page.take_alert(), e))?;
                self.output.success("Project updated");
                Ok(())
            }
            ProjectCommands::Delete { id, yes } => {
                let mut page = self.home().await?;
                let output = &self.output;
                let deleted = page
                    .delete_project(&Id::parse(&id), |question| yes || output.confirm(question))
                    .await
                    .map_err(|e| self.fail(page.take_alert(), e))?;
                if deleted {
                    self.output.success("Project deleted");
                }
                Ok(())
            }
        }
    }

    async fn fill_project(&self, page: &mut HomePage, args: ProjectArgs) -> anyhow::Result<()> {
        let draft = page.form_mut().draft_mut();
        let fields = [
            (args.name, &mut draft.name),
            (args.description, &mut draft.description_short),
            (args.client_repo, &mut draft.client_github_url),
            (args.client_url, &mut draft.client_deploy_url),
            (args.server_repo, &mut draft.server_github_url),
            (args.server_url, &mut draft.server_deploy_url),
        ];
        for (value, field) in fields {
            if let Some(value) = value {
                *field = value;
            }
        }

        if !args.technologies.is_empty() {
            let form = page.form_mut();
            form.set_technologies(Vec::new());
            for id in &args.technologies {
                let id = Id::parse(id);
                if !form.catalog().iter().any(|t| t.id == id) {
                    self.output.warning(&format!("Technology {} is not in the catalog", id));
                }
                form.add_technology(&id);
            }
        }

        if let Some(path) = &args.image {
            self.upload(path, |url| page.form_mut().set_image(url)).await?;
        }
        Ok(())
    }

    async fn show_project(&self, id: &str) -> anyhow::Result<()> {
        let page = self.project_page(id).await?;
        let Some(project) = page.project() else {
            bail!("Project not found");
        };
        self.print_project(project);

        if page.show_manuals_panel() {
            self.output.subheader("Manuals");
            if page.manuals().is_empty() {
                self.output.info("No manuals yet");
            }
            for manual in page.manuals() {
                let marker = if manual.is_active { " (active)" } else { "" };
                self.output.list_item(&format!(
                    "[{}] {} v{}{}",
                    manual.id, manual.title, manual.version, marker
                ));
            }
        }

        if page.show_steps_section() {
            self.output.subheader(&page.steps_heading());
            let steps = page.steps();
            if steps.is_empty() {
                self.output.info("No steps yet");
            }
            for step in steps {
                self.output
                    .step(step.step_number, &step.description, step.image_url.as_deref());
            }
        }
        Ok(())
    }

    fn print_project(&self, project: &Project) {
        self.output.header(&project.name);
        self.output.kv("ID", &project.id.to_string());
        self.output.kv("Description", &project.description_short);
        self.output.kv("Client repo", &project.client_github_url);
        self.output.kv("Client deploy", &project.client_deploy_url);
        if let Some(url) = &project.server_github_url {
            self.output.kv("Server repo", url);
        }
        if let Some(url) = &project.server_deploy_url {
            self.output.kv("Server deploy", url);
        }
        if !project.image_url.is_empty() {
            self.output.kv("Image", &project.image_url);
        }
        let stack: Vec<&str> = project
            .tech_stack
            .iter()
            .map(|ts| ts.technology.name.as_str())
            .collect();
        self.output.kv("Stack", &stack.join(", "));
    }

    // ---- manuals ----

    async fn manual(&self, cmd: ManualCommands) -> anyhow::Result<()> {
        match cmd {
            ManualCommands::Create {
                project,
                title,
                description,
                version,
            } => {
                let mut page = self.project_page(&project).await?;
                page.open_new_manual();
                if let Some(draft) = page.new_manual_mut() {
                    draft.title = title;
                    draft.description = description;
                    draft.version = version;
                }
                page.create_manual()
                    .await
                    .map_err(|e| self.fail(page.take_alert(), e))?;
                self.output.success("Manual created");
            }
            ManualCommands::Edit {
                project,
                manual,
                title,
                description,
                version,
            } => {
                let mut page = self.project_page(&project).await?;
                page.begin_manual_edit(&Id::parse(&manual))?;
                if let Some(edit) = page.manual_edit_mut() {
                    if let Some(title) = title {
                        edit.draft.title = title;
                    }
                    if let Some(description) = description {
                        edit.draft.description = description;
                    }
                    if let Some(version) = version {
                        edit.draft.version = version;
                    }
                }
                page.save_manual_edit()
                    .await
                    .map_err(|e| self.fail(page.take_alert(), e))?;
                self.output.success("Manual updated");
            }
            ManualCommands::Delete {
                project,
                manual,
                yes,
            } => {
                let mut page = self.project_page(&project).await?;
                let output = &self.output;
                let deleted = page
                    .delete_manual(&Id::parse(&manual), |question| yes || output.confirm(question))
                    .await
                    .map_err(|e| self.fail(page.take_alert(), e))?;
                if deleted {
                    self.output.success("Manual deleted");
                }
            }
            ManualCommands::Activate { project, manual } => {
                let mut page = self.project_page(&project).await?;
                page.set_active(&Id::parse(&manual))
                    .await
                    .map_err(|e| self.fail(page.take_alert(), e))?;
                let title = page.active_manual().map(|m| m.title.clone()).unwrap_or_default();
                self.output.success(&format!("Active manual: {}", title));
            }
        }
        Ok(())
    }

    // ---- steps ----

    async fn step(&self, cmd: StepCommands) -> anyhow::Result<()> {
        match cmd {
            StepCommands::Add {
                project,
                description,
                image,
                image_url,
            } => {
                let mut page = self.project_page(&project).await?;
                page.open_new_step();
                if let Some(draft) = page.new_step_mut() {
                    draft.description = description;
                }
                if let Some(url) = image_url {
                    page.set_new_step_image(url);
                }
                if let Some(path) = &image {
                    self.upload(path, |url| page.set_new_step_image(url)).await?;
                }
                page.create_step()
                    .await
                    .map_err(|e| self.fail(page.take_alert(), e))?;
                self.output.success("Step added");
            }
            StepCommands::Edit {
                project,
                step,
                description,
                image,
                image_url,
            } => {
                let mut page = self.project_page(&project).await?;
                let step_id = Id::parse(&step);
                let Some(current) = page.steps().into_iter().find(|s| s.id == step_id).cloned()
                else {
                    bail!("Step {} is not part of the active manual", step_id);
                };

                let mut editor = StepEditor::new(current);
                editor.begin();
                if let Some(description) = description {
                    editor.set_description(description);
                }
                if let Some(url) = image_url {
                    editor.set_image(url);
                }
                if let Some(path) = &image {
                    self.upload(path, |url| editor.set_image(url)).await?;
                }
                page.update_step(&mut editor)
                    .await
                    .map_err(|e| self.fail(page.take_alert(), e))?;
                self.output.success("Step updated");
            }
        }
        Ok(())
    }

    // ---- catalog ----

    async fn tech(&self, cmd: TechCommands) -> anyhow::Result<()> {
        match cmd {
            TechCommands::List => {
                let catalog = self.api.list_technologies().await?;
                self.output.header("Technologies");
                self.output.table_header(&["ID", "Name", "Category", "Site"]);
                for tech in &catalog {
                    let category = tech.category.as_ref().map(|c| c.name.as_str()).unwrap_or("");
                    self.output.table_row(&[
                        &tech.id.to_string(),
                        &tech.name,
                        category,
                        &tech.official_site_url,
                    ]);
                }
            }
            TechCommands::Add {
                name,
                logo_url,
                site_url,
                category,
            } => {
                let categories = self.api.list_tech_categories().await?;
                let mut form = TechnologyForm::open(categories);
                form.set_name(name);
                form.set_logo_url(logo_url);
                form.set_official_site_url(site_url);
                if let Some(category) = category {
                    form.set_category(&category);
                }
                let payload = form.submit()?;
                let id = self
                    .api
                    .create_technology(&payload)
                    .await
                    .map_err(|e| self.fail(Some(crate::pages::alert("create technology")), e))?;
                match id {
                    Some(id) => self.output.success(&format!("Technology {} added ({})", payload.name, id)),
                    None => self.output.success(&format!("Technology {} added", payload.name)),
                }
            }
        }
        Ok(())
    }

    async fn categories(&self) -> anyhow::Result<()> {
        let categories = self.api.list_tech_categories().await?;
        self.output.header("Categories");
        for category in &categories {
            self.output.list_item(&format!("[{}] {}", category.id, category.name));
        }
        Ok(())
    }

    // ---- auth ----

    async fn login(&mut self, email: Option<String>, password: Option<String>) -> anyhow::Result<()> {
        let email = match email {
            Some(email) => email,
            None => self.output.prompt("Email", ""),
        };
        let password = match password.or_else(|| std::env::var(PASSWORD_VAR).ok()) {
            Some(password) => password,
            None => self.output.prompt("Password", ""),
        };

        self.auth
            .login(self.api.as_ref(), &email, &password)
            .await
            .context("Login failed")?;
        let name = self.auth.user().map(|u| u.name.clone()).unwrap_or_default();
        self.output.success(&format!("Welcome, {}", name));
        Ok(())
    }
}
