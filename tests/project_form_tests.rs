//! Project form: population rules, catalog loading and the add-technology flow.

mod common;

use common::fixtures::{category, project, tech};
use common::mocks::MockApi;
use folio::forms::{FormMode, ProjectDraft, ProjectForm};
use folio::types::{AppError, Id};
use serde_json::json;

#[tokio::test]
async fn test_edit_populates_from_project() {
    let api = MockApi::new().with_catalog(vec![vec![tech(1, "React"), tech(2, "Node")]]);
    let p = project(4, "Folio", vec![tech(2, "Node"), tech(1, "React")], vec![]);

    let mut form = ProjectForm::new();
    form.open(&api, Some(&p)).await;

    assert_eq!(form.mode(), &FormMode::Edit(Id::Int(4)));
    assert_eq!(form.draft(), &ProjectDraft::from_project(&p));
    assert_eq!(form.draft().technology_ids, vec![Id::Int(2), Id::Int(1)]);
    assert_eq!(form.draft().server_github_url, "");
    assert_eq!(form.catalog().len(), 2);
}

#[tokio::test]
async fn test_create_is_blank_after_edit_session() {
    let api = MockApi::new();
    let p = project(4, "Folio", vec![tech(1, "React")], vec![]);

    let mut form = ProjectForm::new();
    form.open(&api, Some(&p)).await;
    form.draft_mut().name = "half-typed".to_string();
    form.close();

    form.open(&api, None).await;
    assert_eq!(form.mode(), &FormMode::Create);
    assert_eq!(form.draft(), &ProjectDraft::default());
}

#[tokio::test]
async fn test_catalog_fetched_on_every_open() {
    let api = MockApi::new().with_catalog(vec![vec![tech(1, "React")], vec![tech(1, "React"), tech(2, "Node")]]);

    let mut form = ProjectForm::new();
    form.open(&api, None).await;
    assert_eq!(form.catalog().len(), 1);
    form.open(&api, None).await;
    assert_eq!(api.count("list_technologies"), 1);

    form.close();
    form.open(&api, None).await;
    assert_eq!(api.count("list_technologies"), 2);
    assert_eq!(form.catalog().len(), 2);
}

#[tokio::test]
async fn test_switching_project_while_open_repopulates() {
    let api = MockApi::new();
    let a = project(1, "Alpha", vec![], vec![]);
    let b = project(2, "Beta", vec![], vec![]);

    let mut form = ProjectForm::new();
    form.open(&api, Some(&a)).await;
    assert!(!form.sync(true, Some(&b)));
    assert_eq!(form.draft().name, "Beta");
}

#[test]
fn test_submit_returns_existing_id() {
    let p = project(4, "Folio", vec![tech(1, "React")], vec![]);
    let mut form = ProjectForm::new();
    form.sync(true, Some(&p));

    let (payload, id) = form.submit().unwrap();
    assert_eq!(id, Some(Id::Int(4)));
    assert_eq!(payload.technology_ids, vec![Id::Int(1)]);
}

#[test]
fn test_required_fields() {
    let mut form = ProjectForm::new();
    form.sync(true, None);
    assert_eq!(
        form.submit().unwrap_err(),
        AppError::InvalidInput("Project name is required".to_string())
    );

    let draft = form.draft_mut();
    draft.name = "Folio".to_string();
    draft.description_short = "Portfolio".to_string();
    draft.client_github_url = "https://github.com/VeraV/folio".to_string();
    draft.client_deploy_url = "folio.example.com".to_string();
    assert_eq!(
        form.submit().unwrap_err(),
        AppError::InvalidInput("Client deploy URL must be a valid URL".to_string())
    );

    form.draft_mut().client_deploy_url = "https://folio.example.com".to_string();
    form.draft_mut().server_deploy_url = "not a url".to_string();
    assert!(form.submit().is_err());

    form.draft_mut().server_deploy_url.clear();
    assert_eq!(
        form.submit().unwrap_err(),
        AppError::InvalidInput("Select at least one technology".to_string())
    );

    form.add_technology(&Id::Int(1));
    let (payload, id) = form.submit().unwrap();
    assert_eq!(id, None);
    assert_eq!(payload.image_url, "");
}

#[test]
fn test_image_only_changes_through_upload_callback() {
    let mut form = ProjectForm::new();
    form.sync(true, None);
    form.set_image("https://res.cloudinary.com/demo/folio.png".to_string());
    assert_eq!(form.draft().image_url, "https://res.cloudinary.com/demo/folio.png");
}

#[tokio::test]
async fn test_add_new_technology_selects_created_id() {
    let api = MockApi::new()
        .with_catalog(vec![vec![tech(1, "React")], vec![tech(1, "React"), tech(5, "Rust")]])
        .with_categories(vec![category(1, "Frontend"), category(2, "Backend")])
        .with_created_technology_id(Id::Int(5));

    let mut form = ProjectForm::new();
    form.open(&api, None).await;
    form.add_technology(&Id::Int(1));

    form.open_technology_form(&api).await;
    {
        let tech_form = form.technology_form_mut().unwrap();
        assert_eq!(tech_form.draft().category_id, Some(Id::Int(1)));
        tech_form.set_name("Rust");
        tech_form.set_logo_url("https://cdn.example.com/rust.svg");
        tech_form.set_official_site_url("https://www.rust-lang.org");
        tech_form.set_category("2");
    }

    form.submit_technology(&api).await.unwrap();

    assert_eq!(
        api.last_args("create_technology"),
        Some(json!({
            "name": "Rust",
            "logo_url": "https://cdn.example.com/rust.svg",
            "official_site_url": "https://www.rust-lang.org",
            "categoryId": 2
        }))
    );
    assert!(form.technology_form().is_none());
    assert_eq!(form.catalog().len(), 2);
    assert_eq!(form.draft().technology_ids, vec![Id::Int(1), Id::Int(5)]);
}

#[tokio::test]
async fn test_failed_technology_create_keeps_dialog() {
    let api = MockApi::new()
        .with_categories(vec![category(1, "Frontend")])
        .failing("create_technology");

    let mut form = ProjectForm::new();
    form.open(&api, None).await;
    form.open_technology_form(&api).await;
    {
        let tech_form = form.technology_form_mut().unwrap();
        tech_form.set_name("Rust");
        tech_form.set_logo_url("https://cdn.example.com/rust.svg");
        tech_form.set_official_site_url("https://www.rust-lang.org");
    }

    assert!(form.submit_technology(&api).await.is_err());
    assert!(form.technology_form().is_some());
    assert!(form.draft().technology_ids.is_empty());
}
