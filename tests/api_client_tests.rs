//! REST client against a mock backend: paths, verbs, bearer handling and
//! error mapping.

use folio::api::{HttpBackend, PortfolioApi};
use folio::auth::{MemoryTokenStore, TokenStore};
use folio::pages::ProjectPage;
use folio::types::{
    AppError, Id, LoginRequest, ManualPatch, ManualPayload, ProjectPayload, StepPatch,
    StepPayload, TechnologyPayload,
};
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend(server: &MockServer, token: Option<&str>) -> (HttpBackend, Arc<MemoryTokenStore>) {
    let store = Arc::new(match token {
        Some(t) => MemoryTokenStore::with_token(t),
        None => MemoryTokenStore::default(),
    });
    (HttpBackend::new(server.uri(), store.clone()), store)
}

fn project_json(id: i64) -> Value {
    json!({
        "id": id,
        "name": "Folio",
        "description_short": "Portfolio site",
        "client_github_url": "https://github.com/VeraV/folio",
        "client_deploy_url": "https://folio.example.com",
        "server_github_url": null,
        "server_deploy_url": null,
        "image_url": "https://res.cloudinary.com/demo/folio.png",
        "techStack": [
            {
                "id": 100,
                "technology": {
                    "id": 1,
                    "name": "React",
                    "logo_url": "https://cdn.example.com/react.svg",
                    "official_site_url": "https://react.dev",
                    "categoryId": 1
                }
            }
        ],
        "manuals": [
            {
                "id": "m1",
                "title": "Setup",
                "description": null,
                "version": "1.0",
                "isActive": true,
                "steps": [
                    { "id": 5, "step_number": 2, "description": "Run it", "image_url": null },
                    { "id": 4, "step_number": 1, "description": "Clone it", "image_url": "https://res.cloudinary.com/demo/s1.png" }
                ]
            }
        ]
    })
}

#[tokio::test]
async fn test_get_project_decodes_nested_graph() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(project_json(7)))
        .mount(&server)
        .await;

    let (api, _) = backend(&server, None);
    let project = api.get_project(&Id::Int(7)).await.unwrap();

    assert_eq!(project.id, Id::Int(7));
    assert_eq!(project.server_github_url, None);
    assert_eq!(project.technology_ids(), vec![Id::Int(1)]);
    assert_eq!(project.manuals[0].id, Id::Text("m1".to_string()));
    assert_eq!(project.manuals[0].description, "");
    assert!(project.manuals[0].is_active);
    assert_eq!(project.manuals[0].steps[1].step_number, 1);
}

#[tokio::test]
async fn test_bearer_attached_when_token_stored() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([project_json(1)])))
        .expect(1)
        .mount(&server)
        .await;

    let (api, _) = backend(&server, Some("secret-token"));
    let projects = api.list_projects().await.unwrap();
    assert_eq!(projects.len(), 1);
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/technology"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let (api, _) = backend(&server, None);
    api.list_technologies().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_tech_categories_never_send_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/tech-category"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{ "id": 1, "name": "Frontend" }])),
        )
        .mount(&server)
        .await;

    let (api, _) = backend(&server, Some("secret-token"));
    let categories = api.list_tech_categories().await.unwrap();
    assert_eq!(categories[0].name, "Frontend");

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_token_read_per_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/technology"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let (api, store) = backend(&server, None);
    api.list_technologies().await.unwrap();
    store.store("late-token").unwrap();
    api.list_technologies().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
    assert_eq!(
        requests[1].headers.get("authorization").unwrap(),
        "Bearer late-token"
    );
}

#[tokio::test]
async fn test_create_project_posts_payload_and_reads_id() {
    let server = MockServer::start().await;
    let payload = ProjectPayload {
        name: "Folio".to_string(),
        description_short: "Portfolio".to_string(),
        client_github_url: "https://github.com/VeraV/folio".to_string(),
        client_deploy_url: "https://folio.example.com".to_string(),
        server_github_url: String::new(),
        server_deploy_url: String::new(),
        image_url: String::new(),
        technology_ids: vec![Id::Int(1), Id::Int(3)],
    };

    Mock::given(method("POST"))
        .and(path("/api/projects"))
        .and(body_json(json!({
            "name": "Folio",
            "description_short": "Portfolio",
            "client_github_url": "https://github.com/VeraV/folio",
            "client_deploy_url": "https://folio.example.com",
            "server_github_url": "",
            "server_deploy_url": "",
            "image_url": "",
            "technologyIds": [1, 3]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 12, "name": "Folio" })))
        .expect(1)
        .mount(&server)
        .await;

    let (api, _) = backend(&server, Some("t"));
    assert_eq!(api.create_project(&payload).await.unwrap(), Some(Id::Int(12)));
}

#[tokio::test]
async fn test_mutation_verbs_and_paths() {
    let server = MockServer::start().await;
    for (verb, route) in [
        ("PUT", "/api/projects/3"),
        ("DELETE", "/api/projects/3"),
        ("POST", "/api/manuals"),
        ("PATCH", "/api/manuals/m1"),
        ("PATCH", "/api/manuals/3/m1/set-active"),
        ("DELETE", "/api/manuals/m1"),
        ("POST", "/api/steps"),
        ("PATCH", "/api/steps/9"),
        ("POST", "/api/technology"),
    ] {
        Mock::given(method(verb))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
    }

    let (api, _) = backend(&server, Some("t"));
    let project = Id::Int(3);
    let manual = Id::Text("m1".to_string());

    api.update_project(&project, &ProjectPayload::default())
        .await
        .unwrap();
    api.delete_project(&project).await.unwrap();
    api.create_manual(&ManualPayload {
        project_id: project.clone(),
        title: "Setup".to_string(),
        description: String::new(),
        version: "1.0".to_string(),
    })
    .await
    .unwrap();
    api.update_manual(&manual, &ManualPatch::default())
        .await
        .unwrap();
    api.set_active_manual(&project, &manual).await.unwrap();
    api.delete_manual(&manual).await.unwrap();
    api.create_step(&StepPayload {
        manual_id: manual.clone(),
        description: "Clone it".to_string(),
        image_url: "https://res.cloudinary.com/demo/s1.png".to_string(),
    })
    .await
    .unwrap();
    api.update_step(&Id::Int(9), &StepPatch::default())
        .await
        .unwrap();
    // Empty body: no id to report
    assert_eq!(
        api.create_technology(&TechnologyPayload::default())
            .await
            .unwrap(),
        None
    );
}

#[tokio::test]
async fn test_list_manuals_by_project() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/manuals/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "m1", "title": "Setup", "isActive": false, "steps": [] },
            { "id": "m2", "title": "Deploy", "isActive": true }
        ])))
        .mount(&server)
        .await;

    let (api, _) = backend(&server, Some("t"));
    let manuals = api.list_manuals(&Id::Int(3)).await.unwrap();
    assert_eq!(manuals.len(), 2);
    assert!(manuals[1].is_active);
    assert!(manuals[1].steps.is_empty());
}

#[tokio::test]
async fn test_error_body_message_surfaces() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/projects/3"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({ "message": "Not allowed" })),
        )
        .mount(&server)
        .await;

    let (api, _) = backend(&server, Some("t"));
    assert_eq!(
        api.delete_project(&Id::Int(3)).await.unwrap_err(),
        AppError::Api {
            status: 403,
            message: "Not allowed".to_string()
        }
    );
}

#[tokio::test]
async fn test_error_without_body_uses_status_reason() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (api, _) = backend(&server, None);
    assert_eq!(
        api.list_projects().await.unwrap_err(),
        AppError::Api {
            status: 500,
            message: "Internal Server Error".to_string()
        }
    );
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let (api, _) = backend(&server, None);
    assert!(matches!(
        api.list_projects().await,
        Err(AppError::Decode(_))
    ));
}

#[tokio::test]
async fn test_unreachable_backend_is_http_error() {
    let store = Arc::new(MemoryTokenStore::default());
    let api = HttpBackend::new("http://127.0.0.1:1", store);
    assert!(matches!(api.list_projects().await, Err(AppError::Http(_))));
}

#[tokio::test]
async fn test_login_and_verify() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({ "email": "vera@example.com", "password": "pw" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "authToken": "jwt" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/auth/verify"))
        .and(header("authorization", "Bearer jwt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_id": "u1",
            "name": "Vera",
            "email": "vera@example.com"
        })))
        .mount(&server)
        .await;

    let (api, store) = backend(&server, None);
    let response = api
        .login(&LoginRequest {
            email: "vera@example.com".to_string(),
            password: "pw".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(response.auth_token, "jwt");

    store.store(&response.auth_token).unwrap();
    let user = api.verify().await.unwrap();
    assert_eq!(user.id, Some(Id::Text("u1".to_string())));
    assert_eq!(user.name, "Vera");
}

#[tokio::test]
async fn test_rejected_credentials_are_auth_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Wrong password" })),
        )
        .mount(&server)
        .await;

    let (api, _) = backend(&server, None);
    let err = api
        .login(&LoginRequest {
            email: "vera@example.com".to_string(),
            password: "nope".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err, AppError::Auth("Wrong password".to_string()));
}

#[tokio::test]
async fn test_step_patch_without_image_omits_field() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/steps/5"))
        .and(body_json(json!({ "description": "Run it twice" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let (api, _) = backend(&server, Some("t"));
    let patch = StepPatch {
        description: "Run it twice".to_string(),
        image_url: None,
    };
    api.update_step(&Id::Int(5), &patch).await.unwrap();
}

/// Collects formatted log lines for assertions.
#[derive(Clone, Default)]
struct LogBuffer(Arc<parking_lot::Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[tokio::test]
async fn test_manual_creation_logged_once_at_info() {
    let logs = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_writer(logs.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(project_json(3)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/manuals/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/manuals"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let (api, _) = backend(&server, Some("t"));
    let mut page = ProjectPage::new(Arc::new(api), Id::Int(3), true);
    page.load().await;
    page.open_new_manual();
    if let Some(draft) = page.new_manual_mut() {
        draft.title = "Deploy".to_string();
    }
    page.create_manual().await.unwrap();

    assert_eq!(logs.contents().matches("Manual created").count(), 1);
}
