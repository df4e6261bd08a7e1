//! Entity builders with just enough data for the page and form tests.

use folio::types::{Id, Manual, Project, Step, TechCategory, TechStackEntry, Technology, User};

pub fn tech(id: i64, name: &str) -> Technology {
    Technology {
        id: Id::Int(id),
        name: name.to_string(),
        logo_url: format!("https://cdn.example.com/{}.svg", name.to_lowercase()),
        official_site_url: format!("https://{}.example.com", name.to_lowercase()),
        category_id: Some(Id::Int(1)),
        category: None,
    }
}

pub fn category(id: i64, name: &str) -> TechCategory {
    TechCategory {
        id: Id::Int(id),
        name: name.to_string(),
    }
}

pub fn step(id: i64, number: u32, description: &str) -> Step {
    Step {
        id: Id::Int(id),
        step_number: number,
        description: description.to_string(),
        image_url: Some(format!("https://res.cloudinary.com/demo/step-{}.png", id)),
        manual_id: None,
    }
}

pub fn manual(id: &str, title: &str, active: bool, steps: Vec<Step>) -> Manual {
    Manual {
        id: Id::Text(id.to_string()),
        title: title.to_string(),
        description: format!("{} description", title),
        version: "1.0".to_string(),
        is_active: active,
        steps,
        project_id: Some(Id::Int(1)),
    }
}

pub fn project(id: i64, name: &str, stack: Vec<Technology>, manuals: Vec<Manual>) -> Project {
    Project {
        id: Id::Int(id),
        name: name.to_string(),
        description_short: format!("{} in one line", name),
        client_github_url: format!("https://github.com/VeraV/{}", name.to_lowercase()),
        client_deploy_url: format!("https://{}.example.com", name.to_lowercase()),
        server_github_url: None,
        server_deploy_url: None,
        image_url: format!("https://res.cloudinary.com/demo/{}.png", name.to_lowercase()),
        tech_stack: stack
            .into_iter()
            .enumerate()
            .map(|(i, technology)| TechStackEntry {
                id: Id::Int(1000 + i as i64),
                technology,
            })
            .collect(),
        manuals,
    }
}

pub fn user() -> User {
    User {
        id: Some(Id::Text("u1".to_string())),
        name: "Vera".to_string(),
        email: "vera@example.com".to_string(),
    }
}
