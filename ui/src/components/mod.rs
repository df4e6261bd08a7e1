//! Reusable UI components

pub mod guards;
pub mod hero;
pub mod loading;
pub mod navbar;
pub mod project_card;
pub mod project_form;
pub mod projects_section;
pub mod step_item;
pub mod technology_form;
pub mod technology_selector;
pub mod upload;

pub use guards::Guarded;
pub use hero::HeroSection;
pub use loading::{ErrorBanner, LoadingOverlay, LoadingSpinner};
pub use navbar::Navbar;
pub use project_card::ProjectCard;
pub use project_form::ProjectFormModal;
pub use projects_section::ProjectsSection;
pub use step_item::StepItem;
pub use technology_form::TechnologyFormModal;
pub use technology_selector::TechnologySelector;
pub use upload::ImageUpload;
