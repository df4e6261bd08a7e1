//! Form state
//!
//! Each form holds an editable copy of the fields it submits. Forms never
//! touch a page's fetched snapshot; they validate and hand a payload upward,
//! and the owner decides which request to send.
//!
//! # Module Structure
//!
//! - [`forms::project_form`](crate::forms::project_form) - create/edit a project, pick its stack
//! - [`forms::technology_form`](crate::forms::technology_form) - add a catalog technology
//! - [`forms::manual_form`](crate::forms::manual_form) - new manual and the inline manual editor
//! - [`forms::step_form`](crate::forms::step_form) - new step and the inline step editor

pub mod manual_form;
pub mod project_form;
pub mod step_form;
pub mod technology_form;

pub use manual_form::{ManualDraft, ManualEdit};
pub use project_form::{FormMode, ProjectDraft, ProjectForm};
pub use step_form::{StepDraft, StepEditor};
pub use technology_form::{TechnologyDraft, TechnologyForm};

use crate::types::{AppError, Result};

/// Fail with `"<label> is required"` when `value` is blank.
pub(crate) fn require(value: &str, label: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{} is required", label)));
    }
    Ok(())
}

/// Required field that must also be an absolute URL.
pub(crate) fn require_url(value: &str, label: &str) -> Result<()> {
    require(value, label)?;
    check_url(value, label)
}

/// Optional field: blank is fine, anything else must be an absolute URL.
pub(crate) fn optional_url(value: &str, label: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Ok(());
    }
    check_url(value, label)
}

fn check_url(value: &str, label: &str) -> Result<()> {
    reqwest::Url::parse(value.trim())
        .map(|_| ())
        .map_err(|_| AppError::InvalidInput(format!("{} must be a valid URL", label)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", false)]
    #[case("   ", false)]
    #[case("x", true)]
    fn test_require(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(require(value, "Name").is_ok(), ok);
    }

    #[rstest]
    #[case("", true)]
    #[case("https://github.com/VeraV/folio-server", true)]
    #[case("github.com/VeraV", false)]
    #[case("not a url", false)]
    fn test_optional_url(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(optional_url(value, "Server repo").is_ok(), ok);
    }

    #[test]
    fn test_require_url_messages() {
        assert_eq!(
            require_url("", "Deploy URL"),
            Err(AppError::InvalidInput("Deploy URL is required".to_string()))
        );
        assert_eq!(
            require_url("nope", "Deploy URL"),
            Err(AppError::InvalidInput(
                "Deploy URL must be a valid URL".to_string()
            ))
        );
    }
}
