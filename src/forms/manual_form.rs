use super::require;
use crate::types::{Id, Manual, ManualPatch, ManualPayload, Result};

/// Title, description and version of a manual being written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManualDraft {
    pub title: String,
    pub description: String,
    pub version: String,
}

impl ManualDraft {
    pub fn from_manual(manual: &Manual) -> Self {
        Self {
            title: manual.title.clone(),
            description: manual.description.clone(),
            version: manual.version.clone(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        require(&self.title, "Title")
    }

    pub fn to_payload(&self, project_id: &Id) -> Result<ManualPayload> {
        self.validate()?;
        Ok(ManualPayload {
            project_id: project_id.clone(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            version: self.version.trim().to_string(),
        })
    }

    pub fn to_patch(&self) -> Result<ManualPatch> {
        self.validate()?;
        Ok(ManualPatch {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            version: self.version.trim().to_string(),
        })
    }
}

/// The one manual currently in inline edit mode.
#[derive(Debug, Clone, PartialEq)]
pub struct ManualEdit {
    pub manual_id: Id,
    pub draft: ManualDraft,
}

impl ManualEdit {
    pub fn begin(manual: &Manual) -> Self {
        Self {
            manual_id: manual.id.clone(),
            draft: ManualDraft::from_manual(manual),
        }
    }

    pub fn is_for(&self, manual_id: &Id) -> bool {
        &self.manual_id == manual_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manual() -> Manual {
        Manual {
            id: Id::Text("m1".to_string()),
            title: "Setup".to_string(),
            description: "Local install".to_string(),
            version: "1.0".to_string(),
            is_active: false,
            steps: vec![],
            project_id: Some(Id::Int(1)),
        }
    }

    #[test]
    fn test_begin_copies_fields() {
        let edit = ManualEdit::begin(&manual());
        assert!(edit.is_for(&Id::Text("m1".to_string())));
        assert_eq!(edit.draft.title, "Setup");
        assert_eq!(edit.draft.version, "1.0");
    }

    #[test]
    fn test_payload_carries_project() {
        let draft = ManualDraft {
            title: " Deploy ".to_string(),
            description: String::new(),
            version: "2".to_string(),
        };
        let payload = draft.to_payload(&Id::Int(5)).unwrap();
        assert_eq!(payload.project_id, Id::Int(5));
        assert_eq!(payload.title, "Deploy");
    }

    #[test]
    fn test_blank_title_rejected() {
        assert!(ManualDraft::default().to_patch().is_err());
    }
}
