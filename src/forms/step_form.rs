use crate::types::{AppError, Id, Result, Step, StepPatch, StepPayload};

/// Description and image of a step being written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepDraft {
    pub description: String,
    pub image_url: String,
}

impl StepDraft {
    pub fn from_step(step: &Step) -> Self {
        Self {
            description: step.description.clone(),
            image_url: step.image_url.clone().unwrap_or_default(),
        }
    }

    /// Creating a step is offered only once both a description and an
    /// image exist.
    pub fn can_submit(&self) -> bool {
        !self.description.trim().is_empty() && !self.image_url.trim().is_empty()
    }

    /// An edit only needs a description; the image stays optional.
    pub fn can_save_edit(&self) -> bool {
        !self.description.trim().is_empty()
    }

    pub fn to_payload(&self, manual_id: &Id) -> Result<StepPayload> {
        if !self.can_submit() {
            return Err(AppError::InvalidInput(
                "A step needs a description and an image".to_string(),
            ));
        }
        Ok(StepPayload {
            manual_id: manual_id.clone(),
            description: self.description.trim().to_string(),
            image_url: self.image_url.clone(),
        })
    }

    pub fn to_patch(&self) -> Result<StepPatch> {
        if !self.can_save_edit() {
            return Err(AppError::InvalidInput(
                "A step needs a description".to_string(),
            ));
        }
        let image_url = self.image_url.trim();
        Ok(StepPatch {
            description: self.description.trim().to_string(),
            image_url: (!image_url.is_empty()).then(|| image_url.to_string()),
        })
    }
}

/// Inline editor for one rendered step.
///
/// Beginning an edit and cancelling both reset the draft to the step's
/// current fields.
#[derive(Debug, Clone, PartialEq)]
pub struct StepEditor {
    step: Step,
    editing: bool,
    draft: StepDraft,
}

impl StepEditor {
    pub fn new(step: Step) -> Self {
        let draft = StepDraft::from_step(&step);
        Self {
            step,
            editing: false,
            draft,
        }
    }

    pub fn step(&self) -> &Step {
        &self.step
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn draft(&self) -> &StepDraft {
        &self.draft
    }

    pub fn begin(&mut self) {
        self.editing = true;
        self.draft = StepDraft::from_step(&self.step);
    }

    pub fn cancel(&mut self) {
        self.editing = false;
        self.draft = StepDraft::from_step(&self.step);
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn set_image(&mut self, url: String) {
        self.draft.image_url = url;
    }

    /// Leave edit mode after the owner saved the patch.
    pub fn saved(&mut self) {
        self.editing = false;
    }
}
