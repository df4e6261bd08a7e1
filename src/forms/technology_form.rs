use super::{require, require_url};
use crate::types::{AppError, Id, Result, TechCategory, TechnologyPayload};

/// Editable fields of a new catalog technology.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TechnologyDraft {
    pub name: String,
    pub logo_url: String,
    pub official_site_url: String,
    pub category_id: Option<Id>,
}

/// "Add technology" dialog state.
///
/// Opening always starts from blank fields with the first category picked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TechnologyForm {
    draft: TechnologyDraft,
    categories: Vec<TechCategory>,
    logo_broken: bool,
}

impl TechnologyForm {
    pub fn open(categories: Vec<TechCategory>) -> Self {
        let category_id = categories.first().map(|c| c.id.clone());
        Self {
            draft: TechnologyDraft {
                category_id,
                ..TechnologyDraft::default()
            },
            categories,
            logo_broken: false,
        }
    }

    pub fn draft(&self) -> &TechnologyDraft {
        &self.draft
    }

    pub fn categories(&self) -> &[TechCategory] {
        &self.categories
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    /// A new logo URL gets a fresh chance to load.
    pub fn set_logo_url(&mut self, url: impl Into<String>) {
        self.draft.logo_url = url.into();
        self.logo_broken = false;
    }

    pub fn set_official_site_url(&mut self, url: impl Into<String>) {
        self.draft.official_site_url = url.into();
    }

    /// Pick a category by id. The id comes from a `<select>` so it arrives
    /// as text; it is matched against the known categories.
    pub fn set_category(&mut self, id: &str) {
        self.draft.category_id = self
            .categories
            .iter()
            .find(|c| c.id.to_string() == id)
            .map(|c| c.id.clone());
    }

    pub fn show_preview(&self) -> bool {
        !self.draft.logo_url.trim().is_empty()
    }

    pub fn logo_broken(&self) -> bool {
        self.logo_broken
    }

    pub fn logo_failed(&mut self) {
        self.logo_broken = true;
    }

    pub fn logo_loaded(&mut self) {
        self.logo_broken = false;
    }

    pub fn submit(&self) -> Result<TechnologyPayload> {
        let d = &self.draft;
        require(&d.name, "Name")?;
        require_url(&d.logo_url, "Logo URL")?;
        require_url(&d.official_site_url, "Official site URL")?;
        let category_id = d
            .category_id
            .clone()
            .ok_or_else(|| AppError::InvalidInput("Category is required".to_string()))?;

        Ok(TechnologyPayload {
            name: d.name.trim().to_string(),
            logo_url: d.logo_url.trim().to_string(),
            official_site_url: d.official_site_url.trim().to_string(),
            category_id: Some(category_id),
        })
    }
}
