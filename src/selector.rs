//! Technology picker
//!
//! A controlled two-pane picker: the catalog is split into the technologies
//! already selected and the ones still available, both in catalog order.
//! The picker owns nothing; every mutation hands the complete new selection
//! to the caller, which decides what to store.

use crate::types::{Id, Technology};

pub const SELECTED_EMPTY_HINT: &str = "Click technologies to add";
pub const AVAILABLE_EMPTY_HINT: &str = "All technologies selected!";

/// View over a catalog and the caller's current selection.
#[derive(Debug, Clone, Copy)]
pub struct TechnologySelector<'a> {
    catalog: &'a [Technology],
    selected: &'a [Id],
}

impl<'a> TechnologySelector<'a> {
    pub fn new(catalog: &'a [Technology], selected: &'a [Id]) -> Self {
        Self { catalog, selected }
    }

    pub fn is_selected(&self, id: &Id) -> bool {
        self.selected.contains(id)
    }

    /// Catalog entries whose id is in the selection.
    pub fn selected(&self) -> Vec<&'a Technology> {
        self.catalog
            .iter()
            .filter(|t| self.is_selected(&t.id))
            .collect()
    }

    /// Catalog entries not in the selection.
    pub fn available(&self) -> Vec<&'a Technology> {
        self.catalog
            .iter()
            .filter(|t| !self.is_selected(&t.id))
            .collect()
    }

    /// `(selected, available)` pane sizes.
    pub fn counts(&self) -> (usize, usize) {
        let selected = self.selected().len();
        (selected, self.catalog.len() - selected)
    }

    pub fn selected_hint(&self) -> Option<&'static str> {
        self.selected().is_empty().then_some(SELECTED_EMPTY_HINT)
    }

    pub fn available_hint(&self) -> Option<&'static str> {
        self.available().is_empty().then_some(AVAILABLE_EMPTY_HINT)
    }

    /// Append `id` and report the new selection.
    ///
    /// Selecting an id twice is a no-op: `on_change` is not called and
    /// `false` is returned.
    pub fn add(&self, id: &Id, on_change: impl FnOnce(Vec<Id>)) -> bool {
        if self.is_selected(id) {
            return false;
        }
        let mut next = self.selected.to_vec();
        next.push(id.clone());
        on_change(next);
        true
    }

    /// Drop every occurrence of `id` and report the new selection.
    pub fn remove(&self, id: &Id, on_change: impl FnOnce(Vec<Id>)) {
        let next = self
            .selected
            .iter()
            .filter(|s| *s != id)
            .cloned()
            .collect();
        on_change(next);
    }

    /// Ask the owner for a new technology. The picker never creates one.
    pub fn request_new(&self, on_add_new: impl FnOnce()) {
        on_add_new();
    }
}
