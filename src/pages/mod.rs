//! Page controllers
//!
//! A page owns the authoritative client-side copy of the data it shows. It
//! fetches on mount, hands editable copies to forms, sends their payloads
//! and refetches after every successful mutation. Nothing is cached across
//! pages and nothing is mutated locally ahead of the server.
//!
//! Failures surface in two ways:
//! - read failures set a page-level error and keep the earlier snapshot;
//! - write failures raise an [`alert`] and leave the form or inline editor
//!   open so the user can retry.
//!
//! Every controller exposes `&mut self` async actions for callers that own
//! the page (the CLI, tests) and plain `fetch`/`apply` pairs for reactive
//! front ends that keep the page in a signal.

pub mod home;
pub mod profile;
pub mod project;

pub use home::{unique_technologies, HomePage};
pub use profile::{Profile, SocialLink, PROFILE};
pub use project::{active_manual, sorted_steps, ProjectPage, ProjectSnapshot};

use crate::types::Result;

/// Blocking message shown after a failed write.
pub fn alert(action: &str) -> String {
    format!("Failed to {}. Please try again.", action)
}

/// Loading flag, page-level error and the last good snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState<T> {
    loading: bool,
    error: Option<String>,
    data: Option<T>,
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        Self {
            loading: true,
            error: None,
            data: None,
        }
    }
}

impl<T> PageState<T> {
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Settle a fetch. A failure records `message` and keeps the previous
    /// snapshot; a success clears any earlier error.
    pub fn settle(&mut self, fetched: Result<T>, message: &str) {
        self.loading = false;
        match fetched {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(e) => {
                tracing::error!("{} ({})", message, e);
                self.error = Some(message.to_string());
            }
        }
    }
}
