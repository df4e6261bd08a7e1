//! # folio
//!
//! Client for a personal portfolio: a public profile with the owner's
//! projects and technology badges, plus an admin area for managing
//! projects, their technology stack and per-project manuals made of ordered,
//! illustrated steps.
//!
//! All state lives in a remote REST backend. This crate is the layer between
//! that backend and whatever renders it:
//!
//! 1. **As a library** - typed API client, auth context, forms and page
//!    controllers; compiles for native targets and `wasm32`
//! 2. **As a CLI** - the `folio` binary (feature `cli`)
//! 3. **As a web app** - the Leptos front end in `ui/`, built on this library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use folio::api::HttpBackend;
//! use folio::auth::MemoryTokenStore;
//! use folio::pages::HomePage;
//! use std::sync::Arc;
//!
//! let tokens = Arc::new(MemoryTokenStore::default());
//! let api = Arc::new(HttpBackend::new("http://localhost:5005", tokens));
//!
//! let mut home = HomePage::new(api);
//! home.load().await;
//! for tech in home.technologies() {
//!     println!("{}", tech.name);
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `cli` | `folio` admin binary (default) |
//!
//! ## Modules
//!
//! - [`api`] - REST client, one service per resource
//! - [`auth`] - token store, auth context and route guards
//! - [`upload`] - Cloudinary upload adapter
//! - [`selector`] - technology picker
//! - [`forms`] - project, technology, manual and step forms
//! - [`pages`] - home, profile and project page controllers
//! - [`types`] - data model and error handling
//! - [`utils`] - configuration

#![cfg_attr(docsrs, feature(doc_cfg))]

/// REST client for the portfolio backend.
pub mod api;
/// Token storage, auth context and route guards.
pub mod auth;
/// Command-line interface.
#[cfg(feature = "cli")]
pub mod cli;
/// Editable form state and validation.
pub mod forms;
/// Page controllers.
pub mod pages;
/// Two-pane technology picker.
pub mod selector;
/// Core types (entities, payloads, errors).
pub mod types;
/// Image upload adapter.
pub mod upload;
/// Configuration utilities.
pub mod utils;

pub use api::{HttpBackend, PortfolioApi};
pub use auth::{AuthContext, Gate};
pub use types::{AppError, Id, Result};
pub use utils::config::FolioConfig;
