//! Authentication state for the client
//!
//! The backend issues an opaque bearer token at login. This module keeps
//! that token somewhere durable and exposes the login status derived from it.
//!
//! # Module Structure
//!
//! - [`auth::token`](crate::auth::token) - where the bearer token lives (memory, file)
//! - [`auth::context`](crate::auth::context) - login status, user identity and logout
//! - [`auth::gate`](crate::auth::gate) - route guards over "authenticated or not"
//!
//! # Usage
//!
//! ```ignore
//! use folio::auth::{AuthContext, MemoryTokenStore};
//! use std::sync::Arc;
//!
//! let store = Arc::new(MemoryTokenStore::default());
//! let mut auth = AuthContext::new(store.clone());
//! auth.login(api.as_ref(), "me@example.com", "secret").await?;
//! assert!(auth.is_logged_in());
//! ```
//!
//! The same store must be handed to the HTTP client so that every request
//! made after login carries the token.

/// Login status, user identity and logout.
pub mod context;
/// Guards that render a child only for (un)authenticated users.
pub mod gate;
/// Bearer token storage backends.
pub mod token;

pub use context::AuthContext;
pub use gate::Gate;
pub use token::{FileTokenStore, MemoryTokenStore, TokenStore, TOKEN_KEY};
