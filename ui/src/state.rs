//! Global application state

use folio::api::{HttpBackend, PortfolioApi, DEFAULT_BASE_URL};
use folio::auth::{AuthContext, TokenStore, TOKEN_KEY};
use folio::types::{AppError, Result};
use folio::upload::UploadOptions;
use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::sync::Arc;

/// Backend location baked in at build time.
fn base_url() -> &'static str {
    option_env!("SERVER_URL").unwrap_or(DEFAULT_BASE_URL)
}

/// Bearer token kept in the browser's localStorage under `authToken`.
///
/// The raw string is stored (not JSON) so the key stays readable by other
/// tooling.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn token(&self) -> Option<String> {
        LocalStorage::raw().get_item(TOKEN_KEY).ok().flatten()
    }

    fn store(&self, token: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(TOKEN_KEY, token)
            .map_err(|e| AppError::Configuration(format!("localStorage: {:?}", e)))
    }

    fn clear(&self) {
        LocalStorage::delete(TOKEN_KEY);
    }
}

/// Number of controller actions in flight.
///
/// Actions write the whole controller back when they finish, so form
/// controls stay disabled while any action is pending; input typed in the
/// meantime would otherwise be overwritten.
#[derive(Debug, Clone, Copy)]
pub struct Busy(RwSignal<u32>);

impl Busy {
    pub fn new() -> Self {
        Self(RwSignal::new(0))
    }

    pub fn get(&self) -> bool {
        self.0.get() > 0
    }

    pub fn start(&self) {
        self.0.update(|n| *n += 1);
    }

    pub fn finish(&self) {
        self.0.update(|n| *n = n.saturating_sub(1));
    }
}

impl Default for Busy {
    fn default() -> Self {
        Self::new()
    }
}

/// Global application state
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn PortfolioApi>,
    /// Login status; replaced wholesale after login, verify and logout
    pub auth: RwSignal<AuthContext>,
    /// False until the stored token has been checked once
    pub auth_ready: RwSignal<bool>,
    pub busy: Busy,
    pub upload: UploadOptions,
}

impl AppState {
    pub fn new() -> Self {
        let tokens: Arc<dyn TokenStore> = Arc::new(LocalTokenStore);
        Self {
            api: Arc::new(HttpBackend::new(base_url(), tokens.clone())),
            auth: RwSignal::new(AuthContext::new(tokens)),
            auth_ready: RwSignal::new(false),
            busy: Busy::new(),
            upload: UploadOptions::default(),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.auth.with(|a| a.is_logged_in())
    }

    /// Resolve a token left by an earlier visit.
    pub fn authenticate(&self) {
        let api = self.api.clone();
        let auth = self.auth;
        let ready = self.auth_ready;
        spawn_local(async move {
            let mut ctx = auth.get_untracked();
            // A rejected token has already been cleared; the visitor is anonymous
            let _ = ctx.authenticate(api.as_ref()).await;
            auth.set(ctx);
            ready.set(true);
        });
    }

    pub fn logout(&self) {
        self.auth.update(|a| a.logout());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Run an async action on a controller held in a signal.
///
/// The controller is cloned out, driven to completion and written back, so
/// the view only ever sees settled state. `busy` is held for the duration.
/// Any alert the action left is shown.
pub fn run_action<T, F, Fut>(busy: Busy, signal: RwSignal<T>, action: F)
where
    T: Clone + Send + Sync + 'static,
    F: FnOnce(T) -> Fut + 'static,
    Fut: Future<Output = (T, Option<String>)> + 'static,
{
    busy.start();
    spawn_local(async move {
        let (next, alert) = action(signal.get_untracked()).await;
        signal.set(next);
        busy.finish();
        if let Some(message) = alert {
            notify(&message);
        }
    });
}

/// Blocking browser alert.
pub fn notify(message: &str) {
    if window().alert_with_message(message).is_err() {
        tracing::error!("{}", message);
    }
}

/// Blocking browser confirm; a dialog that cannot be shown declines.
pub fn confirm(question: &str) -> bool {
    window().confirm_with_message(question).unwrap_or(false)
}
