//! Route guards

use super::LoadingOverlay;
use crate::state::AppState;
use folio::auth::Gate;
use leptos::prelude::*;
use leptos_router::components::Redirect;

/// Render `children` only when `gate` admits the current visitor; everyone
/// else is redirected. Nothing is decided before the stored token has been
/// checked.
#[component]
pub fn Guarded(gate: Gate, children: ChildrenFn) -> impl IntoView {
    let state = expect_context::<AppState>();

    move || {
        if !state.auth_ready.get() {
            return view! { <LoadingOverlay /> }.into_any();
        }
        let auth = state.auth.get();
        match gate.render(&auth, || children()) {
            Some(view) => view,
            None => view! { <Redirect path=gate.redirect_to() /> }.into_any(),
        }
    }
}
