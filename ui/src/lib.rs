//! Folio UI - Leptos front end for the portfolio
//!
//! Routes: the landing page, the static profile, one page per project and
//! the login form. Page logic lives in the `folio` crate; this crate only
//! renders it and wires browser events to it.

pub mod components;
pub mod pages;
pub mod state;

use folio::auth::Gate;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use components::{Guarded, Navbar};
use pages::{home::HomePage, login::LoginPage, profile::ProfilePage, project::ProjectPage};
use state::AppState;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let app_state = AppState::new();
    app_state.authenticate();
    let busy = app_state.busy;
    provide_context(app_state);

    view! {
        <Title text="Vera Fileyeva - Portfolio" />
        <Router>
            <Navbar />
            <main class="min-h-screen bg-gray-50 text-gray-900">
                // Form controls stay disabled while a write is in flight
                <fieldset class="contents" disabled=move || busy.get()>
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/about") view=ProfilePage />
                        <Route path=path!("/projects/:project_id") view=ProjectPage />
                        <Route
                            path=path!("/login")
                            view=|| view! {
                                <Guarded gate=Gate::Anon>
                                    <LoginPage />
                                </Guarded>
                            }
                        />
                    </Routes>
                </fieldset>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-400 mb-4">"404"</h1>
                <p class="text-xl text-gray-500 mb-8">"Page not found"</p>
                <a
                    href="/"
                    class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors"
                >
                    "Go Home"
                </a>
            </div>
        </div>
    }
}
