//! Admin login page

use crate::state::AppState;
use folio::types::AppError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

/// Login page
#[component]
pub fn LoginPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    // Form state
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let is_loading = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();
        let state = state.clone();
        let navigate = navigate.clone();

        spawn_local(async move {
            is_loading.set(true);
            error.set(None);

            let mut auth = state.auth.get_untracked();
            let result = auth.login(state.api.as_ref(), &email_val, &password_val).await;
            is_loading.set(false);

            match result {
                // The guard around this page redirects once auth changes
                Ok(()) => {
                    state.auth.set(auth);
                    navigate("/", Default::default());
                }
                Err(AppError::Auth(message)) | Err(AppError::InvalidInput(message)) => {
                    error.set(Some(message))
                }
                Err(e) => {
                    tracing::error!("Login failed: {}", e);
                    error.set(Some("Login failed. Please try again.".to_string()));
                }
            }
        });
    };

    view! {
        <main class="min-h-[70vh] flex items-center justify-center px-4">
            <div class="w-full max-w-md bg-white rounded-xl shadow-lg p-8">
                <h1 class="text-3xl font-bold text-gray-800 mb-2 text-center">"Welcome Back"</h1>
                <p class="text-gray-500 mb-6 text-center">"Sign in to manage the portfolio"</p>

                // Error message
                <Show when=move || error.get().is_some()>
                    <div class="mb-6 p-4 bg-red-50 border border-red-200 rounded-lg text-red-700 text-sm">
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm font-semibold text-gray-700 mb-1">"Email"</label>
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            placeholder="you@example.com"
                            required=true
                            class="w-full px-3 py-2 border rounded-lg focus:ring-2 focus:ring-blue-500"
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-semibold text-gray-700 mb-1">"Password"</label>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            required=true
                            class="w-full px-3 py-2 border rounded-lg focus:ring-2 focus:ring-blue-500"
                        />
                    </div>
                    <button
                        type="submit"
                        disabled=move || is_loading.get()
                        class="w-full py-3 bg-blue-600 text-white font-semibold rounded-lg hover:bg-blue-700 disabled:opacity-50"
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </main>
    }
}
