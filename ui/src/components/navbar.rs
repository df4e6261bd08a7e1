//! Navigation bar

use crate::state::AppState;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn Navbar() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    view! {
        <nav class="bg-white shadow-md px-6 py-4">
            <div class="max-w-7xl mx-auto flex items-center justify-between">
                <div class="flex gap-4 items-center">
                    <a href="/" class="px-4 py-2 text-gray-700 font-medium hover:text-blue-600 transition-colors">
                        "Home"
                    </a>
                    <a href="/about" class="px-4 py-2 text-gray-700 font-medium hover:text-blue-600 transition-colors">
                        "About"
                    </a>
                </div>

                <div class="flex gap-4 items-center">
                    {move || {
                        let user = state.auth.with(|a| a.user().map(|u| u.name.clone()));
                        match user {
                            Some(name) => {
                                let state = state.clone();
                                let navigate = navigate.clone();
                                view! {
                                    <span class="text-gray-700">"Welcome, " {name}</span>
                                    <button
                                        on:click=move |_| {
                                            state.logout();
                                            navigate("/", Default::default());
                                        }
                                        class="px-4 py-2 bg-gray-200 text-gray-700 font-medium rounded hover:bg-gray-300 transition-colors"
                                    >
                                        "Logout"
                                    </button>
                                }
                                .into_any()
                            }
                            None => view! {
                                <a
                                    href="/login"
                                    class="px-4 py-2 bg-blue-600 text-white font-medium rounded hover:bg-blue-700 transition-colors"
                                >
                                    "Login"
                                </a>
                            }
                            .into_any(),
                        }
                    }}
                </div>
            </div>
        </nav>
    }
}
