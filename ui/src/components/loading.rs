//! Loading indicators

use leptos::prelude::*;

/// Spinner loading indicator
#[component]
pub fn LoadingSpinner(
    #[prop(default = "w-5 h-5")] size: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=format!("{} animate-spin text-blue-600", size)
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
        >
            <circle
                class="opacity-25"
                cx="12"
                cy="12"
                r="10"
                stroke="currentColor"
                stroke-width="4"
            ></circle>
            <path
                class="opacity-75"
                fill="currentColor"
                d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"
            ></path>
        </svg>
    }
}

/// Full-page loading state
#[component]
pub fn LoadingOverlay(
    #[prop(default = "Loading...")] message: &'static str,
) -> impl IntoView {
    view! {
        <div class="min-h-[60vh] flex items-center justify-center">
            <div class="flex flex-col items-center gap-4">
                <LoadingSpinner size="w-12 h-12" />
                <p class="text-gray-600 font-medium">{message}</p>
            </div>
        </div>
    }
}

/// Page-level error banner
#[component]
pub fn ErrorBanner(message: String) -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto my-12 p-4 bg-red-50 border border-red-200 rounded-lg text-red-700 text-center">
            {message}
        </div>
    }
}
