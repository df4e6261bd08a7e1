//! "Add technology" dialog shown over the project form

use crate::state::{run_action, AppState};
use folio::forms::TechnologyForm;
use folio::pages::{alert, HomePage};
use folio::types::AppError;
use leptos::prelude::*;

#[component]
pub fn TechnologyFormModal(page: RwSignal<HomePage>) -> impl IntoView {
    let state = expect_context::<AppState>();
    let busy = state.busy;

    let edit = move |f: fn(&mut TechnologyForm, String), value: String| {
        page.update(|p| {
            if let Some(form) = p.form_mut().technology_form_mut() {
                f(form, value);
            }
        });
    };
    let field = move |f: fn(&TechnologyForm) -> String| {
        page.with(|p| p.form().technology_form().map(f).unwrap_or_default())
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let api = state.api.clone();
        run_action(busy, page, move |mut p| async move {
            let message = match p.form_mut().submit_technology(api.as_ref()).await {
                Ok(()) => None,
                Err(e @ AppError::InvalidInput(_)) => Some(e.to_string()),
                Err(_) => Some(alert("create technology")),
            };
            (p, message)
        });
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-[60]">
            <form on:submit=on_submit class="bg-white rounded-xl shadow-xl w-full max-w-md p-6 space-y-4">
                <h3 class="text-xl font-bold text-gray-800">"Add New Technology"</h3>

                <div>
                    <label class="block text-sm font-semibold text-gray-700 mb-1">"Name *"</label>
                    <input
                        type="text"
                        required=true
                        class="w-full px-3 py-2 border rounded-lg"
                        prop:value=move || field(|f| f.draft().name.clone())
                        on:input=move |ev| edit(|f, v| f.set_name(v), event_target_value(&ev))
                    />
                </div>

                <div>
                    <label class="block text-sm font-semibold text-gray-700 mb-1">"Logo URL *"</label>
                    <input
                        type="url"
                        required=true
                        class="w-full px-3 py-2 border rounded-lg"
                        prop:value=move || field(|f| f.draft().logo_url.clone())
                        on:input=move |ev| edit(|f, v| f.set_logo_url(v), event_target_value(&ev))
                    />
                    {move || {
                        let (show, broken, url) = page.with(|p| {
                            p.form()
                                .technology_form()
                                .map(|f| (f.show_preview(), f.logo_broken(), f.draft().logo_url.clone()))
                                .unwrap_or_default()
                        });
                        show.then(|| {
                            if broken {
                                view! { <p class="text-xs text-red-500 mt-1">"Logo could not be loaded"</p> }.into_any()
                            } else {
                                view! {
                                    <img
                                        src=url
                                        alt="Logo preview"
                                        class="w-10 h-10 mt-2 object-contain"
                                        on:error=move |_| page.update(|p| {
                                            if let Some(f) = p.form_mut().technology_form_mut() {
                                                f.logo_failed();
                                            }
                                        })
                                        on:load=move |_| page.update(|p| {
                                            if let Some(f) = p.form_mut().technology_form_mut() {
                                                f.logo_loaded();
                                            }
                                        })
                                    />
                                }
                                .into_any()
                            }
                        })
                    }}
                </div>

                <div>
                    <label class="block text-sm font-semibold text-gray-700 mb-1">"Official Site URL *"</label>
                    <input
                        type="url"
                        required=true
                        class="w-full px-3 py-2 border rounded-lg"
                        prop:value=move || field(|f| f.draft().official_site_url.clone())
                        on:input=move |ev| edit(|f, v| f.set_official_site_url(v), event_target_value(&ev))
                    />
                </div>

                <div>
                    <label class="block text-sm font-semibold text-gray-700 mb-1">"Category *"</label>
                    <select
                        class="w-full px-3 py-2 border rounded-lg"
                        on:change=move |ev| edit(|f, v| f.set_category(&v), event_target_value(&ev))
                        prop:value=move || {
                            field(|f| f.draft().category_id.as_ref().map(|id| id.to_string()).unwrap_or_default())
                        }
                    >
                        {move || {
                            page.with(|p| {
                                p.form()
                                    .technology_form()
                                    .map(|f| f.categories().to_vec())
                                    .unwrap_or_default()
                            })
                            .into_iter()
                            .map(|c| view! { <option value=c.id.to_string()>{c.name}</option> })
                            .collect_view()
                        }}
                    </select>
                </div>

                <div class="flex justify-end gap-3 pt-2">
                    <button
                        type="button"
                        on:click=move |_| page.update(|p| p.form_mut().cancel_add_technology())
                        class="px-4 py-2 bg-gray-200 text-gray-700 rounded-lg hover:bg-gray-300"
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700">
                        "Add Technology"
                    </button>
                </div>
            </form>
        </div>
    }
}
