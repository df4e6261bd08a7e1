//! Create/edit project dialog

use super::{ImageUpload, TechnologyFormModal, TechnologySelector};
use crate::state::{run_action, AppState};
use folio::forms::ProjectDraft;
use folio::pages::HomePage;
use leptos::prelude::*;

#[component]
fn TextField(
    page: RwSignal<HomePage>,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] required: bool,
    get: fn(&ProjectDraft) -> &String,
    set: fn(&mut ProjectDraft) -> &mut String,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-semibold text-gray-700 mb-1">
                {label}
                {(!required).then(|| view! { <span class="text-gray-400 font-normal">" (optional)"</span> })}
            </label>
            <input
                type=kind
                required=required
                class="w-full px-3 py-2 border rounded-lg focus:ring-2 focus:ring-blue-500"
                prop:value=move || page.with(|p| get(p.form().draft()).clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    page.update(|p| *set(p.form_mut().draft_mut()) = value);
                }
            />
        </div>
    }
}

/// Rendered while the home page's form is open.
#[component]
pub fn ProjectFormModal(page: RwSignal<HomePage>) -> impl IntoView {
    let state = expect_context::<AppState>();
    let busy = state.busy;

    let title = move || page.with(|p| p.form().mode().title());
    let submit_label = move || page.with(|p| p.form().mode().submit_label());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        run_action(busy, page, |mut p| async move {
            let _ = p.submit_form().await;
            let alert = p.take_alert();
            (p, alert)
        });
    };

    let open_technology_form = {
        let api = state.api.clone();
        Callback::new(move |()| {
            let api = api.clone();
            run_action(busy, page, move |mut p| async move {
                p.form_mut().open_technology_form(api.as_ref()).await;
                (p, None)
            });
        })
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50 overflow-y-auto">
            <form
                on:submit=on_submit
                class="bg-white rounded-xl shadow-xl w-full max-w-2xl my-8 p-6 space-y-4"
            >
                <h2 class="text-2xl font-bold text-gray-800">{title}</h2>

                <TextField page=page label="Project Name *" required=true
                    get=|d| &d.name set=|d| &mut d.name />
                <div>
                    <label class="block text-sm font-semibold text-gray-700 mb-1">"Short Description *"</label>
                    <textarea
                        required=true
                        rows="3"
                        class="w-full px-3 py-2 border rounded-lg focus:ring-2 focus:ring-blue-500"
                        prop:value=move || page.with(|p| p.form().draft().description_short.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            page.update(|p| p.form_mut().draft_mut().description_short = value);
                        }
                    ></textarea>
                </div>
                <div class="grid md:grid-cols-2 gap-4">
                    <TextField page=page label="Client GitHub URL *" kind="url" required=true
                        get=|d| &d.client_github_url set=|d| &mut d.client_github_url />
                    <TextField page=page label="Client Deploy URL *" kind="url" required=true
                        get=|d| &d.client_deploy_url set=|d| &mut d.client_deploy_url />
                    <TextField page=page label="Server GitHub URL" kind="url"
                        get=|d| &d.server_github_url set=|d| &mut d.server_github_url />
                    <TextField page=page label="Server Deploy URL" kind="url"
                        get=|d| &d.server_deploy_url set=|d| &mut d.server_deploy_url />
                </div>

                <ImageUpload
                    image_url=Signal::derive(move || page.with(|p| p.form().draft().image_url.clone()))
                    on_upload=Callback::new(move |url: String| page.update(|p| p.form_mut().set_image(url)))
                />

                <TechnologySelector
                    catalog=Signal::derive(move || page.with(|p| p.form().catalog().to_vec()))
                    selected=Signal::derive(move || page.with(|p| p.form().draft().technology_ids.clone()))
                    on_change=Callback::new(move |ids| page.update(|p| p.form_mut().set_technologies(ids)))
                    on_add_new=open_technology_form
                />

                <div class="flex justify-end gap-3 pt-4 border-t">
                    <button
                        type="button"
                        on:click=move |_| page.update(|p| p.close_form())
                        class="px-4 py-2 bg-gray-200 text-gray-700 rounded-lg hover:bg-gray-300"
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="px-6 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700">
                        {submit_label}
                    </button>
                </div>
            </form>

            <Show when=move || page.with(|p| p.form().technology_form().is_some())>
                <TechnologyFormModal page=page />
            </Show>
        </div>
    }
}
