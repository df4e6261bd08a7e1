//! One manual step, with the inline editor for admins

use super::ImageUpload;
use crate::state::{notify, AppState};
use folio::forms::StepEditor;
use folio::pages::ProjectPage;
use folio::types::Step;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn StepItem(step: Step, page: RwSignal<ProjectPage>, admin: bool) -> impl IntoView {
    let busy = expect_context::<AppState>().busy;
    let editor = RwSignal::new(StepEditor::new(step));
    // Only the mode switch rebuilds the body; keystrokes update in place
    let editing = Memo::new(move |_| editor.with(|e| e.is_editing()));

    let save = move |_| {
        let mut p = page.get_untracked();
        let mut ed = editor.get_untracked();
        busy.start();
        spawn_local(async move {
            let result = p.update_step(&mut ed).await;
            let alert = p.take_alert().or_else(|| result.err().map(|e| e.to_string()));
            editor.set(ed);
            page.set(p);
            busy.finish();
            if let Some(message) = alert {
                notify(&message);
            }
        });
    };

    view! {
        <li class="bg-white rounded-xl shadow p-5 flex gap-5">
            <span class="shrink-0 w-10 h-10 rounded-full bg-blue-600 text-white flex items-center justify-center font-bold">
                {move || editor.with(|e| e.step().step_number)}
            </span>
            {move || {
                if editing.get() {
                    view! {
                        <div class="flex-1 space-y-3">
                            <textarea
                                rows="3"
                                class="w-full px-3 py-2 border rounded-lg"
                                prop:value=move || editor.with(|e| e.draft().description.clone())
                                on:input=move |ev| editor.update(|e| e.set_description(event_target_value(&ev)))
                            ></textarea>
                            <ImageUpload
                                label="Step Image *"
                                image_url=Signal::derive(move || editor.with(|e| e.draft().image_url.clone()))
                                on_upload=Callback::new(move |url: String| editor.update(|e| e.set_image(url)))
                            />
                            <div class="flex gap-2">
                                <button
                                    on:click=save
                                    disabled=move || !editor.with(|e| e.draft().can_save_edit())
                                    class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 disabled:opacity-50"
                                >
                                    "Save"
                                </button>
                                <button
                                    on:click=move |_| editor.update(|e| e.cancel())
                                    class="px-4 py-2 bg-gray-200 text-gray-700 rounded-lg hover:bg-gray-300"
                                >
                                    "Cancel"
                                </button>
                            </div>
                        </div>
                    }
                    .into_any()
                } else {
                    let (description, image) = editor.with_untracked(|e| {
                        (e.step().description.clone(), e.step().image_url.clone())
                    });
                    view! {
                        <div class="flex-1 space-y-3">
                            <p class="text-gray-700 whitespace-pre-line">{description}</p>
                            {image.filter(|url| !url.is_empty()).map(|url| view! {
                                <img src=url alt="Step screenshot" class="rounded-lg border max-h-96" />
                            })}
                            {admin.then(|| view! {
                                <button
                                    on:click=move |_| editor.update(|e| e.begin())
                                    class="text-sm text-blue-600 hover:underline"
                                >
                                    "Edit"
                                </button>
                            })}
                        </div>
                    }
                    .into_any()
                }
            }}
        </li>
    }
}
