//! Project detail page: description, manuals panel and steps

use crate::components::{ErrorBanner, ImageUpload, LoadingOverlay, StepItem};
use crate::state::{confirm, run_action, AppState};
use folio::forms::ManualDraft;
use folio::pages::ProjectPage as Project;
use folio::types::{Id, Manual, Step};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Title, description and version inputs shared by the create and edit forms.
#[component]
fn ManualFields(
    #[prop(into)] draft: Signal<ManualDraft>,
    on_change: Callback<ManualDraft>,
) -> impl IntoView {
    let edit = move |apply: fn(&mut ManualDraft, String), value: String| {
        let mut next = draft.get_untracked();
        apply(&mut next, value);
        on_change.run(next);
    };

    view! {
        <div class="space-y-2">
            <input
                type="text"
                placeholder="Title *"
                class="w-full px-3 py-2 border rounded-lg"
                prop:value=move || draft.with(|d| d.title.clone())
                on:input=move |ev| edit(|d, v| d.title = v, event_target_value(&ev))
            />
            <textarea
                rows="2"
                placeholder="Description"
                class="w-full px-3 py-2 border rounded-lg"
                prop:value=move || draft.with(|d| d.description.clone())
                on:input=move |ev| edit(|d, v| d.description = v, event_target_value(&ev))
            ></textarea>
            <input
                type="text"
                placeholder="Version"
                class="w-full px-3 py-2 border rounded-lg"
                prop:value=move || draft.with(|d| d.version.clone())
                on:input=move |ev| edit(|d, v| d.version = v, event_target_value(&ev))
            />
        </div>
    }
}

/// One manual in the admin panel, either read-only or in inline edit.
#[component]
fn ManualRow(manual: Manual, page: RwSignal<Project>, editing: Memo<Option<Id>>) -> impl IntoView {
    let busy = expect_context::<AppState>().busy;
    let id = manual.id.clone();
    let is_editing = {
        let id = id.clone();
        Memo::new(move |_| editing.with(|e| e.as_ref() == Some(&id)))
    };

    let save = move |_| {
        run_action(busy, page, |mut p| async move {
            let result = p.save_manual_edit().await;
            let alert = p.take_alert().or_else(|| result.err().map(|e| e.to_string()));
            (p, alert)
        });
    };

    let begin = {
        let id = id.clone();
        move |_| {
            let id = id.clone();
            page.update(|p| {
                if let Err(e) = p.begin_manual_edit(&id) {
                    tracing::warn!("{}", e);
                }
            });
        }
    };
    let delete = {
        let id = id.clone();
        move |_| {
            let id = id.clone();
            run_action(busy, page, move |mut p| async move {
                let _ = p.delete_manual(&id, confirm).await;
                let alert = p.take_alert();
                (p, alert)
            });
        }
    };
    let activate = {
        let id = id.clone();
        move |_| {
            let id = id.clone();
            run_action(busy, page, move |mut p| async move {
                let _ = p.set_active(&id).await;
                let alert = p.take_alert();
                (p, alert)
            });
        }
    };

    view! {
        <li class="border rounded-lg p-4">
            {move || {
                if is_editing.get() {
                    view! {
                        <ManualFields
                            draft=Signal::derive(move || {
                                page.with(|p| p.manual_edit().map(|e| e.draft.clone()).unwrap_or_default())
                            })
                            on_change=Callback::new(move |draft| page.update(|p| {
                                if let Some(edit) = p.manual_edit_mut() {
                                    edit.draft = draft;
                                }
                            }))
                        />
                        <div class="flex gap-2 mt-3">
                            <button on:click=save class="px-3 py-1 bg-blue-600 text-white rounded hover:bg-blue-700">
                                "Save"
                            </button>
                            <button
                                on:click=move |_| page.update(|p| p.cancel_manual_edit())
                                class="px-3 py-1 bg-gray-200 text-gray-700 rounded hover:bg-gray-300"
                            >
                                "Cancel"
                            </button>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="flex items-start justify-between gap-4">
                            <div>
                                <h4 class="font-semibold text-gray-800">
                                    {manual.title.clone()}
                                    {(!manual.version.is_empty()).then(|| view! {
                                        <span class="ml-2 text-xs text-gray-500">"v"{manual.version.clone()}</span>
                                    })}
                                </h4>
                                <p class="text-sm text-gray-600">{manual.description.clone()}</p>
                            </div>
                            <div class="flex items-center gap-3 shrink-0">
                                <label class="flex items-center gap-1 text-sm text-gray-700">
                                    <input
                                        type="radio"
                                        name="active-manual"
                                        prop:checked=manual.is_active
                                        on:change=activate.clone()
                                    />
                                    "Active"
                                </label>
                                <button on:click=begin.clone() class="text-sm text-blue-600 hover:underline">"Edit"</button>
                                <button on:click=delete.clone() class="text-sm text-red-600 hover:underline">"Delete"</button>
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }}
        </li>
    }
}

/// Admin-only manual list and "New Manual" form.
#[component]
fn ManualsPanel(page: RwSignal<Project>) -> impl IntoView {
    let busy = expect_context::<AppState>().busy;
    let manuals = Memo::new(move |_| page.with(|p| p.manuals().to_vec()));
    let editing = Memo::new(move |_| page.with(|p| p.manual_edit().map(|e| e.manual_id.clone())));
    let creating = Memo::new(move |_| page.with(|p| p.new_manual().is_some()));

    let create = move |_| {
        run_action(busy, page, |mut p| async move {
            let result = p.create_manual().await;
            let alert = p.take_alert().or_else(|| result.err().map(|e| e.to_string()));
            (p, alert)
        });
    };

    view! {
        <section class="bg-white rounded-xl shadow p-6 mb-10">
            <div class="flex items-center justify-between mb-4">
                <h3 class="text-2xl font-bold text-gray-800">"Manuals"</h3>
                <button
                    on:click=move |_| page.update(|p| p.open_new_manual())
                    class="px-4 py-2 bg-green-600 text-white rounded-lg hover:bg-green-700"
                >
                    "New Manual"
                </button>
            </div>

            <Show when=move || creating.get()>
                <div class="border-2 border-dashed rounded-lg p-4 mb-4">
                    <ManualFields
                        draft=Signal::derive(move || page.with(|p| p.new_manual().cloned().unwrap_or_default()))
                        on_change=Callback::new(move |draft| page.update(|p| {
                            if let Some(d) = p.new_manual_mut() {
                                *d = draft;
                            }
                        }))
                    />
                    <div class="flex gap-2 mt-3">
                        <button on:click=create class="px-3 py-1 bg-blue-600 text-white rounded hover:bg-blue-700">
                            "Create"
                        </button>
                        <button
                            on:click=move |_| page.update(|p| p.cancel_new_manual())
                            class="px-3 py-1 bg-gray-200 text-gray-700 rounded hover:bg-gray-300"
                        >
                            "Cancel"
                        </button>
                    </div>
                </div>
            </Show>

            <ul class="space-y-3">
                {move || {
                    let list = manuals.get();
                    if list.is_empty() {
                        view! { <p class="text-gray-500">"No manuals yet."</p> }.into_any()
                    } else {
                        list.into_iter()
                            .map(|manual| view! { <ManualRow manual=manual page=page editing=editing /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </ul>
        </section>
    }
}

/// Form for appending a step to the active manual.
#[component]
fn NewStepForm(page: RwSignal<Project>) -> impl IntoView {
    let busy = expect_context::<AppState>().busy;
    let draft = Signal::derive(move || page.with(|p| p.new_step().cloned().unwrap_or_default()));

    let create = move |_| {
        run_action(busy, page, |mut p| async move {
            let result = p.create_step().await;
            let alert = p.take_alert().or_else(|| result.err().map(|e| e.to_string()));
            (p, alert)
        });
    };

    view! {
        <div class="bg-white rounded-xl shadow p-5 space-y-3">
            <textarea
                rows="3"
                placeholder="Step description *"
                class="w-full px-3 py-2 border rounded-lg"
                prop:value=move || draft.with(|d| d.description.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    page.update(|p| {
                        if let Some(d) = p.new_step_mut() {
                            d.description = value;
                        }
                    });
                }
            ></textarea>
            <ImageUpload
                label="Step Image *"
                image_url=Signal::derive(move || draft.with(|d| d.image_url.clone()))
                on_upload=Callback::new(move |url: String| page.update(|p| p.set_new_step_image(url)))
            />
            <div class="flex gap-2">
                <button
                    on:click=create
                    disabled=move || !draft.with(|d| d.can_submit())
                    class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 disabled:opacity-50"
                >
                    "Save Step"
                </button>
                <button
                    on:click=move |_| page.update(|p| p.cancel_new_step())
                    class="px-4 py-2 bg-gray-200 text-gray-700 rounded-lg hover:bg-gray-300"
                >
                    "Cancel"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn ProjectPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let busy = state.busy;
    let params = use_params_map();
    let project_id = Memo::new(move |_| {
        params.with(|p| Id::parse(&p.get("project_id").unwrap_or_default()))
    });
    let logged_in = Memo::new(move |_| state.auth.with(|a| a.is_logged_in()));

    let page = RwSignal::new(Project::new(
        state.api.clone(),
        project_id.get_untracked(),
        logged_in.get_untracked(),
    ));

    // A new route id or a login change starts over with a fresh fetch
    let api = state.api.clone();
    Effect::new(move |_| {
        page.set(Project::new(api.clone(), project_id.get(), logged_in.get()));
        run_action(busy, page, |mut p| async move {
            p.load().await;
            (p, None)
        });
    });

    let status = Memo::new(move |_| {
        page.with(|p| (p.state().is_loading(), p.state().error().map(String::from)))
    });
    let project = Memo::new(move |_| page.with(|p| p.project().cloned()));
    let steps = Memo::new(move |_| page.with(|p| p.steps().into_iter().cloned().collect::<Vec<Step>>()));
    let heading = Memo::new(move |_| page.with(|p| p.steps_heading()));
    let show_steps = Memo::new(move |_| page.with(|p| p.show_steps_section()));
    let adding_step = Memo::new(move |_| page.with(|p| p.new_step().is_some()));

    let details = move || {
        project.get().map(|project| view! {
            <div class="grid md:grid-cols-2 gap-8 mb-10">
                <img src=project.image_url.clone() alt=project.name.clone() class="w-full rounded-xl shadow-lg" />
                <div>
                    <h1 class="text-4xl font-bold text-gray-800 mb-4">{project.name.clone()}</h1>
                    <p class="text-gray-600 mb-6">{project.description_short.clone()}</p>
                    <div class="flex flex-wrap gap-2 mb-6">
                        {project
                            .tech_stack
                            .iter()
                            .map(|entry| view! {
                                <a
                                    href=entry.technology.official_site_url.clone()
                                    target="_blank"
                                    class="flex items-center gap-2 px-3 py-1 bg-blue-50 text-blue-700 rounded-full text-sm"
                                >
                                    <img src=entry.technology.logo_url.clone() alt="" class="w-4 h-4" />
                                    {entry.technology.name.clone()}
                                </a>
                            })
                            .collect_view()}
                    </div>
                    <div class="flex flex-wrap gap-4">
                        <a href=project.client_github_url.clone() target="_blank" class="text-blue-600 hover:underline">"Client Code"</a>
                        <a href=project.client_deploy_url.clone() target="_blank" class="text-blue-600 hover:underline">"Live Demo"</a>
                        {project.server_github_url.clone().filter(|u| !u.is_empty()).map(|url| view! {
                            <a href=url target="_blank" class="text-blue-600 hover:underline">"Server Code"</a>
                        })}
                        {project.server_deploy_url.clone().filter(|u| !u.is_empty()).map(|url| view! {
                            <a href=url target="_blank" class="text-blue-600 hover:underline">"API"</a>
                        })}
                    </div>
                </div>
            </div>
        })
    };

    view! {
        <div class="max-w-6xl mx-auto px-4 py-12">
            {move || match status.get() {
                (true, _) => view! { <LoadingOverlay message="Loading project..." /> }.into_any(),
                (false, Some(error)) => view! { <ErrorBanner message=error /> }.into_any(),
                (false, None) if project.with(|p| p.is_none()) => view! {
                    <p class="text-center text-gray-500 text-xl py-20">"Project not found"</p>
                }
                .into_any(),
                (false, None) => {
                    let admin = logged_in.get_untracked();
                    view! {
                        {details}

                        {admin.then(|| view! { <ManualsPanel page=page /> })}

                        <Show when=move || show_steps.get()>
                            <section>
                                <h2 class="text-3xl font-bold text-gray-800 mb-6">{move || heading.get()}</h2>
                                <ol class="space-y-4 mb-6">
                                    {move || {
                                        steps
                                            .get()
                                            .into_iter()
                                            .map(|step| view! { <StepItem step=step page=page admin=admin /> })
                                            .collect_view()
                                    }}
                                </ol>
                                {admin.then(|| view! {
                                    <Show
                                        when=move || adding_step.get()
                                        fallback=move || view! {
                                            <button
                                                on:click=move |_| page.update(|p| p.open_new_step())
                                                class="px-4 py-2 bg-green-600 text-white rounded-lg hover:bg-green-700"
                                            >
                                                "Add New Step"
                                            </button>
                                        }
                                    >
                                        <NewStepForm page=page />
                                    </Show>
                                })}
                            </section>
                        </Show>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
