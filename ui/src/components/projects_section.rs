use super::ProjectCard;
use crate::state::{confirm, run_action, AppState};
use folio::pages::HomePage;
use folio::types::Id;
use leptos::prelude::*;

/// Project grid with the admin "Add Project" entry point.
#[component]
pub fn ProjectsSection(page: RwSignal<HomePage>) -> impl IntoView {
    let state = expect_context::<AppState>();
    let busy = state.busy;
    let logged_in = Signal::derive(move || state.auth.with(|a| a.is_logged_in()));
    // Typing in the form must not re-render the grid
    let projects = Memo::new(move |_| page.with(|p| p.projects().to_vec()));

    let open_create = move |_| {
        run_action(busy, page, |mut p| async move {
            p.open_create().await;
            (p, None)
        });
    };
    let on_edit = Callback::new(move |id: Id| {
        run_action(busy, page, move |mut p| async move {
            let alert = p.open_edit(&id).await.err().map(|e| e.to_string());
            (p, alert)
        });
    });
    let on_delete = Callback::new(move |id: Id| {
        run_action(busy, page, move |mut p| async move {
            let _ = p.delete_project(&id, confirm).await;
            let alert = p.take_alert();
            (p, alert)
        });
    });

    view! {
        <section class="py-16 px-4">
            <div class="max-w-7xl mx-auto">
                <div class="flex items-center justify-between mb-8">
                    <h2 class="text-3xl font-bold text-gray-800">"My Projects"</h2>
                    <Show when=move || logged_in.get()>
                        <button
                            on:click=open_create
                            class="px-4 py-2 bg-green-600 text-white font-medium rounded-lg hover:bg-green-700"
                        >
                            "+ Add Project"
                        </button>
                    </Show>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {move || {
                        let admin = logged_in.get();
                        projects
                            .get()
                            .into_iter()
                            .map(|project| {
                                if admin {
                                    view! { <ProjectCard project=project on_edit=on_edit on_delete=on_delete /> }
                                        .into_any()
                                } else {
                                    view! { <ProjectCard project=project /> }.into_any()
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}
