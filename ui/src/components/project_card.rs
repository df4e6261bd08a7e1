use folio::types::{Id, Project};
use leptos::prelude::*;

/// Grid card. Admin controls appear only when `on_edit`/`on_delete` are set.
#[component]
pub fn ProjectCard(
    project: Project,
    #[prop(optional)] on_edit: Option<Callback<Id>>,
    #[prop(optional)] on_delete: Option<Callback<Id>>,
) -> impl IntoView {
    let href = format!("/projects/{}", project.id);
    let edit_id = project.id.clone();
    let delete_id = project.id.clone();

    view! {
        <article class="bg-white rounded-xl shadow-md overflow-hidden hover:shadow-xl transition-shadow flex flex-col">
            <img src=project.image_url.clone() alt=project.name.clone() class="w-full h-48 object-cover" />
            <div class="p-5 flex flex-col gap-3 flex-1">
                <h3 class="text-xl font-bold text-gray-800">{project.name.clone()}</h3>
                <p class="text-gray-600 text-sm flex-1">{project.description_short.clone()}</p>

                <div class="flex flex-wrap gap-2">
                    {project
                        .tech_stack
                        .iter()
                        .map(|entry| view! {
                            <span class="px-2 py-1 bg-blue-50 text-blue-700 rounded text-xs font-medium">
                                {entry.technology.name.clone()}
                            </span>
                        })
                        .collect_view()}
                </div>

                <div class="flex flex-wrap gap-3 text-sm">
                    <a href=project.client_github_url.clone() target="_blank" class="text-blue-600 hover:underline">"Client Code"</a>
                    <a href=project.client_deploy_url.clone() target="_blank" class="text-blue-600 hover:underline">"Live Demo"</a>
                    {project.server_github_url.clone().filter(|u| !u.is_empty()).map(|url| view! {
                        <a href=url target="_blank" class="text-blue-600 hover:underline">"Server Code"</a>
                    })}
                    {project.server_deploy_url.clone().filter(|u| !u.is_empty()).map(|url| view! {
                        <a href=url target="_blank" class="text-blue-600 hover:underline">"API"</a>
                    })}
                </div>

                <div class="flex gap-2 pt-2">
                    <a href=href class="flex-1 text-center px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700">
                        "See More"
                    </a>
                    {on_edit.map(|cb| view! {
                        <button
                            on:click=move |_| cb.run(edit_id.clone())
                            class="px-4 py-2 bg-gray-200 text-gray-700 rounded-lg hover:bg-gray-300"
                        >
                            "Edit"
                        </button>
                    })}
                    {on_delete.map(|cb| view! {
                        <button
                            on:click=move |_| cb.run(delete_id.clone())
                            class="px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700"
                        >
                            "Delete"
                        </button>
                    })}
                </div>
            </div>
        </article>
    }
}
