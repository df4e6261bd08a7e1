//! Two-pane technology picker

use folio::selector::TechnologySelector as Picker;
use folio::types::{Id, Technology};
use leptos::prelude::*;

#[component]
fn TechBadge(tech: Technology, #[prop(into)] class: String) -> impl IntoView {
    view! {
        <span class=format!("inline-flex items-center gap-2 px-3 py-1 rounded-full text-sm {}", class)>
            <img src=tech.logo_url.clone() alt=tech.name.clone() class="w-4 h-4" />
            {tech.name}
        </span>
    }
}

/// Controlled picker: `selected` is owned by the caller and every click
/// reports the complete new selection through `on_change`.
#[component]
pub fn TechnologySelector(
    #[prop(into)] catalog: Signal<Vec<Technology>>,
    #[prop(into)] selected: Signal<Vec<Id>>,
    on_change: Callback<Vec<Id>>,
    on_add_new: Callback<()>,
) -> impl IntoView {
    let panes = move || {
        let catalog = catalog.get();
        let selected = selected.get();
        let picker = Picker::new(&catalog, &selected);
        let chosen: Vec<Technology> = picker.selected().into_iter().cloned().collect();
        let available: Vec<Technology> = picker.available().into_iter().cloned().collect();
        (chosen, available, picker.selected_hint(), picker.available_hint())
    };

    let click = move |id: Id, add: bool| {
        let catalog = catalog.get_untracked();
        let selected = selected.get_untracked();
        let picker = Picker::new(&catalog, &selected);
        if add {
            picker.add(&id, |next| on_change.run(next));
        } else {
            picker.remove(&id, |next| on_change.run(next));
        }
    };

    view! {
        <div class="space-y-3">
            <div class="flex items-center justify-between">
                <label class="block text-sm font-semibold text-gray-700">"Technologies *"</label>
                <button
                    type="button"
                    on:click=move |_| {
                        let catalog = catalog.get_untracked();
                        let selected = selected.get_untracked();
                        Picker::new(&catalog, &selected).request_new(|| on_add_new.run(()));
                    }
                    class="text-sm text-blue-600 hover:text-blue-800 font-medium"
                >
                    "+ Add New Technology"
                </button>
            </div>

            {move || {
                let (chosen, available, selected_hint, available_hint) = panes();
                view! {
                    <div class="grid grid-cols-2 gap-4">
                        <div class="p-3 border rounded-lg bg-blue-50 min-h-24">
                            <p class="text-xs font-semibold text-gray-500 mb-2">
                                {format!("Selected ({})", chosen.len())}
                            </p>
                            {selected_hint.map(|hint| view! { <p class="text-sm text-gray-400">{hint}</p> })}
                            <div class="flex flex-wrap gap-2">
                                {chosen
                                    .into_iter()
                                    .map(|tech| {
                                        let id = tech.id.clone();
                                        view! {
                                            <button type="button" on:click=move |_| click(id.clone(), false)>
                                                <TechBadge tech=tech class="bg-blue-600 text-white" />
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <div class="p-3 border rounded-lg bg-gray-50 min-h-24">
                            <p class="text-xs font-semibold text-gray-500 mb-2">
                                {format!("Available ({})", available.len())}
                            </p>
                            {available_hint.map(|hint| view! { <p class="text-sm text-gray-400">{hint}</p> })}
                            <div class="flex flex-wrap gap-2">
                                {available
                                    .into_iter()
                                    .map(|tech| {
                                        let id = tech.id.clone();
                                        view! {
                                            <button type="button" on:click=move |_| click(id.clone(), true)>
                                                <TechBadge tech=tech class="bg-white text-gray-700 border" />
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                }
            }}
        </div>
    }
}
