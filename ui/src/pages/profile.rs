//! "About Me"

use folio::pages::PROFILE;
use leptos::prelude::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <div class="max-w-4xl mx-auto px-4 py-16">
            <h1 class="text-4xl font-bold text-gray-800 mb-10 text-center">{PROFILE.about_title}</h1>

            <div class="bg-white rounded-xl shadow-lg p-8 space-y-8">
                {PROFILE
                    .about
                    .iter()
                    .map(|section| view! {
                        <section>
                            <h2 class="text-2xl font-semibold text-blue-600 mb-3">{section.heading}</h2>
                            {section
                                .paragraphs
                                .iter()
                                .map(|text| view! { <p class="text-gray-700 leading-relaxed mb-3">{*text}</p> })
                                .collect_view()}
                            {(!section.items.is_empty()).then(|| view! {
                                <ul class="list-disc list-inside space-y-1 text-gray-700">
                                    {section.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                                </ul>
                            })}
                        </section>
                    })
                    .collect_view()}
            </div>

            <div class="text-center mt-10">
                <p class="text-lg text-gray-600 mb-4">{PROFILE.call_to_action}</p>
                <a href="/" class="px-6 py-3 bg-blue-600 text-white rounded-lg font-semibold hover:bg-blue-700">
                    {PROFILE.call_to_action_link}
                </a>
            </div>
        </div>
    }
}
