use folio::pages::PROFILE;
use folio::types::Technology;
use leptos::prelude::*;

/// Owner introduction with the technologies used across all projects.
#[component]
pub fn HeroSection(#[prop(into)] technologies: Signal<Vec<Technology>>) -> impl IntoView {
    view! {
        <section class="bg-gradient-to-br from-blue-50 to-indigo-100 py-20 px-4">
            <div class="max-w-5xl mx-auto text-center">
                <h1 class="text-5xl font-bold text-gray-800 mb-2">{PROFILE.name}</h1>
                <p class="text-2xl text-blue-600 font-semibold mb-6">{PROFILE.headline}</p>
                <p class="text-lg text-gray-600 max-w-3xl mx-auto mb-8">{PROFILE.bio}</p>

                <div class="flex justify-center gap-4 mb-10">
                    {PROFILE
                        .links
                        .iter()
                        .map(|link| view! {
                            <a
                                href=link.url
                                target="_blank"
                                class="px-5 py-2 bg-white text-gray-700 rounded-lg shadow hover:shadow-md transition-shadow font-medium"
                            >
                                {link.label}
                            </a>
                        })
                        .collect_view()}
                </div>

                <Show when=move || technologies.with(|t| !t.is_empty())>
                    <h2 class="text-xl font-semibold text-gray-700 mb-4">{PROFILE.technologies_heading}</h2>
                    <div class="flex flex-wrap justify-center gap-3 mb-10">
                        {move || {
                            technologies
                                .get()
                                .into_iter()
                                .map(|tech| view! {
                                    <a
                                        href=tech.official_site_url.clone()
                                        target="_blank"
                                        class="flex items-center gap-2 px-3 py-2 bg-white rounded-full shadow-sm text-sm"
                                    >
                                        <img src=tech.logo_url.clone() alt=tech.name.clone() class="w-5 h-5" />
                                        {tech.name.clone()}
                                    </a>
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>

                <a href="/about" class="text-blue-600 font-semibold hover:underline">
                    {PROFILE.learn_more}
                </a>
            </div>
        </section>
    }
}
