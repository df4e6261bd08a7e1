//! Landing page

use crate::components::{ErrorBanner, HeroSection, LoadingOverlay, ProjectFormModal, ProjectsSection};
use crate::state::{run_action, AppState};
use folio::pages::HomePage as Home;
use leptos::prelude::*;

/// Hero, project grid and (for admins) the project dialog.
#[component]
pub fn HomePage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let busy = state.busy;
    let page = RwSignal::new(Home::new(state.api.clone()));

    run_action(busy, page, |mut p| async move {
        p.load().await;
        (p, None)
    });

    let status = Memo::new(move |_| {
        page.with(|p| (p.state().is_loading(), p.state().error().map(String::from)))
    });
    let technologies = Memo::new(move |_| page.with(|p| p.technologies().to_vec()));
    let form_open = Memo::new(move |_| page.with(|p| p.form().is_open()));

    view! {
        {move || match status.get() {
            (true, _) => view! { <LoadingOverlay message="Loading projects..." /> }.into_any(),
            (false, Some(error)) => view! { <ErrorBanner message=error /> }.into_any(),
            (false, None) => view! {
                <HeroSection technologies=technologies />
                <ProjectsSection page=page />
            }
            .into_any(),
        }}

        <Show when=move || form_open.get()>
            <ProjectFormModal page=page />
        </Show>
    }
}
