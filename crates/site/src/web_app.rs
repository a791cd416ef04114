use landing::LandingPage;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::design_system::DesignSystemPage;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Tois | Pediatric Sensory Therapy Platform" />
        <Meta
            name="description"
            content="Home programs for therapists and progress tracking for caregivers."
        />

        <Router>
            <Routes>
                <Route path="" view=LandingPage />
                <Route path="/design-system" view=DesignSystemPage />
            </Routes>
        </Router>
    }
}
