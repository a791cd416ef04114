use leptos::*;

use crate::sections::{FeaturesSection, Footer, Header, HeroSection, PricingSection};

#[component]
/// Full marketing page: header, hero, features, pricing, footer.
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-white">
            <Header />
            <main>
                <HeroSection />
                <FeaturesSection />
                <PricingSection />
            </main>
            <Footer />
        </div>
    }
}
