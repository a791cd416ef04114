use class_merge::{responsive, Breakpoint};

use super::*;

const CTA_LIFT: &str = "transform hover:scale-105";

#[component]
/// Headline banner with the trial/demo calls to action and a pricing shortcut.
pub fn HeroSection() -> impl IntoView {
    let hero = &landing_content().hero;
    let headline_class = format!(
        "{} mb-6",
        responsive(&[(Breakpoint::Base, "text-4xl"), (Breakpoint::Md, "text-6xl")])
    );

    view! {
        <section class="py-20 brand-gradient" data-testid="hero-section">
            <Container max_width=SECTION_WIDTH padding=Size::Lg>
                <div class="text-center">
                    <Heading
                        level=HeadingLevel::H1
                        size=Size::Xl
                        weight=FontWeight::Bold
                        color=ColorVariant::Neutral
                        align=TextAlign::Center
                        class=headline_class
                    >
                        {hero.headline_lead.as_str()}
                        <span class="text-green-600">" " {hero.headline_accent.as_str()}</span>
                    </Heading>
                    <Text
                        size=Size::Xl
                        color=ColorVariant::Secondary
                        align=TextAlign::Center
                        class="mb-8 max-w-3xl mx-auto"
                    >
                        {hero.subheadline.as_str()}
                    </Text>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <Button
                            size=Size::Lg
                            class=CTA_LIFT
                            on_click=action_callback(LandingAction::StartTrial)
                        >
                            {hero.primary_cta.as_str()}
                        </Button>
                        <Button
                            variant=ButtonVariant::Outline
                            color=ColorVariant::Neutral
                            size=Size::Lg
                            class=CTA_LIFT
                            on_click=action_callback(LandingAction::WatchDemo)
                        >
                            {hero.secondary_cta.as_str()}
                        </Button>
                    </div>
                    <div class="mt-8">
                        <Button
                            variant=ButtonVariant::Link
                            class="transition-colors"
                            on_click=Callback::new(|_| {
                                scroll_to("pricing");
                            })
                        >
                            {hero.pricing_link.as_str()}
                        </Button>
                    </div>
                </div>
            </Container>
        </section>
    }
}
