use super::*;

#[component]
/// Sticky top bar with the brand, in-page navigation, and login.
pub fn Header() -> impl IntoView {
    let content = landing_content();

    view! {
        <header class="bg-white shadow-sm border-b border-neutral-100 sticky top-0 z-fixed">
            <Container max_width=SECTION_WIDTH data_testid="landing-header">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <Heading
                            level=HeadingLevel::H1
                            size=Size::Xl
                            weight=FontWeight::Bold
                            color=ColorVariant::Primary
                            class="text-2xl cursor-pointer"
                        >
                            {content.brand.as_str()}
                        </Heading>
                    </div>
                    <nav class="hidden md:flex space-x-8" aria-label="Primary">
                        {content
                            .nav
                            .iter()
                            .map(|link| {
                                let href = link.href.as_str();
                                view! {
                                    <a
                                        href=href
                                        class="text-neutral-600 hover:text-neutral-900 transition-colors cursor-pointer"
                                        on:click=move |ev: MouseEvent| {
                                            ev.prevent_default();
                                            scroll_to_anchor(href);
                                        }
                                    >
                                        {link.label.as_str()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                    <div class="flex items-center space-x-4">
                        <Button on_click=action_callback(LandingAction::Login)>"Login"</Button>
                    </div>
                </div>
            </Container>
        </header>
    }
}
