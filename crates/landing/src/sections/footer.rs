use super::*;
use crate::scroll::current_year;

#[component]
/// Brand blurb, link columns, and copyright line.
pub fn Footer() -> impl IntoView {
    let content = landing_content();

    view! {
        <footer class="bg-neutral-900 text-white py-12" data-testid="landing-footer">
            <Container max_width=SECTION_WIDTH padding=Size::Lg>
                <div class="grid md:grid-cols-4 gap-8">
                    <div>
                        <Heading
                            level=HeadingLevel::H3
                            size=Size::Xl
                            weight=FontWeight::Bold
                            class="text-2xl mb-4 text-green-400"
                        >
                            {content.brand.as_str()}
                        </Heading>
                        <Text class="text-neutral-400">{content.tagline.as_str()}</Text>
                    </div>
                    {content
                        .footer
                        .iter()
                        .map(|section| view! {
                            <div>
                                <Heading level=HeadingLevel::H4 size=Size::Md class="mb-4">
                                    {section.title.as_str()}
                                </Heading>
                                <ul class="space-y-2 text-neutral-400">
                                    {section
                                        .links
                                        .iter()
                                        .map(|link| view! {
                                            <li>
                                                <a href=link.href.as_str() class="hover:text-white transition-colors">
                                                    {link.label.as_str()}
                                                </a>
                                            </li>
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        })
                        .collect_view()}
                </div>
                <div class="border-t border-neutral-800 mt-8 pt-8 text-center text-neutral-400">
                    <p>{content.copyright_notice(current_year())}</p>
                </div>
            </Container>
        </footer>
    }
}
