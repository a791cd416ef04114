use super::*;

#[component]
/// Three-column product feature grid.
pub fn FeaturesSection() -> impl IntoView {
    let content = landing_content();
    let intro = &content.features_intro;

    view! {
        <section id="features" class="py-20 bg-white" data-testid="features-section">
            <Container max_width=SECTION_WIDTH padding=Size::Lg>
                <div class="text-center mb-16">
                    <Heading size=Size::Xl align=TextAlign::Center class="mb-4">
                        {intro.title.as_str()}
                    </Heading>
                    <Text
                        size=Size::Lg
                        color=ColorVariant::Secondary
                        align=TextAlign::Center
                        class="max-w-2xl mx-auto"
                    >
                        {intro.summary.as_str()}
                    </Text>
                </div>
                <div class="grid md:grid-cols-3 gap-8">
                    {content
                        .features
                        .iter()
                        .map(|feature| {
                            view! {
                                <Card
                                    variant=CardVariant::Outlined
                                    padding=Size::Lg
                                    class="text-center"
                                    data_testid=format!("feature-{}", feature.id)
                                >
                                    <Icon
                                        size=64u32
                                        background=feature.icon_color
                                        color=feature.icon_color
                                        rounded=true
                                        placeholder=true
                                        class="mx-auto mb-4"
                                    />
                                    <Heading level=HeadingLevel::H3 align=TextAlign::Center class="mb-2">
                                        {feature.title.as_str()}
                                    </Heading>
                                    <Text color=ColorVariant::Secondary align=TextAlign::Center>
                                        {feature.description.as_str()}
                                    </Text>
                                </Card>
                            }
                        })
                        .collect_view()}
                </div>
            </Container>
        </section>
    }
}
