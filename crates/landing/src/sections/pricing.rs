use class_merge::when;

use super::*;

/// Override classes for a pricing card; the popular tier gets a brand border.
pub fn tier_card_class(popular: bool) -> String {
    format!(
        "transition-transform hover:scale-105 {}",
        when(popular, "border-2 border-green-500")
    )
    .trim_end()
    .to_string()
}

#[component]
/// Pricing tiers with plan selection.
pub fn PricingSection() -> impl IntoView {
    let content = landing_content();
    let intro = &content.pricing_intro;
    let notes = &content.pricing_notes;

    let tiers = content
        .pricing
        .iter()
        .map(|tier| {
            let select = action_callback(LandingAction::SelectPlan {
                id: tier.id.clone(),
                name: tier.name.clone(),
            });
            view! {
                <Card
                    padding=Size::Lg
                    interactive=true
                    class=tier_card_class(tier.popular)
                    data_testid=format!("pricing-{}", tier.id)
                >
                    {tier.popular.then(|| view! {
                        <Badge size=Size::Md class="mb-4">"Most Popular"</Badge>
                    })}
                    <Heading level=HeadingLevel::H3 class="mb-4">
                        {tier.name.as_str()}
                    </Heading>
                    <div class="mb-6">
                        <span class="text-4xl font-bold text-neutral-900">{tier.price_label()}</span>
                        <Text element=TextElement::Span color=ColorVariant::Secondary>
                            {tier.period_label()}
                        </Text>
                    </div>
                    <ul class="space-y-3 mb-8">
                        {tier
                            .features
                            .iter()
                            .map(|feature| view! {
                                <li class="flex items-center">
                                    <span class="text-green-500 mr-2" aria-hidden="true">"✓"</span>
                                    <Text color=ColorVariant::Secondary>{feature.as_str()}</Text>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                    <Button size=Size::Lg full_width=true class="transform hover:scale-105" on_click=select>
                        {tier.button_text.as_str()}
                    </Button>
                </Card>
            }
        })
        .collect_view();

    view! {
        <section id="pricing" class="py-20 bg-neutral-50" data-testid="pricing-section">
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
                <div class="grid md:grid-cols-2 gap-8 max-w-4xl mx-auto">{tiers}</div>
                <div class="text-center mt-12">
                    <Text color=ColorVariant::Secondary align=TextAlign::Center class="mb-4">
                        {notes.trial.as_str()}
                    </Text>
                    <Text size=Size::Sm color=ColorVariant::Secondary align=TextAlign::Center>
                        {notes.custom_plan.as_str()}
                        <Button
                            variant=ButtonVariant::Link
                            size=Size::Sm
                            class="underline ml-1 p-0"
                            on_click=action_callback(LandingAction::ContactSales)
                        >
                            {notes.contact_sales.as_str()}
                        </Button>
                    </Text>
                </div>
            </Container>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use system_ui::CardStyle;

    use super::*;

    #[test]
    fn popular_tier_adds_brand_border() {
        assert_eq!(tier_card_class(false), "transition-transform hover:scale-105");
        assert_eq!(
            tier_card_class(true),
            "transition-transform hover:scale-105 border-2 border-green-500"
        );
    }

    #[test]
    fn popular_border_replaces_elevated_card_border() {
        let classes = CardStyle {
            padding: Size::Lg,
            interactive: true,
            class: Some(tier_card_class(true)),
            ..CardStyle::default()
        }
        .classes();
        let resolved: Vec<&str> = classes.split_whitespace().collect();
        assert!(resolved.contains(&"border-2"));
        assert!(resolved.contains(&"border-green-500"));
        assert!(!resolved.contains(&"border-0"));
        assert!(resolved.contains(&"p-8"));
        assert_eq!(
            resolved.iter().filter(|class| **class == "hover:scale-105").count(),
            1
        );
    }
}
