//! Component showcase rendering every variant, with `?size=` and `?color=`
//! query overrides for the sample row.

use std::str::FromStr;

use design_tokens::{palette_color, BadgeVariant, TokenParseError};
use leptos::logging;
use leptos::*;
use leptos_router::use_query_map;
use system_ui::prelude::*;

const SHADES: &[&str] = &[
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Sample-row configuration read from the query string.
pub struct DemoParams {
    /// Size applied to the sample row.
    pub size: Size,
    /// Color applied to the sample row.
    pub color: ColorVariant,
}

impl DemoParams {
    /// Parses raw query values, falling back to defaults on absent or invalid input.
    pub fn from_query(size: Option<&str>, color: Option<&str>) -> Self {
        Self {
            size: parse_or_default("size", size),
            color: parse_or_default("color", color),
        }
    }
}

fn parse_or_default<T>(param: &str, raw: Option<&str>) -> T
where
    T: FromStr<Err = TokenParseError> + Default,
{
    let Some(raw) = raw else {
        return T::default();
    };
    raw.parse().unwrap_or_else(|err| {
        logging::warn!("ignoring `{param}` query parameter: {err}");
        T::default()
    })
}

#[component]
fn DemoSection(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="space-y-6">
            <Heading size=Size::Xl color=ColorVariant::Neutral class="text-2xl">
                {title}
            </Heading>
            {children()}
        </section>
    }
}

#[component]
fn Swatches(family: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div>
            <Heading level=HeadingLevel::H3 size=Size::Lg weight=FontWeight::Medium class="mb-3">
                {label}
            </Heading>
            <div class="grid grid-cols-5 gap-2">
                {SHADES
                    .iter()
                    .filter_map(|shade| palette_color(family, shade).map(|hex| (*shade, hex)))
                    .map(|(shade, hex)| view! {
                        <div class="text-center">
                            <div
                                class="w-full h-12 rounded-md border border-neutral-200"
                                style=format!("background-color: {hex};")
                            ></div>
                            <Text element=TextElement::Span size=Size::Xs color=ColorVariant::Secondary class="mt-1 block">
                                {shade}
                            </Text>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
/// `/design-system` route.
pub fn DesignSystemPage() -> impl IntoView {
    let query = use_query_map();
    let params = move || {
        query.with(|map| {
            DemoParams::from_query(
                map.get("size").map(String::as_str),
                map.get("color").map(String::as_str),
            )
        })
    };

    view! {
        <Container max_width=ContainerWidth::Xxl padding=Size::Lg>
            <div class="space-y-12 py-8">
                <div class="text-center">
                    <Heading level=HeadingLevel::H1 size=Size::Xl weight=FontWeight::Bold align=TextAlign::Center class="text-4xl mb-4">
                        "Tois Design System Demo"
                    </Heading>
                    <Text size=Size::Lg color=ColorVariant::Secondary align=TextAlign::Center class="max-w-2xl mx-auto">
                        "Every component variant rendered from the shared token tables."
                    </Text>
                </div>

                <DemoSection title="Sample">
                    {move || {
                        let DemoParams { size, color } = params();
                        view! {
                            <div class="flex flex-wrap items-center gap-3" data-testid="demo-sample">
                                <Button size=size color=color>{format!("{color} / {size}")}</Button>
                                <Badge size=size color=color>{color.token()}</Badge>
                                <Icon size=size color=color placeholder=true />
                                <Text size=size color=color>"Sample text"</Text>
                            </div>
                        }
                    }}
                </DemoSection>

                <DemoSection title="Button Variants">
                    {ButtonVariant::ALL
                        .iter()
                        .map(|variant| view! {
                            <div class="flex flex-wrap gap-3">
                                {ColorVariant::ALL
                                    .iter()
                                    .map(|color| view! {
                                        <Button variant=*variant color=*color>{color.token()}</Button>
                                    })
                                    .collect_view()}
                            </div>
                        })
                        .collect_view()}
                </DemoSection>

                <DemoSection title="Button Sizes">
                    <div class="flex flex-wrap items-end gap-3">
                        {Size::ALL
                            .iter()
                            .map(|size| view! { <Button size=*size>{size.token()}</Button> })
                            .collect_view()}
                    </div>
                </DemoSection>

                <DemoSection title="Button States">
                    <div class="flex flex-wrap gap-3">
                        <Button>"Normal"</Button>
                        <Button disabled=true>"Disabled"</Button>
                        <Button loading=true>"Loading"</Button>
                        <Button button_type=ButtonType::Submit variant=ButtonVariant::Outline>"Submit"</Button>
                    </div>
                    <Button full_width=true size=Size::Lg>"Full Width Button"</Button>
                </DemoSection>

                <DemoSection title="Badges">
                    {BadgeVariant::ALL
                        .iter()
                        .map(|variant| view! {
                            <div class="flex flex-wrap gap-2">
                                {ColorVariant::ALL
                                    .iter()
                                    .map(|color| view! {
                                        <Badge variant=*variant color=*color>{color.token()}</Badge>
                                    })
                                    .collect_view()}
                            </div>
                        })
                        .collect_view()}
                </DemoSection>

                <DemoSection title="Cards">
                    <div class="grid md:grid-cols-3 gap-6">
                        {CardVariant::ALL
                            .iter()
                            .map(|variant| view! {
                                <Card variant=*variant>
                                    <Heading level=HeadingLevel::H3>{variant.token()}</Heading>
                                    <Text color=ColorVariant::Secondary>"Card body"</Text>
                                </Card>
                            })
                            .collect_view()}
                        <Card
                            interactive=true
                            on_click=Callback::new(|_| logging::log!("Interactive card activated"))
                        >
                            <Heading level=HeadingLevel::H3>"interactive"</Heading>
                            <Text color=ColorVariant::Secondary>"Click, Enter, or Space"</Text>
                        </Card>
                    </div>
                </DemoSection>

                <DemoSection title="Icons">
                    <div class="flex flex-wrap items-end gap-4">
                        {Size::ALL
                            .iter()
                            .map(|size| view! {
                                <Icon size=*size background=ColorVariant::Primary rounded=true name="placeholder icon" />
                            })
                            .collect_view()}
                        {ColorVariant::ALL
                            .iter()
                            .map(|color| view! { <Icon size=64u32 color=*color placeholder=true /> })
                            .collect_view()}
                    </div>
                </DemoSection>

                <DemoSection title="Typography">
                    {Size::ALL
                        .iter()
                        .map(|size| view! { <Text size=*size>{format!("Text {size}")}</Text> })
                        .collect_view()}
                    <Heading level=HeadingLevel::H4 weight=FontWeight::Bold color=ColorVariant::Success>
                        "Bold success heading"
                    </Heading>
                    <Text align=TextAlign::Right element=TextElement::Block>"Right-aligned block"</Text>
                </DemoSection>

                <DemoSection title="Containers">
                    <div class="space-y-3">
                        {[ContainerWidth::Sm, ContainerWidth::Md, ContainerWidth::Lg]
                            .into_iter()
                            .map(|width| view! {
                                <Container max_width=width class="bg-green-50 p-4 rounded">
                                    <Text align=TextAlign::Center>{format!("max-w-{width}")}</Text>
                                </Container>
                            })
                            .collect_view()}
                    </div>
                </DemoSection>

                <DemoSection title="Design Tokens">
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        <Swatches family="brand" label="Brand Colors" />
                        <Swatches family="neutral" label="Neutral Colors" />
                    </div>
                </DemoSection>
            </div>
        </Container>
    }
}
