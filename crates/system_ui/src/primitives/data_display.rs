use super::*;

const CARD_INTERACTIVE: &str = "cursor-pointer transition-transform duration-200 hover:scale-105";
const CARD_FOCUS: &str = "focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-green-500";

/// Returns whether a `KeyboardEvent.key` value activates a button-like surface.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Passes `handler` through only while the surface accepts activation.
pub fn activation_handler<T>(enabled: bool, handler: Option<T>) -> Option<T> {
    handler.filter(|_| enabled)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Resolved card configuration.
pub struct CardStyle {
    /// Surface treatment.
    pub variant: CardVariant,
    /// Inner padding step.
    pub padding: Size,
    /// Hover/focus affordances for clickable cards.
    pub interactive: bool,
    /// Caller override classes.
    pub class: Option<String>,
}

impl CardStyle {
    /// `role` and `tabindex` of a card that behaves as a button.
    ///
    /// `None` unless the card is interactive and has a click handler.
    pub fn activation_attrs(&self, has_handler: bool) -> Option<(&'static str, i32)> {
        (self.interactive && has_handler).then_some(("button", 0))
    }
}

impl ComponentStyle for CardStyle {
    fn base(&self) -> &'static str {
        "rounded-lg"
    }

    fn size(&self) -> Option<&'static str> {
        Some(tables::card_padding(self.padding))
    }

    fn variant(&self, classes: &mut ClassList<'static>) {
        classes.push(tables::card_variant(self.variant));
    }

    fn state(&self, classes: &mut ClassList<'static>) {
        classes
            .push_if(self.interactive, CARD_INTERACTIVE)
            .push_if(self.interactive, CARD_FOCUS);
    }

    fn class_override(&self) -> Option<&str> {
        self.class.as_deref()
    }
}

#[component]
/// Content surface with optional click/keyboard activation.
///
/// The card only behaves as a button (role, tab stop, Enter/Space activation)
/// when it is `interactive` and has an `on_click` handler.
pub fn Card(
    #[prop(optional)] variant: CardVariant,
    #[prop(optional)] padding: Size,
    #[prop(optional)] interactive: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] data_testid: Option<String>,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let style = CardStyle {
        variant,
        padding,
        interactive,
        class,
    };
    let attrs = style.activation_attrs(on_click.is_some());
    let activation = activation_handler(attrs.is_some(), on_click);
    let classes = style.classes();

    view! {
        <div
            class=classes
            data-testid=data_testid
            role=attrs.map(|(role, _)| role)
            tabindex=attrs.map(|(_, index)| index)
            data-ui-kind="card"
            data-ui-variant=variant.token()
            data-ui-interactive=bool_token(interactive)
            on:click=move |_: MouseEvent| {
                if let Some(on_click) = activation.as_ref() {
                    on_click.call(());
                }
            }
            on:keydown=move |ev: KeyboardEvent| {
                let Some(on_click) = activation.as_ref() else {
                    return;
                };
                if is_activation_key(&ev.key()) {
                    ev.prevent_default();
                    on_click.call(());
                }
            }
        >
            {children()}
        </div>
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved badge configuration.
pub struct BadgeStyle {
    /// Visual treatment.
    pub variant: BadgeVariant,
    /// Semantic color.
    pub color: ColorVariant,
    /// Padding and font size step.
    pub size: Size,
    /// Caller override classes.
    pub class: Option<String>,
}

impl Default for BadgeStyle {
    fn default() -> Self {
        Self {
            variant: BadgeVariant::default(),
            color: ColorVariant::default(),
            size: Size::Sm,
            class: None,
        }
    }
}

impl ComponentStyle for BadgeStyle {
    fn base(&self) -> &'static str {
        "inline-flex items-center justify-center rounded-full font-medium whitespace-nowrap"
    }

    fn size(&self) -> Option<&'static str> {
        Some(tables::badge_size(self.size))
    }

    fn variant(&self, classes: &mut ClassList<'static>) {
        classes.push(tables::badge_color(self.variant, self.color));
    }

    fn class_override(&self) -> Option<&str> {
        self.class.as_deref()
    }
}

#[component]
/// Compact label for status and tags.
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    #[prop(optional)] color: ColorVariant,
    #[prop(default = Size::Sm)] size: Size,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] data_testid: Option<String>,
    children: Children,
) -> impl IntoView {
    let classes = BadgeStyle {
        variant,
        color,
        size,
        class,
    }
    .classes();

    view! {
        <span
            class=classes
            data-testid=data_testid
            data-ui-kind="badge"
            data-ui-variant=variant.token()
            data-ui-color=color.token()
        >
            {children()}
        </span>
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Resolved body-text configuration.
pub struct TextStyle {
    /// Font size step.
    pub size: Size,
    /// Font weight.
    pub weight: FontWeight,
    /// Text color; `inherit` emits no color class.
    pub color: TextColor,
    /// Horizontal alignment.
    pub align: TextAlign,
    /// Caller override classes.
    pub class: Option<String>,
}

impl ComponentStyle for TextStyle {
    fn base(&self) -> &'static str {
        ""
    }

    fn size(&self) -> Option<&'static str> {
        Some(tables::typography_size(self.size))
    }

    fn variant(&self, classes: &mut ClassList<'static>) {
        push_typography(classes, self.weight, self.color, self.align);
    }

    fn class_override(&self) -> Option<&str> {
        self.class.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Resolved heading configuration.
pub struct HeadingStyle {
    /// Font size step.
    pub size: Size,
    /// Font weight.
    pub weight: FontWeight,
    /// Text color; `inherit` emits no color class.
    pub color: TextColor,
    /// Horizontal alignment.
    pub align: TextAlign,
    /// Caller override classes.
    pub class: Option<String>,
}

impl Default for HeadingStyle {
    fn default() -> Self {
        Self {
            size: Size::Lg,
            weight: FontWeight::Semibold,
            color: TextColor::Inherit,
            align: TextAlign::Left,
            class: None,
        }
    }
}

impl ComponentStyle for HeadingStyle {
    fn base(&self) -> &'static str {
        ""
    }

    fn size(&self) -> Option<&'static str> {
        Some(tables::typography_size(self.size))
    }

    fn variant(&self, classes: &mut ClassList<'static>) {
        push_typography(classes, self.weight, self.color, self.align);
    }

    fn class_override(&self) -> Option<&str> {
        self.class.as_deref()
    }
}

fn push_typography(
    classes: &mut ClassList<'static>,
    weight: FontWeight,
    color: TextColor,
    align: TextAlign,
) {
    classes.push(tables::font_weight(weight));
    if let TextColor::Tone(tone) = color {
        classes.push(tables::text_color(tone));
    }
    classes.push(tables::text_align(align));
}

#[component]
/// Body text rendered as a paragraph, span, or block.
pub fn Text(
    #[prop(optional)] size: Size,
    #[prop(optional)] weight: FontWeight,
    #[prop(optional, into)] color: TextColor,
    #[prop(optional)] align: TextAlign,
    #[prop(optional)] element: TextElement,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] data_testid: Option<String>,
    children: Children,
) -> impl IntoView {
    let classes = TextStyle {
        size,
        weight,
        color,
        align,
        class,
    }
    .classes();

    match element {
        TextElement::Paragraph => view! {
            <p class=classes data-testid=data_testid data-ui-kind="text">{children()}</p>
        }
        .into_view(),
        TextElement::Span => view! {
            <span class=classes data-testid=data_testid data-ui-kind="text">{children()}</span>
        }
        .into_view(),
        TextElement::Block => view! {
            <div class=classes data-testid=data_testid data-ui-kind="text">{children()}</div>
        }
        .into_view(),
    }
}

#[component]
/// Section heading rendered at the requested semantic level.
pub fn Heading(
    #[prop(optional)] level: HeadingLevel,
    #[prop(default = Size::Lg)] size: Size,
    #[prop(default = FontWeight::Semibold)] weight: FontWeight,
    #[prop(optional, into)] color: TextColor,
    #[prop(optional)] align: TextAlign,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] data_testid: Option<String>,
    children: Children,
) -> impl IntoView {
    let classes = HeadingStyle {
        size,
        weight,
        color,
        align,
        class,
    }
    .classes();

    match level {
        HeadingLevel::H1 => view! {
            <h1 class=classes data-testid=data_testid data-ui-kind="heading">{children()}</h1>
        }
        .into_view(),
        HeadingLevel::H2 => view! {
            <h2 class=classes data-testid=data_testid data-ui-kind="heading">{children()}</h2>
        }
        .into_view(),
        HeadingLevel::H3 => view! {
            <h3 class=classes data-testid=data_testid data-ui-kind="heading">{children()}</h3>
        }
        .into_view(),
        HeadingLevel::H4 => view! {
            <h4 class=classes data-testid=data_testid data-ui-kind="heading">{children()}</h4>
        }
        .into_view(),
        HeadingLevel::H5 => view! {
            <h5 class=classes data-testid=data_testid data-ui-kind="heading">{children()}</h5>
        }
        .into_view(),
        HeadingLevel::H6 => view! {
            <h6 class=classes data-testid=data_testid data-ui-kind="heading">{children()}</h6>
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn tokens(classes: &str) -> Vec<&str> {
        classes.split_whitespace().collect()
    }

    #[test]
    fn interactive_card_adds_cursor_and_focus_ring() {
        let classes = CardStyle {
            interactive: true,
            ..CardStyle::default()
        }
        .classes();
        let resolved = tokens(&classes);
        for expected in [
            "cursor-pointer",
            "hover:scale-105",
            "focus:ring-2",
            "focus:ring-green-500",
        ] {
            assert!(resolved.contains(&expected), "{expected} missing from {classes}");
        }
        assert_eq!(
            CardStyle::default().classes(),
            "rounded-lg p-6 bg-white shadow-lg border-0"
        );
    }

    #[test]
    fn card_override_replaces_padding_and_surface() {
        let classes = CardStyle {
            variant: CardVariant::Outlined,
            class: Some("p-0 bg-neutral-50 pricing-card".to_string()),
            ..CardStyle::default()
        }
        .classes();
        assert_eq!(
            classes,
            "rounded-lg p-0 bg-neutral-50 border border-neutral-200 shadow-none pricing-card"
        );
    }

    #[test]
    fn activation_keys_are_enter_and_space() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Escape"));
        assert!(!is_activation_key("Spacebar"));
    }

    #[test]
    fn card_acts_as_button_only_when_interactive_with_handler() {
        let interactive = CardStyle {
            interactive: true,
            ..CardStyle::default()
        };
        let passive = CardStyle::default();

        assert_eq!(interactive.activation_attrs(true), Some(("button", 0)));
        assert_eq!(interactive.activation_attrs(false), None);
        assert_eq!(passive.activation_attrs(true), None);
        assert_eq!(passive.activation_attrs(false), None);
    }

    #[test]
    fn handlers_are_dropped_while_activation_is_off() {
        assert_eq!(activation_handler(true, Some("select")), Some("select"));
        assert_eq!(activation_handler(false, Some("select")), None);
        assert_eq!(activation_handler::<&str>(true, None), None);
    }

    #[test]
    fn soft_warning_badge_uses_tinted_palette() {
        let classes = BadgeStyle {
            variant: BadgeVariant::Soft,
            color: ColorVariant::Warning,
            ..BadgeStyle::default()
        }
        .classes();
        let resolved = tokens(&classes);
        assert!(resolved.contains(&"bg-yellow-100"));
        assert!(resolved.contains(&"text-yellow-800"));
        assert!(!resolved.contains(&"bg-yellow-600"));
        assert!(!resolved.contains(&"text-white"));
    }

    #[test]
    fn badge_defaults_to_small() {
        assert_eq!(
            BadgeStyle::default().classes(),
            "inline-flex items-center justify-center rounded-full font-medium whitespace-nowrap \
             px-2.5 py-0.5 text-xs bg-green-600 text-white"
        );
    }

    #[test]
    fn inherited_text_color_emits_no_color_class() {
        assert_eq!(TextStyle::default().classes(), "text-base font-normal text-left");
        assert_eq!(
            TextStyle {
                color: TextColor::Tone(ColorVariant::Neutral),
                align: TextAlign::Center,
                ..TextStyle::default()
            }
            .classes(),
            "text-base font-normal text-neutral-900 text-center"
        );
    }

    #[test]
    fn text_override_resolves_size_and_color_independently() {
        let classes = TextStyle {
            color: ColorVariant::Primary.into(),
            class: Some("text-xl text-neutral-600".to_string()),
            ..TextStyle::default()
        }
        .classes();
        assert_eq!(classes, "text-xl font-normal text-neutral-600 text-left");
    }

    #[test]
    fn heading_defaults_to_large_semibold() {
        assert_eq!(HeadingStyle::default().classes(), "text-lg font-semibold text-left");
        let hero = HeadingStyle {
            size: Size::Xl,
            weight: FontWeight::Bold,
            class: Some("text-4xl md:text-6xl".to_string()),
            ..HeadingStyle::default()
        }
        .classes();
        assert_eq!(hero, "text-4xl font-bold text-left md:text-6xl");
    }
}
