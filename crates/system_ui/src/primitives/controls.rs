use super::*;

const SPINNER_PATH: &str = "M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Resolved button configuration.
pub struct ButtonStyle {
    /// Visual treatment.
    pub variant: ButtonVariant,
    /// Semantic color.
    pub color: ColorVariant,
    /// Padding and font size step.
    pub size: Size,
    /// Disabled state.
    pub disabled: bool,
    /// Pending action; behaves as disabled with a busy cursor and spinner.
    pub loading: bool,
    /// Stretch to the container width.
    pub full_width: bool,
    /// Caller override classes.
    pub class: Option<String>,
}

impl ButtonStyle {
    /// Whether activation is suppressed. Drives both `disabled` and `aria-disabled`.
    pub fn inactive(&self) -> bool {
        self.disabled || self.loading
    }
}

impl ComponentStyle for ButtonStyle {
    fn base(&self) -> &'static str {
        "inline-flex items-center justify-center rounded-md font-medium"
    }

    fn size(&self) -> Option<&'static str> {
        Some(tables::size(self.size))
    }

    fn variant(&self, classes: &mut ClassList<'static>) {
        classes
            .push(tables::FOCUS_RING)
            .push(tables::TRANSITION)
            .push(tables::button_color(self.variant, self.color))
            .push_if(self.variant == ButtonVariant::Outline, "border")
            .push_if(
                self.variant == ButtonVariant::Link,
                "underline-offset-4 hover:underline",
            );
    }

    fn state(&self, classes: &mut ClassList<'static>) {
        classes
            .push_if(
                self.disabled,
                "opacity-50 cursor-not-allowed pointer-events-none",
            )
            .push_if(self.loading, "cursor-wait")
            .push_if(self.full_width, "w-full");
    }

    fn class_override(&self) -> Option<&str> {
        self.class.as_deref()
    }
}

#[component]
/// Action button with semantic variant, color, size, and loading/disabled states.
///
/// While `loading` the button is inactive like a disabled one but keeps its
/// colors, shows a busy cursor, and renders a spinner before its label.
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] color: ColorVariant,
    #[prop(optional)] size: Size,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional)] full_width: bool,
    #[prop(optional)] button_type: ButtonType,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] data_testid: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let style = move || ButtonStyle {
        variant,
        color,
        size,
        disabled: disabled.get(),
        loading: loading.get(),
        full_width,
        class: class.clone(),
    };
    let inactive = move || disabled.get() || loading.get();

    view! {
        <button
            type=button_type.token()
            class=move || style().classes()
            disabled=inactive
            aria-disabled=move || bool_token(inactive())
            aria-label=aria_label
            data-testid=data_testid
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-color=color.token()
            data-ui-size=size.token()
            data-ui-loading=move || bool_token(loading.get())
            on:click=move |ev| {
                if let Some(on_click) = activation_handler(!inactive(), on_click) {
                    on_click.call(ev);
                }
            }
        >
            {move || loading.get().then(|| view! {
                <svg
                    class="animate-spin -ml-1 mr-2 h-4 w-4"
                    xmlns="http://www.w3.org/2000/svg"
                    fill="none"
                    viewBox="0 0 24 24"
                    aria-hidden="true"
                >
                    <circle
                        class="opacity-25"
                        cx="12"
                        cy="12"
                        r="10"
                        stroke="currentColor"
                        stroke-width="4"
                    ></circle>
                    <path class="opacity-75" fill="currentColor" d=SPINNER_PATH></path>
                </svg>
            })}
            {children()}
        </button>
    }
}
