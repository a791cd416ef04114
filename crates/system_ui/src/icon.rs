//! Icon box with token or pixel sizing and a placeholder rendering mode.

use leptos::*;

use class_merge::ClassList;
use design_tokens::{tables, ColorVariant, Size};

use crate::style::{bool_token, ComponentStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon dimensions: a size-scale step or an exact pixel square.
pub enum IconSize {
    /// Size-scale step mapped through the icon size table.
    Token(Size),
    /// Exact width and height in pixels, applied inline.
    Pixels(u32),
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Token(Size::Md)
    }
}

impl From<Size> for IconSize {
    fn from(size: Size) -> Self {
        Self::Token(size)
    }
}

impl From<u32> for IconSize {
    fn from(pixels: u32) -> Self {
        Self::Pixels(pixels)
    }
}

impl IconSize {
    fn token(self) -> String {
        match self {
            Self::Token(size) => size.token().to_string(),
            Self::Pixels(pixels) => format!("{pixels}px"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Resolved icon configuration.
pub struct IconStyle {
    /// Box dimensions.
    pub size: IconSize,
    /// Placeholder fill color.
    pub color: ColorVariant,
    /// Container background.
    pub background: Option<ColorVariant>,
    /// Large corner radius.
    pub rounded: bool,
    /// Render a solid colored shape instead of icon content.
    pub placeholder: bool,
    /// Caller override classes.
    pub class: Option<String>,
}

impl IconStyle {
    /// Inline dimensions for pixel sizing; `None` for size-scale steps.
    pub fn inline_style(&self) -> Option<String> {
        match self.size {
            IconSize::Pixels(pixels) => Some(format!("width: {pixels}px; height: {pixels}px;")),
            IconSize::Token(_) => None,
        }
    }
}

impl ComponentStyle for IconStyle {
    fn base(&self) -> &'static str {
        "flex items-center justify-center"
    }

    fn size(&self) -> Option<&'static str> {
        match self.size {
            IconSize::Token(size) => Some(tables::icon_size(size)),
            IconSize::Pixels(_) => None,
        }
    }

    fn variant(&self, classes: &mut ClassList<'static>) {
        classes.push(self.background.map(tables::icon_background));
    }

    fn state(&self, classes: &mut ClassList<'static>) {
        classes
            .push_if(self.rounded, "rounded-lg")
            .push_if(self.placeholder, tables::icon_foreground(self.color))
            .push_if(self.placeholder, "rounded");
    }

    fn class_override(&self) -> Option<&str> {
        self.class.as_deref()
    }
}

#[component]
/// Fixed-size icon box.
///
/// A `name` is rendered as screen-reader-only text after the children. In
/// placeholder mode the box is filled with the color and, without children,
/// holds a rounded inner shape.
pub fn Icon(
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] size: IconSize,
    #[prop(optional)] color: ColorVariant,
    #[prop(optional)] background: Option<ColorVariant>,
    #[prop(optional)] rounded: bool,
    #[prop(optional)] placeholder: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] data_testid: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let style = IconStyle {
        size,
        color,
        background,
        rounded,
        placeholder,
        class,
    };
    let classes = style.classes();
    let inline_style = style.inline_style();

    let content = match children {
        Some(children) => children().into_view(),
        None if placeholder => view! { <div class="w-full h-full rounded"></div> }.into_view(),
        None => ().into_view(),
    };
    let label = name
        .filter(|_| !placeholder)
        .map(|name| view! { <span class="sr-only">{name}</span> });

    view! {
        <div
            class=classes
            style=inline_style
            data-testid=data_testid
            data-ui-kind="icon"
            data-ui-size=size.token()
            data-ui-placeholder=bool_token(placeholder)
        >
            {content}
            {label}
        </div>
    }
}
