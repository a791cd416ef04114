//! Presentational primitives: controls, data display, and layout.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use class_merge::ClassList;
use design_tokens::{
    tables, BadgeVariant, ButtonVariant, CardVariant, ColorVariant, ContainerWidth, FontWeight,
    Size, TextAlign, TextColor,
};

use crate::style::{bool_token, ComponentStyle};

mod controls;
mod data_display;
mod layout;

pub use controls::{Button, ButtonStyle};
pub use data_display::{
    activation_handler, is_activation_key, Badge, BadgeStyle, Card, CardStyle, Heading,
    HeadingStyle, Text, TextStyle,
};
pub use layout::{Container, ContainerStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Native `type` attribute for buttons.
pub enum ButtonType {
    /// Plain button; never submits a form.
    #[default]
    Button,
    /// Form submit button.
    Submit,
    /// Form reset button.
    Reset,
}

impl ButtonType {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Element rendered by [`Text`].
pub enum TextElement {
    /// `<p>`.
    #[default]
    Paragraph,
    /// `<span>`.
    Span,
    /// `<div>`.
    Block,
}

impl TextElement {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Paragraph => "p",
            Self::Span => "span",
            Self::Block => "div",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Semantic heading level rendered by [`Heading`].
pub enum HeadingLevel {
    /// `<h1>`.
    H1,
    /// `<h2>`.
    #[default]
    H2,
    /// `<h3>`.
    H3,
    /// `<h4>`.
    H4,
    /// `<h5>`.
    H5,
    /// `<h6>`.
    H6,
}

impl HeadingLevel {
    /// Returns the numeric level, 1 through 6.
    pub fn number(self) -> u8 {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
            Self::H4 => 4,
            Self::H5 => 5,
            Self::H6 => 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn element_defaults_match_component_contracts() {
        assert_eq!(ButtonType::default().token(), "button");
        assert_eq!(TextElement::default().token(), "p");
        assert_eq!(HeadingLevel::default().number(), 2);
        assert_eq!(TextElement::Block.token(), "div");
        assert_eq!(HeadingLevel::H6.number(), 6);
    }
}
