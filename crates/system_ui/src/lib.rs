//! Presentational component toolkit styled with utility classes.
//!
//! Each component is a pure function of its props: semantic keys are looked up
//! in the [`design_tokens`] tables, assembled through [`ComponentStyle`] in
//! base, size, variant, state, override order, and merged by [`class_merge`]
//! so a caller's `class` prop replaces only the properties it touches. The
//! resolvers (`ButtonStyle`, `CardStyle`, ...) are public so the class output
//! can be inspected without a DOM.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;
mod style;

pub use design_tokens::{
    BadgeVariant, ButtonVariant, CardVariant, ColorVariant, ContainerWidth, FontWeight, Size,
    TextAlign, TextColor,
};
pub use icon::{Icon, IconSize, IconStyle};
pub use primitives::{
    activation_handler, is_activation_key, Badge, BadgeStyle, Button, ButtonStyle, ButtonType,
    Card, CardStyle, Container, ContainerStyle, Heading, HeadingLevel, HeadingStyle, Text,
    TextElement, TextStyle,
};
pub use style::ComponentStyle;

/// Convenience imports for page crates consuming the component set.
pub mod prelude {
    pub use crate::{
        Badge, BadgeVariant, Button, ButtonType, ButtonVariant, Card, CardVariant, ColorVariant,
        ComponentStyle, Container, ContainerWidth, FontWeight, Heading, HeadingLevel, Icon,
        IconSize, Size, Text, TextAlign, TextColor, TextElement,
    };
}
