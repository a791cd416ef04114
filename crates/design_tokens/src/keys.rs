//! Closed semantic key types accepted by the token tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TokenParseError;

macro_rules! semantic_key {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal, default = $default:ident) {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        $(#[$meta])*
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $token)] $variant, )+
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl $name {
            /// Every value in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the stable token used in configuration and `data-ui-*` attributes.
            pub fn token(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.token())
            }
        }

        impl FromStr for $name {
            type Err = TokenParseError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                match raw {
                    $($token => Ok(Self::$variant),)+
                    _ => Err(TokenParseError::unknown($kind, raw, &[$($token),+])),
                }
            }
        }
    };
}

semantic_key! {
    /// Shared size scale.
    Size("size", default = Md) {
        /// Extra small.
        Xs => "xs",
        /// Small.
        Sm => "sm",
        /// Medium.
        Md => "md",
        /// Large.
        Lg => "lg",
        /// Extra large.
        Xl => "xl",
    }
}

semantic_key! {
    /// Semantic color intent shared by buttons, badges, icons, and text.
    ColorVariant("color", default = Primary) {
        /// Brand green.
        Primary => "primary",
        /// Neutral gray emphasis.
        Secondary => "secondary",
        /// Positive outcome.
        Success => "success",
        /// Caution.
        Warning => "warning",
        /// Failure or destructive action.
        Error => "error",
        /// Low-emphasis neutral.
        Neutral => "neutral",
    }
}

semantic_key! {
    /// Button visual treatments.
    ButtonVariant("button variant", default = Solid) {
        /// Filled background.
        Solid => "solid",
        /// Bordered, transparent background.
        Outline => "outline",
        /// Text-only with hover background.
        Ghost => "ghost",
        /// Inline link styling.
        Link => "link",
    }
}

semantic_key! {
    /// Badge visual treatments.
    BadgeVariant("badge variant", default = Solid) {
        /// Filled background with white text.
        Solid => "solid",
        /// Bordered with transparent background.
        Outline => "outline",
        /// Tinted background with dark text.
        Soft => "soft",
    }
}

semantic_key! {
    /// Card surface treatments.
    CardVariant("card variant", default = Elevated) {
        /// White surface with a large shadow.
        Elevated => "elevated",
        /// White surface with a light border.
        Outlined => "outlined",
        /// Tinted surface without border or shadow.
        Filled => "filled",
    }
}

semantic_key! {
    /// Font weights exposed to typography components.
    FontWeight("font weight", default = Normal) {
        /// 400.
        Normal => "normal",
        /// 500.
        Medium => "medium",
        /// 600.
        Semibold => "semibold",
        /// 700.
        Bold => "bold",
    }
}

semantic_key! {
    /// Horizontal text alignment.
    TextAlign("text alignment", default = Left) {
        /// Left aligned.
        Left => "left",
        /// Centered.
        Center => "center",
        /// Right aligned.
        Right => "right",
    }
}

semantic_key! {
    /// Maximum content width for layout containers.
    ContainerWidth("container width", default = Xl) {
        /// `max-w-sm`.
        Sm => "sm",
        /// `max-w-md`.
        Md => "md",
        /// `max-w-lg`.
        Lg => "lg",
        /// `max-w-xl`.
        Xl => "xl",
        /// `max-w-2xl`.
        Xxl => "2xl",
        /// No maximum.
        Full => "full",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
/// Text color: either inherited from the parent or one of the semantic colors.
pub enum TextColor {
    /// Emit no color class.
    #[default]
    Inherit,
    /// Apply the semantic color's text class.
    Tone(ColorVariant),
}

impl TextColor {
    /// Returns the stable token (`inherit` or a color token).
    pub fn token(self) -> &'static str {
        match self {
            Self::Inherit => "inherit",
            Self::Tone(color) => color.token(),
        }
    }
}

impl From<ColorVariant> for TextColor {
    fn from(color: ColorVariant) -> Self {
        Self::Tone(color)
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for TextColor {
    type Err = TokenParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw == "inherit" {
            return Ok(Self::Inherit);
        }
        raw.parse::<ColorVariant>().map(Self::Tone).map_err(|_| {
            let mut accepted = vec!["inherit"];
            accepted.extend(ColorVariant::ALL.iter().map(|color| color.token()));
            TokenParseError::unknown("text color", raw, &accepted)
        })
    }
}

impl TryFrom<String> for TextColor {
    type Error = TokenParseError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<TextColor> for String {
    fn from(color: TextColor) -> Self {
        color.token().to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tokens_round_trip_through_from_str() {
        for size in Size::ALL {
            assert_eq!(size.token().parse::<Size>(), Ok(*size));
        }
        for width in ContainerWidth::ALL {
            assert_eq!(width.to_string().parse::<ContainerWidth>(), Ok(*width));
        }
    }

    #[test]
    fn unknown_token_reports_kind_and_accepted_values() {
        let err = "huge".parse::<Size>().expect_err("huge is not a size");
        assert_eq!(
            err.to_string(),
            "unknown size `huge`; expected one of: xs, sm, md, lg, xl"
        );
    }

    #[test]
    fn text_color_accepts_inherit_and_colors() {
        assert_eq!("inherit".parse::<TextColor>(), Ok(TextColor::Inherit));
        assert_eq!(
            "warning".parse::<TextColor>(),
            Ok(TextColor::Tone(ColorVariant::Warning))
        );
        let err = "teal".parse::<TextColor>().expect_err("teal is not a color");
        assert!(err.to_string().starts_with("unknown text color `teal`"));
    }

    #[test]
    fn serde_uses_token_names() {
        assert_eq!(
            serde_json::to_string(&ContainerWidth::Xxl).expect("serialize"),
            "\"2xl\""
        );
        assert_eq!(
            serde_json::from_str::<ColorVariant>("\"success\"").expect("deserialize"),
            ColorVariant::Success
        );
        assert_eq!(
            serde_json::from_str::<TextColor>("\"inherit\"").expect("deserialize"),
            TextColor::Inherit
        );
        assert!(serde_json::from_str::<BadgeVariant>("\"ghost\"").is_err());
    }

    #[test]
    fn defaults_match_component_contracts() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Solid);
        assert_eq!(ColorVariant::default(), ColorVariant::Primary);
        assert_eq!(CardVariant::default(), CardVariant::Elevated);
        assert_eq!(ContainerWidth::default(), ContainerWidth::Xl);
        assert_eq!(TextColor::default(), TextColor::Inherit);
    }
}
