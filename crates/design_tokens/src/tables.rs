//! Static lookup tables from semantic keys to utility-class fragments.
//!
//! Tables never fail: their key types are closed enums. Values are plain class
//! strings and may contain several whitespace-separated classes.

use crate::{
    BadgeVariant, ButtonVariant, CardVariant, ColorVariant, ContainerWidth, FontWeight, Size,
    TextAlign,
};

/// Focus ring shared by interactive controls.
pub const FOCUS_RING: &str = "focus:outline-none focus:ring-2 focus:ring-offset-2";

/// Color transition shared by interactive controls.
pub const TRANSITION: &str = "transition-colors duration-200 ease-in-out";

/// Control padding and font size per size step.
pub fn size(size: Size) -> &'static str {
    match size {
        Size::Xs => "text-xs px-2 py-1",
        Size::Sm => "text-sm px-3 py-1.5",
        Size::Md => "text-base px-4 py-2",
        Size::Lg => "text-lg px-6 py-3",
        Size::Xl => "text-xl px-8 py-4",
    }
}

/// Button color classes for a variant/color pair.
pub fn button_color(variant: ButtonVariant, color: ColorVariant) -> &'static str {
    match variant {
        ButtonVariant::Solid => button_solid(color),
        ButtonVariant::Outline => button_outline(color),
        ButtonVariant::Ghost => button_ghost(color),
        ButtonVariant::Link => button_link(color),
    }
}

/// Solid button colors.
pub fn button_solid(color: ColorVariant) -> &'static str {
    match color {
        ColorVariant::Primary => "bg-green-600 text-white hover:bg-green-700 focus:ring-green-500",
        ColorVariant::Secondary => {
            "bg-neutral-600 text-white hover:bg-neutral-700 focus:ring-neutral-500"
        }
        ColorVariant::Success => {
            "bg-emerald-600 text-white hover:bg-emerald-700 focus:ring-emerald-500"
        }
        ColorVariant::Warning => {
            "bg-yellow-600 text-white hover:bg-yellow-700 focus:ring-yellow-500"
        }
        ColorVariant::Error => "bg-red-600 text-white hover:bg-red-700 focus:ring-red-500",
        ColorVariant::Neutral => {
            "bg-neutral-100 text-neutral-900 hover:bg-neutral-200 focus:ring-neutral-500"
        }
    }
}

/// Outline button colors. The `border` width class is added by the button itself.
pub fn button_outline(color: ColorVariant) -> &'static str {
    match color {
        ColorVariant::Primary => {
            "border-green-600 text-green-600 hover:bg-green-50 focus:ring-green-500"
        }
        ColorVariant::Secondary => {
            "border-neutral-600 text-neutral-600 hover:bg-neutral-50 focus:ring-neutral-500"
        }
        ColorVariant::Success => {
            "border-emerald-600 text-emerald-600 hover:bg-emerald-50 focus:ring-emerald-500"
        }
        ColorVariant::Warning => {
            "border-yellow-600 text-yellow-600 hover:bg-yellow-50 focus:ring-yellow-500"
        }
        ColorVariant::Error => "border-red-600 text-red-600 hover:bg-red-50 focus:ring-red-500",
        ColorVariant::Neutral => {
            "border-neutral-300 text-neutral-700 hover:bg-neutral-50 focus:ring-neutral-500"
        }
    }
}

/// Ghost button colors.
pub fn button_ghost(color: ColorVariant) -> &'static str {
    match color {
        ColorVariant::Primary => "text-green-600 hover:bg-green-50 focus:ring-green-500",
        ColorVariant::Secondary => "text-neutral-600 hover:bg-neutral-50 focus:ring-neutral-500",
        ColorVariant::Success => "text-emerald-600 hover:bg-emerald-50 focus:ring-emerald-500",
        ColorVariant::Warning => "text-yellow-600 hover:bg-yellow-50 focus:ring-yellow-500",
        ColorVariant::Error => "text-red-600 hover:bg-red-50 focus:ring-red-500",
        ColorVariant::Neutral => "text-neutral-700 hover:bg-neutral-50 focus:ring-neutral-500",
    }
}

/// Link button colors.
pub fn button_link(color: ColorVariant) -> &'static str {
    match color {
        ColorVariant::Primary => "text-green-600 hover:text-green-700 focus:ring-green-500",
        ColorVariant::Secondary => {
            "text-neutral-600 hover:text-neutral-700 focus:ring-neutral-500"
        }
        ColorVariant::Success => {
            "text-emerald-600 hover:text-emerald-700 focus:ring-emerald-500"
        }
        ColorVariant::Warning => "text-yellow-600 hover:text-yellow-700 focus:ring-yellow-500",
        ColorVariant::Error => "text-red-600 hover:text-red-700 focus:ring-red-500",
        ColorVariant::Neutral => {
            "text-neutral-700 hover:text-neutral-800 focus:ring-neutral-500"
        }
    }
}

/// Foreground text color.
pub fn text_color(color: ColorVariant) -> &'static str {
    match color {
        ColorVariant::Primary => "text-green-600",
        ColorVariant::Secondary => "text-neutral-600",
        ColorVariant::Success => "text-emerald-600",
        ColorVariant::Warning => "text-yellow-600",
        ColorVariant::Error => "text-red-600",
        ColorVariant::Neutral => "text-neutral-900",
    }
}

/// Light tinted background.
pub fn background_color(color: ColorVariant) -> &'static str {
    match color {
        ColorVariant::Primary => "bg-green-50",
        ColorVariant::Secondary => "bg-neutral-50",
        ColorVariant::Success => "bg-emerald-50",
        ColorVariant::Warning => "bg-yellow-50",
        ColorVariant::Error => "bg-red-50",
        ColorVariant::Neutral => "bg-neutral-50",
    }
}

/// Badge padding and font size.
pub fn badge_size(size: Size) -> &'static str {
    match size {
        Size::Xs => "px-1.5 py-0.5 text-xs",
        Size::Sm => "px-2.5 py-0.5 text-xs",
        Size::Md => "px-3 py-1 text-sm",
        Size::Lg => "px-4 py-1.5 text-sm",
        Size::Xl => "px-5 py-2 text-base",
    }
}

/// Badge colors for a variant/color pair.
pub fn badge_color(variant: BadgeVariant, color: ColorVariant) -> &'static str {
    match (variant, color) {
        (BadgeVariant::Solid, ColorVariant::Primary) => "bg-green-600 text-white",
        (BadgeVariant::Solid, ColorVariant::Secondary) => "bg-neutral-600 text-white",
        (BadgeVariant::Solid, ColorVariant::Success) => "bg-emerald-600 text-white",
        (BadgeVariant::Solid, ColorVariant::Warning) => "bg-yellow-600 text-white",
        (BadgeVariant::Solid, ColorVariant::Error) => "bg-red-600 text-white",
        (BadgeVariant::Solid, ColorVariant::Neutral) => "bg-neutral-800 text-white",
        (BadgeVariant::Outline, ColorVariant::Primary) => {
            "border border-green-600 text-green-600 bg-transparent"
        }
        (BadgeVariant::Outline, ColorVariant::Secondary) => {
            "border border-neutral-600 text-neutral-600 bg-transparent"
        }
        (BadgeVariant::Outline, ColorVariant::Success) => {
            "border border-emerald-600 text-emerald-600 bg-transparent"
        }
        (BadgeVariant::Outline, ColorVariant::Warning) => {
            "border border-yellow-600 text-yellow-600 bg-transparent"
        }
        (BadgeVariant::Outline, ColorVariant::Error) => {
            "border border-red-600 text-red-600 bg-transparent"
        }
        (BadgeVariant::Outline, ColorVariant::Neutral) => {
            "border border-neutral-800 text-neutral-800 bg-transparent"
        }
        (BadgeVariant::Soft, ColorVariant::Primary) => "bg-green-100 text-green-800",
        (BadgeVariant::Soft, ColorVariant::Secondary) => "bg-neutral-100 text-neutral-800",
        (BadgeVariant::Soft, ColorVariant::Success) => "bg-emerald-100 text-emerald-800",
        (BadgeVariant::Soft, ColorVariant::Warning) => "bg-yellow-100 text-yellow-800",
        (BadgeVariant::Soft, ColorVariant::Error) => "bg-red-100 text-red-800",
        (BadgeVariant::Soft, ColorVariant::Neutral) => "bg-neutral-100 text-neutral-800",
    }
}

/// Icon box dimensions.
pub fn icon_size(size: Size) -> &'static str {
    match size {
        Size::Xs => "w-4 h-4",
        Size::Sm => "w-6 h-6",
        Size::Md => "w-8 h-8",
        Size::Lg => "w-12 h-12",
        Size::Xl => "w-16 h-16",
    }
}

/// Icon container background.
pub fn icon_background(color: ColorVariant) -> &'static str {
    match color {
        ColorVariant::Primary => "bg-green-100",
        ColorVariant::Secondary => "bg-neutral-100",
        ColorVariant::Success => "bg-emerald-100",
        ColorVariant::Warning => "bg-yellow-100",
        ColorVariant::Error => "bg-red-100",
        ColorVariant::Neutral => "bg-neutral-100",
    }
}

/// Placeholder icon fill.
pub fn icon_foreground(color: ColorVariant) -> &'static str {
    match color {
        ColorVariant::Primary => "bg-green-500",
        ColorVariant::Secondary => "bg-neutral-500",
        ColorVariant::Success => "bg-emerald-600",
        ColorVariant::Warning => "bg-yellow-500",
        ColorVariant::Error => "bg-red-500",
        ColorVariant::Neutral => "bg-neutral-500",
    }
}

/// Typography font size.
pub fn typography_size(size: Size) -> &'static str {
    match size {
        Size::Xs => "text-xs",
        Size::Sm => "text-sm",
        Size::Md => "text-base",
        Size::Lg => "text-lg",
        Size::Xl => "text-xl",
    }
}

/// Font weight.
pub fn font_weight(weight: FontWeight) -> &'static str {
    match weight {
        FontWeight::Normal => "font-normal",
        FontWeight::Medium => "font-medium",
        FontWeight::Semibold => "font-semibold",
        FontWeight::Bold => "font-bold",
    }
}

/// Text alignment.
pub fn text_align(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "text-left",
        TextAlign::Center => "text-center",
        TextAlign::Right => "text-right",
    }
}

/// Container maximum width.
pub fn container_max_width(width: ContainerWidth) -> &'static str {
    match width {
        ContainerWidth::Sm => "max-w-sm",
        ContainerWidth::Md => "max-w-md",
        ContainerWidth::Lg => "max-w-lg",
        ContainerWidth::Xl => "max-w-xl",
        ContainerWidth::Xxl => "max-w-2xl",
        ContainerWidth::Full => "max-w-full",
    }
}

/// Container horizontal padding.
pub fn container_padding(size: Size) -> &'static str {
    match size {
        Size::Xs => "px-2",
        Size::Sm => "px-4",
        Size::Md => "px-6",
        Size::Lg => "px-8",
        Size::Xl => "px-10",
    }
}

/// Card surface treatment.
pub fn card_variant(variant: CardVariant) -> &'static str {
    match variant {
        CardVariant::Elevated => "bg-white shadow-lg border-0",
        CardVariant::Outlined => "bg-white border border-neutral-200 shadow-none",
        CardVariant::Filled => "bg-neutral-50 border-0 shadow-none",
    }
}

/// Card inner padding.
pub fn card_padding(size: Size) -> &'static str {
    match size {
        Size::Xs => "p-3",
        Size::Sm => "p-4",
        Size::Md => "p-6",
        Size::Lg => "p-8",
        Size::Xl => "p-10",
    }
}

/// Flex/grid gap.
pub fn gap(size: Size) -> &'static str {
    match size {
        Size::Xs => "gap-1",
        Size::Sm => "gap-2",
        Size::Md => "gap-4",
        Size::Lg => "gap-6",
        Size::Xl => "gap-8",
    }
}
