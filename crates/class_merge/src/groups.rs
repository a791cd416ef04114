//! Property-group classification for utility classes.
//!
//! Classification is table driven. A utility is first looked up in a list of
//! bare keywords, then matched against the prefix rules in order:
//! the first rule whose prefix matches and whose value shape accepts the
//! remaining suffix decides the group. Anything else is unrecognized and the
//! merger treats it as an opaque class that only collapses with exact
//! duplicates of itself.
//!
//! Rule order matters where prefixes overlap: `border-x-` precedes `border-`,
//! `ring-offset-` precedes `ring-`, and the three `text-` rules are tried as
//! alignment keywords, then font-size keywords, then color shapes.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Underlying CSS property (or property family) a utility class controls.
#[allow(missing_docs)]
pub enum PropertyGroup {
    // Layout
    Display,
    Position,
    Visibility,
    ScreenReader,
    BoxSizing,
    Isolation,
    Container,
    Float,
    Clear,
    ZIndex,
    Inset,
    InsetX,
    InsetY,
    Top,
    Right,
    Bottom,
    Left,
    Start,
    End,
    Overflow,
    OverflowX,
    OverflowY,
    ObjectFit,
    ObjectPosition,
    AspectRatio,
    // Flexbox and grid
    FlexDirection,
    FlexWrap,
    Flex,
    FlexGrow,
    FlexShrink,
    FlexBasis,
    Order,
    GridCols,
    GridRows,
    GridFlow,
    ColSpan,
    ColStart,
    ColEnd,
    RowSpan,
    RowStart,
    RowEnd,
    Gap,
    GapX,
    GapY,
    SpaceX,
    SpaceY,
    SpaceXReverse,
    SpaceYReverse,
    JustifyContent,
    JustifyItems,
    JustifySelf,
    AlignContent,
    AlignItems,
    AlignSelf,
    PlaceContent,
    PlaceItems,
    PlaceSelf,
    // Spacing
    Padding,
    PaddingX,
    PaddingY,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,
    PaddingStart,
    PaddingEnd,
    Margin,
    MarginX,
    MarginY,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    MarginStart,
    MarginEnd,
    // Sizing
    Width,
    MinWidth,
    MaxWidth,
    Height,
    MinHeight,
    MaxHeight,
    Size,
    // Typography
    FontFamily,
    FontSize,
    FontWeight,
    FontStyle,
    FontSmoothing,
    LetterSpacing,
    LineHeight,
    LineClamp,
    TextAlign,
    TextColor,
    TextDecoration,
    TextDecorationStyle,
    TextDecorationThickness,
    TextDecorationColor,
    UnderlineOffset,
    TextTransform,
    TextOverflow,
    TextWrap,
    Whitespace,
    WordBreak,
    ListStyleType,
    ListStylePosition,
    // Backgrounds
    BackgroundAttachment,
    BackgroundPosition,
    BackgroundRepeat,
    BackgroundSize,
    BackgroundImage,
    BackgroundColor,
    BackgroundOpacity,
    GradientFrom,
    GradientVia,
    GradientTo,
    // Borders
    BorderRadius,
    RoundedTop,
    RoundedRight,
    RoundedBottom,
    RoundedLeft,
    RoundedTopLeft,
    RoundedTopRight,
    RoundedBottomRight,
    RoundedBottomLeft,
    BorderWidth,
    BorderWidthX,
    BorderWidthY,
    BorderWidthTop,
    BorderWidthRight,
    BorderWidthBottom,
    BorderWidthLeft,
    BorderStyle,
    BorderColor,
    BorderColorX,
    BorderColorY,
    BorderColorTop,
    BorderColorRight,
    BorderColorBottom,
    BorderColorLeft,
    BorderCollapse,
    OutlineStyle,
    OutlineWidth,
    OutlineOffset,
    OutlineColor,
    RingWidth,
    RingInset,
    RingColor,
    RingOffsetWidth,
    RingOffsetColor,
    // Effects
    Shadow,
    ShadowColor,
    Opacity,
    // Transforms
    Transform,
    TransformOrigin,
    Scale,
    ScaleX,
    ScaleY,
    Rotate,
    TranslateX,
    TranslateY,
    SkewX,
    SkewY,
    // Transitions and animation
    TransitionProperty,
    Duration,
    TimingFunction,
    Delay,
    Animation,
    // Interactivity and SVG
    Cursor,
    PointerEvents,
    UserSelect,
    Resize,
    Fill,
    Stroke,
    StrokeWidth,
}

impl PropertyGroup {
    /// Longhand groups that a later utility of this group also resets.
    ///
    /// `p-4` after `px-2` removes `px-2`; `px-2` after `p-4` keeps both.
    pub fn overrides(self) -> &'static [PropertyGroup] {
        use PropertyGroup::*;
        match self {
            Inset => &[InsetX, InsetY, Top, Right, Bottom, Left, Start, End],
            InsetX => &[Right, Left],
            InsetY => &[Top, Bottom],
            Overflow => &[OverflowX, OverflowY],
            Gap => &[GapX, GapY],
            Padding => &[
                PaddingX,
                PaddingY,
                PaddingTop,
                PaddingRight,
                PaddingBottom,
                PaddingLeft,
                PaddingStart,
                PaddingEnd,
            ],
            PaddingX => &[PaddingRight, PaddingLeft, PaddingStart, PaddingEnd],
            PaddingY => &[PaddingTop, PaddingBottom],
            Margin => &[
                MarginX,
                MarginY,
                MarginTop,
                MarginRight,
                MarginBottom,
                MarginLeft,
                MarginStart,
                MarginEnd,
            ],
            MarginX => &[MarginRight, MarginLeft, MarginStart, MarginEnd],
            MarginY => &[MarginTop, MarginBottom],
            Size => &[Width, Height],
            FontSize => &[LineHeight],
            BorderRadius => &[
                RoundedTop,
                RoundedRight,
                RoundedBottom,
                RoundedLeft,
                RoundedTopLeft,
                RoundedTopRight,
                RoundedBottomRight,
                RoundedBottomLeft,
            ],
            RoundedTop => &[RoundedTopLeft, RoundedTopRight],
            RoundedRight => &[RoundedTopRight, RoundedBottomRight],
            RoundedBottom => &[RoundedBottomRight, RoundedBottomLeft],
            RoundedLeft => &[RoundedTopLeft, RoundedBottomLeft],
            BorderWidth => &[
                BorderWidthX,
                BorderWidthY,
                BorderWidthTop,
                BorderWidthRight,
                BorderWidthBottom,
                BorderWidthLeft,
            ],
            BorderWidthX => &[BorderWidthRight, BorderWidthLeft],
            BorderWidthY => &[BorderWidthTop, BorderWidthBottom],
            BorderColor => &[
                BorderColorX,
                BorderColorY,
                BorderColorTop,
                BorderColorRight,
                BorderColorBottom,
                BorderColorLeft,
            ],
            BorderColorX => &[BorderColorRight, BorderColorLeft],
            BorderColorY => &[BorderColorTop, BorderColorBottom],
            Scale => &[ScaleX, ScaleY],
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Shape {
    /// Any non-empty suffix.
    Any,
    /// One of a fixed keyword list.
    Keyword(&'static [&'static str]),
    /// Bare number or arbitrary value that is not a color.
    Number,
    /// Spacing/sizing scale value.
    Length,
    /// Palette color, special color keyword, or arbitrary color.
    Color,
}

impl Shape {
    fn accepts(self, value: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Keyword(words) => words.contains(&value),
            Self::Number => is_number(value) || (is_arbitrary(value) && !is_color(value)),
            Self::Length => is_length(value),
            Self::Color => is_color(value),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Rule {
    prefix: &'static str,
    shape: Shape,
    group: PropertyGroup,
}

const fn rule(prefix: &'static str, shape: Shape, group: PropertyGroup) -> Rule {
    Rule {
        prefix,
        shape,
        group,
    }
}

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const SHADOW_SIZES: &[&str] = &["sm", "md", "lg", "xl", "2xl", "inner", "none"];
const BG_POSITIONS: &[&str] = &[
    "bottom",
    "center",
    "left",
    "left-bottom",
    "left-top",
    "right",
    "right-bottom",
    "right-top",
    "top",
];
const BG_REPEAT: &[&str] = &[
    "repeat",
    "no-repeat",
    "repeat-x",
    "repeat-y",
    "repeat-round",
    "repeat-space",
];
const LENGTH_KEYWORDS: &[&str] = &[
    "px", "auto", "full", "screen", "svh", "lvh", "dvh", "svw", "lvw", "dvw", "min", "max", "fit",
    "none", "prose", "xs", "sm", "md", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl",
];
const SPECIAL_COLORS: &[&str] = &["inherit", "current", "transparent", "black", "white"];

mod table {
    use super::PropertyGroup::*;
    use super::Shape::*;
    use super::{
        rule, PropertyGroup, Rule, BG_POSITIONS, BG_REPEAT, BORDER_STYLES, FONT_SIZES,
        FONT_WEIGHTS, SHADOW_SIZES, TEXT_ALIGN,
    };

    pub(super) const EXACT: &[(&str, PropertyGroup)] = &[
        ("block", Display),
        ("inline-block", Display),
        ("inline", Display),
        ("flex", Display),
        ("inline-flex", Display),
        ("table", Display),
        ("inline-table", Display),
        ("table-cell", Display),
        ("table-row", Display),
        ("grid", Display),
        ("inline-grid", Display),
        ("contents", Display),
        ("list-item", Display),
        ("flow-root", Display),
        ("hidden", Display),
        ("static", Position),
        ("fixed", Position),
        ("absolute", Position),
        ("relative", Position),
        ("sticky", Position),
        ("visible", Visibility),
        ("invisible", Visibility),
        ("collapse", Visibility),
        ("sr-only", ScreenReader),
        ("not-sr-only", ScreenReader),
        ("box-border", BoxSizing),
        ("box-content", BoxSizing),
        ("isolate", Isolation),
        ("isolation-auto", Isolation),
        ("container", Container),
        ("grow", FlexGrow),
        ("shrink", FlexShrink),
        ("italic", FontStyle),
        ("not-italic", FontStyle),
        ("antialiased", FontSmoothing),
        ("subpixel-antialiased", FontSmoothing),
        ("underline", TextDecoration),
        ("overline", TextDecoration),
        ("line-through", TextDecoration),
        ("no-underline", TextDecoration),
        ("uppercase", TextTransform),
        ("lowercase", TextTransform),
        ("capitalize", TextTransform),
        ("normal-case", TextTransform),
        ("truncate", TextOverflow),
        ("border", BorderWidth),
        ("border-x", BorderWidthX),
        ("border-y", BorderWidthY),
        ("border-t", BorderWidthTop),
        ("border-r", BorderWidthRight),
        ("border-b", BorderWidthBottom),
        ("border-l", BorderWidthLeft),
        ("rounded", BorderRadius),
        ("rounded-t", RoundedTop),
        ("rounded-r", RoundedRight),
        ("rounded-b", RoundedBottom),
        ("rounded-l", RoundedLeft),
        ("rounded-tl", RoundedTopLeft),
        ("rounded-tr", RoundedTopRight),
        ("rounded-br", RoundedBottomRight),
        ("rounded-bl", RoundedBottomLeft),
        ("outline", OutlineStyle),
        ("ring", RingWidth),
        ("ring-inset", RingInset),
        ("shadow", Shadow),
        ("transition", TransitionProperty),
        ("transform", Transform),
        ("transform-gpu", Transform),
        ("transform-cpu", Transform),
        ("transform-none", Transform),
        ("space-x-reverse", SpaceXReverse),
        ("space-y-reverse", SpaceYReverse),
        ("resize", Resize),
    ];

    pub(super) const RULES: &[Rule] = &[
        // Layout
        rule("float-", Keyword(&["left", "right", "start", "end", "none"]), Float),
        rule("clear-", Keyword(&["left", "right", "both", "none", "start", "end"]), Clear),
        rule("z-", Any, ZIndex),
        rule("inset-x-", Length, InsetX),
        rule("inset-y-", Length, InsetY),
        rule("inset-", Length, Inset),
        rule("top-", Length, Top),
        rule("right-", Length, Right),
        rule("bottom-", Length, Bottom),
        rule("left-", Length, Left),
        rule("start-", Length, Start),
        rule("end-", Length, End),
        rule("overflow-x-", Any, OverflowX),
        rule("overflow-y-", Any, OverflowY),
        rule("overflow-", Any, Overflow),
        rule(
            "object-",
            Keyword(&["contain", "cover", "fill", "none", "scale-down"]),
            ObjectFit,
        ),
        rule("object-", Any, ObjectPosition),
        rule("aspect-", Any, AspectRatio),
        // Flexbox and grid
        rule(
            "flex-",
            Keyword(&["row", "row-reverse", "col", "col-reverse"]),
            FlexDirection,
        ),
        rule("flex-", Keyword(&["wrap", "wrap-reverse", "nowrap"]), FlexWrap),
        rule("flex-", Any, Flex),
        rule("grow-", Number, FlexGrow),
        rule("shrink-", Number, FlexShrink),
        rule("basis-", Length, FlexBasis),
        rule("order-", Any, Order),
        rule("grid-cols-", Any, GridCols),
        rule("grid-rows-", Any, GridRows),
        rule("grid-flow-", Any, GridFlow),
        rule("col-span-", Any, ColSpan),
        rule("col-start-", Any, ColStart),
        rule("col-end-", Any, ColEnd),
        rule("row-span-", Any, RowSpan),
        rule("row-start-", Any, RowStart),
        rule("row-end-", Any, RowEnd),
        rule("gap-x-", Length, GapX),
        rule("gap-y-", Length, GapY),
        rule("gap-", Length, Gap),
        rule("space-x-", Length, SpaceX),
        rule("space-y-", Length, SpaceY),
        rule("justify-items-", Any, JustifyItems),
        rule("justify-self-", Any, JustifySelf),
        rule("justify-", Any, JustifyContent),
        rule("content-", Any, AlignContent),
        rule("items-", Any, AlignItems),
        rule("self-", Any, AlignSelf),
        rule("place-content-", Any, PlaceContent),
        rule("place-items-", Any, PlaceItems),
        rule("place-self-", Any, PlaceSelf),
        // Spacing
        rule("p-", Length, Padding),
        rule("px-", Length, PaddingX),
        rule("py-", Length, PaddingY),
        rule("pt-", Length, PaddingTop),
        rule("pr-", Length, PaddingRight),
        rule("pb-", Length, PaddingBottom),
        rule("pl-", Length, PaddingLeft),
        rule("ps-", Length, PaddingStart),
        rule("pe-", Length, PaddingEnd),
        rule("m-", Length, Margin),
        rule("mx-", Length, MarginX),
        rule("my-", Length, MarginY),
        rule("mt-", Length, MarginTop),
        rule("mr-", Length, MarginRight),
        rule("mb-", Length, MarginBottom),
        rule("ml-", Length, MarginLeft),
        rule("ms-", Length, MarginStart),
        rule("me-", Length, MarginEnd),
        // Sizing
        rule("w-", Length, Width),
        rule("min-w-", Length, MinWidth),
        rule("max-w-", Length, MaxWidth),
        rule("h-", Length, Height),
        rule("min-h-", Length, MinHeight),
        rule("max-h-", Length, MaxHeight),
        rule("size-", Length, Size),
        // Typography
        rule("text-", Keyword(TEXT_ALIGN), TextAlign),
        rule("text-", Keyword(FONT_SIZES), FontSize),
        rule("text-", Keyword(&["ellipsis", "clip"]), TextOverflow),
        rule("text-", Keyword(&["wrap", "nowrap", "balance", "pretty"]), TextWrap),
        rule("text-", Color, TextColor),
        rule("text-", Number, FontSize),
        rule("font-", Keyword(FONT_WEIGHTS), FontWeight),
        rule("font-", Any, FontFamily),
        rule("tracking-", Any, LetterSpacing),
        rule("leading-", Any, LineHeight),
        rule("line-clamp-", Any, LineClamp),
        rule(
            "decoration-",
            Keyword(&["solid", "double", "dotted", "dashed", "wavy"]),
            TextDecorationStyle,
        ),
        rule("decoration-", Color, TextDecorationColor),
        rule("decoration-", Any, TextDecorationThickness),
        rule("underline-offset-", Any, UnderlineOffset),
        rule("whitespace-", Any, Whitespace),
        rule("break-", Keyword(&["normal", "words", "all", "keep"]), WordBreak),
        rule("list-", Keyword(&["inside", "outside"]), ListStylePosition),
        rule("list-", Any, ListStyleType),
        // Backgrounds
        rule("bg-", Keyword(&["fixed", "local", "scroll"]), BackgroundAttachment),
        rule("bg-", Keyword(BG_POSITIONS), BackgroundPosition),
        rule("bg-", Keyword(BG_REPEAT), BackgroundRepeat),
        rule("bg-", Keyword(&["auto", "cover", "contain"]), BackgroundSize),
        rule("bg-gradient-to-", Any, BackgroundImage),
        rule("bg-", Keyword(&["none"]), BackgroundImage),
        rule("bg-opacity-", Number, BackgroundOpacity),
        rule("bg-", Color, BackgroundColor),
        rule("from-", Color, GradientFrom),
        rule("via-", Color, GradientVia),
        rule("to-", Color, GradientTo),
        // Borders
        rule("rounded-tl-", Any, RoundedTopLeft),
        rule("rounded-tr-", Any, RoundedTopRight),
        rule("rounded-br-", Any, RoundedBottomRight),
        rule("rounded-bl-", Any, RoundedBottomLeft),
        rule("rounded-t-", Any, RoundedTop),
        rule("rounded-r-", Any, RoundedRight),
        rule("rounded-b-", Any, RoundedBottom),
        rule("rounded-l-", Any, RoundedLeft),
        rule("rounded-", Any, BorderRadius),
        rule("border-x-", Number, BorderWidthX),
        rule("border-x-", Color, BorderColorX),
        rule("border-y-", Number, BorderWidthY),
        rule("border-y-", Color, BorderColorY),
        rule("border-t-", Number, BorderWidthTop),
        rule("border-t-", Color, BorderColorTop),
        rule("border-r-", Number, BorderWidthRight),
        rule("border-r-", Color, BorderColorRight),
        rule("border-b-", Number, BorderWidthBottom),
        rule("border-b-", Color, BorderColorBottom),
        rule("border-l-", Number, BorderWidthLeft),
        rule("border-l-", Color, BorderColorLeft),
        rule("border-", Keyword(BORDER_STYLES), BorderStyle),
        rule("border-", Keyword(&["collapse", "separate"]), BorderCollapse),
        rule("border-", Number, BorderWidth),
        rule("border-", Color, BorderColor),
        rule("outline-offset-", Any, OutlineOffset),
        rule(
            "outline-",
            Keyword(&["none", "dashed", "dotted", "double", "solid"]),
            OutlineStyle,
        ),
        rule("outline-", Number, OutlineWidth),
        rule("outline-", Color, OutlineColor),
        rule("ring-offset-", Number, RingOffsetWidth),
        rule("ring-offset-", Color, RingOffsetColor),
        rule("ring-", Number, RingWidth),
        rule("ring-", Color, RingColor),
        // Effects
        rule("shadow-", Keyword(SHADOW_SIZES), Shadow),
        rule("shadow-", Color, ShadowColor),
        rule("opacity-", Number, Opacity),
        // Transforms
        rule("origin-", Any, TransformOrigin),
        rule("scale-x-", Number, ScaleX),
        rule("scale-y-", Number, ScaleY),
        rule("scale-", Number, Scale),
        rule("rotate-", Number, Rotate),
        rule("translate-x-", Length, TranslateX),
        rule("translate-y-", Length, TranslateY),
        rule("skew-x-", Number, SkewX),
        rule("skew-y-", Number, SkewY),
        // Transitions and animation
        rule("transition-", Any, TransitionProperty),
        rule("duration-", Number, Duration),
        rule("ease-", Any, TimingFunction),
        rule("delay-", Number, Delay),
        rule("animate-", Any, Animation),
        // Interactivity and SVG
        rule("cursor-", Any, Cursor),
        rule("pointer-events-", Keyword(&["none", "auto"]), PointerEvents),
        rule("select-", Keyword(&["none", "text", "all", "auto"]), UserSelect),
        rule("resize-", Keyword(&["none", "x", "y"]), Resize),
        rule("fill-", Any, Fill),
        rule("stroke-", Number, StrokeWidth),
        rule("stroke-", Color, Stroke),
    ];
}

/// Derives the property group of a base utility (no modifiers, `!`, or `-`).
///
/// Returns `None` for class names outside the rule table, such as
/// hand-written component classes.
pub fn classify(utility: &str) -> Option<PropertyGroup> {
    if let Some((_, group)) = table::EXACT.iter().find(|(name, _)| *name == utility) {
        return Some(*group);
    }
    table::RULES.iter().find_map(|rule| {
        utility
            .strip_prefix(rule.prefix)
            .filter(|value| !value.is_empty() && rule.shape.accepts(value))
            .map(|_| rule.group)
    })
}

fn is_arbitrary(value: &str) -> bool {
    value.len() > 2 && value.starts_with('[') && value.ends_with(']')
}

fn is_number(value: &str) -> bool {
    let mut seen_digit = false;
    let mut seen_dot = false;
    for byte in value.bytes() {
        match byte {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    seen_digit
}

fn is_fraction(value: &str) -> bool {
    value
        .split_once('/')
        .is_some_and(|(num, den)| is_number(num) && is_number(den))
}

fn is_length(value: &str) -> bool {
    is_number(value) || is_fraction(value) || is_arbitrary(value) || LENGTH_KEYWORDS.contains(&value)
}

fn is_color(value: &str) -> bool {
    let value = match value.split_once('/') {
        Some((color, opacity)) if is_number(opacity) || is_arbitrary(opacity) => color,
        Some(_) => return false,
        None => value,
    };
    if SPECIAL_COLORS.contains(&value) {
        return true;
    }
    if is_arbitrary(value) {
        let inner = &value[1..value.len() - 1];
        return inner.starts_with('#')
            || inner.starts_with("rgb")
            || inner.starts_with("hsl")
            || inner.starts_with("color:");
    }
    value.rsplit_once('-').is_some_and(|(name, shade)| {
        is_number(shade)
            && !name.is_empty()
            && !name.starts_with('-')
            && name.bytes().all(|b| b.is_ascii_lowercase() || b == b'-')
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::PropertyGroup::*;
    use super::*;

    #[test]
    fn text_prefix_is_disambiguated_by_suffix_shape() {
        assert_eq!(classify("text-lg"), Some(FontSize));
        assert_eq!(classify("text-base"), Some(FontSize));
        assert_eq!(classify("text-center"), Some(TextAlign));
        assert_eq!(classify("text-green-600"), Some(TextColor));
        assert_eq!(classify("text-white"), Some(TextColor));
        assert_eq!(classify("text-neutral-900/80"), Some(TextColor));
        assert_eq!(classify("text-[#123456]"), Some(TextColor));
        assert_eq!(classify("text-[14px]"), Some(FontSize));
        assert_eq!(classify("text-ellipsis"), Some(TextOverflow));
    }

    #[test]
    fn border_family_splits_width_style_and_color() {
        assert_eq!(classify("border"), Some(BorderWidth));
        assert_eq!(classify("border-2"), Some(BorderWidth));
        assert_eq!(classify("border-0"), Some(BorderWidth));
        assert_eq!(classify("border-dashed"), Some(BorderStyle));
        assert_eq!(classify("border-green-600"), Some(BorderColor));
        assert_eq!(classify("border-transparent"), Some(BorderColor));
        assert_eq!(classify("border-b"), Some(BorderWidthBottom));
        assert_eq!(classify("border-t-4"), Some(BorderWidthTop));
        assert_eq!(classify("border-t-red-500"), Some(BorderColorTop));
        assert_eq!(classify("border-[3px]"), Some(BorderWidth));
        assert_eq!(classify("border-[#ff0000]"), Some(BorderColor));
        assert_eq!(classify("border-x-[#ff0000]"), Some(BorderColorX));
    }

    #[test]
    fn arbitrary_colors_never_classify_as_widths() {
        assert_eq!(classify("ring-[#ff0000]"), Some(RingColor));
        assert_eq!(classify("ring-[4px]"), Some(RingWidth));
        assert_eq!(classify("ring-offset-[hsl(0,0%,0%)]"), Some(RingOffsetColor));
        assert_eq!(classify("outline-[rgb(0,0,0)]"), Some(OutlineColor));
        assert_eq!(classify("stroke-[#000]"), Some(Stroke));
        assert_eq!(classify("stroke-[1.5]"), Some(StrokeWidth));
    }

    #[test]
    fn padding_and_margin_have_per_axis_groups() {
        assert_eq!(classify("p-6"), Some(Padding));
        assert_eq!(classify("px-4"), Some(PaddingX));
        assert_eq!(classify("py-1.5"), Some(PaddingY));
        assert_eq!(classify("pt-px"), Some(PaddingTop));
        assert_eq!(classify("mx-auto"), Some(MarginX));
        assert_eq!(classify("ml-1"), Some(MarginLeft));
        assert_eq!(classify("mr-2"), Some(MarginRight));
    }

    #[test]
    fn ring_outline_and_shadow_variants() {
        assert_eq!(classify("ring"), Some(RingWidth));
        assert_eq!(classify("ring-2"), Some(RingWidth));
        assert_eq!(classify("ring-green-500"), Some(RingColor));
        assert_eq!(classify("ring-offset-2"), Some(RingOffsetWidth));
        assert_eq!(classify("ring-offset-white"), Some(RingOffsetColor));
        assert_eq!(classify("outline-none"), Some(OutlineStyle));
        assert_eq!(classify("shadow-lg"), Some(Shadow));
        assert_eq!(classify("shadow-none"), Some(Shadow));
        assert_eq!(classify("shadow-green-500/50"), Some(ShadowColor));
    }

    #[test]
    fn layout_keywords_and_sizing() {
        assert_eq!(classify("inline-flex"), Some(Display));
        assert_eq!(classify("hidden"), Some(Display));
        assert_eq!(classify("flex-col"), Some(FlexDirection));
        assert_eq!(classify("flex-1"), Some(Flex));
        assert_eq!(classify("w-full"), Some(Width));
        assert_eq!(classify("w-1/2"), Some(Width));
        assert_eq!(classify("max-w-2xl"), Some(MaxWidth));
        assert_eq!(classify("min-h-screen"), Some(MinHeight));
        assert_eq!(classify("z-fixed"), Some(ZIndex));
        assert_eq!(classify("grid-cols-3"), Some(GridCols));
        assert_eq!(classify("space-x-8"), Some(SpaceX));
        assert_eq!(classify("gap-4"), Some(Gap));
    }

    #[test]
    fn background_variants() {
        assert_eq!(classify("bg-green-600"), Some(BackgroundColor));
        assert_eq!(classify("bg-white"), Some(BackgroundColor));
        assert_eq!(classify("bg-cover"), Some(BackgroundSize));
        assert_eq!(classify("bg-center"), Some(BackgroundPosition));
        assert_eq!(classify("bg-gradient-to-r"), Some(BackgroundImage));
        assert_eq!(classify("bg-no-repeat"), Some(BackgroundRepeat));
    }

    #[test]
    fn interaction_and_motion_utilities() {
        assert_eq!(classify("cursor-pointer"), Some(Cursor));
        assert_eq!(classify("cursor-wait"), Some(Cursor));
        assert_eq!(classify("opacity-50"), Some(Opacity));
        assert_eq!(classify("pointer-events-none"), Some(PointerEvents));
        assert_eq!(classify("transition-colors"), Some(TransitionProperty));
        assert_eq!(classify("duration-200"), Some(Duration));
        assert_eq!(classify("ease-in-out"), Some(TimingFunction));
        assert_eq!(classify("scale-105"), Some(Scale));
        assert_eq!(classify("animate-spin"), Some(Animation));
    }

    #[test]
    fn rounded_corners_and_sides() {
        assert_eq!(classify("rounded"), Some(BorderRadius));
        assert_eq!(classify("rounded-lg"), Some(BorderRadius));
        assert_eq!(classify("rounded-full"), Some(BorderRadius));
        assert_eq!(classify("rounded-t-lg"), Some(RoundedTop));
        assert_eq!(classify("rounded-tl-md"), Some(RoundedTopLeft));
        assert_eq!(classify("rounded-l"), Some(RoundedLeft));
    }

    #[test]
    fn unrecognized_names_have_no_group() {
        assert_eq!(classify("brand-gradient"), None);
        assert_eq!(classify("text-foo"), None);
        assert_eq!(classify("bg-"), None);
        assert_eq!(classify("ui-button"), None);
        assert_eq!(classify("start-here"), None);
        assert_eq!(classify("border-"), None);
    }

    #[test]
    fn shorthand_groups_list_their_longhands() {
        assert!(Padding.overrides().contains(&PaddingX));
        assert!(PaddingX.overrides().contains(&PaddingLeft));
        assert!(!PaddingX.overrides().contains(&PaddingTop));
        assert!(BorderWidth.overrides().contains(&BorderWidthBottom));
        assert!(BackgroundColor.overrides().is_empty());
    }
}
