//! Semantic style keys, their utility-class lookup tables, and the static
//! design-token palette.
//!
//! Every table is an exhaustive `match` over a closed key enum, so an unknown
//! key cannot reach a lookup; parsing from text happens once at the edge through
//! `FromStr` (or serde) and reports [`TokenParseError`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod error;
mod keys;
mod palette;
pub mod tables;

pub use error::TokenParseError;
pub use keys::{
    BadgeVariant, ButtonVariant, CardVariant, ColorVariant, ContainerWidth, FontWeight, Size,
    TextAlign, TextColor,
};
pub use palette::{breakpoint_px, design_token, design_tokens_json, palette_color, z_index};
