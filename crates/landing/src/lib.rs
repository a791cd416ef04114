//! Marketing landing page composed from the `system_ui` components.
//!
//! Copy and catalog data (features, pricing tiers, footer links) live in
//! `content.toml` and are compiled in by the build script. Calls to action are
//! logging stubs; anchor navigation scrolls smoothly and ignores missing
//! targets.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod actions;
pub mod content;
mod page;
pub mod scroll;
mod sections;

pub use actions::{dispatch, LandingAction};
pub use content::{landing_content, LandingContent};
pub use page::LandingPage;
pub use scroll::{scroll_to, scroll_to_anchor};
pub use sections::{tier_card_class, FeaturesSection, Footer, Header, HeroSection, PricingSection};
