//! Page sections in their fixed vertical order.

use leptos::ev::MouseEvent;
use leptos::*;
use system_ui::prelude::*;

use crate::actions::{dispatch, LandingAction};
use crate::content::landing_content;
use crate::scroll::{scroll_to, scroll_to_anchor};

mod features;
mod footer;
mod header;
mod hero;
mod pricing;

pub use features::FeaturesSection;
pub use footer::Footer;
pub use header::Header;
pub use hero::HeroSection;
pub use pricing::{tier_card_class, PricingSection};

/// Maximum width shared by every section body.
const SECTION_WIDTH: ContainerWidth = ContainerWidth::Xxl;

fn action_callback(action: LandingAction) -> Callback<MouseEvent> {
    Callback::new(move |_| dispatch(&action))
}
