//! Landing copy and catalog data compiled from `content.toml`.

use std::sync::OnceLock;

use design_tokens::ColorVariant;
use serde::{Deserialize, Serialize};

include!(concat!(env!("OUT_DIR"), "/landing_content_generated.rs"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Text link.
pub struct Link {
    /// Visible label.
    pub label: String,
    /// Target URL or in-page `#anchor`.
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Hero banner copy.
pub struct HeroCopy {
    /// First headline line.
    pub headline_lead: String,
    /// Brand-colored headline continuation.
    pub headline_accent: String,
    /// Supporting paragraph.
    pub subheadline: String,
    /// Primary call to action.
    pub primary_cta: String,
    /// Secondary call to action.
    pub secondary_cta: String,
    /// Link text that scrolls to pricing.
    pub pricing_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Section heading and summary line.
pub struct SectionIntro {
    /// Section heading.
    pub title: String,
    /// Supporting sentence below the heading.
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Product feature card.
pub struct Feature {
    /// Stable identifier.
    pub id: String,
    /// Card heading.
    pub title: String,
    /// Card body.
    pub description: String,
    /// Placeholder icon color.
    pub icon_color: ColorVariant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Notes shown under the pricing tiers.
pub struct PricingNotes {
    /// Free-trial note.
    pub trial: String,
    /// Custom plan prompt.
    pub custom_plan: String,
    /// Sales contact action label.
    pub contact_sales: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Subscription plan.
pub struct PricingTier {
    /// Stable plan identifier passed to plan selection.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Price in whole dollars per period.
    pub price: u32,
    /// Billing period, e.g. `month`.
    pub period: String,
    /// Included features in display order.
    pub features: Vec<String>,
    /// Highlighted as the recommended plan.
    #[serde(default)]
    pub popular: bool,
    /// Call-to-action label.
    pub button_text: String,
}

impl PricingTier {
    /// Formats the price, e.g. `$29`.
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }

    /// Formats the billing period suffix, e.g. `/month`.
    pub fn period_label(&self) -> String {
        format!("/{}", self.period)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Titled column of footer links.
pub struct FooterSection {
    /// Column heading.
    pub title: String,
    /// Links in display order.
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// All landing page content.
pub struct LandingContent {
    /// Content schema version.
    pub schema_version: u32,
    /// Product name shown in the header and footer.
    pub brand: String,
    /// Footer blurb.
    pub tagline: String,
    /// Header navigation anchors.
    pub nav: Vec<Link>,
    /// Hero banner copy.
    pub hero: HeroCopy,
    /// Features section heading.
    pub features_intro: SectionIntro,
    /// Feature cards in display order.
    pub features: Vec<Feature>,
    /// Pricing section heading.
    pub pricing_intro: SectionIntro,
    /// Notes under the pricing tiers.
    pub pricing_notes: PricingNotes,
    /// Pricing tiers in display order.
    pub pricing: Vec<PricingTier>,
    /// Footer link columns.
    pub footer: Vec<FooterSection>,
}

impl LandingContent {
    /// Finds a pricing tier by id.
    pub fn pricing_tier(&self, id: &str) -> Option<&PricingTier> {
        self.pricing.iter().find(|tier| tier.id == id)
    }

    /// Footer copyright line for `year`.
    pub fn copyright_notice(&self, year: u32) -> String {
        format!("© {year} {}. All rights reserved.", self.brand)
    }
}

/// Returns the compiled landing content.
pub fn landing_content() -> &'static LandingContent {
    static CONTENT: OnceLock<LandingContent> = OnceLock::new();
    CONTENT.get_or_init(|| {
        serde_json::from_str(LANDING_CONTENT_JSON)
            .expect("generated landing content should parse")
    })
}
