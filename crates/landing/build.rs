use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const ICON_COLORS: &[&str] = &[
    "primary",
    "secondary",
    "success",
    "warning",
    "error",
    "neutral",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Link {
    label: String,
    href: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct HeroCopy {
    headline_lead: String,
    headline_accent: String,
    subheadline: String,
    primary_cta: String,
    secondary_cta: String,
    pricing_link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SectionIntro {
    title: String,
    summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Feature {
    id: String,
    title: String,
    description: String,
    icon_color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PricingNotes {
    trial: String,
    custom_plan: String,
    contact_sales: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PricingTier {
    id: String,
    name: String,
    price: u32,
    period: String,
    features: Vec<String>,
    #[serde(default)]
    popular: bool,
    button_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FooterSection {
    title: String,
    links: Vec<Link>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LandingContentFile {
    schema_version: u32,
    brand: String,
    tagline: String,
    nav: Vec<Link>,
    hero: HeroCopy,
    features_intro: SectionIntro,
    features: Vec<Feature>,
    pricing_intro: SectionIntro,
    pricing_notes: PricingNotes,
    pricing: Vec<PricingTier>,
    footer: Vec<FooterSection>,
}

fn ensure_unique<'a>(kind: &str, ids: impl IntoIterator<Item = &'a str>, path: &Path) {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            panic!("duplicate {kind} id `{id}` in {}", path.display());
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("content.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let content: LandingContentFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if content.schema_version != 1 {
        panic!(
            "landing content schema mismatch in {}: expected 1 found {}",
            path.display(),
            content.schema_version
        );
    }

    ensure_unique(
        "feature",
        content.features.iter().map(|feature| feature.id.as_str()),
        &path,
    );
    ensure_unique(
        "pricing tier",
        content.pricing.iter().map(|tier| tier.id.as_str()),
        &path,
    );
    for feature in &content.features {
        if !ICON_COLORS.contains(&feature.icon_color.as_str()) {
            panic!(
                "feature `{}` in {} has unknown icon_color `{}`",
                feature.id,
                path.display(),
                feature.icon_color
            );
        }
    }
    for tier in &content.pricing {
        if tier.features.is_empty() {
            panic!(
                "pricing tier `{}` in {} lists no features",
                tier.id,
                path.display()
            );
        }
    }
    if content.pricing.iter().filter(|tier| tier.popular).count() > 1 {
        panic!("more than one popular pricing tier in {}", path.display());
    }

    let json = serde_json::to_string_pretty(&content).expect("serialize landing content");
    let generated = format!(
        "/// Build-time generated landing content JSON.\n\
pub const LANDING_CONTENT_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("landing_content_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
