use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DesignTokenFile {
    schema_version: u32,
    colors: BTreeMap<String, BTreeMap<String, String>>,
    font_family: BTreeMap<String, Vec<String>>,
    z_index: BTreeMap<String, u32>,
    breakpoints: BTreeMap<String, u32>,
}

fn is_hex_color(raw: &str) -> bool {
    raw.len() == 7
        && raw.starts_with('#')
        && raw[1..].bytes().all(|b| b.is_ascii_hexdigit())
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("tokens.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let tokens: DesignTokenFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if tokens.schema_version != 1 {
        panic!(
            "design token schema mismatch in {}: expected 1 found {}",
            path.display(),
            tokens.schema_version
        );
    }
    for (family, shades) in &tokens.colors {
        for (shade, value) in shades {
            if shade.parse::<u32>().is_err() {
                panic!("color shade `{family}.{shade}` in {} is not numeric", path.display());
            }
            if !is_hex_color(value) {
                panic!(
                    "color `{family}.{shade}` in {} must be #rrggbb, found `{value}`",
                    path.display()
                );
            }
        }
    }

    let json = serde_json::to_string_pretty(&tokens).expect("serialize design tokens");
    let generated = format!(
        "/// Build-time generated design token JSON.\n\
pub const DESIGN_TOKENS_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("design_tokens_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
