//! Static design-token palette compiled from `tokens.toml`.

use std::sync::OnceLock;

use serde_json::Value;

include!(concat!(env!("OUT_DIR"), "/design_tokens_generated.rs"));

fn tokens() -> &'static Value {
    static TOKENS: OnceLock<Value> = OnceLock::new();
    TOKENS.get_or_init(|| {
        serde_json::from_str(DESIGN_TOKENS_JSON)
            .expect("generated design token JSON should parse")
    })
}

/// Returns the full palette as pretty-printed JSON.
pub fn design_tokens_json() -> &'static str {
    DESIGN_TOKENS_JSON
}

/// Looks up a token by dotted path, e.g. `colors.brand.600` or `z_index.modal`.
///
/// Returns `None` for an empty path or any missing segment.
pub fn design_token(path: &str) -> Option<&'static Value> {
    if path.is_empty() {
        return None;
    }
    path.split('.')
        .try_fold(tokens(), |node, segment| node.get(segment))
}

/// Hex value of a palette shade such as (`brand`, `600`).
pub fn palette_color(family: &str, shade: &str) -> Option<&'static str> {
    tokens().get("colors")?.get(family)?.get(shade)?.as_str()
}

/// Stacking order for a named layer.
pub fn z_index(layer: &str) -> Option<u64> {
    tokens().get("z_index")?.get(layer)?.as_u64()
}

/// Minimum viewport width in pixels for a named breakpoint.
pub fn breakpoint_px(name: &str) -> Option<u64> {
    tokens().get("breakpoints")?.get(name)?.as_u64()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn brand_palette_is_available() {
        assert_eq!(palette_color("brand", "600"), Some("#248239"));
        assert_eq!(palette_color("neutral", "50"), Some("#fafafa"));
        assert_eq!(palette_color("brand", "650"), None);
        assert_eq!(palette_color("teal", "500"), None);
    }

    #[test]
    fn layers_and_breakpoints_resolve_to_numbers() {
        assert_eq!(z_index("modal"), Some(1040));
        assert_eq!(z_index("toast"), Some(1070));
        assert_eq!(breakpoint_px("md"), Some(768));
        assert_eq!(breakpoint_px("2xl"), Some(1536));
        assert_eq!(breakpoint_px("3xl"), None);
    }

    #[test]
    fn dotted_paths_walk_nested_tables() {
        assert_eq!(
            design_token("colors.brand.500").and_then(Value::as_str),
            Some("#2b9348")
        );
        assert_eq!(
            design_token("font_family.sans")
                .and_then(Value::as_array)
                .and_then(|stack| stack.first())
                .and_then(Value::as_str),
            Some("Inter")
        );
        assert!(design_token("").is_none());
        assert!(design_token("colors.brand.").is_none());
        assert!(design_token("spacing.4").is_none());
    }

    #[test]
    fn exported_json_matches_schema_version() {
        let parsed: Value = serde_json::from_str(design_tokens_json()).expect("json");
        assert_eq!(parsed["schema_version"], Value::from(1));
    }
}
