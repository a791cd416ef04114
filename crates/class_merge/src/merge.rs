//! Conflict-aware merging of normalized class tokens.

use std::collections::{HashMap, HashSet};

use crate::token::{ClassToken, GroupId};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ConflictKey<'a> {
    context: String,
    important: bool,
    group: GroupId<'a>,
}

/// Merges class tokens so each property group keeps only its last token.
///
/// Every conflict key (property group within one modifier context) and every
/// distinct unrecognized token owns one output slot, positioned where it first
/// appeared. A later token of the same key replaces the slot's winner.
/// Unrecognized tokens only collapse with exact duplicates of themselves.
///
/// A shorthand utility (`p-4`) also clears the longhands it covers (`px-2`,
/// `pt-1`) within its context. A cleared longhand slot placed after the
/// shorthand's slot stays reserved for a later refill; one placed before it is
/// retired, so a later longhand opens a new slot at the end. Surviving
/// longhands therefore always follow the shorthand they refine, which keeps
/// `merge(merge(x))` and `merge(m ++ m)` equal to `merge(x)`.
pub fn merge<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut slots: Vec<Option<&'a str>> = Vec::new();
    let mut grouped: HashMap<ConflictKey<'a>, usize> = HashMap::new();
    let mut ungrouped: HashSet<&'a str> = HashSet::new();

    for raw in tokens {
        if raw.is_empty() {
            continue;
        }
        let token = ClassToken::parse(raw);
        let Some(group) = token.group() else {
            if ungrouped.insert(raw) {
                slots.push(Some(raw));
            }
            continue;
        };

        let key = ConflictKey {
            context: token.context(),
            important: token.is_important(),
            group,
        };
        let existing = grouped.get(&key).copied();
        let target = existing.unwrap_or(slots.len());

        if let GroupId::Property(property) = group {
            for covered in property.overrides() {
                let covered_key = ConflictKey {
                    group: GroupId::Property(*covered),
                    ..key.clone()
                };
                let Some(&index) = grouped.get(&covered_key) else {
                    continue;
                };
                slots[index] = None;
                if index < target {
                    grouped.remove(&covered_key);
                }
            }
        }

        match existing {
            Some(index) => slots[index] = Some(raw),
            None => {
                grouped.insert(key, target);
                slots.push(Some(raw));
            }
        }
    }

    slots.into_iter().flatten().collect::<Vec<_>>().join(" ")
}

/// Merges a single whitespace-separated class string.
pub fn merge_classes(classes: &str) -> String {
    merge(classes.split_whitespace())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn later_token_in_same_group_wins() {
        assert_eq!(merge_classes("px-2 py-1 bg-red-500 px-4"), "px-4 py-1 bg-red-500");
    }

    #[test]
    fn unrelated_groups_are_left_alone() {
        assert_eq!(
            merge_classes("bg-green-600 text-white px-4 px-8"),
            "bg-green-600 text-white px-8"
        );
    }

    #[test]
    fn text_color_and_font_size_do_not_conflict() {
        assert_eq!(
            merge_classes("text-lg text-green-600 text-sm text-red-600 text-center"),
            "text-sm text-red-600 text-center"
        );
    }

    #[test]
    fn modifiers_scope_conflicts() {
        assert_eq!(
            merge_classes("bg-green-600 hover:bg-green-700 bg-neutral-900"),
            "bg-neutral-900 hover:bg-green-700"
        );
        assert_eq!(
            merge_classes("text-4xl md:text-6xl text-5xl"),
            "text-5xl md:text-6xl"
        );
        assert_eq!(
            merge_classes("hover:focus:bg-red-500 focus:hover:bg-blue-500"),
            "focus:hover:bg-blue-500"
        );
    }

    #[test]
    fn shorthand_clears_previous_longhands() {
        assert_eq!(merge_classes("px-2 pt-1 p-4"), "p-4");
        assert_eq!(merge_classes("p-4 px-2"), "p-4 px-2");
        assert_eq!(merge_classes("px-2 p-4 px-6"), "p-4 px-6");
        assert_eq!(merge_classes("md:px-2 p-4"), "md:px-2 p-4");
    }

    #[test]
    fn border_width_and_color_resolve_independently() {
        assert_eq!(
            merge_classes("border border-green-600 border-2 border-neutral-300"),
            "border-2 border-neutral-300"
        );
        assert_eq!(merge_classes("border-b border-0"), "border-0");
    }

    #[test]
    fn arbitrary_color_overrides_keep_the_width() {
        assert_eq!(merge_classes("border-2 border-[#f00]"), "border-2 border-[#f00]");
        assert_eq!(merge_classes("ring-2 ring-[#f00]"), "ring-2 ring-[#f00]");
        assert_eq!(
            merge_classes("outline-2 outline-[rgb(0,0,0)]"),
            "outline-2 outline-[rgb(0,0,0)]"
        );
        assert_eq!(
            merge_classes("border border-neutral-300 border-[#ff0000]"),
            "border border-[#ff0000]"
        );
    }

    #[test]
    fn font_size_clears_an_earlier_line_height() {
        assert_eq!(merge_classes("leading-tight text-sm"), "text-sm");
        assert_eq!(merge_classes("text-sm leading-tight"), "text-sm leading-tight");
    }

    #[test]
    fn important_tokens_keep_their_own_slot() {
        assert_eq!(merge_classes("!p-2 p-4 !p-6"), "!p-6 p-4");
    }

    #[test]
    fn unknown_tokens_pass_through_once_at_first_position() {
        assert_eq!(
            merge_classes("brand-gradient py-20 brand-gradient custom-x"),
            "brand-gradient py-20 custom-x"
        );
    }

    #[test]
    fn negative_and_positive_values_share_a_group() {
        assert_eq!(merge_classes("ml-2 -ml-1"), "-ml-1");
    }

    #[test]
    fn arbitrary_properties_conflict_by_property_name() {
        assert_eq!(
            merge_classes("[mask-type:luminance] [mask-type:alpha] [color:red]"),
            "[mask-type:alpha] [color:red]"
        );
    }

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(merge_classes(""), "");
        assert_eq!(merge(["", ""]), "");
    }

    #[test]
    fn merging_merged_output_with_itself_is_stable() {
        let merged = merge_classes("a p-6 px-4 b md:p-2 hover:bg-red-500 a");
        let doubled = format!("{merged} {merged}");
        assert_eq!(merge_classes(&doubled), merged);
    }
}
