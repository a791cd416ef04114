use class_merge::{merge, merge_classes};
use proptest::prelude::*;

const POOL: &[&str] = &[
    "p-2",
    "p-4",
    "px-2",
    "px-6",
    "py-1",
    "pt-3",
    "m-2",
    "mx-auto",
    "-ml-1",
    "bg-green-600",
    "bg-neutral-900",
    "bg-white",
    "text-white",
    "text-green-600",
    "text-sm",
    "text-xl",
    "text-center",
    "leading-tight",
    "border",
    "border-2",
    "border-b",
    "border-green-600",
    "border-dashed",
    "rounded",
    "rounded-t-lg",
    "rounded-tl-md",
    "ring-2",
    "ring-green-500",
    "shadow-lg",
    "shadow-none",
    "w-full",
    "size-4",
    "h-8",
    "opacity-50",
    "cursor-wait",
    "cursor-pointer",
    "flex",
    "hidden",
    "!p-6",
    "[mask-type:alpha]",
    "brand-gradient",
    "custom-x",
    "ui-card",
];

const MODIFIERS: &[&str] = &["", "", "", "md:", "hover:", "focus:", "md:hover:", "hover:md:"];

fn class_token() -> impl Strategy<Value = String> {
    (prop::sample::select(MODIFIERS), prop::sample::select(POOL))
        .prop_map(|(modifier, class)| format!("{modifier}{class}"))
}

fn class_string() -> impl Strategy<Value = String> {
    prop::collection::vec(class_token(), 0..24).prop_map(|tokens| tokens.join(" "))
}

proptest! {
    #[test]
    fn merged_output_is_a_fixed_point(input in class_string()) {
        let merged = merge_classes(&input);
        prop_assert_eq!(merge_classes(&merged), merged.clone());
    }

    #[test]
    fn merging_output_with_itself_does_not_grow(input in class_string()) {
        let merged = merge_classes(&input);
        let doubled = format!("{merged} {merged}");
        prop_assert_eq!(merge_classes(&doubled), merged);
    }

    #[test]
    fn resolution_is_deterministic(input in class_string()) {
        prop_assert_eq!(merge_classes(&input), merge_classes(&input));
    }

    #[test]
    fn output_tokens_are_unique_and_drawn_from_input(input in class_string()) {
        let merged = merge_classes(&input);
        let tokens: Vec<&str> = merged.split_whitespace().collect();
        let mut seen = std::collections::HashSet::new();
        for token in &tokens {
            prop_assert!(seen.insert(*token), "duplicate token {token}");
            prop_assert!(input.split_whitespace().any(|raw| raw == *token));
        }
    }

    #[test]
    fn unknown_override_survives_exactly_once(input in class_string(), repeats in 1usize..4) {
        let override_classes = vec!["landing-hero-glow"; repeats].join(" ");
        let merged = merge(
            [input.as_str(), override_classes.as_str()]
                .into_iter()
                .flat_map(str::split_whitespace),
        );
        prop_assert_eq!(
            merged.split_whitespace().filter(|token| *token == "landing-hero-glow").count(),
            1
        );
    }

    #[test]
    fn breakpoint_override_never_evicts_base_token(input in class_string()) {
        let with_base = format!("{input} bg-red-500");
        let with_override = format!("{with_base} md:bg-blue-500");
        let merged = merge_classes(&with_override);
        prop_assert!(merged.split_whitespace().any(|token| token == "bg-red-500"));
        prop_assert!(merged.split_whitespace().any(|token| token == "md:bg-blue-500"));
    }

    #[test]
    fn padding_override_leaves_background_untouched(input in class_string()) {
        let base = format!("{input} bg-emerald-600");
        let merged = merge_classes(&format!("{base} px-10"));
        prop_assert!(merged.split_whitespace().any(|token| token == "bg-emerald-600"));
        prop_assert!(merged.split_whitespace().any(|token| token == "px-10"));
    }
}
