//! Property tests for the class merger.
//!
//! 1. Merging is deterministic.
//! 2. Merging is idempotent.
//! 3. Every class surviving a merge of the override alone survives `merge(base, override)`.
//! 4. Output tokens are unique and appear in input order.

use proptest::prelude::*;
use ui_core::merge_classes;

const UTILITIES: &[&str] = &[
    "p-2", "p-4", "px-3", "py-1", "pt-0", "m-1", "mx-auto", "-mt-2", "mt-4", "h-9", "w-full",
    "size-4", "text-sm", "text-lg", "text-foreground", "text-muted-foreground", "text-center",
    "leading-none", "font-medium", "font-semibold", "bg-background", "bg-primary-solid",
    "bg-[#102030]", "border", "border-2", "border-input", "border-transparent", "rounded-md",
    "rounded-t-lg", "ring-2", "ring-ring", "ring-offset-2", "ring-offset-background", "shadow-sm",
    "opacity-50", "flex", "inline-flex", "hidden", "items-center", "justify-between", "gap-2",
    "inset-0", "top-4", "left-2", "translate-x-1/2", "peer", "group", "fade-in-0", "zoom-in-95",
    "[mask-type:alpha]",
];

const MODIFIERS: &[&str] = &["", "hover:", "focus-visible:", "data-[state=open]:", "sm:hover:"];

fn class_strategy() -> impl Strategy<Value = String> {
    (
        proptest::sample::select(MODIFIERS),
        proptest::sample::select(UTILITIES),
        any::<bool>(),
    )
        .prop_map(|(modifier, utility, important)| {
            let mark = if important { "!" } else { "" };
            format!("{modifier}{mark}{utility}")
        })
}

fn class_list() -> impl Strategy<Value = String> {
    proptest::collection::vec(class_strategy(), 0..12).prop_map(|classes| classes.join(" "))
}

proptest! {
    #[test]
    fn merge_is_deterministic(base in class_list(), extra in class_list()) {
        prop_assert_eq!(
            merge_classes([base.as_str(), extra.as_str()]),
            merge_classes([base.as_str(), extra.as_str()])
        );
    }

    #[test]
    fn merge_is_idempotent(base in class_list(), extra in class_list()) {
        let once = merge_classes([base.as_str(), extra.as_str()]);
        prop_assert_eq!(merge_classes([once.as_str()]), once.clone());
    }

    #[test]
    fn override_classes_survive(base in class_list(), extra in class_list()) {
        let merged = merge_classes([base.as_str(), extra.as_str()]);
        let merged_tokens: Vec<&str> = merged.split(' ').collect();
        let alone = merge_classes([extra.as_str()]);
        for token in alone.split_whitespace() {
            prop_assert!(merged_tokens.contains(&token), "{token} dropped from {merged}");
        }
    }

    #[test]
    fn output_is_an_ordered_unique_subsequence(base in class_list(), extra in class_list()) {
        let input: Vec<&str> = base.split_whitespace().chain(extra.split_whitespace()).collect();
        let merged = merge_classes([base.as_str(), extra.as_str()]);
        let output: Vec<&str> = merged.split_whitespace().collect();

        let mut seen = std::collections::HashSet::new();
        for token in &output {
            prop_assert!(seen.insert(*token), "duplicate {token} in {merged}");
        }

        let mut cursor = input.iter();
        for token in &output {
            prop_assert!(cursor.any(|candidate| candidate == token), "{token} out of order in {merged}");
        }
    }
}
