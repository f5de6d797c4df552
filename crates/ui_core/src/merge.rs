//! Class-name merging with utility-group conflict resolution.
//!
//! Sources are flattened to whitespace-separated tokens in argument order. Scanning from the end,
//! each token claims its conflict key (modifiers + important marker + utility group) and the keys
//! of every group it overrides. Earlier tokens whose key is already claimed are dropped, so the
//! last class written for a property wins while surviving tokens keep their relative order.

use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::config::MergeConfig;
use crate::groups::{builtin_conflicts, classify_builtin, prefixed_value, Classified, ParsedClass};

#[derive(Debug, Clone, PartialEq, Eq)]
/// One argument to a class merge.
pub enum ClassSource<'a> {
    /// Space-separated class names, all included.
    Literal(Cow<'a, str>),
    /// Class names paired with an inclusion flag.
    Conditional(Vec<(Cow<'a, str>, bool)>),
    /// Nothing to include.
    Absent,
}

impl<'a> ClassSource<'a> {
    fn push_tokens<'s>(&'s self, out: &mut Vec<&'s str>) {
        match self {
            Self::Literal(classes) => out.extend(classes.split_whitespace()),
            Self::Conditional(entries) => {
                for (classes, included) in entries {
                    if *included {
                        out.extend(classes.split_whitespace());
                    }
                }
            }
            Self::Absent => {}
        }
    }
}

impl<'a> From<&'a str> for ClassSource<'a> {
    fn from(classes: &'a str) -> Self {
        Self::Literal(Cow::Borrowed(classes))
    }
}

impl<'a> From<&'a String> for ClassSource<'a> {
    fn from(classes: &'a String) -> Self {
        Self::Literal(Cow::Borrowed(classes.as_str()))
    }
}

impl From<String> for ClassSource<'_> {
    fn from(classes: String) -> Self {
        Self::Literal(Cow::Owned(classes))
    }
}

impl<'a> From<Cow<'a, str>> for ClassSource<'a> {
    fn from(classes: Cow<'a, str>) -> Self {
        Self::Literal(classes)
    }
}

impl<'a, T> From<Option<T>> for ClassSource<'a>
where
    T: Into<ClassSource<'a>>,
{
    fn from(source: Option<T>) -> Self {
        source.map_or(Self::Absent, Into::into)
    }
}

impl<'a> From<(&'a str, bool)> for ClassSource<'a> {
    fn from((classes, included): (&'a str, bool)) -> Self {
        Self::Conditional(vec![(Cow::Borrowed(classes), included)])
    }
}

impl<'a> From<Vec<(&'a str, bool)>> for ClassSource<'a> {
    fn from(entries: Vec<(&'a str, bool)>) -> Self {
        Self::Conditional(
            entries
                .into_iter()
                .map(|(classes, included)| (Cow::Borrowed(classes), included))
                .collect(),
        )
    }
}

impl<'a> From<&'a [(&'a str, bool)]> for ClassSource<'a> {
    fn from(entries: &'a [(&'a str, bool)]) -> Self {
        Self::Conditional(
            entries
                .iter()
                .map(|(classes, included)| (Cow::Borrowed(*classes), *included))
                .collect(),
        )
    }
}

impl<'a, const N: usize> From<[(&'a str, bool); N]> for ClassSource<'a> {
    fn from(entries: [(&'a str, bool); N]) -> Self {
        Self::from(Vec::from(entries))
    }
}

/// Merges class sources with the built-in group table.
///
/// ```rust
/// use ui_core::merge_classes;
///
/// assert_eq!(merge_classes(["px-2 py-1 bg-red-500", "p-3 bg-[#B91C1C]"]), "p-3 bg-[#B91C1C]");
/// ```
pub fn merge_classes<'a, I>(sources: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassSource<'a>>,
{
    ClassMerger::shared().merge(sources)
}

/// Merges any mix of class sources: strings, `Option`s, and `(class, bool)` conditions.
///
/// ```rust
/// use ui_core::cn;
///
/// let disabled = true;
/// let class = cn!("px-4 opacity-100", ("opacity-50", disabled), None::<&str>);
/// assert_eq!(class, "px-4 opacity-50");
/// ```
#[macro_export]
macro_rules! cn {
    () => {
        ::std::string::String::new()
    };
    ($($source:expr),+ $(,)?) => {
        $crate::merge_classes([$($crate::ClassSource::from($source)),+])
    };
}

#[derive(Debug, Clone, Default)]
/// Class merger with optional project-specific groups.
pub struct ClassMerger {
    config: MergeConfig,
}

impl ClassMerger {
    /// Creates a merger extended by `config`.
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    /// Process-wide merger using only the built-in groups.
    pub fn shared() -> &'static Self {
        static SHARED: OnceLock<ClassMerger> = OnceLock::new();
        SHARED.get_or_init(Self::default)
    }

    /// Extension config in use.
    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Classifies a full class name (modifiers allowed) into its utility group.
    pub fn classify<'a>(&self, class: &'a str) -> Option<Classified<'a>> {
        self.classify_base(ParsedClass::parse(class).base)
    }

    /// Merges sources into one class string.
    pub fn merge<'a, I>(&self, sources: I) -> String
    where
        I: IntoIterator,
        I::Item: Into<ClassSource<'a>>,
    {
        let sources: Vec<ClassSource<'a>> = sources.into_iter().map(Into::into).collect();
        let mut tokens = Vec::new();
        for source in &sources {
            source.push_tokens(&mut tokens);
        }
        self.merge_tokens(&tokens)
    }

    fn merge_tokens(&self, tokens: &[&str]) -> String {
        let mut claimed: HashSet<String> = HashSet::with_capacity(tokens.len());
        let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());

        for token in tokens.iter().rev() {
            let parsed = ParsedClass::parse(token);
            let scope = parsed.scope();

            match self.classify_base(parsed.base) {
                Some(classified) => {
                    if !claimed.insert(format!("{scope}{}", classified.group)) {
                        continue;
                    }
                    for conflict in self.conflicts_of(&classified.group) {
                        claimed.insert(format!("{scope}{conflict}"));
                    }
                }
                None => {
                    let sign = if parsed.negative { "-" } else { "" };
                    if !claimed.insert(format!("{scope}={sign}{}", parsed.base)) {
                        continue;
                    }
                }
            }
            kept.push(*token);
        }

        kept.reverse();
        kept.join(" ")
    }

    fn classify_base<'a>(&self, base: &'a str) -> Option<Classified<'a>> {
        for group in &self.config.groups {
            if group.classes.iter().any(|class| class == base) {
                return Some(Classified {
                    group: Cow::Owned(group.id.clone()),
                    value: "",
                });
            }
            let value = group
                .prefixes
                .iter()
                .find_map(|prefix| prefixed_value(base, prefix).filter(|value| !value.is_empty()));
            if let Some(value) = value {
                return Some(Classified {
                    group: Cow::Owned(group.id.clone()),
                    value,
                });
            }
        }

        if let Some(value) = prefixed_value(base, "text") {
            let size = value.split_once('/').map_or(value, |(size, _)| size);
            if self.config.font_sizes.iter().any(|known| known == size) {
                return Some(Classified {
                    group: Cow::Borrowed("font-size"),
                    value,
                });
            }
        }

        classify_builtin(base)
    }

    fn conflicts_of<'s>(&'s self, group: &str) -> impl Iterator<Item = &'s str> {
        let configured = self
            .config
            .conflicts
            .get(group)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        builtin_conflicts(group)
            .iter()
            .copied()
            .chain(configured.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::CustomGroup;

    #[test]
    fn later_class_wins_within_a_group() {
        assert_eq!(merge_classes(["bg-red-500", "bg-blue-500"]), "bg-blue-500");
        assert_eq!(merge_classes(["p-2 text-sm", "p-4"]), "text-sm p-4");
    }

    #[test]
    fn shorthand_overrides_earlier_longhands_but_not_later_ones() {
        assert_eq!(merge_classes(["px-2 py-1", "p-4"]), "p-4");
        assert_eq!(merge_classes(["p-4", "px-2"]), "p-4 px-2");
        assert_eq!(merge_classes(["top-2 left-1", "inset-0"]), "inset-0");
        assert_eq!(merge_classes(["rounded-t-md", "rounded-lg"]), "rounded-lg");
    }

    #[test]
    fn different_property_families_under_one_prefix_coexist() {
        assert_eq!(
            merge_classes(["border border-transparent text-xs text-base-on-solid"]),
            "border border-transparent text-xs text-base-on-solid"
        );
        assert_eq!(
            merge_classes(["ring-2 ring-ring ring-offset-2 ring-offset-background"]),
            "ring-2 ring-ring ring-offset-2 ring-offset-background"
        );
    }

    #[test]
    fn grid_list_and_break_utilities_only_drop_real_conflicts() {
        assert_eq!(merge_classes(["col-span-2 col-start-1"]), "col-span-2 col-start-1");
        assert_eq!(merge_classes(["row-span-2 row-start-1"]), "row-span-2 row-start-1");
        assert_eq!(merge_classes(["col-start-1 col-end-3", "col-span-2"]), "col-span-2");
        assert_eq!(merge_classes(["list-disc list-inside"]), "list-disc list-inside");
        assert_eq!(merge_classes(["list-disc", "list-decimal"]), "list-decimal");
        assert_eq!(
            merge_classes(["break-words break-after-page break-inside-avoid"]),
            "break-words break-after-page break-inside-avoid"
        );
        assert_eq!(merge_classes(["break-words", "break-all"]), "break-all");
        assert_eq!(
            merge_classes(["touch-pan-x touch-pan-y", "touch-none"]),
            "touch-none"
        );
    }

    #[test]
    fn modifiers_scope_conflicts() {
        assert_eq!(
            merge_classes(["bg-primary-solid hover:bg-primary-solid-hover", "hover:bg-base-solid"]),
            "bg-primary-solid hover:bg-base-solid"
        );
        assert_eq!(
            merge_classes(["hover:focus:p-2", "focus:hover:p-4"]),
            "focus:hover:p-4"
        );
        assert_eq!(
            merge_classes(["data-[state=open]:bg-muted data-[state=closed]:bg-background"]),
            "data-[state=open]:bg-muted data-[state=closed]:bg-background"
        );
    }

    #[test]
    fn important_classes_only_conflict_with_important_classes() {
        assert_eq!(merge_classes(["!p-2 p-4"]), "!p-2 p-4");
        assert_eq!(merge_classes(["!p-2 p-4!"]), "p-4!");
    }

    #[test]
    fn negative_values_share_the_positive_group() {
        assert_eq!(merge_classes(["-mt-2", "mt-4"]), "mt-4");
        assert_eq!(merge_classes(["translate-x-2", "-translate-x-1/2"]), "-translate-x-1/2");
    }

    #[test]
    fn unknown_classes_are_deduplicated_exactly() {
        assert_eq!(merge_classes(["peer group", "peer"]), "group peer");
        assert_eq!(
            merge_classes(["fade-in-0 zoom-in-95", "fade-in-0"]),
            "zoom-in-95 fade-in-0"
        );
    }

    #[test]
    fn font_size_overrides_earlier_leading() {
        assert_eq!(merge_classes(["leading-none", "text-lg"]), "text-lg");
        assert_eq!(merge_classes(["text-lg", "leading-none"]), "text-lg leading-none");
    }

    #[test]
    fn conditional_and_absent_sources_are_filtered() {
        let active = false;
        let class = cn!(
            "inline-flex",
            None::<&str>,
            [("font-bold", true), ("underline", active)],
            Some(String::from("px-2")),
        );
        assert_eq!(class, "inline-flex font-bold px-2");
        assert_eq!(cn!(), "");
    }

    #[test]
    fn whitespace_is_normalized() {
        assert_eq!(merge_classes(["  flex\n\titems-center  ", ""]), "flex items-center");
    }

    #[test]
    fn merging_is_idempotent() {
        let once = merge_classes(["px-2 py-1 hover:bg-red-500 text-sm", "p-3 hover:bg-blue-500 peer"]);
        assert_eq!(merge_classes([once.as_str()]), once);
    }

    #[test]
    fn custom_groups_and_conflicts_extend_the_table() {
        let merger = ClassMerger::new(MergeConfig {
            groups: vec![CustomGroup {
                id: "elevation".to_string(),
                classes: Vec::new(),
                prefixes: vec!["elevation".to_string()],
            }],
            conflicts: [("elevation".to_string(), vec!["shadow".to_string()])]
                .into_iter()
                .collect(),
            font_sizes: vec!["caption".to_string()],
        });

        assert_eq!(merger.merge(["elevation-1", "elevation-3"]), "elevation-3");
        assert_eq!(merger.merge(["shadow-md", "elevation-2"]), "elevation-2");
        assert_eq!(merger.merge(["text-sm", "text-caption"]), "text-caption");
        assert_eq!(
            ClassMerger::shared().merge(["text-sm", "text-caption"]),
            "text-sm text-caption"
        );
    }

    #[test]
    fn classify_reports_group_and_value_for_full_class_names() {
        let classified = ClassMerger::shared()
            .classify("hover:bg-base-solid-hover")
            .expect("classified");
        assert_eq!(classified.group, "bg-color");
        assert_eq!(classified.value, "base-solid-hover");
        assert!(classified.is_color());
    }
}
