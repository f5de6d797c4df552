use super::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Badge emphasis.
pub enum BadgeVariant {
    /// Primary solid badge.
    #[default]
    Default,
    /// Neutral solid badge.
    Secondary,
    /// Destructive solid badge.
    Destructive,
    /// Bordered badge with no fill.
    Outline,
}

impl VariantToken for BadgeVariant {
    const AXIS: &'static str = "variant";
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::Secondary,
        Self::Destructive,
        Self::Outline,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
        }
    }
}

/// Badge variant table.
pub const BADGE: VariantSpec = VariantSpec::new(
    "inline-flex items-center rounded-md border px-2.5 py-0.5 text-xs font-semibold transition-colors focus:outline-none focus:ring-2 focus:ring-ring focus:ring-offset-2",
    &[VariantAxis::new(
        "variant",
        "default",
        &[
            (
                "default",
                "border-transparent bg-primary-solid text-primary-on-solid hover:bg-primary-solid-hover",
            ),
            (
                "secondary",
                "border-transparent bg-base-solid text-base-on-solid hover:bg-base-solid-hover",
            ),
            (
                "destructive",
                "border-transparent bg-destructive-solid text-destructive-on-solid hover:bg-destructive-solid-hover",
            ),
            ("outline", "text-foreground"),
        ],
    )],
);

/// Class string rendered by [`Badge`].
pub fn badge_class(variant: BadgeVariant, class: &str) -> String {
    render_class("Badge", &BADGE, &[variant.selection()], class)
}

#[component]
/// Small inline status label.
pub fn Badge(
    #[prop(optional, into)] variant: MaybeSignal<BadgeVariant>,
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional)] node_ref: NodeRef<html::Span>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            node_ref=node_ref
            class=move || badge_class(variant.get(), &class.get())
            data-slot="badge"
            data-variant=move || variant.get().token()
            {..attributes}
        >
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn secondary_uses_neutral_solid_tokens() {
        let class = badge_class(BadgeVariant::Secondary, "");
        for expected in [
            "border-transparent",
            "bg-base-solid",
            "text-base-on-solid",
            "hover:bg-base-solid-hover",
        ] {
            assert!(class.split(' ').any(|token| token == expected), "missing {expected}");
        }
        assert!(!class.contains("bg-destructive-solid"));
    }

    #[test]
    fn default_variant_matches_table_default() {
        assert_eq!(badge_class(BadgeVariant::default(), ""), BADGE.default_class());
    }

    #[test]
    fn caller_class_overrides_padding() {
        let class = badge_class(BadgeVariant::Outline, "px-1");
        assert!(class.ends_with("text-foreground px-1"));
        assert!(!class.contains("px-2.5"));
    }
}
