use super::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Separator direction.
pub enum Orientation {
    /// Full-width rule.
    #[default]
    Horizontal,
    /// Full-height rule.
    Vertical,
}

impl VariantToken for Orientation {
    const AXIS: &'static str = "orientation";
    const ALL: &'static [Self] = &[Self::Horizontal, Self::Vertical];

    fn token(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

/// Separator variant table.
pub const SEPARATOR: VariantSpec = VariantSpec::new(
    "shrink-0 bg-border",
    &[VariantAxis::new(
        "orientation",
        "horizontal",
        &[("horizontal", "h-[1px] w-full"), ("vertical", "h-full w-[1px]")],
    )],
);

/// Class string rendered by [`Separator`].
pub fn separator_class(orientation: Orientation, class: &str) -> String {
    render_class("Separator", &SEPARATOR, &[orientation.selection()], class)
}

/// `(role, aria-orientation)` for a separator.
///
/// Decorative separators are removed from the accessibility tree. Semantic ones announce their
/// orientation only when it differs from the implicit horizontal.
pub fn separator_role(
    orientation: Orientation,
    decorative: bool,
) -> (&'static str, Option<&'static str>) {
    match (decorative, orientation) {
        (true, _) => ("none", None),
        (false, Orientation::Horizontal) => ("separator", None),
        (false, Orientation::Vertical) => ("separator", Some("vertical")),
    }
}

#[component]
/// Thin divider line.
pub fn Separator(
    #[prop(optional, into)] orientation: MaybeSignal<Orientation>,
    #[prop(default = true.into(), into)] decorative: MaybeSignal<bool>,
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let role = move || separator_role(orientation.get(), decorative.get());
    view! {
        <div
            node_ref=node_ref
            class=move || separator_class(orientation.get(), &class.get())
            role=move || role().0
            aria-orientation=move || role().1
            data-slot="separator"
            data-orientation=move || orientation.get().token()
            {..attributes}
        ></div>
    }
}
