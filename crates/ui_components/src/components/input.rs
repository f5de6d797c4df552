use super::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Input field height and text size.
pub enum InputSize {
    /// Standard.
    #[default]
    Default,
    /// Compact.
    Sm,
    /// Large.
    Lg,
}

impl VariantToken for InputSize {
    const AXIS: &'static str = "size";
    const ALL: &'static [Self] = &[Self::Default, Self::Sm, Self::Lg];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sm => "sm",
            Self::Lg => "lg",
        }
    }
}

/// Input variant table.
pub const INPUT: VariantSpec = VariantSpec::new(
    "flex w-full rounded-md border border-input bg-background text-foreground ring-offset-background placeholder:text-muted-foreground focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50 file:border-0 file:bg-transparent file:text-sm file:font-medium",
    &[VariantAxis::new(
        "size",
        "default",
        &[
            ("default", "h-10 px-3 py-2 text-sm"),
            ("sm", "h-9 px-2.5 py-1 text-xs"),
            ("lg", "h-11 px-4 py-2 text-base"),
        ],
    )],
);

/// Class string rendered by [`Input`].
pub fn input_class(size: InputSize, class: &str) -> String {
    render_class("Input", &INPUT, &[size.selection()], class)
}

#[component]
/// Single-line text field. `type`, `value`, `placeholder` and event handlers pass through as
/// attributes.
pub fn Input(
    #[prop(optional, into)] size: MaybeSignal<InputSize>,
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] invalid: MaybeSignal<bool>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    view! {
        <input
            node_ref=node_ref
            class=move || input_class(size.get(), &class.get())
            disabled=move || disabled.get()
            aria-invalid=move || invalid.get().then_some("true")
            data-slot="input"
            data-size=move || size.get().token()
            {..attributes}
        />
    }
}
