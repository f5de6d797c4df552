use super::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Button emphasis.
pub enum ButtonVariant {
    /// Primary solid action.
    #[default]
    Default,
    /// Destructive solid action.
    Destructive,
    /// Bordered action on the page background.
    Outline,
    /// Neutral solid action.
    Secondary,
    /// Unfilled action that only tints on hover.
    Ghost,
    /// Text link styling.
    Link,
}

impl VariantToken for ButtonVariant {
    const AXIS: &'static str = "variant";
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::Destructive,
        Self::Outline,
        Self::Secondary,
        Self::Ghost,
        Self::Link,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Link => "link",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Button dimensions.
pub enum ButtonSize {
    /// Standard height.
    #[default]
    Default,
    /// Compact.
    Sm,
    /// Large.
    Lg,
    /// Square icon-only button.
    Icon,
}

impl VariantToken for ButtonSize {
    const AXIS: &'static str = "size";
    const ALL: &'static [Self] = &[Self::Default, Self::Sm, Self::Lg, Self::Icon];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sm => "sm",
            Self::Lg => "lg",
            Self::Icon => "icon",
        }
    }
}

/// Button variant table.
pub const BUTTON: VariantSpec = VariantSpec::new(
    "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium ring-offset-background transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50",
    &[
        VariantAxis::new(
            "variant",
            "default",
            &[
                (
                    "default",
                    "bg-primary-solid text-primary-on-solid hover:bg-primary-solid-hover",
                ),
                (
                    "destructive",
                    "bg-destructive-solid text-destructive-on-solid hover:bg-destructive-solid-hover",
                ),
                (
                    "outline",
                    "border border-input bg-background hover:bg-muted hover:text-foreground",
                ),
                (
                    "secondary",
                    "bg-base-solid text-base-on-solid hover:bg-base-solid-hover",
                ),
                ("ghost", "hover:bg-muted hover:text-foreground"),
                ("link", "text-primary-solid underline-offset-4 hover:underline"),
            ],
        ),
        VariantAxis::new(
            "size",
            "default",
            &[
                ("default", "h-10 px-4 py-2"),
                ("sm", "h-9 rounded-md px-3"),
                ("lg", "h-11 rounded-md px-8"),
                ("icon", "size-10"),
            ],
        ),
    ],
)
.with_compound(&[CompoundVariant {
    when: &[("variant", "link"), ("size", "default")],
    class: "px-0",
}]);

/// Class string rendered by [`Button`].
pub fn button_class(variant: ButtonVariant, size: ButtonSize, class: &str) -> String {
    render_class(
        "Button",
        &BUTTON,
        &[variant.selection(), size.selection()],
        class,
    )
}

#[component]
/// Action button.
pub fn Button(
    #[prop(optional, into)] variant: MaybeSignal<ButtonVariant>,
    #[prop(optional, into)] size: MaybeSignal<ButtonSize>,
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            node_ref=node_ref
            class=move || button_class(variant.get(), size.get(), &class.get())
            disabled=move || disabled.get()
            data-slot="button"
            data-variant=move || variant.get().token()
            data-size=move || size.get().token()
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            {..attributes}
        >
            {children()}
        </button>
    }
}
