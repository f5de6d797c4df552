use super::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Switch track and thumb dimensions.
pub enum SwitchSize {
    /// Standard.
    #[default]
    Default,
    /// Compact.
    Sm,
}

impl VariantToken for SwitchSize {
    const AXIS: &'static str = "size";
    const ALL: &'static [Self] = &[Self::Default, Self::Sm];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sm => "sm",
        }
    }
}

/// Switch track table.
pub const SWITCH: VariantSpec = VariantSpec::new(
    "peer inline-flex shrink-0 cursor-pointer items-center rounded-full border-2 border-transparent transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 focus-visible:ring-offset-background disabled:cursor-not-allowed disabled:opacity-50 data-[state=checked]:bg-primary-solid data-[state=unchecked]:bg-input",
    &[VariantAxis::new(
        "size",
        "default",
        &[("default", "h-6 w-11"), ("sm", "h-5 w-9")],
    )],
);

/// Switch thumb table.
pub const SWITCH_THUMB: VariantSpec = VariantSpec::new(
    "pointer-events-none block rounded-full bg-background shadow-lg ring-0 transition-transform data-[state=unchecked]:translate-x-0",
    &[VariantAxis::new(
        "size",
        "default",
        &[
            ("default", "size-5 data-[state=checked]:translate-x-5"),
            ("sm", "size-4 data-[state=checked]:translate-x-4"),
        ],
    )],
);

/// Class strings for the track and thumb.
pub fn switch_class(size: SwitchSize, class: &str) -> (String, String) {
    (
        render_class("Switch", &SWITCH, &[size.selection()], class),
        render_class("Switch", &SWITCH_THUMB, &[size.selection()], ""),
    )
}

/// Click handling shared by pointer and keyboard. The native button turns Space and Enter into a
/// click, so there is no separate key handler.
fn request_toggle(checked: ToggleState, disabled: bool) {
    if !disabled {
        checked.toggle();
    }
}

#[component]
/// On/off control. The checked value lives in the injected [`ToggleState`].
pub fn Switch(
    #[prop(into)] checked: ToggleState,
    #[prop(optional, into)] size: MaybeSignal<SwitchSize>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let classes = Signal::derive(move || switch_class(size.get(), &class.get()));
    let state = move || checked_state_token(checked.is_on());

    view! {
        <button
            type="button"
            node_ref=node_ref
            class=move || classes.get().0
            role="switch"
            aria-checked=move || bool_token(checked.is_on())
            disabled=move || disabled.get()
            data-slot="switch"
            data-state=state
            data-disabled=move || disabled.get().then_some("")
            on:click=move |_| request_toggle(checked, disabled.get_untracked())
            {..attributes}
        >
            <span class=move || classes.get().1 data-slot="switch-thumb" data-state=state></span>
        </button>
    }
}
