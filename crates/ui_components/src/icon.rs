//! Inline stroke icons used inside composed components.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icons drawn by the library itself.
pub enum IconName {
    /// Downward chevron (accordion trigger).
    ChevronDown,
    /// Cross (dialog close).
    X,
}

impl IconName {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::ChevronDown => "chevron-down",
            Self::X => "x",
        }
    }

    fn path(self) -> &'static str {
        match self {
            Self::ChevronDown => "m6 9 6 6 6-6",
            Self::X => "M18 6 6 18M6 6l12 12",
        }
    }
}

#[component]
/// Decorative 24x24 stroke icon, hidden from assistive technology.
pub fn Icon(
    icon: IconName,
    #[prop(optional, into)] class: MaybeSignal<String>,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=move || ui_core::cn!("size-4 shrink-0", class.get())
            aria-hidden="true"
            data-icon=icon.token()
        >
            <path d=icon.path()></path>
        </svg>
    }
}
