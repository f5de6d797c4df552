//! Interactive state capability shared by the stateful wrappers.
//!
//! Wrappers never own open/checked state. The caller injects a [`ToggleState`] and the wrapper
//! reads it for `data-state`/ARIA output and asks it for transitions.

use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::*;
use ui_core::{ResolvedStyle, VariantSpec};

#[derive(Clone, Copy)]
/// Two-state value plus the transition request handler.
pub struct ToggleState {
    value: Signal<bool>,
    request: Callback<bool>,
}

impl ToggleState {
    /// State driven by the caller: `value` is read, `on_change` receives requested values.
    pub fn controlled(value: impl Into<Signal<bool>>, on_change: Callback<bool>) -> Self {
        Self {
            value: value.into(),
            request: on_change,
        }
    }

    /// State owned by a fresh signal starting at `initial`.
    pub fn uncontrolled(initial: bool) -> Self {
        create_rw_signal(initial).into()
    }

    /// Current value, tracked.
    pub fn is_on(&self) -> bool {
        self.value.get()
    }

    /// Current value without subscribing.
    pub fn is_on_untracked(&self) -> bool {
        self.value.get_untracked()
    }

    /// Requests a transition to `next`. Requests matching the current value are dropped.
    pub fn set(&self, next: bool) {
        if self.value.get_untracked() != next {
            self.request.call(next);
        }
    }

    /// Requests the opposite of the current value.
    pub fn toggle(&self) {
        self.set(!self.value.get_untracked());
    }

    /// Tracked value as a reactive signal.
    pub fn signal(&self) -> Signal<bool> {
        self.value
    }
}

impl From<RwSignal<bool>> for ToggleState {
    fn from(signal: RwSignal<bool>) -> Self {
        Self {
            value: signal.into(),
            request: Callback::new(move |next| signal.set(next)),
        }
    }
}

/// `data-state` for open/closed primitives.
pub fn open_state_token(open: bool) -> &'static str {
    if open {
        "open"
    } else {
        "closed"
    }
}

/// `data-state` for checked/unchecked primitives.
pub fn checked_state_token(checked: bool) -> &'static str {
    if checked {
        "checked"
    } else {
        "unchecked"
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Document-unique element id for ARIA wiring.
pub(crate) fn next_id(prefix: &str) -> String {
    static NEXT: AtomicUsize = AtomicUsize::new(1);
    format!("{prefix}-{}", NEXT.fetch_add(1, Ordering::Relaxed))
}

/// Resolves a spec for one render and logs any fallbacks taken.
pub(crate) fn render_class(
    component: &str,
    spec: &VariantSpec,
    selection: &[(&str, &str)],
    class: &str,
) -> String {
    let resolved = spec.resolve(selection, Some(class));
    report_fallbacks(component, &resolved);
    resolved.class()
}

pub(crate) fn report_fallbacks(component: &str, resolved: &ResolvedStyle<'_>) {
    for fallback in resolved.fallbacks() {
        logging::warn!("{component} variant fallback: {fallback}");
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn state_tokens_match_primitive_contract() {
        assert_eq!(open_state_token(true), "open");
        assert_eq!(open_state_token(false), "closed");
        assert_eq!(checked_state_token(true), "checked");
        assert_eq!(checked_state_token(false), "unchecked");
        assert_eq!(bool_token(false), "false");
    }

    #[test]
    fn ids_are_unique_per_call() {
        let first = next_id("dialog-title");
        let second = next_id("dialog-title");
        assert!(first.starts_with("dialog-title-"));
        assert_ne!(first, second);
    }

    #[test]
    fn signal_backed_state_applies_requests() {
        let runtime = create_runtime();
        let open = create_rw_signal(false);
        let state = ToggleState::from(open);

        state.toggle();
        assert!(open.get_untracked());
        state.set(false);
        assert!(!state.is_on_untracked());
        runtime.dispose();
    }

    #[test]
    fn controlled_state_forwards_requests_without_writing() {
        let runtime = create_runtime();
        let requests = create_rw_signal(Vec::<bool>::new());
        let state = ToggleState::controlled(
            Signal::derive(|| true),
            Callback::new(move |next| requests.update(|seen| seen.push(next))),
        );

        state.toggle();
        state.set(true);
        assert_eq!(requests.get_untracked(), vec![false]);
        assert!(state.is_on_untracked());
        runtime.dispose();
    }
}
