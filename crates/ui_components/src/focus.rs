//! DOM focus helpers for modal surfaces.

use wasm_bindgen::JsCast;

/// Elements that take part in sequential focus navigation.
const FOCUSABLE: &str = "a[href], button, input, select, textarea, [tabindex]";

/// Returns the current active element as an [`web_sys::HtmlElement`] when possible.
fn active_html_element() -> Option<web_sys::HtmlElement> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.active_element())
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
}

/// Focuses an HTML element, ignoring browser focus errors.
pub(crate) fn focus_html_element(element: &web_sys::HtmlElement) {
    let _ = element.focus();
}

fn focusable_items(container: &web_sys::Element) -> Vec<web_sys::HtmlElement> {
    let Ok(nodes) = container.query_selector_all(FOCUSABLE) else {
        return Vec::new();
    };

    let mut items = Vec::new();
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        let Ok(item) = node.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        if item.get_attribute("disabled").is_some() {
            continue;
        }
        if item.get_attribute("tabindex").as_deref() == Some("-1") {
            continue;
        }
        items.push(item);
    }

    items
}

/// Index Tab should wrap to, or `None` when the browser's own move stays inside the container.
///
/// `current` is the position of the focused element among `len` focusable items; `None` means
/// focus is outside them (on the container itself, or already escaped).
pub fn tab_wrap_target(len: usize, current: Option<usize>, backwards: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    match (current, backwards) {
        (None, false) => Some(0),
        (None, true) => Some(last),
        (Some(index), false) if index >= last => Some(0),
        (Some(0), true) => Some(last),
        _ => None,
    }
}

/// Whether closing should hand focus back to the element that opened the surface.
pub fn should_restore_focus(was_open: Option<bool>, open: bool) -> bool {
    was_open == Some(true) && !open
}

/// Keeps Tab and Shift+Tab inside `container`. Returns whether the event was handled.
pub(crate) fn contain_tab(ev: &web_sys::KeyboardEvent, container: &web_sys::Element) -> bool {
    if ev.key() != "Tab" {
        return false;
    }

    let items = focusable_items(container);
    if items.is_empty() {
        ev.prevent_default();
        return true;
    }

    let current = active_html_element()
        .and_then(|active| items.iter().position(|item| *item == active));
    let Some(target) = tab_wrap_target(items.len(), current, ev.shift_key()) else {
        return false;
    };

    ev.prevent_default();
    focus_html_element(&items[target]);
    true
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn tab_wraps_from_last_to_first_and_back() {
        assert_eq!(tab_wrap_target(3, Some(2), false), Some(0));
        assert_eq!(tab_wrap_target(3, Some(0), true), Some(2));
    }

    #[test]
    fn tab_inside_the_range_is_left_to_the_browser() {
        assert_eq!(tab_wrap_target(3, Some(0), false), None);
        assert_eq!(tab_wrap_target(3, Some(1), true), None);
        assert_eq!(tab_wrap_target(3, Some(2), true), None);
    }

    #[test]
    fn focus_outside_the_items_is_pulled_back_in() {
        assert_eq!(tab_wrap_target(2, None, false), Some(0));
        assert_eq!(tab_wrap_target(2, None, true), Some(1));
        assert_eq!(tab_wrap_target(1, Some(0), true), Some(0));
        assert_eq!(tab_wrap_target(0, None, false), None);
    }

    #[test]
    fn focus_returns_only_on_an_open_to_closed_transition() {
        assert!(should_restore_focus(Some(true), false));
        assert!(!should_restore_focus(None, false));
        assert!(!should_restore_focus(Some(false), false));
        assert!(!should_restore_focus(Some(false), true));
        assert!(!should_restore_focus(Some(true), true));
    }
}
