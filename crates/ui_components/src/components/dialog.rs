use super::*;
use crate::focus::{contain_tab, focus_html_element, should_restore_focus};

/// Backdrop table.
pub const DIALOG_OVERLAY: VariantSpec = VariantSpec::new(
    "fixed inset-0 z-50 bg-black/80 data-[state=open]:animate-in data-[state=open]:fade-in-0",
    &[],
);
/// Dialog panel table.
pub const DIALOG_CONTENT: VariantSpec = VariantSpec::new(
    "fixed left-[50%] top-[50%] z-50 grid w-full max-w-lg translate-x-[-50%] translate-y-[-50%] gap-4 border bg-background p-6 text-foreground shadow-lg duration-200 focus:outline-none sm:rounded-lg data-[state=open]:animate-in data-[state=open]:fade-in-0 data-[state=open]:zoom-in-95",
    &[],
);
/// Built-in close button table.
pub const DIALOG_CLOSE: VariantSpec = VariantSpec::new(
    "absolute right-4 top-4 rounded-sm opacity-70 ring-offset-background transition-opacity hover:opacity-100 focus:outline-none focus:ring-2 focus:ring-ring focus:ring-offset-2 disabled:pointer-events-none",
    &[],
);
/// Dialog header table.
pub const DIALOG_HEADER: VariantSpec =
    VariantSpec::new("flex flex-col space-y-1.5 text-center sm:text-left", &[]);
/// Dialog footer table.
pub const DIALOG_FOOTER: VariantSpec = VariantSpec::new(
    "flex flex-col-reverse sm:flex-row sm:justify-end sm:space-x-2",
    &[],
);
/// Dialog title table.
pub const DIALOG_TITLE: VariantSpec = VariantSpec::new(
    "text-lg font-semibold leading-none tracking-tight",
    &[],
);
/// Dialog description table.
pub const DIALOG_DESCRIPTION: VariantSpec =
    VariantSpec::new("text-sm text-muted-foreground", &[]);

/// Whether a key press dismisses an open dialog.
pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Element ids linking the trigger, panel, title, and description.
pub struct DialogIds {
    /// Panel id, referenced by the trigger's `aria-controls`.
    pub content: String,
    /// Title id, referenced by the panel's `aria-labelledby`.
    pub title: String,
    /// Description id, referenced by the panel's `aria-describedby`.
    pub description: String,
}

impl DialogIds {
    fn generate() -> Self {
        Self {
            content: next_id("dialog-content"),
            title: next_id("dialog-title"),
            description: next_id("dialog-description"),
        }
    }
}

#[derive(Clone, Copy)]
struct DialogContext {
    open: ToggleState,
    ids: StoredValue<DialogIds>,
    trigger: StoredValue<Option<NodeRef<html::Button>>>,
}

fn use_dialog(part: &str) -> Option<DialogContext> {
    let context = use_context::<DialogContext>();
    if context.is_none() {
        logging::warn!("{part} rendered outside Dialog");
    }
    context
}

#[component]
/// Modal dialog root. Open state lives in the injected [`ToggleState`]; omit `open` to let the
/// dialog own a closed-by-default signal.
///
/// Closing returns focus to the [`DialogTrigger`].
pub fn Dialog(#[prop(optional, into)] open: Option<ToggleState>, children: Children) -> impl IntoView {
    let context = DialogContext {
        open: open.unwrap_or_else(|| ToggleState::uncontrolled(false)),
        ids: store_value(DialogIds::generate()),
        trigger: store_value(None),
    };

    create_effect(move |was_open: Option<bool>| {
        let open = context.open.is_on();
        if should_restore_focus(was_open, open) {
            if let Some(button) = context.trigger.get_value().and_then(|node| node.get_untracked()) {
                focus_html_element(&button);
            }
        }
        open
    });

    view! { <Provider value=context>{children()}</Provider> }
}

#[component]
/// Button that requests the dialog to open.
pub fn DialogTrigger(
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let Some(dialog) = use_dialog("DialogTrigger") else {
        return ().into_view();
    };
    dialog.trigger.set_value(Some(node_ref));

    view! {
        <button
            type="button"
            node_ref=node_ref
            class=move || cn!(class.get())
            aria-haspopup="dialog"
            aria-expanded=move || bool_token(dialog.open.is_on())
            aria-controls=dialog.ids.with_value(|ids| ids.content.clone())
            data-slot="dialog-trigger"
            data-state=move || open_state_token(dialog.open.is_on())
            on:click=move |_| dialog.open.set(true)
            {..attributes}
        >
            {children()}
        </button>
    }
    .into_view()
}

#[component]
/// Overlay plus centered panel, rendered only while open.
///
/// Escape anywhere in the document and backdrop clicks request close. The panel takes focus when
/// it opens and keeps Tab and Shift+Tab among its own controls.
pub fn DialogContent(
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional)] hide_close: bool,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: ChildrenFn,
) -> impl IntoView {
    let Some(dialog) = use_dialog("DialogContent") else {
        return ().into_view();
    };
    let ids = dialog.ids.get_value();
    let class = Signal::derive(move || {
        render_class("DialogContent", &DIALOG_CONTENT, &[], &class.get())
    });

    create_effect(move |_| {
        if let Some(panel) = node_ref.get() {
            let _ = panel.focus();
        }
    });

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if dialog.open.is_on_untracked() && is_dismiss_key(&ev.key()) {
            ev.stop_propagation();
            dialog.open.set(false);
        }
    });
    on_cleanup(move || escape_listener.remove());

    (move || {
        dialog.open.is_on().then(|| {
            let attributes = attributes.clone();
            view! {
                <div
                    class=DIALOG_OVERLAY.default_class()
                    data-slot="dialog-overlay"
                    data-state="open"
                    aria-hidden="true"
                    on:click=move |_| dialog.open.set(false)
                ></div>
                <div
                    node_ref=node_ref
                    id=ids.content.clone()
                    class=class
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby=ids.title.clone()
                    aria-describedby=ids.description.clone()
                    tabindex="-1"
                    data-slot="dialog-content"
                    data-state="open"
                    on:keydown=move |ev: KeyboardEvent| {
                        if let Some(panel) = node_ref.get_untracked() {
                            contain_tab(&ev, &panel);
                        }
                    }
                    {..attributes}
                >
                    {children()}
                    {(!hide_close).then(|| view! {
                        <button
                            type="button"
                            class=DIALOG_CLOSE.default_class()
                            data-slot="dialog-close"
                            on:click=move |_| dialog.open.set(false)
                        >
                            <Icon icon=IconName::X/>
                            <span class="sr-only">"Close"</span>
                        </button>
                    })}
                </div>
            }
        })
    })
    .into_view()
}

#[component]
/// Button that requests the dialog to close.
pub fn DialogClose(
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let Some(dialog) = use_dialog("DialogClose") else {
        return ().into_view();
    };

    view! {
        <button
            type="button"
            node_ref=node_ref
            class=move || cn!(class.get())
            data-slot="dialog-close"
            on:click=move |_| dialog.open.set(false)
            {..attributes}
        >
            {children()}
        </button>
    }
    .into_view()
}

#[component]
/// Title and description stack.
pub fn DialogHeader(
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=move || render_class("DialogHeader", &DIALOG_HEADER, &[], &class.get())
            data-slot="dialog-header"
            {..attributes}
        >
            {children()}
        </div>
    }
}

#[component]
/// Action row.
pub fn DialogFooter(
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=move || render_class("DialogFooter", &DIALOG_FOOTER, &[], &class.get())
            data-slot="dialog-footer"
            {..attributes}
        >
            {children()}
        </div>
    }
}

#[component]
/// Accessible name of the dialog.
pub fn DialogTitle(
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let id = use_dialog("DialogTitle").map(|dialog| dialog.ids.with_value(|ids| ids.title.clone()));
    view! {
        <h2
            id=id
            class=move || render_class("DialogTitle", &DIALOG_TITLE, &[], &class.get())
            data-slot="dialog-title"
            {..attributes}
        >
            {children()}
        </h2>
    }
}

#[component]
/// Accessible description of the dialog.
pub fn DialogDescription(
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let id = use_dialog("DialogDescription")
        .map(|dialog| dialog.ids.with_value(|ids| ids.description.clone()));
    view! {
        <p
            id=id
            class=move || render_class("DialogDescription", &DIALOG_DESCRIPTION, &[], &class.get())
            data-slot="dialog-description"
            {..attributes}
        >
            {children()}
        </p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_escape_dismisses() {
        assert!(is_dismiss_key("Escape"));
        assert!(!is_dismiss_key("Esc"));
        assert!(!is_dismiss_key("Enter"));
    }

    #[test]
    fn generated_ids_are_distinct() {
        let first = DialogIds::generate();
        let second = DialogIds::generate();
        assert_ne!(first.title, first.description);
        assert_ne!(first.content, second.content);
    }

    #[test]
    fn overlay_and_panel_stack_above_page() {
        assert!(DIALOG_OVERLAY.default_class().contains("z-50"));
        assert!(DIALOG_CONTENT.default_class().contains("z-50"));
        assert!(DIALOG_CONTENT.default_class().contains("translate-x-[-50%]"));
    }
}
