use super::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// How many items may be open at once.
pub enum AccordionMode {
    /// At most one open item.
    #[default]
    Single,
    /// Items open and close independently.
    Multiple,
}

/// Open item values after activating `item`.
///
/// In single mode a non-collapsible accordion keeps its open item open.
pub fn toggle_item(
    open: &[String],
    item: &str,
    mode: AccordionMode,
    collapsible: bool,
) -> Vec<String> {
    let is_open = open.iter().any(|value| value == item);
    match (mode, is_open) {
        (AccordionMode::Multiple, true) => open
            .iter()
            .filter(|value| value.as_str() != item)
            .cloned()
            .collect(),
        (AccordionMode::Multiple, false) => {
            let mut next = open.to_vec();
            next.push(item.to_string());
            next
        }
        (AccordionMode::Single, true) if collapsible => Vec::new(),
        (AccordionMode::Single, _) => vec![item.to_string()],
    }
}

/// Accordion root table.
pub const ACCORDION: VariantSpec = VariantSpec::new("w-full", &[]);
/// Accordion item table.
pub const ACCORDION_ITEM: VariantSpec = VariantSpec::new("border-b", &[]);
/// Accordion trigger table.
pub const ACCORDION_TRIGGER: VariantSpec = VariantSpec::new(
    "flex flex-1 items-center justify-between py-4 text-left font-medium transition-all hover:underline disabled:pointer-events-none disabled:opacity-50 [&[data-state=open]>svg]:rotate-180",
    &[],
);
/// Accordion content table.
pub const ACCORDION_CONTENT: VariantSpec = VariantSpec::new(
    "overflow-hidden text-sm transition-all data-[state=closed]:animate-accordion-up data-[state=open]:animate-accordion-down",
    &[],
);

#[derive(Clone, Copy)]
struct AccordionContext {
    open: RwSignal<Vec<String>>,
    mode: AccordionMode,
    collapsible: bool,
}

#[derive(Clone)]
struct AccordionItemContext {
    value: String,
    trigger_id: String,
    content_id: String,
    disabled: MaybeSignal<bool>,
}

impl AccordionItemContext {
    fn is_open(&self, accordion: &AccordionContext) -> bool {
        accordion
            .open
            .with(|open| open.iter().any(|value| *value == self.value))
    }
}

#[component]
/// Vertically stacked disclosure sections.
///
/// Open item values live in `value`; omit it to let the accordion own a signal seeded from
/// `default_value`.
pub fn Accordion(
    #[prop(optional)] mode: AccordionMode,
    #[prop(optional)] collapsible: bool,
    #[prop(optional)] value: Option<RwSignal<Vec<String>>>,
    #[prop(optional, into)] default_value: Vec<String>,
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let open = value.unwrap_or_else(|| create_rw_signal(default_value));
    let context = AccordionContext {
        open,
        mode,
        collapsible,
    };

    view! {
        <div
            node_ref=node_ref
            class=move || render_class("Accordion", &ACCORDION, &[], &class.get())
            data-slot="accordion"
            data-orientation="vertical"
            {..attributes}
        >
            <Provider value=context>{children()}</Provider>
        </div>
    }
}

#[component]
/// One section of an [`Accordion`], identified by `value`.
pub fn AccordionItem(
    #[prop(into)] value: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let Some(accordion) = use_context::<AccordionContext>() else {
        logging::warn!("AccordionItem `{value}` rendered outside Accordion");
        return ().into_view();
    };
    let item = AccordionItemContext {
        trigger_id: next_id("accordion-trigger"),
        content_id: next_id("accordion-content"),
        value,
        disabled,
    };
    let state_item = item.clone();
    let state = move || open_state_token(state_item.is_open(&accordion));

    view! {
        <div
            node_ref=node_ref
            class=move || render_class("AccordionItem", &ACCORDION_ITEM, &[], &class.get())
            data-slot="accordion-item"
            data-state=state
            data-disabled=move || disabled.get().then_some("")
            {..attributes}
        >
            <Provider value=item>{children()}</Provider>
        </div>
    }
    .into_view()
}

#[component]
/// Heading button that opens and closes its [`AccordionItem`].
pub fn AccordionTrigger(
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let (Some(accordion), Some(item)) = (
        use_context::<AccordionContext>(),
        use_context::<AccordionItemContext>(),
    ) else {
        logging::warn!("AccordionTrigger rendered outside AccordionItem");
        return ().into_view();
    };

    let disabled = item.disabled;
    let open_item = item.clone();
    let is_open = move || open_item.is_open(&accordion);
    let locked = {
        let is_open = is_open.clone();
        move || accordion.mode == AccordionMode::Single && !accordion.collapsible && is_open()
    };
    let value = item.value.clone();
    let activate = move |_| {
        if disabled.get_untracked() {
            return;
        }
        accordion.open.update(|open| {
            *open = toggle_item(open, &value, accordion.mode, accordion.collapsible);
        });
    };

    view! {
        <h3 class="flex" data-slot="accordion-header">
            <button
                type="button"
                node_ref=node_ref
                id=item.trigger_id
                class=move || render_class("AccordionTrigger", &ACCORDION_TRIGGER, &[], &class.get())
                aria-controls=item.content_id
                aria-expanded={
                    let is_open = is_open.clone();
                    move || bool_token(is_open())
                }
                aria-disabled=move || locked().then_some("true")
                disabled=move || disabled.get()
                data-slot="accordion-trigger"
                data-state=move || open_state_token(is_open())
                on:click={activate}
                {..attributes}
            >
                {children()}
                <Icon icon=IconName::ChevronDown class="text-muted-foreground transition-transform duration-200"/>
            </button>
        </h3>
    }
    .into_view()
}

#[component]
/// Collapsible region of an [`AccordionItem`]. Rendered only while the item is open.
pub fn AccordionContent(
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional)] node_ref: NodeRef<html::Div>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: ChildrenFn,
) -> impl IntoView {
    let (Some(accordion), Some(item)) = (
        use_context::<AccordionContext>(),
        use_context::<AccordionItemContext>(),
    ) else {
        logging::warn!("AccordionContent rendered outside AccordionItem");
        return ().into_view();
    };

    let class = Signal::derive(move || {
        render_class("AccordionContent", &ACCORDION_CONTENT, &[], &class.get())
    });

    (move || {
        item.is_open(&accordion).then(|| {
            let attributes = attributes.clone();
            view! {
                <div
                    node_ref=node_ref
                    id=item.content_id.clone()
                    class=class
                    role="region"
                    aria-labelledby=item.trigger_id.clone()
                    data-slot="accordion-content"
                    data-state="open"
                    {..attributes}
                >
                    <div class="pb-4 pt-0">{children()}</div>
                </div>
            }
        })
    })
    .into_view()
}
