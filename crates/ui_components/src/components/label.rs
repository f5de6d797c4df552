use super::*;

/// Label table.
pub const LABEL: VariantSpec = VariantSpec::new(
    "text-sm font-medium leading-none peer-disabled:cursor-not-allowed peer-disabled:opacity-70",
    &[],
);

#[component]
/// Form control caption. Pass the control id with `attr:for`.
pub fn Label(
    #[prop(optional, into)] class: MaybeSignal<String>,
    #[prop(optional)] node_ref: NodeRef<html::Label>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <label
            node_ref=node_ref
            class=move || render_class("Label", &LABEL, &[], &class.get())
            data-slot="label"
            {..attributes}
        >
            {children()}
        </label>
    }
}
