use super::*;

/// Card container table.
pub const CARD: VariantSpec = VariantSpec::new(
    "rounded-lg border bg-card text-card-foreground shadow-sm",
    &[],
);
/// Card header table.
pub const CARD_HEADER: VariantSpec = VariantSpec::new("flex flex-col space-y-1.5 p-6", &[]);
/// Card title table.
pub const CARD_TITLE: VariantSpec = VariantSpec::new(
    "text-2xl font-semibold leading-none tracking-tight",
    &[],
);
/// Card description table.
pub const CARD_DESCRIPTION: VariantSpec =
    VariantSpec::new("text-sm text-muted-foreground", &[]);
/// Card body table.
pub const CARD_CONTENT: VariantSpec = VariantSpec::new("p-6 pt-0", &[]);
/// Card footer table.
pub const CARD_FOOTER: VariantSpec = VariantSpec::new("flex items-center p-6 pt-0", &[]);

macro_rules! card_part {
    ($(#[$doc:meta])* $name:ident, $spec:ident, $slot:literal) => {
        #[component]
        $(#[$doc])*
        pub fn $name(
            #[prop(optional, into)] class: MaybeSignal<String>,
            #[prop(optional)] node_ref: NodeRef<html::Div>,
            #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
            children: Children,
        ) -> impl IntoView {
            view! {
                <div
                    node_ref=node_ref
                    class=move || render_class(stringify!($name), &$spec, &[], &class.get())
                    data-slot=$slot
                    {..attributes}
                >
                    {children()}
                </div>
            }
        }
    };
}

card_part!(
    /// Bordered surface grouping related content.
    Card,
    CARD,
    "card"
);
card_part!(
    /// Title and description stack at the top of a card.
    CardHeader,
    CARD_HEADER,
    "card-header"
);
card_part!(
    /// Card heading text.
    CardTitle,
    CARD_TITLE,
    "card-title"
);
card_part!(
    /// Secondary text under the card title.
    CardDescription,
    CARD_DESCRIPTION,
    "card-description"
);
card_part!(
    /// Card body.
    CardContent,
    CARD_CONTENT,
    "card-content"
);
card_part!(
    /// Action row at the bottom of a card.
    CardFooter,
    CARD_FOOTER,
    "card-footer"
);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn content_padding_keeps_later_top_override() {
        assert_eq!(CARD_CONTENT.default_class(), "p-6 pt-0");
        assert_eq!(CARD_CONTENT.class(&[], Some("p-4")), "p-4");
    }
}
