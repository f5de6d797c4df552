//! Story gallery for the shared component library.
//!
//! Every component family renders through its stories, so variant tables and token changes can be
//! reviewed side by side in light and dark schemes.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod stories;

use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use ui_components::button_class;
use ui_components::prelude::*;
use ui_core::DesignTokens;

pub use stories::{catalog, parse_catalog, ComponentKind, Story, StoryArgs, StoryError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Gallery selection, restorable from JSON.
pub struct ShowcaseState {
    /// Selected story id; the first story when empty or unknown.
    pub selected: String,
    /// Dark color scheme.
    pub dark: bool,
}

/// Theme stylesheet for the built-in tokens. Empty if the token file is malformed.
pub fn theme_css() -> String {
    match DesignTokens::builtin() {
        Ok(tokens) => tokens.to_css(),
        Err(err) => {
            logging::warn!("ui showcase tokens unavailable: {err}");
            String::new()
        }
    }
}

/// Renders one story with its args.
pub fn render_story(story: &Story) -> View {
    let args = &story.args;
    for fallback in args.fallbacks(story.component) {
        logging::warn!("story `{}`: {fallback}", story.id);
    }
    let class = args.class.clone().unwrap_or_default();
    let label = args.label_or(story.component.title()).to_string();

    match story.component {
        ComponentKind::Accordion => {
            let mode = if args.multiple {
                AccordionMode::Multiple
            } else {
                AccordionMode::Single
            };
            view! {
                <Accordion mode collapsible=args.collapsible class=class>
                    <AccordionItem value="item-1">
                        <AccordionTrigger>"Is it accessible?"</AccordionTrigger>
                        <AccordionContent>
                            "Yes. Triggers are buttons with aria-expanded and each panel is a labelled region."
                        </AccordionContent>
                    </AccordionItem>
                    <AccordionItem value="item-2">
                        <AccordionTrigger>"Is it styled?"</AccordionTrigger>
                        <AccordionContent>"Yes. Classes come from the shared variant tables."</AccordionContent>
                    </AccordionItem>
                    <AccordionItem value="item-3" disabled=true>
                        <AccordionTrigger>"Is it disabled?"</AccordionTrigger>
                        <AccordionContent>"This section cannot be opened."</AccordionContent>
                    </AccordionItem>
                </Accordion>
            }
            .into_view()
        }
        ComponentKind::Badge => {
            let (variant, _) = args.axis::<BadgeVariant>();
            view! { <Badge variant class=class>{label}</Badge> }.into_view()
        }
        ComponentKind::Button => {
            let (variant, _) = args.axis::<ButtonVariant>();
            let (size, _) = args.axis::<ButtonSize>();
            view! { <Button variant size disabled=args.disabled class=class>{label}</Button> }
                .into_view()
        }
        ComponentKind::Card => view! {
            <Card class=cn!("w-[350px]", class)>
                <CardHeader>
                    <CardTitle>{label}</CardTitle>
                    <CardDescription>"Deploy your new project in one click."</CardDescription>
                </CardHeader>
                <CardContent>
                    <div class="grid w-full gap-1.5">
                        <Label attr:for="card-name">"Name"</Label>
                        <Input attr:id="card-name" attr:placeholder="Name of your project"/>
                    </div>
                </CardContent>
                <CardFooter class="justify-between">
                    <Button variant=ButtonVariant::Outline>"Cancel"</Button>
                    <Button>"Deploy"</Button>
                </CardFooter>
            </Card>
        }
        .into_view(),
        ComponentKind::Dialog => {
            let open = create_rw_signal(args.open);
            let title = store_value(label);
            view! {
                <Dialog open>
                    <DialogTrigger class=button_class(ButtonVariant::Outline, ButtonSize::Default, &class)>
                        "Open dialog"
                    </DialogTrigger>
                    <DialogContent>
                        <DialogHeader>
                            <DialogTitle>{title.get_value()}</DialogTitle>
                            <DialogDescription>
                                "Make changes to your profile here. Click save when you're done."
                            </DialogDescription>
                        </DialogHeader>
                        <DialogFooter>
                            <DialogClose class=button_class(ButtonVariant::Default, ButtonSize::Default, "")>
                                "Save changes"
                            </DialogClose>
                        </DialogFooter>
                    </DialogContent>
                </Dialog>
            }
            .into_view()
        }
        ComponentKind::Input => {
            let (size, _) = args.axis::<InputSize>();
            view! {
                <Input
                    size
                    disabled=args.disabled
                    class=class
                    attr:type="email"
                    attr:placeholder=label
                />
            }
            .into_view()
        }
        ComponentKind::Label => view! {
            <div class="flex items-center space-x-2">
                <Switch checked=create_rw_signal(false) attr:id="terms"/>
                <Label class=class attr:for="terms">{label}</Label>
            </div>
        }
        .into_view(),
        ComponentKind::Progress => {
            let (size, _) = args.axis::<ProgressSize>();
            let value = if args.indeterminate { None } else { args.value };
            view! {
                <Progress
                    value
                    max=args.max.unwrap_or(100.0)
                    size
                    indeterminate=args.indeterminate
                    class=cn!("w-[60%]", class)
                />
            }
            .into_view()
        }
        ComponentKind::Separator => {
            let (orientation, _) = args.axis::<Orientation>();
            view! {
                <div class="flex h-5 items-center space-x-4 text-sm">
                    <span>"Blog"</span>
                    <Separator orientation decorative=args.decorative.unwrap_or(true) class=class/>
                    <span>"Docs"</span>
                </div>
            }
            .into_view()
        }
        ComponentKind::Switch => {
            let (size, _) = args.axis::<SwitchSize>();
            view! {
                <div class="flex items-center space-x-2">
                    <Switch
                        checked=create_rw_signal(args.checked)
                        size
                        disabled=args.disabled
                        class=class
                        attr:aria-label=label.clone()
                    />
                    <span class="text-sm">{label}</span>
                </div>
            }
            .into_view()
        }
    }
}

/// Selected story id, notifying only when the id itself changes.
fn selected_story_id(state: RwSignal<ShowcaseState>) -> Memo<String> {
    create_memo(move |_| state.with(|state| state.selected.clone()))
}

#[component]
/// Gallery with a story sidebar and a preview pane.
pub fn UiShowcaseApp(
    /// Restored gallery selection.
    #[prop(optional)]
    restored_state: Option<Value>,
) -> impl IntoView {
    let stories = match catalog() {
        Ok(stories) => stories,
        Err(err) => {
            logging::warn!("ui showcase catalog failed: {err}");
            Vec::new()
        }
    };
    let stories = store_value(stories);

    let state = create_rw_signal(ShowcaseState::default());
    if let Some(restored_state) = restored_state {
        match serde_json::from_value::<ShowcaseState>(restored_state) {
            Ok(restored) => state.set(restored),
            Err(err) => logging::warn!("ui showcase restore failed: {err}"),
        }
    }

    let selected_id = selected_story_id(state);
    let selected = Signal::derive(move || {
        let id = selected_id.get();
        stories.with_value(|stories| {
            stories
                .iter()
                .find(|story| story.id == id)
                .or_else(|| stories.first())
                .cloned()
        })
    });

    let sidebar = ComponentKind::ALL
        .iter()
        .map(|component| {
            let entries = stories.with_value(|stories| {
                stories
                    .iter()
                    .filter(|story| story.component == *component)
                    .map(|story| {
                        let id = story.id.clone();
                        let name = story.name.clone();
                        let active_id = id.clone();
                        let is_active = move || {
                            selected.with(|selected| {
                                selected.as_ref().is_some_and(|story| story.id == active_id)
                            })
                        };
                        view! {
                            <li>
                                <Button
                                    variant=Signal::derive(move || {
                                        if is_active() { ButtonVariant::Secondary } else { ButtonVariant::Ghost }
                                    })
                                    size=ButtonSize::Sm
                                    class="w-full justify-start"
                                    on_click=Callback::new(move |_| {
                                        state.update(|state| state.selected = id.clone());
                                    })
                                >
                                    {name}
                                </Button>
                            </li>
                        }
                    })
                    .collect_view()
            });
            view! {
                <section data-slot="showcase-group">
                    <h2 class="px-2 py-1 text-xs font-semibold uppercase text-muted-foreground">
                        {component.title()}
                    </h2>
                    <ul>{entries}</ul>
                </section>
            }
        })
        .collect_view();

    view! {
        <style>{theme_css()}</style>
        <div
            class=move || cn!("flex min-h-screen bg-background text-foreground", ("dark", state.get().dark))
            data-slot="showcase"
        >
            <nav class="w-64 shrink-0 space-y-4 border-r p-4" aria-label="Stories">
                <div class="flex items-center justify-between px-2">
                    <span class="text-sm font-semibold">"Components"</span>
                    <Switch
                        checked=ToggleState::controlled(
                            Signal::derive(move || state.get().dark),
                            Callback::new(move |dark| state.update(|state| state.dark = dark)),
                        )
                        size=SwitchSize::Sm
                        attr:aria-label="Dark mode"
                    />
                </div>
                <Separator/>
                {sidebar}
            </nav>
            <main class="flex flex-1 flex-col gap-6 p-10">
                {move || {
                    selected
                        .get()
                        .map(|story| {
                            view! {
                                <header class="space-y-1">
                                    <h1 class="text-2xl font-semibold tracking-tight">
                                        {format!("{} / {}", story.component.title(), story.name)}
                                    </h1>
                                    <code class="text-xs text-muted-foreground">{story.id.clone()}</code>
                                </header>
                                <div
                                    class="flex min-h-[200px] items-center justify-center rounded-lg border p-10"
                                    data-slot="showcase-preview"
                                >
                                    {render_story(&story)}
                                </div>
                            }
                        })
                }}
            </main>
        </div>
    }
}

/// Mounts the gallery on the document body.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| view! { <UiShowcaseApp/> })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn state_round_trips_through_json_with_defaults() {
        let restored: ShowcaseState =
            serde_json::from_value(serde_json::json!({ "dark": true })).expect("state");
        assert_eq!(
            restored,
            ShowcaseState {
                selected: String::new(),
                dark: true
            }
        );
    }

    #[test]
    fn theme_css_declares_light_and_dark_blocks() {
        let css = theme_css();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--color-primary-solid:"));
        assert!(css.contains("--animate-accordion-down:"));
        assert!(css.contains(".dark {"));
        assert!(css.contains("@keyframes progress-indeterminate {"));
    }

    #[test]
    fn toggling_dark_mode_keeps_the_selection_stable() {
        let runtime = create_runtime();
        let state = create_rw_signal(ShowcaseState {
            selected: "badge--default".to_string(),
            dark: false,
        });
        let selected = selected_story_id(state);
        let evaluations = Rc::new(Cell::new(0));
        let preview = {
            let evaluations = Rc::clone(&evaluations);
            create_memo(move |_| {
                evaluations.set(evaluations.get() + 1);
                selected.get()
            })
        };

        assert_eq!(preview.get(), "badge--default");
        state.update(|state| state.dark = true);
        assert_eq!(preview.get(), "badge--default");
        assert_eq!(evaluations.get(), 1);

        state.update(|state| state.selected = "button--default".to_string());
        assert_eq!(preview.get(), "button--default");
        assert_eq!(evaluations.get(), 2);
        runtime.dispose();
    }
}
