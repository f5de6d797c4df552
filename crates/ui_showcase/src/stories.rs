//! Story catalog: named, serializable argument sets for every component.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ui_components::{
    BadgeVariant, ButtonSize, ButtonVariant, InputSize, Orientation, ProgressSize, SwitchSize,
};
use ui_core::{VariantError, VariantToken};

const STORIES: &str = include_str!("stories.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Component families with stories.
pub enum ComponentKind {
    /// Accordion.
    Accordion,
    /// Badge.
    Badge,
    /// Button.
    Button,
    /// Card.
    Card,
    /// Dialog.
    Dialog,
    /// Input.
    Input,
    /// Label.
    Label,
    /// Progress.
    Progress,
    /// Separator.
    Separator,
    /// Switch.
    Switch,
}

impl ComponentKind {
    /// Every family in sidebar order.
    pub const ALL: &'static [Self] = &[
        Self::Accordion,
        Self::Badge,
        Self::Button,
        Self::Card,
        Self::Dialog,
        Self::Input,
        Self::Label,
        Self::Progress,
        Self::Separator,
        Self::Switch,
    ];

    /// Display name.
    pub fn title(self) -> &'static str {
        match self {
            Self::Accordion => "Accordion",
            Self::Badge => "Badge",
            Self::Button => "Button",
            Self::Card => "Card",
            Self::Dialog => "Dialog",
            Self::Input => "Input",
            Self::Label => "Label",
            Self::Progress => "Progress",
            Self::Separator => "Separator",
            Self::Switch => "Switch",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Props a story passes to its component. Unused fields are ignored by each family.
pub struct StoryArgs {
    /// `variant` axis value.
    pub variant: Option<String>,
    /// `size` axis value.
    pub size: Option<String>,
    /// `orientation` axis value.
    pub orientation: Option<String>,
    /// Progress value.
    pub value: Option<f64>,
    /// Progress maximum.
    pub max: Option<f64>,
    /// Progress animation flag.
    pub indeterminate: bool,
    /// Disabled flag.
    pub disabled: bool,
    /// Initial switch state.
    pub checked: bool,
    /// Initial dialog state.
    pub open: bool,
    /// Separator decorative flag.
    pub decorative: Option<bool>,
    /// Accordion multiple mode.
    pub multiple: bool,
    /// Accordion collapsible flag.
    pub collapsible: bool,
    /// Text content.
    pub label: Option<String>,
    /// Caller class override.
    pub class: Option<String>,
}

impl StoryArgs {
    /// Reads a typed axis value, falling back to the default on unknown text.
    pub fn axis<T: VariantToken>(&self) -> (T, Option<VariantError>) {
        let raw = match T::AXIS {
            "variant" => self.variant.as_deref(),
            "size" => self.size.as_deref(),
            "orientation" => self.orientation.as_deref(),
            _ => None,
        };
        raw.map_or((T::default(), None), T::parse_lenient)
    }

    /// Text content or `fallback`.
    pub fn label_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.label.as_deref().unwrap_or(fallback)
    }

    /// Every axis value that would fall back when rendered as `component`.
    pub fn fallbacks(&self, component: ComponentKind) -> Vec<VariantError> {
        let errors = match component {
            ComponentKind::Badge => vec![self.axis::<BadgeVariant>().1],
            ComponentKind::Button => {
                vec![self.axis::<ButtonVariant>().1, self.axis::<ButtonSize>().1]
            }
            ComponentKind::Input => vec![self.axis::<InputSize>().1],
            ComponentKind::Progress => vec![self.axis::<ProgressSize>().1],
            ComponentKind::Separator => vec![self.axis::<Orientation>().1],
            ComponentKind::Switch => vec![self.axis::<SwitchSize>().1],
            ComponentKind::Accordion
            | ComponentKind::Card
            | ComponentKind::Dialog
            | ComponentKind::Label => Vec::new(),
        };
        errors.into_iter().flatten().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One named rendering of a component.
pub struct Story {
    /// Stable id, `<component>--<name>`.
    pub id: String,
    /// Component family.
    pub component: ComponentKind,
    /// Display name.
    pub name: String,
    /// Props.
    #[serde(default)]
    pub args: StoryArgs,
}

/// Story catalog failures.
#[derive(Debug, Error)]
pub enum StoryError {
    /// Catalog JSON did not deserialize.
    #[error("failed to parse story catalog: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two stories share an id.
    #[error("duplicate story id `{0}`")]
    DuplicateId(String),
    /// A story id does not start with its component prefix.
    #[error("story `{id}` is not namespaced under `{component}--`")]
    Namespace {
        /// Story id.
        id: String,
        /// Expected component prefix.
        component: String,
    },
}

/// Parses and checks a story catalog.
///
/// # Errors
///
/// Returns [`StoryError`] for malformed JSON, duplicate ids, or ids outside their component's
/// namespace.
pub fn parse_catalog(body: &str) -> Result<Vec<Story>, StoryError> {
    let stories: Vec<Story> = serde_json::from_str(body)?;
    let mut seen = HashSet::with_capacity(stories.len());
    for story in &stories {
        let prefix = serde_json::to_value(story.component)?
            .as_str()
            .map(|name| format!("{name}--"))
            .unwrap_or_default();
        if !story.id.starts_with(&prefix) {
            return Err(StoryError::Namespace {
                id: story.id.clone(),
                component: prefix.trim_end_matches('-').to_string(),
            });
        }
        if !seen.insert(story.id.as_str()) {
            return Err(StoryError::DuplicateId(story.id.clone()));
        }
    }
    Ok(stories)
}

/// The built-in story catalog.
///
/// # Errors
///
/// Returns [`StoryError`] if the embedded catalog is malformed.
pub fn catalog() -> Result<Vec<Story>, StoryError> {
    parse_catalog(STORIES)
}
