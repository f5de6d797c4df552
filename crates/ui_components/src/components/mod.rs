//! Styled wrappers, one module per component family.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;
use ui_core::{cn, CompoundVariant, VariantAxis, VariantSpec, VariantToken};

use crate::icon::{Icon, IconName};
use crate::primitive::{
    bool_token, checked_state_token, next_id, open_state_token, render_class, ToggleState,
};

mod accordion;
mod badge;
mod button;
mod card;
mod dialog;
mod input;
mod label;
mod progress;
mod separator;
mod switch;

pub use accordion::{
    toggle_item, Accordion, AccordionContent, AccordionItem, AccordionMode, AccordionTrigger,
    ACCORDION, ACCORDION_CONTENT, ACCORDION_ITEM, ACCORDION_TRIGGER,
};
pub use badge::{badge_class, Badge, BadgeVariant, BADGE};
pub use button::{button_class, Button, ButtonSize, ButtonVariant, BUTTON};
pub use card::{
    Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, CARD, CARD_CONTENT,
    CARD_DESCRIPTION, CARD_FOOTER, CARD_HEADER, CARD_TITLE,
};
pub use dialog::{
    is_dismiss_key, Dialog, DialogClose, DialogContent, DialogDescription, DialogFooter,
    DialogHeader, DialogIds, DialogTitle, DialogTrigger, DIALOG_CLOSE, DIALOG_CONTENT,
    DIALOG_DESCRIPTION, DIALOG_FOOTER, DIALOG_HEADER, DIALOG_OVERLAY, DIALOG_TITLE,
};
pub use input::{input_class, Input, InputSize, INPUT};
pub use label::{Label, LABEL};
pub use progress::{
    progress_class, Progress, ProgressReading, ProgressSize, PROGRESS, PROGRESS_INDICATOR,
};
pub use separator::{separator_class, separator_role, Orientation, Separator, SEPARATOR};
pub use switch::{switch_class, Switch, SwitchSize, SWITCH, SWITCH_THUMB};

/// Every variant table the library renders with, keyed by component part.
pub const SHIPPED_SPECS: &[(&str, &VariantSpec)] = &[
    ("accordion", &ACCORDION),
    ("accordion-item", &ACCORDION_ITEM),
    ("accordion-trigger", &ACCORDION_TRIGGER),
    ("accordion-content", &ACCORDION_CONTENT),
    ("badge", &BADGE),
    ("button", &BUTTON),
    ("card", &CARD),
    ("card-header", &CARD_HEADER),
    ("card-title", &CARD_TITLE),
    ("card-description", &CARD_DESCRIPTION),
    ("card-content", &CARD_CONTENT),
    ("card-footer", &CARD_FOOTER),
    ("dialog-overlay", &DIALOG_OVERLAY),
    ("dialog-content", &DIALOG_CONTENT),
    ("dialog-close", &DIALOG_CLOSE),
    ("dialog-header", &DIALOG_HEADER),
    ("dialog-footer", &DIALOG_FOOTER),
    ("dialog-title", &DIALOG_TITLE),
    ("dialog-description", &DIALOG_DESCRIPTION),
    ("input", &INPUT),
    ("label", &LABEL),
    ("progress", &PROGRESS),
    ("progress-indicator", &PROGRESS_INDICATOR),
    ("separator", &SEPARATOR),
    ("switch", &SWITCH),
    ("switch-thumb", &SWITCH_THUMB),
];
