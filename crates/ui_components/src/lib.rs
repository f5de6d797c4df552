//! Styled component wrappers for the shared design system.
//!
//! Each component binds a `const` variant table from [`ui_core`] and renders one element (or a
//! small composed tree) with the resolved class string, a caller-supplied `NodeRef`, and any extra
//! attributes spread onto its root. Interactive state (open, checked) is injected through
//! [`ToggleState`]; wrappers read it for `data-state` and ARIA output and never keep a copy.
//!
//! Every root carries a stable `data-slot` naming the component part.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod components;
mod focus;
mod icon;
mod primitive;

pub use components::*;
pub use focus::{should_restore_focus, tab_wrap_target};
pub use icon::{Icon, IconName};
pub use primitive::{checked_state_token, open_state_token, ToggleState};

/// Convenience imports for applications composing the component set.
pub mod prelude {
    pub use crate::{
        Accordion, AccordionContent, AccordionItem, AccordionMode, AccordionTrigger, Badge,
        BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription,
        CardFooter, CardHeader, CardTitle, Dialog, DialogClose, DialogContent, DialogDescription,
        DialogFooter, DialogHeader, DialogTitle, DialogTrigger, Icon, IconName, Input, InputSize,
        Label, Orientation, Progress, ProgressSize, Separator, Switch, SwitchSize, ToggleState,
    };
    pub use ui_core::{cn, VariantToken};
}
