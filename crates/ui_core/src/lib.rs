//! Style core for the shared component library.
//!
//! Every component binds a `const` [`VariantSpec`] (base classes plus variant axes) and resolves
//! it on each render into one class string. Resolution is a pure table lookup followed by a
//! Tailwind-aware [merge](merge_classes) in which later classes replace earlier classes that
//! write the same CSS property. The crate also owns the [`DesignTokens`] those classes refer to
//! and the TOML configuration that extends the merger.
//!
//! ```rust
//! use ui_core::{cn, VariantAxis, VariantSpec};
//!
//! const PILL: VariantSpec = VariantSpec::new(
//!     "inline-flex rounded-full px-2 text-xs",
//!     &[VariantAxis::new("tone", "muted", &[
//!         ("muted", "bg-muted text-muted-foreground"),
//!         ("solid", "bg-base-solid text-base-on-solid"),
//!     ])],
//! );
//!
//! let class = PILL.class(&[("tone", "solid")], Some("px-3"));
//! assert_eq!(class, "inline-flex rounded-full text-xs bg-base-solid text-base-on-solid px-3");
//! assert_eq!(cn!(class.as_str(), ("hidden", false)), class);
//! ```

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod config;
mod error;
mod groups;
mod merge;
mod tokens;
mod variants;

pub use config::{CustomGroup, MergeConfig};
pub use error::{ConfigError, SpecError, VariantError};
pub use groups::Classified;
pub use merge::{merge_classes, ClassMerger, ClassSource};
pub use tokens::{ColorScheme, DesignTokens, KeyframeStep, PALETTE_KEYWORDS};
pub use variants::{CompoundVariant, ResolvedStyle, VariantAxis, VariantSpec, VariantToken};
