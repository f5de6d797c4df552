//! Accessibility metrics for checking design tokens and component dimensions in tests.
//!
//! Nothing here runs at render time.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod color;
mod contrast;
mod error;
mod target;

pub use color::Rgba;
pub use contrast::{contrast_ratio, luminance, meets, required_ratio, TextSize, WcagLevel};
pub use error::ColorError;
pub use target::{TargetCriterion, TargetSize};
