//! Error types for variant resolution, spec validation, and configuration parsing.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Recoverable problems found while resolving a variant selection.
///
/// Resolution never fails on these: the axis falls back to its default and the error is carried
/// in the [`ResolvedStyle`](crate::ResolvedStyle) so the caller can log it.
pub enum VariantError {
    /// The selected value is not declared for the axis.
    #[error("unknown value `{value}` for variant axis `{axis}`, using `{fallback}`")]
    InvalidValue {
        /// Axis name.
        axis: String,
        /// Rejected value.
        value: String,
        /// Default value used instead.
        fallback: String,
    },
    /// The selection names an axis the variant table does not declare.
    #[error("variant axis `{axis}` is not declared")]
    UnknownAxis {
        /// Axis name.
        axis: String,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Structural problems in a [`VariantSpec`](crate::VariantSpec).
pub enum SpecError {
    /// The designated default is not one of the axis values.
    #[error("axis `{axis}` declares default `{default}` but has no such value")]
    MissingDefault {
        /// Axis name.
        axis: String,
        /// Declared default.
        default: String,
    },
    /// Two axes share a name.
    #[error("axis `{axis}` is declared more than once")]
    DuplicateAxis {
        /// Axis name.
        axis: String,
    },
    /// An axis lists the same value twice.
    #[error("axis `{axis}` declares value `{value}` more than once")]
    DuplicateValue {
        /// Axis name.
        axis: String,
        /// Repeated value.
        value: String,
    },
    /// A compound variant matches on an axis value that does not exist.
    #[error("compound variant references unknown `{axis}={value}`")]
    UnknownCompoundValue {
        /// Axis name.
        axis: String,
        /// Referenced value.
        value: String,
    },
}

#[derive(Debug, Error)]
/// Failures parsing TOML configuration.
pub enum ConfigError {
    /// The body is not valid TOML for the target type.
    #[error("failed to parse {origin}: {source}")]
    Parse {
        /// Label of the parsed text.
        origin: String,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },
}
