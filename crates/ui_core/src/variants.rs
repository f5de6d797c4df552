//! Declarative variant tables and their resolution into class strings.

use std::collections::HashSet;

use crate::error::{SpecError, VariantError};
use crate::merge::{ClassMerger, ClassSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One named dimension of visual variation.
pub struct VariantAxis {
    /// Axis name, e.g. `variant` or `size`.
    pub name: &'static str,
    /// Value used when the caller does not select one.
    pub default: &'static str,
    /// `(value, class fragment)` pairs in declaration order.
    pub values: &'static [(&'static str, &'static str)],
}

impl VariantAxis {
    /// Declares an axis.
    pub const fn new(
        name: &'static str,
        default: &'static str,
        values: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            name,
            default,
            values,
        }
    }

    /// Class fragment for `value`, if declared.
    pub fn fragment(&self, value: &str) -> Option<&'static str> {
        self.values
            .iter()
            .find(|(name, _)| *name == value)
            .map(|(_, fragment)| *fragment)
    }

    /// Class fragment for the default value. Empty when the default is undeclared.
    pub fn default_fragment(&self) -> &'static str {
        self.fragment(self.default).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Extra fragment applied when every listed axis value is selected together.
pub struct CompoundVariant {
    /// `(axis, value)` conditions, all of which must hold.
    pub when: &'static [(&'static str, &'static str)],
    /// Fragment appended after the per-axis fragments.
    pub class: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Variant table for one component part.
///
/// Specs are `const` items built at definition time:
///
/// ```rust
/// use ui_core::{VariantAxis, VariantSpec};
///
/// const CHIP: VariantSpec = VariantSpec::new(
///     "inline-flex rounded-full px-2",
///     &[VariantAxis::new("tone", "neutral", &[
///         ("neutral", "bg-muted text-foreground"),
///         ("danger", "bg-destructive-solid text-destructive-on-solid"),
///     ])],
/// );
///
/// assert_eq!(
///     CHIP.class(&[("tone", "danger")], Some("px-3")),
///     "inline-flex rounded-full bg-destructive-solid text-destructive-on-solid px-3"
/// );
/// ```
pub struct VariantSpec {
    /// Fragment applied to every render.
    pub base: &'static str,
    /// Axes in declaration order.
    pub axes: &'static [VariantAxis],
    /// Compound fragments in declaration order.
    pub compound: &'static [CompoundVariant],
}

impl VariantSpec {
    /// Declares a spec without compound variants.
    pub const fn new(base: &'static str, axes: &'static [VariantAxis]) -> Self {
        Self {
            base,
            axes,
            compound: &[],
        }
    }

    /// Adds compound variants.
    pub const fn with_compound(self, compound: &'static [CompoundVariant]) -> Self {
        Self {
            base: self.base,
            axes: self.axes,
            compound,
        }
    }

    /// Looks up an axis by name.
    pub fn axis(&self, name: &str) -> Option<&VariantAxis> {
        self.axes.iter().find(|axis| axis.name == name)
    }

    /// Checks the structural invariants of the table.
    ///
    /// # Errors
    ///
    /// Returns the first [`SpecError`] found: duplicate axes, duplicate values, an undeclared
    /// default, or a compound condition on an undeclared axis value.
    pub fn validate(&self) -> Result<(), SpecError> {
        let mut axis_names = HashSet::new();
        for axis in self.axes {
            if !axis_names.insert(axis.name) {
                return Err(SpecError::DuplicateAxis {
                    axis: axis.name.to_string(),
                });
            }

            let mut values = HashSet::new();
            for (value, _) in axis.values {
                if !values.insert(*value) {
                    return Err(SpecError::DuplicateValue {
                        axis: axis.name.to_string(),
                        value: value.to_string(),
                    });
                }
            }

            if axis.fragment(axis.default).is_none() {
                return Err(SpecError::MissingDefault {
                    axis: axis.name.to_string(),
                    default: axis.default.to_string(),
                });
            }
        }

        for compound in self.compound {
            for (axis, value) in compound.when {
                let declared = self
                    .axis(axis)
                    .is_some_and(|declared| declared.fragment(value).is_some());
                if !declared {
                    return Err(SpecError::UnknownCompoundValue {
                        axis: axis.to_string(),
                        value: value.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Resolves a selection into its ordered fragments.
    ///
    /// Fragments are base, one per axis in declaration order, matching compounds, then `extra`.
    /// Missing axes use their default. Invalid values also use the default and are reported in
    /// [`ResolvedStyle::fallbacks`]. When an axis is selected more than once the last entry wins.
    pub fn resolve<'a>(&self, selection: &[(&str, &str)], extra: Option<&'a str>) -> ResolvedStyle<'a> {
        let mut fragments: Vec<&'a str> = Vec::with_capacity(self.axes.len() + 2);
        let mut fallbacks = Vec::new();
        let mut chosen: Vec<(&'static str, &'static str)> = Vec::with_capacity(self.axes.len());

        fragments.push(self.base);

        for axis in self.axes {
            let requested = selection
                .iter()
                .rev()
                .find(|(name, _)| *name == axis.name)
                .map(|(_, value)| *value);

            let value = match requested {
                Some(value) => match axis.values.iter().find(|(name, _)| *name == value) {
                    Some((name, _)) => *name,
                    None => {
                        fallbacks.push(VariantError::InvalidValue {
                            axis: axis.name.to_string(),
                            value: value.to_string(),
                            fallback: axis.default.to_string(),
                        });
                        axis.default
                    }
                },
                None => axis.default,
            };

            fragments.push(axis.fragment(value).unwrap_or_default());
            chosen.push((axis.name, value));
        }

        for (name, _) in selection {
            let reported = fallbacks.iter().any(|fallback| {
                matches!(fallback, VariantError::UnknownAxis { axis } if axis == name)
            });
            if self.axis(name).is_none() && !reported {
                fallbacks.push(VariantError::UnknownAxis {
                    axis: name.to_string(),
                });
            }
        }

        for compound in self.compound {
            let matches = compound
                .when
                .iter()
                .all(|condition| chosen.contains(condition));
            if matches {
                fragments.push(compound.class);
            }
        }

        if let Some(extra) = extra.filter(|extra| !extra.trim().is_empty()) {
            fragments.push(extra);
        }

        ResolvedStyle {
            fragments,
            fallbacks,
        }
    }

    /// Resolves a selection and merges it into one class string.
    pub fn class(&self, selection: &[(&str, &str)], extra: Option<&str>) -> String {
        self.resolve(selection, extra).class()
    }

    /// Class string with every axis at its default.
    pub fn default_class(&self) -> String {
        self.class(&[], None)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Ordered fragments produced for one render, plus any fallbacks taken.
pub struct ResolvedStyle<'a> {
    fragments: Vec<&'a str>,
    fallbacks: Vec<VariantError>,
}

impl<'a> ResolvedStyle<'a> {
    /// Fragments in application order.
    pub fn fragments(&self) -> &[&'a str] {
        &self.fragments
    }

    /// Invalid or unknown selections that were replaced by defaults.
    pub fn fallbacks(&self) -> &[VariantError] {
        &self.fallbacks
    }

    /// Whether every selection was honored as written.
    pub fn is_clean(&self) -> bool {
        self.fallbacks.is_empty()
    }

    /// Merged class string using the shared merger.
    pub fn class(&self) -> String {
        self.class_with(ClassMerger::shared())
    }

    /// Merged class string using a configured merger.
    pub fn class_with(&self, merger: &ClassMerger) -> String {
        merger.merge(self.fragments.iter().map(|fragment| ClassSource::from(*fragment)))
    }

    /// Splits into fragments and fallbacks.
    pub fn into_parts(self) -> (Vec<&'a str>, Vec<VariantError>) {
        (self.fragments, self.fallbacks)
    }
}

/// A typed value on one variant axis.
///
/// Component props take these enums, so wrapper code cannot select an undeclared value. Text
/// input (story args, config) goes through [`VariantToken::parse_lenient`].
pub trait VariantToken: Copy + Default + PartialEq + 'static {
    /// Axis this type selects on.
    const AXIS: &'static str;
    /// Every value, in declaration order.
    const ALL: &'static [Self];

    /// Value name as written in the variant table.
    fn token(self) -> &'static str;

    /// Parses a value name.
    fn from_token(token: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|value| value.token() == token)
    }

    /// Parses a value name, falling back to the default and reporting the miss.
    fn parse_lenient(token: &str) -> (Self, Option<VariantError>) {
        match Self::from_token(token) {
            Some(value) => (value, None),
            None => (
                Self::default(),
                Some(VariantError::InvalidValue {
                    axis: Self::AXIS.to_string(),
                    value: token.to_string(),
                    fallback: Self::default().token().to_string(),
                }),
            ),
        }
    }

    /// `(axis, value)` pair for [`VariantSpec::resolve`].
    fn selection(self) -> (&'static str, &'static str) {
        (Self::AXIS, self.token())
    }
}
