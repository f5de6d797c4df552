//! Design tokens backing the utility classes used by component variant tables.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::config::parse_toml;
use crate::error::ConfigError;

const BUILTIN_TOKENS: &str = include_str!("tokens.toml");

/// Color names every Tailwind theme provides without a token.
pub const PALETTE_KEYWORDS: &[&str] = &["black", "white", "transparent", "current", "inherit"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// A theme: light colors, dark overrides, radius, and named animations.
///
/// Rendered to CSS custom properties with [`DesignTokens::to_css`]; a `bg-primary-solid` class
/// resolves through `--color-primary-solid`.
pub struct DesignTokens {
    /// Base corner radius.
    pub radius: String,
    /// Light-scheme colors by token name.
    pub colors: BTreeMap<String, String>,
    /// Dark-scheme overrides by token name.
    #[serde(default)]
    pub dark: BTreeMap<String, String>,
    /// `animation` shorthands by utility name (`animate-<name>`).
    #[serde(default)]
    pub animations: BTreeMap<String, String>,
    /// Keyframe steps by `@keyframes` name.
    #[serde(default)]
    pub keyframes: BTreeMap<String, Vec<KeyframeStep>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// One step of a `@keyframes` rule.
pub struct KeyframeStep {
    /// Selector such as `from`, `to`, or `50%`.
    pub offset: String,
    /// Declarations applied at this step, without braces.
    pub style: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Color scheme selector.
pub enum ColorScheme {
    /// Light colors.
    Light,
    /// Light colors with dark overrides applied.
    Dark,
}

impl DesignTokens {
    /// The token set shipped with the library.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the embedded token file is malformed.
    pub fn builtin() -> Result<Self, ConfigError> {
        parse_toml("built-in design tokens", BUILTIN_TOKENS)
    }

    /// Parses a token set from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys.
    pub fn from_toml_str(body: &str) -> Result<Self, ConfigError> {
        parse_toml("design tokens", body)
    }

    /// Whether `name` is a declared color token.
    pub fn has_color(&self, name: &str) -> bool {
        self.colors.contains_key(name)
    }

    /// Whether `name` is a declared animation.
    pub fn has_animation(&self, name: &str) -> bool {
        self.animations.contains_key(name)
    }

    /// Color value for `name` in `scheme`. Dark lookups fall back to the light value.
    pub fn color(&self, name: &str, scheme: ColorScheme) -> Option<&str> {
        let dark = match scheme {
            ColorScheme::Dark => self.dark.get(name),
            ColorScheme::Light => None,
        };
        dark.or_else(|| self.colors.get(name)).map(String::as_str)
    }

    /// Animations whose shorthand names a keyframe the token set does not declare.
    ///
    /// The keyframe name is the first word of the shorthand.
    pub fn animations_missing_keyframes(&self) -> Vec<&str> {
        self.animations
            .iter()
            .filter(|(_, shorthand)| {
                shorthand
                    .split_whitespace()
                    .next()
                    .map_or(true, |keyframe| !self.keyframes.contains_key(keyframe))
            })
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Dark overrides naming colors with no light value.
    pub fn orphaned_dark_colors(&self) -> Vec<&str> {
        self.dark
            .keys()
            .filter(|name| !self.colors.contains_key(*name))
            .map(String::as_str)
            .collect()
    }

    /// Renders the token set as CSS custom properties followed by its `@keyframes` rules.
    ///
    /// ```rust
    /// let css = ui_core::DesignTokens::builtin().expect("tokens").to_css();
    /// assert!(css.starts_with(":root {\n  --radius: 0.5rem;\n"));
    /// assert!(css.contains("  --color-base-solid: #e4e4e7;\n"));
    /// assert!(css.contains(".dark {\n"));
    /// assert!(css.contains("@keyframes progress-indeterminate {\n"));
    /// ```
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        let _ = writeln!(css, "  --radius: {};", self.radius);
        for (name, value) in &self.colors {
            let _ = writeln!(css, "  --color-{name}: {value};");
        }
        for (name, value) in &self.animations {
            let _ = writeln!(css, "  --animate-{name}: {value};");
        }
        css.push_str("}\n");

        if !self.dark.is_empty() {
            css.push_str("\n.dark {\n");
            for (name, value) in &self.dark {
                let _ = writeln!(css, "  --color-{name}: {value};");
            }
            css.push_str("}\n");
        }

        for (name, steps) in &self.keyframes {
            let _ = writeln!(css, "\n@keyframes {name} {{");
            for step in steps {
                let _ = writeln!(css, "  {} {{ {}; }}", step.offset, step.style);
            }
            css.push_str("}\n");
        }
        css
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builtin_tokens_parse_and_cover_dark_scheme() {
        let tokens = DesignTokens::builtin().expect("builtin tokens");
        assert!(tokens.has_color("base-solid"));
        assert!(tokens.has_animation("progress-indeterminate"));
        assert!(tokens.orphaned_dark_colors().is_empty());
        for name in tokens.colors.keys() {
            assert!(tokens.dark.contains_key(name), "missing dark value for {name}");
        }
    }

    #[test]
    fn dark_lookup_falls_back_to_light_value() {
        let tokens = DesignTokens::from_toml_str(
            r##"
            radius = "0.25rem"

            [colors]
            background = "#ffffff"
            accent = "#1d4ed8"

            [dark]
            background = "#000000"
            "##,
        )
        .expect("parse tokens");

        assert_eq!(tokens.color("background", ColorScheme::Dark), Some("#000000"));
        assert_eq!(tokens.color("accent", ColorScheme::Dark), Some("#1d4ed8"));
        assert_eq!(tokens.color("accent", ColorScheme::Light), Some("#1d4ed8"));
        assert_eq!(tokens.color("missing", ColorScheme::Light), None);
    }

    #[test]
    fn css_output_lists_custom_properties_in_name_order() {
        let tokens = DesignTokens::from_toml_str(
            r##"
            radius = "0.25rem"

            [colors]
            ring = "#111111"
            border = "#eeeeee"

            [animations]
            spin-slow = "spin 3s linear infinite"
            "##,
        )
        .expect("parse tokens");

        assert_eq!(
            tokens.to_css(),
            ":root {\n  --radius: 0.25rem;\n  --color-border: #eeeeee;\n  --color-ring: #111111;\n  --animate-spin-slow: spin 3s linear infinite;\n}\n"
        );
    }

    #[test]
    fn builtin_animations_have_keyframes() {
        let tokens = DesignTokens::builtin().expect("builtin tokens");
        assert!(tokens.animations_missing_keyframes().is_empty());

        let css = tokens.to_css();
        for name in tokens.animations.keys() {
            assert!(css.contains(&format!("@keyframes {name} {{")), "no keyframes for {name}");
        }
    }

    #[test]
    fn keyframes_render_after_the_custom_properties() {
        let tokens = DesignTokens::from_toml_str(
            r##"
            radius = "0.25rem"

            [colors]
            ring = "#111111"

            [animations]
            pulse-soft = "pulse-soft 2s ease-in-out infinite"
            spin-slow = "spin 3s linear infinite"

            [keyframes]
            pulse-soft = [
                { offset = "0%, 100%", style = "opacity: 1" },
                { offset = "50%", style = "opacity: 0.5" },
            ]
            "##,
        )
        .expect("parse tokens");

        assert_eq!(tokens.animations_missing_keyframes(), vec!["spin-slow"]);
        assert!(tokens.to_css().ends_with(
            "\n@keyframes pulse-soft {\n  0%, 100% { opacity: 1; }\n  50% { opacity: 0.5; }\n}\n"
        ));
    }

    #[test]
    fn unknown_sections_are_rejected() {
        let err = DesignTokens::from_toml_str("radius = \"1rem\"\ncolors = {}\n[fonts]\nsans = \"Inter\"\n")
            .expect_err("unknown section");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
