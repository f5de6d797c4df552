//! Typed TOML configuration for the class merger.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Deserializes a TOML body, labelling failures with `origin`.
pub(crate) fn parse_toml<T: DeserializeOwned>(origin: &str, body: &str) -> Result<T, ConfigError> {
    toml::from_str(body).map_err(|source| ConfigError::Parse {
        origin: origin.to_string(),
        source,
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Extension points for the class merger.
///
/// ```toml
/// font_sizes = ["caption", "display"]
///
/// [[groups]]
/// id = "elevation"
/// prefixes = ["elevation"]
///
/// [conflicts]
/// elevation = ["shadow"]
/// ```
pub struct MergeConfig {
    /// Project-specific utility groups, consulted before the built-in ones.
    pub groups: Vec<CustomGroup>,
    /// Extra overrides: a class in the key group also replaces classes in the listed groups.
    pub conflicts: BTreeMap<String, Vec<String>>,
    /// Extra `text-*` names that are font sizes rather than colors.
    pub font_sizes: Vec<String>,
}

impl MergeConfig {
    /// Parses a merge config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys.
    pub fn from_toml_str(body: &str) -> Result<Self, ConfigError> {
        parse_toml("merge config", body)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
/// One project-specific utility group.
pub struct CustomGroup {
    /// Group identifier. End it in `-color` when the group writes a color.
    pub id: String,
    /// Whole class names belonging to the group.
    #[serde(default)]
    pub classes: Vec<String>,
    /// Prefixes whose `prefix-*` classes belong to the group.
    #[serde(default)]
    pub prefixes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn merge_config_parses_groups_conflicts_and_font_sizes() {
        let config = MergeConfig::from_toml_str(
            r#"
            font_sizes = ["caption"]

            [[groups]]
            id = "elevation"
            prefixes = ["elevation"]

            [conflicts]
            elevation = ["shadow"]
            "#,
        )
        .expect("parse merge config");

        assert_eq!(config.font_sizes, vec!["caption".to_string()]);
        assert_eq!(
            config.groups,
            vec![CustomGroup {
                id: "elevation".to_string(),
                classes: Vec::new(),
                prefixes: vec!["elevation".to_string()],
            }]
        );
        assert_eq!(
            config.conflicts.get("elevation"),
            Some(&vec!["shadow".to_string()])
        );
    }

    #[test]
    fn merge_config_rejects_unknown_keys() {
        let err = MergeConfig::from_toml_str("colours = []").expect_err("unknown key");
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("failed to parse merge config"));
    }
}
