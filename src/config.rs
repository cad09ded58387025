//! Path tables for loading named paths from TOML
//!
//! A path table lists named path templates together with the registry
//! settings, so an application can declare its paths in one file instead of
//! registering each one in code.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::paths::PathRegistry;

/// Errors that can occur when loading or parsing path tables
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read path table file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse path table TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Named path templates plus registry settings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathTable {
    /// Drop parameters that fill no placeholder instead of building a query string
    pub ignore_extra_params: bool,
    /// Path templates: name -> template
    pub paths: BTreeMap<String, String>,
}

/// TOML structure for deserializing path tables
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlPathTable {
    #[serde(default)]
    settings: TomlSettings,
    #[serde(default)]
    paths: BTreeMap<String, String>,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct TomlSettings {
    #[serde(default)]
    ignore_extra_params: bool,
}

impl PathTable {
    /// Load a path table from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a path table from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlPathTable = toml::from_str(content)?;

        Ok(PathTable {
            ignore_extra_params: parsed.settings.ignore_extra_params,
            paths: parsed.paths,
        })
    }

    /// Register every path in this table and apply its settings
    pub fn apply(&self, registry: &PathRegistry) {
        registry.set_ignore_extra_params(self.ignore_extra_params);
        for (name, template) in &self.paths {
            registry.register(name.as_str(), template.as_str());
        }
        tracing::debug!(count = self.paths.len(), "applied path table");
    }

    /// Build a new registry holding this table's paths
    pub fn into_registry(self) -> PathRegistry {
        let registry = PathRegistry::new().with_ignore_extra_params(self.ignore_extra_params);
        for (name, template) in self.paths {
            registry.register(name, template);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_paths_and_settings() {
        let toml_str = r#"
[settings]
ignore_extra_params = true

[paths]
show_dog = "/dogs/:id"
create_dog = "/dogs/"
"#;
        let table = PathTable::from_str(toml_str).expect("Should parse");
        assert!(table.ignore_extra_params);
        assert_eq!(table.paths.len(), 2);
        assert_eq!(table.paths.get("show_dog").map(String::as_str), Some("/dogs/:id"));
    }

    #[test]
    fn test_parse_without_settings() {
        let table = PathTable::from_str("[paths]\nhome = \"/\"\n").expect("Should parse");
        assert!(!table.ignore_extra_params);
        assert_eq!(table.paths.get("home").map(String::as_str), Some("/"));
    }

    #[test]
    fn test_parse_empty_document() {
        let table = PathTable::from_str("").expect("Should parse");
        assert_eq!(table, PathTable::default());
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = PathTable::from_str("this is not valid toml {{{{");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_non_string_template_error() {
        let result = PathTable::from_str("[paths]\nshow_dog = 12\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_error() {
        let result = PathTable::from_file(Path::new("/nonexistent/paths.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_apply_registers_and_sets_flag() {
        let table = PathTable::from_str(
            "[settings]\nignore_extra_params = true\n[paths]\nwidgets = \"/widgets/\"\n",
        )
        .expect("Should parse");
        let registry = PathRegistry::new();
        table.apply(&registry);
        assert!(registry.ignore_extra_params());
        assert_eq!(registry.template("widgets").as_deref(), Some("/widgets/"));
    }
}
