//! Declarative mapping configuration loading
//!
//! Mapping tables can be declared in YAML instead of code:
//!
//! ```yaml
//! mappings:
//!   - source: AuthorDto
//!     destination: Author
//!     fields:
//!       - field: Id
//!         properties: [Id]
//!       - field: Age
//!         revert: true
//!         properties: [DateOfBirth]
//!       - field: Name
//!         properties:
//!           - FirstName
//!           - LastName
//! ```

use crate::core::error::{CarveResult, ConfigError};
use crate::mapping::table::{MappedProperty, MappingTable};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// A backing property in configuration: either a plain name (inheriting
/// the field-level revert default) or a full `{ name, revert }` spec.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertySpec {
    Name(String),
    Full {
        name: String,
        #[serde(default)]
        revert: bool,
    },
}

/// One field entry of a configured mapping table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Externally visible field name
    pub field: String,

    /// Revert default applied to plain-name properties
    #[serde(default)]
    pub revert: bool,

    /// Backing destination properties, in fan-out order
    pub properties: Vec<PropertySpec>,
}

/// One configured mapping table for a (source, destination) type pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Short source DTO type name (e.g. "AuthorDto")
    pub source: String,

    /// Short destination entity type name (e.g. "Author")
    pub destination: String,

    /// Field entries, in table order
    pub fields: Vec<FieldConfig>,
}

impl TableConfig {
    /// Build the runtime [`MappingTable`] from this configuration.
    ///
    /// Fails on the same conditions as programmatic construction:
    /// duplicate or empty field names, empty property lists.
    pub fn to_table(&self) -> CarveResult<MappingTable> {
        let mut table = MappingTable::new();
        for field in &self.fields {
            let properties = field
                .properties
                .iter()
                .map(|spec| match spec {
                    PropertySpec::Name(name) => MappedProperty {
                        name: name.clone(),
                        revert: field.revert,
                    },
                    PropertySpec::Full { name, revert } => MappedProperty {
                        name: name.clone(),
                        revert: *revert,
                    },
                })
                .collect();
            table = table.map(field.field.clone(), properties)?;
        }
        Ok(table)
    }
}

/// Complete mapping configuration: one entry per type pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingConfig {
    pub mappings: Vec<TableConfig>,
}

impl MappingConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> CarveResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self =
            serde_yaml::from_str(&content).map_err(|err| ConfigError::Parse {
                file: Some(path.display().to_string()),
                message: err.to_string(),
            })?;
        debug!(
            file = %path.display(),
            tables = config.mappings.len(),
            "loaded mapping config"
        );
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> CarveResult<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|err| ConfigError::Parse {
            file: None,
            message: err.to_string(),
        })?;
        Ok(config)
    }

    /// Build the mapping table declared for a (source, destination) pair,
    /// matched by short type name.
    pub fn table_for(&self, source: &str, destination: &str) -> CarveResult<MappingTable> {
        let entry = self
            .mappings
            .iter()
            .find(|m| m.source == source && m.destination == destination)
            .ok_or_else(|| ConfigError::TableNotFound {
                source_type: source.to_string(),
                destination: destination.to_string(),
            })?;
        entry.to_table()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::CarveError;

    const SAMPLE_YAML: &str = r#"
mappings:
  - source: AuthorDto
    destination: Author
    fields:
      - field: Id
        properties: [Id]
      - field: Age
        revert: true
        properties: [DateOfBirth]
      - field: Name
        properties:
          - FirstName
          - name: LastName
            revert: true
"#;

    #[test]
    fn test_parse_yaml() {
        let config = MappingConfig::from_yaml_str(SAMPLE_YAML).unwrap();
        assert_eq!(config.mappings.len(), 1);
        assert_eq!(config.mappings[0].fields.len(), 3);
    }

    #[test]
    fn test_table_for_builds_runtime_table() {
        let config = MappingConfig::from_yaml_str(SAMPLE_YAML).unwrap();
        let table = config.table_for("AuthorDto", "Author").unwrap();

        assert_eq!(table.len(), 3);
        let age = table.resolve("age").unwrap();
        assert_eq!(age[0].name, "DateOfBirth");
        assert!(age[0].revert);

        // Plain names don't inherit a revert default that isn't set;
        // full specs carry their own flag.
        let name = table.resolve("Name").unwrap();
        assert_eq!(name[0].name, "FirstName");
        assert!(!name[0].revert);
        assert_eq!(name[1].name, "LastName");
        assert!(name[1].revert);
    }

    #[test]
    fn test_table_for_missing_pair_fails() {
        let config = MappingConfig::from_yaml_str(SAMPLE_YAML).unwrap();
        let err = config.table_for("CourseDto", "Course").unwrap_err();
        assert!(matches!(
            err,
            CarveError::Config(ConfigError::TableNotFound { .. })
        ));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let err = MappingConfig::from_yaml_str("mappings: [not: [valid").unwrap_err();
        assert!(matches!(
            err,
            CarveError::Config(ConfigError::Parse { file: None, .. })
        ));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = MappingConfig::from_yaml_str(SAMPLE_YAML).unwrap();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = MappingConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed.mappings.len(), config.mappings.len());
    }

    #[test]
    fn test_duplicate_field_in_config_fails() {
        let yaml = r#"
mappings:
  - source: A
    destination: B
    fields:
      - field: Id
        properties: [Id]
      - field: id
        properties: [Identifier]
"#;
        let config = MappingConfig::from_yaml_str(yaml).unwrap();
        assert!(config.table_for("A", "B").is_err());
    }
}
