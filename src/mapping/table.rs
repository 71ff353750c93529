//! Mapping tables: externally visible field names to backing properties

use crate::core::error::RegistryError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One backing destination property behind an external field, with its
/// sort-direction reversal flag.
///
/// The `revert` flag marks properties whose storage order is inverted
/// relative to the exposed field (e.g. an "Age" field backed by a
/// date-of-birth column: older means a smaller date, so ascending age is
/// descending date-of-birth).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedProperty {
    /// Destination entity property name
    pub name: String,

    /// Invert the requested sort direction for this property
    #[serde(default)]
    pub revert: bool,
}

impl MappedProperty {
    /// A property mapped with the same sort direction as requested
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            revert: false,
        }
    }

    /// A property whose sort direction is inverted relative to the request
    pub fn reverted(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            revert: true,
        }
    }
}

/// A mapping table for one (source DTO, destination entity) type pair:
/// external field name to its non-empty, ordered fan-out of backing
/// properties.
///
/// Keys are unique under ASCII case-insensitive comparison and kept in
/// insertion order. Lookups are ASCII case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    entries: IndexMap<String, Vec<MappedProperty>>,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field mapping, consuming and returning the table for chaining.
    ///
    /// Fails on an empty field name, an empty property list, or a field
    /// name already present under case-insensitive comparison.
    pub fn map(
        mut self,
        field: impl Into<String>,
        properties: Vec<MappedProperty>,
    ) -> Result<Self, RegistryError> {
        let field = field.into();
        if field.trim().is_empty() {
            return Err(RegistryError::EmptyFieldName);
        }
        if properties.is_empty() {
            return Err(RegistryError::EmptyProperties { field });
        }
        if self.contains(&field) {
            return Err(RegistryError::DuplicateField { field });
        }

        self.entries.insert(field, properties);
        Ok(self)
    }

    /// Shorthand for the common 1:1 case: one field, one same-direction
    /// backing property.
    pub fn map_direct(
        self,
        field: impl Into<String>,
        property: impl Into<String>,
    ) -> Result<Self, RegistryError> {
        self.map(field, vec![MappedProperty::new(property)])
    }

    /// Resolve a field name to its backing properties (ASCII
    /// case-insensitive)
    pub fn resolve(&self, field: &str) -> Option<&[MappedProperty]> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(field))
            .map(|(_, properties)| properties.as_slice())
    }

    /// Check whether a field name is mapped (ASCII case-insensitive)
    pub fn contains(&self, field: &str) -> bool {
        self.resolve(field).is_some()
    }

    /// Mapped field names, in insertion order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
