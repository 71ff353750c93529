//! Shaped output records

use crate::core::error::{CarveResult, FieldError};
use crate::core::fields::normalized;
use crate::core::value::FieldValue;
use indexmap::IndexMap;
use serde::Serialize;

/// One shaped output record: an insertion-ordered mapping from canonical
/// field name to value.
///
/// Serializes transparently as a JSON object whose keys appear in
/// insertion order. Treated as immutable once handed to the serializer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ShapedEntity {
    fields: IndexMap<String, FieldValue>,
}

impl ShapedEntity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field under its canonical name. Re-inserting an existing
    /// key overwrites the value and keeps the key's original position.
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    /// Get a field's value by name (ASCII case-insensitive)
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    /// Field names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Re-project this record down to the requested fields.
    ///
    /// Blank input selects every field this record already has; fields
    /// dropped by an earlier shaping pass are gone and cannot come back.
    /// Requested names match case-insensitively; output keys keep this
    /// record's canonical casing. An unknown name is a client-facing
    /// error.
    pub fn select(&self, fields: Option<&str>) -> CarveResult<ShapedEntity> {
        let Some(raw) = normalized(fields) else {
            return Ok(self.clone());
        };

        let mut selected = ShapedEntity::new();
        for requested in raw.split(',').map(str::trim) {
            let (key, value) = self
                .fields
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(requested))
                .ok_or_else(|| FieldError::UnknownField {
                    type_name: "ShapedEntity",
                    field: requested.to_string(),
                })?;
            selected.insert(key.clone(), value.clone());
        }
        Ok(selected)
    }
}

impl FromIterator<(String, FieldValue)> for ShapedEntity {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ShapedEntity {
    type Item = (String, FieldValue);
    type IntoIter = indexmap::map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ShapedEntity {
        let mut entity = ShapedEntity::new();
        entity.insert("Id", FieldValue::Integer(1));
        entity.insert("Name", FieldValue::from("Ada"));
        entity.insert("Age", FieldValue::Integer(36));
        entity
    }

    #[test]
    fn test_insertion_order() {
        let entity = sample();
        let keys: Vec<&str> = entity.keys().collect();
        assert_eq!(keys, vec!["Id", "Name", "Age"]);
    }

    #[test]
    fn test_get_case_insensitive() {
        let entity = sample();
        assert_eq!(entity.get("name"), Some(&FieldValue::from("Ada")));
        assert_eq!(entity.get("NAME"), Some(&FieldValue::from("Ada")));
        assert_eq!(entity.get("missing"), None);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut entity = sample();
        entity.insert("Id", FieldValue::Integer(2));
        let keys: Vec<&str> = entity.keys().collect();
        assert_eq!(keys, vec!["Id", "Name", "Age"]);
        assert_eq!(entity.get("Id"), Some(&FieldValue::Integer(2)));
    }

    #[test]
    fn test_select_subset_canonical_casing() {
        let entity = sample();
        let selected = entity.select(Some("age,ID")).unwrap();
        let keys: Vec<&str> = selected.keys().collect();
        assert_eq!(keys, vec!["Age", "Id"]);
    }

    #[test]
    fn test_select_blank_keeps_current_fields_only() {
        let entity = sample();
        let narrowed = entity.select(Some("Id,Name")).unwrap();
        let reselected = narrowed.select(None).unwrap();
        let keys: Vec<&str> = reselected.keys().collect();
        assert_eq!(keys, vec!["Id", "Name"]);
    }

    #[test]
    fn test_select_unknown_field_fails() {
        let entity = sample();
        let err = entity.select(Some("Id,bogus")).unwrap_err();
        assert!(err.is_client_error());
    }

    #[test]
    fn test_serialize_transparent_ordered() {
        let entity = sample();
        let json = serde_json::to_string(&entity).expect("serialize should succeed");
        assert_eq!(json, r#"{"Id":1,"Name":"Ada","Age":36}"#);
    }
}
