//! Resolved sort instructions handed to the storage collaborator

use crate::mapping::order_by::SortDir;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One resolved sort instruction: a destination entity property and the
/// effective direction after applying the mapping's revert flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    /// Destination entity property name
    pub property: String,

    /// Effective sort direction
    pub dir: SortDir,
}

impl SortKey {
    pub fn new(property: impl Into<String>, dir: SortDir) -> Self {
        Self {
            property: property.into(),
            dir,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.property, self.dir)
    }
}

/// An ordered sequence of sort keys.
///
/// Key order is significant: the storage layer sorts by the first key and
/// breaks ties with each subsequent key. [`SortPlan::ensure_tiebreaker`]
/// appends a final deterministic key (typically the primary key) when the
/// plan does not already sort by it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortPlan {
    keys: Vec<SortKey>,
}

impl SortPlan {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: SortKey) {
        self.keys.push(key);
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SortKey> {
        self.keys.iter()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Append a final tie-breaking key unless the plan already sorts by
    /// this property (ASCII case-insensitive).
    pub fn ensure_tiebreaker(&mut self, property: &str, dir: SortDir) {
        let present = self
            .keys
            .iter()
            .any(|key| key.property.eq_ignore_ascii_case(property));
        if !present {
            self.keys.push(SortKey::new(property, dir));
        }
    }
}

impl fmt::Display for SortPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.keys.iter().map(SortKey::to_string).collect();
        write!(f, "{}", rendered.join(", "))
    }
}

impl IntoIterator for SortPlan {
    type Item = SortKey;
    type IntoIter = std::vec::IntoIter<SortKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter()
    }
}

impl<'a> IntoIterator for &'a SortPlan {
    type Item = &'a SortKey;
    type IntoIter = std::slice::Iter<'a, SortKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

impl FromIterator<SortKey> for SortPlan {
    fn from_iter<I: IntoIterator<Item = SortKey>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let plan: SortPlan = [
            SortKey::new("FirstName", SortDir::Desc),
            SortKey::new("LastName", SortDir::Asc),
        ]
        .into_iter()
        .collect();
        assert_eq!(plan.to_string(), "FirstName desc, LastName asc");
    }

    #[test]
    fn test_ensure_tiebreaker_appends_when_missing() {
        let mut plan: SortPlan = [SortKey::new("Name", SortDir::Asc)].into_iter().collect();
        plan.ensure_tiebreaker("Id", SortDir::Asc);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.keys()[1], SortKey::new("Id", SortDir::Asc));
    }

    #[test]
    fn test_ensure_tiebreaker_skips_existing_key() {
        let mut plan: SortPlan = [SortKey::new("id", SortDir::Desc)].into_iter().collect();
        plan.ensure_tiebreaker("Id", SortDir::Asc);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.keys()[0].dir, SortDir::Desc);
    }

    #[test]
    fn test_empty_plan() {
        let plan = SortPlan::empty();
        assert!(plan.is_empty());
        assert_eq!(plan.to_string(), "");
    }
}
