//! Client orderBy clause model and parser

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort direction for one key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDir {
    #[serde(rename = "asc")]
    Asc,
    #[serde(rename = "desc")]
    Desc,
}

impl SortDir {
    /// Reverse the sort direction (Asc <-> Desc)
    pub fn reverse(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }

    pub fn is_descending(self) -> bool {
        matches!(self, SortDir::Desc)
    }
}

impl fmt::Display for SortDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDir::Asc => write!(f, "asc"),
            SortDir::Desc => write!(f, "desc"),
        }
    }
}

/// One parsed clause of a client `orderBy` string: the externally visible
/// field name plus the requested direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderByField {
    /// Field name as the client wrote it (trimmed, original casing)
    pub name: String,

    /// Requested direction (ascending unless the clause ends in `desc`)
    pub dir: SortDir,
}

/// Parse a raw `orderBy` query string into its clauses.
///
/// Clauses are comma-separated and trimmed. Within a clause, everything up
/// to the first whitespace is the field name; the remainder is the
/// direction token, which selects descending only when it equals `desc`
/// (ASCII case-insensitive). Any other token, or no token, means ascending.
///
/// No validation happens here: names are kept as written, including empty
/// segments from inputs like `"a,,b"`, so that lookup can report them as
/// unknown fields.
pub fn parse_order_by(raw: &str) -> Vec<OrderByField> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    raw.split(',')
        .map(|clause| {
            let clause = clause.trim();
            match clause.split_once(char::is_whitespace) {
                Some((name, direction)) => {
                    let dir = if direction.trim().eq_ignore_ascii_case("desc") {
                        SortDir::Desc
                    } else {
                        SortDir::Asc
                    };
                    OrderByField {
                        name: name.to_string(),
                        dir,
                    }
                }
                None => OrderByField {
                    name: clause.to_string(),
                    dir: SortDir::Asc,
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_dir_reverse() {
        assert_eq!(SortDir::Asc.reverse(), SortDir::Desc);
        assert_eq!(SortDir::Desc.reverse(), SortDir::Asc);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_order_by("").is_empty());
        assert!(parse_order_by("   ").is_empty());
    }

    #[test]
    fn test_parse_single_field_defaults_ascending() {
        let clauses = parse_order_by("name");
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].name, "name");
        assert_eq!(clauses[0].dir, SortDir::Asc);
    }

    #[test]
    fn test_parse_desc_case_insensitive() {
        let clauses = parse_order_by("name DESC");
        assert_eq!(clauses[0].dir, SortDir::Desc);

        let clauses = parse_order_by("name Desc");
        assert_eq!(clauses[0].dir, SortDir::Desc);
    }

    #[test]
    fn test_parse_unknown_direction_token_is_ascending() {
        let clauses = parse_order_by("name backwards");
        assert_eq!(clauses[0].name, "name");
        assert_eq!(clauses[0].dir, SortDir::Asc);
    }

    #[test]
    fn test_parse_multiple_clauses_preserve_order() {
        let clauses = parse_order_by(" name desc , age , id asc ");
        assert_eq!(clauses.len(), 3);
        assert_eq!(clauses[0].name, "name");
        assert_eq!(clauses[0].dir, SortDir::Desc);
        assert_eq!(clauses[1].name, "age");
        assert_eq!(clauses[1].dir, SortDir::Asc);
        assert_eq!(clauses[2].name, "id");
        assert_eq!(clauses[2].dir, SortDir::Asc);
    }

    #[test]
    fn test_parse_keeps_empty_segments() {
        let clauses = parse_order_by("a,,b");
        assert_eq!(clauses.len(), 3);
        assert_eq!(clauses[1].name, "");
    }
}
