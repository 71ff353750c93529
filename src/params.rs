//! Resource query parameters
//!
//! The plain deserializable carrier for the query-string surface a caller
//! accepts (`page`, `size`, `orderBy`, `fields`, `search`). No HTTP types
//! appear here; callers deserialize it from wherever their queries come
//! from.

use serde::Deserialize;

/// Maximum page size a client can request
pub const MAX_PAGE_SIZE: usize = 20;

/// Query parameters for paged, sorted, shaped resource listings
///
/// # Example
/// ```rust,ignore
/// GET /authors?page=2&size=10&orderBy=name desc&fields=id,name
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResourceQuery {
    /// Page number (starts at 1)
    #[serde(default = "default_page")]
    pub page: usize,

    /// Number of items per page
    #[serde(default = "default_size")]
    pub size: usize,

    /// Sort specification, e.g. `"name desc, age"`
    #[serde(rename = "orderBy")]
    pub order_by: Option<String>,

    /// Comma-separated field selection, e.g. `"id,name"`
    pub fields: Option<String>,

    /// Free-text search term (consumed by the storage collaborator)
    pub search: Option<String>,
}

fn default_page() -> usize {
    1
}

fn default_size() -> usize {
    10
}

// Derived Default would zero page/size; a constructed query must carry the
// same defaults a deserialized one gets.
impl Default for ResourceQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            size: default_size(),
            order_by: None,
            fields: None,
            search: None,
        }
    }
}

impl ResourceQuery {
    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Get page size, clamped to 1..=MAX_PAGE_SIZE
    pub fn size(&self) -> usize {
        self.size.clamp(1, MAX_PAGE_SIZE)
    }

    /// The orderBy string, with blank values normalized to `None`
    pub fn order_by(&self) -> Option<&str> {
        non_blank(self.order_by.as_deref())
    }

    /// The fields string, with blank values normalized to `None`
    pub fn fields(&self) -> Option<&str> {
        non_blank(self.fields.as_deref())
    }

    /// The search term, with blank values normalized to `None`
    pub fn search(&self) -> Option<&str> {
        non_blank(self.search.as_deref())
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}
