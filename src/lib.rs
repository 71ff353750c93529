//! # Carve
//!
//! Data shaping, sort-key mapping and pagination primitives for building
//! field-selectable REST APIs in Rust.
//!
//! ## Features
//!
//! - **Data Shaping**: project objects down to a client-requested field
//!   subset, preserving declared field order and canonical casing
//! - **Static Field Tables**: no reflection; each type declares its fields
//!   once via `impl_fielded!` and the table is cached for the process
//! - **Property Mapping**: translate externally visible sort fields into
//!   backing entity properties, with fan-out and per-property direction
//!   reversal
//! - **Sort Plans**: ordered multi-key sort instructions with deterministic
//!   tie-breaking, plus an in-memory applier
//! - **Pagination**: skip/take paging with metadata
//! - **Configuration-Based**: declare mapping tables via YAML
//! - **Type-Safe**: registries are keyed by type identity and built once at
//!   startup; everything is immutable and lock-free afterwards
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use carve::prelude::*;
//!
//! struct AuthorDto {
//!     id: Uuid,
//!     name: String,
//!     age: i64,
//! }
//!
//! impl_fielded!(AuthorDto, {
//!     "Id" => |a| FieldValue::from(a.id),
//!     "Name" => |a| FieldValue::from(a.name.clone()),
//!     "Age" => |a| FieldValue::from(a.age),
//! });
//!
//! let registry = PropertyMappingRegistry::builder()
//!     .register::<AuthorDto, Author>(
//!         MappingTable::new()
//!             .map_direct("Id", "Id")?
//!             .map("Age", vec![MappedProperty::reverted("DateOfBirth")])?
//!             .map("Name", vec![
//!                 MappedProperty::new("FirstName"),
//!                 MappedProperty::new("LastName"),
//!             ])?,
//!     )?
//!     .build();
//!
//! // Validate, translate, sort, page, shape.
//! let plan = registry.resolve_sort::<AuthorDto, Author>(Some("age desc"))?;
//! let authors = apply_sort(authors, &plan)?;
//! let page = paginate(authors, 1, 10);
//! let shaped = shape_data(&dtos, Some("id,name"))?;
//! ```

pub mod config;
pub mod core;
pub mod mapping;
pub mod paging;
pub mod params;
pub mod shaping;
pub mod sorting;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{CarveError, CarveResult, ConfigError, FieldError, RegistryError},
        fields::{Field, Fielded, short_type_name},
        value::FieldValue,
    };

    // === Macros ===
    pub use crate::impl_fielded;

    // === Mapping ===
    pub use crate::mapping::{
        MappedProperty, MappingTable, OrderByField, PropertyMappingRegistry,
        PropertyMappingRegistryBuilder, SortDir, SortKey, SortPlan, parse_order_by,
    };

    // === Shaping ===
    pub use crate::shaping::{ShapedEntity, check_fields, has_fields, shape_data, shape_single};

    // === Sorting / paging / params ===
    pub use crate::paging::{Page, PageMeta, paginate};
    pub use crate::params::{MAX_PAGE_SIZE, ResourceQuery};
    pub use crate::sorting::apply_sort;

    // === Config ===
    pub use crate::config::{FieldConfig, MappingConfig, PropertySpec, TableConfig};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
