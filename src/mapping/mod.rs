//! Property mapping: orderBy validation and translation per type pair

pub mod order_by;
pub mod registry;
pub mod sort;
pub mod table;

pub use order_by::{OrderByField, SortDir, parse_order_by};
pub use registry::{PropertyMappingRegistry, PropertyMappingRegistryBuilder};
pub use sort::{SortKey, SortPlan};
pub use table::{MappedProperty, MappingTable};
