//! Property mapping registry: validated orderBy translation per type pair
//!
//! The registry holds one [`MappingTable`] per (source DTO, destination
//! entity) type pair. It is built once at startup through
//! [`PropertyMappingRegistryBuilder`], is immutable afterwards, and is
//! passed explicitly to its consumers; unsynchronized concurrent reads are
//! safe.

use crate::config::MappingConfig;
use crate::core::error::{CarveResult, FieldError, RegistryError};
use crate::core::fields::{normalized, short_type_name};
use crate::mapping::order_by::parse_order_by;
use crate::mapping::sort::{SortKey, SortPlan};
use crate::mapping::table::MappingTable;
use std::any::TypeId;
use std::collections::HashMap;
use tracing::debug;

struct RegisteredTable {
    source: &'static str,
    destination: &'static str,
    table: MappingTable,
}

/// Builder for [`PropertyMappingRegistry`].
///
/// Registration steps return `CarveResult<Self>` so startup code can chain
/// them with `?`; a duplicate type pair is a configuration error, never a
/// silent overwrite.
#[derive(Default)]
pub struct PropertyMappingRegistryBuilder {
    tables: HashMap<(TypeId, TypeId), RegisteredTable>,
}

impl PropertyMappingRegistryBuilder {
    /// Register a mapping table for the (S, D) type pair
    pub fn register<S: 'static, D: 'static>(mut self, table: MappingTable) -> CarveResult<Self> {
        let source = short_type_name::<S>();
        let destination = short_type_name::<D>();
        let key = (TypeId::of::<S>(), TypeId::of::<D>());

        if self.tables.contains_key(&key) {
            return Err(RegistryError::DuplicateTable {
                source_type: source,
                destination,
            }
            .into());
        }

        debug!(
            source,
            destination,
            fields = table.len(),
            "registered mapping table"
        );
        self.tables.insert(
            key,
            RegisteredTable {
                source,
                destination,
                table,
            },
        );
        Ok(self)
    }

    /// Register the (S, D) pair from a declarative [`MappingConfig`],
    /// matched by the pair's short type names.
    pub fn register_from_config<S: 'static, D: 'static>(
        self,
        config: &MappingConfig,
    ) -> CarveResult<Self> {
        let table = config.table_for(short_type_name::<S>(), short_type_name::<D>())?;
        self.register::<S, D>(table)
    }

    /// Finish building; the registry is immutable from here on
    pub fn build(self) -> PropertyMappingRegistry {
        PropertyMappingRegistry {
            tables: self.tables,
        }
    }
}

/// Immutable registry of mapping tables keyed by (source, destination)
/// type identity.
///
/// # Example
///
/// ```rust,ignore
/// let registry = PropertyMappingRegistry::builder()
///     .register::<AuthorDto, Author>(author_table())?
///     .register::<CourseDto, Course>(course_table())?
///     .build();
///
/// if !registry.supports_order_by::<AuthorDto, Author>(query.order_by())? {
///     return reject("invalid orderBy");
/// }
/// let plan = registry.resolve_sort::<AuthorDto, Author>(query.order_by())?;
/// ```
pub struct PropertyMappingRegistry {
    tables: HashMap<(TypeId, TypeId), RegisteredTable>,
}

impl PropertyMappingRegistry {
    pub fn builder() -> PropertyMappingRegistryBuilder {
        PropertyMappingRegistryBuilder::default()
    }

    fn entry<S: 'static, D: 'static>(&self) -> CarveResult<&RegisteredTable> {
        let key = (TypeId::of::<S>(), TypeId::of::<D>());
        self.tables.get(&key).ok_or_else(|| {
            RegistryError::TableNotFound {
                source_type: short_type_name::<S>(),
                destination: short_type_name::<D>(),
            }
            .into()
        })
    }

    /// The mapping table for the (S, D) pair.
    ///
    /// A missing table is a configuration error: the pair was never
    /// registered at startup.
    pub fn table<S: 'static, D: 'static>(&self) -> CarveResult<&MappingTable> {
        self.entry::<S, D>().map(|entry| &entry.table)
    }

    /// Check whether every field named in an `orderBy` string is mapped
    /// for the (S, D) pair.
    ///
    /// Vacuously true for `None`, empty and whitespace-only input. Only
    /// field names are validated; direction tokens never invalidate a
    /// clause. Returns `Err` only for the missing-table configuration
    /// error, so client-input invalidity stays distinct.
    pub fn supports_order_by<S: 'static, D: 'static>(
        &self,
        order_by: Option<&str>,
    ) -> CarveResult<bool> {
        let entry = self.entry::<S, D>()?;
        let Some(raw) = normalized(order_by) else {
            return Ok(true);
        };

        for clause in parse_order_by(raw) {
            if !entry.table.contains(&clause.name) {
                debug!(
                    source = entry.source,
                    destination = entry.destination,
                    field = %clause.name,
                    "orderBy names an unmapped field"
                );
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Translate an `orderBy` string into a [`SortPlan`] for the (S, D)
    /// pair.
    ///
    /// Clauses keep the client-specified order; within one clause, keys
    /// follow the mapping's declared fan-out order. The effective
    /// direction per key is the requested direction, reversed when the
    /// backing property carries the revert flag. An unmapped field name is
    /// a client-facing [`FieldError::UnknownSortField`].
    pub fn resolve_sort<S: 'static, D: 'static>(
        &self,
        order_by: Option<&str>,
    ) -> CarveResult<SortPlan> {
        let entry = self.entry::<S, D>()?;
        let Some(raw) = normalized(order_by) else {
            return Ok(SortPlan::empty());
        };

        let mut plan = SortPlan::empty();
        for clause in parse_order_by(raw) {
            let properties = entry.table.resolve(&clause.name).ok_or_else(|| {
                FieldError::UnknownSortField {
                    field: clause.name.clone(),
                }
            })?;

            for property in properties {
                let dir = if property.revert {
                    clause.dir.reverse()
                } else {
                    clause.dir
                };
                plan.push(SortKey::new(property.name.clone(), dir));
            }
        }
        Ok(plan)
    }
}
