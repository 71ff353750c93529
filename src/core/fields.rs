//! Static field tables: the declared, ordered set of readable fields per type
//!
//! Instead of runtime reflection, every shapeable type carries a
//! compile-time-built table of `(name, getter)` descriptors in declaration
//! order. The `&'static` table doubles as the per-type metadata cache:
//! it is built once, never mutated, and safe for concurrent reads.

use crate::core::error::CarveResult;
use crate::core::value::FieldValue;
use crate::shaping::ShapedEntity;

/// A single field descriptor: the canonical field name plus a getter
/// extracting the field's value from an instance.
pub struct Field<T> {
    /// Canonical field name, in the casing used for output keys
    pub name: &'static str,

    /// Getter reading the field's value from an instance
    pub get: fn(&T) -> FieldValue,
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Field<T> {}

impl<T> std::fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish()
    }
}

/// Trait for types exposing a static, ordered field table.
///
/// Implementations are usually generated with [`impl_fielded!`]. Field
/// lookups are ASCII case-insensitive; the table order is the type's
/// declared field order and determines default shaping output.
///
/// [`impl_fielded!`]: crate::impl_fielded
pub trait Fielded: Sized + 'static {
    /// The field table in declared order
    fn fields() -> &'static [Field<Self>];

    /// Declared field names, in table order
    fn field_names() -> Vec<&'static str> {
        Self::fields().iter().map(|f| f.name).collect()
    }

    /// Look up a field descriptor by name (ASCII case-insensitive)
    fn field(name: &str) -> Option<&'static Field<Self>> {
        Self::fields()
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Get the value of a field by name (ASCII case-insensitive)
    fn field_value(&self, name: &str) -> Option<FieldValue> {
        Self::field(name).map(|f| (f.get)(self))
    }

    /// Check whether a field with this name is declared
    fn has_field(name: &str) -> bool {
        Self::field(name).is_some()
    }

    /// Shape this instance down to the requested fields
    fn shape(&self, fields: Option<&str>) -> CarveResult<ShapedEntity> {
        crate::shaping::shape_single(self, fields)
    }
}

/// The short type name (without module path), used in diagnostics and to
/// match configuration entries against type pairs.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Normalize a raw field/order-by request: `None`, empty, and
/// whitespace-only strings all mean "nothing requested".
pub(crate) fn normalized(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}
