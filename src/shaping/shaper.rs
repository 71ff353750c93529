//! Data shaping: projecting typed objects down to requested fields

use crate::core::error::{CarveResult, FieldError};
use crate::core::fields::{Field, Fielded, normalized, short_type_name};
use crate::shaping::entity::ShapedEntity;
use tracing::debug;

/// Resolve a raw field request against `T`'s field table, once per call.
///
/// Blank input selects the full table in declared order. Otherwise fields
/// come in the client's order, duplicates included; an unknown name fails
/// the whole request before any item is shaped.
fn resolve_request<T: Fielded>(fields: Option<&str>) -> CarveResult<Vec<&'static Field<T>>> {
    let Some(raw) = normalized(fields) else {
        return Ok(T::fields().iter().collect());
    };

    raw.split(',')
        .map(|requested| {
            let requested = requested.trim();
            T::field(requested).ok_or_else(|| {
                debug!(
                    type_name = short_type_name::<T>(),
                    field = requested,
                    "shaping request names an unknown field"
                );
                FieldError::UnknownField {
                    type_name: short_type_name::<T>(),
                    field: requested.to_string(),
                }
                .into()
            })
        })
        .collect()
}

fn project<T: Fielded>(item: &T, fields: &[&Field<T>]) -> ShapedEntity {
    fields
        .iter()
        .map(|field| (field.name.to_string(), (field.get)(item)))
        .collect()
}

/// Shape a sequence of items down to the requested fields.
///
/// Output keys always use the canonical declared casing, whatever casing
/// the client used. The request is validated up front, so either every
/// item is shaped or nothing is returned.
pub fn shape_data<T: Fielded>(
    items: &[T],
    fields: Option<&str>,
) -> CarveResult<Vec<ShapedEntity>> {
    let selected = resolve_request::<T>(fields)?;
    Ok(items.iter().map(|item| project(item, &selected)).collect())
}

/// Shape a single item down to the requested fields
pub fn shape_single<T: Fielded>(item: &T, fields: Option<&str>) -> CarveResult<ShapedEntity> {
    let selected = resolve_request::<T>(fields)?;
    Ok(project(item, &selected))
}

/// Pre-flight check: does every requested field exist on `T`?
///
/// True for blank input. Callers use this to reject an invalid request
/// with one descriptive client error instead of failing mid-shaping.
pub fn has_fields<T: Fielded>(fields: Option<&str>) -> bool {
    let Some(raw) = normalized(fields) else {
        return true;
    };
    raw.split(',').all(|name| T::has_field(name.trim()))
}

/// Like [`has_fields`], but reports the first offending field name
pub fn check_fields<T: Fielded>(fields: Option<&str>) -> CarveResult<()> {
    resolve_request::<T>(fields).map(|_| ())
}
