//! In-memory application of resolved sort plans
//!
//! The storage collaborator consuming a [`SortPlan`] can be anything that
//! sorts by an ordered list of (property, direction) pairs; this module is
//! the in-memory realization of that seam for [`Fielded`] collections.

use crate::core::error::{CarveResult, FieldError};
use crate::core::fields::{Field, Fielded, short_type_name};
use crate::mapping::sort::SortPlan;
use std::cmp::Ordering;

/// Sort items by every key of the plan, in plan order.
///
/// All keys are validated against `T`'s field table before anything is
/// compared; a key naming a missing field means the mapping table and the
/// entity disagree, which is a configuration mistake. The sort is stable,
/// so items equal under every key keep their input order as the
/// deterministic final tie-break.
pub fn apply_sort<T: Fielded>(mut items: Vec<T>, plan: &SortPlan) -> CarveResult<Vec<T>> {
    let keys: Vec<(&Field<T>, bool)> = plan
        .iter()
        .map(|key| {
            T::field(&key.property)
                .map(|field| (field, key.dir.is_descending()))
                .ok_or_else(|| {
                    FieldError::UnknownField {
                        type_name: short_type_name::<T>(),
                        field: key.property.clone(),
                    }
                    .into()
                })
        })
        .collect::<CarveResult<_>>()?;

    if keys.is_empty() {
        return Ok(items);
    }

    items.sort_by(|a, b| {
        for (field, descending) in &keys {
            let ordering = (field.get)(a).total_cmp(&(field.get)(b));
            let ordering = if *descending {
                ordering.reverse()
            } else {
                ordering
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    });
    Ok(items)
}
