//! Macro for declaring field tables without boilerplate

/// Implement [`Fielded`](crate::core::fields::Fielded) for a type from a
/// declarative list of `"Name" => getter` arms.
///
/// Field order in the macro is the declared order used for default shaping
/// output. Getters receive `&Type` and return a
/// [`FieldValue`](crate::core::value::FieldValue).
///
/// # Example
///
/// ```rust,ignore
/// use carve::prelude::*;
///
/// struct AuthorDto {
///     id: Uuid,
///     name: String,
///     age: i64,
/// }
///
/// impl_fielded!(AuthorDto, {
///     "Id" => |a| FieldValue::from(a.id),
///     "Name" => |a| FieldValue::from(a.name.clone()),
///     "Age" => |a| FieldValue::from(a.age),
/// });
/// ```
#[macro_export]
macro_rules! impl_fielded {
    (
        $type:ty,
        {
            $( $name:literal => $getter:expr ),* $(,)?
        }
    ) => {
        impl $crate::core::fields::Fielded for $type {
            fn fields() -> &'static [$crate::core::fields::Field<Self>] {
                const FIELDS: &[$crate::core::fields::Field<$type>] = &[
                    $(
                        $crate::core::fields::Field {
                            name: $name,
                            get: {
                                fn getter(item: &$type) -> $crate::core::value::FieldValue {
                                    let get: fn(&$type) -> $crate::core::value::FieldValue =
                                        $getter;
                                    get(item)
                                }
                                getter
                            },
                        }
                    ),*
                ];
                FIELDS
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::fields::Fielded;
    use crate::core::value::FieldValue;

    struct Point {
        x: f64,
        y: f64,
        label: Option<String>,
    }

    impl_fielded!(Point, {
        "X" => |p| FieldValue::from(p.x),
        "Y" => |p| FieldValue::from(p.y),
        "Label" => |p| FieldValue::from(p.label.clone()),
    });

    #[test]
    fn test_generated_table_order() {
        assert_eq!(Point::field_names(), vec!["X", "Y", "Label"]);
    }

    #[test]
    fn test_generated_getters() {
        let point = Point {
            x: 1.0,
            y: -2.0,
            label: None,
        };
        assert_eq!(point.field_value("x"), Some(FieldValue::Float(1.0)));
        assert_eq!(point.field_value("Y"), Some(FieldValue::Float(-2.0)));
        assert_eq!(point.field_value("label"), Some(FieldValue::Null));
    }
}
