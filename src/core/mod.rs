//! Core module containing fundamental types for shaping and mapping

pub mod error;
pub mod fields;
pub mod macros;
pub mod value;

pub use error::{CarveError, CarveResult, ConfigError, FieldError, RegistryError};
pub use fields::{Field, Fielded, short_type_name};
pub use value::FieldValue;
