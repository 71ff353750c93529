//! Typed error handling for the carve library
//!
//! Errors fall into three categories:
//!
//! - [`RegistryError`]: mapping-table construction and registration mistakes.
//!   These indicate a programming/configuration error and are fatal at
//!   startup, not recoverable at request time.
//! - [`FieldError`]: a client asked for a field or sort key that does not
//!   exist on the target type. Callers turn these into a single descriptive
//!   client error, usually via the pre-flight checks
//!   ([`has_fields`](crate::shaping::has_fields) /
//!   [`supports_order_by`](crate::mapping::PropertyMappingRegistry::supports_order_by)).
//! - [`ConfigError`]: reading or parsing declarative mapping configuration.
//!
//! # Example
//!
//! ```rust,ignore
//! use carve::prelude::*;
//!
//! match shape_data(&dtos, Some("id,bogus")) {
//!     Ok(shaped) => serialize(shaped),
//!     Err(CarveError::Field(FieldError::UnknownField { field, .. })) => {
//!         reject_request(format!("unknown field '{field}'"))
//!     }
//!     Err(e) => fail(e),
//! }
//! ```

use thiserror::Error;

/// The main error type for the carve library
///
/// Each variant wraps a more specific error type for that category.
#[derive(Debug, Error)]
pub enum CarveError {
    /// Mapping registry construction/lookup errors (configuration, fatal)
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Unknown field or sort key (client-facing)
    #[error(transparent)]
    Field(#[from] FieldError),

    /// Configuration file errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CarveError {
    /// Get the stable error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            CarveError::Registry(e) => e.error_code(),
            CarveError::Field(e) => e.error_code(),
            CarveError::Config(e) => e.error_code(),
        }
    }

    /// Whether this error is caused by client input (as opposed to a
    /// configuration/programming mistake)
    pub fn is_client_error(&self) -> bool {
        matches!(self, CarveError::Field(_))
    }
}

// =============================================================================
// Registry Errors
// =============================================================================

/// Errors raised while building or querying the property mapping registry.
///
/// All of these indicate a programming mistake caught at startup.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A mapping table for this type pair was already registered
    #[error("mapping table for '{source_type}' -> '{destination}' is already registered")]
    DuplicateTable {
        source_type: &'static str,
        destination: &'static str,
    },

    /// No mapping table was registered for this type pair
    #[error("no mapping table registered for '{source_type}' -> '{destination}'")]
    TableNotFound {
        source_type: &'static str,
        destination: &'static str,
    },

    /// Two table entries share the same field name (case-insensitive)
    #[error("duplicate field '{field}' in mapping table")]
    DuplicateField { field: String },

    /// A table entry has an empty field name
    #[error("mapping table field names cannot be empty")]
    EmptyFieldName,

    /// A table entry maps to no destination properties
    #[error("field '{field}' maps to no destination properties")]
    EmptyProperties { field: String },
}

impl RegistryError {
    pub fn error_code(&self) -> &'static str {
        match self {
            RegistryError::DuplicateTable { .. } => "DUPLICATE_MAPPING_TABLE",
            RegistryError::TableNotFound { .. } => "MAPPING_TABLE_NOT_FOUND",
            RegistryError::DuplicateField { .. } => "DUPLICATE_MAPPING_FIELD",
            RegistryError::EmptyFieldName => "EMPTY_MAPPING_FIELD",
            RegistryError::EmptyProperties { .. } => "EMPTY_MAPPING_PROPERTIES",
        }
    }
}

// =============================================================================
// Field Errors
// =============================================================================

/// Errors raised when a request names a field the target type does not have
#[derive(Debug, Error)]
pub enum FieldError {
    /// A requested shaping field does not exist on the target type
    #[error("field '{field}' does not exist on '{type_name}'")]
    UnknownField {
        type_name: &'static str,
        field: String,
    },

    /// An orderBy clause names a field with no registered mapping
    #[error("cannot sort by unknown field '{field}'")]
    UnknownSortField { field: String },
}

impl FieldError {
    pub fn error_code(&self) -> &'static str {
        match self {
            FieldError::UnknownField { .. } => "UNKNOWN_FIELD",
            FieldError::UnknownSortField { .. } => "UNKNOWN_SORT_FIELD",
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors raised while loading declarative mapping configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error while reading a configuration file
    #[error("failed to read mapping config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration content
    #[error("failed to parse mapping config{}: {message}", file.as_deref().map(|f| format!(" '{f}'")).unwrap_or_default())]
    Parse {
        file: Option<String>,
        message: String,
    },

    /// The configuration declares no table for this type pair
    #[error("no mapping declared for '{source_type}' -> '{destination}'")]
    TableNotFound {
        source_type: String,
        destination: String,
    },
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "CONFIG_IO_ERROR",
            ConfigError::Parse { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::TableNotFound { .. } => "CONFIG_TABLE_NOT_FOUND",
        }
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for carve operations
pub type CarveResult<T> = Result<T, CarveError>;
