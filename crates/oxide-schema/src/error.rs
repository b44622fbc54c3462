//! Error types for the schema builder.

use oxide_schema_core::{CompileError, Dialect, UnknownDialect};

/// Errors that can occur while validating, compiling or executing a schema
/// operation.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The table name is empty or whitespace.
    #[error("Table name must not be empty")]
    EmptyTableName,

    /// The table name has too many qualifier segments or an empty segment.
    #[error("Malformed table name '{name}'")]
    MalformedTableName {
        /// The rejected name.
        name: String,
    },

    /// A schema-qualified name was given to a dialect without schemas.
    #[error("{dialect} does not support schema-qualified table '{name}'")]
    SchemaNotSupported {
        /// Target dialect.
        dialect: Dialect,
        /// The rejected name.
        name: String,
    },

    /// The blueprint could not be compiled.
    #[error("Compile error: {0}")]
    Compile(#[from] CompileError),

    /// The configured dialect identifier is not recognised.
    #[error(transparent)]
    UnknownDialect(#[from] UnknownDialect),

    /// Database error while executing a statement.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// IO error (reading configuration files).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
