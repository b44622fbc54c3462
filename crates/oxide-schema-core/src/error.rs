//! Error types for blueprint compilation.

use crate::blueprint::IndexKind;
use crate::dialect::Dialect;

/// Errors raised while compiling a blueprint into SQL.
///
/// Compilation either succeeds for the whole blueprint or fails with the
/// first error found.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    /// The blueprint's table name is empty.
    #[error("Table name must not be empty")]
    EmptyTableName,

    /// A column has an empty name.
    #[error("Table '{table}' has a column with an empty name")]
    EmptyColumnName {
        /// Table being compiled.
        table: String,
    },

    /// Two columns share the same name.
    #[error("Column '{column}' is defined more than once on table '{table}'")]
    DuplicateColumn {
        /// Table being compiled.
        table: String,
        /// Duplicated column.
        column: String,
    },

    /// An index, unique constraint or primary key lists no columns.
    #[error("A {kind} on table '{table}' has no columns")]
    EmptyIndexColumns {
        /// Table being compiled.
        table: String,
        /// Kind of the offending index.
        kind: IndexKind,
    },

    /// An index was given an empty explicit name.
    #[error("An index on table '{table}' has an empty name")]
    EmptyIndexName {
        /// Table being compiled.
        table: String,
    },

    /// An enumeration column has no allowed values.
    #[error("Enumeration column '{column}' has no allowed values")]
    EmptyEnumValues {
        /// Offending column.
        column: String,
    },

    /// A floating-point default is NaN or infinite and has no SQL literal.
    #[error("Column '{column}' has a non-finite floating-point default")]
    NonFiniteDefault {
        /// Offending column.
        column: String,
    },

    /// A foreign key is missing its column, referenced table or referenced
    /// column.
    #[error("Foreign key on table '{table}' is missing its {missing}")]
    IncompleteForeignKey {
        /// Table being compiled.
        table: String,
        /// Which part is missing.
        missing: &'static str,
    },

    /// A rename was requested without a new name.
    #[error("Rename of table '{table}' has no new name")]
    MissingNewName {
        /// Table being compiled.
        table: String,
    },

    /// The dialect cannot express the requested operation.
    #[error("{dialect} does not support {operation}")]
    Unsupported {
        /// Target dialect.
        dialect: Dialect,
        /// Description of the operation.
        operation: &'static str,
    },
}

/// A dialect name that is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown dialect '{0}'")]
pub struct UnknownDialect(pub String);

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, CompileError>;
