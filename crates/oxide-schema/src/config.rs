//! Builder configuration.

use std::path::Path;

use oxide_schema_core::Dialect;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration threaded into a [`SchemaBuilder`](crate::SchemaBuilder).
///
/// ```rust
/// use oxide_schema::SchemaConfig;
/// use oxide_schema_core::Dialect;
///
/// let config = SchemaConfig::from_json(r#"{ "dialect": "pgx", "dry_run": true }"#).unwrap();
/// assert_eq!(config.dialect, Dialect::Postgres);
/// assert!(config.dry_run);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaConfig {
    /// Target dialect, written as its identifier (`postgres`, `mysql`, ...).
    pub dialect: Dialect,
    /// Log statements instead of executing them.
    #[serde(default)]
    pub dry_run: bool,
}

impl SchemaConfig {
    /// Creates a configuration for `dialect` that executes statements.
    #[must_use]
    pub const fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            dry_run: false,
        }
    }

    /// Enables dry-run mode (SQL is logged but not executed).
    #[must_use]
    pub const fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Serialization`](crate::SchemaError::Serialization)
    /// if the JSON is malformed or names an unknown dialect.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be read, or a serialization
    /// error if its content is invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}
