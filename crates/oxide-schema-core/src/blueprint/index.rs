//! Index and key definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What kind of index a definition creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexKind {
    /// Plain (non-unique) index.
    Index,
    /// Unique index.
    Unique,
    /// Primary key.
    Primary,
    /// Full-text index.
    FullText,
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Index => "index",
            Self::Unique => "unique index",
            Self::Primary => "primary key",
            Self::FullText => "full-text index",
        })
    }
}

/// Storage algorithm hint for an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexAlgorithm {
    /// B-tree.
    BTree,
    /// Hash.
    Hash,
    /// GiST (PostgreSQL).
    Gist,
    /// GIN (PostgreSQL).
    Gin,
}

impl IndexAlgorithm {
    /// Returns the SQL keyword for the algorithm.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::BTree => "BTREE",
            Self::Hash => "HASH",
            Self::Gist => "GIST",
            Self::Gin => "GIN",
        }
    }
}

/// An explicitly declared index, unique constraint, primary key or
/// full-text index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexDefinition {
    /// Kind of index.
    pub kind: IndexKind,
    /// Participating columns, in order.
    pub columns: Vec<String>,
    /// Explicit name. Generated from the table and columns when absent.
    pub name: Option<String>,
    /// Storage algorithm hint.
    pub algorithm: Option<IndexAlgorithm>,
}

impl IndexDefinition {
    /// Creates an unnamed definition over the given columns.
    #[must_use]
    pub fn new(kind: IndexKind, columns: Vec<String>) -> Self {
        Self {
            kind,
            columns,
            name: None,
            algorithm: None,
        }
    }
}

/// Chaining handle for an index owned by a blueprint.
#[derive(Debug)]
pub struct IndexHandle<'a> {
    indexes: &'a mut Vec<IndexDefinition>,
    position: usize,
}

impl<'a> IndexHandle<'a> {
    pub(crate) fn new(indexes: &'a mut Vec<IndexDefinition>, position: usize) -> Self {
        Self { indexes, position }
    }

    /// Returns the definition as it currently stands.
    #[must_use]
    pub fn definition(&self) -> &IndexDefinition {
        &self.indexes[self.position]
    }

    /// Gives the index an explicit name.
    pub fn name(self, name: impl Into<String>) -> Self {
        self.indexes[self.position].name = Some(name.into());
        self
    }

    /// Sets the storage algorithm hint.
    pub fn algorithm(self, algorithm: IndexAlgorithm) -> Self {
        self.indexes[self.position].algorithm = Some(algorithm);
        self
    }
}
