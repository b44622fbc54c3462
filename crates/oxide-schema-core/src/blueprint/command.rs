use serde::{Deserialize, Serialize};

/// A high-level operation requested on a blueprint.
///
/// The blueprint keeps at most one of each, in request order. `Add` and
/// `Change` are normally implied from the blueprint's columns rather than
/// registered directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// CREATE TABLE.
    Create,
    /// CREATE TABLE IF NOT EXISTS.
    CreateIfNotExists,
    /// Add the blueprint's new columns, indexes and foreign keys.
    Add,
    /// Alter the columns marked as changed.
    Change,
    /// DROP TABLE.
    Drop,
    /// DROP TABLE IF EXISTS.
    DropIfExists,
    /// Rename the table.
    Rename,
    /// Drop columns.
    DropColumn,
    /// Rename columns.
    RenameColumn,
    /// Drop plain indexes.
    DropIndex,
    /// Drop unique indexes.
    DropUnique,
    /// Drop full-text indexes.
    DropFullText,
    /// Drop the primary key.
    DropPrimary,
    /// Rename indexes.
    RenameIndex,
    /// Drop foreign keys.
    DropForeign,
    /// Set the table comment.
    Comment,
}

impl Command {
    /// Returns whether the command creates the table.
    #[must_use]
    pub const fn is_create(self) -> bool {
        matches!(self, Self::Create | Self::CreateIfNotExists)
    }
}
