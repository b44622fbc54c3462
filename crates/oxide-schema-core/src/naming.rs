//! Conventional constraint and index names.
//!
//! Names are derived from the unqualified table name, so `app.users` and
//! `users` produce the same identifiers.

use crate::blueprint::IndexKind;

/// Returns the last segment of a possibly schema-qualified name.
#[must_use]
pub fn unqualified(table: &str) -> &str {
    table.rsplit_once('.').map_or(table, |(_, name)| name)
}

/// `pk_<table>`
#[must_use]
pub fn primary_key(table: &str) -> String {
    format!("pk_{}", unqualified(table))
}

/// `<prefix>_<table>_<columns joined by _>`, where the prefix is `idx`,
/// `uk` or `ft` depending on the kind. Primary keys use [`primary_key`].
#[must_use]
pub fn index(table: &str, kind: IndexKind, columns: &[String]) -> String {
    let prefix = match kind {
        IndexKind::Index => "idx",
        IndexKind::Unique => "uk",
        IndexKind::FullText => "ft",
        IndexKind::Primary => return primary_key(table),
    };
    format!("{prefix}_{}_{}", unqualified(table), columns.join("_"))
}

/// `fk_<table>_<referenced table>`
#[must_use]
pub fn foreign_key(table: &str, referenced: &str) -> String {
    format!("fk_{}_{}", unqualified(table), unqualified(referenced))
}
