//! Table blueprints.
//!
//! A [`Blueprint`] describes one operation on one table: which columns,
//! indexes and foreign keys to create, which structural changes to apply, and
//! the ordered list of [`Command`]s that were requested. It is built once,
//! compiled by a [`Grammar`], and thrown away.
//!
//! # Example
//!
//! ```rust
//! use oxide_schema_core::{Blueprint, Command};
//!
//! let mut table = Blueprint::new("users");
//! table.string("nickname", 64).nullable();
//! table.string("email", 320).change();
//! table.drop_column("legacy_flag");
//!
//! assert_eq!(
//!     table.commands(),
//!     vec![Command::Change, Command::Add, Command::DropColumn]
//! );
//! ```

mod column;
mod command;
mod foreign_key;
mod index;

use serde::{Deserialize, Serialize};

pub use column::{ColumnDefinition, ColumnHandle, ColumnType, DefaultValue, SpatialKind};
pub use command::Command;
pub use foreign_key::{ForeignKeyAction, ForeignKeyDefinition, ForeignKeyHandle};
pub use index::{IndexAlgorithm, IndexDefinition, IndexHandle, IndexKind};

use crate::error::Result;
use crate::grammar::Grammar;
use crate::naming;

/// The in-memory description of one table operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    table: String,
    new_name: Option<String>,
    engine: Option<String>,
    charset: Option<String>,
    collation: Option<String>,
    comment: Option<String>,
    columns: Vec<ColumnDefinition>,
    indexes: Vec<IndexDefinition>,
    foreign_keys: Vec<ForeignKeyDefinition>,
    drop_columns: Vec<String>,
    rename_columns: Vec<(String, String)>,
    drop_indexes: Vec<String>,
    drop_uniques: Vec<String>,
    drop_full_texts: Vec<String>,
    drop_foreigns: Vec<String>,
    drop_primary: Option<String>,
    rename_indexes: Vec<(String, String)>,
    commands: Vec<Command>,
}

impl Blueprint {
    /// Creates an empty blueprint for `table`.
    ///
    /// The name may be schema-qualified (`schema.table`).
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            new_name: None,
            engine: None,
            charset: None,
            collation: None,
            comment: None,
            columns: Vec::new(),
            indexes: Vec::new(),
            foreign_keys: Vec::new(),
            drop_columns: Vec::new(),
            rename_columns: Vec::new(),
            drop_indexes: Vec::new(),
            drop_uniques: Vec::new(),
            drop_full_texts: Vec::new(),
            drop_foreigns: Vec::new(),
            drop_primary: None,
            rename_indexes: Vec::new(),
            commands: Vec::new(),
        }
    }

    // =========================================================================
    // Commands
    // =========================================================================

    fn add_command(&mut self, command: Command) {
        if !self.commands.contains(&command) {
            self.commands.push(command);
        }
    }

    /// Requests CREATE TABLE.
    pub fn create(&mut self) {
        self.add_command(Command::Create);
    }

    /// Requests CREATE TABLE IF NOT EXISTS.
    pub fn create_if_not_exists(&mut self) {
        self.add_command(Command::CreateIfNotExists);
    }

    /// Requests DROP TABLE.
    pub fn drop(&mut self) {
        self.add_command(Command::Drop);
    }

    /// Requests DROP TABLE IF EXISTS.
    pub fn drop_if_exists(&mut self) {
        self.add_command(Command::DropIfExists);
    }

    /// Requests renaming the table to `to`.
    pub fn rename(&mut self, to: impl Into<String>) {
        self.new_name = Some(to.into());
        self.add_command(Command::Rename);
    }

    /// Returns whether this blueprint creates its table.
    #[must_use]
    pub fn creating(&self) -> bool {
        self.commands.iter().any(|c| c.is_create())
    }

    /// Returns whether the table is created with IF NOT EXISTS.
    #[must_use]
    pub fn if_not_exists(&self) -> bool {
        self.commands.contains(&Command::CreateIfNotExists)
    }

    fn has_additions(&self) -> bool {
        self.columns.iter().any(|c| !c.change)
            || !self.indexes.is_empty()
            || !self.foreign_keys.is_empty()
    }

    fn has_changes(&self) -> bool {
        self.columns.iter().any(|c| c.change)
    }

    /// Returns the final command list.
    ///
    /// Outside create mode, `Add` is prepended when the blueprint holds new
    /// columns, indexes or foreign keys, and `Change` is then prepended when
    /// any column is marked as changed.
    #[must_use]
    pub fn commands(&self) -> Vec<Command> {
        let mut commands = self.commands.clone();
        if !self.creating() {
            if self.has_additions() && !commands.contains(&Command::Add) {
                commands.insert(0, Command::Add);
            }
            if self.has_changes() && !commands.contains(&Command::Change) {
                commands.insert(0, Command::Change);
            }
        }
        commands
    }

    /// Compiles the blueprint into an ordered list of SQL statements.
    ///
    /// After `Create`, `CreateIfNotExists` and `Add`, inline column indexes
    /// come first, then declared indexes, then foreign keys, so that every
    /// statement only references objects that already exist.
    ///
    /// # Errors
    ///
    /// Returns the first [`CompileError`](crate::CompileError) raised by the
    /// grammar. No statements are returned in that case.
    pub fn to_sql(&self, grammar: &dyn Grammar) -> Result<Vec<String>> {
        let mut statements = Vec::new();
        for command in self.commands() {
            match command {
                Command::Create => {
                    statements.extend(grammar.compile_create(self)?);
                    self.compile_definitions(grammar, &mut statements)?;
                }
                Command::CreateIfNotExists => {
                    statements.extend(grammar.compile_create_if_not_exists(self)?);
                    self.compile_definitions(grammar, &mut statements)?;
                }
                Command::Add => {
                    statements.extend(grammar.compile_add(self)?);
                    self.compile_definitions(grammar, &mut statements)?;
                }
                Command::Change => statements.extend(grammar.compile_change(self)?),
                Command::Drop => statements.push(grammar.compile_drop(self)?),
                Command::DropIfExists => statements.push(grammar.compile_drop_if_exists(self)?),
                Command::Rename => statements.push(grammar.compile_rename(self)?),
                Command::DropColumn => statements.extend(grammar.compile_drop_column(self)?),
                Command::RenameColumn => statements.extend(grammar.compile_rename_column(self)?),
                Command::DropIndex => statements.extend(grammar.compile_drop_index(self)?),
                Command::DropUnique => statements.extend(grammar.compile_drop_unique(self)?),
                Command::DropFullText => {
                    statements.extend(grammar.compile_drop_full_text(self)?);
                }
                Command::DropPrimary => statements.extend(grammar.compile_drop_primary(self)?),
                Command::RenameIndex => statements.extend(grammar.compile_rename_index(self)?),
                Command::DropForeign => statements.extend(grammar.compile_drop_foreign(self)?),
                Command::Comment => statements.extend(grammar.compile_table_comment(self)?),
            }
        }
        statements.retain(|sql| !sql.is_empty());
        Ok(statements)
    }

    fn compile_definitions(&self, grammar: &dyn Grammar, statements: &mut Vec<String>) -> Result<()> {
        let creating = self.creating();
        for column in self.columns.iter().filter(|c| creating || !c.change) {
            if column.unique {
                statements.extend(grammar.compile_column_index(self, column, IndexKind::Unique)?);
            }
            if column.index {
                statements.extend(grammar.compile_column_index(self, column, IndexKind::Index)?);
            }
        }
        for index in &self.indexes {
            statements.extend(grammar.compile_index(self, index)?);
        }
        for foreign_key in &self.foreign_keys {
            statements.extend(grammar.compile_foreign(self, foreign_key)?);
        }
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the table name as given, possibly schema-qualified.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Returns the table name without its schema qualifier.
    #[must_use]
    pub fn unqualified_table(&self) -> &str {
        naming::unqualified(&self.table)
    }

    /// Returns the schema qualifier, if any.
    #[must_use]
    pub fn schema(&self) -> Option<&str> {
        self.table.rsplit_once('.').map(|(schema, _)| schema)
    }

    /// Returns the new name requested by [`rename`](Self::rename).
    #[must_use]
    pub fn new_name(&self) -> Option<&str> {
        self.new_name.as_deref()
    }

    /// Returns the storage engine hint.
    #[must_use]
    pub fn engine_hint(&self) -> Option<&str> {
        self.engine.as_deref()
    }

    /// Returns the character set hint.
    #[must_use]
    pub fn charset_hint(&self) -> Option<&str> {
        self.charset.as_deref()
    }

    /// Returns the collation hint.
    #[must_use]
    pub fn collation_hint(&self) -> Option<&str> {
        self.collation.as_deref()
    }

    /// Returns the table comment.
    #[must_use]
    pub fn table_comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Returns every column definition, in declaration order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    /// Returns the columns to add (those not marked as changed).
    #[must_use]
    pub fn added_columns(&self) -> Vec<&ColumnDefinition> {
        self.columns.iter().filter(|c| !c.change).collect()
    }

    /// Returns the columns marked as changed.
    #[must_use]
    pub fn changed_columns(&self) -> Vec<&ColumnDefinition> {
        self.columns.iter().filter(|c| c.change).collect()
    }

    /// Returns the declared indexes.
    #[must_use]
    pub fn indexes(&self) -> &[IndexDefinition] {
        &self.indexes
    }

    /// Returns the declared foreign keys.
    #[must_use]
    pub fn foreign_keys(&self) -> &[ForeignKeyDefinition] {
        &self.foreign_keys
    }

    /// Returns the columns to drop.
    #[must_use]
    pub fn dropped_columns(&self) -> &[String] {
        &self.drop_columns
    }

    /// Returns the `(from, to)` column renames.
    #[must_use]
    pub fn renamed_columns(&self) -> &[(String, String)] {
        &self.rename_columns
    }

    /// Returns the plain indexes to drop.
    #[must_use]
    pub fn dropped_indexes(&self) -> &[String] {
        &self.drop_indexes
    }

    /// Returns the unique indexes to drop.
    #[must_use]
    pub fn dropped_uniques(&self) -> &[String] {
        &self.drop_uniques
    }

    /// Returns the full-text indexes to drop.
    #[must_use]
    pub fn dropped_full_texts(&self) -> &[String] {
        &self.drop_full_texts
    }

    /// Returns the foreign keys to drop.
    #[must_use]
    pub fn dropped_foreigns(&self) -> &[String] {
        &self.drop_foreigns
    }

    /// Returns the primary key constraint to drop.
    #[must_use]
    pub fn dropped_primary(&self) -> Option<&str> {
        self.drop_primary.as_deref()
    }

    /// Returns the `(from, to)` index renames.
    #[must_use]
    pub fn renamed_indexes(&self) -> &[(String, String)] {
        &self.rename_indexes
    }

    // =========================================================================
    // Table options
    // =========================================================================

    /// Sets the storage engine used at creation (MySQL).
    pub fn engine(&mut self, engine: impl Into<String>) {
        self.engine = Some(engine.into());
    }

    /// Sets the default character set used at creation (MySQL).
    pub fn charset(&mut self, charset: impl Into<String>) {
        self.charset = Some(charset.into());
    }

    /// Sets the default collation used at creation (MySQL).
    pub fn collation(&mut self, collation: impl Into<String>) {
        self.collation = Some(collation.into());
    }

    /// Sets the table comment.
    pub fn comment(&mut self, comment: impl Into<String>) {
        self.comment = Some(comment.into());
        self.add_command(Command::Comment);
    }

    // =========================================================================
    // Columns
    // =========================================================================

    /// Adds a column of the given type.
    pub fn add_column(&mut self, name: impl Into<String>, column_type: ColumnType) -> ColumnHandle<'_> {
        self.columns.push(ColumnDefinition::new(name, column_type));
        let position = self.columns.len() - 1;
        ColumnHandle::new(&mut self.columns, position)
    }

    /// Adds a BOOLEAN column.
    pub fn boolean(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.add_column(name, ColumnType::Boolean)
    }

    /// Adds a fixed-length CHAR column.
    pub fn char(&mut self, name: impl Into<String>, length: u32) -> ColumnHandle<'_> {
        self.add_column(name, ColumnType::Char { length })
    }

    /// Adds a VARCHAR column.
    pub fn string(&mut self, name: impl Into<String>, length: u32) -> ColumnHandle<'_> {
        self.add_column(name, ColumnType::String { length })
    }

    /// Adds a TINYTEXT column.
    pub fn tiny_text(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.add_column(name, ColumnType::TinyText)
    }

    /// Adds a TEXT column.
    pub fn text(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.add_column(name, ColumnType::Text)
    }

    /// Adds a MEDIUMTEXT column.
    pub fn medium_text(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.add_column(name, ColumnType::MediumText)
    }

    /// Adds a LONGTEXT column.
    pub fn long_text(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.add_column(name, ColumnType::LongText)
    }

    /// Adds a TINYINT column.
    pub fn tiny_integer(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.add_column(name, ColumnType::TinyInteger)
    }

    /// Adds a SMALLINT column.
    pub fn small_integer(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.add_column(name, ColumnType::SmallInteger)
    }

    /// Adds a MEDIUMINT column.
    pub fn medium_integer(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.add_column(name, ColumnType::MediumInteger)
    }

    /// Adds an INTEGER column.
    pub fn integer(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.add_column(name, ColumnType::Integer)
    }

    /// Adds a BIGINT column.
    pub fn big_integer(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.add_column(name, ColumnType::BigInteger)
    }

    /// Adds an unsigned INTEGER column.
    pub fn unsigned_integer(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.integer(name).unsigned()
    }

    /// Adds an unsigned BIGINT column.
    pub fn unsigned_big_integer(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.big_integer(name).unsigned()
    }

    /// Adds an auto-incrementing unsigned TINYINT primary key.
    pub fn tiny_increments(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.tiny_integer(name).unsigned().auto_increment()
    }

    /// Adds an auto-incrementing unsigned SMALLINT primary key.
    pub fn small_increments(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.small_integer(name).unsigned().auto_increment()
    }

    /// Adds an auto-incrementing unsigned MEDIUMINT primary key.
    pub fn medium_increments(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.medium_integer(name).unsigned().auto_increment()
    }

    /// Adds an auto-incrementing unsigned INTEGER primary key.
    pub fn increments(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.integer(name).unsigned().auto_increment()
    }

    /// Adds an auto-incrementing unsigned BIGINT primary key.
    pub fn big_increments(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.big_integer(name).unsigned().auto_increment()
    }

    /// Adds the conventional `id` auto-incrementing BIGINT primary key.
    pub fn id(&mut self) -> ColumnHandle<'_> {
        self.big_increments("id")
    }

    /// Adds an unsigned BIGINT column meant to hold a foreign id.
    pub fn foreign_id(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.unsigned_big_integer(name)
    }

    /// Adds a DECIMAL column.
    pub fn decimal(&mut self, name: impl Into<String>, precision: u8, scale: u8) -> ColumnHandle<'_> {
        self.add_column(name, ColumnType::Decimal { precision, scale })
    }

    /// Adds a FLOAT column.
    pub fn float(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.add_column(name, ColumnType::Float { precision: None })
    }

    /// Adds a DOUBLE column.
    pub fn double(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.add_column(name, ColumnType::Double)
    }

    /// Adds a DATE column.
    pub fn date(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.add_column(name, ColumnType::Date)
    }

    /// Adds a TIME column.
    pub fn time(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.add_column(name, ColumnType::Time { precision: None })
    }

    /// Adds a TIME WITH TIME ZONE column.
    pub fn time_tz(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.add_column(name, ColumnType::TimeTz { precision: None })
    }

    /// Adds a DATETIME column.
    pub fn date_time(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.add_column(name, ColumnType::DateTime { precision: None })
    }

    /// Adds a DATETIME WITH TIME ZONE column.
    pub fn date_time_tz(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.add_column(name, ColumnType::DateTimeTz { precision: None })
    }

    /// Adds a TIMESTAMP column.
    pub fn timestamp(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.add_column(name, ColumnType::Timestamp { precision: None })
    }

    /// Adds a TIMESTAMP WITH TIME ZONE column.
    pub fn timestamp_tz(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.add_column(name, ColumnType::TimestampTz { precision: None })
    }

    /// Adds a YEAR column.
    pub fn year(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.add_column(name, ColumnType::Year)
    }

    /// Adds a binary column.
    pub fn binary(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.add_column(name, ColumnType::Binary)
    }

    /// Adds a JSON column.
    pub fn json(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.add_column(name, ColumnType::Json)
    }

    /// Adds a JSONB column.
    pub fn jsonb(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.add_column(name, ColumnType::Jsonb)
    }

    /// Adds a UUID column.
    pub fn uuid(&mut self, name: impl Into<String>) -> ColumnHandle<'_> {
        self.add_column(name, ColumnType::Uuid)
    }

    /// Adds an enumeration column restricted to `allowed`.
    pub fn enumeration<S: Into<String>>(
        &mut self,
        name: impl Into<String>,
        allowed: impl IntoIterator<Item = S>,
    ) -> ColumnHandle<'_> {
        let allowed = allowed.into_iter().map(Into::into).collect();
        self.add_column(name, ColumnType::Enum { allowed })
    }

    /// Adds a spatial column of the given sub-type.
    pub fn geometry(
        &mut self,
        name: impl Into<String>,
        kind: SpatialKind,
        srid: Option<u32>,
    ) -> ColumnHandle<'_> {
        self.add_column(name, ColumnType::Spatial { kind, srid })
    }

    /// Adds a POINT column.
    pub fn point(&mut self, name: impl Into<String>, srid: Option<u32>) -> ColumnHandle<'_> {
        self.geometry(name, SpatialKind::Point, srid)
    }

    /// Adds nullable `created_at` and `updated_at` timestamps.
    pub fn timestamps(&mut self) {
        self.timestamp("created_at").nullable();
        self.timestamp("updated_at").nullable();
    }

    /// Adds nullable `created_at` and `updated_at` timestamps with time zone.
    pub fn timestamps_tz(&mut self) {
        self.timestamp_tz("created_at").nullable();
        self.timestamp_tz("updated_at").nullable();
    }

    /// Adds a nullable `deleted_at` timestamp.
    pub fn soft_deletes(&mut self) -> ColumnHandle<'_> {
        self.timestamp("deleted_at").nullable()
    }

    // =========================================================================
    // Indexes and keys
    // =========================================================================

    fn add_index<S: Into<String>>(
        &mut self,
        kind: IndexKind,
        columns: impl IntoIterator<Item = S>,
    ) -> IndexHandle<'_> {
        let columns = columns.into_iter().map(Into::into).collect();
        self.indexes.push(IndexDefinition::new(kind, columns));
        let position = self.indexes.len() - 1;
        IndexHandle::new(&mut self.indexes, position)
    }

    /// Declares a plain index over `columns`.
    pub fn index<S: Into<String>>(&mut self, columns: impl IntoIterator<Item = S>) -> IndexHandle<'_> {
        self.add_index(IndexKind::Index, columns)
    }

    /// Declares a unique index over `columns`.
    pub fn unique<S: Into<String>>(&mut self, columns: impl IntoIterator<Item = S>) -> IndexHandle<'_> {
        self.add_index(IndexKind::Unique, columns)
    }

    /// Declares the primary key over `columns`.
    pub fn primary<S: Into<String>>(&mut self, columns: impl IntoIterator<Item = S>) -> IndexHandle<'_> {
        self.add_index(IndexKind::Primary, columns)
    }

    /// Declares a full-text index over `columns`.
    pub fn full_text<S: Into<String>>(
        &mut self,
        columns: impl IntoIterator<Item = S>,
    ) -> IndexHandle<'_> {
        self.add_index(IndexKind::FullText, columns)
    }

    /// Declares a foreign key on `column`.
    pub fn foreign(&mut self, column: impl Into<String>) -> ForeignKeyHandle<'_> {
        self.foreign_keys.push(ForeignKeyDefinition::new(column));
        let position = self.foreign_keys.len() - 1;
        ForeignKeyHandle::new(&mut self.foreign_keys, position)
    }

    // =========================================================================
    // Structural changes
    // =========================================================================

    /// Drops a column.
    pub fn drop_column(&mut self, column: impl Into<String>) {
        self.drop_columns.push(column.into());
        self.add_command(Command::DropColumn);
    }

    /// Drops several columns.
    pub fn drop_columns<S: Into<String>>(&mut self, columns: impl IntoIterator<Item = S>) {
        for column in columns {
            self.drop_column(column);
        }
    }

    /// Renames a column.
    pub fn rename_column(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.rename_columns.push((from.into(), to.into()));
        self.add_command(Command::RenameColumn);
    }

    /// Drops a plain index by name.
    pub fn drop_index(&mut self, name: impl Into<String>) {
        self.drop_indexes.push(name.into());
        self.add_command(Command::DropIndex);
    }

    /// Drops a unique index by name.
    pub fn drop_unique(&mut self, name: impl Into<String>) {
        self.drop_uniques.push(name.into());
        self.add_command(Command::DropUnique);
    }

    /// Drops a full-text index by name.
    pub fn drop_full_text(&mut self, name: impl Into<String>) {
        self.drop_full_texts.push(name.into());
        self.add_command(Command::DropFullText);
    }

    /// Drops the primary key under its conventional name.
    pub fn drop_primary(&mut self) {
        let name = naming::primary_key(&self.table);
        self.drop_primary_named(name);
    }

    /// Drops the primary key constraint `name`.
    pub fn drop_primary_named(&mut self, name: impl Into<String>) {
        self.drop_primary = Some(name.into());
        self.add_command(Command::DropPrimary);
    }

    /// Drops a foreign key constraint by name.
    pub fn drop_foreign(&mut self, name: impl Into<String>) {
        self.drop_foreigns.push(name.into());
        self.add_command(Command::DropForeign);
    }

    /// Renames an index.
    pub fn rename_index(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.rename_indexes.push((from.into(), to.into()));
        self.add_command(Command::RenameIndex);
    }

    /// Drops the `created_at` and `updated_at` columns.
    pub fn drop_timestamps(&mut self) {
        self.drop_columns(["created_at", "updated_at"]);
    }

    /// Drops the `deleted_at` column.
    pub fn drop_soft_deletes(&mut self) {
        self.drop_column("deleted_at");
    }
}
