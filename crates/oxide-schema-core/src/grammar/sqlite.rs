//! SQLite grammar.
//!
//! SQLite's ALTER TABLE only adds, drops and renames columns, so changed
//! columns, primary keys outside CREATE TABLE and foreign keys on existing
//! columns fail with [`CompileError::Unsupported`].

use super::{validate_columns, validate_foreign, validate_table, Grammar};
use crate::blueprint::{
    Blueprint, ColumnDefinition, ColumnType, ForeignKeyDefinition, IndexDefinition,
};
use crate::dialect::Dialect;
use crate::error::{CompileError, Result};

/// SQLite grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteGrammar;

impl SqliteGrammar {
    /// Creates a new SQLite grammar.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    const fn unsupported(operation: &'static str) -> CompileError {
        CompileError::Unsupported {
            dialect: Dialect::Sqlite,
            operation,
        }
    }
}

impl Grammar for SqliteGrammar {
    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    fn boolean_literal(&self, value: bool) -> &'static str {
        if value {
            "1"
        } else {
            "0"
        }
    }

    fn type_name(&self, column: &ColumnDefinition) -> String {
        match &column.column_type {
            ColumnType::Boolean
            | ColumnType::TinyInteger
            | ColumnType::SmallInteger
            | ColumnType::MediumInteger
            | ColumnType::Integer
            | ColumnType::BigInteger
            | ColumnType::Year => "INTEGER".to_string(),
            ColumnType::Char { .. }
            | ColumnType::String { .. }
            | ColumnType::TinyText
            | ColumnType::Text
            | ColumnType::MediumText
            | ColumnType::LongText
            | ColumnType::Date
            | ColumnType::Time { .. }
            | ColumnType::TimeTz { .. }
            | ColumnType::DateTime { .. }
            | ColumnType::DateTimeTz { .. }
            | ColumnType::Timestamp { .. }
            | ColumnType::TimestampTz { .. }
            | ColumnType::Json
            | ColumnType::Jsonb
            | ColumnType::Uuid
            | ColumnType::Enum { .. } => "TEXT".to_string(),
            ColumnType::Decimal { .. } => "NUMERIC".to_string(),
            ColumnType::Float { .. } | ColumnType::Double => "REAL".to_string(),
            ColumnType::Binary => "BLOB".to_string(),
            ColumnType::Spatial { kind, .. } => kind.as_sql().to_string(),
        }
    }

    fn column_definition(&self, blueprint: &Blueprint, column: &ColumnDefinition) -> String {
        let mut sql = format!("{} {}", self.wrap(&column.name), self.type_name(column));

        if column.auto_increment {
            sql.push_str(" PRIMARY KEY AUTOINCREMENT");
        }
        if !column.nullable {
            sql.push_str(" NOT NULL");
        }
        if let Some(ref default) = column.default {
            sql.push_str(" DEFAULT ");
            sql.push_str(&self.render_default(column, default));
        }
        if let Some(check) = self.enum_check(column) {
            sql.push(' ');
            sql.push_str(&check);
        }
        if let Some(ref collation) = column.collation {
            sql.push_str(&format!(" COLLATE {collation}"));
        }
        // New columns can only gain a foreign key inline.
        if !blueprint.creating() {
            if let Some(fk) = blueprint
                .foreign_keys()
                .iter()
                .find(|fk| fk.column == column.name)
            {
                sql.push(' ');
                sql.push_str(&self.references_clause(fk));
            }
        }

        sql
    }

    fn table_constraints(&self, blueprint: &Blueprint) -> Result<Vec<String>> {
        let mut constraints = Vec::new();
        let primary = super::primary_key(blueprint)?;
        let auto_increment: Vec<&ColumnDefinition> = blueprint
            .columns()
            .iter()
            .filter(|c| c.auto_increment)
            .collect();

        match (auto_increment.as_slice(), primary) {
            ([], Some(pk)) => {
                constraints.push(format!("PRIMARY KEY ({})", self.columnize(&pk.columns)));
            }
            ([], None) => {}
            // An AUTOINCREMENT column is the whole primary key.
            ([column], pk) => {
                if pk.is_some_and(|pk| pk.columns.as_slice() != std::slice::from_ref(&column.name)) {
                    return Err(Self::unsupported(
                        "a primary key other than the autoincrement column",
                    ));
                }
            }
            (_, _) => return Err(Self::unsupported("more than one autoincrement column")),
        }

        constraints.extend(self.foreign_constraints(blueprint)?);
        Ok(constraints)
    }

    fn compile_add(&self, blueprint: &Blueprint) -> Result<Vec<String>> {
        validate_table(blueprint)?;
        validate_columns(blueprint)?;

        if super::added_primary_key(blueprint).is_some() {
            return Err(Self::unsupported("adding a primary key to an existing table"));
        }
        let table = self.wrap_table(blueprint.table());
        Ok(blueprint
            .added_columns()
            .iter()
            .map(|c| {
                format!(
                    "ALTER TABLE {table} ADD COLUMN {}",
                    self.column_definition(blueprint, c)
                )
            })
            .collect())
    }

    fn compile_change(&self, blueprint: &Blueprint) -> Result<Vec<String>> {
        validate_table(blueprint)?;
        if blueprint.changed_columns().is_empty() {
            return Ok(Vec::new());
        }
        Err(Self::unsupported("changing columns"))
    }

    fn compile_drop_column(&self, blueprint: &Blueprint) -> Result<Vec<String>> {
        validate_table(blueprint)?;
        let table = self.wrap_table(blueprint.table());
        let names = blueprint.dropped_columns();
        if names.iter().any(|n| n.trim().is_empty()) {
            return Err(CompileError::EmptyColumnName {
                table: blueprint.table().to_string(),
            });
        }
        Ok(names
            .iter()
            .map(|c| format!("ALTER TABLE {table} DROP COLUMN {}", self.wrap(c)))
            .collect())
    }

    fn index_statement(&self, blueprint: &Blueprint, index: &IndexDefinition, keyword: &str) -> String {
        let mut sql = format!("CREATE {keyword}INDEX ");
        if blueprint.if_not_exists() {
            sql.push_str("IF NOT EXISTS ");
        }
        sql.push_str(&format!(
            "{} ON {} ({})",
            self.wrap(&super::index_name(blueprint, index)),
            self.wrap_table(blueprint.table()),
            self.columnize(&index.columns)
        ));
        sql
    }

    fn compile_primary(&self, blueprint: &Blueprint, _index: &IndexDefinition) -> Result<Option<String>> {
        if blueprint.creating() {
            return Ok(None);
        }
        Err(Self::unsupported("adding a primary key to an existing table"))
    }

    fn compile_full_text(
        &self,
        _blueprint: &Blueprint,
        _index: &IndexDefinition,
    ) -> Result<Option<String>> {
        Ok(None)
    }

    fn compile_drop_full_text(&self, _blueprint: &Blueprint) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    fn compile_drop_primary(&self, blueprint: &Blueprint) -> Result<Vec<String>> {
        validate_table(blueprint)?;
        Err(Self::unsupported("dropping a primary key"))
    }

    fn compile_rename_index(&self, blueprint: &Blueprint) -> Result<Vec<String>> {
        validate_table(blueprint)?;
        Err(Self::unsupported("renaming an index"))
    }

    fn compile_foreign(
        &self,
        blueprint: &Blueprint,
        foreign_key: &ForeignKeyDefinition,
    ) -> Result<Option<String>> {
        validate_table(blueprint)?;
        validate_foreign(blueprint, foreign_key)?;
        let inline = blueprint.creating()
            || blueprint
                .added_columns()
                .iter()
                .any(|c| c.name == foreign_key.column);
        if inline {
            return Ok(None);
        }
        Err(Self::unsupported("adding a foreign key to an existing column"))
    }

    fn compile_drop_foreign(&self, blueprint: &Blueprint) -> Result<Vec<String>> {
        validate_table(blueprint)?;
        Err(Self::unsupported("dropping a foreign key"))
    }

    fn compile_table_comment(&self, _blueprint: &Blueprint) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    fn compile_table_exists(&self, table: &str) -> String {
        format!(
            "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = {}",
            self.quote_string(table)
        )
    }

    fn compile_column_exists(&self, table: &str, column: &str) -> String {
        format!(
            "SELECT 1 FROM pragma_table_info({}) WHERE name = {}",
            self.quote_string(table),
            self.quote_string(column)
        )
    }
}
