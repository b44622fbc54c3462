//! Dialect-specific SQL compilation.
//!
//! A [`Grammar`] turns the pieces of a [`Blueprint`] into SQL text for one
//! database engine. The provided methods hold the behaviour most engines
//! share. Each dialect overrides what it spells differently.

mod mysql;
mod postgres;
mod sqlite;

pub use mysql::MySqlGrammar;
pub use postgres::PostgresGrammar;
pub use sqlite::SqliteGrammar;

use std::collections::HashSet;
use std::fmt;

use crate::blueprint::{
    Blueprint, ColumnDefinition, ColumnType, DefaultValue, ForeignKeyDefinition, IndexDefinition,
    IndexKind,
};
use crate::dialect::Dialect;
use crate::error::{CompileError, Result};
use crate::naming;

/// Keywords that stay unquoted when used as the default of a date/time column.
const TEMPORAL_KEYWORDS: &[&str] = &[
    "CURRENT_TIMESTAMP",
    "CURRENT_DATE",
    "CURRENT_TIME",
    "LOCALTIMESTAMP",
    "LOCALTIME",
    "NOW()",
];

/// Compiles blueprints into SQL for one dialect.
///
/// Operations that always produce exactly one statement return
/// `Result<String>`. Operations that may expand return `Result<Vec<String>>`,
/// and per-definition operations return `Result<Option<String>>`. An empty
/// vector or `None` means the work is handled elsewhere, usually inline in
/// the CREATE TABLE statement.
pub trait Grammar: fmt::Debug + Send + Sync {
    /// Returns the dialect this grammar targets.
    fn dialect(&self) -> Dialect;

    // =========================================================================
    // Quoting and rendering
    // =========================================================================

    /// Returns the identifier quote character.
    fn quote_char(&self) -> char {
        '"'
    }

    /// Quotes a single identifier, doubling embedded quote characters.
    fn wrap(&self, name: &str) -> String {
        let q = self.quote_char();
        let escaped = name.replace(q, &format!("{q}{q}"));
        format!("{q}{escaped}{q}")
    }

    /// Quotes a possibly schema-qualified table name segment by segment.
    fn wrap_table(&self, table: &str) -> String {
        table
            .split('.')
            .map(|segment| self.wrap(segment))
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Quotes and joins a column list.
    fn columnize(&self, columns: &[String]) -> String {
        columns
            .iter()
            .map(|c| self.wrap(c))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Quotes a string literal.
    fn quote_string(&self, value: &str) -> String {
        format!("'{}'", value.replace('\'', "''"))
    }

    /// Returns the literal for a boolean value.
    fn boolean_literal(&self, value: bool) -> &'static str;

    /// Returns the native type of a column.
    fn type_name(&self, column: &ColumnDefinition) -> String;

    /// Renders a default value for `column`.
    ///
    /// Used by both the CREATE and ALTER paths.
    fn render_default(&self, column: &ColumnDefinition, value: &DefaultValue) -> String {
        match value {
            DefaultValue::Null => "NULL".to_string(),
            DefaultValue::Boolean(b) => self.boolean_literal(*b).to_string(),
            DefaultValue::Integer(n) => n.to_string(),
            DefaultValue::Float(f) => f.to_string(),
            DefaultValue::Expression(expr) => expr.clone(),
            DefaultValue::String(s) => {
                if column.column_type.is_temporal()
                    && TEMPORAL_KEYWORDS.contains(&s.to_ascii_uppercase().as_str())
                {
                    s.clone()
                } else {
                    self.quote_string(s)
                }
            }
        }
    }

    /// Renders an enumeration column's CHECK constraint, for dialects
    /// without a native ENUM type.
    fn enum_check(&self, column: &ColumnDefinition) -> Option<String> {
        match &column.column_type {
            ColumnType::Enum { allowed } => {
                let values: Vec<String> = allowed.iter().map(|v| self.quote_string(v)).collect();
                Some(format!(
                    "CHECK ({} IN ({}))",
                    self.wrap(&column.name),
                    values.join(", ")
                ))
            }
            _ => None,
        }
    }

    /// Renders a column definition as used in CREATE TABLE and ADD COLUMN.
    fn column_definition(&self, blueprint: &Blueprint, column: &ColumnDefinition) -> String;

    // =========================================================================
    // Create
    // =========================================================================

    /// Compiles CREATE TABLE.
    fn compile_create(&self, blueprint: &Blueprint) -> Result<Vec<String>> {
        self.create_table(blueprint, false)
    }

    /// Compiles CREATE TABLE IF NOT EXISTS.
    fn compile_create_if_not_exists(&self, blueprint: &Blueprint) -> Result<Vec<String>> {
        self.create_table(blueprint, true)
    }

    /// Builds the CREATE TABLE statement and its companions.
    fn create_table(&self, blueprint: &Blueprint, if_not_exists: bool) -> Result<Vec<String>> {
        validate_table(blueprint)?;
        validate_columns(blueprint)?;

        let mut body: Vec<String> = blueprint
            .columns()
            .iter()
            .map(|c| self.column_definition(blueprint, c))
            .collect();
        body.extend(self.table_constraints(blueprint)?);

        let mut sql = String::from("CREATE TABLE ");
        if if_not_exists {
            sql.push_str("IF NOT EXISTS ");
        }
        sql.push_str(&self.wrap_table(blueprint.table()));
        sql.push_str(" (");
        sql.push_str(&body.join(", "));
        sql.push(')');
        sql.push_str(&self.table_options(blueprint));

        let columns: Vec<&ColumnDefinition> = blueprint.columns().iter().collect();
        let mut statements = vec![sql];
        statements.extend(self.comment_statements(blueprint, &columns));
        Ok(statements)
    }

    /// Returns the table-level constraints of CREATE TABLE.
    fn table_constraints(&self, blueprint: &Blueprint) -> Result<Vec<String>> {
        let mut constraints: Vec<String> = primary_key(blueprint)?
            .map(|pk| {
                format!(
                    "CONSTRAINT {} PRIMARY KEY ({})",
                    self.wrap(&pk.name),
                    self.columnize(&pk.columns)
                )
            })
            .into_iter()
            .collect();
        if self.inline_foreign_keys(blueprint) {
            constraints.extend(self.foreign_constraints(blueprint)?);
        }
        Ok(constraints)
    }

    /// Returns the text appended after the closing parenthesis of
    /// CREATE TABLE.
    fn table_options(&self, _blueprint: &Blueprint) -> String {
        String::new()
    }

    /// Returns the statements that attach column comments.
    fn comment_statements(
        &self,
        _blueprint: &Blueprint,
        _columns: &[&ColumnDefinition],
    ) -> Vec<String> {
        Vec::new()
    }

    // =========================================================================
    // Alter
    // =========================================================================

    /// Compiles the addition of new columns as one combined ALTER TABLE.
    fn compile_add(&self, blueprint: &Blueprint) -> Result<Vec<String>> {
        validate_table(blueprint)?;
        validate_columns(blueprint)?;

        let columns = blueprint.added_columns();
        if columns.is_empty() {
            return Ok(Vec::new());
        }

        let mut clauses: Vec<String> = columns
            .iter()
            .map(|c| format!("ADD COLUMN {}", self.column_definition(blueprint, c)))
            .collect();
        if let Some(pk) = added_primary_key(blueprint) {
            clauses.push(self.add_primary_clause(&pk.name, &pk.columns));
        }

        let mut statements = vec![format!(
            "ALTER TABLE {} {}",
            self.wrap_table(blueprint.table()),
            clauses.join(", ")
        )];
        statements.extend(self.comment_statements(blueprint, &columns));
        Ok(statements)
    }

    /// Returns the ALTER TABLE clause adding a primary key.
    fn add_primary_clause(&self, name: &str, columns: &[String]) -> String {
        format!(
            "ADD CONSTRAINT {} PRIMARY KEY ({})",
            self.wrap(name),
            self.columnize(columns)
        )
    }

    /// Compiles the columns marked as changed.
    fn compile_change(&self, blueprint: &Blueprint) -> Result<Vec<String>>;

    /// Compiles DROP TABLE.
    fn compile_drop(&self, blueprint: &Blueprint) -> Result<String> {
        validate_table(blueprint)?;
        Ok(format!("DROP TABLE {}", self.wrap_table(blueprint.table())))
    }

    /// Compiles DROP TABLE IF EXISTS.
    fn compile_drop_if_exists(&self, blueprint: &Blueprint) -> Result<String> {
        validate_table(blueprint)?;
        Ok(format!(
            "DROP TABLE IF EXISTS {}",
            self.wrap_table(blueprint.table())
        ))
    }

    /// Compiles a table rename.
    fn compile_rename(&self, blueprint: &Blueprint) -> Result<String> {
        validate_table(blueprint)?;
        let to = new_name(blueprint)?;
        Ok(format!(
            "ALTER TABLE {} RENAME TO {}",
            self.wrap_table(blueprint.table()),
            self.wrap(naming::unqualified(to))
        ))
    }

    /// Compiles dropped columns as one combined ALTER TABLE.
    fn compile_drop_column(&self, blueprint: &Blueprint) -> Result<Vec<String>> {
        validate_table(blueprint)?;
        let names = blueprint.dropped_columns();
        validate_names(blueprint, names.iter())?;
        let clauses: Vec<String> = names
            .iter()
            .map(|c| format!("DROP COLUMN {}", self.wrap(c)))
            .collect();
        Ok(vec![format!(
            "ALTER TABLE {} {}",
            self.wrap_table(blueprint.table()),
            clauses.join(", ")
        )])
    }

    /// Compiles column renames, one statement each.
    fn compile_rename_column(&self, blueprint: &Blueprint) -> Result<Vec<String>> {
        validate_table(blueprint)?;
        let renames = blueprint.renamed_columns();
        validate_names(blueprint, renames.iter().flat_map(|(from, to)| [from, to]))?;
        let table = self.wrap_table(blueprint.table());
        Ok(renames
            .iter()
            .map(|(from, to)| {
                format!(
                    "ALTER TABLE {table} RENAME COLUMN {} TO {}",
                    self.wrap(from),
                    self.wrap(to)
                )
            })
            .collect())
    }

    // =========================================================================
    // Indexes
    // =========================================================================

    /// Compiles an index definition, dispatching on its kind.
    fn compile_index(&self, blueprint: &Blueprint, index: &IndexDefinition) -> Result<Option<String>> {
        validate_table(blueprint)?;
        validate_index(blueprint, index)?;
        match index.kind {
            IndexKind::Index => self.compile_plain_index(blueprint, index),
            IndexKind::Unique => self.compile_unique(blueprint, index),
            IndexKind::Primary => self.compile_primary(blueprint, index),
            IndexKind::FullText => self.compile_full_text(blueprint, index),
        }
    }

    /// Compiles a plain index.
    fn compile_plain_index(
        &self,
        blueprint: &Blueprint,
        index: &IndexDefinition,
    ) -> Result<Option<String>> {
        Ok(Some(self.index_statement(blueprint, index, "")))
    }

    /// Compiles a unique index.
    fn compile_unique(&self, blueprint: &Blueprint, index: &IndexDefinition) -> Result<Option<String>> {
        Ok(Some(self.index_statement(blueprint, index, "UNIQUE ")))
    }

    /// Compiles a primary key declared outside CREATE TABLE.
    ///
    /// When the table is being created the key is part of CREATE TABLE, so
    /// nothing is returned.
    fn compile_primary(&self, blueprint: &Blueprint, index: &IndexDefinition) -> Result<Option<String>> {
        if blueprint.creating() {
            return Ok(None);
        }
        let name = index_name(blueprint, index);
        Ok(Some(format!(
            "ALTER TABLE {} {}",
            self.wrap_table(blueprint.table()),
            self.add_primary_clause(&name, &index.columns)
        )))
    }

    /// Compiles a full-text index.
    fn compile_full_text(
        &self,
        blueprint: &Blueprint,
        index: &IndexDefinition,
    ) -> Result<Option<String>>;

    /// Builds `CREATE <keyword>INDEX ...`.
    fn index_statement(&self, blueprint: &Blueprint, index: &IndexDefinition, keyword: &str) -> String {
        let mut sql = format!("CREATE {keyword}INDEX ");
        if blueprint.if_not_exists() {
            sql.push_str("IF NOT EXISTS ");
        }
        sql.push_str(&self.wrap(&index_name(blueprint, index)));
        sql.push_str(" ON ");
        sql.push_str(&self.wrap_table(blueprint.table()));
        if let Some(algorithm) = index.algorithm {
            sql.push_str(" USING ");
            sql.push_str(algorithm.as_sql());
        }
        sql.push_str(" (");
        sql.push_str(&self.columnize(&index.columns));
        sql.push(')');
        sql
    }

    /// Compiles the index carried by a column's `unique`/`index` modifier.
    fn compile_column_index(
        &self,
        blueprint: &Blueprint,
        column: &ColumnDefinition,
        kind: IndexKind,
    ) -> Result<Option<String>> {
        let name = match kind {
            IndexKind::Unique => column.unique_name.clone(),
            IndexKind::Index => column.index_name.clone(),
            IndexKind::Primary | IndexKind::FullText => None,
        };
        let mut index = IndexDefinition::new(kind, vec![column.name.clone()]);
        index.name = name;
        self.compile_index(blueprint, &index)
    }

    /// Returns the quoted name of an index in the blueprint's schema.
    fn wrap_index(&self, blueprint: &Blueprint, name: &str) -> String {
        match blueprint.schema() {
            Some(schema) => format!("{}.{}", self.wrap(schema), self.wrap(name)),
            None => self.wrap(name),
        }
    }

    /// Builds a statement dropping one index.
    fn drop_index_statement(&self, blueprint: &Blueprint, name: &str) -> String {
        format!("DROP INDEX {}", self.wrap_index(blueprint, name))
    }

    /// Compiles dropped plain indexes.
    fn compile_drop_index(&self, blueprint: &Blueprint) -> Result<Vec<String>> {
        self.drop_indexes(blueprint, blueprint.dropped_indexes())
    }

    /// Compiles dropped unique indexes.
    fn compile_drop_unique(&self, blueprint: &Blueprint) -> Result<Vec<String>> {
        self.drop_indexes(blueprint, blueprint.dropped_uniques())
    }

    /// Compiles dropped full-text indexes.
    fn compile_drop_full_text(&self, blueprint: &Blueprint) -> Result<Vec<String>> {
        self.drop_indexes(blueprint, blueprint.dropped_full_texts())
    }

    /// Drops each named index.
    fn drop_indexes(&self, blueprint: &Blueprint, names: &[String]) -> Result<Vec<String>> {
        validate_table(blueprint)?;
        if names.iter().any(|n| n.trim().is_empty()) {
            return Err(CompileError::EmptyIndexName {
                table: blueprint.table().to_string(),
            });
        }
        Ok(names
            .iter()
            .map(|n| self.drop_index_statement(blueprint, n))
            .collect())
    }

    /// Compiles the primary key drop.
    fn compile_drop_primary(&self, blueprint: &Blueprint) -> Result<Vec<String>> {
        validate_table(blueprint)?;
        Ok(blueprint
            .dropped_primary()
            .map(|name| {
                format!(
                    "ALTER TABLE {} DROP CONSTRAINT {}",
                    self.wrap_table(blueprint.table()),
                    self.wrap(name)
                )
            })
            .into_iter()
            .collect())
    }

    /// Compiles index renames.
    fn compile_rename_index(&self, blueprint: &Blueprint) -> Result<Vec<String>> {
        validate_table(blueprint)?;
        Ok(blueprint
            .renamed_indexes()
            .iter()
            .map(|(from, to)| {
                format!(
                    "ALTER INDEX {} RENAME TO {}",
                    self.wrap_index(blueprint, from),
                    self.wrap(to)
                )
            })
            .collect())
    }

    // =========================================================================
    // Foreign keys
    // =========================================================================

    /// Renders `FOREIGN KEY (...) REFERENCES ...` with its actions.
    fn foreign_clause(&self, foreign_key: &ForeignKeyDefinition) -> String {
        format!(
            "FOREIGN KEY ({}) {}",
            self.wrap(&foreign_key.column),
            self.references_clause(foreign_key)
        )
    }

    /// Renders `REFERENCES table (column)` with its actions.
    fn references_clause(&self, foreign_key: &ForeignKeyDefinition) -> String {
        let mut sql = format!(
            "REFERENCES {} ({})",
            self.wrap_table(&foreign_key.on),
            self.wrap(&foreign_key.references)
        );
        if let Some(action) = foreign_key.on_delete {
            sql.push_str(" ON DELETE ");
            sql.push_str(action.as_sql());
        }
        if let Some(action) = foreign_key.on_update {
            sql.push_str(" ON UPDATE ");
            sql.push_str(action.as_sql());
        }
        sql
    }

    /// Returns whether foreign keys are declared inside CREATE TABLE.
    ///
    /// Under IF NOT EXISTS they are, so that repeating the operation never
    /// adds a constraint twice.
    fn inline_foreign_keys(&self, blueprint: &Blueprint) -> bool {
        blueprint.if_not_exists()
    }

    /// Renders every foreign key as a `CONSTRAINT ... FOREIGN KEY` table
    /// constraint.
    fn foreign_constraints(&self, blueprint: &Blueprint) -> Result<Vec<String>> {
        blueprint
            .foreign_keys()
            .iter()
            .map(|fk| {
                validate_foreign(blueprint, fk)?;
                Ok(format!(
                    "CONSTRAINT {} {}",
                    self.wrap(&foreign_name(blueprint, fk)),
                    self.foreign_clause(fk)
                ))
            })
            .collect()
    }

    /// Compiles a foreign key as an ALTER TABLE ... ADD CONSTRAINT.
    fn compile_foreign(
        &self,
        blueprint: &Blueprint,
        foreign_key: &ForeignKeyDefinition,
    ) -> Result<Option<String>> {
        validate_table(blueprint)?;
        validate_foreign(blueprint, foreign_key)?;
        if self.inline_foreign_keys(blueprint) {
            return Ok(None);
        }
        Ok(Some(format!(
            "ALTER TABLE {} ADD CONSTRAINT {} {}",
            self.wrap_table(blueprint.table()),
            self.wrap(&foreign_name(blueprint, foreign_key)),
            self.foreign_clause(foreign_key)
        )))
    }

    /// Compiles dropped foreign keys.
    fn compile_drop_foreign(&self, blueprint: &Blueprint) -> Result<Vec<String>> {
        validate_table(blueprint)?;
        let table = self.wrap_table(blueprint.table());
        Ok(blueprint
            .dropped_foreigns()
            .iter()
            .map(|name| format!("ALTER TABLE {table} DROP CONSTRAINT {}", self.wrap(name)))
            .collect())
    }

    // =========================================================================
    // Comments and existence checks
    // =========================================================================

    /// Compiles the table comment.
    fn compile_table_comment(&self, blueprint: &Blueprint) -> Result<Vec<String>>;

    /// Returns a query yielding a row when `table` exists.
    fn compile_table_exists(&self, table: &str) -> String;

    /// Returns a query yielding a row when `column` exists on `table`.
    fn compile_column_exists(&self, table: &str, column: &str) -> String;
}

/// A resolved primary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PrimaryKey {
    pub(crate) name: String,
    pub(crate) columns: Vec<String>,
}

/// Resolves the primary key of a table being created.
///
/// A `primary([...])` declaration wins over column-level `primary` flags.
pub(crate) fn primary_key(blueprint: &Blueprint) -> Result<Option<PrimaryKey>> {
    if let Some(index) = blueprint
        .indexes()
        .iter()
        .find(|i| i.kind == IndexKind::Primary)
    {
        validate_index(blueprint, index)?;
        return Ok(Some(PrimaryKey {
            name: index_name(blueprint, index),
            columns: index.columns.clone(),
        }));
    }
    Ok(column_primary_key(blueprint, blueprint.columns().iter()))
}

/// Resolves the primary key formed by added columns flagged `primary`.
///
/// A `primary([...])` declaration is compiled on its own and wins over the
/// flags, so none is returned when one exists.
pub(crate) fn added_primary_key(blueprint: &Blueprint) -> Option<PrimaryKey> {
    if blueprint
        .indexes()
        .iter()
        .any(|i| i.kind == IndexKind::Primary)
    {
        return None;
    }
    column_primary_key(blueprint, blueprint.columns().iter().filter(|c| !c.change))
}

fn column_primary_key<'a>(
    blueprint: &Blueprint,
    columns: impl Iterator<Item = &'a ColumnDefinition>,
) -> Option<PrimaryKey> {
    let primary: Vec<&ColumnDefinition> = columns.filter(|c| c.primary).collect();
    if primary.is_empty() {
        return None;
    }
    let name = primary
        .iter()
        .find_map(|c| c.primary_name.clone())
        .unwrap_or_else(|| naming::primary_key(blueprint.table()));
    Some(PrimaryKey {
        name,
        columns: primary.iter().map(|c| c.name.clone()).collect(),
    })
}

/// Returns the explicit or conventional name of an index.
pub(crate) fn index_name(blueprint: &Blueprint, index: &IndexDefinition) -> String {
    index
        .name
        .clone()
        .unwrap_or_else(|| naming::index(blueprint.table(), index.kind, &index.columns))
}

/// Returns the explicit or conventional name of a foreign key.
pub(crate) fn foreign_name(blueprint: &Blueprint, foreign_key: &ForeignKeyDefinition) -> String {
    foreign_key
        .name
        .clone()
        .unwrap_or_else(|| naming::foreign_key(blueprint.table(), &foreign_key.on))
}

pub(crate) fn validate_table(blueprint: &Blueprint) -> Result<()> {
    if blueprint.table().trim().is_empty() {
        return Err(CompileError::EmptyTableName);
    }
    Ok(())
}

/// Checks column names and enumeration values.
pub(crate) fn validate_columns(blueprint: &Blueprint) -> Result<()> {
    let mut seen = HashSet::new();
    for column in blueprint.columns() {
        if column.name.trim().is_empty() {
            return Err(CompileError::EmptyColumnName {
                table: blueprint.table().to_string(),
            });
        }
        if !seen.insert(column.name.as_str()) {
            return Err(CompileError::DuplicateColumn {
                table: blueprint.table().to_string(),
                column: column.name.clone(),
            });
        }
        if let ColumnType::Enum { allowed } = &column.column_type {
            if allowed.is_empty() {
                return Err(CompileError::EmptyEnumValues {
                    column: column.name.clone(),
                });
            }
        }
        if let Some(DefaultValue::Float(value)) = &column.default {
            if !value.is_finite() {
                return Err(CompileError::NonFiniteDefault {
                    column: column.name.clone(),
                });
            }
        }
    }
    Ok(())
}

fn validate_names<'a>(blueprint: &Blueprint, mut names: impl Iterator<Item = &'a String>) -> Result<()> {
    if names.any(|n| n.trim().is_empty()) {
        return Err(CompileError::EmptyColumnName {
            table: blueprint.table().to_string(),
        });
    }
    Ok(())
}

pub(crate) fn validate_index(blueprint: &Blueprint, index: &IndexDefinition) -> Result<()> {
    if index.columns.is_empty() {
        return Err(CompileError::EmptyIndexColumns {
            table: blueprint.table().to_string(),
            kind: index.kind,
        });
    }
    validate_names(blueprint, index.columns.iter())?;
    if index.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(CompileError::EmptyIndexName {
            table: blueprint.table().to_string(),
        });
    }
    Ok(())
}

pub(crate) fn validate_foreign(blueprint: &Blueprint, foreign_key: &ForeignKeyDefinition) -> Result<()> {
    let missing = if foreign_key.column.trim().is_empty() {
        Some("column")
    } else if foreign_key.on.trim().is_empty() {
        Some("referenced table")
    } else if foreign_key.references.trim().is_empty() {
        Some("referenced column")
    } else {
        None
    };
    match missing {
        Some(missing) => Err(CompileError::IncompleteForeignKey {
            table: blueprint.table().to_string(),
            missing,
        }),
        None => Ok(()),
    }
}

pub(crate) fn new_name(blueprint: &Blueprint) -> Result<&str> {
    match blueprint.new_name() {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(CompileError::MissingNewName {
            table: blueprint.table().to_string(),
        }),
    }
}

/// Splits a possibly qualified table name into schema and table.
pub(crate) fn split_table(table: &str) -> (Option<&str>, &str) {
    match table.rsplit_once('.') {
        Some((schema, name)) => (Some(schema), name),
        None => (None, table),
    }
}
