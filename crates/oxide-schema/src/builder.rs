//! Schema builder.
//!
//! Validates table names, builds a blueprint from the caller's description,
//! compiles it with the configured grammar and runs the statements in order
//! on the caller's transaction.

use oxide_schema_core::{Blueprint, CompileError, Dialect, Grammar};
use tracing::{debug, info};

use crate::config::SchemaConfig;
use crate::error::{Result, SchemaError};
use crate::transaction::Transaction;

/// Compiles and executes table operations for one dialect.
#[derive(Debug)]
pub struct SchemaBuilder {
    config: SchemaConfig,
    grammar: Box<dyn Grammar>,
}

impl SchemaBuilder {
    /// Creates a builder from a configuration.
    #[must_use]
    pub fn new(config: SchemaConfig) -> Self {
        Self {
            grammar: config.dialect.grammar(),
            config,
        }
    }

    /// Creates a builder from a dialect identifier such as `"pgx"`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownDialect`] for an unrecognised identifier.
    pub fn for_dialect(name: &str) -> Result<Self> {
        let dialect: Dialect = name.parse()?;
        Ok(Self::new(SchemaConfig::new(dialect)))
    }

    /// Returns the target dialect.
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.config.dialect
    }

    /// Returns the grammar.
    #[must_use]
    pub fn grammar(&self) -> &dyn Grammar {
        self.grammar.as_ref()
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &SchemaConfig {
        &self.config
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Creates `table` as described by `describe`.
    ///
    /// # Errors
    ///
    /// Fails on an invalid table name, a compilation error, or the first
    /// statement the database rejects.
    pub async fn create<T, F>(&self, tx: &mut T, table: &str, describe: F) -> Result<()>
    where
        T: Transaction,
        F: FnOnce(&mut Blueprint),
    {
        info!(table = %table, dialect = %self.dialect(), "Creating table");
        let statements = self.create_sql(table, describe)?;
        self.execute(tx, &statements).await
    }

    /// Creates `table` unless it already exists.
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create).
    pub async fn create_if_not_exists<T, F>(&self, tx: &mut T, table: &str, describe: F) -> Result<()>
    where
        T: Transaction,
        F: FnOnce(&mut Blueprint),
    {
        info!(table = %table, dialect = %self.dialect(), "Creating table if not exists");
        let blueprint = self.blueprint(table, |bp| {
            bp.create_if_not_exists();
            describe(bp);
        })?;
        let statements = self.compile(&blueprint)?;
        self.execute(tx, &statements).await
    }

    /// Alters `table` as described by `describe`.
    ///
    /// # Errors
    ///
    /// Same as [`create`](Self::create).
    pub async fn table<T, F>(&self, tx: &mut T, table: &str, describe: F) -> Result<()>
    where
        T: Transaction,
        F: FnOnce(&mut Blueprint),
    {
        info!(table = %table, dialect = %self.dialect(), "Altering table");
        let statements = self.table_sql(table, describe)?;
        self.execute(tx, &statements).await
    }

    /// Drops `table`.
    ///
    /// # Errors
    ///
    /// Fails on an invalid table name or a database error.
    pub async fn drop<T: Transaction>(&self, tx: &mut T, table: &str) -> Result<()> {
        info!(table = %table, dialect = %self.dialect(), "Dropping table");
        let blueprint = self.blueprint(table, Blueprint::drop)?;
        let statements = self.compile(&blueprint)?;
        self.execute(tx, &statements).await
    }

    /// Drops `table` if it exists.
    ///
    /// # Errors
    ///
    /// Fails on an invalid table name or a database error.
    pub async fn drop_if_exists<T: Transaction>(&self, tx: &mut T, table: &str) -> Result<()> {
        info!(table = %table, dialect = %self.dialect(), "Dropping table if exists");
        let blueprint = self.blueprint(table, Blueprint::drop_if_exists)?;
        let statements = self.compile(&blueprint)?;
        self.execute(tx, &statements).await
    }

    /// Renames `from` to `to`.
    ///
    /// # Errors
    ///
    /// Fails on an invalid name or a database error.
    pub async fn rename<T: Transaction>(&self, tx: &mut T, from: &str, to: &str) -> Result<()> {
        info!(from = %from, to = %to, dialect = %self.dialect(), "Renaming table");
        self.validate_table_name(to)?;
        let blueprint = self.blueprint(from, |bp| bp.rename(to))?;
        let statements = self.compile(&blueprint)?;
        self.execute(tx, &statements).await
    }

    /// Reports whether `table` exists.
    ///
    /// # Errors
    ///
    /// Fails on an invalid table name or a database error.
    pub async fn has_table<T: Transaction>(&self, tx: &mut T, table: &str) -> Result<bool> {
        self.validate_table_name(table)?;
        let sql = self.grammar.compile_table_exists(table);
        debug!(sql = %sql, "Checking table existence");
        Ok(tx.exists(&sql).await?)
    }

    /// Reports whether `column` exists on `table`.
    ///
    /// # Errors
    ///
    /// Fails on an invalid table or column name or a database error.
    pub async fn has_column<T: Transaction>(
        &self,
        tx: &mut T,
        table: &str,
        column: &str,
    ) -> Result<bool> {
        self.validate_table_name(table)?;
        if column.trim().is_empty() {
            return Err(CompileError::EmptyColumnName {
                table: table.to_string(),
            }
            .into());
        }
        let sql = self.grammar.compile_column_exists(table, column);
        debug!(sql = %sql, "Checking column existence");
        Ok(tx.exists(&sql).await?)
    }

    // =========================================================================
    // Compilation
    // =========================================================================

    /// Compiles the statements [`create`](Self::create) would run.
    ///
    /// # Errors
    ///
    /// Fails on an invalid table name or a compilation error.
    pub fn create_sql<F>(&self, table: &str, describe: F) -> Result<Vec<String>>
    where
        F: FnOnce(&mut Blueprint),
    {
        let blueprint = self.blueprint(table, |bp| {
            bp.create();
            describe(bp);
        })?;
        self.compile(&blueprint)
    }

    /// Compiles the statements [`table`](Self::table) would run.
    ///
    /// # Errors
    ///
    /// Fails on an invalid table name or a compilation error.
    pub fn table_sql<F>(&self, table: &str, describe: F) -> Result<Vec<String>>
    where
        F: FnOnce(&mut Blueprint),
    {
        let blueprint = self.blueprint(table, describe)?;
        self.compile(&blueprint)
    }

    /// Compiles a blueprint with this builder's grammar.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Compile`] if the grammar rejects the blueprint.
    pub fn compile(&self, blueprint: &Blueprint) -> Result<Vec<String>> {
        Ok(blueprint.to_sql(self.grammar.as_ref())?)
    }

    fn blueprint(&self, table: &str, describe: impl FnOnce(&mut Blueprint)) -> Result<Blueprint> {
        self.validate_table_name(table)?;
        let mut blueprint = Blueprint::new(table);
        describe(&mut blueprint);
        Ok(blueprint)
    }

    /// Checks a table name before anything is compiled.
    ///
    /// At most one schema qualifier is allowed, and only on dialects with
    /// schema support.
    fn validate_table_name(&self, table: &str) -> Result<()> {
        if table.trim().is_empty() {
            return Err(SchemaError::EmptyTableName);
        }
        if let Some((schema, name)) = table.split_once('.') {
            if !self.dialect().supports_schemas() {
                return Err(SchemaError::SchemaNotSupported {
                    dialect: self.dialect(),
                    name: table.to_string(),
                });
            }
            if schema.trim().is_empty() || name.trim().is_empty() || name.contains('.') {
                return Err(SchemaError::MalformedTableName {
                    name: table.to_string(),
                });
            }
        }
        Ok(())
    }

    // =========================================================================
    // Execution
    // =========================================================================

    /// Runs statements in order, stopping at the first failure.
    async fn execute<T: Transaction>(&self, tx: &mut T, statements: &[String]) -> Result<()> {
        for sql in statements {
            debug!(sql = %sql, "Executing SQL");
            if self.config.dry_run {
                info!(sql = %sql, "Dry run, statement not executed");
                continue;
            }
            tx.execute(sql).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder(dialect: Dialect) -> SchemaBuilder {
        SchemaBuilder::new(SchemaConfig::new(dialect))
    }

    #[test]
    fn test_for_dialect_resolves_aliases() {
        let schema = SchemaBuilder::for_dialect("pgx").unwrap();
        assert_eq!(schema.dialect(), Dialect::Postgres);
        assert_eq!(schema.grammar().dialect(), Dialect::Postgres);
        assert!(!schema.config().dry_run);
    }

    #[test]
    fn test_for_dialect_rejects_unknown() {
        let err = SchemaBuilder::for_dialect("mssql").unwrap_err();
        assert!(matches!(err, SchemaError::UnknownDialect(_)));
        assert_eq!(err.to_string(), "Unknown dialect 'mssql'");
    }

    #[test]
    fn test_validate_table_name() {
        let pg = builder(Dialect::Postgres);
        assert!(pg.validate_table_name("users").is_ok());
        assert!(pg.validate_table_name("app.users").is_ok());
        assert!(matches!(
            pg.validate_table_name("  "),
            Err(SchemaError::EmptyTableName)
        ));
        for name in ["a.b.c", ".users", "app.", "app. "] {
            assert!(
                matches!(
                    pg.validate_table_name(name),
                    Err(SchemaError::MalformedTableName { .. })
                ),
                "{name}"
            );
        }

        let sqlite = builder(Dialect::Sqlite);
        assert!(matches!(
            sqlite.validate_table_name("main.users"),
            Err(SchemaError::SchemaNotSupported {
                dialect: Dialect::Sqlite,
                ..
            })
        ));
    }

    #[test]
    fn test_create_sql_registers_create() {
        let sql = builder(Dialect::MySql)
            .create_sql("tags", |table| {
                table.increments("id");
                table.string("label", 50).unique();
            })
            .unwrap();
        assert_eq!(
            sql,
            vec![
                "CREATE TABLE `tags` (`id` INT UNSIGNED NOT NULL AUTO_INCREMENT, `label` VARCHAR(50) NOT NULL UNIQUE, PRIMARY KEY (`id`))"
            ]
        );
    }

    #[test]
    fn test_table_sql_surfaces_compile_errors() {
        let err = builder(Dialect::Sqlite)
            .table_sql("users", |table| {
                table.string("email", 320).change();
            })
            .unwrap_err();
        assert!(matches!(
            err,
            SchemaError::Compile(CompileError::Unsupported { .. })
        ));
    }
}
