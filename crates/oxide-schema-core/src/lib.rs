//! # oxide-schema-core
//!
//! Table blueprints and the grammars that compile them into DDL.
//!
//! A [`Blueprint`] records what should happen to one table. A [`Grammar`]
//! for the target [`Dialect`] turns it into an ordered list of SQL
//! statements. Nothing here touches a database; see the `oxide-schema`
//! crate for execution.
//!
//! ```rust
//! use oxide_schema_core::{Blueprint, Dialect};
//!
//! let mut users = Blueprint::new("users");
//! users.create();
//! users.id();
//! users.string("name", 255);
//! users.string("email", 255).unique();
//! users.timestamp("created_at").default("CURRENT_TIMESTAMP");
//!
//! let sql = users.to_sql(Dialect::Postgres.grammar().as_ref()).unwrap();
//! assert_eq!(sql.len(), 2);
//! assert_eq!(sql[1], r#"CREATE UNIQUE INDEX "uk_users_email" ON "users" ("email")"#);
//!
//! let sql = users.to_sql(Dialect::MySql.grammar().as_ref()).unwrap();
//! assert_eq!(sql.len(), 1);
//! assert!(sql[0].contains("`email` VARCHAR(255) NOT NULL UNIQUE"));
//! ```

pub mod blueprint;
pub mod dialect;
pub mod error;
pub mod grammar;
pub mod naming;

pub use blueprint::{
    Blueprint, ColumnDefinition, ColumnHandle, ColumnType, Command, DefaultValue,
    ForeignKeyAction, ForeignKeyDefinition, ForeignKeyHandle, IndexAlgorithm, IndexDefinition,
    IndexHandle, IndexKind, SpatialKind,
};
pub use dialect::Dialect;
pub use error::{CompileError, Result, UnknownDialect};
pub use grammar::{Grammar, MySqlGrammar, PostgresGrammar, SqliteGrammar};
