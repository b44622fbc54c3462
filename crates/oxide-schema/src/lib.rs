//! Run table blueprints as DDL inside a caller-owned transaction.
//!
//! `oxide-schema` glues the pure compilation layer of `oxide-schema-core` to
//! a database:
//! - **Config** - the target dialect and dry-run switch, loadable from JSON
//! - **Builder** - validates table names, compiles blueprints and executes
//!   the statements in order
//! - **Transaction** - the seam statements are executed on, implemented for
//!   sqlx transactions
//!
//! The builder never commits or rolls back. If a statement fails, the error
//! is returned as-is and the caller decides what to do with the transaction.
//!
//! # Example
//!
//! ```rust,no_run
//! use oxide_schema::SchemaBuilder;
//! use sqlx::sqlite::SqlitePoolOptions;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = SqlitePoolOptions::new().connect("sqlite::memory:").await?;
//! let schema = SchemaBuilder::for_dialect("sqlite")?;
//!
//! let mut tx = pool.begin().await?;
//! schema
//!     .create(&mut tx, "users", |table| {
//!         table.id();
//!         table.string("email", 255).unique();
//!         table.timestamps();
//!     })
//!     .await?;
//! tx.commit().await?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod transaction;

pub use builder::SchemaBuilder;
pub use config::SchemaConfig;
pub use error::{Result, SchemaError};
pub use transaction::Transaction;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::builder::SchemaBuilder;
    pub use crate::config::SchemaConfig;
    pub use crate::error::{Result, SchemaError};
    pub use crate::transaction::Transaction;
    pub use oxide_schema_core::{
        Blueprint, ColumnType, CompileError, DefaultValue, Dialect, ForeignKeyAction, Grammar,
        IndexAlgorithm, IndexKind, SpatialKind,
    };
}
