//! The transaction seam between the builder and the database driver.
//!
//! The builder never opens, commits or rolls back a transaction. It only
//! issues statements on the one the caller hands in.

use std::future::Future;

use sqlx::{MySql, Postgres, Sqlite};

/// A caller-owned transaction statements can be executed on.
///
/// Implemented for sqlx transactions on SQLite, PostgreSQL and MySQL.
/// Errors are returned exactly as the driver reports them.
pub trait Transaction: Send {
    /// Executes one statement, discarding any result rows.
    fn execute(&mut self, sql: &str) -> impl Future<Output = Result<(), sqlx::Error>> + Send;

    /// Runs a query and reports whether it returned at least one row.
    fn exists(&mut self, sql: &str) -> impl Future<Output = Result<bool, sqlx::Error>> + Send;
}

macro_rules! impl_sqlx_transaction {
    ($($db:ty),+ $(,)?) => {
        $(
            impl Transaction for sqlx::Transaction<'_, $db> {
                async fn execute(&mut self, sql: &str) -> Result<(), sqlx::Error> {
                    sqlx::query(sql).execute(&mut **self).await?;
                    Ok(())
                }

                async fn exists(&mut self, sql: &str) -> Result<bool, sqlx::Error> {
                    let row = sqlx::query(sql).fetch_optional(&mut **self).await?;
                    Ok(row.is_some())
                }
            }
        )+
    };
}

impl_sqlx_transaction!(Sqlite, Postgres, MySql);
