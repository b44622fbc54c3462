//! End-to-end execution against an in-memory SQLite database.

use oxide_schema::prelude::*;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

async fn create_test_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create in-memory SQLite pool")
}

fn schema() -> SchemaBuilder {
    SchemaBuilder::new(SchemaConfig::new(Dialect::Sqlite))
}

fn describe_users(table: &mut Blueprint) {
    table.id();
    table.string("name", 255);
    table.string("email", 255).unique();
    table.boolean("active").default(true);
    table.timestamps();
}

#[tokio::test]
async fn test_create_and_inspect() {
    let pool = create_test_pool().await;
    let mut tx = pool.begin().await.unwrap();
    let schema = schema();

    assert!(!schema.has_table(&mut tx, "users").await.unwrap());
    schema.create(&mut tx, "users", describe_users).await.unwrap();

    assert!(schema.has_table(&mut tx, "users").await.unwrap());
    assert!(schema.has_column(&mut tx, "users", "email").await.unwrap());
    assert!(!schema.has_column(&mut tx, "users", "password").await.unwrap());

    let index = sqlx::query(
        "SELECT 1 FROM sqlite_master WHERE type = 'index' AND name = 'uk_users_email'",
    )
    .fetch_optional(&mut *tx)
    .await
    .unwrap();
    assert!(index.is_some());

    tx.commit().await.unwrap();
}

#[tokio::test]
async fn test_create_if_not_exists_is_repeatable() {
    let pool = create_test_pool().await;
    let mut tx = pool.begin().await.unwrap();
    let schema = schema();

    schema
        .create_if_not_exists(&mut tx, "users", describe_users)
        .await
        .unwrap();
    schema
        .create_if_not_exists(&mut tx, "users", describe_users)
        .await
        .unwrap();

    let err = schema
        .create(&mut tx, "users", describe_users)
        .await
        .unwrap_err();
    assert!(matches!(err, SchemaError::Database(_)));
}

#[tokio::test]
async fn test_foreign_keys_are_inlined() {
    let pool = create_test_pool().await;
    let mut tx = pool.begin().await.unwrap();
    let schema = schema();

    schema.create(&mut tx, "users", describe_users).await.unwrap();
    schema
        .create(&mut tx, "posts", |table| {
            table.id();
            table.foreign_id("user_id");
            table.string("title", 200);
            table
                .foreign("user_id")
                .references("id")
                .on("users")
                .cascade_on_delete();
            table.index(["user_id", "title"]);
        })
        .await
        .unwrap();

    let row: (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM pragma_foreign_key_list('posts') WHERE \"table\" = 'users'",
    )
    .fetch_one(&mut *tx)
    .await
    .unwrap();
    assert_eq!(row.0, 1);
}

#[tokio::test]
async fn test_alter_add_rename_and_drop_columns() {
    let pool = create_test_pool().await;
    let mut tx = pool.begin().await.unwrap();
    let schema = schema();

    schema.create(&mut tx, "users", describe_users).await.unwrap();
    schema
        .table(&mut tx, "users", |table| {
            table.string("nickname", 32).nullable();
            table.integer("logins").default(0);
        })
        .await
        .unwrap();
    assert!(schema.has_column(&mut tx, "users", "nickname").await.unwrap());
    assert!(schema.has_column(&mut tx, "users", "logins").await.unwrap());

    schema
        .table(&mut tx, "users", |table| {
            table.rename_column("nickname", "handle");
            table.drop_column("logins");
        })
        .await
        .unwrap();
    assert!(schema.has_column(&mut tx, "users", "handle").await.unwrap());
    assert!(!schema.has_column(&mut tx, "users", "nickname").await.unwrap());
    assert!(!schema.has_column(&mut tx, "users", "logins").await.unwrap());
}

#[tokio::test]
async fn test_rename_and_drop_table() {
    let pool = create_test_pool().await;
    let mut tx = pool.begin().await.unwrap();
    let schema = schema();

    schema.create(&mut tx, "users", describe_users).await.unwrap();
    schema.rename(&mut tx, "users", "people").await.unwrap();
    assert!(!schema.has_table(&mut tx, "users").await.unwrap());
    assert!(schema.has_table(&mut tx, "people").await.unwrap());

    schema.drop(&mut tx, "people").await.unwrap();
    assert!(!schema.has_table(&mut tx, "people").await.unwrap());

    schema.drop_if_exists(&mut tx, "people").await.unwrap();
    let err = schema.drop(&mut tx, "people").await.unwrap_err();
    assert!(matches!(err, SchemaError::Database(_)));
}

#[tokio::test]
async fn test_failure_leaves_earlier_statements_in_transaction() {
    let pool = create_test_pool().await;
    let mut tx = pool.begin().await.unwrap();
    let schema = schema();

    // Index names are global in SQLite, so this one collides with the
    // unique index generated for `accounts.email`.
    sqlx::query("CREATE TABLE other (email TEXT)")
        .execute(&mut *tx)
        .await
        .unwrap();
    sqlx::query("CREATE INDEX uk_accounts_email ON other (email)")
        .execute(&mut *tx)
        .await
        .unwrap();

    let err = schema
        .create(&mut tx, "accounts", |table| {
            table.id();
            table.string("email", 255).unique();
            table.string("name", 100).index();
        })
        .await
        .unwrap_err();
    assert!(matches!(err, SchemaError::Database(_)));

    assert!(schema.has_table(&mut tx, "accounts").await.unwrap());
    let later = sqlx::query(
        "SELECT 1 FROM sqlite_master WHERE type = 'index' AND name = 'idx_accounts_name'",
    )
    .fetch_optional(&mut *tx)
    .await
    .unwrap();
    assert!(later.is_none());

    tx.rollback().await.unwrap();
}

#[tokio::test]
async fn test_dry_run_creates_nothing() {
    let pool = create_test_pool().await;
    let mut tx = pool.begin().await.unwrap();
    let dry = SchemaBuilder::new(SchemaConfig::new(Dialect::Sqlite).dry_run(true));

    dry.create(&mut tx, "users", describe_users).await.unwrap();
    assert!(!dry.has_table(&mut tx, "users").await.unwrap());
}

#[tokio::test]
async fn test_unsupported_operations_fail_before_execution() {
    let pool = create_test_pool().await;
    let mut tx = pool.begin().await.unwrap();
    let schema = schema();

    let err = schema
        .create(&mut tx, "main.users", describe_users)
        .await
        .unwrap_err();
    assert!(matches!(err, SchemaError::SchemaNotSupported { .. }));

    schema.create(&mut tx, "users", describe_users).await.unwrap();
    let err = schema
        .table(&mut tx, "users", |table| {
            table.string("nickname", 32).nullable();
            table.string("email", 320).change();
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SchemaError::Compile(CompileError::Unsupported { .. })
    ));
    assert!(!schema.has_column(&mut tx, "users", "nickname").await.unwrap());
}
