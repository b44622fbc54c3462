//! Blueprint compilation across all dialects.
//!
//! Covers command assembly order, generated names, failure atomicity and
//! the users-table scenario on each grammar.

use oxide_schema_core::{
    Blueprint, Command, CompileError, Dialect, Grammar, MySqlGrammar, PostgresGrammar,
    SqliteGrammar,
};

const DIALECTS: [Dialect; 3] = [Dialect::Postgres, Dialect::MySql, Dialect::Sqlite];

fn users_table() -> Blueprint {
    let mut table = Blueprint::new("users");
    table.create();
    table.id();
    table.string("name", 255);
    table.string("email", 255).unique();
    table.timestamp("created_at").default("CURRENT_TIMESTAMP");
    table
}

// =============================================================================
// End-to-end users table
// =============================================================================

#[test]
fn test_users_table_postgres() {
    let sql = users_table().to_sql(&PostgresGrammar).unwrap();
    assert_eq!(
        sql,
        vec![
            "CREATE TABLE \"users\" (\"id\" BIGSERIAL NOT NULL, \"name\" VARCHAR(255) NOT NULL, \"email\" VARCHAR(255) NOT NULL, \"created_at\" TIMESTAMP WITHOUT TIME ZONE NOT NULL DEFAULT CURRENT_TIMESTAMP, CONSTRAINT \"pk_users\" PRIMARY KEY (\"id\"))",
            "CREATE UNIQUE INDEX \"uk_users_email\" ON \"users\" (\"email\")",
        ]
    );
}

#[test]
fn test_users_table_mysql() {
    let sql = users_table().to_sql(&MySqlGrammar).unwrap();
    assert_eq!(
        sql,
        vec![
            "CREATE TABLE `users` (`id` BIGINT UNSIGNED NOT NULL AUTO_INCREMENT, `name` VARCHAR(255) NOT NULL, `email` VARCHAR(255) NOT NULL UNIQUE, `created_at` TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP, PRIMARY KEY (`id`))"
        ]
    );
}

#[test]
fn test_users_table_sqlite() {
    let sql = users_table().to_sql(&SqliteGrammar).unwrap();
    assert_eq!(
        sql,
        vec![
            "CREATE TABLE \"users\" (\"id\" INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL, \"name\" TEXT NOT NULL, \"email\" TEXT NOT NULL, \"created_at\" TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP)",
            "CREATE UNIQUE INDEX \"uk_users_email\" ON \"users\" (\"email\")",
        ]
    );
}

// =============================================================================
// Command assembly
// =============================================================================

#[test]
fn test_inline_uniques_precede_composite_unique() {
    let mut table = Blueprint::new("accounts");
    table.create();
    table.string("a", 50).unique();
    table.string("b", 50).unique();
    table.unique(["a", "b"]);

    for grammar in [&PostgresGrammar as &dyn Grammar, &SqliteGrammar] {
        let sql = table.to_sql(grammar).unwrap();
        assert_eq!(sql.len(), 4);
        assert!(sql[0].starts_with("CREATE TABLE "));
        assert!(sql[1].contains("uk_accounts_a\" ON"));
        assert!(sql[2].contains("uk_accounts_b\" ON"));
        assert!(sql[3].contains("uk_accounts_a_b\" ON"));
    }
}

#[test]
fn test_implied_commands_are_prepended_once() {
    let mut table = Blueprint::new("users");
    table.drop_column("legacy");
    table.string("nickname", 32).nullable();
    table.string("email", 320).change();
    table.integer("age").nullable();

    assert_eq!(
        table.commands(),
        vec![Command::Change, Command::Add, Command::DropColumn]
    );

    let sql = table.to_sql(&PostgresGrammar).unwrap();
    assert_eq!(
        sql,
        vec![
            "ALTER TABLE \"users\" ALTER COLUMN \"email\" TYPE VARCHAR(320), ALTER COLUMN \"email\" SET NOT NULL, ALTER COLUMN \"email\" DROP DEFAULT",
            "ALTER TABLE \"users\" ADD COLUMN \"nickname\" VARCHAR(32), ADD COLUMN \"age\" INTEGER",
            "ALTER TABLE \"users\" DROP COLUMN \"legacy\"",
        ]
    );
}

#[test]
fn test_added_column_index_follows_add() {
    let mut table = Blueprint::new("users");
    table.string("slug", 100).index();

    let sql = table.to_sql(&MySqlGrammar).unwrap();
    assert_eq!(
        sql,
        vec![
            "ALTER TABLE `users` ADD COLUMN `slug` VARCHAR(100) NOT NULL",
            "CREATE INDEX `idx_users_slug` ON `users` (`slug`)",
        ]
    );
}

#[test]
fn test_foreign_keys_come_last() {
    let mut table = Blueprint::new("posts");
    table.create();
    table.id();
    table.foreign_id("user_id").index();
    table
        .foreign("user_id")
        .references("id")
        .on("users")
        .cascade_on_delete();

    let sql = table.to_sql(&PostgresGrammar).unwrap();
    assert_eq!(sql.len(), 3);
    assert_eq!(
        sql[1],
        "CREATE INDEX \"idx_posts_user_id\" ON \"posts\" (\"user_id\")"
    );
    assert_eq!(
        sql[2],
        "ALTER TABLE \"posts\" ADD CONSTRAINT \"fk_posts_users\" FOREIGN KEY (\"user_id\") REFERENCES \"users\" (\"id\") ON DELETE CASCADE"
    );
}

#[test]
fn test_recompiling_is_idempotent() {
    let mut table = Blueprint::new("app.orders");
    table.string("reference", 40).unique();
    table.index(["customer_id", "placed_at"]);
    table.foreign("customer_id").references("id").on("app.customers");

    for dialect in [Dialect::Postgres, Dialect::MySql] {
        let grammar = dialect.grammar();
        let first = table.to_sql(grammar.as_ref()).unwrap();
        let second = table.to_sql(grammar.as_ref()).unwrap();
        assert_eq!(first, second);
        assert!(first.iter().any(|s| s.contains("idx_orders_customer_id_placed_at")));
        assert!(first.iter().any(|s| s.contains("fk_orders_customers")));
    }
}

#[test]
fn test_create_if_not_exists_guards_every_statement() {
    for dialect in DIALECTS {
        let mut table = Blueprint::new("posts");
        table.create_if_not_exists();
        table.id();
        table.foreign_id("user_id");
        table.string("slug", 100).unique();
        table.index(["user_id", "slug"]);
        table.foreign("user_id").references("id").on("users");

        let sql = table.to_sql(dialect.grammar().as_ref()).unwrap();
        assert!(
            sql.iter().all(|s| s.contains("IF NOT EXISTS")),
            "{dialect}: {sql:?}"
        );
        assert!(
            sql.iter().all(|s| !s.starts_with("ALTER TABLE")),
            "{dialect}: {sql:?}"
        );
    }
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_incomplete_foreign_key_fails_everywhere() {
    let cases: [(&str, &str, &str, &str); 3] = [
        ("", "users", "id", "column"),
        ("user_id", "", "id", "referenced table"),
        ("user_id", "users", "", "referenced column"),
    ];
    for (column, on, references, missing) in cases {
        for dialect in DIALECTS {
            let mut table = Blueprint::new("posts");
            table.create();
            table.id();
            table.foreign_id("user_id");
            table.foreign(column).on(on).references(references);

            let result = table.to_sql(dialect.grammar().as_ref());
            assert_eq!(
                result,
                Err(CompileError::IncompleteForeignKey {
                    table: "posts".into(),
                    missing,
                }),
                "{dialect}: {missing}"
            );
        }
    }
}

#[test]
fn test_non_finite_default_fails_everywhere() {
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        for dialect in DIALECTS {
            let mut table = Blueprint::new("readings");
            table.create();
            table.double("value").default(value);
            assert_eq!(
                table.to_sql(dialect.grammar().as_ref()),
                Err(CompileError::NonFiniteDefault {
                    column: "value".into()
                }),
                "{dialect}"
            );
        }
    }
}

#[test]
fn test_empty_table_name_fails() {
    for dialect in DIALECTS {
        let mut table = Blueprint::new("");
        table.drop();
        assert_eq!(
            table.to_sql(dialect.grammar().as_ref()),
            Err(CompileError::EmptyTableName)
        );
    }
}

#[test]
fn test_index_without_columns_fails() {
    let mut table = Blueprint::new("users");
    table.index(Vec::<String>::new());
    assert!(matches!(
        table.to_sql(&PostgresGrammar),
        Err(CompileError::EmptyIndexColumns { .. })
    ));
}

#[test]
fn test_empty_index_name_fails() {
    let mut table = Blueprint::new("users");
    table.unique(["email"]).name("");
    assert_eq!(
        table.to_sql(&MySqlGrammar),
        Err(CompileError::EmptyIndexName {
            table: "users".into()
        })
    );
}

// =============================================================================
// Rename and drop
// =============================================================================

#[test]
fn test_rename_emits_one_statement_per_dialect() {
    let expected = [
        "ALTER TABLE \"users\" RENAME TO \"people\"",
        "RENAME TABLE `users` TO `people`",
        "ALTER TABLE \"users\" RENAME TO \"people\"",
    ];
    for (dialect, expected) in DIALECTS.into_iter().zip(expected) {
        let mut table = Blueprint::new("users");
        table.rename("people");
        assert_eq!(table.to_sql(dialect.grammar().as_ref()).unwrap(), vec![expected]);
    }
}

#[test]
fn test_drop_variants() {
    for dialect in DIALECTS {
        let grammar = dialect.grammar();
        let mut table = Blueprint::new("sessions");
        table.drop_if_exists();
        let sql = table.to_sql(grammar.as_ref()).unwrap();
        assert_eq!(sql.len(), 1);
        assert!(sql[0].starts_with("DROP TABLE IF EXISTS "));
    }
}
