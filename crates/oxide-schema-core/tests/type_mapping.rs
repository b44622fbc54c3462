//! Type literals rendered by each grammar for single-column tables.

use oxide_schema_core::{Blueprint, Dialect, SpatialKind};

type Describe = fn(&mut Blueprint);

/// Compiles `CREATE TABLE "t"` with one column and returns the statement.
fn create_sql(dialect: Dialect, describe: Describe) -> String {
    let mut table = Blueprint::new("t");
    table.create();
    describe(&mut table);
    let mut sql = table.to_sql(dialect.grammar().as_ref()).unwrap();
    sql.remove(0)
}

fn check(cases: &[(Describe, [&str; 3])]) {
    let dialects = [Dialect::Postgres, Dialect::MySql, Dialect::Sqlite];
    for (describe, expected) in cases {
        for (dialect, literal) in dialects.into_iter().zip(expected) {
            let sql = create_sql(dialect, *describe);
            assert!(
                sql.contains(literal),
                "{dialect}: expected `{literal}` in `{sql}`"
            );
        }
    }
}

#[test]
fn test_string_types() {
    check(&[
        (
            |t| {
                t.boolean("c");
            },
            [" BOOLEAN", " TINYINT(1)", " INTEGER"],
        ),
        (
            |t| {
                t.char("c", 2);
            },
            [" CHAR(2)", " CHAR(2)", " TEXT"],
        ),
        (
            |t| {
                t.string("c", 80);
            },
            [" VARCHAR(80)", " VARCHAR(80)", " TEXT"],
        ),
        (
            |t| {
                t.tiny_text("c");
            },
            [" TEXT", " TINYTEXT", " TEXT"],
        ),
        (
            |t| {
                t.text("c");
            },
            [" TEXT", " TEXT", " TEXT"],
        ),
        (
            |t| {
                t.medium_text("c");
            },
            [" TEXT", " MEDIUMTEXT", " TEXT"],
        ),
        (
            |t| {
                t.long_text("c");
            },
            [" TEXT", " LONGTEXT", " TEXT"],
        ),
    ]);
}

#[test]
fn test_integer_types() {
    check(&[
        (
            |t| {
                t.tiny_integer("c");
            },
            [" SMALLINT", " TINYINT", " INTEGER"],
        ),
        (
            |t| {
                t.small_integer("c");
            },
            [" SMALLINT", " SMALLINT", " INTEGER"],
        ),
        (
            |t| {
                t.medium_integer("c");
            },
            [" INTEGER", " MEDIUMINT", " INTEGER"],
        ),
        (
            |t| {
                t.integer("c");
            },
            [" INTEGER", " INT", " INTEGER"],
        ),
        (
            |t| {
                t.big_integer("c");
            },
            [" BIGINT", " BIGINT", " INTEGER"],
        ),
        (
            |t| {
                t.unsigned_integer("c");
            },
            [" INTEGER NOT NULL", " INT UNSIGNED NOT NULL", " INTEGER NOT NULL"],
        ),
        (
            |t| {
                t.unsigned_big_integer("c");
            },
            [" BIGINT NOT NULL", " BIGINT UNSIGNED", " INTEGER NOT NULL"],
        ),
    ]);
}

#[test]
fn test_auto_increment_idioms() {
    check(&[
        (
            |t| {
                t.tiny_increments("id");
            },
            [
                "\"id\" SMALLSERIAL",
                "`id` TINYINT UNSIGNED NOT NULL AUTO_INCREMENT",
                "\"id\" INTEGER PRIMARY KEY AUTOINCREMENT",
            ],
        ),
        (
            |t| {
                t.small_increments("id");
            },
            [
                "\"id\" SMALLSERIAL",
                "`id` SMALLINT UNSIGNED NOT NULL AUTO_INCREMENT",
                "\"id\" INTEGER PRIMARY KEY AUTOINCREMENT",
            ],
        ),
        (
            |t| {
                t.medium_increments("id");
            },
            [
                "\"id\" SERIAL",
                "`id` MEDIUMINT UNSIGNED NOT NULL AUTO_INCREMENT",
                "\"id\" INTEGER PRIMARY KEY AUTOINCREMENT",
            ],
        ),
        (
            |t| {
                t.increments("id");
            },
            [
                "\"id\" SERIAL",
                "`id` INT UNSIGNED NOT NULL AUTO_INCREMENT",
                "\"id\" INTEGER PRIMARY KEY AUTOINCREMENT",
            ],
        ),
        (
            |t| {
                t.id();
            },
            [
                "\"id\" BIGSERIAL",
                "`id` BIGINT UNSIGNED NOT NULL AUTO_INCREMENT",
                "\"id\" INTEGER PRIMARY KEY AUTOINCREMENT",
            ],
        ),
    ]);
}

#[test]
fn test_numeric_types() {
    check(&[
        (
            |t| {
                t.decimal("c", 8, 2);
            },
            [" DECIMAL(8, 2)", " DECIMAL(8, 2)", " NUMERIC"],
        ),
        (
            |t| {
                t.float("c");
            },
            [" REAL", " FLOAT", " REAL"],
        ),
        (
            |t| {
                t.float("c").precision(53);
            },
            [" FLOAT(53)", " FLOAT(53)", " REAL"],
        ),
        (
            |t| {
                t.double("c");
            },
            [" DOUBLE PRECISION", " DOUBLE", " REAL"],
        ),
    ]);
}

#[test]
fn test_temporal_types() {
    check(&[
        (
            |t| {
                t.date("c");
            },
            [" DATE", " DATE", " TEXT"],
        ),
        (
            |t| {
                t.time("c");
            },
            [" TIME WITHOUT TIME ZONE", " TIME", " TEXT"],
        ),
        (
            |t| {
                t.time_tz("c").precision(2);
            },
            [" TIME(2) WITH TIME ZONE", " TIME(2)", " TEXT"],
        ),
        (
            |t| {
                t.date_time("c");
            },
            [" TIMESTAMP WITHOUT TIME ZONE", " DATETIME", " TEXT"],
        ),
        (
            |t| {
                t.date_time_tz("c").precision(6);
            },
            [" TIMESTAMP(6) WITH TIME ZONE", " DATETIME(6)", " TEXT"],
        ),
        (
            |t| {
                t.timestamp("c");
            },
            [" TIMESTAMP WITHOUT TIME ZONE", " TIMESTAMP", " TEXT"],
        ),
        (
            |t| {
                t.timestamp_tz("c");
            },
            [" TIMESTAMP WITH TIME ZONE", " TIMESTAMP", " TEXT"],
        ),
        (
            |t| {
                t.year("c");
            },
            [" INTEGER", " YEAR", " INTEGER"],
        ),
    ]);
}

#[test]
fn test_binary_and_document_types() {
    check(&[
        (
            |t| {
                t.binary("c");
            },
            [" BYTEA", " BLOB", " BLOB"],
        ),
        (
            |t| {
                t.json("c");
            },
            [" JSON", " JSON", " TEXT"],
        ),
        (
            |t| {
                t.jsonb("c");
            },
            [" JSONB", " JSON", " TEXT"],
        ),
        (
            |t| {
                t.uuid("c");
            },
            [" UUID", " CHAR(36)", " TEXT"],
        ),
    ]);
}

#[test]
fn test_enum_and_spatial_types() {
    check(&[
        (
            |t| {
                t.enumeration("c", ["a", "b"]);
            },
            [
                " VARCHAR(255) NOT NULL CHECK (\"c\" IN ('a', 'b'))",
                " ENUM('a', 'b')",
                " TEXT NOT NULL CHECK (\"c\" IN ('a', 'b'))",
            ],
        ),
        (
            |t| {
                t.point("c", Some(4326));
            },
            [" GEOMETRY(POINT, 4326)", " POINT SRID 4326", " POINT"],
        ),
        (
            |t| {
                t.geometry("c", SpatialKind::MultiPolygon, None);
            },
            [" GEOMETRY(MULTIPOLYGON)", " MULTIPOLYGON", " MULTIPOLYGON"],
        ),
    ]);
}
