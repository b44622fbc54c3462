//! PostgreSQL grammar.

use super::{split_table, validate_columns, validate_table, Grammar};
use crate::blueprint::{Blueprint, ColumnDefinition, ColumnType, IndexDefinition};
use crate::dialect::Dialect;
use crate::error::Result;

/// PostgreSQL grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresGrammar;

impl PostgresGrammar {
    /// Creates a new PostgreSQL grammar.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns the type without serial substitution, as used by ALTER COLUMN.
    fn base_type(column_type: &ColumnType) -> String {
        match column_type {
            ColumnType::Boolean => "BOOLEAN".to_string(),
            ColumnType::Char { length } => format!("CHAR({length})"),
            ColumnType::String { length } => format!("VARCHAR({length})"),
            ColumnType::TinyText
            | ColumnType::Text
            | ColumnType::MediumText
            | ColumnType::LongText => "TEXT".to_string(),
            ColumnType::TinyInteger | ColumnType::SmallInteger => "SMALLINT".to_string(),
            ColumnType::MediumInteger | ColumnType::Integer | ColumnType::Year => {
                "INTEGER".to_string()
            }
            ColumnType::BigInteger => "BIGINT".to_string(),
            ColumnType::Decimal { precision, scale } => format!("DECIMAL({precision}, {scale})"),
            ColumnType::Float { precision: None } => "REAL".to_string(),
            ColumnType::Float { precision: Some(p) } => format!("FLOAT({p})"),
            ColumnType::Double => "DOUBLE PRECISION".to_string(),
            ColumnType::Date => "DATE".to_string(),
            ColumnType::Time { precision } => time_type("TIME", *precision, false),
            ColumnType::TimeTz { precision } => time_type("TIME", *precision, true),
            ColumnType::DateTime { precision } | ColumnType::Timestamp { precision } => {
                time_type("TIMESTAMP", *precision, false)
            }
            ColumnType::DateTimeTz { precision } | ColumnType::TimestampTz { precision } => {
                time_type("TIMESTAMP", *precision, true)
            }
            ColumnType::Binary => "BYTEA".to_string(),
            ColumnType::Json => "JSON".to_string(),
            ColumnType::Jsonb => "JSONB".to_string(),
            ColumnType::Uuid => "UUID".to_string(),
            ColumnType::Enum { .. } => "VARCHAR(255)".to_string(),
            ColumnType::Spatial { kind, srid } => match srid {
                Some(srid) => format!("GEOMETRY({}, {srid})", kind.as_sql()),
                None => format!("GEOMETRY({})", kind.as_sql()),
            },
        }
    }

    fn change_statement(&self, blueprint: &Blueprint, column: &ColumnDefinition) -> String {
        let name = self.wrap(&column.name);
        let mut clauses = Vec::new();

        let mut type_clause = format!(
            "ALTER COLUMN {name} TYPE {}",
            Self::base_type(&column.column_type)
        );
        if let Some(ref collation) = column.collation {
            type_clause.push_str(&format!(" COLLATE {}", self.wrap(collation)));
        }
        clauses.push(type_clause);

        if column.nullable {
            clauses.push(format!("ALTER COLUMN {name} DROP NOT NULL"));
        } else {
            clauses.push(format!("ALTER COLUMN {name} SET NOT NULL"));
        }

        // The sequence default of a serial column is left in place.
        if !column.auto_increment {
            match column.default {
                Some(ref default) => clauses.push(format!(
                    "ALTER COLUMN {name} SET DEFAULT {}",
                    self.render_default(column, default)
                )),
                None => clauses.push(format!("ALTER COLUMN {name} DROP DEFAULT")),
            }
        }

        format!(
            "ALTER TABLE {} {}",
            self.wrap_table(blueprint.table()),
            clauses.join(", ")
        )
    }
}

fn time_type(base: &str, precision: Option<u8>, with_zone: bool) -> String {
    let zone = if with_zone {
        "WITH TIME ZONE"
    } else {
        "WITHOUT TIME ZONE"
    };
    match precision {
        Some(p) => format!("{base}({p}) {zone}"),
        None => format!("{base} {zone}"),
    }
}

impl Grammar for PostgresGrammar {
    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }

    fn boolean_literal(&self, value: bool) -> &'static str {
        if value {
            "TRUE"
        } else {
            "FALSE"
        }
    }

    fn type_name(&self, column: &ColumnDefinition) -> String {
        if column.auto_increment {
            match column.column_type {
                ColumnType::TinyInteger | ColumnType::SmallInteger => {
                    return "SMALLSERIAL".to_string()
                }
                ColumnType::MediumInteger | ColumnType::Integer => return "SERIAL".to_string(),
                ColumnType::BigInteger => return "BIGSERIAL".to_string(),
                _ => {}
            }
        }
        Self::base_type(&column.column_type)
    }

    fn column_definition(&self, _blueprint: &Blueprint, column: &ColumnDefinition) -> String {
        let mut sql = format!("{} {}", self.wrap(&column.name), self.type_name(column));

        if let Some(ref collation) = column.collation {
            sql.push_str(&format!(" COLLATE {}", self.wrap(collation)));
        }
        if !column.nullable {
            sql.push_str(" NOT NULL");
        }
        // Serial columns own their sequence default.
        if !column.auto_increment {
            if let Some(ref default) = column.default {
                sql.push_str(" DEFAULT ");
                sql.push_str(&self.render_default(column, default));
            }
        }
        if let Some(check) = self.enum_check(column) {
            sql.push(' ');
            sql.push_str(&check);
        }

        sql
    }

    fn comment_statements(&self, blueprint: &Blueprint, columns: &[&ColumnDefinition]) -> Vec<String> {
        columns
            .iter()
            .filter_map(|column| {
                column.comment.as_ref().map(|comment| {
                    format!(
                        "COMMENT ON COLUMN {}.{} IS {}",
                        self.wrap_table(blueprint.table()),
                        self.wrap(&column.name),
                        self.quote_string(comment)
                    )
                })
            })
            .collect()
    }

    fn compile_change(&self, blueprint: &Blueprint) -> Result<Vec<String>> {
        validate_table(blueprint)?;
        validate_columns(blueprint)?;

        let columns = blueprint.changed_columns();
        let mut statements: Vec<String> = columns
            .iter()
            .map(|column| self.change_statement(blueprint, column))
            .collect();
        statements.extend(self.comment_statements(blueprint, &columns));
        Ok(statements)
    }

    fn compile_full_text(
        &self,
        blueprint: &Blueprint,
        index: &IndexDefinition,
    ) -> Result<Option<String>> {
        let vectors: Vec<String> = index
            .columns
            .iter()
            .map(|c| format!("to_tsvector('english', {})", self.wrap(c)))
            .collect();

        let mut sql = String::from("CREATE INDEX ");
        if blueprint.if_not_exists() {
            sql.push_str("IF NOT EXISTS ");
        }
        sql.push_str(&self.wrap(&super::index_name(blueprint, index)));
        sql.push_str(" ON ");
        sql.push_str(&self.wrap_table(blueprint.table()));
        sql.push_str(&format!(" USING GIN (({}))", vectors.join(" || ")));
        Ok(Some(sql))
    }

    fn compile_table_comment(&self, blueprint: &Blueprint) -> Result<Vec<String>> {
        validate_table(blueprint)?;
        Ok(blueprint
            .table_comment()
            .map(|comment| {
                format!(
                    "COMMENT ON TABLE {} IS {}",
                    self.wrap_table(blueprint.table()),
                    self.quote_string(comment)
                )
            })
            .into_iter()
            .collect())
    }

    fn compile_table_exists(&self, table: &str) -> String {
        let (schema, name) = split_table(table);
        format!(
            "SELECT 1 FROM information_schema.tables WHERE table_schema = {} AND table_name = {}",
            self.schema_predicate(schema),
            self.quote_string(name)
        )
    }

    fn compile_column_exists(&self, table: &str, column: &str) -> String {
        let (schema, name) = split_table(table);
        format!(
            "SELECT 1 FROM information_schema.columns WHERE table_schema = {} AND table_name = {} AND column_name = {}",
            self.schema_predicate(schema),
            self.quote_string(name),
            self.quote_string(column)
        )
    }
}

impl PostgresGrammar {
    fn schema_predicate(&self, schema: Option<&str>) -> String {
        schema.map_or_else(|| "current_schema()".to_string(), |s| self.quote_string(s))
    }
}
