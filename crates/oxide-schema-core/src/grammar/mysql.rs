//! MySQL grammar.

use super::{
    index_name, new_name, split_table, validate_columns, validate_index, validate_table, Grammar,
};
use crate::blueprint::{Blueprint, ColumnDefinition, ColumnType, IndexDefinition, IndexKind};
use crate::dialect::Dialect;
use crate::error::Result;

/// MySQL (and MariaDB) grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlGrammar;

impl MySqlGrammar {
    /// Creates a new MySQL grammar.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn schema_predicate(&self, schema: Option<&str>) -> String {
        schema.map_or_else(|| "DATABASE()".to_string(), |s| self.quote_string(s))
    }

    /// Renders `INDEX`, `UNIQUE KEY` or `FULLTEXT KEY` table elements.
    ///
    /// MySQL has no `CREATE INDEX IF NOT EXISTS`, so under CREATE TABLE IF
    /// NOT EXISTS every index is declared inside the table body.
    fn inline_keys(&self, blueprint: &Blueprint) -> Result<Vec<String>> {
        let mut indexes = Vec::new();
        for column in blueprint.columns() {
            if column.unique && column.unique_name.is_some() {
                let mut index = IndexDefinition::new(IndexKind::Unique, vec![column.name.clone()]);
                index.name.clone_from(&column.unique_name);
                indexes.push(index);
            }
            if column.index {
                let mut index = IndexDefinition::new(IndexKind::Index, vec![column.name.clone()]);
                index.name.clone_from(&column.index_name);
                indexes.push(index);
            }
        }
        indexes.extend(
            blueprint
                .indexes()
                .iter()
                .filter(|i| i.kind != IndexKind::Primary)
                .cloned(),
        );

        let mut keys = Vec::with_capacity(indexes.len());
        for index in &indexes {
            validate_index(blueprint, index)?;
            let keyword = match index.kind {
                IndexKind::Unique => "UNIQUE KEY",
                IndexKind::FullText => "FULLTEXT KEY",
                IndexKind::Index | IndexKind::Primary => "INDEX",
            };
            let mut key = format!(
                "{keyword} {} ({})",
                self.wrap(&index_name(blueprint, index)),
                self.columnize(&index.columns)
            );
            if let Some(algorithm) = index.algorithm.filter(|_| index.kind != IndexKind::FullText) {
                key.push_str(" USING ");
                key.push_str(algorithm.as_sql());
            }
            keys.push(key);
        }
        Ok(keys)
    }
}

fn with_precision(base: &str, precision: Option<u8>) -> String {
    match precision {
        Some(p) => format!("{base}({p})"),
        None => base.to_string(),
    }
}

impl Grammar for MySqlGrammar {
    fn dialect(&self) -> Dialect {
        Dialect::MySql
    }

    fn quote_char(&self) -> char {
        '`'
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
            ColumnType::Boolean => "TINYINT(1)".to_string(),
            ColumnType::Char { length } => format!("CHAR({length})"),
            ColumnType::String { length } => format!("VARCHAR({length})"),
            ColumnType::TinyText => "TINYTEXT".to_string(),
            ColumnType::Text => "TEXT".to_string(),
            ColumnType::MediumText => "MEDIUMTEXT".to_string(),
            ColumnType::LongText => "LONGTEXT".to_string(),
            ColumnType::TinyInteger => "TINYINT".to_string(),
            ColumnType::SmallInteger => "SMALLINT".to_string(),
            ColumnType::MediumInteger => "MEDIUMINT".to_string(),
            ColumnType::Integer => "INT".to_string(),
            ColumnType::BigInteger => "BIGINT".to_string(),
            ColumnType::Decimal { precision, scale } => format!("DECIMAL({precision}, {scale})"),
            ColumnType::Float { precision } => with_precision("FLOAT", *precision),
            ColumnType::Double => "DOUBLE".to_string(),
            ColumnType::Date => "DATE".to_string(),
            ColumnType::Time { precision } | ColumnType::TimeTz { precision } => {
                with_precision("TIME", *precision)
            }
            ColumnType::DateTime { precision } | ColumnType::DateTimeTz { precision } => {
                with_precision("DATETIME", *precision)
            }
            ColumnType::Timestamp { precision } | ColumnType::TimestampTz { precision } => {
                with_precision("TIMESTAMP", *precision)
            }
            ColumnType::Year => "YEAR".to_string(),
            ColumnType::Binary => "BLOB".to_string(),
            ColumnType::Json | ColumnType::Jsonb => "JSON".to_string(),
            ColumnType::Uuid => "CHAR(36)".to_string(),
            ColumnType::Enum { allowed } => {
                let values: Vec<String> = allowed.iter().map(|v| self.quote_string(v)).collect();
                format!("ENUM({})", values.join(", "))
            }
            ColumnType::Spatial { kind, srid } => match srid {
                Some(srid) => format!("{} SRID {srid}", kind.as_sql()),
                None => kind.as_sql().to_string(),
            },
        }
    }

    fn column_definition(&self, _blueprint: &Blueprint, column: &ColumnDefinition) -> String {
        let mut sql = format!("{} {}", self.wrap(&column.name), self.type_name(column));

        if column.unsigned && column.column_type.is_numeric() {
            sql.push_str(" UNSIGNED");
        }
        if let Some(ref collation) = column.collation {
            sql.push_str(&format!(" COLLATE {collation}"));
        }
        sql.push_str(if column.nullable { " NULL" } else { " NOT NULL" });
        if let Some(ref default) = column.default {
            sql.push_str(" DEFAULT ");
            sql.push_str(&self.render_default(column, default));
        }
        if column.auto_increment {
            sql.push_str(" AUTO_INCREMENT");
        }
        // Named unique indexes are emitted as separate statements.
        if column.unique && column.unique_name.is_none() && !column.change {
            sql.push_str(" UNIQUE");
        }
        if let Some(ref comment) = column.comment {
            sql.push_str(" COMMENT ");
            sql.push_str(&self.quote_string(comment));
        }

        sql
    }

    fn table_constraints(&self, blueprint: &Blueprint) -> Result<Vec<String>> {
        let mut constraints: Vec<String> = super::primary_key(blueprint)?
            .map(|pk| format!("PRIMARY KEY ({})", self.columnize(&pk.columns)))
            .into_iter()
            .collect();
        if blueprint.if_not_exists() {
            constraints.extend(self.inline_keys(blueprint)?);
        }
        if self.inline_foreign_keys(blueprint) {
            constraints.extend(self.foreign_constraints(blueprint)?);
        }
        Ok(constraints)
    }

    fn table_options(&self, blueprint: &Blueprint) -> String {
        let mut options = String::new();
        if let Some(engine) = blueprint.engine_hint() {
            options.push_str(&format!(" ENGINE = {engine}"));
        }
        if let Some(charset) = blueprint.charset_hint() {
            options.push_str(&format!(" DEFAULT CHARACTER SET = {charset}"));
        }
        if let Some(collation) = blueprint.collation_hint() {
            options.push_str(&format!(" COLLATE = {collation}"));
        }
        if let Some(comment) = blueprint.table_comment() {
            options.push_str(&format!(" COMMENT = {}", self.quote_string(comment)));
        }
        options
    }

    fn add_primary_clause(&self, _name: &str, columns: &[String]) -> String {
        format!("ADD PRIMARY KEY ({})", self.columnize(columns))
    }

    fn compile_change(&self, blueprint: &Blueprint) -> Result<Vec<String>> {
        validate_table(blueprint)?;
        validate_columns(blueprint)?;

        let clauses: Vec<String> = blueprint
            .changed_columns()
            .iter()
            .map(|c| format!("MODIFY COLUMN {}", self.column_definition(blueprint, c)))
            .collect();
        if clauses.is_empty() {
            return Ok(Vec::new());
        }
        Ok(vec![format!(
            "ALTER TABLE {} {}",
            self.wrap_table(blueprint.table()),
            clauses.join(", ")
        )])
    }

    fn compile_rename(&self, blueprint: &Blueprint) -> Result<String> {
        validate_table(blueprint)?;
        let to = new_name(blueprint)?;
        // An unqualified target stays in the source table's database.
        let target = match blueprint.schema() {
            Some(schema) if !to.contains('.') => {
                format!("{}.{}", self.wrap(schema), self.wrap(to))
            }
            _ => self.wrap_table(to),
        };
        Ok(format!(
            "RENAME TABLE {} TO {target}",
            self.wrap_table(blueprint.table())
        ))
    }

    fn compile_index(&self, blueprint: &Blueprint, index: &IndexDefinition) -> Result<Option<String>> {
        validate_table(blueprint)?;
        validate_index(blueprint, index)?;
        // Declared inside CREATE TABLE IF NOT EXISTS.
        if blueprint.if_not_exists() && index.kind != IndexKind::Primary {
            return Ok(None);
        }
        match index.kind {
            IndexKind::Index => self.compile_plain_index(blueprint, index),
            IndexKind::Unique => self.compile_unique(blueprint, index),
            IndexKind::Primary => self.compile_primary(blueprint, index),
            IndexKind::FullText => self.compile_full_text(blueprint, index),
        }
    }

    fn compile_column_index(
        &self,
        blueprint: &Blueprint,
        column: &ColumnDefinition,
        kind: IndexKind,
    ) -> Result<Option<String>> {
        // Unnamed unique columns carry an inline UNIQUE modifier.
        if kind == IndexKind::Unique && column.unique_name.is_none() {
            return Ok(None);
        }
        let mut index = IndexDefinition::new(kind, vec![column.name.clone()]);
        index.name = match kind {
            IndexKind::Unique => column.unique_name.clone(),
            _ => column.index_name.clone(),
        };
        self.compile_index(blueprint, &index)
    }

    fn index_statement(&self, blueprint: &Blueprint, index: &IndexDefinition, keyword: &str) -> String {
        let mut sql = format!(
            "CREATE {keyword}INDEX {} ON {} ({})",
            self.wrap(&index_name(blueprint, index)),
            self.wrap_table(blueprint.table()),
            self.columnize(&index.columns)
        );
        if let Some(algorithm) = index.algorithm {
            sql.push_str(" USING ");
            sql.push_str(algorithm.as_sql());
        }
        sql
    }

    fn compile_full_text(
        &self,
        blueprint: &Blueprint,
        index: &IndexDefinition,
    ) -> Result<Option<String>> {
        let mut index = index.clone();
        index.algorithm = None;
        Ok(Some(self.index_statement(blueprint, &index, "FULLTEXT ")))
    }

    fn drop_index_statement(&self, blueprint: &Blueprint, name: &str) -> String {
        format!(
            "ALTER TABLE {} DROP INDEX {}",
            self.wrap_table(blueprint.table()),
            self.wrap(name)
        )
    }

    fn compile_drop_primary(&self, blueprint: &Blueprint) -> Result<Vec<String>> {
        validate_table(blueprint)?;
        Ok(blueprint
            .dropped_primary()
            .map(|_| format!("ALTER TABLE {} DROP PRIMARY KEY", self.wrap_table(blueprint.table())))
            .into_iter()
            .collect())
    }

    fn compile_rename_index(&self, blueprint: &Blueprint) -> Result<Vec<String>> {
        validate_table(blueprint)?;
        let table = self.wrap_table(blueprint.table());
        Ok(blueprint
            .renamed_indexes()
            .iter()
            .map(|(from, to)| {
                format!(
                    "ALTER TABLE {table} RENAME INDEX {} TO {}",
                    self.wrap(from),
                    self.wrap(to)
                )
            })
            .collect())
    }

    fn compile_drop_foreign(&self, blueprint: &Blueprint) -> Result<Vec<String>> {
        validate_table(blueprint)?;
        let table = self.wrap_table(blueprint.table());
        Ok(blueprint
            .dropped_foreigns()
            .iter()
            .map(|name| format!("ALTER TABLE {table} DROP FOREIGN KEY {}", self.wrap(name)))
            .collect())
    }

    fn compile_table_comment(&self, blueprint: &Blueprint) -> Result<Vec<String>> {
        validate_table(blueprint)?;
        // Set inline by the table options when creating.
        if blueprint.creating() {
            return Ok(Vec::new());
        }
        Ok(blueprint
            .table_comment()
            .map(|comment| {
                format!(
                    "ALTER TABLE {} COMMENT = {}",
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blueprint::{IndexAlgorithm, SpatialKind};

    fn compile(describe: impl FnOnce(&mut Blueprint)) -> Vec<String> {
        let mut table = Blueprint::new("users");
        describe(&mut table);
        table.to_sql(&MySqlGrammar).unwrap()
    }

    #[test]
    fn test_mysql_type_names() {
        let grammar = MySqlGrammar::new();
        let name = |t: ColumnType| grammar.type_name(&ColumnDefinition::new("c", t));

        assert_eq!(name(ColumnType::Boolean), "TINYINT(1)");
        assert_eq!(name(ColumnType::MediumText), "MEDIUMTEXT");
        assert_eq!(name(ColumnType::Integer), "INT");
        assert_eq!(name(ColumnType::Float { precision: Some(24) }), "FLOAT(24)");
        assert_eq!(name(ColumnType::DateTime { precision: Some(6) }), "DATETIME(6)");
        assert_eq!(name(ColumnType::TimestampTz { precision: None }), "TIMESTAMP");
        assert_eq!(name(ColumnType::Jsonb), "JSON");
        assert_eq!(name(ColumnType::Uuid), "CHAR(36)");
        assert_eq!(
            name(ColumnType::Enum {
                allowed: vec!["draft".into(), "live".into()]
            }),
            "ENUM('draft', 'live')"
        );
        assert_eq!(
            name(ColumnType::Spatial {
                kind: SpatialKind::Polygon,
                srid: Some(4326)
            }),
            "POLYGON SRID 4326"
        );
    }

    #[test]
    fn test_create_with_options() {
        let sql = compile(|t| {
            t.create();
            t.increments("id");
            t.decimal("balance", 12, 2).unsigned().default(0);
            t.engine("InnoDB");
            t.charset("utf8mb4");
            t.collation("utf8mb4_unicode_ci");
            t.comment("accounts");
        });
        assert_eq!(
            sql,
            vec![
                "CREATE TABLE `users` (`id` INT UNSIGNED NOT NULL AUTO_INCREMENT, `balance` DECIMAL(12, 2) UNSIGNED NOT NULL DEFAULT 0, PRIMARY KEY (`id`)) ENGINE = InnoDB DEFAULT CHARACTER SET = utf8mb4 COLLATE = utf8mb4_unicode_ci COMMENT = 'accounts'"
            ]
        );
    }

    #[test]
    fn test_named_unique_is_separate() {
        let sql = compile(|t| {
            t.create();
            t.string("email", 255).unique_named("users_email_unique");
        });
        assert_eq!(
            sql,
            vec![
                "CREATE TABLE `users` (`email` VARCHAR(255) NOT NULL)",
                "CREATE UNIQUE INDEX `users_email_unique` ON `users` (`email`)",
            ]
        );
    }

    #[test]
    fn test_add_with_primary_and_comment() {
        let sql = compile(|t| {
            t.big_increments("id");
            t.string("nickname", 32).nullable().comment("display name");
        });
        assert_eq!(
            sql,
            vec![
                "ALTER TABLE `users` ADD COLUMN `id` BIGINT UNSIGNED NOT NULL AUTO_INCREMENT, ADD COLUMN `nickname` VARCHAR(32) NULL COMMENT 'display name', ADD PRIMARY KEY (`id`)"
            ]
        );
    }

    #[test]
    fn test_change_uses_modify() {
        let sql = compile(|t| {
            t.string("email", 320).unique().change();
            t.boolean("active").default(true).change();
        });
        assert_eq!(
            sql,
            vec![
                "ALTER TABLE `users` MODIFY COLUMN `email` VARCHAR(320) NOT NULL, MODIFY COLUMN `active` TINYINT(1) NOT NULL DEFAULT 1"
            ]
        );
    }

    #[test]
    fn test_indexes_use_create_index() {
        let mut table = Blueprint::new("posts");
        table.create();
        table.text("body");
        table.full_text(["body"]).algorithm(IndexAlgorithm::BTree);
        table.index(["author_id"]).algorithm(IndexAlgorithm::Hash);
        let sql = table.to_sql(&MySqlGrammar).unwrap();
        assert_eq!(
            sql[1..],
            [
                "CREATE FULLTEXT INDEX `ft_posts_body` ON `posts` (`body`)",
                "CREATE INDEX `idx_posts_author_id` ON `posts` (`author_id`) USING HASH",
            ]
        );
    }

    #[test]
    fn test_create_if_not_exists_is_one_statement() {
        let mut table = Blueprint::new("posts");
        table.create_if_not_exists();
        table.id();
        table.foreign_id("user_id").index();
        table.string("slug", 100).unique_named("posts_slug_unique");
        table.string("code", 20).unique();
        table.text("body");
        table.full_text(["body"]);
        table.unique(["user_id", "code"]).algorithm(IndexAlgorithm::Hash);
        table
            .foreign("user_id")
            .references("id")
            .on("users")
            .cascade_on_delete();

        assert_eq!(
            table.to_sql(&MySqlGrammar).unwrap(),
            vec![
                "CREATE TABLE IF NOT EXISTS `posts` (`id` BIGINT UNSIGNED NOT NULL AUTO_INCREMENT, `user_id` BIGINT UNSIGNED NOT NULL, `slug` VARCHAR(100) NOT NULL, `code` VARCHAR(20) NOT NULL UNIQUE, `body` TEXT NOT NULL, PRIMARY KEY (`id`), INDEX `idx_posts_user_id` (`user_id`), UNIQUE KEY `posts_slug_unique` (`slug`), FULLTEXT KEY `ft_posts_body` (`body`), UNIQUE KEY `uk_posts_user_id_code` (`user_id`, `code`) USING HASH, CONSTRAINT `fk_posts_users` FOREIGN KEY (`user_id`) REFERENCES `users` (`id`) ON DELETE CASCADE)"
            ]
        );
    }

    #[test]
    fn test_drops_and_renames() {
        let sql = compile(|t| {
            t.drop_unique("uk_users_email");
            t.drop_primary();
            t.drop_foreign("fk_users_teams");
            t.rename_index("a", "b");
            t.comment("people");
        });
        assert_eq!(
            sql,
            vec![
                "ALTER TABLE `users` DROP INDEX `uk_users_email`",
                "ALTER TABLE `users` DROP PRIMARY KEY",
                "ALTER TABLE `users` DROP FOREIGN KEY `fk_users_teams`",
                "ALTER TABLE `users` RENAME INDEX `a` TO `b`",
                "ALTER TABLE `users` COMMENT = 'people'",
            ]
        );
    }

    #[test]
    fn test_rename_table() {
        let sql = compile(|t| t.rename("people"));
        assert_eq!(sql, vec!["RENAME TABLE `users` TO `people`"]);
    }

    #[test]
    fn test_rename_keeps_source_database() {
        let mut table = Blueprint::new("app.users");
        table.rename("people");
        assert_eq!(
            table.to_sql(&MySqlGrammar).unwrap(),
            vec!["RENAME TABLE `app`.`users` TO `app`.`people`"]
        );

        let mut table = Blueprint::new("app.users");
        table.rename("archive.people");
        assert_eq!(
            table.to_sql(&MySqlGrammar).unwrap(),
            vec!["RENAME TABLE `app`.`users` TO `archive`.`people`"]
        );
    }

    #[test]
    fn test_exists_queries_use_current_database() {
        assert_eq!(
            MySqlGrammar.compile_table_exists("users"),
            "SELECT 1 FROM information_schema.tables WHERE table_schema = DATABASE() AND table_name = 'users'"
        );
    }
}
