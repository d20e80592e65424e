use std::sync::LazyLock;

use regex::Regex;

use super::{Override, finish, require_table};
use crate::clause::{fetch_clause, limit_offset_clause, order_clause, where_clause};
use crate::error::Result;
use crate::include::{Include, collect_include_field_paths};
use crate::options::{SelectOneOptions, SelectOptions};

static RAW_LIMIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\blimit\s+\d+").expect("limit pattern"));

/// Clauses that follow `LIMIT` in a `SELECT`.
static RAW_AFTER_LIMIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(fetch|timeout|parallel|explain)\b").expect("trailing clause pattern")
});

/// Builds a `SELECT` for many rows.
///
/// Clauses are appended in a fixed order: `WHERE`, `ORDER BY`,
/// `START`/`LIMIT`, `FETCH`.
///
/// ```
/// use sorm_core::options::SelectOptions;
/// use sorm_core::statement::select_many;
///
/// let sql = select_many(
///     "user",
///     &SelectOptions::new()
///         .fields(["id", "name"])
///         .filter("active", true)
///         .order(["-age"])
///         .limit(2),
/// )
/// .unwrap();
/// assert_eq!(
///     sql,
///     "SELECT id, name FROM user WHERE active = <bool>true ORDER BY age DESC LIMIT 2;"
/// );
/// ```
pub fn select_many(table: &str, options: &SelectOptions) -> Result<String> {
    let table = require_table(table)?;
    let head = select_head(table, &options.fields, &options.include);

    let sql = match Override::parse(options.raw.as_deref(), "SELECT") {
        Some(Override::Statement(statement)) => statement.to_string(),
        Some(Override::Tail(tail)) => finish([head.as_str(), tail]),
        None => finish([
            head.as_str(),
            where_clause(options.filter.as_ref()).as_str(),
            order_clause(options.order.as_ref()).as_str(),
            limit_offset_clause(options.limit, options.offset).as_str(),
            fetch_clause(Some(options.include.as_slice())).as_str(),
        ]),
    };

    crate::sorm_trace_query!("select", sql);
    Ok(sql)
}

/// Builds a `SELECT` for a single row.
///
/// Always limits to one row unless a raw override already carries a limit.
/// In a clause-only override the added `LIMIT 1` goes before any trailing
/// `FETCH`, `TIMEOUT`, `PARALLEL` or `EXPLAIN`.
pub fn select_one(table: &str, options: &SelectOneOptions) -> Result<String> {
    let table = require_table(table)?;
    let head = select_head(table, &options.fields, &options.include);

    let sql = match Override::parse(options.raw.as_deref(), "SELECT") {
        Some(Override::Statement(statement)) => statement.to_string(),
        Some(Override::Tail(tail)) if RAW_LIMIT.is_match(tail) => finish([head.as_str(), tail]),
        Some(Override::Tail(tail)) => {
            let split = RAW_AFTER_LIMIT.find(tail).map_or(tail.len(), |m| m.start());
            let (before, after) = tail.split_at(split);
            finish([head.as_str(), before, "LIMIT 1", after])
        }
        None => finish([
            head.as_str(),
            where_clause(options.filter.as_ref()).as_str(),
            "LIMIT 1",
            fetch_clause(Some(options.include.as_slice())).as_str(),
        ]),
    };

    crate::sorm_trace_query!("select_one", sql);
    Ok(sql)
}

fn select_head(table: &str, fields: &[String], include: &[Include]) -> String {
    format!("SELECT {} FROM {table}", field_list(fields, include))
}

/// Explicit fields followed by include field paths, defaulting to `*`.
fn field_list(fields: &[String], include: &[Include]) -> String {
    let mut out: Vec<String> = Vec::with_capacity(fields.len());
    let explicit = fields.iter().map(|f| f.trim().to_string());
    for field in explicit.chain(collect_include_field_paths(include, "")) {
        if !field.is_empty() && !out.contains(&field) {
            out.push(field);
        }
    }
    if out.is_empty() {
        "*".to_string()
    } else {
        out.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SormError;

    #[test]
    fn defaults_to_star() {
        let sql = select_many("user", &SelectOptions::new()).unwrap();
        assert_eq!(sql, "SELECT * FROM user;");
    }

    #[test]
    fn clause_order_is_fixed() {
        let options = SelectOptions::new()
            .include(Include::new("posts"))
            .offset(20)
            .limit(10)
            .order("name")
            .filter("age", 30);
        assert_eq!(
            select_many("user", &options).unwrap(),
            "SELECT * FROM user WHERE age = <int>30 ORDER BY name ASC START 20 LIMIT 10 FETCH posts;"
        );
    }

    #[test]
    fn include_fields_join_the_projection() {
        let options = SelectOptions::new()
            .fields(["id", "name"])
            .include(
                Include::new("author")
                    .fields(["name"])
                    .with(Include::new("company").fields(["name", "id"])),
            );
        assert_eq!(
            select_many("post", &options).unwrap(),
            "SELECT id, name, author.name, author.company.name, author.company.id FROM post FETCH author, author.company;"
        );
    }

    #[test]
    fn duplicate_fields_are_listed_once() {
        assert_eq!(field_list(&["id".into(), " id ".into()], &[]), "id");
    }

    #[test]
    fn include_fields_alone_replace_star() {
        let options = SelectOptions::new().include(Include::new("author").alias("by").fields(["name"]));
        assert_eq!(
            select_many("post", &options).unwrap(),
            "SELECT by.name FROM post FETCH by;"
        );
    }

    #[test]
    fn raw_tail_keeps_projection_and_drops_generated_clauses() {
        let options = SelectOptions::new()
            .fields(["id"])
            .filter("a", 1)
            .limit(3)
            .include(Include::new("posts"))
            .raw("WHERE age > 18 ORDER BY age;");
        assert_eq!(
            select_many("user", &options).unwrap(),
            "SELECT id FROM user WHERE age > 18 ORDER BY age;"
        );
    }

    #[test]
    fn raw_statement_is_returned_trimmed() {
        let options = SelectOptions::new().fields(["id"]).raw("  SELECT count() FROM user GROUP ALL  ");
        assert_eq!(
            select_many("user", &options).unwrap(),
            "SELECT count() FROM user GROUP ALL"
        );
    }

    #[test]
    fn missing_table_fails_fast() {
        assert!(matches!(
            select_many("  ", &SelectOptions::new()),
            Err(SormError::MissingTable)
        ));
        assert!(matches!(
            select_one("", &SelectOneOptions::new()),
            Err(SormError::MissingTable)
        ));
    }

    #[test]
    fn select_one_forces_a_single_row() {
        let options = SelectOneOptions::new()
            .filter("email", "a@b.c")
            .include(Include::new("profile"));
        let sql = select_one("user", &options).unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM user WHERE email = <string>\"a@b.c\" LIMIT 1 FETCH profile;"
        );
        assert_eq!(sql.matches("LIMIT 1").count(), 1);
    }

    #[test]
    fn select_one_respects_raw_limit() {
        let with_limit = SelectOneOptions::new().raw("where a = 1 limit 5");
        assert_eq!(
            select_one("user", &with_limit).unwrap(),
            "SELECT * FROM user where a = 1 limit 5;"
        );

        let without_limit = SelectOneOptions::new().raw("WHERE a = 1");
        assert_eq!(
            select_one("user", &without_limit).unwrap(),
            "SELECT * FROM user WHERE a = 1 LIMIT 1;"
        );
    }

    #[test]
    fn select_one_limit_precedes_trailing_clauses() {
        let fetch = SelectOneOptions::new().raw("WHERE a = 1 FETCH author");
        assert_eq!(
            select_one("user", &fetch).unwrap(),
            "SELECT * FROM user WHERE a = 1 LIMIT 1 FETCH author;"
        );

        let timeout = SelectOneOptions::new().raw("where a = 1 fetch author timeout 5s");
        assert_eq!(
            select_one("user", &timeout).unwrap(),
            "SELECT * FROM user where a = 1 LIMIT 1 fetch author timeout 5s;"
        );

        let only_fetch = SelectOneOptions::new().raw("FETCH author");
        assert_eq!(
            select_one("user", &only_fetch).unwrap(),
            "SELECT * FROM user LIMIT 1 FETCH author;"
        );
    }
}
