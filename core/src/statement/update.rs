use super::{Override, body, finish, target};
use crate::clause::where_clause;
use crate::error::Result;
use crate::options::UpdateOptions;

/// Builds an `UPDATE` statement.
///
/// The record id and the filter are exclusive selection modes; when both are
/// given the id wins and no `WHERE` is emitted.
pub fn update(table: &str, options: &UpdateOptions) -> Result<String> {
    let target = target(table, options.id.as_deref())?;
    let head = format!("UPDATE {target}");

    let sql = match Override::parse(options.raw.as_deref(), "UPDATE") {
        Some(Override::Statement(statement)) => statement.to_string(),
        Some(Override::Tail(tail)) => finish([head.as_str(), tail]),
        None => {
            let filter = match options.id {
                Some(_) => String::new(),
                None => where_clause(options.filter.as_ref()),
            };
            finish([
                head.as_str(),
                body(&options.data, options.mode).as_str(),
                filter.as_str(),
                options.returning.clone().unwrap_or_default().clause().as_str(),
            ])
        }
    };

    crate::sorm_trace_query!("update", sql);
    Ok(sql)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{BodyMode, ReturnMode};

    #[test]
    fn content_update_by_id() {
        let options = UpdateOptions::new().id("tobie").data([("name", "Tobie")]);
        assert_eq!(
            update("user", &options).unwrap(),
            "UPDATE user:tobie CONTENT { name: <string>\"Tobie\" } RETURN AFTER;"
        );
    }

    #[test]
    fn set_update_by_filter() {
        let options = UpdateOptions::new()
            .mode(BodyMode::Set)
            .data([("active", false)])
            .filter("age", 3)
            .returning(ReturnMode::Diff);
        assert_eq!(
            update("user", &options).unwrap(),
            "UPDATE user SET active = <bool>false WHERE age = <int>3 RETURN DIFF;"
        );
    }

    #[test]
    fn id_wins_over_filter() {
        let options = UpdateOptions::new()
            .id("1")
            .mode(BodyMode::Merge)
            .data([("a", 1)])
            .filter("b", 2);
        let sql = update("item", &options).unwrap();
        assert_eq!(sql, "UPDATE item:1 MERGE { a: <int>1 } RETURN AFTER;");
        assert!(!sql.contains("WHERE"));
    }

    #[test]
    fn return_fields() {
        let options = UpdateOptions::new()
            .data([("a", 1)])
            .returning(ReturnMode::Fields(vec!["id".into(), "a".into()]));
        assert_eq!(
            update("item", &options).unwrap(),
            "UPDATE item CONTENT { a: <int>1 } RETURN id, a;"
        );
    }

    #[test]
    fn raw_statement_replaces_everything() {
        let options = UpdateOptions::new().id("1").raw("update item set a += 1");
        assert_eq!(update("item", &options).unwrap(), "update item set a += 1");
    }
}
