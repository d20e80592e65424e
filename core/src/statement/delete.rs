use super::{Override, finish, target};
use crate::clause::where_clause;
use crate::error::Result;
use crate::options::{DeleteOptions, ReturnMode};

/// Builds a `DELETE` statement.
///
/// Target selection matches [`update`](super::update): id xor filter, id wins.
/// Returns the deleted record (`RETURN BEFORE`) unless overridden.
pub fn delete(table: &str, options: &DeleteOptions) -> Result<String> {
    let target = target(table, options.id.as_deref())?;
    let head = format!("DELETE {target}");

    let sql = match Override::parse(options.raw.as_deref(), "DELETE") {
        Some(Override::Statement(statement)) => statement.to_string(),
        Some(Override::Tail(tail)) => finish([head.as_str(), tail]),
        None => {
            let filter = match options.id {
                Some(_) => String::new(),
                None => where_clause(options.filter.as_ref()),
            };
            let returning = options.returning.clone().unwrap_or(ReturnMode::Before);
            finish([head.as_str(), filter.as_str(), returning.clause().as_str()])
        }
    };

    crate::sorm_trace_query!("delete", sql);
    Ok(sql)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_by_filter() {
        let options = DeleteOptions::new().filter("age", 3);
        assert_eq!(
            delete("user", &options).unwrap(),
            "DELETE user WHERE age = <int>3 RETURN BEFORE;"
        );
    }

    #[test]
    fn delete_by_id_ignores_filter() {
        let options = DeleteOptions::new()
            .id("tobie")
            .filter("age", 3)
            .returning(ReturnMode::None);
        assert_eq!(
            delete("user", &options).unwrap(),
            "DELETE user:tobie RETURN NONE;"
        );
    }

    #[test]
    fn delete_whole_table() {
        assert_eq!(
            delete("session", &DeleteOptions::new()).unwrap(),
            "DELETE session RETURN BEFORE;"
        );
    }

    #[test]
    fn raw_tail() {
        let options = DeleteOptions::new().raw("WHERE expires < time::now()");
        assert_eq!(
            delete("session", &options).unwrap(),
            "DELETE session WHERE expires < time::now();"
        );
    }
}
