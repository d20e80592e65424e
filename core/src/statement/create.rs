use super::{Override, body, finish, target};
use crate::error::Result;
use crate::options::{CreateOptions, ReturnMode};

/// Builds a `CREATE` statement returning the created record.
///
/// ```
/// use sorm_core::options::{BodyMode, CreateOptions};
/// use sorm_core::statement::create;
///
/// let sql = create(
///     "user",
///     &CreateOptions::new().id("tobie").data([("name", "Tobie")]).mode(BodyMode::Set),
/// )
/// .unwrap();
/// assert_eq!(sql, "CREATE user:tobie SET name = <string>\"Tobie\" RETURN AFTER;");
/// ```
pub fn create(table: &str, options: &CreateOptions) -> Result<String> {
    let target = target(table, options.id.as_deref())?;
    let head = format!("CREATE {target}");

    let sql = match Override::parse(options.raw.as_deref(), "CREATE") {
        Some(Override::Statement(statement)) => statement.to_string(),
        Some(Override::Tail(tail)) => finish([head.as_str(), tail]),
        None => finish([
            head.as_str(),
            body(&options.data, options.mode).as_str(),
            ReturnMode::After.clause().as_str(),
        ]),
    };

    crate::sorm_trace_query!("create", sql);
    Ok(sql)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SormError;
    use crate::options::BodyMode;
    use sorm_types::{Object, Value};

    #[test]
    fn content_body_casts_every_value() {
        let options = CreateOptions::new().data(
            Object::new()
                .with("name", "Jaime")
                .with("age", 30)
                .with("tags", vec!["a", "b"])
                .with("friend", "user:tobie"),
        );
        assert_eq!(
            create("user", &options).unwrap(),
            "CREATE user CONTENT { name: <string>\"Jaime\", age: <int>30, tags: <array>[<string>\"a\", <string>\"b\"], friend: <record>\"user:tobie\" } RETURN AFTER;"
        );
    }

    #[test]
    fn several_records_become_an_array_of_content() {
        let options = CreateOptions::new().data([("n", 1)]).data([("n", 2)]);
        assert_eq!(
            create("item", &options).unwrap(),
            "CREATE item CONTENT [{ n: <int>1 }, { n: <int>2 }] RETURN AFTER;"
        );
    }

    #[test]
    fn set_mode_uses_first_record() {
        let options = CreateOptions::new()
            .mode(BodyMode::Set)
            .data([("name", Value::from("a")), ("nick", Value::None)])
            .data([("name", "ignored")]);
        assert_eq!(
            create("user", &options).unwrap(),
            "CREATE user SET name = <string>\"a\", nick = NONE RETURN AFTER;"
        );
    }

    #[test]
    fn no_data_creates_empty_record() {
        assert_eq!(
            create("user", &CreateOptions::new()).unwrap(),
            "CREATE user RETURN AFTER;"
        );
    }

    #[test]
    fn raw_tail_replaces_body() {
        let options = CreateOptions::new()
            .id("1")
            .data([("ignored", true)])
            .raw("SET created = time::now() RETURN NONE");
        assert_eq!(
            create("log", &options).unwrap(),
            "CREATE log:1 SET created = time::now() RETURN NONE;"
        );
    }

    #[test]
    fn empty_identifiers_fail_fast() {
        assert!(matches!(create("", &CreateOptions::new()), Err(SormError::MissingTable)));
        assert!(matches!(
            create("user", &CreateOptions::new().id("")),
            Err(SormError::InvalidIdentifier(_))
        ));
    }
}
