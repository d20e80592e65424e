//! Generator properties across option combinations.

use sorm_core::include::{Include, collect_include_field_paths, count_nodes, flatten_include_paths};
use sorm_core::options::{SelectOneOptions, SelectOptions};
use sorm_core::{Filter, SormError, Value, clause, select_many, select_one};

fn deep_tree() -> Vec<Include> {
    vec![
        Include::new("author")
            .fields(["name"])
            .with(
                Include::new("company")
                    .with(Include::new("owner").alias("boss").fields(["email"])),
            ),
        Include::new("tags"),
        Include::new("comments").with(Include::new("author").alias("commenter")),
    ]
}

#[test]
fn one_path_per_node_in_pre_order() {
    let tree = deep_tree();
    let paths = flatten_include_paths(&tree, "");
    assert_eq!(paths.len(), count_nodes(&tree));
    assert_eq!(
        paths,
        [
            "author",
            "author.company",
            "author.company.boss",
            "tags",
            "comments",
            "comments.commenter",
        ]
    );
}

#[test]
fn field_paths_skip_nodes_without_fields() {
    assert_eq!(
        collect_include_field_paths(&deep_tree(), ""),
        ["author.name", "author.company.boss.email"]
    );
    assert_eq!(
        collect_include_field_paths(&deep_tree(), "post"),
        ["post.author.name", "post.author.company.boss.email"]
    );
}

#[test]
fn where_keeps_insertion_order() {
    let filter = Filter::new().with("a", 1).with("b", "x");
    assert_eq!(
        clause::where_clause(Some(&filter)),
        r#"WHERE a = <int>1 AND b = <string>"x""#
    );

    let reversed = Filter::new().with("b", "x").with("a", 1);
    assert_eq!(
        clause::where_clause(Some(&reversed)),
        r#"WHERE b = <string>"x" AND a = <int>1"#
    );
}

#[test]
fn pagination_is_independent() {
    assert_eq!(clause::limit_offset_clause(None, Some(5)), "START 5");
    assert_eq!(clause::limit_offset_clause(Some(10), None), "LIMIT 10");
    assert_eq!(clause::limit_offset_clause(None, None), "");
}

#[test]
fn select_one_limits_once() {
    let variants = [
        SelectOneOptions::new(),
        SelectOneOptions::new().filter("active", true),
        SelectOneOptions::new().fields(["id"]).include(Include::new("author")),
        SelectOneOptions::new().include(Include::new("author").fields(["name"])),
    ];
    for options in &variants {
        let sql = select_one("user", options).unwrap();
        assert_eq!(sql.matches("LIMIT 1").count(), 1, "{sql}");
        assert!(sql.ends_with(';'));
    }
}

#[test]
fn include_fields_join_explicit_fields_without_duplicates() {
    let sql = select_many(
        "post",
        &SelectOptions::new()
            .fields(["title", "author.name"])
            .include(Include::new("author").fields(["name", "email"])),
    )
    .unwrap();
    assert_eq!(
        sql,
        "SELECT title, author.name, author.email FROM post FETCH author;"
    );
}

#[test]
fn nested_filter_values() {
    let sql = select_many(
        "event",
        &SelectOptions::new()
            .filter("tags", Value::from(vec!["a", "b"]))
            .filter("meta", Value::object([("level", 2)])),
    )
    .unwrap();
    assert_eq!(
        sql,
        r#"SELECT * FROM event WHERE tags = <array>[<string>"a", <string>"b"] AND meta = { level: <int>2 };"#
    );
}

#[test]
fn missing_table() {
    assert!(matches!(
        select_many("", &SelectOptions::new()),
        Err(SormError::MissingTable)
    ));
    assert!(matches!(
        select_one(" ", &SelectOneOptions::new()),
        Err(SormError::MissingTable)
    ));
}
