//! Clause helpers.
//!
//! Each helper renders one clause from an optional input and returns an empty
//! string when there is nothing to render, so callers can drop it.

use crate::cast::cast;
use crate::include::{Include, flatten_include_paths};
use crate::options::{Filter, Order};

/// Helper function to create a WHERE clause of `AND`-joined equalities
///
/// Keys are structural identifiers; values always go through the caster.
///
/// ```
/// use sorm_core::clause::where_clause;
/// use sorm_core::options::Filter;
///
/// let filter = Filter::from([("active", true)]);
/// assert_eq!(where_clause(Some(&filter)), "WHERE active = <bool>true");
/// assert_eq!(where_clause(None), "");
/// ```
pub fn where_clause(filter: Option<&Filter>) -> String {
    let Some(filter) = filter else {
        return String::new();
    };
    let conditions: Vec<String> = filter
        .iter()
        .map(|(key, value)| format!("{key} = {}", cast(value)))
        .collect();
    if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    }
}

/// Helper function to create an ORDER BY clause
///
/// A leading `-` sorts the attribute descending.
pub fn order_clause(order: Option<&Order>) -> String {
    let Some(order) = order else {
        return String::new();
    };
    let terms: Vec<String> = order
        .0
        .iter()
        .filter_map(|entry| {
            let entry = entry.trim();
            match entry.strip_prefix('-') {
                Some(attr) if !attr.is_empty() => Some(format!("{attr} DESC")),
                Some(_) => None,
                None if entry.is_empty() => None,
                None => Some(format!("{entry} ASC")),
            }
        })
        .collect();
    if terms.is_empty() {
        String::new()
    } else {
        format!("ORDER BY {}", terms.join(", "))
    }
}

/// Helper function to create the pagination clause
///
/// `START` and `LIMIT` are independent; either may be absent.
pub fn limit_offset_clause(limit: Option<u64>, offset: Option<u64>) -> String {
    let mut parts = Vec::with_capacity(2);
    if let Some(offset) = offset {
        parts.push(format!("START {offset}"));
    }
    if let Some(limit) = limit {
        parts.push(format!("LIMIT {limit}"));
    }
    parts.join(" ")
}

/// Helper function to create a FETCH clause from an include tree
pub fn fetch_clause(include: Option<&[Include]>) -> String {
    let paths = include.map(|tree| flatten_include_paths(tree, "")).unwrap_or_default();
    if paths.is_empty() {
        String::new()
    } else {
        format!("FETCH {}", paths.join(", "))
    }
}
