//! Statement generators.
//!
//! Each generator turns a table name and an options object into one SurrealQL
//! statement ending in `;`.
//!
//! A raw override follows one rule everywhere: when it starts with the
//! statement's own keyword it replaces the whole statement and is returned
//! trimmed; otherwise it replaces every clause after the statement target.

mod create;
mod delete;
mod select;
mod update;

pub use create::create;
pub use delete::delete;
pub use select::{select_many, select_one};
pub use update::update;

use sorm_types::Object;

use crate::cast::cast;
use crate::error::{Result, SormError};
use crate::options::BodyMode;

/// A raw override after keyword detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Override<'a> {
    /// The override is a complete statement.
    Statement(&'a str),
    /// The override replaces the clauses after the target.
    Tail(&'a str),
}

impl<'a> Override<'a> {
    pub(crate) fn parse(raw: Option<&'a str>, keyword: &str) -> Option<Self> {
        let raw = raw?.trim();
        if raw.is_empty() {
            return None;
        }
        let head = raw.split_whitespace().next().unwrap_or_default();
        if head.eq_ignore_ascii_case(keyword) {
            Some(Self::Statement(raw))
        } else {
            Some(Self::Tail(raw.trim_end_matches(';').trim_end()))
        }
    }
}

pub(crate) fn require_table(table: &str) -> Result<&str> {
    let table = table.trim();
    if table.is_empty() {
        Err(SormError::MissingTable)
    } else {
        Ok(table)
    }
}

/// `table` or `table:id`. Identifiers are structural and not cast.
pub(crate) fn target(table: &str, id: Option<&str>) -> Result<String> {
    let table = require_table(table)?;
    match id.map(str::trim) {
        None => Ok(table.to_string()),
        Some("") => Err(SormError::InvalidIdentifier(format!(
            "empty record id for table `{table}`"
        ))),
        Some(id) => Ok(format!("{table}:{id}")),
    }
}

/// Joins the non-empty parts with spaces and terminates the statement.
pub(crate) fn finish<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut sql = String::with_capacity(64);
    for part in parts.into_iter().map(str::trim).filter(|p| !p.is_empty()) {
        if !sql.is_empty() {
            sql.push(' ');
        }
        sql.push_str(part);
    }
    sql.push(';');
    sql
}

/// Renders the data body of a `CREATE` or `UPDATE`.
pub(crate) fn body(data: &[Object], mode: BodyMode) -> String {
    let Some(first) = data.first() else {
        return String::new();
    };
    match mode {
        BodyMode::Content if data.len() > 1 => {
            let records: Vec<String> = data
                .iter()
                .map(|record| cast(&record.clone().into()))
                .collect();
            format!("CONTENT [{}]", records.join(", "))
        }
        BodyMode::Content => format!("CONTENT {}", cast(&first.clone().into())),
        BodyMode::Merge => format!("MERGE {}", cast(&first.clone().into())),
        BodyMode::Set if first.is_empty() => String::new(),
        BodyMode::Set => {
            let assignments: Vec<String> = first
                .iter()
                .map(|(key, value)| format!("{key} = {}", cast(value)))
                .collect();
            format!("SET {}", assignments.join(", "))
        }
    }
}
