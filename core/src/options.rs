//! Declarative option objects consumed by the statement generators.

use sorm_types::{Object, Value};

use crate::include::Include;

/// Equality filter: `attribute -> value`, joined with `AND`.
pub type Filter = Object;

/// Ordering list. Entries with a leading `-` sort descending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order(pub Vec<String>);

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn asc(mut self, attr: impl Into<String>) -> Self {
        self.0.push(attr.into());
        self
    }

    #[must_use]
    pub fn desc(mut self, attr: impl Into<String>) -> Self {
        self.0.push(format!("-{}", attr.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Order {
    fn from(attr: &str) -> Self {
        Self(vec![attr.to_string()])
    }
}

impl From<String> for Order {
    fn from(attr: String) -> Self {
        Self(vec![attr])
    }
}

impl<S: Into<String>> From<Vec<S>> for Order {
    fn from(attrs: Vec<S>) -> Self {
        Self(attrs.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for Order {
    fn from(attrs: [S; N]) -> Self {
        Self(attrs.into_iter().map(Into::into).collect())
    }
}

/// How a write statement carries its data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BodyMode {
    /// `CONTENT { ... }`
    #[default]
    Content,
    /// `SET key = value, ...` (first record only)
    Set,
    /// `MERGE { ... }` (first record only)
    Merge,
}

/// The `RETURN` clause of a write statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReturnMode {
    None,
    Before,
    #[default]
    After,
    Diff,
    Fields(Vec<String>),
}

impl ReturnMode {
    pub fn clause(&self) -> String {
        match self {
            Self::None => "RETURN NONE".to_string(),
            Self::Before => "RETURN BEFORE".to_string(),
            Self::After => "RETURN AFTER".to_string(),
            Self::Diff => "RETURN DIFF".to_string(),
            Self::Fields(fields) if fields.is_empty() => "RETURN AFTER".to_string(),
            Self::Fields(fields) => format!("RETURN {}", fields.join(", ")),
        }
    }
}

/// Whether results are returned as the raw client response or unwrapped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[derive(serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultShape {
    #[default]
    Unwrapped,
    Raw,
}

/// Options for `SELECT` returning many rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectOptions {
    pub fields: Vec<String>,
    pub filter: Option<Filter>,
    pub order: Option<Order>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub include: Vec<Include>,
    pub raw: Option<String>,
    pub shape: Option<ResultShape>,
}

impl SelectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Adds an equality condition.
    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter.get_or_insert_with(Filter::new).insert(key, value);
        self
    }

    /// Replaces the whole filter map.
    #[must_use]
    pub fn r#where(mut self, filter: impl Into<Filter>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    #[must_use]
    pub fn order(mut self, order: impl Into<Order>) -> Self {
        self.order = Some(order.into());
        self
    }

    #[must_use]
    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    #[must_use]
    pub fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    #[must_use]
    pub fn include(mut self, include: Include) -> Self {
        self.include.push(include);
        self
    }

    #[must_use]
    pub fn raw(mut self, clause: impl Into<String>) -> Self {
        self.raw = Some(clause.into());
        self
    }

    #[must_use]
    pub fn shape(mut self, shape: ResultShape) -> Self {
        self.shape = Some(shape);
        self
    }
}

/// Options for `SELECT` returning a single row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectOneOptions {
    pub fields: Vec<String>,
    pub filter: Option<Filter>,
    pub include: Vec<Include>,
    pub raw: Option<String>,
    pub shape: Option<ResultShape>,
}

impl SelectOneOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter.get_or_insert_with(Filter::new).insert(key, value);
        self
    }

    #[must_use]
    pub fn r#where(mut self, filter: impl Into<Filter>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    #[must_use]
    pub fn include(mut self, include: Include) -> Self {
        self.include.push(include);
        self
    }

    #[must_use]
    pub fn raw(mut self, clause: impl Into<String>) -> Self {
        self.raw = Some(clause.into());
        self
    }

    #[must_use]
    pub fn shape(mut self, shape: ResultShape) -> Self {
        self.shape = Some(shape);
        self
    }
}

/// Options for `CREATE`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateOptions {
    pub id: Option<String>,
    pub data: Vec<Object>,
    pub mode: BodyMode,
    pub raw: Option<String>,
    pub shape: Option<ResultShape>,
}

impl CreateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Appends one record of data.
    #[must_use]
    pub fn data(mut self, record: impl Into<Object>) -> Self {
        self.data.push(record.into());
        self
    }

    #[must_use]
    pub fn mode(mut self, mode: BodyMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn raw(mut self, clause: impl Into<String>) -> Self {
        self.raw = Some(clause.into());
        self
    }

    #[must_use]
    pub fn shape(mut self, shape: ResultShape) -> Self {
        self.shape = Some(shape);
        self
    }
}

/// Options for `UPDATE`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateOptions {
    pub id: Option<String>,
    pub data: Vec<Object>,
    pub mode: BodyMode,
    pub filter: Option<Filter>,
    pub returning: Option<ReturnMode>,
    pub raw: Option<String>,
    pub shape: Option<ResultShape>,
}

impl UpdateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn data(mut self, record: impl Into<Object>) -> Self {
        self.data.push(record.into());
        self
    }

    #[must_use]
    pub fn mode(mut self, mode: BodyMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter.get_or_insert_with(Filter::new).insert(key, value);
        self
    }

    #[must_use]
    pub fn r#where(mut self, filter: impl Into<Filter>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    #[must_use]
    pub fn returning(mut self, mode: ReturnMode) -> Self {
        self.returning = Some(mode);
        self
    }

    #[must_use]
    pub fn raw(mut self, clause: impl Into<String>) -> Self {
        self.raw = Some(clause.into());
        self
    }

    #[must_use]
    pub fn shape(mut self, shape: ResultShape) -> Self {
        self.shape = Some(shape);
        self
    }
}

/// Options for `DELETE`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteOptions {
    pub id: Option<String>,
    pub filter: Option<Filter>,
    pub returning: Option<ReturnMode>,
    pub raw: Option<String>,
    pub shape: Option<ResultShape>,
}

impl DeleteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter.get_or_insert_with(Filter::new).insert(key, value);
        self
    }

    #[must_use]
    pub fn r#where(mut self, filter: impl Into<Filter>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    #[must_use]
    pub fn returning(mut self, mode: ReturnMode) -> Self {
        self.returning = Some(mode);
        self
    }

    #[must_use]
    pub fn raw(mut self, clause: impl Into<String>) -> Self {
        self.raw = Some(clause.into());
        self
    }

    #[must_use]
    pub fn shape(mut self, shape: ResultShape) -> Self {
        self.shape = Some(shape);
        self
    }
}
