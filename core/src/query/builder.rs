//! `FindMany`: typed select builder, no connection.

use core::marker::PhantomData;

use serde::de::DeserializeOwned;
use sorm_types::Value;

use crate::error::Result;
use crate::include::{Include, collect_include_field_paths};
use crate::options::{Filter, Order, SelectOneOptions, SelectOptions};
use crate::relation::{CardWrap, RelationDef};
use crate::statement::{select_many, select_one};

use super::handle::IncludeHandle;
use super::render::RenderIncludes;
use super::row::Fetched;
use super::store::RelEntry;

// =============================================================================
// Column selection types
// =============================================================================

/// Marker: select all fields (default). The result model is the table record.
pub struct AllColumns;

/// Partial field selection. The result model is `T::Partial`.
pub struct PartialColumns {
    /// The subset of field names to include in the query.
    pub columns: Vec<&'static str>,
}

/// Maps a column selection mode to the model it decodes into.
pub trait ResolveSelect<T: QueryTable> {
    type Model;
}

impl<T: QueryTable> ResolveSelect<T> for AllColumns {
    type Model = T;
}

impl<T: QueryTable> ResolveSelect<T> for PartialColumns {
    type Model = T::Partial;
}

/// Turns a column selection mode into an explicit field list.
pub trait SelectColumns {
    /// `None` selects every field.
    fn into_fields(self) -> Option<Vec<String>>;
}

impl SelectColumns for AllColumns {
    fn into_fields(self) -> Option<Vec<String>> {
        None
    }
}

impl SelectColumns for PartialColumns {
    fn into_fields(self) -> Option<Vec<String>> {
        Some(self.columns.into_iter().map(str::to_string).collect())
    }
}

/// Converts a column selector into a list of field names.
pub trait IntoColumnSelection {
    fn into_column_names(self) -> Vec<&'static str>;
}

impl IntoColumnSelection for Vec<&'static str> {
    fn into_column_names(self) -> Vec<&'static str> {
        self
    }
}

impl IntoColumnSelection for &[&'static str] {
    fn into_column_names(self) -> Vec<&'static str> {
        self.to_vec()
    }
}

impl<const N: usize> IntoColumnSelection for [&'static str; N] {
    fn into_column_names(self) -> Vec<&'static str> {
        self.to_vec()
    }
}

// =============================================================================
// QueryTable
// =============================================================================

/// Table metadata for the typed API.
///
/// The implementing type is the record model. Its relation attributes hold
/// references (`RecordId`, `Option<RecordId>`, `Vec<RecordId>` or
/// [`Link`](crate::relation::Link)), which is the shape a relation takes when
/// it is not included.
pub trait QueryTable: DeserializeOwned {
    /// The partial select model (usually all fields `Option<T>`).
    type Partial: DeserializeOwned;
    /// The table name.
    const TABLE_NAME: &'static str;
    /// All field names in SELECT order.
    const FIELD_NAMES: &'static [&'static str];
}

// =============================================================================
// FindMany
// =============================================================================

/// Typed select builder. Holds include handles and query config.
///
/// The `Rels` type parameter stores the include handles: `()` when empty,
/// `(IncludeHandle<R, N, C>, Rest)` when populated. The full include tree
/// is preserved in the type system and the result type is computed from it.
pub struct FindMany<T, Rels = (), Cols = AllColumns> {
    pub filter: Option<Filter>,
    pub order: Option<Order>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub relations: Rels,
    pub cols: Cols,
    _marker: PhantomData<T>,
}

/// The decoded row type of a [`FindMany`].
pub type FetchedRow<T, Rels = (), Cols = AllColumns> =
    Fetched<<Cols as ResolveSelect<T>>::Model, <Rels as BuildStore>::Store>;

impl<T: QueryTable> FindMany<T> {
    pub fn new() -> Self {
        Self {
            filter: None,
            order: None,
            limit: None,
            offset: None,
            relations: (),
            cols: AllColumns,
            _marker: PhantomData,
        }
    }
}

impl<T: QueryTable> Default for FindMany<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: QueryTable, Rels, Cols> FindMany<T, Rels, Cols> {
    /// Includes a relation of `T`.
    #[allow(clippy::type_complexity)]
    pub fn with<R, N, C>(
        self,
        handle: IncludeHandle<R, N, C>,
    ) -> FindMany<T, (IncludeHandle<R, N, C>, Rels), Cols>
    where
        R: RelationDef<Source = T>,
    {
        FindMany {
            filter: self.filter,
            order: self.order,
            limit: self.limit,
            offset: self.offset,
            relations: (handle, self.relations),
            cols: self.cols,
            _marker: PhantomData,
        }
    }

    /// Adds an equality condition.
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter.get_or_insert_with(Filter::new).insert(key, value);
        self
    }

    /// Replaces the filter map.
    pub fn r#where(mut self, filter: impl Into<Filter>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn order_by(mut self, order: impl Into<Order>) -> Self {
        self.order = Some(order.into());
        self
    }

    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    pub fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    pub const fn table(&self) -> &'static str {
        T::TABLE_NAME
    }
}

/// Methods only available when all columns are selected (prevents double-calling).
impl<T: QueryTable, Rels> FindMany<T, Rels, AllColumns> {
    /// Selects only the specified fields.
    pub fn columns<S: IntoColumnSelection>(self, selector: S) -> FindMany<T, Rels, PartialColumns> {
        FindMany {
            filter: self.filter,
            order: self.order,
            limit: self.limit,
            offset: self.offset,
            relations: self.relations,
            cols: PartialColumns {
                columns: selector.into_column_names(),
            },
            _marker: PhantomData,
        }
    }

    /// Selects every field except the specified ones.
    pub fn omit<S: IntoColumnSelection>(self, selector: S) -> FindMany<T, Rels, PartialColumns> {
        let omitted = selector.into_column_names();
        let columns = T::FIELD_NAMES
            .iter()
            .copied()
            .filter(|c| !omitted.contains(c))
            .collect();
        FindMany {
            filter: self.filter,
            order: self.order,
            limit: self.limit,
            offset: self.offset,
            relations: self.relations,
            cols: PartialColumns { columns },
            _marker: PhantomData,
        }
    }
}

impl<T, Rels, Cols> FindMany<T, Rels, Cols>
where
    T: QueryTable,
    Rels: RenderIncludes,
    Cols: SelectColumns,
{
    /// Lowers the typed query into the runtime options.
    pub fn into_select_options(self) -> SelectOptions {
        let (fields, include) = lower(self.relations, self.cols);
        SelectOptions {
            fields,
            filter: self.filter,
            order: self.order,
            limit: self.limit,
            offset: self.offset,
            include,
            raw: None,
            shape: None,
        }
    }

    /// Lowers the typed query into single-row options. The result carries no
    /// ordering or pagination; [`FindMany::to_sql_one`] keeps them.
    pub fn into_select_one_options(self) -> SelectOneOptions {
        let (fields, include) = lower(self.relations, self.cols);
        SelectOneOptions {
            fields,
            filter: self.filter,
            include,
            raw: None,
            shape: None,
        }
    }

    /// Generates the `SELECT` for many rows.
    pub fn to_sql(self) -> Result<String> {
        select_many(T::TABLE_NAME, &self.into_select_options())
    }

    /// Generates the `SELECT` for one row.
    ///
    /// With `order_by` or `offset` set the row is the first of that ordered
    /// page: the statement keeps both and forces `LIMIT 1`.
    pub fn to_sql_one(self) -> Result<String> {
        if self.order.is_some() || self.offset.is_some() {
            let options = SelectOptions {
                limit: Some(1),
                ..self.into_select_options()
            };
            return select_many(T::TABLE_NAME, &options);
        }
        select_one(T::TABLE_NAME, &self.into_select_one_options())
    }
}

fn lower<Rels: RenderIncludes, Cols: SelectColumns>(
    relations: Rels,
    cols: Cols,
) -> (Vec<String>, Vec<Include>) {
    let mut include = Vec::new();
    relations.render_into(&mut include);

    let fields = match cols.into_fields() {
        Some(mut fields) => {
            // Whole-record includes need their attribute in the projection.
            for rel in include.iter().filter(|i| i.fields.is_none()) {
                if !fields.iter().any(|f| f == rel.segment()) {
                    fields.push(rel.segment().to_string());
                }
            }
            fields
        }
        // Include field paths would otherwise replace the implicit `*`.
        None if !collect_include_field_paths(&include, "").is_empty() => vec!["*".to_string()],
        None => Vec::new(),
    };
    (fields, include)
}

// =============================================================================
// BuildStore
// =============================================================================

/// Maps an include list to its `RelEntry` storage chain.
pub trait BuildStore {
    type Store;
}

impl BuildStore for () {
    type Store = ();
}

impl<R, Nested, Rest, Cols> BuildStore for (IncludeHandle<R, Nested, Cols>, Rest)
where
    R: RelationDef,
    Cols: ResolveSelect<R::Target>,
    Nested: BuildStore,
    Rest: BuildStore,
{
    type Store = RelEntry<
        R,
        <R::Card as CardWrap>::Wrap<
            Fetched<<Cols as ResolveSelect<R::Target>>::Model, <Nested as BuildStore>::Store>,
        >,
        <Rest as BuildStore>::Store,
    >;
}
