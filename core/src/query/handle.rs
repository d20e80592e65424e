//! `IncludeHandle`: builder for configuring a single included relation.

use core::marker::PhantomData;

use crate::relation::RelationDef;

use super::builder::{AllColumns, IntoColumnSelection, PartialColumns, QueryTable};

/// A builder for configuring how a single relation is included.
///
/// Created by the relation marker's `include()` function.
///
/// The `Nested` type parameter is the storage for nested include handles:
/// `()` when empty, `(IncludeHandle<NR, NN, NC>, Rest)` when populated. The
/// full include tree is preserved in the type system.
///
/// The `Cols` type parameter controls the projection of the related record:
/// `AllColumns` (default) fetches the whole record, `PartialColumns` fetches
/// the listed fields only.
pub struct IncludeHandle<R: RelationDef, Nested = (), Cols = AllColumns> {
    pub(crate) nested: Nested,
    pub(crate) cols: Cols,
    pub(crate) _marker: PhantomData<R>,
}

impl<R: RelationDef> IncludeHandle<R> {
    /// Creates a new unconfigured `IncludeHandle`.
    pub fn new() -> Self {
        Self {
            nested: (),
            cols: AllColumns,
            _marker: PhantomData,
        }
    }
}

impl<R: RelationDef> Default for IncludeHandle<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RelationDef, Nested, Cols> IncludeHandle<R, Nested, Cols> {
    /// Nests a relation of the target record.
    #[allow(clippy::type_complexity)]
    pub fn with<NR, NN, NC>(
        self,
        handle: IncludeHandle<NR, NN, NC>,
    ) -> IncludeHandle<R, (IncludeHandle<NR, NN, NC>, Nested), Cols>
    where
        NR: RelationDef<Source = R::Target>,
    {
        IncludeHandle {
            nested: (handle, self.nested),
            cols: self.cols,
            _marker: PhantomData,
        }
    }
}

/// Column selection is only available when all columns are selected.
impl<R: RelationDef, Nested> IncludeHandle<R, Nested, AllColumns> {
    /// Fetches only the specified fields of the related record.
    pub fn columns<S: IntoColumnSelection>(self, selector: S) -> IncludeHandle<R, Nested, PartialColumns> {
        IncludeHandle {
            nested: self.nested,
            cols: PartialColumns {
                columns: selector.into_column_names(),
            },
            _marker: PhantomData,
        }
    }

    /// Fetches every field of the related record except the specified ones.
    pub fn omit<S: IntoColumnSelection>(self, selector: S) -> IncludeHandle<R, Nested, PartialColumns> {
        let omitted = selector.into_column_names();
        let columns = <R::Target as QueryTable>::FIELD_NAMES
            .iter()
            .copied()
            .filter(|c| !omitted.contains(c))
            .collect();
        IncludeHandle {
            nested: self.nested,
            cols: PartialColumns { columns },
            _marker: PhantomData,
        }
    }
}
