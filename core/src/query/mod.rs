//! Typed relational API.
//!
//! Projects query results at compile time from the relations a query
//! includes.
//!
//! The pipeline: [`FindMany`] configures filtering/pagination and collects
//! [`IncludeHandle`]s via `.with()`. The handles render into runtime
//! [`Include`](crate::include::Include) descriptors via [`RenderIncludes`] and
//! the statement is produced by the regular generators. Rows decode via
//! [`FromJsonValue`] + [`DeserializeStore`] into [`Fetched<Base, Store>`](Fetched).
//!
//! Included relations are reachable through [`Fetched::get`] in their resolved
//! shape; relations that were not included stay in the base record as
//! references.

mod builder;
mod deser;
#[doc(hidden)]
pub mod handle;
mod render;
mod row;
mod store;

pub use builder::{
    AllColumns, BuildStore, FetchedRow, FindMany, IntoColumnSelection, PartialColumns,
    QueryTable, ResolveSelect, SelectColumns,
};
pub use deser::{DeserializeStore, FromJsonValue, collapse_to_reference};
pub use handle::IncludeHandle;
pub use render::RenderIncludes;
pub use row::Fetched;
pub use store::{FindRel, Here, RelEntry, There};
