//! Query generation for the sorm record mapper.
//!
//! Turns plain option structs into SurrealQL statements: values go through
//! the [caster](cast), clauses are rendered by the [`clause`] helpers and the
//! [`statement`] generators assemble them. The [`query`] module layers a
//! typed include API on top.

pub mod cast;
pub mod clause;
pub mod error;
pub mod include;
pub mod options;
pub mod query;
pub mod relation;
pub mod statement;
mod tracing;

pub use cast::{cast, cast_as};
pub use error::{Result, SormError};
pub use include::Include;
pub use options::{
    BodyMode, CreateOptions, DeleteOptions, Filter, Order, ResultShape, ReturnMode,
    SelectOneOptions, SelectOptions, UpdateOptions,
};
pub use statement::{create, delete, select_many, select_one, update};

pub use sorm_types::{Object, RecordId, TagRef, Tagged, TypeTag, Value};

pub mod prelude {
    pub use crate::include::Include;
    pub use crate::options::{
        BodyMode, CreateOptions, DeleteOptions, Filter, Order, ResultShape, ReturnMode,
        SelectOneOptions, SelectOptions, UpdateOptions,
    };
    pub use crate::query::{Fetched, FindMany, IncludeHandle, QueryTable};
    pub use crate::relation::{Link, Many, One, OptionalOne, RelationDef};
    pub use crate::{Result, SormError};
    pub use sorm_types::prelude::*;
}
