//! Shared type definitions for sorm
//!
//! This crate provides the value model consumed by the SurrealQL literal
//! caster in `sorm-core`:
//!
//! - [`TypeTag`] - literal type tags (`<int>`, `<string>`, ...)
//! - [`Value`] - caster input, including the explicit-tag form [`Tagged`]
//! - [`RecordId`] - `table:key` record references
//! - [`Temporal`] - capability for date-like wrappers
//!
//! # Features
//!
//! - `serde` - serde support for [`RecordId`] and `serde_json::Value` conversion (default)
//! - `chrono` - [`Temporal`] for chrono date/time types
//! - `time` - [`Temporal`] for time crate types

mod object;
mod record;
mod tag;
mod temporal;
mod value;

pub use object::Object;
pub use record::{RecordId, RecordIdError};
pub use tag::{TagRef, TypeTag};
pub use temporal::Temporal;
pub use value::{Tagged, Value};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::{Object, RecordId, TagRef, Tagged, Temporal, TypeTag, Value};
}
