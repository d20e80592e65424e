//! # sorm
//!
//! A thin record mapper for SurrealDB. Option structs compile into SurrealQL
//! with every value cast to a type-tagged literal, statements run through an
//! injected [`Client`], and responses are unwrapped into plain JSON or typed
//! rows.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sorm::prelude::*;
//!
//! let db = Sorm::new(client);
//!
//! let users = db
//!     .find_many(
//!         "user",
//!         &SelectOptions::new()
//!             .fields(["id", "name"])
//!             .filter("active", true)
//!             .order(["-age"])
//!             .limit(2),
//!     )
//!     .await?;
//! // SELECT id, name FROM user WHERE active = <bool>true ORDER BY age DESC LIMIT 2;
//! ```
//!
//! ## Typed includes
//!
//! ```rust,ignore
//! relation!(pub PostAuthor: Post => User, One, "author");
//!
//! let posts = db.fetch_many(FindMany::<Post>::new().with(PostAuthor::include())).await?;
//! let author: &Fetched<User> = posts[0].get::<PostAuthor, _>();
//! // `posts[0].author` is still the `RecordId`
//! ```

mod client;
pub mod config;
pub mod response;
mod sorm;

pub use client::{Client, Connector};
pub use config::SormConfig;
pub use response::unwrap_response;
pub use sorm::Sorm;

/// Result type for sorm operations
pub use sorm_core::error::Result;

/// Error types
pub mod error {
    pub use sorm_core::error::SormError;
}

pub use sorm_core::{
    cast, clause, include, options, query, relation, statement, sorm_trace_cast,
    sorm_trace_error, sorm_trace_query,
};

/// Value model shared with the caster.
pub use sorm_types as types;

pub mod prelude {
    pub use crate::client::{Client, Connector};
    pub use crate::config::SormConfig;
    pub use crate::sorm::Sorm;
    pub use sorm_core::prelude::*;
    pub use sorm_core::relation;
}
