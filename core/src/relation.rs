//! Relation definitions for the typed include API.
//!
//! A relation attribute holds either a reference to another record or, once
//! fetched, the record itself. [`Link`] models that union for untyped use;
//! [`RelationDef`] describes it at the type level so included relations can
//! be projected to their resolved shape at compile time.

use serde::{Deserialize, Serialize};
use sorm_types::RecordId;

use crate::query::QueryTable;

/// Cardinality for runtime decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Exactly one related record
    One,
    /// Zero or one related record
    OptionalOne,
    /// An array of related records
    Many,
}

/// Marker: the relation holds exactly one record.
pub struct One;
/// Marker: the relation may be empty.
pub struct OptionalOne;
/// Marker: the relation holds an array of records.
pub struct Many;

/// Maps a cardinality marker to the container of the resolved value.
pub trait CardWrap {
    /// `T`, `Option<T>` or `Vec<T>`.
    type Wrap<T>;
    const CARDINALITY: Cardinality;
}

impl CardWrap for One {
    type Wrap<T> = T;
    const CARDINALITY: Cardinality = Cardinality::One;
}

impl CardWrap for OptionalOne {
    type Wrap<T> = Option<T>;
    const CARDINALITY: Cardinality = Cardinality::OptionalOne;
}

impl CardWrap for Many {
    type Wrap<T> = Vec<T>;
    const CARDINALITY: Cardinality = Cardinality::Many;
}

/// A relation attribute on `Source` pointing at `Target`.
///
/// Usually declared with [`relation!`](crate::relation!).
pub trait RelationDef {
    type Source: QueryTable;
    type Target: QueryTable;
    type Card: CardWrap;
    /// The attribute name on `Source`.
    const NAME: &'static str;
}

/// The reference-or-resolved union of a relation attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Link<T> {
    Ref(RecordId),
    Resolved(T),
}

impl<T> Link<T> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    pub fn reference(&self) -> Option<&RecordId> {
        match self {
            Self::Ref(id) => Some(id),
            Self::Resolved(_) => None,
        }
    }

    pub fn resolved(&self) -> Option<&T> {
        match self {
            Self::Ref(_) => None,
            Self::Resolved(value) => Some(value),
        }
    }

    pub fn into_resolved(self) -> Option<T> {
        match self {
            Self::Ref(_) => None,
            Self::Resolved(value) => Some(value),
        }
    }
}

/// Declares a relation marker type and its [`RelationDef`].
///
/// ```ignore
/// relation!(pub UserPosts: User => Post, Many, "posts");
///
/// let query = FindMany::<User>::new().with(UserPosts::include());
/// ```
#[macro_export]
macro_rules! relation {
    ($(#[$meta:meta])* $vis:vis $name:ident : $source:ty => $target:ty, $card:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        $vis struct $name;

        impl $crate::relation::RelationDef for $name {
            type Source = $source;
            type Target = $target;
            type Card = $crate::relation::$card;
            const NAME: &'static str = $field;
        }

        impl $name {
            /// Starts an include of this relation.
            #[allow(dead_code)]
            $vis fn include() -> $crate::query::IncludeHandle<$name> {
                $crate::query::IncludeHandle::new()
            }
        }
    };
}
