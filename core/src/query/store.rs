//! Type-level storage for included relation data.
//!
//! A row with two included relations stores its data as
//! ```text
//! RelEntry<UserPosts, Vec<Fetched<Post, ()>>, RelEntry<UserAuthor, Fetched<User, ()>, ()>>
//! ```
//! and [`FindRel`] locates an entry by its relation marker.

use core::marker::PhantomData;

/// One relation's data followed by the rest of the chain.
#[derive(Debug, Clone)]
pub struct RelEntry<Rel, Data, Rest> {
    pub(crate) data: Data,
    pub(crate) rest: Rest,
    pub(crate) _rel: PhantomData<Rel>,
}

impl<Rel, Data, Rest> RelEntry<Rel, Data, Rest> {
    pub(crate) fn new(data: Data, rest: Rest) -> Self {
        Self {
            data,
            rest,
            _rel: PhantomData,
        }
    }
}

/// Witness: the entry sits at the head of the chain.
pub struct Here;

/// Witness: the entry sits somewhere in the tail.
pub struct There<W>(PhantomData<W>);

/// Locates relation `Rel` in a `RelEntry` chain.
///
/// The witness is inferred; it is unique because a relation marker appears
/// at most once per chain. Looking up a relation that was not included is a
/// compile error.
pub trait FindRel<Rel, Witness> {
    type Data;

    fn get(&self) -> &Self::Data;

    fn get_mut(&mut self) -> &mut Self::Data;
}

impl<Rel, Data, Rest> FindRel<Rel, Here> for RelEntry<Rel, Data, Rest> {
    type Data = Data;

    fn get(&self) -> &Data {
        &self.data
    }

    fn get_mut(&mut self) -> &mut Data {
        &mut self.data
    }
}

impl<Rel, Other, Data, Rest, W> FindRel<Rel, There<W>> for RelEntry<Other, Data, Rest>
where
    Rest: FindRel<Rel, W>,
{
    type Data = <Rest as FindRel<Rel, W>>::Data;

    fn get(&self) -> &Self::Data {
        self.rest.get()
    }

    fn get_mut(&mut self) -> &mut Self::Data {
        self.rest.get_mut()
    }
}
