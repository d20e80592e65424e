//! Decoded rows with typed access to their included relations.

use core::ops::{Deref, DerefMut};

use super::store::FindRel;

/// A decoded row: the base record plus the data of every included relation.
///
/// The base record keeps references in its relation attributes; the resolved
/// values live in `Store` and are reached with [`Fetched::get`]. Derefs to the
/// base record for field access.
#[derive(Debug, Clone)]
pub struct Fetched<Base, Store = ()> {
    pub(crate) base: Base,
    pub(crate) store: Store,
}

impl<Base, Store> Fetched<Base, Store> {
    pub(crate) fn new(base: Base, store: Store) -> Self {
        Self { base, store }
    }

    pub fn base(&self) -> &Base {
        &self.base
    }

    pub fn into_base(self) -> Base {
        self.base
    }

    pub fn into_parts(self) -> (Base, Store) {
        (self.base, self.store)
    }

    /// Returns the resolved data of relation `R`.
    ///
    /// ```ignore
    /// let posts: &Vec<Fetched<Post>> = user.get::<UserPosts, _>();
    /// ```
    pub fn get<R, W>(&self) -> &<Store as FindRel<R, W>>::Data
    where
        Store: FindRel<R, W>,
    {
        self.store.get()
    }

    pub fn get_mut<R, W>(&mut self) -> &mut <Store as FindRel<R, W>>::Data
    where
        Store: FindRel<R, W>,
    {
        self.store.get_mut()
    }
}

impl<Base, Store> Deref for Fetched<Base, Store> {
    type Target = Base;

    fn deref(&self) -> &Base {
        &self.base
    }
}

impl<Base, Store> DerefMut for Fetched<Base, Store> {
    fn deref_mut(&mut self) -> &mut Base {
        &mut self.base
    }
}
