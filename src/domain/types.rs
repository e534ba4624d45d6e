//! Core domain types.

use std::marker::PhantomData;

/// A typed handle to one (database, collection) pair.
///
/// The handle is stateless: it carries only the two names and the document
/// type, costs nothing to recreate, and is never cached by the facade.
/// Dropping it has no effect on the server or the underlying client.
#[derive(Debug)]
pub struct CollectionHandle<T> {
    database: String,
    collection: String,
    _marker: PhantomData<fn() -> T>,
}

// Manual impls: the handle is name-only state, so none of these should
// require anything of `T`.
impl<T> Clone for CollectionHandle<T> {
    fn clone(&self) -> Self {
        Self {
            database: self.database.clone(),
            collection: self.collection.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> PartialEq for CollectionHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.database == other.database && self.collection == other.collection
    }
}

impl<T> Eq for CollectionHandle<T> {}

impl<T> CollectionHandle<T> {
    pub(crate) fn new(database: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            collection: collection.into(),
            _marker: PhantomData,
        }
    }

    /// Name of the database this handle is bound to.
    #[must_use]
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Name of the collection this handle is bound to.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.collection
    }
}
