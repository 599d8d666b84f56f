//! # Record Store
//!
//! The ordered, in-memory collection owned by a [`ResourceActor`](crate::ResourceActor).
//!
//! Records are kept in a `Vec` so that insertion order stays observable when the whole
//! collection is listed. Lookups are linear scans over the current records, which is fine
//! for the small collections these actors manage.
//!
//! The store is purely synchronous and knows nothing about channels or hooks; the actor
//! decides *what* to write, the store only decides *where*.

use crate::entity::ActorEntity;

/// Ordered sequence of entities, unique by [`ActorEntity::id`].
#[derive(Debug, Clone)]
pub struct RecordStore<T: ActorEntity> {
    records: Vec<T>,
}

impl<T: ActorEntity> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> RecordStore<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Builds a store pre-populated with `records`, in the given order.
    pub fn with_records(records: Vec<T>) -> Self {
        Self { records }
    }

    /// All records in insertion order.
    pub fn list_all(&self) -> &[T] {
        &self.records
    }

    pub fn find_by_id(&self, id: &T::Id) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Position of the record with `id`, or `None` when absent.
    pub fn find_index_by_id(&self, id: &T::Id) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    /// Appends a record. Ids are minted by the actor, so no duplicate check happens here.
    pub fn insert(&mut self, record: T) {
        self.records.push(record);
    }

    /// Overwrites the record at `index` with a fully replaced version, returning the old one.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds; callers obtain it from [`Self::find_index_by_id`].
    pub fn replace_at(&mut self, index: usize, record: T) -> T {
        std::mem::replace(&mut self.records[index], record)
    }

    /// Commits a merged version of the record at `index` and returns a reference to it.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn merge_at(&mut self, index: usize, merged: T) -> &T {
        self.records[index] = merged;
        &self.records[index]
    }

    /// Removes exactly one record, shifting the following ones left.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> T {
        self.records.remove(index)
    }

    /// Drops every record and returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        removed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
