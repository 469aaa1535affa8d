//! Shared entity collection with atomic read-modify-install updates

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::entity::Entity;

/// The shared, mutable entity population
///
/// Concurrency contract: `snapshot` returns the full collection consistent
/// at the instant of read; `update` holds the exclusive lock across one
/// whole read-compute-install cycle, so concurrent soldiers never observe a
/// half-updated collection and no install is lost between a read and a
/// write. Replacement is whole-collection; there is no per-entity locking.
#[derive(Debug, Default)]
pub struct EntityStore {
    inner: Mutex<Vec<Entity>>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Entity>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Clone of the full current collection
    pub fn snapshot(&self) -> Vec<Entity> {
        self.lock().clone()
    }

    /// Run one read-compute-install cycle under the exclusive lock
    ///
    /// The closure may rewrite the collection in place or install a freshly
    /// computed replacement; either way the transition is atomic with
    /// respect to every other soldier.
    pub fn update<T>(&self, f: impl FnOnce(&mut Vec<Entity>) -> T) -> T {
        let mut entities = self.lock();
        f(&mut entities)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
