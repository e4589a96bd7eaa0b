//! Shared single-threaded resources.

use std::{
    rc::Rc,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

/// A single-threaded, reference-counted resource with interior mutability.
///
/// `StResource` lets several owners on one thread share a value of type `T`. The
/// in-memory mesh backend keeps its mesh store in one so callers can hold an
/// observer handle while the engine owns the backend itself.
///
/// # Examples
///
/// ```
/// use toroid_voxels::core::StResource;
///
/// let resource = StResource::new(vec![1, 2, 3]);
/// let observer = resource.clone();
///
/// resource.get_mut().push(4);
/// assert_eq!(observer.get().len(), 4);
/// ```
///
/// # Panics
/// - Panics if a read lock is held while trying to acquire a write lock in the same thread
/// - Panics if a write lock is held while trying to acquire any lock in the same thread
pub struct StResource<T> {
    /// The shared, lock-protected value.
    pub resource: Rc<RwLock<T>>,
}

impl<T> StResource<T> {
    /// Creates a new `StResource` containing the given value.
    pub fn new(resource: T) -> Self {
        Self {
            resource: Rc::new(RwLock::new(resource)),
        }
    }

    /// Returns a read-only guard that allows reading the contained value.
    ///
    /// # Panics
    /// Panics if the lock is poisoned or cannot be acquired.
    pub fn get(&self) -> RwLockReadGuard<'_, T> {
        self.resource.read().unwrap()
    }

    /// Returns a mutable guard that allows modifying the contained value.
    ///
    /// # Panics
    /// Panics if the lock is poisoned or cannot be acquired.
    pub fn get_mut(&self) -> RwLockWriteGuard<'_, T> {
        self.resource.write().unwrap()
    }

    /// Number of owners currently sharing the value.
    pub fn owner_count(&self) -> usize {
        Rc::strong_count(&self.resource)
    }
}

impl<T> Clone for StResource<T> {
    fn clone(&self) -> Self {
        Self {
            resource: self.resource.clone(),
        }
    }
}
