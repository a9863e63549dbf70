//! Backing storage for the data structures.
//!
//! Two traits split the job:
//! - [`ListStorage`] is a plain growable list, addressed by position. Heaps, queues and disjoint sets store their nodes in one directly.
//! - [`Storage`] is an arena which hands out keys that stay valid while other elements come and go. Trees need this, since their nodes link to each other by key. [`SparseStorage`] turns any `ListStorage` into one.
//!
//! [`DefaultStorage`] is the arena trees use unless told otherwise.
//!
//! [`Storage`]: trait.Storage.html " "
//! [`ListStorage`]: trait.ListStorage.html " "
//! [`SparseStorage`]: struct.SparseStorage.html " "
//! [`DefaultStorage`]: type.DefaultStorage.html " "

mod list;
pub use list::*;

use core::fmt::Debug;

/// An arena which hands out stable keys for the elements added to it.
///
/// # Safety
/// Implementors must uphold the following, and the trees in this crate rely on it for memory safety:
/// - A key returned by `add` keeps pointing at the same element until that element is removed or the storage is cleared, no matter what else is added or removed in the meantime;
/// - `get_unchecked` and `get_unchecked_mut` never cause undefined behavior for a key on which `contains_key` returns `true`;
/// - `new` returns a storage with no elements.
///
/// [`get_unchecked`]: #tymethod.get_unchecked " "
/// [`get_unchecked_mut`]: #tymethod.get_unchecked_mut " "
pub unsafe trait Storage: Sized {
    /// The handle used to address elements.
    type Key: Clone + Debug + Eq;
    /// The type of the elements stored.
    type Element;

    /// Creates an empty storage.
    fn new() -> Self;
    /// Adds an element, returning the key it can be found under.
    fn add(&mut self, element: Self::Element) -> Self::Key;
    /// Removes and returns the element stored under `key`.
    ///
    /// # Panics
    /// Required to panic if there is no such element.
    fn remove(&mut self, key: &Self::Key) -> Self::Element;
    /// Returns the number of elements stored.
    fn len(&self) -> usize;
    /// Returns the element stored under `key`, or `None` if there is none.
    fn get(&self, key: &Self::Key) -> Option<&Self::Element>;
    /// Returns the element stored under `key` mutably, or `None` if there is none.
    fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Element>;
    /// Returns the element stored under `key` without checking that it exists.
    ///
    /// # Safety
    /// `contains_key` must return `true` for `key`.
    unsafe fn get_unchecked(&self, key: &Self::Key) -> &Self::Element;
    /// Returns the element stored under `key` mutably without checking that it exists.
    ///
    /// # Safety
    /// `contains_key` must return `true` for `key`.
    unsafe fn get_unchecked_mut(&mut self, key: &Self::Key) -> &mut Self::Element;
    /// Removes every element. Keys handed out before the call become invalid.
    fn clear(&mut self);

    /// Returns `true` if an element is stored under `key`.
    #[inline]
    fn contains_key(&self, key: &Self::Key) -> bool {
        self.get(key).is_some()
    }
    /// Returns `true` if nothing is stored.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns the largest number of elements the storage can ever hold, or `None` if it grows as needed.
    #[inline(always)]
    fn fixed_capacity() -> Option<usize> {
        None
    }
}

/// The arena trees use when no storage type is specified: a [*sparse*][`SparseStorage`] `Vec`.
///
/// [`SparseStorage`]: struct.SparseStorage.html " "
pub type DefaultStorage<T> = SparseVec<T>;
