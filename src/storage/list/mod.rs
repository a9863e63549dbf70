mod alloc_impl;
mod arrayvec_impl;
#[cfg(feature = "smallvec")]
mod smallvec_impl;

mod sparse;
pub use sparse::{
    SparseStorage,
    Slot as SparseStorageSlot,
    Vec as SparseVec,
};

/// A list addressed by position, which heaps, queues and disjoint sets keep their nodes in. Wrapped in a [`SparseStorage`], it also backs trees.
///
/// # Safety
/// Implementors must uphold the following, and the structures in this crate rely on it for memory safety:
/// - `get_unchecked` and `get_unchecked_mut` never cause undefined behavior for an index below `len()`;
/// - the length only changes through `push`, `pop`, `pop_front` and `clear`;
/// - `new` returns an empty list.
///
/// [`SparseStorage`]: struct.SparseStorage.html " "
pub unsafe trait ListStorage: Sized {
    /// The type of the elements stored.
    type Element;

    /// Creates an empty list.
    fn new() -> Self;
    /// Returns the number of elements.
    fn len(&self) -> usize;
    /// Appends an element at the back.
    ///
    /// # Panics
    /// Lists of fixed size panic when full. The structures in this crate check [`fixed_capacity`] beforehand.
    ///
    /// [`fixed_capacity`]: #method.fixed_capacity " "
    fn push(&mut self, element: Self::Element);
    /// Removes the last element and returns it, or `None` if the list is empty.
    fn pop(&mut self) -> Option<Self::Element>;
    /// Removes the first element and returns it, or `None` if the list is empty. Constant-time for `VecDeque`, linear for the others.
    fn pop_front(&mut self) -> Option<Self::Element>;
    /// Returns the element at `index`, or `None` if it's out of bounds.
    fn get(&self, index: usize) -> Option<&Self::Element>;
    /// Returns the element at `index` mutably, or `None` if it's out of bounds.
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Element>;
    /// Returns the element at `index` without a bounds check.
    ///
    /// # Safety
    /// `index` must be below `len()`.
    unsafe fn get_unchecked(&self, index: usize) -> &Self::Element;
    /// Returns the element at `index` mutably without a bounds check.
    ///
    /// # Safety
    /// `index` must be below `len()`.
    unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut Self::Element;
    /// Swaps the elements at `a` and `b`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    fn swap(&mut self, a: usize, b: usize);
    /// Removes every element.
    fn clear(&mut self);

    /// Returns `true` if the list has no elements.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns the largest number of elements the list can ever hold, or `None` if it grows as needed.
    ///
    /// Structures built on a list fold this into their own capacity limit, so that a full `ArrayVec` is reported with [`Error::CapacityExceeded`] instead of a panic.
    ///
    /// [`Error::CapacityExceeded`]: ../enum.Error.html#variant.CapacityExceeded " "
    #[inline(always)]
    fn fixed_capacity() -> Option<usize> {
        None
    }
}
