//! Binary heaps, ordered either with the largest or with the smallest key on top.
//!
//! The heap is stored in the classic implicit layout: the children of the element at index `i` are at `2i + 1` and `2i + 2`, and its parent is at `(i - 1) / 2`. Any [`ListStorage`] can hold the elements; a fixed-size one, like `ArrayVec`, additionally caps the heap at its array length.
//!
//! Comparisons are strict, so an element equal to its parent stays below it, and when both children of an element beat it by the same margin the left one is promoted. There is no stability guarantee among equal keys.
//!
//! # Example
//! ```rust
//! use kindling::binary_heap::{BinaryHeap, Orientation};
//!
//! let mut heap = BinaryHeap::<u32>::with_orientation(Orientation::Min);
//! heap.push_all([30, 10, 20]).unwrap();
//! assert_eq!(heap.top(), Some(&10));
//! assert_eq!(heap.pop_all(), [10, 20, 30]);
//! ```
//!
//! [`ListStorage`]: ../storage/trait.ListStorage.html " "

use core::{
    fmt::{self, Formatter, Display},
    mem,
};
use alloc::vec::Vec;
use crate::{
    compare::{Comparator, NaturalOrder},
    node::{Key, KeyExtractor, Node, ScalarKey},
    storage::ListStorage,
    Capacity, Error,
};

mod priority_queue;
pub use priority_queue::{PriorityQueue, ExplicitPriority};

/// Which end of the order sits on top of a heap.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The largest key is on top and is popped first.
    Max,
    /// The smallest key is on top and is popped first.
    Min,
}
impl Orientation {
    /// Returns `true` if an element with key `a` must sit above one with key `b`.
    #[inline]
    pub fn prefers<C: Comparator + ?Sized>(self, comparator: &C, a: &Key, b: &Key) -> bool {
        match self {
            Self::Max => comparator.greater_than(a, b),
            Self::Min => comparator.less_than(a, b),
        }
    }
}
impl Default for Orientation {
    #[inline(always)]
    fn default() -> Self {
        Self::Max
    }
}
impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Max => "max-heap",
            Self::Min => "min-heap",
        })
    }
}

/// A binary heap.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Clone, Debug)]
pub struct BinaryHeap<V, E = ScalarKey, C = NaturalOrder, S = Vec<Node<V>>>
where S: ListStorage<Element = Node<V>>,
{
    storage: S,
    capacity: Capacity,
    orientation: Orientation,
    extractor: E,
    comparator: C,
}

impl<V, E, C, S> BinaryHeap<V, E, C, S>
where
    E: Default,
    C: Default,
    S: ListStorage<Element = Node<V>>,
{
    /// Creates an empty max-heap with the default key extractor and comparator.
    #[inline]
    pub fn new() -> Self {
        Self::with_orientation(Orientation::Max)
    }
    /// Creates an empty heap with the specified orientation.
    #[inline]
    pub fn with_orientation(orientation: Orientation) -> Self {
        Self::with_strategies(orientation, E::default(), C::default())
    }
    /// Creates an empty max-heap which accepts at most `capacity` elements (`0` means unlimited).
    #[inline]
    pub fn with_capacity(capacity: impl Into<Capacity>) -> Self {
        Self::new().limited_to(capacity)
    }
}
impl<V, E, C, S> Default for BinaryHeap<V, E, C, S>
where
    E: Default,
    C: Default,
    S: ListStorage<Element = Node<V>>,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E, C, S> BinaryHeap<V, E, C, S>
where S: ListStorage<Element = Node<V>>,
{
    /// Creates an empty heap with the specified orientation which derives keys with `extractor` and orders them with `comparator`.
    pub fn with_strategies(orientation: Orientation, extractor: E, comparator: C) -> Self {
        Self {
            storage: S::new(),
            capacity: Self::storage_limit(),
            orientation,
            extractor,
            comparator,
        }
    }
    /// Sets the capacity limit of the heap (`0` means unlimited). A fixed-size storage still caps the heap at its own size.
    #[inline]
    pub fn limited_to(mut self, capacity: impl Into<Capacity>) -> Self {
        self.capacity = capacity.into().min(Self::storage_limit());
        self
    }
    /// Returns the orientation of the heap.
    #[inline(always)]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
    /// Returns the capacity limit of the heap.
    #[inline(always)]
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }
    /// Returns the number of elements in the heap.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.storage.len()
    }
    /// Returns `true` if the heap holds no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
    /// Returns the value on top of the heap without removing it.
    #[inline]
    pub fn top(&self) -> Option<&V> {
        self.top_node().map(Node::value)
    }
    /// Returns the node on top of the heap, which also gives access to its key.
    #[inline]
    pub fn top_node(&self) -> Option<&Node<V>> {
        self.storage.get(0)
    }
    /// Returns the position of the first element equal to `value` in storage order, scanning the whole heap.
    pub fn index_of(&self, value: &V) -> Option<usize>
    where V: PartialEq,
    {
        (0..self.len()).find(|&index| self.node_at(index).value() == value)
    }
    /// Returns `true` if an element equal to `value` is in the heap, scanning the whole heap.
    #[inline]
    pub fn contains(&self, value: &V) -> bool
    where V: PartialEq,
    {
        self.index_of(value).is_some()
    }
    /// Collects references to the values in storage order, which is level order of the implicit tree.
    pub fn to_vec(&self) -> Vec<&V> {
        (0..self.len()).map(|index| self.node_at(index).value()).collect()
    }
    /// Removes every element.
    #[inline]
    pub fn clear(&mut self) {
        self.storage.clear()
    }

    fn storage_limit() -> Capacity {
        S::fixed_capacity().map_or(Capacity::UNLIMITED, Capacity::new)
    }
    #[inline(always)]
    fn node_at(&self, index: usize) -> &Node<V> {
        debug_assert!(index < self.len());
        unsafe {
            // SAFETY: every caller passes an index below the length
            self.storage.get_unchecked(index)
        }
    }
}

impl<V, E, C, S> BinaryHeap<V, E, C, S>
where
    C: Comparator,
    S: ListStorage<Element = Node<V>>,
{
    /// Removes the value on top of the heap and returns it.
    #[inline]
    pub fn pop(&mut self) -> Option<V> {
        self.pop_node().map(Node::into_value)
    }
    /// Removes every element and returns the values in the order they would have been popped in: descending for a max-heap, ascending for a min-heap.
    pub fn pop_all(&mut self) -> Vec<V> {
        let mut values = Vec::with_capacity(self.len());
        while let Some(value) = self.pop() {
            values.push(value);
        }
        values
    }
    /// Returns `true` if no element is preferred over its parent.
    pub fn is_valid(&self) -> bool {
        (1..self.len()).all(|index| !self.prefers(index, parent(index)))
    }

    /// Appends an already keyed node and restores the heap order.
    pub(crate) fn push_node(&mut self, node: Node<V>) -> Result<(), Error> {
        self.capacity.check(self.len())?;
        self.storage.push(node);
        self.sift_up(self.len() - 1);
        Ok(())
    }
    pub(crate) fn pop_node(&mut self) -> Option<Node<V>> {
        let last = self.len().checked_sub(1)?;
        self.storage.swap(0, last);
        let top = self.storage.pop()?;
        self.sift_down(0);
        Some(top)
    }
    /// Swaps the top node for `node` with a single sift.
    pub(crate) fn replace_node(&mut self, node: Node<V>) -> Result<Node<V>, Error> {
        let top = self
            .storage
            .get_mut(0)
            .ok_or(Error::EmptyStructure { operation: "replace" })?;
        let old = mem::replace(top, node);
        self.sift_down(0);
        Ok(old)
    }

    #[inline]
    fn prefers(&self, a: usize, b: usize) -> bool {
        self.orientation.prefers(
            &self.comparator,
            self.node_at(a).key(),
            self.node_at(b).key(),
        )
    }
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if !self.prefers(index, parent) {
                break;
            }
            self.storage.swap(index, parent);
            index = parent;
        }
    }
    fn sift_down(&mut self, mut index: usize) {
        let len = self.len();
        loop {
            let (left, right) = (2 * index + 1, 2 * index + 2);
            let mut best = index;
            if left < len && self.prefers(left, best) {
                best = left;
            }
            if right < len && self.prefers(right, best) {
                best = right;
            }
            if best == index {
                break;
            }
            self.storage.swap(index, best);
            index = best;
        }
    }
}

impl<V, E, C, S> BinaryHeap<V, E, C, S>
where
    E: KeyExtractor<V>,
    C: Comparator,
    S: ListStorage<Element = Node<V>>,
{
    /// Adds a value to the heap.
    ///
    /// # Errors
    /// Fails with [`Error::CapacityExceeded`] if the heap is full, or forwards the extractor's error if no key can be derived from the value. The heap is left untouched in both cases.
    ///
    /// [`Error::CapacityExceeded`]: ../enum.Error.html#variant.CapacityExceeded " "
    pub fn push(&mut self, value: V) -> Result<&mut Self, Error> {
        self.capacity.check(self.len())?;
        let node = Node::new(value, &self.extractor)?;
        self.push_node(node)?;
        Ok(self)
    }
    /// Adds every value from the iterator, in order.
    ///
    /// # Errors
    /// Stops at the first value which [`push`] rejects; the values before it stay in the heap.
    ///
    /// [`push`]: #method.push " "
    pub fn push_all(&mut self, values: impl IntoIterator<Item = V>) -> Result<&mut Self, Error> {
        for value in values {
            self.push(value)?;
        }
        Ok(self)
    }
    /// Replaces the value on top of the heap with `value` and returns the old top. Cheaper than a `pop` followed by a `push`.
    ///
    /// # Errors
    /// Fails with [`Error::EmptyStructure`] if the heap is empty, or forwards the extractor's error. The heap is left untouched in both cases.
    ///
    /// [`Error::EmptyStructure`]: ../enum.Error.html#variant.EmptyStructure " "
    pub fn replace(&mut self, value: V) -> Result<V, Error> {
        if self.is_empty() {
            return Err(Error::EmptyStructure { operation: "replace" });
        }
        let node = Node::new(value, &self.extractor)?;
        self.replace_node(node).map(Node::into_value)
    }
}

#[inline(always)]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}
