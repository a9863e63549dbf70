use alloc::vec::Vec;
use crate::{
    compare::{Comparator, NaturalOrder},
    node::{Key, Node, Scalar},
    storage::ListStorage,
    Capacity, Error,
};
use super::{BinaryHeap, Orientation};

/// The key extractor of a [`PriorityQueue`]'s heap. Priorities are supplied along with each item, so no key is ever derived from the item itself.
///
/// [`PriorityQueue`]: struct.PriorityQueue.html " "
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ExplicitPriority;

/// A queue which hands out items in order of a priority given when they were enqueued.
///
/// By default, the item with the highest priority is dequeued first; use [`lowest_first`] for the opposite. Items of equal priority come out in no particular order.
///
/// # Example
/// ```rust
/// use kindling::binary_heap::PriorityQueue;
///
/// let mut tasks = PriorityQueue::<&str>::new();
/// tasks.enqueue("water the plants", 1).unwrap();
/// tasks.enqueue("put out the fire", 10).unwrap();
/// assert_eq!(tasks.dequeue(), Some("put out the fire"));
/// assert_eq!(tasks.peek_priority().and_then(|p| p.as_number()), Some(1.0));
/// ```
///
/// [`lowest_first`]: #method.lowest_first " "
#[derive(Clone, Debug)]
pub struct PriorityQueue<T, C = NaturalOrder, S = Vec<Node<T>>>
where S: ListStorage<Element = Node<T>>,
{
    heap: BinaryHeap<T, ExplicitPriority, C, S>,
}
impl<T, C, S> PriorityQueue<T, C, S>
where
    C: Default,
    S: ListStorage<Element = Node<T>>,
{
    /// Creates an empty queue which dequeues the highest priority first.
    #[inline]
    pub fn new() -> Self {
        Self::with_comparator(Orientation::Max, C::default())
    }
    /// Creates an empty queue which dequeues the lowest priority first.
    #[inline]
    pub fn lowest_first() -> Self {
        Self::with_comparator(Orientation::Min, C::default())
    }
}
impl<T, C, S> Default for PriorityQueue<T, C, S>
where
    C: Default,
    S: ListStorage<Element = Node<T>>,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
impl<T, C, S> PriorityQueue<T, C, S>
where S: ListStorage<Element = Node<T>>,
{
    /// Creates an empty queue with the specified orientation which orders priorities with `comparator`.
    #[inline]
    pub fn with_comparator(orientation: Orientation, comparator: C) -> Self {
        Self {
            heap: BinaryHeap::with_strategies(orientation, ExplicitPriority, comparator),
        }
    }
    /// Sets the capacity limit of the queue (`0` means unlimited).
    #[inline]
    pub fn limited_to(self, capacity: impl Into<Capacity>) -> Self {
        Self {
            heap: self.heap.limited_to(capacity),
        }
    }
    /// Returns the item which will be dequeued next.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.heap.top()
    }
    /// Returns the priority of the item which will be dequeued next.
    #[inline]
    pub fn peek_priority(&self) -> Option<&Key> {
        self.heap.top_node().map(Node::key)
    }
    /// Returns the number of items in the queue.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.heap.len()
    }
    /// Returns `true` if the queue holds no items.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
    /// Returns the capacity limit of the queue.
    #[inline(always)]
    pub fn capacity(&self) -> Capacity {
        self.heap.capacity()
    }
    /// Returns whether the highest or the lowest priority is dequeued first.
    #[inline(always)]
    pub fn orientation(&self) -> Orientation {
        self.heap.orientation()
    }
    /// Removes every item.
    #[inline]
    pub fn clear(&mut self) {
        self.heap.clear()
    }
}
impl<T, C, S> PriorityQueue<T, C, S>
where
    C: Comparator,
    S: ListStorage<Element = Node<T>>,
{
    /// Adds an item with the specified priority.
    ///
    /// # Errors
    /// Fails with [`Error::CapacityExceeded`] if the queue is full, or with [`Error::InvalidKey`] or [`Error::InvalidValue`] if the priority is not a valid key, such as `NaN` or an empty string.
    ///
    /// [`Error::CapacityExceeded`]: ../enum.Error.html#variant.CapacityExceeded " "
    /// [`Error::InvalidKey`]: ../enum.Error.html#variant.InvalidKey " "
    /// [`Error::InvalidValue`]: ../enum.Error.html#variant.InvalidValue " "
    pub fn enqueue(&mut self, item: T, priority: impl Scalar) -> Result<&mut Self, Error> {
        let priority = priority.to_key()?;
        self.heap.push_node(Node::from_parts(priority, item))?;
        Ok(self)
    }
    /// Removes the next item and returns it.
    #[inline]
    pub fn dequeue(&mut self) -> Option<T> {
        self.heap.pop()
    }
    /// Removes the next item and returns it together with its priority.
    #[inline]
    pub fn dequeue_with_priority(&mut self) -> Option<(Key, T)> {
        self.heap.pop_node().map(Node::into_parts)
    }
    /// Replaces the next item with `item` of the specified priority and returns the old one.
    ///
    /// # Errors
    /// Fails with [`Error::EmptyStructure`] if the queue is empty, or if the priority is not a valid key.
    ///
    /// [`Error::EmptyStructure`]: ../enum.Error.html#variant.EmptyStructure " "
    pub fn replace(&mut self, item: T, priority: impl Scalar) -> Result<T, Error> {
        if self.is_empty() {
            return Err(Error::EmptyStructure { operation: "replace" });
        }
        let priority = priority.to_key()?;
        self.heap
            .replace_node(Node::from_parts(priority, item))
            .map(Node::into_value)
    }
}
