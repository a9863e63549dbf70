//! A first-in, first-out queue over any list storage.

use alloc::{collections::VecDeque, vec::Vec};
use crate::{storage::ListStorage, Capacity, Error};

/// A FIFO queue.
///
/// Used by the binary search tree for level-order traversal and level extraction, and usable on its own. Backed by a `VecDeque` unless specified otherwise; any [`ListStorage`] works, though only storages with a cheap `pop_front` keep `dequeue` constant-time.
///
/// [`ListStorage`]: ../storage/trait.ListStorage.html " "
#[derive(Clone, Debug, Default)]
pub struct Queue<T, S = VecDeque<T>>
where S: ListStorage<Element = T>,
{
    storage: S,
    capacity: Capacity,
}
impl<T, S> Queue<T, S>
where S: ListStorage<Element = T>,
{
    /// Creates an empty queue without a capacity limit.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(Capacity::UNLIMITED)
    }
    /// Creates an empty queue which accepts at most `capacity` elements (`0` means unlimited).
    #[inline]
    pub fn with_capacity(capacity: impl Into<Capacity>) -> Self {
        let capacity = capacity.into();
        let fixed = S::fixed_capacity().map_or(Capacity::UNLIMITED, Capacity::new);
        Self {
            storage: S::new(),
            capacity: capacity.min(fixed),
        }
    }
    /// Appends an element to the back of the queue.
    ///
    /// # Errors
    /// Fails with [`Error::CapacityExceeded`] if the queue is full.
    ///
    /// [`Error::CapacityExceeded`]: ../enum.Error.html#variant.CapacityExceeded " "
    pub fn enqueue(&mut self, element: T) -> Result<&mut Self, Error> {
        self.capacity.check(self.storage.len())?;
        self.storage.push(element);
        Ok(self)
    }
    /// Appends an element while ignoring the capacity limit. Only for queues created with `new`.
    #[inline]
    pub(crate) fn enqueue_unbounded(&mut self, element: T) {
        debug_assert!(self.capacity.is_unlimited());
        self.storage.push(element);
    }
    /// Removes and returns the element at the front of the queue, or `None` if it is empty.
    #[inline]
    pub fn dequeue(&mut self) -> Option<T> {
        self.storage.pop_front()
    }
    /// Returns the element at the front of the queue without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.storage.get(0)
    }
    /// Returns the number of elements in the queue.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.storage.len()
    }
    /// Returns `true` if the queue holds no elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
    /// Returns the capacity limit of the queue.
    #[inline(always)]
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }
    /// Removes every element from the queue.
    #[inline]
    pub fn clear(&mut self) {
        self.storage.clear()
    }
    /// Dequeues every element, front to back.
    pub fn drain_to_vec(&mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        while let Some(element) = self.dequeue() {
            out.push(element);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrayvec::ArrayVec;

    #[test]
    fn first_in_first_out() {
        let mut queue: Queue<u32> = Queue::new();
        queue.enqueue(1).unwrap().enqueue(2).unwrap().enqueue(3).unwrap();
        assert_eq!(queue.peek(), Some(&1));
        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.drain_to_vec(), [2, 3]);
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn capacity_is_enforced() {
        let mut queue: Queue<&str> = Queue::with_capacity(1);
        queue.enqueue("a").unwrap();
        assert!(matches!(queue.enqueue("b"), Err(Error::CapacityExceeded { capacity: 1 })));
        queue.dequeue();
        assert!(queue.enqueue("c").is_ok());
    }

    #[test]
    fn fixed_storage_caps_the_queue() {
        let mut queue: Queue<u8, ArrayVec<[u8; 2]>> = Queue::new();
        assert_eq!(queue.capacity(), Capacity::new(2));
        queue.enqueue(1).unwrap().enqueue(2).unwrap();
        assert!(queue.enqueue(3).is_err());
        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));
    }
}
