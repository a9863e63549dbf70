use core::mem;
use super::{ListStorage, super::Storage};

/// A `Vec` wrapped in [`SparseStorage`].
///
/// [`SparseStorage`]: struct.SparseStorage.html " "
pub type Vec<T> = SparseStorage<T, alloc::vec::Vec<Slot<T>>>;

/// An arena built on top of a list: removed elements leave a hole behind instead of shifting their successors, so the positions of the remaining elements never change.
///
/// Holes form a stack threaded through the slots themselves. `add` fills the most recently punched hole first and only grows the list when there are none left.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SparseStorage<E, S>
where S: ListStorage<Element = Slot<E>> {
    slots: S,
    /// The most recently punched hole.
    free: Option<usize>,
    holes: usize,
}
impl<E, S> SparseStorage<E, S>
where S: ListStorage<Element = Slot<E>> {
    /// Returns the number of holes waiting to be reused.
    #[inline(always)]
    pub fn num_holes(&self) -> usize {
        self.holes
    }
    /// Returns `true` if there are no holes.
    #[inline(always)]
    pub fn is_dense(&self) -> bool {
        self.holes == 0
    }
}

static HOLE_PANIC_MSG: &str = "\
the element at the specified index was a hole in the sparse storage";

unsafe impl<E, S> Storage for SparseStorage<E, S>
where S: ListStorage<Element = Slot<E>> {
    type Key = usize;
    type Element = E;

    #[inline(always)]
    fn new() -> Self {
        Self { slots: S::new(), free: None, holes: 0 }
    }
    fn add(&mut self, element: E) -> usize {
        if let Some(index) = self.free {
            if let Some(slot) = self.slots.get_mut(index) {
                self.free = slot.fill(element);
                self.holes -= 1;
                return index;
            }
        }
        self.slots.push(Slot::element(element));
        self.slots.len() - 1
    }
    #[track_caller]
    fn remove(&mut self, key: &usize) -> E {
        let free = self.free;
        match self.slots.get_mut(*key).and_then(|slot| slot.punch(free)) {
            Some(element) => {
                self.free = Some(*key);
                self.holes += 1;
                element
            }
            None => panic!("{}", HOLE_PANIC_MSG),
        }
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.slots.len() - self.holes
    }
    #[inline]
    fn get(&self, key: &usize) -> Option<&E> {
        self.slots.get(*key).and_then(Slot::as_element)
    }
    #[inline]
    fn get_mut(&mut self, key: &usize) -> Option<&mut E> {
        self.slots.get_mut(*key).and_then(Slot::as_element_mut)
    }
    #[inline]
    #[track_caller]
    unsafe fn get_unchecked(&self, key: &usize) -> &E {
        match self.slots.get_unchecked(*key).as_element() {
            Some(element) => element,
            None => panic!("{}", HOLE_PANIC_MSG),
        }
    }
    #[inline]
    #[track_caller]
    unsafe fn get_unchecked_mut(&mut self, key: &usize) -> &mut E {
        match self.slots.get_unchecked_mut(*key).as_element_mut() {
            Some(element) => element,
            None => panic!("{}", HOLE_PANIC_MSG),
        }
    }
    #[inline]
    fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.holes = 0;
    }
    #[inline(always)]
    fn fixed_capacity() -> Option<usize> {
        S::fixed_capacity()
    }
}

/// A slot inside a sparse storage: either an element or a hole linking to the next hole.
///
/// Only public so that the list type of a `SparseStorage` can be spelled out, as in `ArrayVec<[SparseStorageSlot<TreeNode<i32>>; 16]>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Slot<T>(SlotInner<T>);

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum SlotInner<T> {
    Element(T),
    Hole { next: Option<usize> },
}

impl<T> Slot<T> {
    #[inline(always)]
    const fn element(element: T) -> Self {
        Self(SlotInner::Element(element))
    }
    #[inline(always)]
    fn as_element(&self) -> Option<&T> {
        match &self.0 {
            SlotInner::Element(element) => Some(element),
            SlotInner::Hole { .. } => None,
        }
    }
    #[inline(always)]
    fn as_element_mut(&mut self) -> Option<&mut T> {
        match &mut self.0 {
            SlotInner::Element(element) => Some(element),
            SlotInner::Hole { .. } => None,
        }
    }
    /// Puts an element into a hole, returning the hole it linked to. Leaves an occupied slot untouched and returns `None`.
    fn fill(&mut self, element: T) -> Option<usize> {
        match self.0 {
            SlotInner::Hole { next } => {
                self.0 = SlotInner::Element(element);
                next
            }
            SlotInner::Element(..) => None,
        }
    }
    /// Takes the element out, leaving a hole which links to `next`. Returns `None` for a hole.
    fn punch(&mut self, next: Option<usize>) -> Option<T> {
        if self.as_element().is_none() {
            return None;
        }
        match mem::replace(&mut self.0, SlotInner::Hole { next }) {
            SlotInner::Element(element) => Some(element),
            SlotInner::Hole { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_hole_is_filled_first() {
        let mut storage: Vec<char> = Storage::new();
        let keys: alloc::vec::Vec<usize> = "abcde".chars().map(|c| storage.add(c)).collect();
        assert_eq!(keys, [0, 1, 2, 3, 4]);
        assert_eq!(storage.remove(&1), 'b');
        assert_eq!(storage.remove(&3), 'd');
        assert_eq!(storage.len(), 3);
        assert_eq!(storage.num_holes(), 2);
        assert!(!storage.contains_key(&1));
        assert_eq!(storage.get(&3), None);
        assert_eq!(storage.get(&4), Some(&'e'));

        assert_eq!(storage.add('x'), 3);
        assert_eq!(storage.add('y'), 1);
        assert!(storage.is_dense());
        assert_eq!(storage.add('z'), 5);
        assert_eq!(storage.get(&1), Some(&'y'));
        assert_eq!(storage.len(), 6);
    }

    #[test]
    fn clear_forgets_holes() {
        let mut storage: Vec<u8> = Storage::new();
        storage.add(1);
        storage.add(2);
        storage.remove(&0);
        storage.clear();
        assert!(storage.is_empty());
        assert!(storage.is_dense());
        assert_eq!(storage.add(3), 0);
    }

    #[test]
    fn fixed_size_is_forwarded() {
        type Fixed = SparseStorage<u8, arrayvec::ArrayVec<[Slot<u8>; 4]>>;
        assert_eq!(<Fixed as Storage>::fixed_capacity(), Some(4));
        assert_eq!(<Vec<u8> as Storage>::fixed_capacity(), None);
    }

    #[test]
    #[should_panic]
    fn removing_a_hole_panics() {
        let mut storage: Vec<u8> = Storage::new();
        storage.add(1);
        storage.remove(&0);
        storage.remove(&0);
    }
}
