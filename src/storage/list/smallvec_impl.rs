use smallvec::{SmallVec, Array};
use super::ListStorage;

// Spills onto the heap past the inline size, so it never reports a fixed capacity.
unsafe impl<A: Array> ListStorage for SmallVec<A> {
    type Element = A::Item;

    #[inline(always)]
    fn new() -> Self {
        Self::new()
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.len()
    }
    #[inline(always)]
    fn push(&mut self, element: A::Item) {
        self.push(element)
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<A::Item> {
        self.pop()
    }
    #[inline]
    fn pop_front(&mut self) -> Option<A::Item> {
        if self.is_empty() {
            None
        } else {
            Some(self.remove(0))
        }
    }
    #[inline(always)]
    fn get(&self, index: usize) -> Option<&A::Item> {
        self.as_slice().get(index)
    }
    #[inline(always)]
    fn get_mut(&mut self, index: usize) -> Option<&mut A::Item> {
        self.as_mut_slice().get_mut(index)
    }
    #[inline(always)]
    unsafe fn get_unchecked(&self, index: usize) -> &A::Item {
        self.as_slice().get_unchecked(index)
    }
    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut A::Item {
        self.as_mut_slice().get_unchecked_mut(index)
    }
    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b)
    }
    #[inline(always)]
    fn clear(&mut self) {
        self.clear()
    }
}
