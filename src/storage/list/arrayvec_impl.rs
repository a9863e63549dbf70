use arrayvec::{ArrayVec, Array};
use super::ListStorage;

unsafe impl<A: Array> ListStorage for ArrayVec<A> {
    type Element = A::Item;

    #[inline(always)]
    fn new() -> Self {
        Self::new()
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.len()
    }
    /// # Panics
    /// Panics if the array is already full.
    #[inline(always)]
    #[track_caller]
    fn push(&mut self, element: A::Item) {
        self.push(element)
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<A::Item> {
        self.pop()
    }
    #[inline]
    fn pop_front(&mut self) -> Option<A::Item> {
        self.pop_at(0)
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
    #[inline(always)]
    fn fixed_capacity() -> Option<usize> {
        Some(A::CAPACITY)
    }
}
