use alloc::{vec::Vec, collections::VecDeque};
use super::ListStorage;

unsafe impl<T> ListStorage for Vec<T> {
    type Element = T;

    #[inline(always)]
    fn new() -> Self {
        Self::new()
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.len()
    }
    #[inline(always)]
    fn push(&mut self, element: T) {
        self.push(element)
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    #[inline]
    fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            None
        } else {
            Some(self.remove(0))
        }
    }
    #[inline(always)]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
    #[inline(always)]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }
    #[inline(always)]
    unsafe fn get_unchecked(&self, index: usize) -> &T {
        self.as_slice().get_unchecked(index)
    }
    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
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

unsafe impl<T> ListStorage for VecDeque<T> {
    type Element = T;

    #[inline(always)]
    fn new() -> Self {
        Self::new()
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.len()
    }
    #[inline(always)]
    fn push(&mut self, element: T) {
        self.push_back(element)
    }
    #[inline(always)]
    fn pop(&mut self) -> Option<T> {
        self.pop_back()
    }
    #[inline(always)]
    fn pop_front(&mut self) -> Option<T> {
        self.pop_front()
    }
    #[inline(always)]
    fn get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }
    #[inline(always)]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.get_mut(index)
    }
    #[inline(always)]
    unsafe fn get_unchecked(&self, index: usize) -> &T {
        // No unchecked getter on VecDeque; the optimizer drops the check
        match self.get(index) {
            Some(element) => element,
            None => core::hint::unreachable_unchecked(),
        }
    }
    #[inline(always)]
    unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Some(element) => element,
            None => core::hint::unreachable_unchecked(),
        }
    }
    #[inline(always)]
    fn swap(&mut self, a: usize, b: usize) {
        self.swap(a, b)
    }
    #[inline(always)]
    fn clear(&mut self) {
        self.clear()
    }
}
