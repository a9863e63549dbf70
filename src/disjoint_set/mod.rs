//! Disjoint sets, also known as union-find.
//!
//! Every inserted value starts out in a set of its own. Sets are merged with [`union`] and queried with [`find`], which returns the *representative* of the set a value belongs to. Lookups compress the paths they walk and merges attach the shallower tree under the deeper one, so both are effectively constant-time over any sequence of operations.
//!
//! Values are identified by their [`Key`]: inserting two values with the same key is rejected.
//!
//! # Example
//! ```rust
//! use kindling::disjoint_set::DisjointSet;
//!
//! let mut set = DisjointSet::<&str>::new();
//! set.insert_all(["a", "b", "c", "d"]).unwrap();
//! set.union(&"a", &"b").union(&"c", &"d").union(&"b", &"d");
//! assert!(set.is_connected(&"a", &"c"));
//! assert_eq!(set.set_count(), 1);
//! ```
//!
//! [`union`]: struct.DisjointSet.html#method.union " "
//! [`find`]: struct.DisjointSet.html#method.find " "
//! [`Key`]: ../node/struct.Key.html " "

use alloc::{collections::BTreeMap, vec::Vec};
use crate::{
    node::{Key, KeyExtractor, ScalarKey},
    storage::ListStorage,
    Capacity, Error,
};

mod node;
pub use node::SetNode;

/// A disjoint set forest.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Clone, Debug)]
pub struct DisjointSet<V, E = ScalarKey, S = Vec<SetNode<V>>>
where S: ListStorage<Element = SetNode<V>>,
{
    cache: BTreeMap<Key, usize>,
    items: S,
    capacity: Capacity,
    extractor: E,
}

impl<V, E, S> DisjointSet<V, E, S>
where
    E: Default,
    S: ListStorage<Element = SetNode<V>>,
{
    /// Creates an empty disjoint set with the default key extractor.
    #[inline]
    pub fn new() -> Self {
        Self::with_extractor(E::default())
    }
    /// Creates an empty disjoint set which accepts at most `capacity` values (`0` means unlimited).
    #[inline]
    pub fn with_capacity(capacity: impl Into<Capacity>) -> Self {
        Self::new().limited_to(capacity)
    }
}
impl<V, E, S> Default for DisjointSet<V, E, S>
where
    E: Default,
    S: ListStorage<Element = SetNode<V>>,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E, S> DisjointSet<V, E, S>
where S: ListStorage<Element = SetNode<V>>,
{
    /// Creates an empty disjoint set which derives keys with `extractor`.
    pub fn with_extractor(extractor: E) -> Self {
        Self {
            cache: BTreeMap::new(),
            items: S::new(),
            capacity: Self::storage_limit(),
            extractor,
        }
    }
    /// Sets the capacity limit of the disjoint set (`0` means unlimited). A fixed-size storage still caps it at its own size.
    #[inline]
    pub fn limited_to(mut self, capacity: impl Into<Capacity>) -> Self {
        self.capacity = capacity.into().min(Self::storage_limit());
        self
    }
    /// Returns the number of values inserted.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.items.len()
    }
    /// Returns `true` if no values were inserted.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    /// Returns the capacity limit of the disjoint set.
    #[inline(always)]
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }
    /// Returns the number of disjoint sets, which is the number of representatives.
    pub fn set_count(&self) -> usize {
        (0..self.len())
            .filter(|&index| self.item(index).is_representative())
            .count()
    }
    /// Removes every value.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.items.clear();
    }

    fn storage_limit() -> Capacity {
        S::fixed_capacity().map_or(Capacity::UNLIMITED, Capacity::new)
    }
    #[inline(always)]
    fn item(&self, index: usize) -> &SetNode<V> {
        debug_assert!(index < self.len());
        unsafe {
            // SAFETY: nodes are never removed individually, so every parent link and every cached
            // position is below the length
            self.items.get_unchecked(index)
        }
    }
    #[inline(always)]
    fn item_mut(&mut self, index: usize) -> &mut SetNode<V> {
        debug_assert!(index < self.len());
        unsafe {
            // SAFETY: as above
            self.items.get_unchecked_mut(index)
        }
    }
    /// Returns the position of the representative of the node at `index`, pointing every node on the way straight at it.
    fn find_root(&mut self, index: usize) -> usize {
        let mut root = index;
        while !self.item(root).is_representative() {
            root = self.item(root).parent;
        }
        let (mut current, mut relinked) = (index, 0_usize);
        while self.item(current).parent != root {
            let next = self.item(current).parent;
            self.item_mut(current).parent = root;
            current = next;
            relinked += 1;
        }
        if relinked > 0 {
            log::trace!("compressed the path from {} to its representative {}, relinking {} nodes", index, root, relinked);
        }
        root
    }
    fn link(&mut self, a: usize, b: usize) {
        let (rank_a, rank_b) = (self.item(a).rank, self.item(b).rank);
        let (parent, child) = if rank_a < rank_b { (b, a) } else { (a, b) };
        self.item_mut(child).parent = parent;
        if rank_a == rank_b {
            self.item_mut(parent).rank += 1;
        }
        log::trace!("merged the set represented by {} into the one represented by {}", child, parent);
    }
}

impl<V, E, S> DisjointSet<V, E, S>
where
    E: KeyExtractor<V>,
    S: ListStorage<Element = SetNode<V>>,
{
    /// Adds a value to the disjoint set, in a set of its own.
    ///
    /// # Errors
    /// Fails with [`Error::CapacityExceeded`] if the disjoint set is full, with [`Error::DuplicateKey`] if a value with the same key was already inserted, or forwards the extractor's error. The disjoint set is left untouched in all cases.
    ///
    /// [`Error::CapacityExceeded`]: ../enum.Error.html#variant.CapacityExceeded " "
    /// [`Error::DuplicateKey`]: ../enum.Error.html#variant.DuplicateKey " "
    pub fn insert(&mut self, value: V) -> Result<&mut Self, Error> {
        self.capacity.check(self.len())?;
        let key = self.extractor.extract_key(&value)?;
        if self.cache.contains_key(&key) {
            return Err(Error::DuplicateKey { key });
        }
        let index = self.len();
        self.items.push(SetNode::singleton(index, value));
        self.cache.insert(key, index);
        Ok(self)
    }
    /// Inserts every value from the iterator, in order.
    ///
    /// # Errors
    /// Stops at the first value which [`insert`] rejects; the values before it stay in the disjoint set.
    ///
    /// [`insert`]: #method.insert " "
    pub fn insert_all(&mut self, values: impl IntoIterator<Item = V>) -> Result<&mut Self, Error> {
        for value in values {
            self.insert(value)?;
        }
        Ok(self)
    }
    /// Returns `true` if a value with the key of `value` was inserted.
    #[inline]
    pub fn contains(&self, value: &V) -> bool {
        self.index_of(value).is_some()
    }
    /// Returns the representative of the set containing `value`, or `None` if it was never inserted.
    pub fn find(&mut self, value: &V) -> Option<&SetNode<V>> {
        let index = self.index_of(value)?;
        let root = self.find_root(index);
        Some(self.item(root))
    }
    /// Merges the sets containing `a` and `b`. Does nothing if either was never inserted or both already are in the same set.
    ///
    /// The representative of the set with the lower rank is attached under the other one; when the ranks are equal, `b`'s representative goes under `a`'s.
    pub fn union(&mut self, a: &V, b: &V) -> &mut Self {
        if let (Some(a), Some(b)) = (self.index_of(a), self.index_of(b)) {
            let (a, b) = (self.find_root(a), self.find_root(b));
            if a != b {
                self.link(a, b);
            }
        }
        self
    }
    /// Returns `true` if both values were inserted and belong to the same set.
    pub fn is_connected(&mut self, a: &V, b: &V) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(a), Some(b)) => self.find_root(a) == self.find_root(b),
            _ => false,
        }
    }
    /// Returns `true` unless both values were inserted and belong to the same set.
    #[inline]
    pub fn is_disjoint(&mut self, a: &V, b: &V) -> bool {
        !self.is_connected(a, b)
    }
    /// Returns every set as a list of its values.
    ///
    /// Values appear in insertion order within each set, and the sets are ordered by the position of their first inserted value.
    pub fn groups(&mut self) -> Vec<Vec<&V>> {
        let mut slots: BTreeMap<usize, usize> = BTreeMap::new();
        let mut membership = Vec::with_capacity(self.len());
        for index in 0..self.len() {
            let root = self.find_root(index);
            let next_slot = slots.len();
            membership.push(*slots.entry(root).or_insert(next_slot));
        }
        let this = &*self;
        let mut groups: Vec<Vec<&V>> = (0..slots.len()).map(|_| Vec::new()).collect();
        for (index, slot) in membership.into_iter().enumerate() {
            groups[slot].push(this.item(index).value());
        }
        groups
    }

    #[inline]
    fn index_of(&self, value: &V) -> Option<usize> {
        let key = self.extractor.extract_key(value).ok()?;
        self.cache.get(&key).copied()
    }
}

#[cfg(test)]
mod tests;
