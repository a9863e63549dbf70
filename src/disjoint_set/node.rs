/// An element of a disjoint set forest.
///
/// Created by the disjoint set internally and only publicly exposed so that storages' generic arguments could be specified and representatives could be inspected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetNode<V> {
    pub(super) key: usize,
    pub(super) value: V,
    pub(super) parent: usize,
    pub(super) rank: usize,
}
impl<V> SetNode<V> {
    #[inline(always)]
    pub(super) fn singleton(key: usize, value: V) -> Self {
        Self {
            key,
            value,
            parent: key,
            rank: 0,
        }
    }
    /// Returns the position of the node in the forest, which never changes.
    #[inline(always)]
    pub fn key(&self) -> usize {
        self.key
    }
    /// Returns the value stored in the node.
    #[inline(always)]
    pub fn value(&self) -> &V {
        &self.value
    }
    /// Returns the position of the parent node, which is the node's own position for representatives.
    #[inline(always)]
    pub fn parent(&self) -> usize {
        self.parent
    }
    /// Returns the rank of the node, an upper bound on the height of the tree under it.
    #[inline(always)]
    pub fn rank(&self) -> usize {
        self.rank
    }
    /// Returns `true` if the node is the representative of its set.
    #[inline(always)]
    pub fn is_representative(&self) -> bool {
        self.parent == self.key
    }
}
