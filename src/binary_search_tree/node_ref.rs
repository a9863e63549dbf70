use core::fmt::{self, Formatter, Debug};
use arrayvec::ArrayVec;
use crate::{
    node::{Key, Node},
    storage::{Storage, DefaultStorage},
};
use super::TreeNode;

/// A reference to a node in a binary search tree.
///
/// Since this type does not point to the node directly, but rather the storage the node is in and the key of the node in the storage, it can be used to walk down the tree.
pub struct NodeRef<'a, V, S = DefaultStorage<TreeNode<V>>>
where S: Storage<Element = TreeNode<V>, Key = usize>,
{
    storage: &'a S,
    key: usize,
}
impl<'a, V: 'a, S> NodeRef<'a, V, S>
where S: Storage<Element = TreeNode<V>, Key = usize>,
{
    /// Creates a new `NodeRef` pointing to a key which is known to be present, such as a child link.
    #[inline(always)]
    pub(super) fn new_linked(storage: &'a S, key: usize) -> Self {
        debug_assert!(
            storage.contains_key(&key),
            "\
debug key check failed: tried to reference key {:?} which is not present in the storage",
            key,
        );
        Self { storage, key }
    }
    /// Returns the raw storage key for the node.
    #[inline(always)]
    pub fn raw_key(&self) -> usize {
        self.key
    }
    /// Returns the key the node is ordered by.
    #[inline(always)]
    pub fn key(&self) -> &'a Key {
        self.tree_node().key()
    }
    /// Returns the value stored in the node.
    #[inline(always)]
    pub fn value(&self) -> &'a V {
        self.tree_node().value()
    }
    /// Returns the key and value of the node.
    #[inline(always)]
    pub fn node(&self) -> &'a Node<V> {
        &self.tree_node().node
    }
    /// Returns a reference to the left child, or `None` if there is none.
    #[inline]
    pub fn left_child(&self) -> Option<Self> {
        self.tree_node()
            .left
            .map(|key| Self::new_linked(self.storage, key))
    }
    /// Returns a reference to the right child, or `None` if there is none.
    #[inline]
    pub fn right_child(&self) -> Option<Self> {
        self.tree_node()
            .right
            .map(|key| Self::new_linked(self.storage, key))
    }
    /// Returns references to the children which are present, left first.
    pub fn children(&self) -> ArrayVec<[Self; 2]> {
        let mut children = ArrayVec::new();
        children.extend(self.left_child());
        children.extend(self.right_child());
        children
    }
    /// Returns the number of children, from 0 to 2.
    #[inline(always)]
    pub fn num_children(&self) -> usize {
        self.tree_node().num_children()
    }
    /// Returns `true` if the node has no children.
    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        self.num_children() == 0
    }
    /// Returns `true` if the node has exactly two children.
    #[inline(always)]
    pub fn is_full_branch(&self) -> bool {
        self.num_children() == 2
    }
    /// Returns a reference to the leftmost node of the subtree rooted here, which holds its smallest key.
    pub fn leftmost(&self) -> Self {
        let mut current = *self;
        while let Some(left) = current.left_child() {
            current = left;
        }
        current
    }
    /// Returns a reference to the rightmost node of the subtree rooted here, which holds its largest key.
    pub fn rightmost(&self) -> Self {
        let mut current = *self;
        while let Some(right) = current.right_child() {
            current = right;
        }
        current
    }

    #[inline(always)]
    fn tree_node(&self) -> &'a TreeNode<V> {
        unsafe {
            // SAFETY: all existing NodeRefs are guaranteed to not be dangling
            self.storage.get_unchecked(&self.key)
        }
    }
}
impl<V, S> Copy for NodeRef<'_, V, S>
where S: Storage<Element = TreeNode<V>, Key = usize>,
{}
impl<V, S> Clone for NodeRef<'_, V, S>
where S: Storage<Element = TreeNode<V>, Key = usize>,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}
impl<V, S> PartialEq for NodeRef<'_, V, S>
where S: Storage<Element = TreeNode<V>, Key = usize>,
{
    /// Two references are equal if they point at the same node of the same tree.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.storage, other.storage) && self.key == other.key
    }
}
impl<V, S> Eq for NodeRef<'_, V, S>
where S: Storage<Element = TreeNode<V>, Key = usize>,
{}
impl<'a, V: Debug + 'a, S> Debug for NodeRef<'a, V, S>
where S: Storage<Element = TreeNode<V>, Key = usize>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("raw_key", &self.key)
            .field("key", self.key())
            .field("value", self.value())
            .finish()
    }
}
