use crate::node::{Key, Node};

/// A node of a binary search tree.
///
/// Created by the tree internally and only publicly exposed so that tree storages' generic arguments could be specified. Child links are keys into the tree's storage; there are no parent links.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeNode<V> {
    pub(super) node: Node<V>,
    pub(super) left: Option<usize>,
    pub(super) right: Option<usize>,
}
impl<V> TreeNode<V> {
    #[inline(always)]
    pub(super) fn leaf(node: Node<V>) -> Self {
        Self {
            node,
            left: None,
            right: None,
        }
    }
    /// Returns the key the node is ordered by.
    #[inline(always)]
    pub fn key(&self) -> &Key {
        self.node.key()
    }
    /// Returns the value stored in the node.
    #[inline(always)]
    pub fn value(&self) -> &V {
        self.node.value()
    }
    /// Returns the storage key of the left child.
    #[inline(always)]
    pub fn left(&self) -> Option<usize> {
        self.left
    }
    /// Returns the storage key of the right child.
    #[inline(always)]
    pub fn right(&self) -> Option<usize> {
        self.right
    }
    /// Returns the number of children, from 0 to 2.
    #[inline]
    pub fn num_children(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }
}
