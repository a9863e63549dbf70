//! Structural predicates. All of them hold vacuously for an empty tree.

use alloc::vec::Vec;
use crate::{
    compare::Comparator,
    node::Key,
    storage::Storage,
    traversal::Order,
};
use super::{BinarySearchTree, NodeRef, TreeNode};

impl<V, E, C, S> BinarySearchTree<V, E, C, S>
where S: Storage<Element = TreeNode<V>, Key = usize>,
{
    /// Returns `true` if every node has either zero or two children.
    pub fn is_full(&self) -> bool {
        self.all_nodes(|node| node.num_children() != 1)
    }
    /// Returns `true` if every node has either zero or two children. Same as [`is_full`].
    ///
    /// [`is_full`]: #method.is_full " "
    #[inline(always)]
    pub fn is_strict(&self) -> bool {
        self.is_full()
    }
    /// Returns `true` if every level except possibly the last one is completely filled and the nodes of the last level are as far left as possible.
    pub fn is_complete(&self) -> bool {
        // Once a missing child has been seen in level order, no node may have children anymore.
        let mut gap = false;
        self.all_nodes(|node| {
            [node.left_child().is_some(), node.right_child().is_some()]
                .iter()
                .all(|&present| {
                    if !present {
                        gap = true;
                    }
                    !(present && gap)
                })
        })
    }
    /// Returns `true` if no node has a right child, i.e. the tree is a chain going left.
    pub fn is_skewed_left(&self) -> bool {
        self.all_nodes(|node| node.right_child().is_none())
    }
    /// Returns `true` if no node has a left child, i.e. the tree is a chain going right.
    pub fn is_skewed_right(&self) -> bool {
        self.all_nodes(|node| node.left_child().is_none())
    }
    /// Returns `true` if the tree is skewed either to the left or to the right.
    #[inline]
    pub fn is_skewed(&self) -> bool {
        self.is_skewed_left() || self.is_skewed_right()
    }

    /// Checks the condition for every node in level order, stopping at the first one which fails it.
    fn all_nodes<'a>(&'a self, mut condition: impl FnMut(NodeRef<'a, V, S>) -> bool) -> bool {
        let mut holds = true;
        self.traverse(Order::LevelOrder, |_, node| {
            holds = condition(node);
            !holds
        });
        holds
    }
}

impl<V, E, C, S> BinarySearchTree<V, E, C, S>
where
    C: Comparator,
    S: Storage<Element = TreeNode<V>, Key = usize>,
{
    /// Checks the ordering at the root only: the largest key of the left subtree must be smaller than the root's key, and the smallest key of the right subtree must not be smaller than it.
    ///
    /// The left side is compared strictly, where a plain "left maximum ≤ root" check would also accept an equal key. Equal keys always descend right on insertion, so the two checks agree on every tree built through [`insert`]; the strict one additionally reports a key equal to the root on the left as misplaced.
    ///
    /// This is a quick sanity check rather than a proof; use [`is_valid`] to check every node.
    ///
    /// [`insert`]: #method.insert " "
    ///
    /// [`is_valid`]: #method.is_valid " "
    pub fn is_bst(&self) -> bool {
        let root = match self.root() {
            Some(root) => root,
            None => return true,
        };
        let left_holds = root.left_child().map_or(true, |left| {
            self.comparator.less_than(left.rightmost().key(), root.key())
        });
        let right_holds = root.right_child().map_or(true, |right| {
            self.comparator
                .greater_than_equals(right.leftmost().key(), root.key())
        });
        left_holds && right_holds
    }
    /// Returns `true` if every key in the left subtree of every node is smaller than the node's key and every key in its right subtree is not.
    pub fn is_valid(&self) -> bool {
        // Lower bounds are inclusive, upper bounds exclusive.
        let mut stack: Vec<(NodeRef<'_, V, S>, Option<&Key>, Option<&Key>)> =
            self.root().map(|root| (root, None, None)).into_iter().collect();
        while let Some((node, lower, upper)) = stack.pop() {
            let key = node.key();
            let below = lower.is_some_and(|lower| self.comparator.less_than(key, lower));
            let above = upper.is_some_and(|upper| self.comparator.greater_than_equals(key, upper));
            if below || above {
                return false;
            }
            stack.extend(node.left_child().map(|left| (left, lower, Some(key))));
            stack.extend(node.right_child().map(|right| (right, Some(key), upper)));
        }
        true
    }
}
