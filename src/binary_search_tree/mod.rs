//! Unbalanced binary search trees.
//!
//! Values are ordered by their [`Key`], as decided by the tree's [`Comparator`]. Smaller keys go to the left, while equal and larger keys go to the right, so duplicates are kept and end up in the right subtree of the first equal key. No rebalancing is performed: inserting keys in ascending order produces a tree skewed to the right, which the structural predicates will report as such.
//!
//! Every walk over the tree uses an explicit stack or queue rather than recursion, so degenerate trees of any size can be traversed.
//!
//! # Example
//! ```rust
//! use kindling::{binary_search_tree::BinarySearchTree, Order};
//!
//! // The turbofish is needed to state that we are using the default key extractor, comparator and
//! // storage instead of asking the compiler to infer them, which would be impossible.
//! let mut tree = BinarySearchTree::<i32>::new();
//! tree.insert_all([5, 3, 8, 1, 4, 10]).unwrap();
//!
//! assert_eq!(tree.to_vec(Order::InOrder), [&1, &3, &4, &5, &8, &10]);
//! assert_eq!(tree.depth(&4), 2);
//! assert_eq!(tree.height(&3), 1);
//!
//! // Removing a node with two children moves its in-order successor into its place.
//! assert!(tree.remove(&5));
//! assert_eq!(tree.root().map(|root| *root.value()), Some(8));
//! assert!(tree.is_valid());
//! ```
//!
//! [`Key`]: ../node/struct.Key.html " "
//! [`Comparator`]: ../compare/trait.Comparator.html " "

mod base;
mod node;
mod node_ref;
mod predicates;
mod traverse;

pub use base::BinarySearchTree;
pub use node::TreeNode;
pub use node_ref::NodeRef;

#[cfg(test)]
mod tests;
