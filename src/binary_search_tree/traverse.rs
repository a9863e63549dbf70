use alloc::vec::Vec;
use crate::{
    node::Key,
    queue::Queue,
    storage::Storage,
    traversal::{Order, Visit},
    Error,
};
use super::{BinarySearchTree, NodeRef, TreeNode};

impl<V, E, C, S> BinarySearchTree<V, E, C, S>
where S: Storage<Element = TreeNode<V>, Key = usize>,
{
    /// Walks the tree in the specified order, calling `visit` with the key of every node and a reference to it.
    ///
    /// The callback may return [`Visit::Stop`] (or `true`) to cut the walk short, with the effect depending on the order:
    /// - `PreOrder`: the subtrees of that node are skipped, but its siblings are still visited
    /// - `InOrder`: the right subtree of that node is skipped
    /// - `PostOrder`: ignored
    /// - `LevelOrder`: the traversal ends
    ///
    /// Nothing is called on an empty tree.
    ///
    /// [`Visit::Stop`]: ../traversal/enum.Visit.html#variant.Stop " "
    pub fn traverse<'a, F, R>(&'a self, order: Order, mut visit: F)
    where
        F: FnMut(&'a Key, NodeRef<'a, V, S>) -> R,
        R: Into<Visit>,
    {
        let root = match self.root {
            Some(root) => root,
            None => return,
        };
        let mut stops_at = move |key: usize| {
            let node = self.node_ref(key);
            visit(node.key(), node).into().is_stop()
        };
        match order {
            Order::PreOrder => {
                let mut stack = alloc::vec![root];
                while let Some(key) = stack.pop() {
                    if !stops_at(key) {
                        let node = self.tree_node(key);
                        stack.extend(node.right);
                        stack.extend(node.left);
                    }
                }
            }
            Order::InOrder => {
                let mut stack = Vec::new();
                let mut current = Some(root);
                loop {
                    while let Some(key) = current {
                        stack.push(key);
                        current = self.tree_node(key).left;
                    }
                    match stack.pop() {
                        Some(key) => {
                            current = if stops_at(key) {
                                None
                            } else {
                                self.tree_node(key).right
                            };
                        }
                        None => break,
                    }
                }
            }
            Order::PostOrder => {
                // The flag is set once the children of the node have been pushed.
                let mut stack = alloc::vec![(root, false)];
                while let Some((key, expanded)) = stack.pop() {
                    if expanded {
                        stops_at(key);
                    } else {
                        let node = self.tree_node(key);
                        stack.push((key, true));
                        stack.extend(node.right.map(|right| (right, false)));
                        stack.extend(node.left.map(|left| (left, false)));
                    }
                }
            }
            Order::LevelOrder => {
                let mut queue = Queue::<usize>::new();
                queue.enqueue_unbounded(root);
                while let Some(key) = queue.dequeue() {
                    if stops_at(key) {
                        break;
                    }
                    let node = self.tree_node(key);
                    for child in node.left.into_iter().chain(node.right) {
                        queue.enqueue_unbounded(child);
                    }
                }
            }
        }
    }
    /// Collects references to the values of all nodes in the specified order.
    pub fn to_vec(&self, order: Order) -> Vec<&V> {
        let mut values = Vec::with_capacity(self.len());
        self.traverse(order, |_, node| values.push(node.value()));
        values
    }
    /// Collects references to the keys of all nodes in the specified order.
    pub fn keys(&self, order: Order) -> Vec<&Key> {
        let mut keys = Vec::with_capacity(self.len());
        self.traverse(order, |key, _| keys.push(key));
        keys
    }
    /// Returns the nodes which are exactly `level` edges away from the root, left to right.
    ///
    /// # Errors
    /// Fails with [`Error::IndexOutOfRange`] if `level` is negative. A level below the deepest leaf yields an empty list.
    ///
    /// [`Error::IndexOutOfRange`]: ../enum.Error.html#variant.IndexOutOfRange " "
    pub fn nodes_at_level(&self, level: isize) -> Result<Vec<NodeRef<'_, V, S>>, Error> {
        let target = usize::try_from(level).map_err(|_| Error::IndexOutOfRange {
            index: level,
            len: self.len(),
        })?;
        let mut found = Queue::<usize>::new();
        let mut stack: Vec<(usize, usize)> = self.root.map(|root| (root, 0)).into_iter().collect();
        while let Some((key, depth)) = stack.pop() {
            if depth == target {
                found.enqueue_unbounded(key);
            } else {
                let node = self.tree_node(key);
                stack.extend(node.right.map(|right| (right, depth + 1)));
                stack.extend(node.left.map(|left| (left, depth + 1)));
            }
        }
        Ok(found
            .drain_to_vec()
            .into_iter()
            .map(|key| self.node_ref(key))
            .collect())
    }
}
