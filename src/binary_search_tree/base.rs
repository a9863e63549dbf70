use core::mem;
use crate::{
    compare::{Comparator, NaturalOrder},
    node::{Key, KeyExtractor, Node, ScalarKey},
    storage::{Storage, DefaultStorage},
    Capacity, Error,
};
use super::{NodeRef, TreeNode};

/// An unbalanced binary search tree.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Clone, Debug)]
pub struct BinarySearchTree<V, E = ScalarKey, C = NaturalOrder, S = DefaultStorage<TreeNode<V>>>
where S: Storage<Element = TreeNode<V>, Key = usize>,
{
    pub(super) storage: S,
    pub(super) root: Option<usize>,
    capacity: Capacity,
    extractor: E,
    pub(super) comparator: C,
}

/// The slot a node hangs from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Link {
    Root,
    Left(usize),
    Right(usize),
}

impl<V, E, C, S> BinarySearchTree<V, E, C, S>
where
    E: Default,
    C: Default,
    S: Storage<Element = TreeNode<V>, Key = usize>,
{
    /// Creates an empty tree with the default key extractor and comparator and no capacity limit.
    #[inline]
    pub fn new() -> Self {
        Self::with_strategies(E::default(), C::default())
    }
    /// Creates an empty tree which accepts at most `capacity` nodes (`0` means unlimited).
    #[inline]
    pub fn with_capacity(capacity: impl Into<Capacity>) -> Self {
        Self::new().limited_to(capacity)
    }
}
impl<V, E, C, S> Default for BinarySearchTree<V, E, C, S>
where
    E: Default,
    C: Default,
    S: Storage<Element = TreeNode<V>, Key = usize>,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E, C, S> BinarySearchTree<V, E, C, S>
where S: Storage<Element = TreeNode<V>, Key = usize>,
{
    /// Creates an empty tree which derives keys with `extractor` and orders them with `comparator`.
    pub fn with_strategies(extractor: E, comparator: C) -> Self {
        Self {
            storage: S::new(),
            root: None,
            capacity: Self::storage_limit(),
            extractor,
            comparator,
        }
    }
    /// Sets the capacity limit of the tree (`0` means unlimited). A fixed-size storage still caps it at its own size.
    ///
    /// Nodes already in the tree are kept even if there are more of them than the new limit allows.
    #[inline]
    pub fn limited_to(mut self, capacity: impl Into<Capacity>) -> Self {
        self.capacity = capacity.into().min(Self::storage_limit());
        self
    }
    /// Returns the key extractor used by the tree.
    #[inline(always)]
    pub fn extractor(&self) -> &E {
        &self.extractor
    }
    /// Returns the comparator used by the tree.
    #[inline(always)]
    pub fn comparator(&self) -> &C {
        &self.comparator
    }
    /// Returns the number of nodes in the tree.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.storage.len()
    }
    /// Returns `true` if the tree has no nodes.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
    /// Returns the capacity limit of the tree.
    #[inline(always)]
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }
    /// Returns a reference to the root node, or `None` if the tree is empty.
    #[inline]
    pub fn root(&self) -> Option<NodeRef<'_, V, S>> {
        self.root.map(|key| self.node_ref(key))
    }
    /// Returns the node with the smallest key.
    #[inline]
    pub fn min(&self) -> Option<NodeRef<'_, V, S>> {
        self.root().map(|root| root.leftmost())
    }
    /// Returns the node with the largest key. If there are duplicates of it, the deepest one is returned.
    #[inline]
    pub fn max(&self) -> Option<NodeRef<'_, V, S>> {
        self.root().map(|root| root.rightmost())
    }
    /// Removes every node, returning the tree to its freshly created state. The capacity limit, extractor and comparator are kept.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.root = None;
    }

    fn storage_limit() -> Capacity {
        S::fixed_capacity().map_or(Capacity::UNLIMITED, Capacity::new)
    }
    #[inline(always)]
    pub(super) fn node_ref(&self, key: usize) -> NodeRef<'_, V, S> {
        NodeRef::new_linked(&self.storage, key)
    }
    #[inline(always)]
    pub(super) fn tree_node(&self, key: usize) -> &TreeNode<V> {
        debug_assert!(self.storage.contains_key(&key));
        unsafe {
            // SAFETY: the root and every child link point at live nodes
            self.storage.get_unchecked(&key)
        }
    }
    #[inline(always)]
    fn tree_node_mut(&mut self, key: usize) -> &mut TreeNode<V> {
        debug_assert!(self.storage.contains_key(&key));
        unsafe {
            // SAFETY: as above
            self.storage.get_unchecked_mut(&key)
        }
    }
    fn follow(&self, link: Link) -> Option<usize> {
        match link {
            Link::Root => self.root,
            Link::Left(parent) => self.tree_node(parent).left,
            Link::Right(parent) => self.tree_node(parent).right,
        }
    }
    fn set_link(&mut self, link: Link, child: Option<usize>) {
        match link {
            Link::Root => self.root = child,
            Link::Left(parent) => self.tree_node_mut(parent).left = child,
            Link::Right(parent) => self.tree_node_mut(parent).right = child,
        }
    }
    /// Returns the height of the subtree rooted at `top`, counted in edges.
    pub(super) fn subtree_height(&self, top: usize) -> usize {
        let mut height = 0;
        let mut stack = alloc::vec![(top, 0_usize)];
        while let Some((key, level)) = stack.pop() {
            height = height.max(level);
            let node = self.tree_node(key);
            stack.extend(node.left.map(|left| (left, level + 1)));
            stack.extend(node.right.map(|right| (right, level + 1)));
        }
        height
    }
}

impl<V, E, C, S> BinarySearchTree<V, E, C, S>
where
    E: KeyExtractor<V>,
    C: Comparator,
    S: Storage<Element = TreeNode<V>, Key = usize>,
{
    /// Inserts a value into the tree. Values with a key equal to one already in the tree are placed into its right subtree.
    ///
    /// # Errors
    /// Fails with [`Error::CapacityExceeded`] if the tree is full, or forwards the extractor's error if no key can be derived from the value. The tree is left untouched in both cases.
    ///
    /// [`Error::CapacityExceeded`]: ../enum.Error.html#variant.CapacityExceeded " "
    pub fn insert(&mut self, value: V) -> Result<&mut Self, Error> {
        self.capacity.check(self.len())?;
        let node = Node::new(value, &self.extractor)?;
        let mut link = Link::Root;
        while let Some(current) = self.follow(link) {
            link = if self
                .comparator
                .greater_than_equals(node.key(), self.tree_node(current).key())
            {
                Link::Right(current)
            } else {
                Link::Left(current)
            };
        }
        let key = self.storage.add(TreeNode::leaf(node));
        self.set_link(link, Some(key));
        Ok(self)
    }
    /// Inserts every value from the iterator, in order.
    ///
    /// # Errors
    /// Stops at the first value which [`insert`] rejects; the values before it stay in the tree.
    ///
    /// [`insert`]: #method.insert " "
    pub fn insert_all(&mut self, values: impl IntoIterator<Item = V>) -> Result<&mut Self, Error> {
        for value in values {
            self.insert(value)?;
        }
        Ok(self)
    }
    /// Finds a node whose key is equal to the key of `value`. A value from which no key can be derived is never found.
    #[inline]
    pub fn search(&self, value: &V) -> Option<NodeRef<'_, V, S>> {
        let key = self.extractor.extract_key(value).ok()?;
        self.search_key(&key)
    }
    /// Finds a node with a key equal to `key`. If there are duplicates, the one closest to the root is returned.
    #[inline]
    pub fn search_key(&self, key: &Key) -> Option<NodeRef<'_, V, S>> {
        self.locate(key).map(|(found, _, _)| self.node_ref(found))
    }
    /// Returns `true` if a node with the key of `value` is in the tree.
    #[inline]
    pub fn contains(&self, value: &V) -> bool {
        self.search(value).is_some()
    }
    /// Returns the number of edges between the root and the node with the key of `value`, or `-1` if there is no such node.
    pub fn depth(&self, value: &V) -> isize {
        self.extractor
            .extract_key(value)
            .ok()
            .and_then(|key| self.locate(&key))
            .map_or(-1, |(_, _, depth)| depth as isize)
    }
    /// Returns the number of edges on the longest downward path from the node with the key of `value` to a leaf, or `-1` if there is no such node. Leaves have a height of `0`.
    pub fn height(&self, value: &V) -> isize {
        self.extractor
            .extract_key(value)
            .ok()
            .and_then(|key| self.locate(&key))
            .map_or(-1, |(found, _, _)| self.subtree_height(found) as isize)
    }
    /// Removes the node with the key of `value`, returning `true` if there was one.
    ///
    /// See [`take`] for how the tree is restructured.
    ///
    /// [`take`]: #method.take " "
    #[inline]
    pub fn remove(&mut self, value: &V) -> bool {
        self.take(value).is_some()
    }
    /// Removes the node with the key of `value` and returns the value it stored.
    ///
    /// A node with at most one child is replaced by that child. A node with two children instead receives the key and value of its in-order successor, the leftmost node of its right subtree, which is unlinked in turn.
    pub fn take(&mut self, value: &V) -> Option<V> {
        let key = self.extractor.extract_key(value).ok()?;
        let (target, link, _) = self.locate(&key)?;
        let (left, right) = {
            let node = self.tree_node(target);
            (node.left, node.right)
        };
        let removed = match (left, right) {
            (Some(_), Some(right)) => {
                let mut successor_link = Link::Right(target);
                let mut successor = right;
                while let Some(left) = self.tree_node(successor).left {
                    successor_link = Link::Left(successor);
                    successor = left;
                }
                let successor_right = self.tree_node(successor).right;
                self.set_link(successor_link, successor_right);
                let successor = self.storage.remove(&successor);
                log::trace!(
                    "moving in-order successor {} into the place of removed key {}",
                    successor.key(),
                    key,
                );
                mem::replace(&mut self.tree_node_mut(target).node, successor.node)
            }
            (left, right) => {
                self.set_link(link, left.or(right));
                if link == Link::Root {
                    log::trace!("removed the root node, the tree is now rooted at {:?}", self.root);
                }
                self.storage.remove(&target).node
            }
        };
        Some(removed.into_value())
    }

    /// Descends from the root towards `key`, returning the first node with an equal key, the link it hangs from and its depth.
    fn locate(&self, key: &Key) -> Option<(usize, Link, usize)> {
        let mut link = Link::Root;
        let mut depth = 0;
        while let Some(current) = self.follow(link) {
            let current_key = self.tree_node(current).key();
            if self.comparator.equals(key, current_key) {
                return Some((current, link, depth));
            }
            link = if self.comparator.greater_than(key, current_key) {
                Link::Right(current)
            } else {
                Link::Left(current)
            };
            depth += 1;
        }
        None
    }
}
