use super::*;
use alloc::{string::String, vec::Vec};
use arrayvec::ArrayVec;
use crate::{
    compare::{CollatingComparator, NaturalOrder},
    node::{FieldKey, Key, Node, Record, ScalarKey},
    storage::{SparseStorage, SparseStorageSlot, Storage},
    traversal::{Order, Visit},
    Capacity, Error,
};

fn tree_of(values: &[i32]) -> BinarySearchTree<i32> {
    let mut tree = BinarySearchTree::new();
    tree.insert_all(values.iter().copied()).unwrap();
    tree
}
fn collect(tree: &BinarySearchTree<i32>, order: Order) -> Vec<i32> {
    tree.to_vec(order).into_iter().copied().collect()
}

#[test]
fn basic() {
    let tree = tree_of(&[5, 3, 8, 1, 4, 10]);
    assert_eq!(tree.len(), 6);
    let root = tree.root().unwrap();
    assert_eq!(root.value(), &5);
    assert_eq!(root.left_child().map(|node| *node.value()), Some(3));
    assert_eq!(root.right_child().map(|node| *node.value()), Some(8));
    assert_eq!(root.children().len(), 2);
    assert!(root.is_full_branch());
    assert!(tree.search(&4).unwrap().is_leaf());
    assert_eq!(tree.search_key(&Key::number(10.0).unwrap()).map(|node| *node.value()), Some(10));
    assert!(tree.contains(&1));
    assert!(!tree.contains(&7));
}

#[test]
fn traversal_orders() {
    let tree = tree_of(&[5, 3, 8, 1, 4, 10]);
    assert_eq!(collect(&tree, Order::PreOrder), [5, 3, 1, 4, 8, 10]);
    assert_eq!(collect(&tree, Order::InOrder), [1, 3, 4, 5, 8, 10]);
    assert_eq!(collect(&tree, Order::PostOrder), [1, 4, 3, 10, 8, 5]);
    assert_eq!(collect(&tree, Order::LevelOrder), [5, 3, 8, 1, 4, 10]);
    let keys: Vec<f64> = tree
        .keys(Order::InOrder)
        .into_iter()
        .filter_map(Key::as_number)
        .collect();
    assert_eq!(keys, [1.0, 3.0, 4.0, 5.0, 8.0, 10.0]);
}

#[test]
fn stopping_depends_on_order() {
    let tree = tree_of(&[5, 3, 8, 1, 4, 10]);
    let visit_until = |order, stop_at: i32| {
        let mut seen = Vec::new();
        tree.traverse(order, |_, node| {
            seen.push(*node.value());
            *node.value() == stop_at
        });
        seen
    };
    // The subtrees of 3 are skipped, its sibling is not.
    assert_eq!(visit_until(Order::PreOrder, 3), [5, 3, 8, 10]);
    // Only the right subtree of 3 is skipped.
    assert_eq!(visit_until(Order::InOrder, 3), [1, 3, 5, 8, 10]);
    assert_eq!(visit_until(Order::PostOrder, 3), [1, 4, 3, 10, 8, 5]);
    assert_eq!(visit_until(Order::LevelOrder, 8), [5, 3, 8]);

    let mut visits = 0;
    tree.traverse(Order::InOrder, |key, _| {
        visits += 1;
        if key.as_number() == Some(3.0) { Visit::Stop } else { Visit::Continue }
    });
    assert_eq!(visits, 5);
}

#[test]
fn empty_tree() {
    let mut tree: BinarySearchTree<i32> = BinarySearchTree::new();
    assert!(tree.is_empty());
    assert!(tree.root().is_none());
    assert!(tree.min().is_none() && tree.max().is_none());
    assert_eq!(tree.depth(&1), -1);
    assert_eq!(tree.height(&1), -1);
    assert!(!tree.remove(&1));
    tree.traverse(Order::PreOrder, |_, _| -> Visit { panic!("visited a node of an empty tree") });
    assert!(tree.nodes_at_level(0).unwrap().is_empty());
    assert!(tree.is_full() && tree.is_complete() && tree.is_strict());
    assert!(tree.is_skewed() && tree.is_skewed_left() && tree.is_skewed_right());
    assert!(tree.is_bst() && tree.is_valid());
}

#[test]
fn depth_and_height() {
    let mut tree = tree_of(&[50, 63, 35, 23, 82, 56, 12]);
    tree.insert_all([44, 29, 38, 47, 51, 78, 60, 99]).unwrap();
    assert_eq!(tree.len(), 15);
    assert_eq!(tree.depth(&50), 0);
    assert_eq!(tree.depth(&12), 3);
    assert_eq!(tree.depth(&44), 2);
    assert_eq!(tree.depth(&13), -1);
    assert_eq!(tree.height(&50), 3);
    assert_eq!(tree.height(&63), 2);
    assert_eq!(tree.height(&99), 0);
    assert_eq!(tree.height(&100), -1);
    // Fifteen nodes on four levels make a perfect tree.
    assert!(tree.is_full());
    assert!(tree.is_complete());
    assert!(!tree.is_skewed());
}

#[test]
fn nodes_at_level() {
    let mut tree = tree_of(&[50, 63, 35, 23, 82, 56, 12]);
    tree.insert_all([44, 29, 38, 47, 51, 78, 60, 99]).unwrap();
    let level = |n| -> Vec<i32> {
        tree.nodes_at_level(n)
            .unwrap()
            .into_iter()
            .map(|node| *node.value())
            .collect()
    };
    assert_eq!(level(0), [50]);
    assert_eq!(level(2), [23, 44, 56, 82]);
    assert_eq!(level(3), [12, 29, 38, 47, 51, 60, 78, 99]);
    assert!(level(4).is_empty());
    assert_eq!(
        tree.nodes_at_level(-1).unwrap_err(),
        Error::IndexOutOfRange { index: -1, len: 15 },
    );
}

#[test]
fn remove_with_two_children() {
    let mut tree = tree_of(&[15, 10, 20, 8, 18, 25, 21, 29]);
    assert!(tree.remove(&20));
    assert_eq!(tree.len(), 7);
    assert_eq!(collect(&tree, Order::LevelOrder), [15, 10, 21, 8, 18, 25, 29]);
    assert!(!tree.contains(&20));
    assert!(tree.is_valid());
    assert!(!tree.remove(&20));
    assert_eq!(tree.len(), 7);
}

#[test]
fn remove_leaf_and_single_child() {
    let mut tree = tree_of(&[5, 3, 8, 1, 4, 10]);
    assert_eq!(tree.take(&1), Some(1));
    assert_eq!(collect(&tree, Order::PreOrder), [5, 3, 4, 8, 10]);
    // 8 has only a right child, which takes its place.
    assert!(tree.remove(&8));
    assert_eq!(collect(&tree, Order::LevelOrder), [5, 3, 10, 4]);
    assert_eq!(tree.depth(&10), 1);
    assert!(tree.is_valid());
}

#[test]
fn remove_root() {
    let mut tree = tree_of(&[5, 3, 8, 1, 4, 10]);
    assert!(tree.remove(&5));
    assert_eq!(tree.root().map(|root| *root.value()), Some(8));
    assert_eq!(collect(&tree, Order::InOrder), [1, 3, 4, 8, 10]);

    let mut chain = tree_of(&[1, 2]);
    assert!(chain.remove(&1));
    assert_eq!(chain.root().map(|root| *root.value()), Some(2));
    assert!(chain.remove(&2));
    assert!(chain.is_empty());
    assert_eq!(chain.len(), 0);
}

#[test]
fn duplicates_go_right() {
    let mut tree = tree_of(&[5, 5, 5]);
    assert!(tree.is_skewed_right());
    assert_eq!(tree.depth(&5), 0);
    assert_eq!(tree.height(&5), 2);
    assert!(tree.is_valid() && tree.is_bst());
    for _ in 0..3 {
        assert!(tree.remove(&5));
    }
    assert!(!tree.remove(&5));
    assert!(tree.is_empty());
}

#[test]
fn large_integers_are_distinct() {
    let mut tree: BinarySearchTree<u64> = BinarySearchTree::new();
    tree.insert_all([u64::MAX, u64::MAX - 1, 1 << 60]).unwrap();
    assert_eq!(tree.depth(&(u64::MAX - 1)), 1);
    assert_eq!(tree.depth(&(1 << 60)), 2);
    assert_eq!(tree.min().map(|node| *node.value()), Some(1 << 60));
    assert!(tree.remove(&u64::MAX));
    assert!(!tree.contains(&u64::MAX));
    assert!(tree.contains(&(u64::MAX - 1)));
    assert!(tree.is_valid());
}

#[test]
fn min_and_max() {
    let tree = tree_of(&[5, 3, 8, 1, 4, 10]);
    assert_eq!(tree.min().map(|node| *node.value()), Some(1));
    assert_eq!(tree.max().map(|node| *node.value()), Some(10));
}

#[test]
fn capacity_boundary() {
    let mut tree: BinarySearchTree<i32> = BinarySearchTree::with_capacity(1);
    tree.insert(1).unwrap();
    assert_eq!(tree.insert(2).unwrap_err(), Error::CapacityExceeded { capacity: 1 });
    assert_eq!(tree.len(), 1);
    assert!(tree.remove(&1));
    tree.insert(2).unwrap();
    assert_eq!(tree.root().map(|root| *root.value()), Some(2));
}

#[test]
fn fixed_storage_caps_the_tree() {
    type Fixed = SparseStorage<TreeNode<i32>, ArrayVec<[SparseStorageSlot<TreeNode<i32>>; 2]>>;
    let mut tree: BinarySearchTree<i32, ScalarKey, NaturalOrder, Fixed> = BinarySearchTree::new();
    assert_eq!(tree.capacity(), Capacity::new(2));
    tree.insert(2).unwrap().insert(1).unwrap();
    assert_eq!(tree.insert(3).unwrap_err(), Error::CapacityExceeded { capacity: 2 });
    assert_eq!(tree.len(), 2);
    assert!(tree.remove(&1));
    tree.insert(3).unwrap();
    let in_order: Vec<i32> = tree.to_vec(Order::InOrder).into_iter().copied().collect();
    assert_eq!(in_order, [2, 3]);

    let limited: BinarySearchTree<i32, ScalarKey, NaturalOrder, Fixed> = BinarySearchTree::with_capacity(5);
    assert_eq!(limited.capacity(), Capacity::new(2));
    let unlimited: BinarySearchTree<i32, ScalarKey, NaturalOrder, Fixed> = BinarySearchTree::with_capacity(0);
    assert_eq!(unlimited.capacity(), Capacity::new(2));
}

#[test]
fn root_check_is_strict_on_the_left() {
    let mut tree = tree_of(&[5, 3, 7]);
    assert!(tree.is_bst());
    let left = tree
        .root()
        .and_then(|root| root.left_child())
        .map(|left| left.raw_key())
        .unwrap();
    // Only reachable by editing the arena directly: insertion sends equal keys right.
    tree.storage.get_mut(&left).unwrap().node = Node::new(5, &ScalarKey).unwrap();
    assert!(!tree.is_bst());
    assert!(!tree.is_valid());
}

#[test]
fn shape_predicates() {
    let right = tree_of(&[1, 2, 3]);
    assert!(right.is_skewed_right() && right.is_skewed());
    assert!(!right.is_skewed_left());
    assert!(!right.is_full() && !right.is_complete());

    let left = tree_of(&[3, 2, 1]);
    assert!(left.is_skewed_left() && !left.is_skewed_right());

    let lone = tree_of(&[1]);
    assert!(lone.is_full() && lone.is_complete() && lone.is_skewed());

    // A missing right child on the last level keeps the tree complete...
    let filled_left = tree_of(&[5, 3, 8, 1]);
    assert!(filled_left.is_complete());
    assert!(!filled_left.is_full() && !filled_left.is_strict());
    // ...a missing left child does not.
    let filled_right = tree_of(&[5, 3, 8, 4]);
    assert!(!filled_right.is_complete());

    assert!(!tree_of(&[1, 2]).is_complete());
    assert!(tree_of(&[2, 1]).is_complete());

    let strict = tree_of(&[5, 3, 8, 1, 4]);
    assert!(strict.is_full() && strict.is_strict());
    assert!(strict.is_complete());
}

#[test]
fn clear_resets() {
    let mut tree = tree_of(&[5, 3, 8]);
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    tree.insert(7).unwrap();
    assert_eq!(collect(&tree, Order::LevelOrder), [7]);
}

#[test]
fn invalid_values_are_rejected() {
    let mut tree: BinarySearchTree<&str> = BinarySearchTree::new();
    assert!(matches!(tree.insert(""), Err(Error::InvalidValue { .. })));
    assert!(tree.is_empty());
    assert!(!tree.contains(&""));

    let mut floats: BinarySearchTree<f64> = BinarySearchTree::new();
    assert!(matches!(floats.insert(f64::NAN), Err(Error::InvalidKey { .. })));
    floats.insert(0.0).unwrap();
    assert!(floats.contains(&-0.0));
}

#[derive(Debug)]
struct Employee {
    id: Option<u32>,
    name: &'static str,
}
impl Record for Employee {
    fn field(&self, name: &str) -> Option<Key> {
        match name {
            "key" => self.id.and_then(|id| Key::number(f64::from(id)).ok()),
            _ => None,
        }
    }
}

#[test]
fn records_are_keyed_by_field() {
    let mut tree: BinarySearchTree<Employee, FieldKey> =
        BinarySearchTree::with_strategies(FieldKey::default(), NaturalOrder);
    tree.insert(Employee { id: Some(20), name: "Ada" })
        .unwrap()
        .insert(Employee { id: Some(10), name: "Grace" })
        .unwrap();
    assert!(matches!(
        tree.insert(Employee { id: None, name: "Nobody" }),
        Err(Error::InvalidKey { .. }),
    ));
    let probe = Employee { id: Some(10), name: "" };
    assert_eq!(tree.search(&probe).map(|node| node.value().name), Some("Grace"));
    assert_eq!(tree.take(&probe).map(|employee| employee.name), Some("Grace"));
    // A value without a key is never found.
    assert!(!tree.contains(&Employee { id: None, name: "Ada" }));
    assert_eq!(tree.len(), 1);
}

#[test]
fn collating_comparator_orders_text() {
    let mut tree: BinarySearchTree<String, ScalarKey, CollatingComparator> =
        BinarySearchTree::with_strategies(ScalarKey, CollatingComparator::new());
    tree.insert_all(["b", "A", "a", "B", "apple"].iter().map(|s| String::from(*s)))
        .unwrap();
    let in_order: Vec<&str> = tree
        .to_vec(Order::InOrder)
        .into_iter()
        .map(String::as_str)
        .collect();
    assert_eq!(in_order, ["a", "A", "apple", "b", "B"]);

    let mut natural: BinarySearchTree<String> = BinarySearchTree::new();
    natural.insert_all(["b", "A", "a", "B"].iter().map(|s| String::from(*s))).unwrap();
    let in_order: Vec<&str> = natural
        .to_vec(Order::InOrder)
        .into_iter()
        .map(String::as_str)
        .collect();
    assert_eq!(in_order, ["A", "B", "a", "b"]);
}

#[test]
fn node_refs_compare_by_identity() {
    let tree = tree_of(&[2, 1, 3]);
    let min = tree.min().unwrap();
    assert_eq!(min, tree.search(&1).unwrap());
    assert_ne!(min, tree.root().unwrap());
    assert_eq!(min, tree.root().unwrap().leftmost());
}
