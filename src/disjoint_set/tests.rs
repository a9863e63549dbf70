use super::*;
use arrayvec::ArrayVec;
use crate::node::{FieldKey, Record};

fn set_of(values: &[u32]) -> DisjointSet<u32> {
    let mut set = DisjointSet::new();
    set.insert_all(values.iter().copied()).unwrap();
    set
}

#[test]
fn singletons() {
    let mut set = set_of(&[1, 2, 3]);
    assert_eq!(set.len(), 3);
    assert_eq!(set.set_count(), 3);
    let representative = set.find(&2).unwrap();
    assert!(representative.is_representative());
    assert_eq!((representative.key(), representative.value(), representative.rank()), (1, &2, 0));
    assert!(set.find(&4).is_none());
    assert!(set.contains(&3) && !set.contains(&4));
    assert!(set.is_disjoint(&1, &2));
}

#[test]
fn union_by_rank() {
    let mut set = set_of(&[0, 1, 2, 3]);
    // Equal ranks: the second set goes under the first one.
    set.union(&0, &1);
    let root = set.find(&1).unwrap();
    assert_eq!((root.key(), root.rank()), (0, 1));
    // The lower ranked singleton goes under the higher ranked set, whatever the argument order.
    set.union(&2, &0);
    let root = set.find(&2).unwrap();
    assert_eq!((root.key(), root.rank()), (0, 1));
    set.union(&3, &3);
    assert_eq!(set.set_count(), 2);
    assert!(set.is_connected(&1, &2));
    assert!(!set.is_connected(&1, &3));
}

#[test]
fn find_compresses_paths() {
    let mut set = set_of(&[0, 1, 2, 3]);
    // Build the chain 3 -> 2 -> 0 by merging ranks carefully.
    set.union(&0, &1).union(&2, &3).union(&0, &2);
    assert_eq!(set.items[3].parent(), 2);
    assert_eq!(set.find(&3).map(SetNode::key), Some(0));
    assert_eq!(set.items[3].parent(), 0);
    assert_eq!(set.items[2].parent(), 0);
    assert_eq!(set.items[0].rank(), 2);
}

#[test]
fn union_is_idempotent() {
    let mut set = set_of(&[1, 2, 3]);
    set.union(&1, &2);
    let before = set.items.clone();
    set.union(&1, &2).union(&2, &1).union(&1, &1).union(&1, &9);
    assert_eq!(set.items, before);
}

#[test]
fn groups_follow_insertion_order() {
    let mut set = set_of(&[10, 20, 30, 40, 50]);
    set.union(&40, &20).union(&50, &10);
    assert_eq!(set.groups(), [alloc::vec![&10, &50], alloc::vec![&20, &40], alloc::vec![&30]]);
    set.union(&30, &50);
    assert_eq!(set.groups(), [alloc::vec![&10, &30, &50], alloc::vec![&20, &40]]);
    assert_eq!(set.set_count(), 2);
}

#[test]
fn absent_values() {
    let mut set = set_of(&[1]);
    assert!(!set.is_connected(&7, &7));
    assert!(set.is_disjoint(&1, &7));
    set.union(&1, &7);
    assert_eq!(set.set_count(), 1);
    assert_eq!(set.len(), 1);
}

#[test]
fn duplicates_are_rejected() {
    let mut set = set_of(&[5]);
    assert_eq!(
        set.insert(5).unwrap_err(),
        Error::DuplicateKey { key: Key::number(5.0).unwrap() },
    );
    assert_eq!(set.len(), 1);
}

#[test]
fn large_integers_are_distinct() {
    let mut set: DisjointSet<u64> = DisjointSet::new();
    set.insert(u64::MAX).unwrap().insert(u64::MAX - 1).unwrap();
    assert_eq!(set.set_count(), 2);
    assert!(set.is_disjoint(&u64::MAX, &(u64::MAX - 1)));
    set.union(&u64::MAX, &(u64::MAX - 1));
    assert_eq!(set.find(&(u64::MAX - 1)).map(|root| *root.value()), Some(u64::MAX));
}

#[test]
fn capacity_boundary() {
    let mut set: DisjointSet<u32> = DisjointSet::with_capacity(1);
    set.insert(1).unwrap();
    assert_eq!(set.insert(2).unwrap_err(), Error::CapacityExceeded { capacity: 1 });
    set.clear();
    assert!(set.is_empty());
    set.insert(2).unwrap();
    assert!(set.contains(&2) && !set.contains(&1));

    let fixed: DisjointSet<u32, ScalarKey, ArrayVec<[SetNode<u32>; 2]>> = DisjointSet::new();
    assert_eq!(fixed.capacity(), Capacity::new(2));
}

#[derive(Clone, Debug, PartialEq)]
struct City {
    name: &'static str,
    country: &'static str,
}
impl Record for City {
    fn field(&self, name: &str) -> Option<Key> {
        match name {
            "name" => Key::text(self.name).ok(),
            _ => None,
        }
    }
}

#[test]
fn records() {
    let city = |name, country| City { name, country };
    let mut set: DisjointSet<City, FieldKey> = DisjointSet::with_extractor(FieldKey::new("name"));
    set.insert_all([
        city("Lyon", "FR"),
        city("Porto", "PT"),
        city("Paris", "FR"),
        city("Lisbon", "PT"),
    ])
    .unwrap();
    set.union(&city("Lyon", ""), &city("Paris", ""))
        .union(&city("Porto", ""), &city("Lisbon", ""));
    let countries: Vec<Vec<&str>> = set
        .groups()
        .into_iter()
        .map(|group| group.into_iter().map(|city| city.country).collect())
        .collect();
    assert_eq!(countries, [["FR", "FR"], ["PT", "PT"]]);
    assert_eq!(set.find(&city("Paris", "")).map(|root| root.value().name), Some("Lyon"));
}
