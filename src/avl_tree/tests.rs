use super::*;
use super::balance::{make_balanced, rotate_left, rotate_right};
use crate::{
    comparator::{NaturalOrder, ReverseOrder},
    traversal::{
        algorithms::InvariantViolation,
        Traversable,
        TraversalOrder,
        Visitor,
        VisitorDirection,
    },
    EmptyTreeAccessError,
    KeyNotFoundError,
};
use std::{thread, vec::Vec};

fn map_of(keys: &[i32]) -> AvlMap<i32, i32> {
    keys.iter().map(|&k| (k, k * 10)).collect()
}
fn keys_of<C>(map: &AvlMap<i32, i32, C>) -> Vec<i32> {
    map.keys().copied().collect()
}

/// Collects keys in the order they are visited.
struct Collect(Vec<i32>);
impl<'a, V> Visitor<'a, i32, V> for Collect {
    type Output = Vec<i32>;
    fn visit(&mut self, node: NodeRef<'a, i32, V>) -> VisitorDirection<Vec<i32>> {
        self.0.push(*node.key());
        VisitorDirection::Continue
    }
    fn finish(self) -> Vec<i32> {
        self.0
    }
}

#[test]
fn mixed_insertion_order() {
    let map = map_of(&[5, 3, 8, 1, 4, 7, 9, 2, 6]);
    assert_eq!(keys_of(&map), (1..=9).collect::<Vec<_>>());
    assert!(map.height() as f64 <= 1.44 * 11_f64.log2());
    assert_eq!(map.check_invariants(), Ok(()));
}

#[test]
fn ascending_insertion_is_rebalanced() {
    let map = map_of(&[1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(map.height(), 3);
    assert_eq!(map.root().key(), Ok(&4));
    assert_eq!(map.check_invariants(), Ok(()));
}

#[test]
fn descending_insertion_is_rebalanced() {
    let map = map_of(&[7, 6, 5, 4, 3, 2, 1]);
    assert_eq!(map.height(), 3);
    assert_eq!(keys_of(&map), [1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn zig_zag_uses_double_rotations() {
    let right_left = map_of(&[1, 3, 2]);
    assert_eq!(right_left.root().key(), Ok(&2));
    assert_eq!(right_left.height(), 2);
    let left_right = map_of(&[3, 1, 2]);
    assert_eq!(left_right.root().key(), Ok(&2));
    assert_eq!(left_right.height(), 2);
}

#[test]
fn remove_promotes_successor() {
    let map = map_of(&[3, 2, 4, 1, 5]);
    assert_eq!(map.root().key(), Ok(&3));
    let removed = map.remove(&3).expect("3 is present");
    assert_eq!(removed.root().key(), Ok(&4));
    assert_eq!(keys_of(&removed), [1, 2, 4, 5]);
    assert_eq!(removed.check_invariants(), Ok(()));
    assert_eq!(removed.lookup(&3), Err(KeyNotFoundError));
    assert_eq!(removed.lookup(&4), Ok(&40));
}

#[test]
fn remove_from_sequential_map() {
    let map = map_of(&[1, 2, 3, 4, 5]);
    let removed = map.remove(&3).expect("3 is present");
    assert_eq!(keys_of(&removed), [1, 2, 4, 5]);
    assert_eq!(removed.check_invariants(), Ok(()));
    assert_eq!(removed.lookup(&3), Err(KeyNotFoundError));
}

#[test]
fn remove_leaf_and_single_child() {
    // 2(1, 3(_, 4))
    let map = map_of(&[2, 1, 3, 4]);
    let right = map.root().right().expect("root has children").clone();
    assert_eq!(right.key(), Ok(&3));

    let without_leaf = map.remove(&1).expect("1 is present");
    // Removing 1 makes the root right-heavy, which rotates 3 up.
    assert_eq!(without_leaf.root().key(), Ok(&3));
    assert_eq!(without_leaf.check_invariants(), Ok(()));

    let without_inner = map.remove(&3).expect("3 is present");
    let replacement = without_inner.root().right().expect("root has children");
    assert_eq!(replacement.key(), Ok(&4));
    assert!(replacement.left().expect("4 is a node").is_empty());
    assert!(replacement.right().expect("4 is a node").is_empty());

    let leaf = Tree::leaf(1, ());
    assert!(leaf.remove(&1, &NaturalOrder).expect("1 is present").is_empty());
}

#[test]
fn remove_everything() {
    let keys = [8, 3, 10, 1, 6, 14, 4, 7, 13, 2, 5, 9, 11, 12];
    let mut map = map_of(&keys);
    for (i, key) in keys.iter().enumerate() {
        map = map.remove(key).expect("every key is present once");
        assert_eq!(map.len(), keys.len() - i - 1);
        assert_eq!(map.check_invariants(), Ok(()));
    }
    assert!(map.is_empty());
    assert_eq!(map.height(), 0);
}

#[test]
fn remove_absent_key() {
    let map = map_of(&[1, 2, 3]);
    assert_eq!(map.remove(&4).err(), Some(EmptyTreeAccessError::Remove));
    assert_eq!(AvlMap::<i32, i32>::new().remove(&1).err(), Some(EmptyTreeAccessError::Remove));
}

#[test]
fn empty_tree_access() {
    let empty = Tree::<i32, i32>::EMPTY;
    assert!(empty.is_empty());
    assert_eq!(empty.height(), 0);
    assert_eq!(empty.balance(), 0);
    assert_eq!(empty.key(), Err(EmptyTreeAccessError::Key));
    assert_eq!(empty.value(), Err(EmptyTreeAccessError::Value));
    assert!(matches!(empty.left(), Err(EmptyTreeAccessError::Left)));
    assert!(matches!(empty.right(), Err(EmptyTreeAccessError::Right)));
    assert!(matches!(
        empty.remove(&1, &NaturalOrder),
        Err(EmptyTreeAccessError::Remove)
    ));
}

#[test]
fn search_on_empty_never_fails() {
    let empty = Tree::<i32, i32>::empty();
    assert!(empty.search(&1, &NaturalOrder).is_empty());
    let map = map_of(&[1, 2, 3]);
    assert!(map.root().search(&7, &NaturalOrder).is_empty());
    assert_eq!(map.root().search(&3, &NaturalOrder).value(), Ok(&30));
}

#[test]
fn add_replaces_existing_value() {
    let map = map_of(&[1, 2, 3]);
    let replaced = map.add(2, 99);
    assert_eq!(replaced.len(), 3);
    assert_eq!(replaced.lookup(&2), Ok(&99));
    assert_eq!(map.lookup(&2), Ok(&20));
    assert_eq!(replaced.height(), map.height());
}

#[test]
fn snapshots_are_not_mutated() {
    let before = map_of(&[1, 2, 3, 4, 5, 6, 7]);
    let after = before.add(8, 80).remove(&1).expect("1 is present");
    assert!(before.contains(&1));
    assert!(!before.contains(&8));
    assert_eq!(before.lookup(&1), Ok(&10));
    assert_eq!(keys_of(&before), [1, 2, 3, 4, 5, 6, 7]);
    assert!(!after.contains(&1));
    assert_eq!(after.lookup(&8), Ok(&80));
}

#[test]
fn untouched_subtrees_are_shared() {
    let before = map_of(&[1, 2, 3, 4, 5, 6, 7]);
    let after = before.add(8, 80);
    let left_before = before.root().left().expect("non-empty");
    let left_after = after.root().left().expect("non-empty");
    assert!(left_before.ptr_eq(left_after));
    assert!(!before.ptr_eq(&after));
    assert!(before.ptr_eq(&before.clone()));
}

#[test]
fn rotations() {
    // 1(_, 2(_, 3))
    let chain = Tree::branch(1, (), Tree::Empty, Tree::branch(2, (), Tree::Empty, Tree::leaf(3, ())));
    assert!(chain.is_right_heavy());
    let rotated = make_balanced(chain.clone());
    assert_eq!(rotated.key(), Ok(&2));
    assert_eq!(rotated.height(), 2);

    let (key, value, left, right) = chain.into_parts().expect("non-empty");
    let manual = rotate_left(key, value, left, right);
    assert_eq!(manual.iter().map(|(k, _)| *k).collect::<Vec<_>>(), [1, 2, 3]);
    let (key, value, left, right) = manual.into_parts().expect("non-empty");
    let back = rotate_right(key, value, left, right);
    assert_eq!(back.key(), Ok(&1));
    assert_eq!(back.height(), 3);

    let balanced = Tree::branch(2, (), Tree::leaf(1, ()), Tree::leaf(3, ()));
    assert!(make_balanced(balanced.clone()).ptr_eq(&balanced));
}

#[test]
fn invariant_check_reports_violations() {
    let unbalanced = Tree::branch(1, (), Tree::Empty, Tree::branch(2, (), Tree::Empty, Tree::leaf(3, ())));
    assert_eq!(
        AvlMap::from_tree(unbalanced, NaturalOrder).check_invariants(),
        Err(InvariantViolation::Unbalanced { depth: 0, balance: 2 }),
    );
    let unordered = Tree::branch(2, (), Tree::Empty, Tree::leaf(1, ()));
    assert_eq!(
        AvlMap::from_tree(unordered, NaturalOrder).check_invariants(),
        Err(InvariantViolation::OutOfOrder { depth: 1 }),
    );
}

#[test]
fn traversal_orders() {
    let map = map_of(&[1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(
        map.traverse(TraversalOrder::PreOrder, Collect(Vec::new())),
        [4, 2, 1, 3, 6, 5, 7],
    );
    assert_eq!(
        map.traverse(TraversalOrder::InOrder, Collect(Vec::new())),
        [1, 2, 3, 4, 5, 6, 7],
    );
    assert_eq!(
        map.root().traverse(TraversalOrder::PostOrder, Collect(Vec::new())),
        [1, 3, 2, 5, 7, 6, 4],
    );
}

#[test]
fn iterators() {
    let map = map_of(&[3, 1, 2]);
    assert_eq!(map.values().copied().collect::<Vec<_>>(), [10, 20, 30]);
    assert_eq!(map.pairs().collect::<Vec<_>>(), [(&1, &10), (&2, &20), (&3, &30)]);
    // Restartable from the root.
    assert_eq!(map.iter().count(), 3);
    assert_eq!(map.iter().count(), 3);

    let mut iter = map.iter();
    assert_eq!(iter.next(), Some((&1, &10)));
    let snapshot = iter.clone();
    assert_eq!(iter.collect::<Vec<_>>(), snapshot.collect::<Vec<_>>());

    let mut exhausted = map.keys();
    exhausted.by_ref().for_each(drop);
    assert_eq!(exhausted.next(), None);
    assert_eq!(exhausted.next(), None);

    assert_eq!(std::format!("{:?}", map), "{1: 10, 2: 20, 3: 30}");
    assert_eq!(std::format!("{:?}", map.keys()), "[1, 2, 3]");
}

#[test]
fn first_and_last() {
    let map = map_of(&[5, 9, 1, 7]);
    assert_eq!(map.first_key_value(), Some((&1, &10)));
    assert_eq!(map.last_key_value(), Some((&9, &90)));
    assert_eq!(AvlMap::<i32, i32>::new().first_key_value(), None);
}

#[test]
fn custom_comparator() {
    let map: AvlMap<i32, i32, ReverseOrder<NaturalOrder>> =
        [(1, 1), (3, 3), (2, 2)].iter().copied().collect();
    assert_eq!(keys_of(&map), [3, 2, 1]);
    assert_eq!(map.check_invariants(), Ok(()));
    assert!(map.contains(&2));
    let removed = map.remove(&3).expect("3 is present");
    assert_eq!(keys_of(&removed), [2, 1]);
}

#[test]
fn equality_ignores_shape() {
    let a = map_of(&[1, 2, 3, 4, 5]);
    let b = map_of(&[5, 4, 3, 2, 1]);
    assert_eq!(a, b);
    assert_ne!(a, b.add(6, 60));
    assert_eq!(AvlMap::<i32, i32>::new(), AvlMap::default());
}

#[test]
fn extend_replaces_own_snapshot_only() {
    let original = map_of(&[1, 2]);
    let mut extended = original.clone();
    extended.extend(vec![(3, 30), (1, 11)]);
    assert_eq!(keys_of(&original), [1, 2]);
    assert_eq!(keys_of(&extended), [1, 2, 3]);
    assert_eq!(extended[&1], 11);
}

#[test]
#[should_panic(expected = "the key was not found in the map")]
fn index_panics_on_absent_key() {
    let map = map_of(&[1]);
    let _value: i32 = map[&2];
}

#[test]
fn snapshots_are_shared_between_threads() {
    let map = map_of(&(0..1000).collect::<Vec<_>>());
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let map = map.clone();
            thread::spawn(move || {
                let derived = map.add(1000 + t, 0);
                assert_eq!(map.len(), 1000);
                assert_eq!(derived.len(), 1001);
                (0..1000).all(|k| map.lookup(&k) == Ok(&(k * 10)))
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().expect("reader thread panicked"));
    }
    assert_eq!(map.len(), 1000);
}
