#![allow(dead_code)]

use itertools::Itertools;
use rand::Rng;
use spica::*;

/// Checks everything that must hold after any sequence of inserts and finds.
pub fn assert_valid<T, O>(tree: &SplayTree<T, O>)
where
    T: Clone + std::fmt::Debug,
    O: StrictWeakOrder<T>,
{
    tree.check_structure().unwrap();
    let values: Vec<T> = tree.dump().into_iter().map(|(_, value)| value).collect();
    assert_eq!(values.len(), tree.len());
    assert!(
        values
            .iter()
            .tuple_windows()
            .all(|(a, b)| tree.order().less(a, b)),
        "values out of order: {:?}",
        values
    );
}

/// Asserts that `value` is at the root: the only node at depth zero.
pub fn assert_at_root<T, O>(tree: &SplayTree<T, O>, value: &T)
where
    T: Clone + PartialEq + std::fmt::Debug,
{
    let roots: Vec<T> = tree
        .dump()
        .into_iter()
        .filter(|(depth, _)| *depth == 0)
        .map(|(_, value)| value)
        .collect();
    assert_eq!(roots, vec![value.clone()]);
    assert_eq!(tree.root_value(), Some(value));
}

/// Walks the tree with a cursor, forwards from `begin()` and backwards from `end()`.
pub fn walk_both_ways<T: Clone, O>(tree: &SplayTree<T, O>) -> (Vec<T>, Vec<T>) {
    let mut forward = vec![];
    let mut cursor = tree.begin();
    while cursor != tree.end() {
        forward.push(cursor.get().unwrap().clone());
        cursor.move_next();
    }

    let mut backward = vec![];
    let mut cursor = tree.end();
    while cursor != tree.begin() {
        cursor.move_prev();
        backward.push(cursor.get().unwrap().clone());
    }
    (forward, backward)
}

pub fn random_values(len: usize, max: i32) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(-max..=max)).collect()
}
