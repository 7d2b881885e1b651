//! This module contains the splay tree and the pieces it is built from.
//!
//! Nodes live in an arena owned by the tree and refer to each other by [`NodeId`].
//! Children are owned through the arena, the parent link is only an index, so there
//! are no reference cycles to worry about.

pub mod cursor;
pub mod debug;
pub mod node;
pub mod splay;

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

/// Which son of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl std::ops::Not for Side {
    type Output = Side;
    fn not(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Stable address of a node inside its tree.
/// A node keeps the same id for as long as the tree lives: rotations only rewrite
/// the links around it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Identifies a tree, so that positions can be matched to the tree they came from.
/// Every constructed tree gets a fresh id, and a clone keeps the id of its original,
/// since its nodes sit at the same ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TreeId(u64);

impl TreeId {
    pub(crate) fn fresh() -> TreeId {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        TreeId(NEXT.fetch_add(1, AtomicOrdering::Relaxed))
    }
}
