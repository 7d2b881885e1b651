//! Cursors and iterators over a [`SplayTree`].
//!
//! Moving a cursor only reads the tree, so it never splays. The in-order successor is
//! found through the parent links, without any stack.

use super::splay::SplayTree;
use super::{NodeId, Side, TreeId};
use crate::order::NaturalOrder;

/// A position in the in-order sequence of a tree: either a node, or past-the-end.
///
/// Cursors borrow the tree, so the tree can't change while a cursor exists.
/// Use [`Cursor::position`] to get a detached handle.
///
/// Two cursors are equal only if they belong to the same tree and point at the same
/// position. In particular, the `end()` cursors of two different trees are not equal.
pub struct Cursor<'a, T, O = NaturalOrder> {
    tree: &'a SplayTree<T, O>,
    current: Option<NodeId>,
}

impl<'a, T, O> Cursor<'a, T, O> {
    pub(crate) fn new(tree: &'a SplayTree<T, O>, current: Option<NodeId>) -> Self {
        Cursor { tree, current }
    }

    /// The value at the cursor, or `None` at the end.
    pub fn get(&self) -> Option<&'a T> {
        let tree = self.tree;
        Some(tree.arena[self.current?].value())
    }

    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    pub fn tree(&self) -> &'a SplayTree<T, O> {
        self.tree
    }

    /// A handle to this position that doesn't borrow the tree.
    pub fn position(&self) -> Position {
        Position {
            tree: self.tree.id,
            node: self.current,
        }
    }

    /// Moves to the next value in order. Moving past the largest value gives the end
    /// position. Moving from the end stays at the end.
    pub fn move_next(&mut self) {
        self.step(Side::Right);
    }

    /// Moves to the previous value in order. From the end, moves to the largest value
    /// (if there is one). Moving back from the smallest value gives the end position.
    pub fn move_prev(&mut self) {
        self.step(Side::Left);
    }

    /// Returns a cursor at the next position, leaving this one in place.
    pub fn peek_next(&self) -> Self {
        let mut res = *self;
        res.move_next();
        res
    }

    /// Returns a cursor at the previous position, leaving this one in place.
    pub fn peek_prev(&self) -> Self {
        let mut res = *self;
        res.move_prev();
        res
    }

    // `Side::Right` steps forward, `Side::Left` steps back.
    fn step(&mut self, side: Side) {
        let tree = self.tree;
        let arena = &tree.arena;
        let current = match self.current {
            Some(current) => current,
            None => {
                // only stepping back from the end goes anywhere
                if side == Side::Left {
                    self.current = tree.root.map(|root| arena.extreme(root, Side::Right));
                }
                return;
            }
        };

        self.current = match arena.son(current, side) {
            Some(son) => Some(arena.extreme(son, !side)),
            None => {
                // climb while we are coming from the `side` son
                let mut node = current;
                loop {
                    match arena.parent(node) {
                        None => break None,
                        Some(parent) if arena.son(parent, side) == Some(node) => node = parent,
                        Some(parent) => break Some(parent),
                    }
                }
            }
        };
    }
}

impl<'a, T, O> Clone for Cursor<'a, T, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T, O> Copy for Cursor<'a, T, O> {}

impl<'a, T, O> PartialEq for Cursor<'a, T, O> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.current == other.current
    }
}

impl<'a, T, O> Eq for Cursor<'a, T, O> {}

impl<'a, T: std::fmt::Debug, O> std::fmt::Debug for Cursor<'a, T, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("Cursor").field(value).finish(),
            None => f.write_str("Cursor(end)"),
        }
    }
}

/// A position detached from the tree's borrow, as returned by [`Cursor::position`].
/// It stays meaningful for as long as the tree lives, since nodes are never moved.
/// It remembers which tree it came from, and positions from different trees are
/// never equal, not even their end positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    tree: TreeId,
    node: Option<NodeId>,
}

impl Position {
    pub fn tree(self) -> TreeId {
        self.tree
    }

    pub fn node(self) -> Option<NodeId> {
        self.node
    }

    pub fn is_end(self) -> bool {
        self.node.is_none()
    }
}

/// In-order iterator over a [`SplayTree`]. Can also be iterated from the back.
pub struct Iter<'a, T, O = NaturalOrder> {
    front: Cursor<'a, T, O>,
    // one past the last value that `next_back` will return
    back: Cursor<'a, T, O>,
    remaining: usize,
}

impl<'a, T, O> Iter<'a, T, O> {
    pub(crate) fn new(tree: &'a SplayTree<T, O>) -> Self {
        Iter {
            front: tree.begin(),
            back: tree.end(),
            remaining: tree.len(),
        }
    }
}

impl<'a, T, O> Clone for Iter<'a, T, O> {
    fn clone(&self) -> Self {
        Iter {
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T, O> Iterator for Iter<'a, T, O> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.front.get()?;
        self.front.move_next();
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, O> DoubleEndedIterator for Iter<'a, T, O> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        self.back.move_prev();
        self.remaining -= 1;
        self.back.get()
    }
}

impl<'a, T, O> ExactSizeIterator for Iter<'a, T, O> {}

impl<'a, T, O> std::iter::FusedIterator for Iter<'a, T, O> {}
