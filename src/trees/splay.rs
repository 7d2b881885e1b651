//! Implementation of splay trees.
//! Every successful access moves the accessed node to the root with a series of
//! splay steps, which gives amortized `O(log n)` cost per operation.
//!
//! The tree is an ordered set: values are kept in the order given by the tree's
//! [`StrictWeakOrder`], and equivalent values are stored only once.

use super::cursor::{Cursor, Iter, Position};
use super::node::Arena;
use super::{NodeId, Side, TreeId};
use crate::error::{Result, SplayError};
use crate::order::{NaturalOrder, StrictWeakOrder};

/// A splay tree holding values of type `T`, ordered by `O`.
///
/// Nodes are kept in an arena and never move, so a tree can be moved around freely.
/// Use [`std::mem::take`] to move the contents out and leave an empty tree behind.
#[derive(Clone)]
pub struct SplayTree<T, O = NaturalOrder> {
    pub(crate) id: TreeId,
    pub(crate) arena: Arena<T>,
    pub(crate) root: Option<NodeId>,
    pub(crate) order: O,
    pub(crate) node_count: usize,
}

impl<T: Ord> SplayTree<T> {
    /// Creates an empty [`SplayTree`] using the natural order of `T`.
    pub fn new() -> Self {
        SplayTree::with_order(NaturalOrder)
    }
}

impl<T, O> SplayTree<T, O> {
    /// Creates an empty [`SplayTree`] with the given order.
    /// The order can't be changed afterwards.
    pub fn with_order(order: O) -> Self {
        SplayTree {
            id: TreeId::fresh(),
            arena: Arena::new(),
            root: None,
            order,
            node_count: 0,
        }
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.node_count
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn order(&self) -> &O {
        &self.order
    }

    pub fn id(&self) -> TreeId {
        self.id
    }

    /// The value at the root, i.e., the most recently inserted or found value.
    pub fn root_value(&self) -> Option<&T> {
        Some(self.arena[self.root?].value())
    }

    /// A cursor at the smallest value, or [`end`](SplayTree::end) if the tree is empty.
    pub fn begin(&self) -> Cursor<'_, T, O> {
        let first = self.root.map(|root| self.arena.extreme(root, Side::Left));
        Cursor::new(self, first)
    }

    /// The past-the-end cursor. Moving it backwards reaches the largest value.
    pub fn end(&self) -> Cursor<'_, T, O> {
        Cursor::new(self, None)
    }

    /// Reattaches a [`Position`] to this tree.
    /// Returns `None` if the position came from another tree. Positions taken from a
    /// tree are also valid on its clones.
    pub fn cursor_at(&self, position: Position) -> Option<Cursor<'_, T, O>> {
        if position.tree() != self.id {
            return None;
        }
        match position.node() {
            None => Some(self.end()),
            Some(id) => {
                self.arena.get(id)?;
                Some(Cursor::new(self, Some(id)))
            }
        }
    }

    /// In-order iterator over the values.
    pub fn iter(&self) -> Iter<'_, T, O> {
        Iter::new(self)
    }

    /// Removing values is not supported. Always fails with
    /// [`SplayError::NotImplemented`], even on an empty tree.
    pub fn erase(&mut self, _value: &T) -> Result<usize> {
        Err(SplayError::NotImplemented("erase"))
    }

    /// Removing values is not supported. Always fails with
    /// [`SplayError::NotImplemented`], even on an empty tree, and whichever tree the
    /// position came from.
    pub fn erase_at(&mut self, _position: Position) -> Result<Position> {
        Err(SplayError::NotImplemented("erase"))
    }

    /// Rotates `x` down to the left, promoting its right son.
    pub(crate) fn rotate_left(&mut self, x: NodeId) {
        self.rotate(x, Side::Left);
    }

    /// Rotates `y` down to the right, promoting its left son.
    pub(crate) fn rotate_right(&mut self, y: NodeId) {
        self.rotate(y, Side::Right);
    }

    /// Rotates `x` down towards `side`. The son of `x` on the other side takes its
    /// place, and the inner subtree of that son moves over to `x`.
    /// Only local links are touched.
    fn rotate(&mut self, x: NodeId, side: Side) {
        let y = match self.arena.son(x, !side) {
            Some(y) => y,
            None => return, // nothing to promote
        };

        // the inner subtree of y changes hands
        let inner = self.arena.son(y, side);
        *self.arena[x].son_mut(!side) = inner;
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(x);
        }

        // y takes x's place under x's old parent
        let parent = self.arena.parent(x);
        self.arena[y].parent = parent;
        match parent {
            None => self.root = Some(y),
            Some(parent) => {
                let x_side = self.arena.side_under(x, parent);
                *self.arena[parent].son_mut(x_side) = Some(y);
            }
        }

        *self.arena[y].son_mut(side) = Some(x);
        self.arena[x].parent = Some(y);
    }

    /// Splays `x` to the root. Returns the number of splay steps performed.
    ///
    /// About the amortized complexity: every step except a final zig costs at most
    /// `3 (log(size after) - log(size before))` potential, so the whole splay, and the
    /// search that led to `x`, is paid for by `O(log n)`.
    pub(crate) fn splay(&mut self, x: NodeId) -> usize {
        let mut steps = 0;
        while let Some(parent) = self.arena.parent(x) {
            let x_side = self.arena.side_under(x, parent);
            match self.arena.parent(parent) {
                // zig: the parent is the root
                None => self.rotate(parent, !x_side),
                Some(grandparent) => {
                    let parent_side = self.arena.side_under(parent, grandparent);
                    if x_side == parent_side {
                        // zig-zig
                        self.rotate(grandparent, !x_side);
                        self.rotate(parent, !x_side);
                    } else {
                        // zig-zag. the first rotation changes x's parent, so look it up again
                        self.rotate(parent, !x_side);
                        if let Some(new_parent) = self.arena.parent(x) {
                            self.rotate(new_parent, x_side);
                        }
                    }
                }
            }
            steps += 1;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(node = x.index(), steps, "splayed to root");
        steps
    }
}

impl<T, O: StrictWeakOrder<T>> SplayTree<T, O> {
    /// Creates a tree with the given order, and inserts the values one by one.
    /// Later duplicates are ignored.
    pub fn from_values_with_order<I>(values: I, order: O) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = SplayTree::with_order(order);
        tree.insert_all(values);
        tree
    }

    /// Inserts the value.
    ///
    /// If an equivalent value is already present, the tree is left untouched
    /// (not even splayed), and the returned cursor points at the existing value
    /// with `false`. Otherwise the new node is splayed to the root and the
    /// returned cursor points at it with `true`.
    ///```
    /// use spica::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// assert!(tree.insert(5).1);
    /// let (cursor, inserted) = tree.insert(5);
    /// assert!(!inserted);
    /// assert_eq!(cursor.get(), Some(&5));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> (Cursor<'_, T, O>, bool) {
        let (id, inserted) = self.insert_node(value);
        (Cursor::new(self, Some(id)), inserted)
    }

    /// Inserts every value in sequence order. Equivalent to calling
    /// [`insert`](SplayTree::insert) on each of them.
    pub fn insert_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.insert_node(value);
        }
    }

    fn insert_node(&mut self, value: T) -> (NodeId, bool) {
        let mut current = match self.root {
            Some(root) => root,
            None => {
                let id = self.arena.alloc(value, None);
                self.root = Some(id);
                self.node_count += 1;
                return (id, true);
            }
        };

        loop {
            let side = match self.direction(&value, current) {
                Some(side) => side,
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(node = current.index(), "value already present");
                    return (current, false);
                }
            };
            match self.arena.son(current, side) {
                Some(son) => current = son,
                None => {
                    let id = self.arena.alloc(value, Some(current));
                    *self.arena[current].son_mut(side) = Some(id);
                    self.node_count += 1;
                    self.splay(id);
                    return (id, true);
                }
            }
        }
    }

    /// Searches for a value equivalent to `value`. If found, it is splayed to the root
    /// and a cursor to it is returned. Otherwise returns [`end`](SplayTree::end),
    /// and the tree is left as it was.
    ///```
    /// use spica::SplayTree;
    ///
    /// let mut tree: SplayTree<i32> = vec![4, 6, 3, 1].into_iter().collect();
    /// assert_eq!(tree.find(&3).get(), Some(&3));
    /// assert_eq!(tree.root_value(), Some(&3));
    /// assert!(tree.find(&7).is_end());
    /// ```
    pub fn find(&mut self, value: &T) -> Cursor<'_, T, O> {
        let found = self.locate(value);
        if let Some(id) = found {
            self.splay(id);
        }
        Cursor::new(self, found)
    }

    /// Plain binary search, without splaying.
    fn locate(&self, value: &T) -> Option<NodeId> {
        let mut current = self.root;
        while let Some(id) = current {
            match self.direction(value, id) {
                None => return Some(id),
                Some(side) => current = self.arena.son(id, side),
            }
        }
        None
    }

    /// Which way to go from `id` when searching for `value`.
    /// `None` if the node holds a value equivalent to `value`.
    fn direction(&self, value: &T, id: NodeId) -> Option<Side> {
        let here = self.arena[id].value();
        if self.order.less(value, here) {
            Some(Side::Left)
        } else if self.order.less(here, value) {
            Some(Side::Right)
        } else {
            None
        }
    }
}

impl<T, O: Default> Default for SplayTree<T, O> {
    fn default() -> Self {
        SplayTree::with_order(O::default())
    }
}

impl<T: std::fmt::Debug, O> std::fmt::Debug for SplayTree<T, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, O: StrictWeakOrder<T> + Default> std::iter::FromIterator<T> for SplayTree<T, O> {
    /// Inserts the values one by one, in order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        SplayTree::from_values_with_order(iter, O::default())
    }
}

impl<T, O: StrictWeakOrder<T>> Extend<T> for SplayTree<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<'a, T, O> IntoIterator for &'a SplayTree<T, O> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, O>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
