//! Node storage.
//!
//! Every node is allocated once, by insertion, and is never moved or freed
//! until the whole arena goes away.

use super::{NodeId, Side};

/// A single node. The sons are owned through the arena, `parent` is a
/// back-reference and is `None` only for the root.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<T> Node<T> {
    pub fn new(value: T, parent: Option<NodeId>) -> Node<T> {
        Node {
            value,
            parent,
            left: None,
            right: None,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn son(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn son_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// The arena holding all of a tree's nodes.
#[derive(Clone, Debug)]
pub struct Arena<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Arena { nodes: vec![] }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn alloc(&mut self, value: T, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(value, parent));
        id
    }

    /// Returns `None` for ids that were never allocated here.
    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.0)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self[id].parent
    }

    pub fn son(&self, id: NodeId, side: Side) -> Option<NodeId> {
        self[id].son(side)
    }

    /// Which son of `parent` the node `id` is. `id` must be a son of `parent`.
    pub fn side_under(&self, id: NodeId, parent: NodeId) -> Side {
        if self[parent].left == Some(id) {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Walks down from `id` as far as possible towards `side`.
    /// With `Side::Left` this finds the minimum of the subtree, with `Side::Right` the maximum.
    pub fn extreme(&self, mut id: NodeId, side: Side) -> NodeId {
        while let Some(son) = self.son(id, side) {
            id = son;
        }
        id
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Arena::new()
    }
}

impl<T> std::ops::Index<NodeId> for Arena<T> {
    type Output = Node<T>;
    fn index(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }
}

impl<T> std::ops::IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.0]
    }
}
