//! Testing and debugging support for [`SplayTree`].
//!
//! A splay tree can be as deep as it is large (inserting sorted values builds a path),
//! so both walks here keep their own stack instead of recursing.

use super::splay::SplayTree;
use super::{NodeId, Side};
use crate::error::{Result, SplayError};
use crate::order::StrictWeakOrder;

/// One entry of [`SplayTree::dump`]: the depth of a node (the root is at depth zero)
/// and its value.
pub type DumpItem<T> = (usize, T);

/// A node waiting to be checked, with the values its subtree must lie strictly between.
struct Frame {
    id: NodeId,
    lower: Option<NodeId>,
    upper: Option<NodeId>,
}

fn inconsistent(reason: String) -> SplayError {
    #[cfg(feature = "tracing")]
    tracing::debug!(%reason, "tree structure check failed");
    SplayError::InconsistentStructure(reason)
}

impl<T, O: StrictWeakOrder<T>> SplayTree<T, O> {
    /// Checks the structural invariants of the tree:
    /// - The root has no parent.
    /// - Every value in a node's left subtree orders before it, and every value in its
    ///   right subtree orders after it. The whole subtree is checked, not just the sons.
    /// - Every son's parent link points back at its parent.
    /// - No node is reachable twice, and the node count matches the reachable nodes.
    ///
    /// Returns [`SplayError::InconsistentStructure`] on the first violation found.
    /// A violation always means a bug in the tree.
    pub fn check_structure(&self) -> Result<()> {
        let root = match self.root {
            None if self.node_count == 0 => return Ok(()),
            None => {
                return Err(inconsistent(format!(
                    "node count is {} with an empty root",
                    self.node_count
                )))
            }
            Some(root) => root,
        };

        match self.arena.get(root) {
            None => return Err(inconsistent(format!("root {:?} is not in the arena", root))),
            Some(node) if node.parent().is_some() => {
                return Err(inconsistent("root has a parent".to_string()))
            }
            Some(_) => (),
        }

        let mut seen = vec![false; self.arena.len()];
        let mut reachable = 0;
        let mut stack = vec![Frame {
            id: root,
            lower: None,
            upper: None,
        }];
        while let Some(frame) = stack.pop() {
            let node = &self.arena[frame.id];
            if std::mem::replace(&mut seen[frame.id.index()], true) {
                return Err(inconsistent(format!(
                    "node {:?} is reachable twice",
                    frame.id
                )));
            }
            reachable += 1;

            if let Some(lower) = frame.lower {
                if !self.order.less(self.arena[lower].value(), node.value()) {
                    return Err(inconsistent(format!(
                        "node {:?} is out of order with its ancestor {:?}",
                        frame.id, lower
                    )));
                }
            }
            if let Some(upper) = frame.upper {
                if !self.order.less(node.value(), self.arena[upper].value()) {
                    return Err(inconsistent(format!(
                        "node {:?} is out of order with its ancestor {:?}",
                        frame.id, upper
                    )));
                }
            }

            for &side in [Side::Left, Side::Right].iter() {
                let son = match node.son(side) {
                    None => continue,
                    Some(son) => son,
                };
                match self.arena.get(son) {
                    None => {
                        return Err(inconsistent(format!(
                            "{:?} son of node {:?} is not in the arena",
                            side, frame.id
                        )))
                    }
                    Some(son_node) if son_node.parent() != Some(frame.id) => {
                        return Err(inconsistent(format!(
                            "{:?} son of node {:?} has a bad parent",
                            side, frame.id
                        )))
                    }
                    Some(_) => (),
                }
                let (lower, upper) = match side {
                    Side::Left => (frame.lower, Some(frame.id)),
                    Side::Right => (Some(frame.id), frame.upper),
                };
                stack.push(Frame {
                    id: son,
                    lower,
                    upper,
                });
            }
        }

        if reachable != self.node_count {
            return Err(inconsistent(format!(
                "node count ({}) != reachable nodes ({})",
                self.node_count, reachable
            )));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(nodes = reachable, "tree structure verified");
        Ok(())
    }
}

impl<T: Clone, O> SplayTree<T, O> {
    /// Lists every node in order, with its depth. Enough to pin down the exact shape
    /// of the tree, which is what tests use it for.
    ///```
    /// use spica::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(5);
    /// tree.insert(3);
    /// assert_eq!(tree.dump(), vec![(0, 3), (1, 5)]);
    /// ```
    pub fn dump(&self) -> Vec<DumpItem<T>> {
        let mut result = Vec::with_capacity(self.node_count);
        let mut stack: Vec<(NodeId, usize)> = vec![];
        let mut next = self.root.map(|root| (root, 0));
        loop {
            while let Some((id, depth)) = next {
                stack.push((id, depth));
                next = self.arena.son(id, Side::Left).map(|son| (son, depth + 1));
            }
            let (id, depth) = match stack.pop() {
                None => break,
                Some(item) => item,
            };
            result.push((depth, self.arena[id].value().clone()));
            next = self.arena.son(id, Side::Right).map(|son| (son, depth + 1));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SplayTree<i32> {
        // 8 at the root, the rest hanging off its left
        vec![5, 3, 7, 4, 6, 2, 8].into_iter().collect()
    }

    fn node_of(tree: &SplayTree<i32>, value: i32) -> NodeId {
        let mut cursor = tree.begin();
        while cursor.get() != Some(&value) {
            cursor.move_next();
        }
        cursor.position().node().unwrap()
    }

    fn assert_inconsistent(tree: &SplayTree<i32>) {
        match tree.check_structure() {
            Err(SplayError::InconsistentStructure(_)) => (),
            other => panic!("expected an inconsistent structure, got {:?}", other),
        }
    }

    #[test]
    fn accepts_valid_trees() {
        SplayTree::<i32>::new().check_structure().unwrap();
        sample().check_structure().unwrap();
    }

    #[test]
    fn empty_root_with_nodes() {
        let mut tree = sample();
        tree.root = None;
        assert_inconsistent(&tree);
    }

    #[test]
    fn root_with_parent() {
        let mut tree = sample();
        let root = tree.root.unwrap();
        let other = node_of(&tree, 2);
        tree.arena[root].parent = Some(other);
        assert_inconsistent(&tree);
    }

    #[test]
    fn wrong_count() {
        let mut tree = sample();
        tree.node_count += 1;
        assert_inconsistent(&tree);
    }

    #[test]
    fn bad_parent_link() {
        let mut tree = sample();
        let three = node_of(&tree, 3);
        let eight = node_of(&tree, 8);
        tree.arena[three].parent = Some(eight);
        assert_inconsistent(&tree);
    }

    #[test]
    fn order_deep_in_the_subtree() {
        // 5 at the root, 3 on its left, 4 as the right son of 3
        let mut tree: SplayTree<i32> = vec![3, 4, 5].into_iter().collect();
        assert_eq!(tree.dump(), vec![(2, 3), (1, 4), (0, 5)]);
        let four = node_of(&tree, 4);
        tree.rotate_right(four);
        assert_eq!(tree.dump(), vec![(1, 3), (2, 4), (0, 5)]);
        tree.check_structure().unwrap();

        // put 6 where 4 is: still after its parent 3, but no longer before the root 5.
        // only a check against the whole subtree sees this.
        let four = node_of(&tree, 4);
        tree.arena[four].value = 6;
        assert_inconsistent(&tree);
    }

    #[test]
    fn same_son_on_both_sides() {
        let mut tree: SplayTree<i32> = vec![1, 2].into_iter().collect();
        // 2 at the root, 1 on its left. hang 1 on the right as well.
        let root = tree.root.unwrap();
        let one = node_of(&tree, 1);
        tree.arena[root].right = Some(one);
        assert_inconsistent(&tree);
    }

    #[test]
    fn dump_of_deep_tree() {
        let tree: SplayTree<i32> = (0..100_000).collect();
        let dump = tree.dump();
        assert_eq!(dump.len(), 100_000);
        assert_eq!(dump[0], (99_999, 0));
        assert_eq!(dump[99_999], (0, 99_999));
        tree.check_structure().unwrap();
    }
}
