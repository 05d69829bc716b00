//! Deterministic enumeration of the strip pixels.
//!
//! The sequence is a binary tree stored in an arena. Each new index is attached to the most
//! recently added node: odd indices become left children, even indices become right
//! children. This policy always produces a single chain `0 -> 1 -> ... -> n - 1`, so the
//! pre-order traversal visits indices in ascending order. The traversal order is computed
//! once during the build and reused by every [`IndexSequence::traverse`] call.

use alloc::vec::Vec;

use crate::{PixelIndex, Result};

/// Position of a node in the sequence arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(usize);

/// A single pixel index with links to its children.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SequenceNode {
    index: PixelIndex,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl SequenceNode {
    const fn new(index: PixelIndex) -> Self {
        Self {
            index,
            left: None,
            right: None,
        }
    }

    #[must_use]
    pub const fn index(&self) -> PixelIndex {
        self.index
    }

    #[must_use]
    pub const fn left(&self) -> Option<NodeId> {
        self.left
    }

    #[must_use]
    pub const fn right(&self) -> Option<NodeId> {
        self.right
    }
}

/// Every pixel index of the strip, each one exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSequence {
    nodes: Vec<SequenceNode>,
    order: Vec<PixelIndex>,
}

impl IndexSequence {
    /// Builds a sequence over the indices `0..len`.
    ///
    /// Fails with [`Error::Allocation`](crate::Error::Allocation) if the node storage cannot
    /// be reserved.
    pub fn build(len: u16) -> Result<Self> {
        let capacity = usize::from(len);

        let mut nodes: Vec<SequenceNode> = Vec::new();
        nodes.try_reserve_exact(capacity)?;
        for index in (0..len).map(PixelIndex) {
            let id = NodeId(nodes.len());
            if let Some(tail) = nodes.last_mut() {
                if index.is_even() {
                    tail.right = Some(id);
                } else {
                    tail.left = Some(id);
                }
            }
            nodes.push(SequenceNode::new(index));
        }

        let mut order: Vec<PixelIndex> = Vec::new();
        order.try_reserve_exact(capacity)?;
        // Pre-order walk: node, then left branch, then right branch.
        let mut pending: Vec<NodeId> = Vec::new();
        if !nodes.is_empty() {
            pending.push(NodeId(0));
        }
        while let Some(id) = pending.pop() {
            let node = nodes[id.0];
            order.push(node.index);
            pending.extend(node.right);
            pending.extend(node.left);
        }

        Ok(Self { nodes, order })
    }

    /// Returns the number of indices in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the first node of the sequence.
    #[must_use]
    pub fn root(&self) -> Option<&SequenceNode> {
        self.nodes.first()
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&SequenceNode> {
        self.nodes.get(id.0)
    }

    /// Returns the indices in traversal order.
    #[must_use]
    pub fn order(&self) -> &[PixelIndex] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = PixelIndex> + '_ {
        self.order.iter().copied()
    }

    /// Invokes `visit` for every index in traversal order.
    ///
    /// Stops at the first error returned by the visitor.
    pub fn traverse<F>(&self, visit: F) -> Result<()>
    where
        F: FnMut(PixelIndex) -> Result<()>,
    {
        self.iter().try_for_each(visit)
    }

    /// Frees the node storage.
    pub fn release(self) {
        drop(self);
    }
}

impl<'a> IntoIterator for &'a IndexSequence {
    type Item = PixelIndex;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, PixelIndex>>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::IndexSequence;
    use crate::{Error, PixelIndex};

    fn visited(sequence: &IndexSequence) -> Vec<u16> {
        let mut indices = Vec::new();
        sequence
            .traverse(|index| {
                indices.push(index.0);
                Ok(())
            })
            .unwrap();
        indices
    }

    #[test]
    fn test_visits_every_index_once() {
        for len in 1..=300_u16 {
            let sequence = IndexSequence::build(len).unwrap();
            assert_eq!(sequence.len(), usize::from(len));

            let mut indices = visited(&sequence);
            indices.sort_unstable();
            indices.dedup();
            assert_eq!(indices, (0..len).collect::<Vec<_>>(), "len {len}");
        }
    }

    #[test]
    fn test_traversal_order_is_stable() {
        let sequence = IndexSequence::build(45).unwrap();

        let first = visited(&sequence);
        let second = visited(&sequence);
        assert_eq!(first, second);
        assert_eq!(first, (0..45).collect::<Vec<_>>());
        assert_eq!(sequence.iter().collect::<Vec<_>>(), sequence.order());
    }

    #[test]
    fn test_chain_construction_policy() {
        let sequence = IndexSequence::build(10).unwrap();

        let mut node = sequence.root().unwrap();
        assert_eq!(node.index(), PixelIndex(0));
        let mut count = 1;
        loop {
            let next = match (node.left(), node.right()) {
                (Some(left), None) => {
                    let child = sequence.node(left).unwrap();
                    assert!(!child.index().is_even(), "left child {}", child.index());
                    child
                }
                (None, Some(right)) => {
                    let child = sequence.node(right).unwrap();
                    assert!(child.index().is_even(), "right child {}", child.index());
                    child
                }
                (None, None) => break,
                (Some(_), Some(_)) => panic!("node {} has two children", node.index()),
            };
            assert_eq!(next.index().0, node.index().0 + 1);
            node = next;
            count += 1;
        }
        assert_eq!(count, 10);
    }

    #[test]
    fn test_single_index() {
        let sequence = IndexSequence::build(1).unwrap();
        assert_eq!(visited(&sequence), [0]);

        let root = sequence.root().unwrap();
        assert_eq!(root.left(), None);
        assert_eq!(root.right(), None);
    }

    #[test]
    fn test_empty_sequence() {
        let sequence = IndexSequence::build(0).unwrap();
        assert!(sequence.is_empty());
        assert!(sequence.root().is_none());
        assert!(visited(&sequence).is_empty());
    }

    #[test]
    fn test_traverse_stops_on_error() {
        let sequence = IndexSequence::build(8).unwrap();

        let mut seen = 0;
        let result = sequence.traverse(|index| {
            if index.0 == 3 {
                return Err(Error::PixelOutOfRange);
            }
            seen += 1;
            Ok(())
        });
        assert_eq!(result, Err(Error::PixelOutOfRange));
        assert_eq!(seen, 3);
    }

    #[test]
    fn test_release_after_traversal() {
        let sequence = IndexSequence::build(45).unwrap();
        let snapshot = visited(&sequence);
        sequence.release();

        // A rebuilt sequence is indistinguishable from the released one.
        let rebuilt = IndexSequence::build(45).unwrap();
        assert_eq!(visited(&rebuilt), snapshot);
    }
}
