//! Graph nodes and their stable handles.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::collections::{sequence, Sequence};

/// A stable handle to a node inside one [`Graph`](super::Graph).
///
/// Nodes are never removed, so a handle stays valid for the lifetime of the
/// graph that issued it. Handles are dense: the n-th added node has index n.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The node's position in insertion order.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A labeled node and its outgoing adjacency.
///
/// Neighbours are non-owning [`NodeId`] handles into the owning graph's node
/// store, kept in the order the connections were made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    label: String,
    neighbours: Sequence<NodeId>,
}

impl GraphNode {
    pub(crate) fn new(label: String) -> Self {
        Self {
            label,
            neighbours: Sequence::new(),
        }
    }

    /// The node's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Appends `other` to the adjacency. No duplicate check is made here;
    /// the graph decides edge semantics.
    pub(crate) fn add_neighbour(&mut self, other: NodeId) {
        self.neighbours.insert_last(other);
    }

    /// Handles of the adjacent nodes, in connection order.
    pub fn neighbours(&self) -> sequence::Iter<'_, NodeId> {
        self.neighbours.iter()
    }

    /// Returns `true` if `other` is in this node's adjacency.
    pub fn has_neighbour(&self, other: NodeId) -> bool {
        self.neighbours.contains(&other)
    }

    /// Number of outgoing adjacency entries.
    pub fn degree(&self) -> usize {
        self.neighbours.len()
    }
}
