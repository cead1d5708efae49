//! A labeled adjacency-list graph.
//!
//! Nodes are identified by unique string labels and stored densely in
//! insertion order; edges are kept as [`NodeId`] handles in each node's
//! adjacency. Directedness is fixed at construction:
//! - directed: `connect(a, b)` adds `a -> b` only
//! - undirected: `connect(a, b)` adds `a -> b` and `b -> a`
//!
//! Nodes and edges are only ever added, never removed.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add` | \(O(1)\) amortized | Label index is a hash map |
//! | `has` / `get` | \(O(1)\) expected | |
//! | `connect` | \(O(\text{out-degree})\) | Checks for an existing edge first |
//! | `are_neighbours` | \(O(\text{out-degree})\) | Linear scan of the source adjacency |

use std::collections::HashMap;

use tracing::debug;

use super::error::{GraphError, Result};
use super::node::{GraphNode, NodeId};
use crate::collections::sequence;

/// A labeled graph with fixed directedness.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    index: HashMap<String, NodeId>,
    directed: bool,
    connection_count: usize,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            directed,
            connection_count: 0,
        }
    }

    /// Creates an empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Creates an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Builds a graph from `(src, dest)` pairs, adding each label the first
    /// time it appears.
    ///
    /// # Errors
    /// Fails like [`Graph::connect`] for self connections and repeated pairs.
    pub fn from_edges<I, S>(directed: bool, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut graph = Self::new(directed);
        for (src, dest) in edges {
            let (src, dest) = (src.as_ref(), dest.as_ref());
            for label in [src, dest] {
                if !graph.has(label) {
                    graph.add(label)?;
                }
            }
            graph.connect(src, dest)?;
        }
        Ok(graph)
    }

    /// Returns `true` if edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of successful [`Graph::connect`] calls.
    ///
    /// An undirected connection counts once even though it creates two
    /// adjacency entries.
    pub fn connection_count(&self) -> usize {
        self.connection_count
    }

    /// Adds a node labeled `label`.
    ///
    /// # Errors
    /// [`GraphError::DuplicateLabel`] if the label is taken.
    pub fn add(&mut self, label: impl Into<String>) -> Result<NodeId> {
        let label = label.into();
        if self.index.contains_key(&label) {
            return Err(rejected(GraphError::DuplicateLabel(label)));
        }

        let id = NodeId::new(self.nodes.len());
        debug!(%label, node = id.index(), "node added");
        self.index.insert(label.clone(), id);
        self.nodes.push(GraphNode::new(label));
        Ok(id)
    }

    /// Connects `src` to `dest`, and `dest` back to `src` when undirected.
    ///
    /// # Errors
    /// Checked in this order:
    /// - [`GraphError::InsufficientNodes`] with fewer than two nodes
    /// - [`GraphError::SelfConnection`] if `src == dest`
    /// - [`GraphError::UnknownLabel`] if either label is absent
    /// - [`GraphError::DuplicateConnection`] if the edge already exists
    pub fn connect(&mut self, src: &str, dest: &str) -> Result<()> {
        self.require_pair()?;
        if src == dest {
            return Err(rejected(GraphError::SelfConnection(src.to_owned())));
        }
        let src_id = self.lookup(src)?;
        let dest_id = self.lookup(dest)?;
        if self.nodes[src_id.index()].has_neighbour(dest_id) {
            return Err(rejected(GraphError::DuplicateConnection {
                src: src.to_owned(),
                dest: dest.to_owned(),
            }));
        }

        self.nodes[src_id.index()].add_neighbour(dest_id);
        if !self.directed {
            self.nodes[dest_id.index()].add_neighbour(src_id);
        }
        self.connection_count += 1;
        debug!(src, dest, directed = self.directed, "nodes connected");
        Ok(())
    }

    /// Returns `true` if a node is labeled `label`.
    pub fn has(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Returns the node labeled `label`.
    ///
    /// # Errors
    /// [`GraphError::EmptyGraph`] on an empty graph, otherwise
    /// [`GraphError::UnknownLabel`] if absent.
    pub fn get(&self, label: &str) -> Result<&GraphNode> {
        self.id_of(label).map(|id| &self.nodes[id.index()])
    }

    /// Returns the handle of the node labeled `label`.
    ///
    /// # Errors
    /// Same as [`Graph::get`].
    pub fn id_of(&self, label: &str) -> Result<NodeId> {
        if self.nodes.is_empty() {
            return Err(rejected(GraphError::EmptyGraph));
        }
        self.lookup(label)
    }

    /// Returns the node behind a handle, if it belongs to this graph.
    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.get(id.index())
    }

    /// Returns `true` if the adjacency of `src` holds `dest`.
    ///
    /// Edge direction is respected exactly as stored. Unknown labels are
    /// simply not neighbours.
    ///
    /// # Errors
    /// [`GraphError::InsufficientNodes`] with fewer than two nodes.
    pub fn are_neighbours(&self, src: &str, dest: &str) -> Result<bool> {
        self.require_pair()?;
        let (Some(&src_id), Some(&dest_id)) = (self.index.get(src), self.index.get(dest)) else {
            return Ok(false);
        };
        Ok(self.nodes[src_id.index()].has_neighbour(dest_id))
    }

    /// Labels adjacent to `label`, in connection order.
    ///
    /// # Errors
    /// Same as [`Graph::get`].
    pub fn neighbours(&self, label: &str) -> Result<impl Iterator<Item = &str> + '_> {
        let node = self.get(label)?;
        Ok(node.neighbours().map(|&id| self.label(id)))
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &GraphNode> + '_ {
        self.nodes.iter()
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.nodes.iter().map(GraphNode::label)
    }

    /// Label of a node known to be in this graph.
    pub(crate) fn label(&self, id: NodeId) -> &str {
        self.nodes[id.index()].label()
    }

    /// Cursor over the adjacency of a node known to be in this graph.
    pub(crate) fn adjacency(&self, id: NodeId) -> sequence::Iter<'_, NodeId> {
        self.nodes[id.index()].neighbours()
    }

    fn lookup(&self, label: &str) -> Result<NodeId> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| rejected(GraphError::UnknownLabel(label.to_owned())))
    }

    fn require_pair(&self) -> Result<()> {
        match self.nodes.len() {
            count @ (0 | 1) => Err(rejected(GraphError::InsufficientNodes { count })),
            _ => Ok(()),
        }
    }
}

fn rejected(err: GraphError) -> GraphError {
    debug!(%err, "graph operation rejected");
    err
}
