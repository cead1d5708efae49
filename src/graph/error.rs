//! Graph error types.

use thiserror::Error;

use crate::collections::ContainerError;

/// Failures returned by [`Graph`](super::Graph) operations.
///
/// All of these are caller-recoverable. An operation that fails leaves the
/// graph exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A lookup was attempted on a graph with no nodes.
    #[error("graph is empty")]
    EmptyGraph,

    /// The operation needs at least two nodes.
    #[error("operation needs at least two nodes, graph has {count}")]
    InsufficientNodes {
        /// Number of nodes present when the operation was attempted.
        count: usize,
    },

    /// A node with this label already exists.
    #[error("node already exists: {0}")]
    DuplicateLabel(String),

    /// No node carries this label.
    #[error("unknown node: {0}")]
    UnknownLabel(String),

    /// A node cannot be connected to itself.
    #[error("cannot connect node {0} to itself")]
    SelfConnection(String),

    /// The two nodes are already connected.
    #[error("nodes already connected: {src} -> {dest}")]
    DuplicateConnection {
        /// Source label.
        src: String,
        /// Destination label.
        dest: String,
    },

    /// An internal container was unexpectedly empty.
    ///
    /// This signals an internal consistency failure, never bad input.
    #[error("internal container error: {0}")]
    EmptyContainer(#[from] ContainerError),
}

impl GraphError {
    /// Returns `true` for errors caused by the caller's arguments, `false`
    /// for internal consistency failures.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::EmptyContainer(_))
    }
}

/// Result alias for graph operations.
pub type Result<T, E = GraphError> = core::result::Result<T, E>;
