//! The labeled graph engine.
//!
//! - `labeled`: node storage, connections and adjacency queries
//! - `traversal`: breadth-first, depth-first and simple-path enumeration
//! - `node`: nodes and their stable handles
//! - `error`: failure kinds shared by every graph operation

pub mod error;
pub mod labeled;
pub mod node;
pub mod traversal;
pub(crate) mod visited;

pub use error::{GraphError, Result};
pub use labeled::Graph;
pub use node::{GraphNode, NodeId};
pub use traversal::Paths;
