//! # `taurus` - Trade Pair Graph Engine
//!
//! Models an exchange's tradable pairs as a labeled graph and answers
//! adjacency, traversal and path questions about it: which assets trade
//! directly against each other, which assets can be reached from a starting
//! asset, and every chain of trades that turns one asset into another.
//!
//! ## Architecture
//!
//! The crate is layered leaves first:
//!
//! 1. **Containers** ([`collections`]): `Sequence` (arena-backed linked
//!    list), `Queue` (FIFO over `Sequence`) and `Stack` (LIFO).
//! 2. **Graph engine** ([`graph`]): a [`Graph`] owns every node, keyed by
//!    unique label, with fixed directedness. Adjacency is stored as stable
//!    [`NodeId`] handles, so nodes never point at each other directly.
//! 3. **Traversals**: breadth-first, depth-first and lazy simple-path
//!    enumeration. Each call carries its own visited set and an explicit work
//!    stack, so calls never leak state into each other and deep graphs cannot
//!    overflow the thread stack.
//! 4. **Boundary layers**: [`market`] turns an exchange-info document into a
//!    graph and [`render`] turns traversal results into text.
//!
//! ## Guarantees
//!
//! - Labels are unique; `add` and `connect` either fully succeed or leave the
//!   graph untouched.
//! - Undirected graphs keep adjacency symmetric. No adjacency list ever holds
//!   the same node twice.
//! - Traversals return data; nothing in the engine prints.
//!
//! ## Example
//!
//! ```rust
//! use taurus::Graph;
//!
//! let mut graph = Graph::undirected();
//! for asset in ["BTC", "ETH", "BNB", "USDT"] {
//!     graph.add(asset)?;
//! }
//! graph.connect("BTC", "ETH")?;
//! graph.connect("ETH", "BNB")?;
//! graph.connect("BTC", "BNB")?;
//! graph.connect("BNB", "USDT")?;
//!
//! assert_eq!(graph.bfs(), ["BTC", "ETH", "BNB", "USDT"]);
//!
//! let paths: Vec<Vec<String>> = graph.enumerate_paths("BTC", "USDT")?.collect();
//! assert_eq!(paths.len(), 2);
//! # Ok::<(), taurus::GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod graph;
pub mod market;
pub mod render;

pub use collections::{ContainerError, Queue, Sequence, Stack};
pub use graph::{Graph, GraphError, GraphNode, NodeId, Paths};
pub use market::{trade_graph, ExchangeInfo, SymbolInfo};
pub use render::PathReport;

// Compile-time assertions for handle layout.
const _: () = {
    use core::mem;

    // Handles are plain indices.
    assert!(mem::size_of::<NodeId>() == mem::size_of::<usize>());
    assert!(mem::align_of::<NodeId>() == mem::align_of::<usize>());
};
