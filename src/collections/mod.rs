//! Sequential containers the graph engine is built on.
//!
//! - `sequence`: ordered, append-at-end linked list
//! - `queue`: FIFO adapter over `Sequence`
//! - `stack`: LIFO container

pub mod queue;
pub mod sequence;
pub mod stack;

pub use queue::Queue;
pub use sequence::Sequence;
pub use stack::Stack;

use thiserror::Error;

/// The error type for removing or peeking into an empty container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// The container holds no elements.
    #[error("container is empty")]
    Empty,
}
