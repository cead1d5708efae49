//! Per-call visited markers for graph traversals.
//!
//! Every traversal allocates its own `VisitedSet` and drops it on return, so
//! no visitation state survives between calls and two traversals of the same
//! graph never observe each other's marks.

use super::node::NodeId;

/// A dense visited set keyed by [`NodeId`].
#[derive(Debug, Clone)]
pub(crate) struct VisitedSet {
    flags: Vec<bool>,
    count: usize,
}

impl VisitedSet {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
            count: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.flags.len()
    }

    /// Number of nodes currently marked.
    #[inline]
    pub(crate) fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub(crate) fn was_visited(&self, node: NodeId) -> bool {
        self.flags.get(node.index()).copied().unwrap_or(false)
    }

    /// Returns `true` iff this call observed the node as not-yet-visited and marks it visited.
    #[inline]
    pub(crate) fn try_visit(&mut self, node: NodeId) -> bool {
        match self.flags.get_mut(node.index()) {
            Some(flag) if !*flag => {
                *flag = true;
                self.count += 1;
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub(crate) fn visit(&mut self, node: NodeId) {
        self.try_visit(node);
    }

    #[inline]
    pub(crate) fn unvisit(&mut self, node: NodeId) {
        if let Some(flag) = self.flags.get_mut(node.index()) {
            if *flag {
                *flag = false;
                self.count -= 1;
            }
        }
    }
}
