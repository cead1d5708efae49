//! Breadth-first, depth-first and simple-path traversals over [`Graph`].
//!
//! Traversals return labels rather than printing them; formatting lives in
//! [`crate::render`]. Each call threads its own [`VisitedSet`] and never
//! recurses natively: depth-first work is driven by an explicit [`Stack`] of
//! neighbour cursors, so stack depth is bounded by the heap, not the thread.

use core::iter::FusedIterator;

use tracing::{debug, trace};

use super::error::Result;
use super::labeled::Graph;
use super::node::NodeId;
use super::visited::VisitedSet;
use crate::collections::{sequence, Queue, Stack};

impl Graph {
    /// Breadth-first order from the first inserted node.
    ///
    /// Only nodes reachable from that node are listed. An empty graph yields
    /// an empty order.
    pub fn bfs(&self) -> Vec<String> {
        if self.node_count() == 0 {
            return Vec::new();
        }
        self.bfs_order(NodeId::new(0))
    }

    /// Breadth-first order from `start`.
    ///
    /// # Errors
    /// Fails like [`Graph::get`] when `start` cannot be found.
    pub fn bfs_from(&self, start: &str) -> Result<Vec<String>> {
        let start = self.id_of(start)?;
        Ok(self.bfs_order(start))
    }

    /// Depth-first pre-order over every node.
    ///
    /// Nodes are scanned in insertion order and each unvisited one starts a
    /// new search, so disconnected components are all covered.
    pub fn dfs(&self) -> Vec<String> {
        let mut visited = VisitedSet::new(self.node_count());
        let mut order = Vec::with_capacity(self.node_count());
        for idx in 0..self.node_count() {
            let id = NodeId::new(idx);
            if !visited.was_visited(id) {
                self.dfs_visit(id, &mut visited, &mut order);
            }
        }
        debug!(visited = visited.count(), "dfs finished");
        order
    }

    /// Depth-first pre-order of the nodes reachable from `start`.
    ///
    /// # Errors
    /// Fails like [`Graph::get`] when `start` cannot be found.
    pub fn dfs_from(&self, start: &str) -> Result<Vec<String>> {
        let start = self.id_of(start)?;
        let mut visited = VisitedSet::new(self.node_count());
        let mut order = Vec::new();
        self.dfs_visit(start, &mut visited, &mut order);
        debug!(visited = visited.count(), "dfs finished");
        Ok(order)
    }

    /// Lazily enumerates every simple path from `src` to `dest`.
    ///
    /// Paths include both endpoints. When `src == dest` the only path is the
    /// single node itself. The number of paths can grow exponentially with
    /// graph density; callers that need a bound should stop pulling from the
    /// iterator.
    ///
    /// # Errors
    /// Fails like [`Graph::get`] for either label.
    pub fn enumerate_paths(&self, src: &str, dest: &str) -> Result<Paths<'_>> {
        let src = self.id_of(src)?;
        let dest = self.id_of(dest)?;
        debug!(src = self.label(src), dest = self.label(dest), "enumerating paths");
        Ok(Paths::new(self, src, dest))
    }

    fn bfs_order(&self, start: NodeId) -> Vec<String> {
        let mut visited = VisitedSet::new(self.node_count());
        let mut upcoming = Queue::new();
        let mut order = Vec::new();

        // Nodes are marked when enqueued so none is queued twice.
        visited.visit(start);
        upcoming.enqueue(start);
        order.push(self.label(start).to_owned());

        while let Ok(id) = upcoming.dequeue() {
            for &next in self.adjacency(id) {
                if visited.try_visit(next) {
                    upcoming.enqueue(next);
                    order.push(self.label(next).to_owned());
                }
            }
        }

        debug!(visited = visited.count(), "bfs finished");
        order
    }

    fn dfs_visit(&self, start: NodeId, visited: &mut VisitedSet, order: &mut Vec<String>) {
        debug_assert_eq!(visited.len(), self.node_count());
        let mut frames = Stack::new();

        visited.visit(start);
        order.push(self.label(start).to_owned());
        frames.push(self.adjacency(start));

        loop {
            let step = match frames.peek_mut() {
                Ok(cursor) => cursor.next().copied(),
                Err(_) => break,
            };
            match step {
                Some(next) => {
                    if visited.try_visit(next) {
                        order.push(self.label(next).to_owned());
                        frames.push(self.adjacency(next));
                    }
                }
                None => {
                    let _ = frames.pop();
                }
            }
        }
    }
}

/// Iterator over the simple paths between two nodes.
///
/// Created by [`Graph::enumerate_paths`]. It borrows the graph, so the graph
/// cannot change while paths are being produced. Every yielded path is a
/// fresh `Vec` of labels from source to destination.
pub struct Paths<'g> {
    graph: &'g Graph,
    dest: NodeId,
    start: Option<NodeId>,
    visited: VisitedSet,
    // `path[i]` is the node whose remaining neighbours `frames[i]` walks.
    path: Stack<NodeId>,
    frames: Stack<sequence::Iter<'g, NodeId>>,
    emitted: usize,
}

impl<'g> Paths<'g> {
    fn new(graph: &'g Graph, src: NodeId, dest: NodeId) -> Self {
        Self {
            graph,
            dest,
            start: Some(src),
            visited: VisitedSet::new(graph.node_count()),
            path: Stack::new(),
            frames: Stack::new(),
            emitted: 0,
        }
    }

    /// Number of paths produced so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    fn snapshot(&mut self) -> Vec<String> {
        let path: Vec<String> = self
            .path
            .iter()
            .map(|&id| self.graph.label(id).to_owned())
            .collect();
        self.emitted += 1;
        trace!(path = ?path, "path found");
        path
    }

    fn enter(&mut self, id: NodeId) {
        self.visited.visit(id);
        self.path.push(id);
        self.frames.push(self.graph.adjacency(id));
    }
}

impl Iterator for Paths<'_> {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(src) = self.start.take() {
            if src == self.dest {
                self.path.push(src);
                let path = self.snapshot();
                let _ = self.path.pop();
                return Some(path);
            }
            self.enter(src);
        }

        loop {
            let step = self.frames.peek_mut().ok()?.next().copied();
            match step {
                // The destination is never marked, so every route may reach it.
                Some(next) if next == self.dest => {
                    self.path.push(next);
                    let path = self.snapshot();
                    let _ = self.path.pop();
                    return Some(path);
                }
                Some(next) => {
                    if !self.visited.was_visited(next) {
                        self.enter(next);
                    }
                }
                None => {
                    let _ = self.frames.pop();
                    // Unmark on the way out so sibling branches may pass through.
                    if let Ok(done) = self.path.pop() {
                        self.visited.unvisit(done);
                    }
                }
            }
        }
    }
}

impl FusedIterator for Paths<'_> {}
