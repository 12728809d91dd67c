//! Thread-safe wrapper for the lineage engine.

use parking_lot::RwLock;

use crate::error::LineageError;
use crate::lineage::asset::{LineageEdge, LineageNode};
use crate::lineage::engine::LineageEngine;
use crate::lineage::view::LineageGraph;

/// [`LineageEngine`] behind a `parking_lot::RwLock`.
///
/// Mutations take the write lock; reachability queries run under the
/// shared read lock, since queries are expected to dominate over graph
/// edits in a request-serving metadata service. Query results are owned
/// snapshots, so no lock is held after a method returns.
pub struct SharedLineageEngine {
    inner: RwLock<LineageEngine>,
}

impl SharedLineageEngine {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(LineageEngine::new()),
        }
    }

    pub fn add_node(&self, node: LineageNode) -> Result<(), LineageError> {
        self.inner.write().add_node(node)
    }

    pub fn remove_node(&self, node_id: &str) -> Result<LineageNode, LineageError> {
        self.inner.write().remove_node(node_id)
    }

    pub fn add_edge(&self, edge: LineageEdge) -> Result<(), LineageError> {
        self.inner.write().add_edge(edge)
    }

    pub fn get_downstream_lineage(&self, node_id: &str) -> Result<LineageGraph, LineageError> {
        self.inner.read().get_downstream_lineage(node_id)
    }

    pub fn get_upstream_lineage(&self, node_id: &str) -> Result<LineageGraph, LineageError> {
        self.inner.read().get_upstream_lineage(node_id)
    }

    /// Looks a node up by id (cloned out of the lock).
    pub fn node(&self, node_id: &str) -> Option<LineageNode> {
        self.inner.read().node(node_id).cloned()
    }

    pub fn node_count(&self) -> usize {
        self.inner.read().node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.read().edge_count()
    }

    /// Grants closure access under the read lock for compound reads
    /// that need a consistent view across multiple queries.
    pub fn with_read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&LineageEngine) -> R,
    {
        f(&self.inner.read())
    }
}

impl Default for SharedLineageEngine {
    fn default() -> Self {
        Self::new()
    }
}
