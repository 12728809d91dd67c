//! Low-level storage for the lineage graph: the petgraph structure plus
//! the string-id index maintained alongside it.

use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableDiGraph};

use crate::error::LineageError;
use crate::lineage::asset::{EdgeKind, LineageNode};

/// Owns the node/edge collections exclusively; no external aliasing.
///
/// `StableDiGraph` keeps node indices valid across removals, so the id
/// index never has to be rebuilt. Edge endpoints are implicit in the
/// topology; the edge weight carries only the semantics tag.
#[derive(Debug, Clone, Default)]
pub(crate) struct LineageStore {
    pub(crate) graph: StableDiGraph<LineageNode, EdgeKind>,
    index: HashMap<String, NodeIndex>,
}

impl LineageStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert_node(&mut self, node: LineageNode) -> Result<NodeIndex, LineageError> {
        if self.index.contains_key(&node.id) {
            return Err(LineageError::DuplicateNode(node.id));
        }
        let id = node.id.clone();
        let idx = self.graph.add_node(node);
        self.index.insert(id, idx);
        Ok(idx)
    }

    /// Removes a node and its incident edges, returning the node.
    pub(crate) fn remove_node(&mut self, node_id: &str) -> Result<LineageNode, LineageError> {
        let idx = self.resolve(node_id)?;
        self.index.remove(node_id);
        // The index entry is gone first, so a stale petgraph index can
        // never be reached through the public id-based API.
        self.graph
            .remove_node(idx)
            .ok_or_else(|| LineageError::UnknownNode(node_id.to_string()))
    }

    pub(crate) fn insert_edge(
        &mut self,
        source_id: &str,
        target_id: &str,
        kind: EdgeKind,
    ) -> Result<(), LineageError> {
        let dangling = |missing: &str| LineageError::DanglingEdge {
            source_id: source_id.to_string(),
            target_id: target_id.to_string(),
            missing: missing.to_string(),
        };
        let source = self.lookup(source_id).ok_or_else(|| dangling(source_id))?;
        let target = self.lookup(target_id).ok_or_else(|| dangling(target_id))?;
        self.graph.add_edge(source, target, kind);
        Ok(())
    }

    pub(crate) fn lookup(&self, node_id: &str) -> Option<NodeIndex> {
        self.index.get(node_id).copied()
    }

    pub(crate) fn resolve(&self, node_id: &str) -> Result<NodeIndex, LineageError> {
        self.lookup(node_id)
            .ok_or_else(|| LineageError::UnknownNode(node_id.to_string()))
    }

    pub(crate) fn node(&self, node_id: &str) -> Option<&LineageNode> {
        self.lookup(node_id).and_then(|idx| self.graph.node_weight(idx))
    }

    pub(crate) fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
