//! The snapshot type returned by reachability queries.

use serde::Serialize;

use crate::lineage::asset::{LineageEdge, LineageNode};

/// The result of a reachability query: the reachable nodes plus every
/// stored edge connecting two of them.
///
/// An independent copy of engine state. Nodes are sorted by id and edges
/// by endpoint pair, so identical queries on an unmodified graph produce
/// identical snapshots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineageGraph {
    pub nodes: Vec<LineageNode>,
    pub edges: Vec<LineageEdge>,
}

impl LineageGraph {
    pub(crate) fn new(mut nodes: Vec<LineageNode>, mut edges: Vec<LineageEdge>) -> Self {
        nodes.sort_by(|a, b| a.id.cmp(&b.id));
        edges.sort_by(|a, b| {
            (a.source_id.as_str(), a.target_id.as_str())
                .cmp(&(b.source_id.as_str(), b.target_id.as_str()))
        });
        Self { nodes, edges }
    }

    pub fn contains(&self, node_id: &str) -> bool {
        // Nodes are sorted by id at construction.
        self.nodes
            .binary_search_by(|n| n.id.as_str().cmp(node_id))
            .is_ok()
    }

    /// The reachable node ids, in ascending order.
    pub fn node_ids(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
