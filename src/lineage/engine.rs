//! Wraps the low-level store with the lineage operations and the
//! reachability algorithms.

use std::collections::{HashSet, VecDeque};

use petgraph::stable_graph::NodeIndex;
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use petgraph::Direction;
use tracing::debug;

use crate::error::LineageError;
use crate::lineage::asset::{LineageEdge, LineageNode};
use crate::lineage::store::LineageStore;
use crate::lineage::view::LineageGraph;

/// The queryable lineage graph.
///
/// Holds the node/edge collections for the lifetime of the instance.
/// Single-threaded by itself; wrap in [`super::SharedLineageEngine`]
/// when mutations and queries arrive from concurrent request handlers.
#[derive(Debug, Clone, Default)]
pub struct LineageEngine {
    store: LineageStore,
}

impl LineageEngine {
    pub fn new() -> Self {
        Self {
            store: LineageStore::new(),
        }
    }

    /// Registers a node, keyed by its id. A duplicate id is rejected:
    /// overwriting would silently drop the existing node's edges.
    pub fn add_node(&mut self, node: LineageNode) -> Result<(), LineageError> {
        debug!(id = %node.id, "adding lineage node");
        self.store.insert_node(node)?;
        Ok(())
    }

    /// Removes a node and every edge incident to it.
    pub fn remove_node(&mut self, node_id: &str) -> Result<LineageNode, LineageError> {
        debug!(id = %node_id, "removing lineage node");
        self.store.remove_node(node_id)
    }

    /// Registers a directed edge. Both endpoints must already be
    /// registered; a dangling reference is rejected so every id in a
    /// query result is attributable to an explicit `add_node` call.
    pub fn add_edge(&mut self, edge: LineageEdge) -> Result<(), LineageError> {
        debug!(source = %edge.source_id, target = %edge.target_id, "adding lineage edge");
        self.store
            .insert_edge(&edge.source_id, &edge.target_id, edge.kind)
    }

    /// The node itself plus every node reachable by following edges
    /// forward (source -> target), transitively.
    ///
    /// An unknown id is an error, not an empty graph: an isolated node
    /// and a node never registered have different operational meaning.
    pub fn get_downstream_lineage(&self, node_id: &str) -> Result<LineageGraph, LineageError> {
        let start = self.store.resolve(node_id)?;
        let reachable = self.reachable_from(start, Direction::Outgoing);
        debug!(id = %node_id, nodes = reachable.len(), "downstream lineage query");
        Ok(self.snapshot(&reachable))
    }

    /// The node itself plus every node reachable by following edges
    /// backward (target -> source), transitively.
    pub fn get_upstream_lineage(&self, node_id: &str) -> Result<LineageGraph, LineageError> {
        let start = self.store.resolve(node_id)?;
        let reachable = self.reachable_from(start, Direction::Incoming);
        debug!(id = %node_id, nodes = reachable.len(), "upstream lineage query");
        Ok(self.snapshot(&reachable))
    }

    pub fn node(&self, node_id: &str) -> Option<&LineageNode> {
        self.store.node(node_id)
    }

    pub fn node_count(&self) -> usize {
        self.store.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.store.edge_count()
    }

    /// BFS over the adjacency structure in the given direction.
    ///
    /// The visited set guarantees termination on cyclic graphs; feedback
    /// loops between transformation stages are legal input. The start
    /// node is always part of the result (reflexive closure).
    fn reachable_from(&self, start: NodeIndex, direction: Direction) -> HashSet<NodeIndex> {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([start]);

        while let Some(node) = queue.pop_front() {
            if visited.insert(node) {
                for neighbor in self.store.graph.neighbors_directed(node, direction) {
                    queue.push_back(neighbor);
                }
            }
        }
        visited
    }

    /// Builds an independent snapshot: the reachable nodes plus every
    /// stored edge whose endpoints are both reachable.
    fn snapshot(&self, reachable: &HashSet<NodeIndex>) -> LineageGraph {
        let nodes = reachable
            .iter()
            .filter_map(|&idx| self.store.graph.node_weight(idx).cloned())
            .collect();

        let edges = self
            .store
            .graph
            .edge_references()
            .filter(|e| reachable.contains(&e.source()) && reachable.contains(&e.target()))
            .filter_map(|e| {
                let source = self.store.graph.node_weight(e.source())?;
                let target = self.store.graph.node_weight(e.target())?;
                Some(LineageEdge {
                    source_id: source.id.clone(),
                    target_id: target.id.clone(),
                    kind: e.weight().clone(),
                })
            })
            .collect();

        LineageGraph::new(nodes, edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lineage::asset::{AssetRole, EdgeKind};

    /// source_db -> etl_job -> target_dw
    fn pipeline() -> LineageEngine {
        let mut engine = LineageEngine::new();
        engine
            .add_node(LineageNode::new("source_db", "Orders DB", AssetRole::Source))
            .unwrap();
        engine
            .add_node(LineageNode::new("etl_job", "Nightly ETL", AssetRole::Transformation))
            .unwrap();
        engine
            .add_node(LineageNode::new("target_dw", "Warehouse", AssetRole::Sink))
            .unwrap();
        engine.add_edge(LineageEdge::data_flow("source_db", "etl_job")).unwrap();
        engine.add_edge(LineageEdge::data_flow("etl_job", "target_dw")).unwrap();
        engine
    }

    #[test]
    fn downstream_includes_transitive_targets() {
        let engine = pipeline();
        let graph = engine.get_downstream_lineage("source_db").unwrap();
        assert_eq!(graph.node_ids(), vec!["etl_job", "source_db", "target_dw"]);
        assert_eq!(graph.edges.len(), 2);
    }

    #[test]
    fn upstream_includes_transitive_sources() {
        let engine = pipeline();
        let graph = engine.get_upstream_lineage("target_dw").unwrap();
        assert_eq!(graph.node_ids(), vec!["etl_job", "source_db", "target_dw"]);
    }

    #[test]
    fn terminal_node_downstream_is_itself() {
        let engine = pipeline();
        let graph = engine.get_downstream_lineage("target_dw").unwrap();
        assert_eq!(graph.node_ids(), vec!["target_dw"]);
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn isolated_node_is_reachable_from_itself_in_both_directions() {
        let mut engine = LineageEngine::new();
        engine
            .add_node(LineageNode::new("lonely", "Lonely", AssetRole::Source))
            .unwrap();

        for graph in [
            engine.get_downstream_lineage("lonely").unwrap(),
            engine.get_upstream_lineage("lonely").unwrap(),
        ] {
            assert_eq!(graph.node_ids(), vec!["lonely"]);
        }
    }

    #[test]
    fn unknown_node_is_an_error_not_an_empty_graph() {
        let engine = pipeline();
        let err = engine.get_downstream_lineage("ghost").unwrap_err();
        assert_eq!(err, LineageError::UnknownNode("ghost".to_string()));
        assert!(engine.get_upstream_lineage("ghost").is_err());
    }

    #[test]
    fn direction_symmetry_over_the_same_edge_set() {
        let engine = pipeline();
        // B in downstream(A) <=> A in upstream(B), for every pair.
        let ids = ["source_db", "etl_job", "target_dw"];
        for a in ids {
            let down = engine.get_downstream_lineage(a).unwrap();
            for b in ids {
                let up = engine.get_upstream_lineage(b).unwrap();
                assert_eq!(down.contains(b), up.contains(a), "pair ({}, {})", a, b);
            }
        }
    }

    #[test]
    fn queries_are_idempotent_on_an_unmodified_graph() {
        let engine = pipeline();
        let first = engine.get_downstream_lineage("source_db").unwrap();
        let second = engine.get_downstream_lineage("source_db").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn cycle_terminates_and_returns_all_members() {
        let mut engine = LineageEngine::new();
        for id in ["a", "b", "c"] {
            engine
                .add_node(LineageNode::new(id, id, AssetRole::Transformation))
                .unwrap();
        }
        engine.add_edge(LineageEdge::data_flow("a", "b")).unwrap();
        engine.add_edge(LineageEdge::data_flow("b", "c")).unwrap();
        engine.add_edge(LineageEdge::data_flow("c", "a")).unwrap();

        for start in ["a", "b", "c"] {
            let down = engine.get_downstream_lineage(start).unwrap();
            let up = engine.get_upstream_lineage(start).unwrap();
            assert_eq!(down.node_ids(), vec!["a", "b", "c"], "downstream from {}", start);
            assert_eq!(up.node_ids(), vec!["a", "b", "c"], "upstream from {}", start);
        }
    }

    #[test]
    fn self_loop_yields_a_single_node_with_its_edge() {
        let mut engine = LineageEngine::new();
        engine
            .add_node(LineageNode::new("loop", "Loop", AssetRole::Transformation))
            .unwrap();
        engine.add_edge(LineageEdge::data_flow("loop", "loop")).unwrap();

        let graph = engine.get_downstream_lineage("loop").unwrap();
        assert_eq!(graph.node_ids(), vec!["loop"]);
        assert_eq!(graph.edges.len(), 1);
    }

    #[test]
    fn parallel_edges_do_not_duplicate_nodes() {
        let mut engine = LineageEngine::new();
        engine
            .add_node(LineageNode::new("a", "A", AssetRole::Source))
            .unwrap();
        engine
            .add_node(LineageNode::new("b", "B", AssetRole::Sink))
            .unwrap();
        engine.add_edge(LineageEdge::data_flow("a", "b")).unwrap();
        engine
            .add_edge(LineageEdge {
                source_id: "a".to_string(),
                target_id: "b".to_string(),
                kind: EdgeKind::Derivation,
            })
            .unwrap();

        let graph = engine.get_downstream_lineage("a").unwrap();
        assert_eq!(graph.node_ids(), vec!["a", "b"]);
        assert_eq!(graph.edges.len(), 2); // both parallel edges survive
    }

    #[test]
    fn snapshot_excludes_edges_leaving_the_reachable_set() {
        // a -> b, and unrelated c -> b. Downstream of `a` must not
        // carry the c -> b edge even though b is in the set.
        let mut engine = LineageEngine::new();
        for id in ["a", "b", "c"] {
            engine
                .add_node(LineageNode::new(id, id, AssetRole::Source))
                .unwrap();
        }
        engine.add_edge(LineageEdge::data_flow("a", "b")).unwrap();
        engine.add_edge(LineageEdge::data_flow("c", "b")).unwrap();

        let graph = engine.get_downstream_lineage("a").unwrap();
        assert_eq!(graph.node_ids(), vec!["a", "b"]);
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].source_id, "a");
    }

    #[test]
    fn removing_a_node_cuts_the_path_through_it() {
        let mut engine = pipeline();
        engine.remove_node("etl_job").unwrap();

        let graph = engine.get_downstream_lineage("source_db").unwrap();
        assert_eq!(graph.node_ids(), vec!["source_db"]);
        assert!(engine.get_downstream_lineage("etl_job").is_err());
    }

    #[test]
    fn snapshots_are_independent_of_later_mutation() {
        let mut engine = pipeline();
        let before = engine.get_downstream_lineage("source_db").unwrap();

        engine
            .add_node(LineageNode::new("report", "Report", AssetRole::Sink))
            .unwrap();
        engine.add_edge(LineageEdge::data_flow("target_dw", "report")).unwrap();

        assert_eq!(before.len(), 3);
        let after = engine.get_downstream_lineage("source_db").unwrap();
        assert_eq!(after.len(), 4);
    }
}
