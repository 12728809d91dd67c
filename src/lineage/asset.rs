//! Defines the node and edge types of the lineage graph.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The role a data asset plays in a pipeline.
///
/// Observed catalog data reused one coarse tag for several roles; this
/// taxonomy makes the three roles explicit, and `Custom` keeps ingestion
/// of any other tag lossless.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetRole {
    Source,
    Transformation,
    Sink,
    #[serde(untagged)]
    Custom(String),
}

/// The semantics tag of a directed edge.
///
/// Opaque to traversal: every edge is traversable in both query
/// directions regardless of its kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    DataFlow,
    Derivation,
    #[serde(untagged)]
    Custom(String),
}

impl Default for EdgeKind {
    fn default() -> Self {
        Self::DataFlow
    }
}

/// One data asset in the lineage graph, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineageNode {
    /// Graph-wide primary identity.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Serialized as `type`, matching the catalog payloads the
    /// governance service ingests.
    #[serde(rename = "type")]
    pub role: AssetRole,
    /// Free-form attributes, opaque to the engine.
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl LineageNode {
    pub fn new(id: &str, name: &str, role: AssetRole) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            role,
            metadata: Map::new(),
        }
    }
}

/// One directed relationship: data flows from `source_id` to `target_id`.
///
/// Edges form a directed multigraph; self-loops and parallel edges
/// between the same pair are permitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineageEdge {
    pub source_id: String,
    pub target_id: String,
    #[serde(default, rename = "type")]
    pub kind: EdgeKind,
}

impl LineageEdge {
    /// A plain data-flow edge, the common case.
    pub fn data_flow(source_id: &str, target_id: &str) -> Self {
        Self {
            source_id: source_id.to_string(),
            target_id: target_id.to_string(),
            kind: EdgeKind::DataFlow,
        }
    }
}
