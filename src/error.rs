//! Defines the error types for the lineage engine.
//!
//! Rule evaluation deliberately has no error type: `validate_record` is
//! total, and its diagnostics travel inside `ValidationResult.message`.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineageError {
    /// A query or removal referenced a node id that was never registered.
    /// Distinct from an isolated-but-known node, which yields a
    /// single-node graph.
    #[error("unknown node '{0}'")]
    UnknownNode(String),

    /// `add_node` was called with an id that already exists. Overwriting
    /// would silently drop the edges attached to the existing node.
    #[error("node '{0}' is already registered")]
    DuplicateNode(String),

    /// `add_edge` referenced an endpoint that was never registered.
    #[error("edge {source_id} -> {target_id} references unknown node '{missing}'")]
    DanglingEdge {
        source_id: String,
        target_id: String,
        missing: String,
    },
}
