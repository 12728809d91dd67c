//! In-memory metadata-governance core.
//!
//! Two independent, composable components, consumed by an external
//! governance service that owns rule authoring, record ingestion and
//! API exposure:
//!
//! - [`rules`]: evaluates one record against a set of declarative
//!   data-quality rules, producing one [`rules::ValidationResult`] per
//!   rule via a `rule_type -> predicate` registry.
//! - [`lineage`]: owns a directed multigraph of data assets and answers
//!   transitive downstream/upstream reachability queries.
//!
//! Neither component performs I/O; both are deterministic functions of
//! their in-memory state.

pub mod error;
pub mod lineage;
pub mod rules;

// Re-export the primary types for convenient access.
pub use error::LineageError;
pub use lineage::{
    AssetRole, EdgeKind, LineageEdge, LineageEngine, LineageGraph, LineageNode,
    SharedLineageEngine,
};
pub use rules::{
    DataQualityRule, PredicateRegistry, Record, RuleEngine, RulePredicate, ValidationResult,
};
