//! The data-lineage engine.
//!
//! Owns a directed multigraph of named data assets and answers
//! transitive reachability queries in both directions: downstream
//! ("what does this node feed") and upstream ("what feeds this node").
//! Queries return independent [`LineageGraph`] snapshots, so callers
//! cannot corrupt engine state by mutating a result.

pub use self::asset::{AssetRole, EdgeKind, LineageEdge, LineageNode};
pub use self::engine::LineageEngine;
pub use self::shared::SharedLineageEngine;
pub use self::view::LineageGraph;

mod asset;
mod engine;
mod shared;
mod store;
mod view;
