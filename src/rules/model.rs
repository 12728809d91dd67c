//! Defines the rule and result types consumed and produced by the
//! rule engine.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A record under validation: an arbitrary key/value payload.
///
/// The engine imposes no schema beyond field lookup by name; records
/// arrive from ingestion pipelines in whatever shape they have.
pub type Record = Map<String, Value>;

/// One declarative data-quality check.
///
/// Constructed by the caller before each validation call and immutable
/// during evaluation. The engine does not retain rules between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataQualityRule {
    /// Unique within a rule set, stable across evaluations.
    pub id: String,
    /// Human-readable; no semantic effect on evaluation.
    pub name: String,
    /// Human-readable; no semantic effect on evaluation.
    #[serde(default)]
    pub description: String,
    /// The logical entity this rule applies to. Advisory only: the
    /// engine does not enforce it against the record shape.
    #[serde(default)]
    pub target_entity: String,
    /// The record field this rule inspects.
    pub target_attribute: String,
    /// Selects the predicate in the registry (e.g. `range`, `not_null`,
    /// `regex`, `enum`). An unrecognized type fails deterministically.
    pub rule_type: String,
    /// Rule-type-specific configuration, e.g. `{"min": 0}` for `range`.
    #[serde(default)]
    pub parameters: Map<String, Value>,
}

/// One outcome per (record, rule) pair.
///
/// Ephemeral: returned to the caller, never retained by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Back-reference to the rule that produced this result.
    pub rule_id: String,
    pub is_valid: bool,
    /// Always present when `is_valid` is false; identifies the violated
    /// bound, the missing attribute, or the unrecognized rule type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn pass(rule_id: &str) -> Self {
        Self {
            rule_id: rule_id.to_string(),
            is_valid: true,
            message: None,
        }
    }

    pub fn fail(rule_id: &str, message: String) -> Self {
        Self {
            rule_id: rule_id.to_string(),
            is_valid: false,
            message: Some(message),
        }
    }
}
