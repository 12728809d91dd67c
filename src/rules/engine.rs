//! The orchestrator for rule evaluation.

use tracing::debug;

use super::model::{DataQualityRule, Record, ValidationResult};
use super::registry::PredicateRegistry;

/// Evaluates records against declarative data-quality rules.
///
/// The engine holds no mutable state: it is safe to share one instance
/// across unrelated validation calls and across threads. Rules are
/// evaluated independently, and one bad rule never prevents evaluation
/// of the others.
pub struct RuleEngine {
    registry: PredicateRegistry,
}

impl RuleEngine {
    /// Creates an engine with the built-in predicates installed.
    pub fn new() -> Self {
        Self {
            registry: PredicateRegistry::with_builtins(),
        }
    }

    /// Creates an engine over a caller-assembled registry, e.g. with
    /// custom rule types registered.
    pub fn with_registry(registry: PredicateRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &PredicateRegistry {
        &self.registry
    }

    /// Validates one record against an ordered list of rules.
    ///
    /// Total over any well-formed rule list: returns exactly one
    /// [`ValidationResult`] per rule, in input order. Unknown rule types
    /// and missing attributes become failing results with diagnostic
    /// messages, never panics or early returns.
    pub fn validate_record(
        &self,
        record: &Record,
        rules: &[DataQualityRule],
    ) -> Vec<ValidationResult> {
        debug!(rules = rules.len(), fields = record.len(), "validating record");
        rules
            .iter()
            .map(|rule| self.evaluate_rule(record, rule))
            .collect()
    }

    fn evaluate_rule(&self, record: &Record, rule: &DataQualityRule) -> ValidationResult {
        let Some(predicate) = self.registry.get(&rule.rule_type) else {
            return ValidationResult::fail(
                &rule.id,
                format!("unknown rule type '{}'", rule.rule_type),
            );
        };

        let null = serde_json::Value::Null;
        let value = match record.get(&rule.target_attribute) {
            Some(value) => value,
            // Presence predicates see the absence as a null; everything
            // else gets the generic missing-attribute failure, kept
            // distinguishable from a value violation so callers can
            // triage completeness separately from quality.
            None if predicate.applies_to_missing() => &null,
            None => {
                return ValidationResult::fail(
                    &rule.id,
                    format!(
                        "attribute '{}' is missing from the record",
                        rule.target_attribute
                    ),
                );
            }
        };

        match predicate.evaluate(&rule.target_attribute, value, &rule.parameters) {
            Ok(()) => ValidationResult::pass(&rule.id),
            Err(message) => ValidationResult::fail(&rule.id, message),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}
