//! The `rule_type -> predicate` registry.
//!
//! Dispatch is data-driven rather than a hardcoded branch chain: the
//! engine looks the rule's type tag up here, and callers extend the
//! engine by registering predicates for new tags.

use std::collections::HashMap;

use serde_json::{Map, Value};

use super::checks::{not_null::NotNullCheck, one_of::OneOfCheck, pattern::PatternCheck, range::RangeCheck};

/// One evaluation strategy for a rule type.
///
/// Implementations must be stateless with respect to records: the same
/// registry instance is shared across unrelated validation calls.
pub trait RulePredicate: Send + Sync {
    /// Checks a single attribute value against the rule's parameters.
    ///
    /// # Returns
    /// - `Ok(())` if the value satisfies the rule.
    /// - `Err(message)` describing the violation otherwise.
    fn evaluate(
        &self,
        attribute: &str,
        value: &Value,
        parameters: &Map<String, Value>,
    ) -> Result<(), String>;

    /// Whether the predicate wants to see an absent attribute (as JSON
    /// `null`) instead of the engine's generic missing-attribute
    /// failure. Presence checks opt in; value checks keep the default.
    fn applies_to_missing(&self) -> bool {
        false
    }
}

/// Maps rule type tags to their predicate implementations.
pub struct PredicateRegistry {
    predicates: HashMap<String, Box<dyn RulePredicate>>,
}

impl PredicateRegistry {
    /// Creates an empty registry with no predicates installed.
    pub fn new() -> Self {
        Self {
            predicates: HashMap::new(),
        }
    }

    /// Creates a registry with the built-in predicates installed:
    /// `range`, `not_null`, `regex` and `enum`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("range", Box::new(RangeCheck));
        registry.register("not_null", Box::new(NotNullCheck));
        registry.register("regex", Box::new(PatternCheck));
        registry.register("enum", Box::new(OneOfCheck));
        registry
    }

    /// Registers a predicate for a rule type, replacing any existing
    /// binding for the same tag.
    pub fn register(&mut self, rule_type: &str, predicate: Box<dyn RulePredicate>) {
        self.predicates.insert(rule_type.to_string(), predicate);
    }

    pub fn get(&self, rule_type: &str) -> Option<&dyn RulePredicate> {
        self.predicates.get(rule_type).map(Box::as_ref)
    }

    pub fn contains(&self, rule_type: &str) -> bool {
        self.predicates.contains_key(rule_type)
    }

    /// The registered rule type tags, in arbitrary order.
    pub fn rule_types(&self) -> Vec<&str> {
        self.predicates.keys().map(String::as_str).collect()
    }
}

impl Default for PredicateRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
