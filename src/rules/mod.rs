//! The data-quality rule engine.
//!
//! Evaluates arbitrary key/value records against declaratively-defined
//! rules. Dispatch from `rule_type` to the matching predicate goes
//! through [`PredicateRegistry`], so new rule types can be added without
//! modifying existing predicates.

pub use self::engine::RuleEngine;
pub use self::model::{DataQualityRule, Record, ValidationResult};
pub use self::registry::{PredicateRegistry, RulePredicate};

mod checks {
    pub mod not_null;
    pub mod one_of;
    pub mod pattern;
    pub mod range;
}
mod engine;
mod model;
mod registry;
