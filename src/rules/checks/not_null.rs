//! Presence predicate (`not_null`).

use serde_json::{Map, Value};

use crate::rules::registry::RulePredicate;

/// Fails when the attribute is JSON `null` or absent from the record.
///
/// Opts in to missing-attribute dispatch: the engine hands it `null`
/// for an absent field, so absence and an explicit null fail the same
/// way under this rule.
pub(crate) struct NotNullCheck;

impl RulePredicate for NotNullCheck {
    fn evaluate(
        &self,
        attribute: &str,
        value: &Value,
        _parameters: &Map<String, Value>,
    ) -> Result<(), String> {
        if value.is_null() {
            Err(format!("{} is null or missing", attribute))
        } else {
            Ok(())
        }
    }

    fn applies_to_missing(&self) -> bool {
        true
    }
}
