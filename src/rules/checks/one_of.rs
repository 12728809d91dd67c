//! Enumerated-values predicate (`enum`).

use serde_json::{Map, Value};

use crate::rules::registry::RulePredicate;

/// Checks that the value equals one member of the `values` parameter
/// array. Comparison is plain JSON equality, so the rule works for
/// strings, numbers and booleans alike.
pub(crate) struct OneOfCheck;

impl RulePredicate for OneOfCheck {
    fn evaluate(
        &self,
        attribute: &str,
        value: &Value,
        parameters: &Map<String, Value>,
    ) -> Result<(), String> {
        let allowed = parameters
            .get("values")
            .and_then(Value::as_array)
            .ok_or_else(|| format!("{} rule is missing a 'values' array parameter", attribute))?;

        if allowed.contains(value) {
            Ok(())
        } else {
            Err(format!(
                "{} {} is not one of the allowed values {}",
                attribute,
                value,
                Value::Array(allowed.clone())
            ))
        }
    }
}
