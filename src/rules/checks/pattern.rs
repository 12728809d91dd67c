//! Regular-expression predicate (`regex`).

use regex::Regex;
use serde_json::{Map, Value};

use crate::rules::registry::RulePredicate;

/// Checks that a string value matches the `pattern` parameter.
///
/// The pattern is compiled per evaluation; predicates are stateless by
/// contract and rule sets are small. An unparsable pattern fails the
/// rule with a diagnostic rather than passing silently.
pub(crate) struct PatternCheck;

impl RulePredicate for PatternCheck {
    fn evaluate(
        &self,
        attribute: &str,
        value: &Value,
        parameters: &Map<String, Value>,
    ) -> Result<(), String> {
        let pattern = parameters
            .get("pattern")
            .and_then(Value::as_str)
            .ok_or_else(|| format!("{} rule is missing a string 'pattern' parameter", attribute))?;

        let text = value
            .as_str()
            .ok_or_else(|| format!("{} value {} is not a string", attribute, value))?;

        let regex = Regex::new(pattern)
            .map_err(|e| format!("{} rule has an invalid pattern '{}': {}", attribute, pattern, e))?;

        if regex.is_match(text) {
            Ok(())
        } else {
            Err(format!(
                "{} '{}' does not match pattern '{}'",
                attribute, text, pattern
            ))
        }
    }
}
