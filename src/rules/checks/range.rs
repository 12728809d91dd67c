//! Numeric bounds predicate (`range`).

use serde_json::{Map, Value};

use crate::rules::registry::RulePredicate;

/// Checks that a numeric value satisfies every bound present in the
/// rule's parameters: `min` means value >= min, `max` means value <= max,
/// and an absent bound leaves that side unconstrained.
pub(crate) struct RangeCheck;

impl RulePredicate for RangeCheck {
    fn evaluate(
        &self,
        attribute: &str,
        value: &Value,
        parameters: &Map<String, Value>,
    ) -> Result<(), String> {
        // `as_f64` accepts both integer and float JSON numbers.
        let actual = value
            .as_f64()
            .ok_or_else(|| format!("{} value {} is not numeric", attribute, value))?;

        if let Some(min) = parameters.get("min") {
            // A non-numeric bound is a misconfigured rule, not a pass.
            let bound = min
                .as_f64()
                .ok_or_else(|| format!("{} rule has non-numeric minimum {}", attribute, min))?;
            if actual < bound {
                // Display the raw JSON values so the message preserves
                // the shapes the caller supplied ("-5.0", "0").
                return Err(format!("{} {} is below minimum {}", attribute, value, min));
            }
        }

        if let Some(max) = parameters.get("max") {
            let bound = max
                .as_f64()
                .ok_or_else(|| format!("{} rule has non-numeric maximum {}", attribute, max))?;
            if actual > bound {
                return Err(format!("{} {} is above maximum {}", attribute, value, max));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn params(pairs: &Value) -> Map<String, Value> {
        pairs.as_object().unwrap().clone()
    }

    #[rstest]
    #[case(json!(10.5), json!({"min": 0}), true)]
    #[case(json!(0), json!({"min": 0}), true)] // inclusive lower bound
    #[case(json!(-5.0), json!({"min": 0}), false)]
    #[case(json!(100), json!({"max": 100}), true)] // inclusive upper bound
    #[case(json!(100.1), json!({"max": 100}), false)]
    #[case(json!(50), json!({"min": 0, "max": 100}), true)]
    #[case(json!(-1), json!({"min": 0, "max": 100}), false)]
    #[case(json!(101), json!({"min": 0, "max": 100}), false)]
    #[case(json!(-1e9), json!({}), true)] // no bounds, unconstrained
    fn bounds_matrix(#[case] value: Value, #[case] parameters: Value, #[case] expected: bool) {
        let outcome = RangeCheck.evaluate("price", &value, &params(&parameters));
        assert_eq!(outcome.is_ok(), expected, "value {} params {}", value, parameters);
    }

    #[test]
    fn violation_message_cites_value_and_bound() {
        let err = RangeCheck
            .evaluate("price", &json!(-5.0), &params(&json!({"min": 0})))
            .unwrap_err();
        assert!(err.contains("-5.0"), "message: {}", err);
        assert!(err.contains('0'), "message: {}", err);
        assert!(err.contains("minimum"), "message: {}", err);
    }

    #[test]
    fn non_numeric_value_fails() {
        let err = RangeCheck
            .evaluate("price", &json!("abc"), &params(&json!({"min": 0})))
            .unwrap_err();
        assert!(err.contains("not numeric"), "message: {}", err);
    }

    #[test]
    fn non_numeric_bound_fails_rather_than_passes() {
        let err = RangeCheck
            .evaluate("price", &json!(1), &params(&json!({"min": "zero"})))
            .unwrap_err();
        assert!(err.contains("non-numeric"), "message: {}", err);
    }
}
