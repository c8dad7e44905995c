//! Condition evaluation against a single row.
//!
//! Helper functions in this module:
//! - get_field_value: extract a field value from a row
//! - is_empty_value: the null / missing / empty-string equivalence test
//! - value_text: convert a scalar to its text form
//! - compare_values: hybrid numeric-or-lexical comparison
//! - evaluate: walk a condition tree against one row

use serde_json::Value;

use crate::ast::{ComparisonOp, Condition, MAX_CONDITION_DEPTH};
use crate::error::{RowqlError, RowqlResult};

/// Extract `field_path` from a row. Dotted paths walk nested objects; a
/// missing field resolves to null. A row that is not an object at all is an
/// evaluation error, which feeds the orchestrator's per-row policy.
#[inline]
pub fn get_field_value(row: &Value, field_path: &str) -> RowqlResult<Value> {
    if !row.is_object() {
        return Err(RowqlError::ExecutionError(format!(
            "row is not an object: {}",
            row
        )));
    }

    let mut current = row;

    for part in field_path.split('.') {
        match current.get(part) {
            Some(val) => current = val,
            None => return Ok(Value::Null),
        }
    }

    Ok(current.clone())
}

/// Null, missing, and the empty string are treated as the same "empty" state.
#[inline]
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Text form of a scalar for comparison and substring matching. Strings are
/// used as-is (no surrounding quotes); null becomes the empty string.
#[inline]
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Evaluate a comparison of a row's field value against a literal.
///
/// A null field compares true only under `!=` with a non-empty literal, and
/// false under every other operator. Otherwise both operands are taken as
/// text; when both parse as floats the comparison is numeric, else plain
/// lexical string comparison.
#[inline]
pub fn compare_values(field_value: &Value, op: ComparisonOp, literal: &str) -> bool {
    if field_value.is_null() {
        return op == ComparisonOp::NotEq && !literal.is_empty();
    }

    let field_text = value_text(field_value);

    if let (Ok(a), Ok(b)) = (field_text.parse::<f64>(), literal.parse::<f64>()) {
        return match op {
            ComparisonOp::Eq => a == b,
            ComparisonOp::NotEq => a != b,
            ComparisonOp::LessThan => a < b,
            ComparisonOp::GreaterThan => a > b,
            ComparisonOp::LessThanEq => a <= b,
            ComparisonOp::GreaterThanEq => a >= b,
        };
    }

    match op {
        ComparisonOp::Eq => field_text == literal,
        ComparisonOp::NotEq => field_text != literal,
        ComparisonOp::LessThan => field_text.as_str() < literal,
        ComparisonOp::GreaterThan => field_text.as_str() > literal,
        ComparisonOp::LessThanEq => field_text.as_str() <= literal,
        ComparisonOp::GreaterThanEq => field_text.as_str() >= literal,
    }
}

/// Evaluate a condition tree against one row.
pub fn evaluate(condition: &Condition, row: &Value) -> RowqlResult<bool> {
    evaluate_at(condition, row, 0)
}

fn evaluate_at(condition: &Condition, row: &Value, depth: usize) -> RowqlResult<bool> {
    if depth > MAX_CONDITION_DEPTH {
        return Err(RowqlError::ExecutionError(format!(
            "Condition nesting exceeds {} levels",
            MAX_CONDITION_DEPTH
        )));
    }

    match condition {
        Condition::And(children) => {
            for child in children {
                if !evaluate_at(child, row, depth + 1)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }

        Condition::Or(children) => {
            for child in children {
                if evaluate_at(child, row, depth + 1)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }

        Condition::IsNull { field } => Ok(is_empty_value(&get_field_value(row, field)?)),

        Condition::IsNotNull { field } => Ok(!is_empty_value(&get_field_value(row, field)?)),

        Condition::Like { field, pattern } => {
            let value = get_field_value(row, field)?;
            // Case-sensitive plain substring, no wildcard expansion
            Ok(value_text(&value).contains(pattern.as_str()))
        }

        Condition::Comparison { field, op, value } => {
            let field_value = get_field_value(row, field)?;
            Ok(compare_values(&field_value, *op, value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_condition;
    use serde_json::json;

    fn matches(clause: &str, row: &Value) -> bool {
        let cond = parse_condition(clause).unwrap();
        evaluate(&cond, row).unwrap()
    }

    #[test]
    fn test_and_requires_all_children() {
        let row = json!({"age": 20, "city": "NY"});
        assert!(matches("age > 18 AND city = 'NY'", &row));

        let row = json!({"age": 15, "city": "NY"});
        assert!(!matches("age > 18 AND city = 'NY'", &row));
    }

    #[test]
    fn test_or_requires_any_child() {
        let clause = "status = 'active' OR status = 'pending'";
        assert!(matches(clause, &json!({"status": "active"})));
        assert!(matches(clause, &json!({"status": "pending"})));
        assert!(!matches(clause, &json!({"status": "closed"})));
    }

    #[test]
    fn test_is_null_matches_null_missing_and_empty_string() {
        assert!(matches("deleted_at IS NULL", &json!({"deleted_at": null})));
        assert!(matches("deleted_at IS NULL", &json!({"other": 1})));
        assert!(matches("deleted_at IS NULL", &json!({"deleted_at": ""})));
        assert!(!matches("deleted_at IS NULL", &json!({"deleted_at": "2024"})));
        assert!(!matches("deleted_at IS NULL", &json!({"deleted_at": 0})));
    }

    #[test]
    fn test_is_not_null_is_exact_complement() {
        for row in [
            json!({"deleted_at": null}),
            json!({"other": 1}),
            json!({"deleted_at": ""}),
            json!({"deleted_at": "2024"}),
            json!({"deleted_at": 0}),
        ] {
            assert_ne!(
                matches("deleted_at IS NULL", &row),
                matches("deleted_at IS NOT NULL", &row),
                "row: {}",
                row
            );
        }
    }

    #[test]
    fn test_like_is_case_sensitive_substring() {
        assert!(matches("name LIKE 'john'", &json!({"name": "johnson"})));
        assert!(!matches("name LIKE 'john'", &json!({"name": "JOHN"})));
        assert!(!matches("name LIKE 'john'", &json!({"name": "jo hn"})));
    }

    #[test]
    fn test_like_has_no_wildcards() {
        assert!(!matches("name LIKE 'j%n'", &json!({"name": "john"})));
        assert!(matches("name LIKE 'j%n'", &json!({"name": "xj%ny"})));
    }

    #[test]
    fn test_like_converts_value_to_text() {
        assert!(matches("code LIKE '42'", &json!({"code": 3426})));
    }

    #[test]
    fn test_numeric_string_comparison() {
        assert!(!matches("score >= 10", &json!({"score": "9"})));
        assert!(matches("score >= 10", &json!({"score": "10.5"})));
    }

    #[test]
    fn test_lexical_fallback_when_not_numeric() {
        // "apple" < "banana" lexically
        assert!(matches("name < 'banana'", &json!({"name": "apple"})));
        assert!(!matches("name > 'banana'", &json!({"name": "apple"})));
    }

    #[test]
    fn test_equality_on_text() {
        assert!(matches("city = 'NY'", &json!({"city": "NY"})));
        assert!(!matches("city = 'ny'", &json!({"city": "NY"})));
        assert!(matches("city != 'LA'", &json!({"city": "NY"})));
    }

    #[test]
    fn test_numeric_equality_across_representations() {
        assert!(matches("score = 10", &json!({"score": "10.0"})));
        assert!(matches("score = 10.5", &json!({"score": 10.5})));
    }

    #[test]
    fn test_null_field_only_matches_not_equal() {
        let row = json!({"a": null});
        assert!(matches("a != 'x'", &row));
        assert!(!matches("a = 'x'", &row));
        assert!(!matches("a < 'x'", &row));
        assert!(!matches("a > 'x'", &row));
        assert!(!matches("a <= 'x'", &row));
        assert!(!matches("a >= 'x'", &row));

        // Missing field behaves the same as an explicit null
        let row = json!({});
        assert!(matches("a != 'x'", &row));
        assert!(!matches("a = 'x'", &row));
    }

    #[test]
    fn test_null_field_not_equal_empty_literal_is_false() {
        let row = json!({"a": null});
        assert!(!matches("a != ''", &row));
    }

    #[test]
    fn test_boolean_values_compare_as_text() {
        assert!(matches("active = true", &json!({"active": true})));
        assert!(!matches("active = true", &json!({"active": false})));
    }

    #[test]
    fn test_nested_field_path() {
        let row = json!({"address": {"city": "NY"}});
        assert!(matches("address.city = 'NY'", &row));
    }

    #[test]
    fn test_non_object_row_is_an_error() {
        let cond = parse_condition("a = 1").unwrap();
        let result = evaluate(&cond, &json!([1, 2, 3]));
        assert!(matches!(result, Err(RowqlError::ExecutionError(_))));
    }

    #[test]
    fn test_depth_limit_guards_hand_built_trees() {
        let mut cond = Condition::IsNull {
            field: "a".to_string(),
        };
        for _ in 0..(MAX_CONDITION_DEPTH + 2) {
            cond = Condition::And(vec![cond]);
        }

        let result = evaluate(&cond, &json!({"a": null}));
        assert!(matches!(result, Err(RowqlError::ExecutionError(_))));
    }

    #[test]
    fn test_compare_values_directly() {
        assert!(compare_values(&json!(20), ComparisonOp::GreaterThan, "18"));
        assert!(!compare_values(&json!(15), ComparisonOp::GreaterThan, "18"));
        assert!(compare_values(&json!("NY"), ComparisonOp::Eq, "NY"));
        assert!(compare_values(&Value::Null, ComparisonOp::NotEq, "x"));
        assert!(!compare_values(&Value::Null, ComparisonOp::Eq, "x"));
    }
}
