//! Stable multi-key sorting of rowsets.

use std::cmp::Ordering;

use serde_json::Value;

use crate::ast::{SortDirection, SortRule};
use crate::executor::evaluate::{get_field_value, value_text};

/// Sort `rows` in place by `rules`, applied in order: the first rule that
/// produces a non-equal comparison decides. `sort_by` is stable, so rows that
/// tie on every rule keep their original relative order.
pub fn sort_rows(rows: &mut [Value], rules: &[SortRule]) {
    if rules.is_empty() {
        return;
    }

    rows.sort_by(|a, b| {
        for rule in rules {
            let a_val = get_field_value(a, &rule.field).unwrap_or(Value::Null);
            let b_val = get_field_value(b, &rule.field).unwrap_or(Value::Null);

            let cmp = compare_sort_values(&a_val, &b_val);
            if cmp != Ordering::Equal {
                return match rule.direction {
                    SortDirection::Asc => cmp,
                    SortDirection::Desc => cmp.reverse(),
                };
            }
        }
        Ordering::Equal
    });
}

/// Ordering of two field values under a single rule, before the rule's
/// direction is applied. Null and missing values are the "larger" element,
/// so they sink to the end ascending and rise to the front descending.
#[inline]
pub fn compare_sort_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Greater,
        (_, Value::Null) => Ordering::Less,
        (Value::Number(a), Value::Number(b)) => {
            let a_f64 = a.as_f64().unwrap_or(0.0);
            let b_f64 = b.as_f64().unwrap_or(0.0);
            a_f64.partial_cmp(&b_f64).unwrap_or(Ordering::Equal)
        }
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => value_text(a).cmp(&value_text(b)),
    }
}
