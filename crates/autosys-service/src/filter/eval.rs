//! Filter evaluation.

use std::cmp::Ordering;

use serde_json::Value;

use super::path::value_at_path;
use super::types::{ComparisonOperator, FilterCondition, FilterGroup, GroupOperator};

/// Whether `item` satisfies `group`. An empty group matches everything.
pub fn matches(item: &Value, group: &FilterGroup) -> bool {
    let mut results = group
        .conditions
        .iter()
        .map(|c| condition_matches(item, c))
        .chain(group.groups.iter().map(|g| matches(item, g)))
        .peekable();

    if results.peek().is_none() {
        return true;
    }

    match group.operator {
        GroupOperator::And => results.all(|r| r),
        GroupOperator::Or => results.any(|r| r),
    }
}

fn condition_matches(item: &Value, condition: &FilterCondition) -> bool {
    use ComparisonOperator::*;

    let Some(actual) = value_at_path(item, &condition.field) else {
        return condition.operator == NotExists;
    };
    let expected = &condition.value;

    match condition.operator {
        Equals => scalar_eq(actual, expected),
        NotEquals => !scalar_eq(actual, expected),
        Contains => text_test(actual, expected, |a, e| a.contains(e)),
        NotContains => !text_test(actual, expected, |a, e| a.contains(e)),
        StartsWith => text_test(actual, expected, |a, e| a.starts_with(e)),
        EndsWith => text_test(actual, expected, |a, e| a.ends_with(e)),
        GreaterThan => compare(actual, expected) == Some(Ordering::Greater),
        LessThan => compare(actual, expected) == Some(Ordering::Less),
        In => expected
            .as_array()
            .is_some_and(|list| list.iter().any(|v| scalar_eq(actual, v))),
        NotIn => expected
            .as_array()
            .is_some_and(|list| !list.iter().any(|v| scalar_eq(actual, v))),
        Exists => true,
        NotExists => false,
    }
}

/// Strict equality on scalars; numbers compare by value. Arrays and objects
/// are never equal.
fn scalar_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        _ => false,
    }
}

/// Applies a lowercase string test. False unless `actual` is a string.
fn text_test(actual: &Value, expected: &Value, test: impl Fn(&str, &str) -> bool) -> bool {
    let Value::String(actual) = actual else {
        return false;
    };
    let needle = match expected {
        Value::String(s) => s.to_lowercase(),
        other => other.to_string().to_lowercase(),
    };
    test(&actual.to_lowercase(), &needle)
}

/// Orders numbers numerically and strings lexicographically; mixed types
/// are incomparable.
fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64()?.partial_cmp(&y.as_f64()?),
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        _ => None,
    }
}
