//! Field discovery for building filters.

use std::collections::HashSet;

use serde_json::Value;

use super::path::value_at_path;
use super::types::{FieldInfo, FieldType};

/// Describes the fields of the first record. Arrays are described by their
/// first element under `path[0]`.
pub fn extract_fields(records: &[Value]) -> Vec<FieldInfo> {
    let mut fields = Vec::new();
    if let Some(first) = records.first() {
        describe(first, "", &mut fields);
    }
    fields
}

fn describe(value: &Value, path: &str, out: &mut Vec<FieldInfo>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                match child {
                    Value::Object(_) => {
                        out.push(info(&child_path, FieldType::Object, None));
                        describe(child, &child_path, out);
                    }
                    Value::Array(_) => describe(child, &child_path, out),
                    scalar => out.push(info(&child_path, FieldType::of(scalar), Some(scalar))),
                }
            }
        }
        Value::Array(items) => {
            out.push(info(path, FieldType::Array, None));
            if let Some(first) = items.first() {
                describe(first, &format!("{path}[0]"), out);
            }
        }
        scalar => out.push(info(path, FieldType::of(scalar), Some(scalar))),
    }
}

fn info(path: &str, field_type: FieldType, sample: Option<&Value>) -> FieldInfo {
    FieldInfo {
        path: path.to_string(),
        field_type,
        sample: sample.cloned(),
    }
}

/// Distinct values found at `path` across `records`, in first-seen order.
/// Arrays and objects are returned as their JSON text.
pub fn unique_values(records: &[Value], path: &str) -> Vec<Value> {
    let mut seen = HashSet::new();
    let mut values = Vec::new();

    for record in records {
        let Some(found) = value_at_path(record, path) else {
            continue;
        };
        let value = match found {
            Value::Array(_) | Value::Object(_) => Value::String(found.to_string()),
            scalar => scalar.clone(),
        };
        if seen.insert(value.to_string()) {
            values.push(value);
        }
    }

    values
}
