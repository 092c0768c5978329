//! Dot-path lookup into JSON values.

use serde_json::Value;

/// Resolves `path` (e.g. `a.b`, `runDays[1]`) inside `root`.
///
/// Returns `None` when any segment is missing or the final value is null.
/// An index applied to a non-array is ignored.
pub fn value_at_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;

    for part in path.split('.') {
        let (key, index) = split_segment(part)?;
        current = current.get(key)?;

        if let (Some(index), Value::Array(items)) = (index, current) {
            current = items.get(index)?;
        }
    }

    (!current.is_null()).then_some(current)
}

/// Splits `key` or `key[n]` into its parts.
fn split_segment(part: &str) -> Option<(&str, Option<usize>)> {
    match part.split_once('[') {
        None if !part.is_empty() => Some((part, None)),
        None => None,
        Some((key, rest)) => {
            let digits = rest.strip_suffix(']')?;
            if key.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            Some((key, Some(digits.parse().ok()?)))
        }
    }
}
