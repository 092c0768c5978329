//! Filter expression types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a group combines its members.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GroupOperator {
    /// Every member must match.
    #[default]
    And,
    /// At least one member must match.
    Or,
}

/// Comparison applied to the value found at a field path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComparisonOperator {
    /// Scalar equality.
    Equals,
    /// Scalar inequality.
    NotEquals,
    /// Case-insensitive substring match.
    Contains,
    /// Negated case-insensitive substring match.
    NotContains,
    /// Numeric or lexicographic `>`.
    GreaterThan,
    /// Numeric or lexicographic `<`.
    LessThan,
    /// Membership in an array value.
    In,
    /// Non-membership in an array value.
    NotIn,
    /// Field resolves to a value.
    Exists,
    /// Field resolves to nothing.
    NotExists,
    /// Case-insensitive prefix match.
    StartsWith,
    /// Case-insensitive suffix match.
    EndsWith,
}

/// A single comparison against one field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterCondition {
    /// Client-side identifier, echoed but unused.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Dot path, optionally with `[n]` indexes (e.g. `runDays[0]`).
    pub field: String,
    /// The comparison to apply.
    pub operator: ComparisonOperator,
    /// Operand. Ignored by `exists` and `notExists`.
    #[serde(default)]
    pub value: Value,
}

/// A boolean combination of conditions and nested groups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterGroup {
    /// Client-side identifier, echoed but unused.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// How members combine.
    #[serde(default)]
    pub operator: GroupOperator,
    /// Leaf conditions.
    #[serde(default)]
    pub conditions: Vec<FilterCondition>,
    /// Nested groups.
    #[serde(default)]
    pub groups: Vec<FilterGroup>,
}

/// JSON type of a discovered field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Array,
    Object,
    Null,
}

impl FieldType {
    /// Type of a JSON value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => Self::String,
            Value::Number(_) => Self::Number,
            Value::Bool(_) => Self::Boolean,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
            Value::Null => Self::Null,
        }
    }
}

/// A field path found in the data, with its type and a sample for scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub path: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample: Option<Value>,
}
