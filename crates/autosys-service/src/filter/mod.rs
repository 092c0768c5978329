//! Nested boolean filters over job records.
//!
//! Records are evaluated in their JSON form, so field paths use the wire
//! names (`jobName`, `runDays[0]`, ...).

pub mod eval;
pub mod fields;
pub mod path;
pub mod types;

pub use eval::matches;
pub use fields::{extract_fields, unique_values};
pub use path::value_at_path;
pub use types::{ComparisonOperator, FieldInfo, FieldType, FilterCondition, FilterGroup, GroupOperator};
