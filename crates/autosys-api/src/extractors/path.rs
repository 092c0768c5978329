//! Typed path parameter helpers.

use autosys_core::error::AppError;

/// Parses the `{count}` segment of the generate route.
///
/// Any integer is accepted, negative included; only non-integers fail.
pub fn parse_count(s: &str) -> Result<i64, AppError> {
    s.trim()
        .parse()
        .map_err(|_| AppError::validation(format!("Invalid integer for count: {s}")))
}
