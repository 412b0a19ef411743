//! Boundary parsing of free-form numeric entry fields.
//!
//! Forms accept entries like `"30, 35dB"` for repeated speech measurements.
//! These helpers turn them into validated numbers before anything reaches
//! the scoring engine.

use crate::error::CoreError;

const UNIT_SUFFIXES: [&str; 3] = ["dbhl", "db", "%"];

/// Parse a comma-separated list of levels or percentages.
///
/// Whitespace and empty segments are ignored. Each segment may carry a
/// `dB`, `dBHL` or `%` suffix (any case). Anything else is rejected.
pub fn parse_level_list(input: &str) -> Result<Vec<f64>, CoreError> {
    input
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(parse_level)
        .collect()
}

/// Parse a single level or percentage, with an optional unit suffix.
pub fn parse_level(input: &str) -> Result<f64, CoreError> {
    let trimmed = input.trim();
    let lower = trimmed.to_ascii_lowercase();
    let number = UNIT_SUFFIXES
        .iter()
        .find_map(|suffix| lower.strip_suffix(suffix))
        .unwrap_or(&lower)
        .trim();

    match number.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CoreError::InvalidNumber {
            input: trimmed.to_string(),
        }),
    }
}

/// Format a list back into the entry-field form, e.g. `"30dB, 35dB"`.
pub fn format_level_list(values: &[f64], unit: &str) -> String {
    values
        .iter()
        .map(|v| format!("{v}{unit}"))
        .collect::<Vec<_>>()
        .join(", ")
}
