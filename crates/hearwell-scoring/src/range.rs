use hearwell_core::frequency::Frequency;
use hearwell_core::thresholds::ThresholdMap;

/// Lowest valid threshold, dB HL.
pub const DB_HL_MIN: f64 = -10.0;
/// Highest valid threshold, dB HL.
pub const DB_HL_MAX: f64 = 120.0;

/// Whether a threshold lies in the audiometer range.
///
/// An absent value is valid: no measurement is not an error.
pub fn is_valid_db_hl(value: Option<f64>) -> bool {
    match value {
        None => true,
        Some(v) => (DB_HL_MIN..=DB_HL_MAX).contains(&v),
    }
}

/// Present values that fail [`is_valid_db_hl`], in ascending frequency order.
pub fn out_of_range(thresholds: &ThresholdMap) -> Vec<(Frequency, f64)> {
    thresholds
        .iter()
        .filter(|(_, value)| !is_valid_db_hl(Some(*value)))
        .collect()
}
