/// Round to one decimal place, half-up on the value times ten.
///
/// Half-up means ties go toward positive infinity, so `12.35` becomes `12.4`
/// and `-2.25` becomes `-2.2`. `f64::round` would send the latter to `-2.5`.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Arithmetic mean rounded with [`round_tenth`]. `None` for an empty slice.
pub fn mean_tenth(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some(round_tenth(sum / values.len() as f64))
}
