use hearwell_core::frequency::{PTA3_FREQUENCIES, PTA6_WEIGHTS};
use hearwell_core::thresholds::ThresholdMap;

use crate::rounding::{mean_tenth, round_tenth};

/// 3-point pure-tone average over 500, 1000 and 2000 Hz.
///
/// Averages whichever of the three are present, so an incomplete exam still
/// gets a value. `None` only when all three are missing.
pub fn pta3(thresholds: &ThresholdMap) -> Option<f64> {
    let values: Vec<f64> = PTA3_FREQUENCIES
        .iter()
        .filter_map(|f| thresholds.get(*f))
        .collect();
    mean_tenth(&values)
}

/// 6-point weighted average: (500 + 2*1000 + 2*2000 + 4000) / 6.
///
/// All-or-nothing. This value drives disability eligibility, so any missing
/// frequency yields `None` instead of a partial weighting.
pub fn pta6(thresholds: &ThresholdMap) -> Option<f64> {
    let mut weighted = 0.0;
    let mut total_weight = 0.0;
    for (frequency, weight) in PTA6_WEIGHTS {
        weighted += thresholds.get(frequency)? * weight;
        total_weight += weight;
    }
    Some(round_tenth(weighted / total_weight))
}
