use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use hearwell_core::frequency::{BONE_CONDUCTION_FREQUENCIES, Frequency};
use hearwell_core::thresholds::ThresholdMap;

use crate::rounding::mean_tenth;

/// Average gap at or above which a conductive component is significant.
pub const SIGNIFICANT_ABG_DB: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AbgResult {
    pub avg_abg: Option<f64>,
    /// Signed AC minus BC gap per bone-conduction frequency. `None` where
    /// either pathway is missing.
    pub abg_by_freq: BTreeMap<Frequency, Option<f64>>,
    pub has_significant_abg: bool,
    pub message: String,
}

/// Air-bone gap over the bone-conduction frequencies.
pub fn calculate_abg(ac: &ThresholdMap, bc: &ThresholdMap) -> AbgResult {
    let abg_by_freq: BTreeMap<Frequency, Option<f64>> = BONE_CONDUCTION_FREQUENCIES
        .iter()
        .map(|&f| {
            let gap = match (ac.get(f), bc.get(f)) {
                (Some(a), Some(b)) => Some(a - b),
                _ => None,
            };
            (f, gap)
        })
        .collect();

    let gaps: Vec<f64> = abg_by_freq.values().flatten().copied().collect();
    let Some(avg) = mean_tenth(&gaps) else {
        return AbgResult {
            avg_abg: None,
            abg_by_freq,
            has_significant_abg: false,
            message: "cannot be calculated".to_string(),
        };
    };

    AbgResult {
        avg_abg: Some(avg),
        abg_by_freq,
        has_significant_abg: avg >= SIGNIFICANT_ABG_DB,
        message: abg_band_message(avg).to_string(),
    }
}

fn abg_band_message(avg: f64) -> &'static str {
    if avg < 10.0 {
        "within normal range (under 10 dB)"
    } else if avg < 15.0 {
        "mild conductive component (10-15 dB)"
    } else if avg < 25.0 {
        "moderate conductive component (15-25 dB)"
    } else {
        "severe or greater conductive component (25 dB or more)"
    }
}
