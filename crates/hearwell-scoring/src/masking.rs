use serde::{Deserialize, Serialize};
use ts_rs::TS;

use hearwell_core::frequency::{BONE_CONDUCTION_FREQUENCIES, Frequency};
use hearwell_core::thresholds::ThresholdMap;

/// Interaural attenuation for air conduction, dB. A between-ear difference at
/// or above this calls for masked retesting.
pub const INTERAURAL_ATTENUATION_AC_DB: f64 = 40.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MaskingResult {
    pub need_masking: bool,
    /// Flagged frequencies, ascending.
    pub frequencies: Vec<Frequency>,
    pub reason: String,
}

/// Find the frequencies that need masked retesting.
///
/// A frequency is flagged when the two ears' air-conduction thresholds
/// differ by 40 dB or more, or, when both bone-conduction maps are given,
/// when either ear has any bone-conduction value there. Skull conduction
/// reaches both cochleae, so every bone-conduction measurement needs masking
/// consideration regardless of level.
pub fn check_masking_need(
    ac_right: Option<&ThresholdMap>,
    ac_left: Option<&ThresholdMap>,
    bc_right: Option<&ThresholdMap>,
    bc_left: Option<&ThresholdMap>,
) -> MaskingResult {
    let (Some(ac_right), Some(ac_left)) = (ac_right, ac_left) else {
        return MaskingResult {
            need_masking: false,
            frequencies: Vec::new(),
            reason: "insufficient air-conduction data".to_string(),
        };
    };
    let bc = bc_right.zip(bc_left);

    let frequencies: Vec<Frequency> = BONE_CONDUCTION_FREQUENCIES
        .iter()
        .copied()
        .filter(|&f| {
            let ac_flag = match (ac_right.get(f), ac_left.get(f)) {
                (Some(r), Some(l)) => (r - l).abs() >= INTERAURAL_ATTENUATION_AC_DB,
                _ => false,
            };
            let bc_flag = bc.is_some_and(|(r, l)| r.get(f).is_some() || l.get(f).is_some());
            ac_flag || bc_flag
        })
        .collect();

    let reason = if frequencies.is_empty() {
        "masking not needed".to_string()
    } else {
        let listed = frequencies
            .iter()
            .map(|f| f.label())
            .collect::<Vec<_>>()
            .join(", ");
        format!("masking required at {listed} Hz")
    };

    MaskingResult {
        need_masking: !frequencies.is_empty(),
        frequencies,
        reason,
    }
}
