use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which criterion of the hearing-disability decision table fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EligibilityRule {
    /// Better ear PTA-6 at or above 60 dB.
    BilateralSixty,
    /// Worse ear at or above 80 dB, better ear at or above 40 dB.
    UnilateralEightyWithForty,
    /// Worse ear at or above 80 dB, better ear at or below 40 dB.
    UnilateralEightyBelowForty,
    /// Word recognition at or below 50% in both ears.
    BilateralWordRecognition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EligibilityResult {
    pub eligible: bool,
    /// The rule that fired, `None` when not eligible.
    pub rule: Option<EligibilityRule>,
    pub reason: String,
}

impl EligibilityResult {
    fn eligible(rule: EligibilityRule, reason: String) -> Self {
        Self {
            eligible: true,
            rule: Some(rule),
            reason,
        }
    }

    fn not_eligible(reason: String) -> Self {
        Self {
            eligible: false,
            rule: None,
            reason,
        }
    }
}

/// Hearing-disability eligibility from 6-point PTAs and word recognition.
///
/// Rules are evaluated in a fixed order and the first match wins. Rules 2
/// and 3 overlap when the better ear is exactly 40 dB; rule 2 takes it.
pub fn check_eligibility(
    pta6_right: Option<f64>,
    pta6_left: Option<f64>,
    wrs_right: Option<f64>,
    wrs_left: Option<f64>,
) -> EligibilityResult {
    let (Some(right), Some(left)) = (pta6_right, pta6_left) else {
        return EligibilityResult::not_eligible("insufficient test data".to_string());
    };

    let better = right.min(left);
    let worse = right.max(left);

    if better >= 60.0 {
        return EligibilityResult::eligible(
            EligibilityRule::BilateralSixty,
            format!("bilateral {better} dB or greater"),
        );
    }

    if worse >= 80.0 && better >= 40.0 {
        return EligibilityResult::eligible(
            EligibilityRule::UnilateralEightyWithForty,
            format!("one ear {worse} dB / other ear {better} dB"),
        );
    }

    if worse >= 80.0 && better <= 40.0 {
        return EligibilityResult::eligible(
            EligibilityRule::UnilateralEightyBelowForty,
            format!("one ear {worse} dB / other ear {better} dB or less"),
        );
    }

    if let (Some(wrs_r), Some(wrs_l)) = (wrs_right, wrs_left)
        && wrs_r <= 50.0
        && wrs_l <= 50.0
    {
        return EligibilityResult::eligible(
            EligibilityRule::BilateralWordRecognition,
            format!("bilateral word recognition {}% or less", wrs_r.max(wrs_l)),
        );
    }

    let wrs_note = match (wrs_right, wrs_left) {
        (Some(r), Some(l)) => format!(", WRS: {r}/{l}%"),
        _ => String::new(),
    };
    EligibilityResult::not_eligible(format!(
        "criteria not met (PTA: {better}/{worse} dB{wrs_note})"
    ))
}
