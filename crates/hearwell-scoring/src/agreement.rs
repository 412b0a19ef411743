use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::rounding::round_tenth;

/// Upper bound of a good SRT-PTA match, dB.
pub const GOOD_AGREEMENT_DB: f64 = 6.0;
/// Upper bound of an acceptable SRT-PTA match, dB.
pub const ACCEPTABLE_AGREEMENT_DB: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum AgreementStatus {
    Good,
    Acceptable,
    Poor,
    Unknown,
}

impl AgreementStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Acceptable => "Acceptable",
            Self::Poor => "Poor",
            Self::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AgreementResult {
    pub is_valid: bool,
    pub difference: Option<f64>,
    pub status: AgreementStatus,
    pub message: String,
}

/// Cross-check a speech reception threshold against the 3-point PTA.
///
/// The absolute difference is banded: up to 6 dB good, up to 10 dB
/// acceptable, beyond that poor and not valid.
pub fn validate_srt_pta(srt: Option<f64>, pta: Option<f64>) -> AgreementResult {
    let (Some(srt), Some(pta)) = (srt, pta) else {
        return AgreementResult {
            is_valid: false,
            difference: None,
            status: AgreementStatus::Unknown,
            message: "insufficient data".to_string(),
        };
    };

    let diff = round_tenth((srt - pta).abs());

    let (is_valid, status, message) = if diff <= GOOD_AGREEMENT_DB {
        (
            true,
            AgreementStatus::Good,
            format!("good agreement ({diff} dB difference)"),
        )
    } else if diff <= ACCEPTABLE_AGREEMENT_DB {
        (
            true,
            AgreementStatus::Acceptable,
            format!("acceptable agreement ({diff} dB difference)"),
        )
    } else {
        (
            false,
            AgreementStatus::Poor,
            format!("poor agreement ({diff} dB difference) - retest recommended"),
        )
    };

    AgreementResult {
        is_valid,
        difference: Some(diff),
        status,
        message,
    }
}
