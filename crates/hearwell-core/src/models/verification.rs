use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Real-ear measurement of the fitted hearing aid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct RealEarMeasurement {
    pub performed: Option<bool>,
    /// Prescription formula, e.g. "NAL-NL2".
    pub formula: Option<String>,
    pub target_match: Option<String>,
    /// Maximum output confirmed below the patient's discomfort level.
    pub mpo_safe: Option<bool>,
    pub summary: Option<String>,
}

/// Electroacoustic analysis in the test box.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct TestBoxCheck {
    pub performed: Option<bool>,
    pub pass: Option<bool>,
    pub summary: Option<String>,
}

/// Fitting verification. `None` booleans mean "not answered".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct VerificationRecord {
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub rem: RealEarMeasurement,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub eaa: TestBoxCheck,
}
