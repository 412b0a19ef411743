//! Audiometric test frequencies and the fixed frequency sets each formula
//! operates over.
//!
//! Formulas iterate these constants, never the keys of whatever map they are
//! handed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// One of the clinical pure-tone test frequencies, ordered by Hz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Frequency {
    #[serde(rename = "125")]
    Hz125,
    #[serde(rename = "250")]
    Hz250,
    #[serde(rename = "500")]
    Hz500,
    #[serde(rename = "750")]
    Hz750,
    #[serde(rename = "1000")]
    Hz1000,
    #[serde(rename = "1500")]
    Hz1500,
    #[serde(rename = "2000")]
    Hz2000,
    #[serde(rename = "3000")]
    Hz3000,
    #[serde(rename = "4000")]
    Hz4000,
    #[serde(rename = "6000")]
    Hz6000,
    #[serde(rename = "8000")]
    Hz8000,
}

impl Frequency {
    pub fn hz(self) -> u32 {
        match self {
            Self::Hz125 => 125,
            Self::Hz250 => 250,
            Self::Hz500 => 500,
            Self::Hz750 => 750,
            Self::Hz1000 => 1000,
            Self::Hz1500 => 1500,
            Self::Hz2000 => 2000,
            Self::Hz3000 => 3000,
            Self::Hz4000 => 4000,
            Self::Hz6000 => 6000,
            Self::Hz8000 => 8000,
        }
    }

    /// The string label used by forms and persisted blobs (e.g. `"1000"`).
    pub fn label(self) -> &'static str {
        match self {
            Self::Hz125 => "125",
            Self::Hz250 => "250",
            Self::Hz500 => "500",
            Self::Hz750 => "750",
            Self::Hz1000 => "1000",
            Self::Hz1500 => "1500",
            Self::Hz2000 => "2000",
            Self::Hz3000 => "3000",
            Self::Hz4000 => "4000",
            Self::Hz6000 => "6000",
            Self::Hz8000 => "8000",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Frequency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_suffix("Hz")
            .or_else(|| trimmed.strip_suffix("hz"))
            .unwrap_or(trimmed)
            .trim();
        CLINICAL_FREQUENCIES
            .iter()
            .copied()
            .find(|f| f.label() == digits)
            .ok_or_else(|| CoreError::UnknownFrequency(s.to_string()))
    }
}

/// Every frequency on the clinical audiogram.
pub const CLINICAL_FREQUENCIES: [Frequency; 11] = [
    Frequency::Hz125,
    Frequency::Hz250,
    Frequency::Hz500,
    Frequency::Hz750,
    Frequency::Hz1000,
    Frequency::Hz1500,
    Frequency::Hz2000,
    Frequency::Hz3000,
    Frequency::Hz4000,
    Frequency::Hz6000,
    Frequency::Hz8000,
];

/// Bone-conduction frequencies (no 125, 6000, 8000). Also the domain of the
/// air-bone gap and masking checks.
pub const BONE_CONDUCTION_FREQUENCIES: [Frequency; 8] = [
    Frequency::Hz250,
    Frequency::Hz500,
    Frequency::Hz750,
    Frequency::Hz1000,
    Frequency::Hz1500,
    Frequency::Hz2000,
    Frequency::Hz3000,
    Frequency::Hz4000,
];

/// Sound-field frequencies. Same span as bone conduction.
pub const SOUND_FIELD_FREQUENCIES: [Frequency; 8] = BONE_CONDUCTION_FREQUENCIES;

/// 3-point pure-tone average: 500, 1000, 2000 Hz.
pub const PTA3_FREQUENCIES: [Frequency; 3] =
    [Frequency::Hz500, Frequency::Hz1000, Frequency::Hz2000];

/// 6-point pure-tone average weights. The weights sum to 6.
pub const PTA6_WEIGHTS: [(Frequency, f64); 4] = [
    (Frequency::Hz500, 1.0),
    (Frequency::Hz1000, 2.0),
    (Frequency::Hz2000, 2.0),
    (Frequency::Hz4000, 1.0),
];
