use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::thresholds::EarPair;

/// Tympanogram shape category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum TympType {
    A,
    As,
    Ad,
    B,
    C,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl TympType {
    pub fn code(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::As => "As",
            Self::Ad => "Ad",
            Self::B => "B",
            Self::C => "C",
            Self::Unknown => "UNKNOWN",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::A => "Type A (normal)",
            Self::As => "Type As (shallow)",
            Self::Ad => "Type Ad (deep)",
            Self::B => "Type B (flat)",
            Self::C => "Type C (negative pressure)",
            Self::Unknown => "Unclassified",
        }
    }
}

impl fmt::Display for TympType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One ear's tympanometry measurement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct TympanometryReading {
    /// Type recorded by the clinician, if any.
    pub tymp_type: Option<TympType>,
    pub peak_pressure_dapa: Option<f64>,
    pub compliance_ml: Option<f64>,
    /// Ear canal volume.
    pub ecv_ml: Option<f64>,
}

/// Otoscopy and tympanometry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct MiddleEarExam {
    pub performed: bool,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub otoscopy: EarPair<Option<String>>,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub tympanometry: EarPair<TympanometryReading>,
    pub notes: Option<String>,
}
