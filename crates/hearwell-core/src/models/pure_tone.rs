use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::frequency::Frequency;
use crate::thresholds::{EarPair, ThresholdMap};

/// Transducer used for air-conduction testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum Transducer {
    Insert,
    Supra,
    FreeField,
}

/// A pure-tone audiometry session.
///
/// Every field defaults, so a partially filled form blob deserializes:
/// `performed` false, no date, no transducer, empty maps, no marks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct PureToneExam {
    pub performed: bool,
    pub test_date: Option<jiff::civil::Date>,
    pub transducer: Option<Transducer>,
    /// Air-conduction thresholds.
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub ac: EarPair<ThresholdMap>,
    /// Bone-conduction thresholds.
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub bc: EarPair<ThresholdMap>,
    /// Unaided sound-field thresholds.
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub sound_field: EarPair<ThresholdMap>,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub no_response: NoResponseMarks,
    pub masking_used: Option<bool>,
    pub notes: Option<String>,
}

/// Frequencies where the patient gave no response at the audiometer limit.
///
/// Chart decoration only. The scoring engine never reads these marks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct NoResponseMarks {
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub right: Vec<Frequency>,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub left: Vec<Frequency>,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub sound_field_right: Vec<Frequency>,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub sound_field_left: Vec<Frequency>,
}

impl NoResponseMarks {
    /// Toggle a mark, the way the audiogram grid does on click.
    pub fn toggle(list: &mut Vec<Frequency>, frequency: Frequency) {
        if let Some(pos) = list.iter().position(|f| *f == frequency) {
            list.remove(pos);
        } else {
            list.push(frequency);
            list.sort();
        }
    }
}
