use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::thresholds::{EarPair, ThresholdMap};

/// Speech scores measured in the sound field with the aids on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct AidedSpeech {
    pub test_name: Option<String>,
    pub score_right: Option<f64>,
    pub score_left: Option<f64>,
    pub note: Option<String>,
}

/// Aided sound-field testing, done at fitting to confirm audibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct AidedSoundField {
    pub performed: bool,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub aided_thresholds: EarPair<ThresholdMap>,
    pub aided_speech: Option<AidedSpeech>,
}
