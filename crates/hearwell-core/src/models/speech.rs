use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::thresholds::EarPair;

/// Word recognition testing for one ear or presentation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct WordRecognition {
    pub list_id: Option<String>,
    pub level_dbhl: Option<f64>,
    /// Percent correct, in the order entered.
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub score_percent: Vec<f64>,
}

impl WordRecognition {
    /// The clinical score is the first one entered.
    pub fn primary_score(&self) -> Option<f64> {
        self.score_percent.first().copied()
    }
}

/// Speech audiometry. Lists hold repeated measurements in entry order; the
/// first entry is the clinical value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct SpeechExam {
    pub performed: bool,
    /// Speech reception threshold, dB HL.
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub srt: EarPair<Vec<f64>>,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub wrs: EarPair<WordRecognition>,
    /// Most comfortable level, dB HL.
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub mcl: EarPair<Vec<f64>>,
    /// Uncomfortable loudness level, dB HL.
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub ucl: EarPair<Vec<f64>>,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub free_field_srt: Vec<f64>,
    #[serde(deserialize_with = "crate::nullable::or_default")]
    pub free_field_wrs: WordRecognition,
    pub notes: Option<String>,
}

impl SpeechExam {
    pub fn primary_srt(&self) -> EarPair<Option<f64>> {
        self.srt.as_ref().map(|list| list.first().copied())
    }

    pub fn primary_wrs(&self) -> EarPair<Option<f64>> {
        self.wrs.as_ref().map(WordRecognition::primary_score)
    }
}
