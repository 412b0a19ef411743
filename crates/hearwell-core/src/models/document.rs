use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::aided::AidedSoundField;
use crate::models::customer::Customer;
use crate::models::middle_ear::MiddleEarExam;
use crate::models::pure_tone::PureToneExam;
use crate::models::speech::SpeechExam;
use crate::models::verification::VerificationRecord;
use crate::models::visit::Visit;

/// Test results captured during one visit. Missing sections mean the test
/// was not recorded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ClinicalResults {
    pub pure_tone: Option<PureToneExam>,
    pub speech: Option<SpeechExam>,
    pub middle_ear: Option<MiddleEarExam>,
    pub sound_field: Option<AidedSoundField>,
    pub verification: Option<VerificationRecord>,
}

/// A customer, one visit, and its results, as exchanged with storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VisitDocument {
    pub customer: Customer,
    pub visit: Visit,
    #[serde(default)]
    pub results: ClinicalResults,
}

impl VisitDocument {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
