use serde::{Deserialize, Serialize};
use ts_rs::TS;

use hearwell_core::thresholds::ThresholdMap;

use crate::abg::{SIGNIFICANT_ABG_DB, calculate_abg};
use crate::pta::pta3;

/// Anything at or below this 3-point PTA is normal hearing.
pub const NORMAL_HEARING_DB: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum HearingLossType {
    Normal,
    Conductive,
    Sensorineural,
    Mixed,
    Unknown,
}

impl HearingLossType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal hearing",
            Self::Conductive => "Conductive hearing loss",
            Self::Sensorineural => "Sensorineural hearing loss",
            Self::Mixed => "Mixed hearing loss",
            Self::Unknown => "Unclassified",
        }
    }
}

/// Degree of loss from the 3-point PTA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum Severity {
    Normal,
    Slight,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
    Profound,
    Unknown,
}

impl Severity {
    /// Band a PTA. Each band is closed on its upper bound.
    pub fn from_pta(pta: f64) -> Self {
        if pta <= 15.0 {
            Self::Normal
        } else if pta <= 25.0 {
            Self::Slight
        } else if pta <= 40.0 {
            Self::Mild
        } else if pta <= 55.0 {
            Self::Moderate
        } else if pta <= 70.0 {
            Self::ModeratelySevere
        } else if pta <= 90.0 {
            Self::Severe
        } else {
            Self::Profound
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Slight => "Slight hearing loss",
            Self::Mild => "Mild hearing loss",
            Self::Moderate => "Moderate hearing loss",
            Self::ModeratelySevere => "Moderately severe hearing loss",
            Self::Severe => "Severe hearing loss",
            Self::Profound => "Profound hearing loss",
            Self::Unknown => "Unclassified",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClassificationResult {
    #[serde(rename = "type")]
    pub loss_type: HearingLossType,
    pub severity: Severity,
    pub type_label: String,
    pub severity_label: String,
    pub description: String,
}

impl ClassificationResult {
    fn new(loss_type: HearingLossType, severity: Severity, description: &str) -> Self {
        Self {
            loss_type,
            severity,
            type_label: loss_type.label().to_string(),
            severity_label: severity.label().to_string(),
            description: description.to_string(),
        }
    }
}

/// Classify one ear's hearing loss by degree and type.
///
/// Degree comes from the air-conduction 3-point PTA. Type needs bone
/// conduction: a small air-bone gap means sensorineural, a significant gap
/// with normal bone-conduction PTA means conductive, otherwise mixed.
pub fn classify_hearing_loss(ac: &ThresholdMap, bc: Option<&ThresholdMap>) -> ClassificationResult {
    let Some(pta) = pta3(ac) else {
        return ClassificationResult::new(
            HearingLossType::Unknown,
            Severity::Unknown,
            "insufficient data",
        );
    };

    let severity = Severity::from_pta(pta);

    if pta <= NORMAL_HEARING_DB {
        return ClassificationResult::new(
            HearingLossType::Normal,
            severity,
            "hearing within normal limits",
        );
    }

    let Some((bc, avg_abg)) = bc.and_then(|bc| calculate_abg(ac, bc).avg_abg.map(|avg| (bc, avg)))
    else {
        return ClassificationResult::new(
            HearingLossType::Unknown,
            severity,
            "needs bone-conduction data",
        );
    };

    if avg_abg < SIGNIFICANT_ABG_DB {
        ClassificationResult::new(
            HearingLossType::Sensorineural,
            severity,
            "inner ear or auditory nerve involvement",
        )
    } else if avg_abg >= SIGNIFICANT_ABG_DB {
        // No bone-conduction PTA (e.g. BC only above 2 kHz) counts as mixed.
        match pta3(bc) {
            Some(bc_pta) if bc_pta <= NORMAL_HEARING_DB => ClassificationResult::new(
                HearingLossType::Conductive,
                severity,
                "outer or middle ear transmission problem",
            ),
            _ => ClassificationResult::new(
                HearingLossType::Mixed,
                severity,
                "conductive and sensorineural components",
            ),
        }
    } else {
        ClassificationResult::new(
            HearingLossType::Unknown,
            severity,
            "further testing needed",
        )
    }
}
