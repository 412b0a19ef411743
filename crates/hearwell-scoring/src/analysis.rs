//! Per-exam panels composed from the scoring functions.
//!
//! These are what the form and report layers display. Each `from_*`
//! constructor is as pure as the functions it calls.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use hearwell_core::frequency::Frequency;
use hearwell_core::models::aided::AidedSoundField;
use hearwell_core::models::document::ClinicalResults;
use hearwell_core::models::middle_ear::{MiddleEarExam, TympType, TympanometryReading};
use hearwell_core::models::pure_tone::PureToneExam;
use hearwell_core::models::speech::SpeechExam;
use hearwell_core::thresholds::{EarPair, EarSide, ThresholdMap};

use crate::abg::{AbgResult, calculate_abg};
use crate::agreement::{AgreementResult, validate_srt_pta};
use crate::classification::{ClassificationResult, classify_hearing_loss};
use crate::eligibility::{EligibilityResult, check_eligibility};
use crate::masking::{MaskingResult, check_masking_need};
use crate::pta::{pta3, pta6};
use crate::range::out_of_range;
use crate::rounding::round_tenth;
use crate::tympanometry::suggest_tymp_type;

/// Measurement pathway of a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Pathway {
    AirConduction,
    BoneConduction,
    SoundField,
    AidedSoundField,
}

impl Pathway {
    pub fn label(self) -> &'static str {
        match self {
            Self::AirConduction => "AC",
            Self::BoneConduction => "BC",
            Self::SoundField => "SF",
            Self::AidedSoundField => "Aided SF",
        }
    }
}

/// A recorded threshold outside -10..=120 dB HL.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RangeViolation {
    pub ear: EarSide,
    pub pathway: Pathway,
    pub frequency: Frequency,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PureToneAnalysis {
    /// 3-point air-conduction PTA.
    pub pta: EarPair<Option<f64>>,
    pub sound_field_pta: EarPair<Option<f64>>,
    pub pta6: EarPair<Option<f64>>,
    pub eligibility: EligibilityResult,
    pub abg: EarPair<AbgResult>,
    pub classification: EarPair<ClassificationResult>,
    pub masking: MaskingResult,
    pub range_violations: Vec<RangeViolation>,
}

impl PureToneAnalysis {
    /// Analyse a pure-tone exam. `wrs` carries each ear's word recognition
    /// score for the eligibility check, when speech testing was done.
    pub fn from_exam(exam: &PureToneExam, wrs: Option<EarPair<Option<f64>>>) -> Self {
        let pta6_pair = exam.ac.as_ref().map(pta6);
        let wrs = wrs.unwrap_or_default();

        let abg = EarPair::new(
            calculate_abg(&exam.ac.right, &exam.bc.right),
            calculate_abg(&exam.ac.left, &exam.bc.left),
        );
        let classification = EarPair::new(
            classify_hearing_loss(&exam.ac.right, non_empty(&exam.bc.right)),
            classify_hearing_loss(&exam.ac.left, non_empty(&exam.bc.left)),
        );

        Self {
            pta: exam.ac.as_ref().map(pta3),
            sound_field_pta: exam.sound_field.as_ref().map(pta3),
            pta6: pta6_pair,
            eligibility: check_eligibility(pta6_pair.right, pta6_pair.left, wrs.right, wrs.left),
            abg,
            classification,
            masking: check_masking_need(
                Some(&exam.ac.right),
                Some(&exam.ac.left),
                Some(&exam.bc.right),
                Some(&exam.bc.left),
            ),
            range_violations: range_violations(exam),
        }
    }
}

fn non_empty(map: &ThresholdMap) -> Option<&ThresholdMap> {
    Some(map).filter(|m| !m.is_empty())
}

/// Every out-of-range threshold, ordered by ear, then pathway, then
/// ascending frequency.
pub fn range_violations(exam: &PureToneExam) -> Vec<RangeViolation> {
    let mut violations = Vec::new();
    for ear in EarSide::BOTH {
        let pathways = [
            (Pathway::AirConduction, exam.ac.get(ear)),
            (Pathway::BoneConduction, exam.bc.get(ear)),
            (Pathway::SoundField, exam.sound_field.get(ear)),
        ];
        for (pathway, map) in pathways {
            violations.extend(out_of_range(map).into_iter().map(|(frequency, value)| {
                RangeViolation {
                    ear,
                    pathway,
                    frequency,
                    value,
                }
            }));
        }
    }
    violations
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SpeechAnalysis {
    pub srt: EarPair<Option<f64>>,
    pub wrs: EarPair<Option<f64>>,
    pub srt_pta_agreement: EarPair<AgreementResult>,
}

impl SpeechAnalysis {
    /// Check each ear's first SRT against its air-conduction 3-point PTA.
    pub fn from_exams(speech: &SpeechExam, pure_tone: Option<&PureToneExam>) -> Self {
        let srt = speech.primary_srt();
        let pta = match pure_tone {
            Some(exam) => exam.ac.as_ref().map(pta3),
            None => EarPair::default(),
        };

        Self {
            srt,
            wrs: speech.primary_wrs(),
            srt_pta_agreement: EarPair::new(
                validate_srt_pta(srt.right, pta.right),
                validate_srt_pta(srt.left, pta.left),
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TympanometryAnalysis {
    pub recorded: Option<TympType>,
    pub suggested: TympType,
    /// The clinician recorded a type that differs from a known suggestion.
    pub type_mismatch: bool,
}

impl TympanometryAnalysis {
    pub fn from_reading(reading: &TympanometryReading) -> Self {
        let suggested = suggest_tymp_type(reading.peak_pressure_dapa, reading.compliance_ml);
        let type_mismatch = match reading.tymp_type {
            Some(recorded) => suggested != TympType::Unknown && recorded != suggested,
            None => false,
        };
        Self {
            recorded: reading.tymp_type,
            suggested,
            type_mismatch,
        }
    }
}

/// Aided sound-field results next to the unaided ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AidedAnalysis {
    /// 3-point PTA over the aided thresholds.
    pub aided_pta: EarPair<Option<f64>>,
    /// Unaided sound-field PTA minus aided PTA, when both exist.
    pub functional_gain: EarPair<Option<f64>>,
    pub range_violations: Vec<RangeViolation>,
}

impl AidedAnalysis {
    /// `unaided` is the pure-tone exam whose sound-field maps give the
    /// unaided baseline.
    pub fn from_record(record: &AidedSoundField, unaided: Option<&PureToneExam>) -> Self {
        let aided_pta = record.aided_thresholds.as_ref().map(pta3);
        let unaided_pta = match unaided {
            Some(exam) => exam.sound_field.as_ref().map(pta3),
            None => EarPair::default(),
        };
        let gain = |before: Option<f64>, after: Option<f64>| {
            before.zip(after).map(|(b, a)| round_tenth(b - a))
        };

        let mut range_violations = Vec::new();
        for ear in EarSide::BOTH {
            range_violations.extend(
                out_of_range(record.aided_thresholds.get(ear))
                    .into_iter()
                    .map(|(frequency, value)| RangeViolation {
                        ear,
                        pathway: Pathway::AidedSoundField,
                        frequency,
                        value,
                    }),
            );
        }

        Self {
            aided_pta,
            functional_gain: EarPair::new(
                gain(unaided_pta.right, aided_pta.right),
                gain(unaided_pta.left, aided_pta.left),
            ),
            range_violations,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MiddleEarAnalysis {
    pub tympanometry: EarPair<TympanometryAnalysis>,
}

impl MiddleEarAnalysis {
    pub fn from_exam(exam: &MiddleEarExam) -> Self {
        Self {
            tympanometry: exam
                .tympanometry
                .as_ref()
                .map(TympanometryAnalysis::from_reading),
        }
    }
}

/// Everything derived from one visit's results.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VisitAnalysis {
    pub pure_tone: Option<PureToneAnalysis>,
    pub speech: Option<SpeechAnalysis>,
    pub middle_ear: Option<MiddleEarAnalysis>,
    pub aided: Option<AidedAnalysis>,
}

impl VisitAnalysis {
    pub fn from_results(results: &ClinicalResults) -> Self {
        let wrs = results.speech.as_ref().map(SpeechExam::primary_wrs);
        Self {
            pure_tone: results
                .pure_tone
                .as_ref()
                .map(|exam| PureToneAnalysis::from_exam(exam, wrs)),
            speech: results
                .speech
                .as_ref()
                .map(|speech| SpeechAnalysis::from_exams(speech, results.pure_tone.as_ref())),
            middle_ear: results.middle_ear.as_ref().map(MiddleEarAnalysis::from_exam),
            aided: results
                .sound_field
                .as_ref()
                .map(|record| AidedAnalysis::from_record(record, results.pure_tone.as_ref())),
        }
    }
}
