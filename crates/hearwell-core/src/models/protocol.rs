//! Hearing-aid protocol checklists.
//!
//! Each [`HaStage`] has a fixed template of checklist items. A visit stores
//! the clinician's entries keyed by item key; [`ChecklistProgress`] compares
//! the two.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::visit::HaStage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ChecklistSection {
    Intake,
    EarCheck,
    HearingTests,
    FittingVerification,
    DeviceCheck,
    Education,
    Plan,
    Adjustment,
    Outcomes,
}

impl ChecklistSection {
    pub fn label(self) -> &'static str {
        match self {
            Self::Intake => "Intake and counseling",
            Self::EarCheck => "Ear and middle ear",
            Self::HearingTests => "Hearing tests",
            Self::FittingVerification => "Fitting and verification",
            Self::DeviceCheck => "Device check",
            Self::Education => "Education",
            Self::Plan => "Plan",
            Self::Adjustment => "Adjustment",
            Self::Outcomes => "Outcomes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ChecklistStatus {
    #[serde(rename = "DONE")]
    Done,
    #[serde(rename = "SKIPPED")]
    Skipped,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl ChecklistStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Done => "done",
            Self::Skipped => "skipped",
            Self::NotApplicable => "n/a",
        }
    }
}

/// One line of a stage template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChecklistItem {
    pub key: String,
    pub label: String,
    pub section: ChecklistSection,
    pub required: bool,
    /// Status the form pre-fills for a new session.
    pub default_status: ChecklistStatus,
}

/// What the clinician recorded for one checklist item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChecklistEntry {
    pub status: ChecklistStatus,
    #[serde(default)]
    pub note: Option<String>,
}

fn item(
    key: &str,
    label: &str,
    section: ChecklistSection,
    required: bool,
    default_status: ChecklistStatus,
) -> ChecklistItem {
    ChecklistItem {
        key: key.to_string(),
        label: label.to_string(),
        section,
        required,
        default_status,
    }
}

static HA1_ITEMS: LazyLock<Vec<ChecklistItem>> = LazyLock::new(|| {
    use ChecklistSection::*;
    use ChecklistStatus::Done;
    vec![
        item("intake_review", "Intake interview (difficult situations, goals, expectations)", Intake, true, Done),
        item("questionnaire_completed", "Initial questionnaire completed", Intake, false, Done),
        item("cosi_goals_set", "Top 3 goals set (COSI)", Intake, true, Done),
        item("otoscopy", "Otoscopy", EarCheck, true, Done),
        item("tympanometry", "Tympanometry", EarCheck, false, Done),
        item("pure_tone_ac", "Pure-tone air conduction", HearingTests, true, Done),
        item("pure_tone_bc", "Bone conduction (masked if needed)", HearingTests, true, Done),
        item("speech_srt", "Speech reception threshold", HearingTests, true, Done),
        item("speech_wrs", "Word recognition score", HearingTests, true, Done),
        item("sin_baseline", "Speech in noise (if possible)", HearingTests, false, Done),
        item("ucl_ldl", "Uncomfortable level / output limit reference", HearingTests, false, Done),
        item("device_plan", "Device style, features and binaural plan", FittingVerification, true, Done),
        item("expectation_counseling", "Realistic expectations and adaptation period", Education, true, Done),
        item("schedule_next", "Book 2nd visit (+7 days)", Plan, true, Done),
    ]
});

static HA2_ITEMS: LazyLock<Vec<ChecklistItem>> = LazyLock::new(|| {
    use ChecklistSection::*;
    use ChecklistStatus::Done;
    vec![
        item("listening_check", "Hearing aid listening check", DeviceCheck, true, Done),
        item("eaa_testbox", "Test box (EAA) quick check", DeviceCheck, false, Done),
        item("physical_fit_check", "Physical fit and feedback (dome/mold)", FittingVerification, true, Done),
        item("programming_done", "Programming to prescription", FittingVerification, true, Done),
        item("rem_verification", "Real-ear measurement", FittingVerification, true, Done),
        item("mpo_safety_check", "Maximum output (MPO) safety", FittingVerification, true, Done),
        item("sound_field_threshold", "Aided sound-field thresholds", HearingTests, true, Done),
        item("sound_field_speech", "Aided sound-field speech (quiet/noise)", HearingTests, false, Done),
        item("din_test", "Digits-in-noise test", HearingTests, false, Done),
        item("orientation_core", "Insertion, removal, charging and care", Education, true, Done),
        item("adaptation_schedule", "Adaptation schedule provided", Education, true, Done),
        item("comm_strategies", "Communication strategies in noise", Education, false, Done),
        item("schedule_next", "Book 3rd visit (+7 days)", Plan, true, Done),
    ]
});

static HA3_ITEMS: LazyLock<Vec<ChecklistItem>> = LazyLock::new(|| {
    use ChecklistSection::*;
    use ChecklistStatus::Done;
    vec![
        item("experience_review", "Review top 3 difficult situations", Intake, true, Done),
        item("datalogging_review", "Data logging (wear time, environments)", DeviceCheck, false, Done),
        item("otoscopy_followup", "Follow-up otoscopy (irritation, inflammation)", EarCheck, true, Done),
        item("cleaning_consumables", "Cleaning and consumables", DeviceCheck, true, Done),
        item("fine_tuning", "Gain, noise and feedback fine tuning", Adjustment, true, Done),
        item("rem_reverify", "Repeat REM after major changes", Adjustment, false, Done),
        item("validation_cosi", "Progress on top 3 goals", Outcomes, true, Done),
        item("satisfaction", "Satisfaction (0-10) recorded", Outcomes, true, Done),
        item("switch_to_aftercare", "Explain 3-month aftercare (+90 days)", Plan, true, Done),
    ]
});

static AFTERCARE_ITEMS: LazyLock<Vec<ChecklistItem>> = LazyLock::new(|| {
    use ChecklistSection::*;
    use ChecklistStatus::{Done, NotApplicable};
    vec![
        item("interim_history", "Changes in difficulty, satisfaction and use over 3 months", Intake, true, Done),
        item("red_flags", "Pain, discharge or sudden change", Intake, false, Done),
        item("otoscopy", "Otoscopy", EarCheck, true, Done),
        item("deep_cleaning", "Deep cleaning and consumables", DeviceCheck, true, Done),
        item("listening_check", "Hearing aid listening check", DeviceCheck, true, Done),
        item("eaa_quick_check", "Test box quick check", DeviceCheck, false, Done),
        item("datalogging_adj", "Adjustment from data logging", Adjustment, false, Done),
        item("fine_tuning", "Program or gain changes if needed", Adjustment, false, Done),
        item("tymp_needed", "Tympanometry if needed", HearingTests, false, NotApplicable),
        item("retest_needed", "Retest if hearing change suspected", HearingTests, false, NotApplicable),
        item("education_refresh", "Care, cleaning and replacement reminders", Education, true, Done),
        item("schedule_next", "Book next aftercare visit (+90 days)", Plan, true, Done),
    ]
});

impl HaStage {
    /// The checklist template for this stage, in form order.
    pub fn checklist(self) -> &'static [ChecklistItem] {
        match self {
            Self::Ha1 => HA1_ITEMS.as_slice(),
            Self::Ha2 => HA2_ITEMS.as_slice(),
            Self::Ha3 => HA3_ITEMS.as_slice(),
            Self::Aftercare3Mo => AFTERCARE_ITEMS.as_slice(),
        }
    }

    /// Entries pre-filled with each item's default status.
    pub fn default_checklist(self) -> BTreeMap<String, ChecklistEntry> {
        self.checklist()
            .iter()
            .map(|item| {
                (
                    item.key.clone(),
                    ChecklistEntry {
                        status: item.default_status,
                        note: None,
                    },
                )
            })
            .collect()
    }
}

/// Tally of a visit's checklist against its stage template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChecklistProgress {
    pub total: usize,
    pub done: usize,
    pub skipped: usize,
    pub not_applicable: usize,
    /// Required items with no entry or recorded as skipped, in template order.
    pub outstanding_required: Vec<String>,
}

impl ChecklistProgress {
    /// Entries whose key is not in the template are ignored.
    pub fn evaluate(stage: HaStage, entries: &BTreeMap<String, ChecklistEntry>) -> Self {
        let mut progress = Self::default();
        for item in stage.checklist() {
            progress.total += 1;
            let status = entries.get(&item.key).map(|e| e.status);
            match status {
                Some(ChecklistStatus::Done) => progress.done += 1,
                Some(ChecklistStatus::Skipped) => progress.skipped += 1,
                Some(ChecklistStatus::NotApplicable) => progress.not_applicable += 1,
                None => {}
            }
            if item.required && matches!(status, None | Some(ChecklistStatus::Skipped)) {
                progress.outstanding_required.push(item.key.clone());
            }
        }
        progress
    }

    pub fn is_complete(&self) -> bool {
        self.outstanding_required.is_empty()
    }
}
