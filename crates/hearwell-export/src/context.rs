use serde::Serialize;

use hearwell_core::models::aided::AidedSoundField;
use hearwell_core::models::document::VisitDocument;
use hearwell_core::models::preferences::ClinicPreferences;
use hearwell_core::models::verification::VerificationRecord;
use hearwell_core::models::visit::Visit;
use hearwell_core::thresholds::EarSide;
use hearwell_scoring::analysis::{
    AidedAnalysis, MiddleEarAnalysis, PureToneAnalysis, RangeViolation, SpeechAnalysis,
    VisitAnalysis,
};

/// Template context for a visit summary. Every value is preformatted text so
/// templates never deal with absent numbers.
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub customer_name: String,
    pub visit_date: String,
    pub center_id: String,
    pub counselor_name: String,
    pub stage: Option<String>,
    pub next_visit: Option<String>,
    pub pure_tone: Option<PureTonePanel>,
    pub speech: Option<SpeechPanel>,
    pub middle_ear: Option<MiddleEarPanel>,
    pub aided: Option<AidedPanel>,
    pub verification: Option<VerificationPanel>,
    pub protocol: Option<ProtocolPanel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PureTonePanel {
    pub ears: Vec<PureToneEarRow>,
    pub eligibility: String,
    pub masking: String,
    pub range_warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PureToneEarRow {
    pub ear: String,
    pub pta: String,
    pub pta6: String,
    pub sound_field_pta: String,
    pub abg: String,
    pub loss_type: String,
    pub severity: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpeechPanel {
    pub ears: Vec<SpeechEarRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpeechEarRow {
    pub ear: String,
    pub srt: String,
    pub wrs: String,
    pub agreement: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MiddleEarPanel {
    pub ears: Vec<TympanometryRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TympanometryRow {
    pub ear: String,
    pub recorded: String,
    pub suggested: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AidedPanel {
    pub ears: Vec<AidedEarRow>,
    pub speech: Option<String>,
    pub range_warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AidedEarRow {
    pub ear: String,
    pub aided_pta: String,
    pub functional_gain: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerificationPanel {
    pub rem: String,
    pub eaa: String,
    /// Set when REM was done but maximum output was not confirmed safe.
    pub mpo_warning: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProtocolPanel {
    pub progress: String,
    pub items: Vec<ChecklistRow>,
    /// Labels of required items still open.
    pub outstanding: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChecklistRow {
    pub section: String,
    pub label: String,
    pub status: String,
    pub note: Option<String>,
}

impl ReportContext {
    /// Build the context. Counselor and center come from the record when
    /// set there, else from the caller's preferences.
    pub fn new(
        document: &VisitDocument,
        analysis: &VisitAnalysis,
        preferences: &ClinicPreferences,
    ) -> Self {
        let record = &document.visit.record;
        Self {
            customer_name: document.customer.name.clone(),
            visit_date: document.visit.visit_date.to_string(),
            center_id: non_blank_or(&record.center_id, &preferences.center_id),
            counselor_name: non_blank_or(&record.counselor_name, &preferences.counselor_name),
            stage: document.visit.ha_stage.map(|s| s.label().to_string()),
            next_visit: document
                .visit
                .recommended_next_visit_date()
                .map(|d| d.to_string()),
            pure_tone: analysis.pure_tone.as_ref().map(pure_tone_panel),
            speech: analysis.speech.as_ref().map(speech_panel),
            middle_ear: analysis.middle_ear.as_ref().map(middle_ear_panel),
            aided: document
                .results
                .sound_field
                .as_ref()
                .zip(analysis.aided.as_ref())
                .map(|(record, aided)| aided_panel(record, aided)),
            verification: document.results.verification.as_ref().map(verification_panel),
            protocol: protocol_panel(&document.visit),
        }
    }
}

fn non_blank_or(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

fn db(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v} dB HL"))
}

fn percent(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v}%"))
}

fn pure_tone_panel(analysis: &PureToneAnalysis) -> PureTonePanel {
    let ears = EarSide::BOTH
        .iter()
        .map(|&ear| {
            let abg = analysis.abg.get(ear);
            let class = analysis.classification.get(ear);
            PureToneEarRow {
                ear: ear.label().to_string(),
                pta: db(*analysis.pta.get(ear)),
                pta6: db(*analysis.pta6.get(ear)),
                sound_field_pta: db(*analysis.sound_field_pta.get(ear)),
                abg: match abg.avg_abg {
                    Some(avg) => format!("{avg} dB, {}", abg.message),
                    None => format!("-, {}", abg.message),
                },
                loss_type: class.type_label.clone(),
                severity: class.severity_label.clone(),
                description: class.description.clone(),
            }
        })
        .collect();

    let eligibility = &analysis.eligibility;
    PureTonePanel {
        ears,
        eligibility: format!(
            "{} ({})",
            if eligibility.eligible {
                "eligible"
            } else {
                "not eligible"
            },
            eligibility.reason
        ),
        masking: analysis.masking.reason.clone(),
        range_warnings: analysis
            .range_violations
            .iter()
            .map(range_warning)
            .collect(),
    }
}

fn speech_panel(analysis: &SpeechAnalysis) -> SpeechPanel {
    let ears = EarSide::BOTH
        .iter()
        .map(|&ear| {
            let agreement = analysis.srt_pta_agreement.get(ear);
            SpeechEarRow {
                ear: ear.label().to_string(),
                srt: db(*analysis.srt.get(ear)),
                wrs: percent(*analysis.wrs.get(ear)),
                agreement: format!("{}: {}", agreement.status.label(), agreement.message),
            }
        })
        .collect();
    SpeechPanel { ears }
}

fn middle_ear_panel(analysis: &MiddleEarAnalysis) -> MiddleEarPanel {
    let ears = EarSide::BOTH
        .iter()
        .map(|&ear| {
            let tymp = analysis.tympanometry.get(ear);
            TympanometryRow {
                ear: ear.label().to_string(),
                recorded: tymp
                    .recorded
                    .map_or_else(|| "-".to_string(), |t| t.label().to_string()),
                suggested: tymp.suggested.label().to_string(),
                note: tymp
                    .type_mismatch
                    .then(|| "recorded type differs from the measured values".to_string()),
            }
        })
        .collect();
    MiddleEarPanel { ears }
}

fn range_warning(v: &RangeViolation) -> String {
    format!(
        "{} {} {} Hz: {} dB HL",
        v.ear.label(),
        v.pathway.label(),
        v.frequency,
        v.value
    )
}

fn yes_no(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "yes",
        Some(false) => "no",
        None => "-",
    }
}

fn aided_panel(record: &AidedSoundField, analysis: &AidedAnalysis) -> AidedPanel {
    let ears = EarSide::BOTH
        .iter()
        .map(|&ear| AidedEarRow {
            ear: ear.label().to_string(),
            aided_pta: db(*analysis.aided_pta.get(ear)),
            functional_gain: (*analysis.functional_gain.get(ear)).map_or_else(|| "-".to_string(), |g| format!("{g} dB")),
        })
        .collect();

    let speech = record.aided_speech.as_ref().map(|s| {
        let mut line = format!(
            "{}: Right {}, Left {}",
            s.test_name.as_deref().unwrap_or("aided speech"),
            percent(s.score_right),
            percent(s.score_left)
        );
        if let Some(note) = s.note.as_deref().filter(|n| !n.trim().is_empty()) {
            line.push_str(&format!(" ({note})"));
        }
        line
    });

    AidedPanel {
        ears,
        speech,
        range_warnings: analysis.range_violations.iter().map(range_warning).collect(),
    }
}

fn verification_panel(record: &VerificationRecord) -> VerificationPanel {
    let rem = &record.rem;
    let mut rem_parts = vec![format!("performed {}", yes_no(rem.performed))];
    if let Some(formula) = &rem.formula {
        rem_parts.push(format!("formula {formula}"));
    }
    if let Some(target) = &rem.target_match {
        rem_parts.push(format!("target match {target}"));
    }
    rem_parts.push(format!("MPO safe {}", yes_no(rem.mpo_safe)));
    if let Some(summary) = &rem.summary {
        rem_parts.push(summary.clone());
    }

    let eaa = &record.eaa;
    let mut eaa_parts = vec![
        format!("performed {}", yes_no(eaa.performed)),
        format!("pass {}", yes_no(eaa.pass)),
    ];
    if let Some(summary) = &eaa.summary {
        eaa_parts.push(summary.clone());
    }

    VerificationPanel {
        rem: rem_parts.join(", "),
        eaa: eaa_parts.join(", "),
        mpo_warning: (rem.performed == Some(true) && rem.mpo_safe != Some(true))
            .then(|| "maximum output not confirmed below discomfort level".to_string()),
    }
}

fn protocol_panel(visit: &Visit) -> Option<ProtocolPanel> {
    let stage = visit.ha_stage?;
    let progress = visit.checklist_progress()?;
    let template = stage.checklist();

    let items = template
        .iter()
        .map(|item| {
            let entry = visit.checklist.get(&item.key);
            ChecklistRow {
                section: item.section.label().to_string(),
                label: item.label.clone(),
                status: entry.map_or("not recorded", |e| e.status.label()).to_string(),
                note: entry.and_then(|e| e.note.clone()),
            }
        })
        .collect();

    let outstanding = progress
        .outstanding_required
        .iter()
        .filter_map(|key| template.iter().find(|item| &item.key == key))
        .map(|item| item.label.clone())
        .collect();

    Some(ProtocolPanel {
        progress: format!(
            "{} of {} done, {} skipped, {} n/a",
            progress.done, progress.total, progress.skipped, progress.not_applicable
        ),
        items,
        outstanding,
    })
}
