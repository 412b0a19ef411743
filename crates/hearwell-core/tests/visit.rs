use std::collections::BTreeMap;

use hearwell_core::models::customer::{Customer, RecordMeta};
use hearwell_core::models::document::VisitDocument;
use hearwell_core::models::preferences::ClinicPreferences;
use hearwell_core::models::visit::{HaStage, NextVisitRule, Visit, VisitType};
use jiff::civil::date;
use uuid::Uuid;

fn preferences() -> ClinicPreferences {
    ClinicPreferences {
        center_id: "gangnam".to_string(),
        counselor_name: "Kim".to_string(),
    }
}

fn visit(stage: Option<HaStage>, rule: Option<NextVisitRule>) -> Visit {
    let now = jiff::Timestamp::UNIX_EPOCH;
    Visit {
        id: Uuid::new_v4(),
        customer_id: Uuid::new_v4(),
        visit_date: date(2025, 3, 28),
        purpose: vec!["fitting".to_string()],
        memo: None,
        visit_type: if stage.is_some() {
            VisitType::HaProtocol
        } else {
            VisitType::General
        },
        ha_stage: stage,
        next_visit_rule: rule,
        checklist: BTreeMap::new(),
        record: RecordMeta::stamped(&preferences(), now),
    }
}

#[test]
fn protocol_stages_default_to_their_follow_up_interval() {
    assert_eq!(HaStage::Ha1.default_next_visit_rule(), NextVisitRule::Weekly);
    assert_eq!(HaStage::Ha2.default_next_visit_rule(), NextVisitRule::Weekly);
    assert_eq!(HaStage::Ha3.default_next_visit_rule(), NextVisitRule::ThreeMonth);
    assert_eq!(
        HaStage::Aftercare3Mo.default_next_visit_rule(),
        NextVisitRule::ThreeMonth
    );
}

#[test]
fn weekly_follow_up_adds_seven_days_across_month_end() {
    let v = visit(Some(HaStage::Ha1), None);
    assert_eq!(v.recommended_next_visit_date(), Some(date(2025, 4, 4)));
}

#[test]
fn explicit_rule_overrides_stage_default() {
    let v = visit(Some(HaStage::Ha1), Some(NextVisitRule::ThreeMonth));
    assert_eq!(v.recommended_next_visit_date(), Some(date(2025, 6, 26)));
}

#[test]
fn general_visit_without_rule_has_no_recommendation() {
    assert_eq!(visit(None, None).recommended_next_visit_date(), None);
}

#[test]
fn record_meta_is_stamped_from_explicit_preferences() {
    let meta = RecordMeta::stamped(&preferences(), jiff::Timestamp::UNIX_EPOCH);
    assert_eq!(meta.center_id, "gangnam");
    assert_eq!(meta.counselor_name, "Kim");
    assert_eq!(meta.created_at, meta.updated_at);
}

#[test]
fn customer_age_counts_completed_years() {
    let mut customer = Customer::new("Lee", &preferences(), jiff::Timestamp::UNIX_EPOCH);
    assert_eq!(customer.age_on(date(2025, 1, 1)), None);
    customer.birth_date = Some(date(1950, 6, 15));
    assert_eq!(customer.age_on(date(2025, 6, 14)), Some(74));
    assert_eq!(customer.age_on(date(2025, 6, 15)), Some(75));
}

#[test]
fn partial_session_blob_fills_documented_defaults() {
    let json = r#"{
        "customer": {
            "id": "5f0c7f3e-8a59-4a55-9d3f-0c1de2ab9a11",
            "name": "Park",
            "record": {"created_at": "2025-03-01T00:00:00Z", "updated_at": "2025-03-01T00:00:00Z"}
        },
        "visit": {
            "id": "0b7e2f61-1c67-4d4a-93b2-3f3e6b0f8f20",
            "customer_id": "5f0c7f3e-8a59-4a55-9d3f-0c1de2ab9a11",
            "visit_date": "2025-03-01",
            "ha_stage": "HA_2",
            "record": {"created_at": "2025-03-01T00:00:00Z", "updated_at": "2025-03-01T00:00:00Z"}
        },
        "results": {
            "pure_tone": {"ac": {"right": {"500": 40, "1000": null}, "left": {}}}
        }
    }"#;

    let doc = VisitDocument::from_json(json).unwrap();
    assert_eq!(doc.visit.visit_type, VisitType::General);
    assert!(doc.visit.purpose.is_empty());
    assert_eq!(doc.customer.phone, "");
    assert_eq!(doc.customer.record.center_id, "");

    let pure_tone = doc.results.pure_tone.expect("pure tone section");
    assert!(!pure_tone.performed);
    assert_eq!(pure_tone.ac.right.len(), 1);
    assert!(pure_tone.bc.right.is_empty());
    assert!(pure_tone.no_response.right.is_empty());
    assert!(doc.results.speech.is_none());
    assert_eq!(doc.visit.recommended_next_visit_date(), Some(date(2025, 3, 8)));
}

#[test]
fn checklist_progress_needs_a_protocol_stage() {
    assert_eq!(visit(None, None).checklist_progress(), None);

    let mut v = visit(Some(HaStage::Ha1), None);
    let empty = v.checklist_progress().expect("protocol visit");
    assert!(!empty.is_complete());

    v.checklist = HaStage::Ha1.default_checklist();
    assert!(v.checklist_progress().expect("protocol visit").is_complete());
}
