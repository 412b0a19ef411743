use hearwell_core::frequency::Frequency::{self, Hz500, Hz1000, Hz2000, Hz4000};
use hearwell_core::thresholds::ThresholdMap;
use hearwell_scoring::classification::Severity;
use hearwell_scoring::{HearingLossType, classify_hearing_loss};

fn map(pairs: &[(Frequency, f64)]) -> ThresholdMap {
    ThresholdMap::from_pairs(pairs.iter().copied()).expect("finite thresholds")
}

fn speech_band(level: f64) -> ThresholdMap {
    map(&[(Hz500, level), (Hz1000, level), (Hz2000, level)])
}

#[test]
fn normal_pta_short_circuits_type() {
    let result = classify_hearing_loss(&speech_band(10.0), None);
    assert_eq!(result.severity, Severity::Normal);
    assert_eq!(result.loss_type, HearingLossType::Normal);
    assert_eq!(result.type_label, "Normal hearing");
    assert_eq!(result.severity_label, "Normal");
}

#[test]
fn normal_pta_ignores_a_large_gap() {
    let result = classify_hearing_loss(&speech_band(15.0), Some(&speech_band(-10.0)));
    assert_eq!(result.loss_type, HearingLossType::Normal);
}

#[test]
fn missing_air_conduction_is_unknown() {
    let result = classify_hearing_loss(&ThresholdMap::new(), Some(&speech_band(10.0)));
    assert_eq!(result.loss_type, HearingLossType::Unknown);
    assert_eq!(result.severity, Severity::Unknown);
    assert_eq!(result.description, "insufficient data");
}

#[test]
fn loss_without_bone_conduction_needs_more_data() {
    let result = classify_hearing_loss(&speech_band(40.0), None);
    assert_eq!(result.severity, Severity::Mild);
    assert_eq!(result.loss_type, HearingLossType::Unknown);
    assert_eq!(result.description, "needs bone-conduction data");

    let disjoint = map(&[(Hz4000, 10.0)]);
    let result = classify_hearing_loss(&speech_band(40.0), Some(&disjoint));
    assert_eq!(result.loss_type, HearingLossType::Unknown);
}

#[test]
fn large_gap_with_normal_bone_is_conductive() {
    let result = classify_hearing_loss(&speech_band(40.0), Some(&speech_band(10.0)));
    assert_eq!(result.loss_type, HearingLossType::Conductive);
    assert_eq!(result.severity, Severity::Mild);
    assert_eq!(result.type_label, "Conductive hearing loss");
}

#[test]
fn small_gap_is_sensorineural() {
    let result = classify_hearing_loss(&speech_band(60.0), Some(&speech_band(55.0)));
    assert_eq!(result.loss_type, HearingLossType::Sensorineural);
    assert_eq!(result.severity, Severity::ModeratelySevere);
}

#[test]
fn large_gap_with_elevated_bone_is_mixed() {
    let result = classify_hearing_loss(&speech_band(75.0), Some(&speech_band(40.0)));
    assert_eq!(result.loss_type, HearingLossType::Mixed);
    assert_eq!(result.severity, Severity::Severe);
}

#[test]
fn gap_outside_speech_band_without_bone_pta_is_mixed() {
    let ac = map(&[(Hz500, 50.0), (Hz1000, 50.0), (Hz2000, 50.0), (Hz4000, 60.0)]);
    let bc = map(&[(Hz4000, 20.0)]);
    let result = classify_hearing_loss(&ac, Some(&bc));
    assert_eq!(result.loss_type, HearingLossType::Mixed);
}

#[test]
fn severity_bands_are_closed_on_upper_bound() {
    let cases = [
        (15.0, Severity::Normal),
        (15.1, Severity::Slight),
        (25.0, Severity::Slight),
        (40.0, Severity::Mild),
        (40.1, Severity::Moderate),
        (55.0, Severity::Moderate),
        (70.0, Severity::ModeratelySevere),
        (90.0, Severity::Severe),
        (90.1, Severity::Profound),
    ];
    for (pta, expected) in cases {
        assert_eq!(Severity::from_pta(pta), expected, "pta {pta}");
    }
}

#[test]
fn result_serializes_type_under_its_wire_name() {
    let result = classify_hearing_loss(&speech_band(40.0), Some(&speech_band(10.0)));
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["type"], "CONDUCTIVE");
    assert_eq!(json["severity"], "MILD");
    assert_eq!(json["severity_label"], "Mild hearing loss");
}
