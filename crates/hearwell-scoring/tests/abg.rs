use hearwell_core::frequency::{BONE_CONDUCTION_FREQUENCIES, CLINICAL_FREQUENCIES, Frequency};
use hearwell_core::thresholds::ThresholdMap;
use hearwell_scoring::calculate_abg;

fn flat(frequencies: &[Frequency], level: f64) -> ThresholdMap {
    ThresholdMap::from_pairs(frequencies.iter().map(|f| (*f, level))).expect("finite thresholds")
}

#[test]
fn uniform_twenty_db_gap_is_moderate() {
    let result = calculate_abg(&flat(&CLINICAL_FREQUENCIES, 30.0), &flat(&CLINICAL_FREQUENCIES, 10.0));

    assert_eq!(result.abg_by_freq.len(), BONE_CONDUCTION_FREQUENCIES.len());
    for frequency in BONE_CONDUCTION_FREQUENCIES {
        assert_eq!(result.abg_by_freq[&frequency], Some(20.0));
    }
    assert!(!result.abg_by_freq.contains_key(&Frequency::Hz125));
    assert!(!result.abg_by_freq.contains_key(&Frequency::Hz8000));
    assert_eq!(result.avg_abg, Some(20.0));
    assert!(result.has_significant_abg);
    assert!(result.message.contains("moderate"));
}

#[test]
fn no_overlap_cannot_be_calculated() {
    let ac = flat(&[Frequency::Hz500, Frequency::Hz1000], 40.0);
    let bc = flat(&[Frequency::Hz2000], 10.0);
    let result = calculate_abg(&ac, &bc);

    assert_eq!(result.avg_abg, None);
    assert!(!result.has_significant_abg);
    assert!(result.abg_by_freq.values().all(Option::is_none));
    assert_eq!(result.message, "cannot be calculated");
}

#[test]
fn gaps_are_signed() {
    let ac = flat(&[Frequency::Hz1000], 10.0);
    let bc = flat(&[Frequency::Hz1000], 20.0);
    let result = calculate_abg(&ac, &bc);

    assert_eq!(result.abg_by_freq[&Frequency::Hz1000], Some(-10.0));
    assert_eq!(result.avg_abg, Some(-10.0));
    assert!(!result.has_significant_abg);
    assert!(result.message.starts_with("within normal range"));
}

#[test]
fn average_covers_only_frequencies_with_both_pathways() {
    let ac = ThresholdMap::from_pairs([
        (Frequency::Hz500, 50.0),
        (Frequency::Hz1000, 45.0),
        (Frequency::Hz2000, 40.0),
    ])
    .unwrap();
    let bc = ThresholdMap::from_pairs([(Frequency::Hz500, 20.0), (Frequency::Hz1000, 30.0)]).unwrap();
    let result = calculate_abg(&ac, &bc);

    // (30 + 15) / 2
    assert_eq!(result.avg_abg, Some(22.5));
    assert_eq!(result.abg_by_freq[&Frequency::Hz2000], None);
}

#[test]
fn band_messages_follow_thresholds() {
    let cases = [
        (9.9, "within normal range"),
        (10.0, "mild conductive"),
        (14.9, "mild conductive"),
        (15.0, "moderate conductive"),
        (24.9, "moderate conductive"),
        (25.0, "severe or greater"),
    ];
    for (gap, expected) in cases {
        let ac = flat(&[Frequency::Hz1000], 20.0 + gap);
        let bc = flat(&[Frequency::Hz1000], 20.0);
        let result = calculate_abg(&ac, &bc);
        assert!(
            result.message.starts_with(expected),
            "gap {gap}: got '{}'",
            result.message
        );
        assert_eq!(result.has_significant_abg, gap >= 10.0);
    }
}
