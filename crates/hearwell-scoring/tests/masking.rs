use hearwell_core::frequency::Frequency::{self, Hz250, Hz1000, Hz2000, Hz4000, Hz8000};
use hearwell_core::thresholds::ThresholdMap;
use hearwell_scoring::check_masking_need;

fn map(pairs: &[(Frequency, f64)]) -> ThresholdMap {
    ThresholdMap::from_pairs(pairs.iter().copied()).expect("finite thresholds")
}

#[test]
fn missing_air_conduction_map_is_insufficient() {
    let ac = map(&[(Hz1000, 40.0)]);
    let result = check_masking_need(Some(&ac), None, None, None);
    assert!(!result.need_masking);
    assert!(result.frequencies.is_empty());
    assert_eq!(result.reason, "insufficient air-conduction data");
}

#[test]
fn forty_db_interaural_difference_is_flagged() {
    let right = map(&[(Hz1000, 40.0), (Hz2000, 30.0)]);
    let left = map(&[(Hz1000, 0.0), (Hz2000, 0.0)]);
    let result = check_masking_need(Some(&right), Some(&left), None, None);
    assert!(result.need_masking);
    assert_eq!(result.frequencies, vec![Hz1000]);
    assert_eq!(result.reason, "masking required at 1000 Hz");
}

#[test]
fn difference_is_symmetric() {
    let right = map(&[(Hz250, 5.0)]);
    let left = map(&[(Hz250, 60.0)]);
    let result = check_masking_need(Some(&right), Some(&left), None, None);
    assert_eq!(result.frequencies, vec![Hz250]);
}

#[test]
fn any_bone_conduction_value_is_flagged() {
    let right = map(&[(Hz1000, 40.0)]);
    let left = map(&[(Hz1000, 0.0)]);
    let bc_right = ThresholdMap::new();
    let bc_left = map(&[(Hz2000, 0.0)]);
    let result = check_masking_need(Some(&right), Some(&left), Some(&bc_right), Some(&bc_left));
    assert_eq!(result.frequencies, vec![Hz1000, Hz2000]);
    assert_eq!(result.reason, "masking required at 1000, 2000 Hz");
}

#[test]
fn merged_flags_have_no_duplicates_and_ascend() {
    let right = map(&[(Hz4000, 80.0), (Hz1000, 60.0)]);
    let left = map(&[(Hz4000, 20.0), (Hz1000, 10.0)]);
    let bc = map(&[(Hz4000, 30.0), (Hz250, 10.0), (Hz1000, 15.0)]);
    let result = check_masking_need(Some(&right), Some(&left), Some(&bc), Some(&bc));
    assert_eq!(result.frequencies, vec![Hz250, Hz1000, Hz4000]);
}

#[test]
fn frequencies_outside_bone_conduction_set_are_ignored() {
    let right = map(&[(Hz8000, 90.0)]);
    let left = map(&[(Hz8000, 10.0)]);
    let bc = map(&[(Hz8000, 10.0)]);
    let result = check_masking_need(Some(&right), Some(&left), Some(&bc), Some(&bc));
    assert!(!result.need_masking);
    assert_eq!(result.reason, "masking not needed");
}

#[test]
fn bone_conduction_needs_both_maps() {
    let ac = map(&[(Hz1000, 20.0)]);
    let bc = map(&[(Hz2000, 10.0)]);
    let result = check_masking_need(Some(&ac), Some(&ac), Some(&bc), None);
    assert!(!result.need_masking);
}

#[test]
fn thirty_nine_db_difference_is_not_flagged() {
    let right = map(&[(Hz1000, 39.0)]);
    let left = map(&[(Hz1000, 0.0)]);
    let result = check_masking_need(Some(&right), Some(&left), None, None);
    assert!(!result.need_masking);
}
