use hearwell_scoring::{EligibilityRule, check_eligibility};

#[test]
fn missing_pta6_is_insufficient_data() {
    for (right, left) in [(None, Some(70.0)), (Some(70.0), None), (None, None)] {
        let result = check_eligibility(right, left, Some(20.0), Some(20.0));
        assert!(!result.eligible);
        assert_eq!(result.rule, None);
        assert_eq!(result.reason, "insufficient test data");
    }
}

#[test]
fn bilateral_sixty_fires_first() {
    let result = check_eligibility(Some(60.0), Some(60.0), None, None);
    assert!(result.eligible);
    assert_eq!(result.rule, Some(EligibilityRule::BilateralSixty));
    assert_eq!(result.reason, "bilateral 60 dB or greater");
}

#[test]
fn bilateral_sixty_takes_precedence_over_unilateral_rules() {
    let result = check_eligibility(Some(85.0), Some(65.0), None, None);
    assert_eq!(result.rule, Some(EligibilityRule::BilateralSixty));
    assert_eq!(result.reason, "bilateral 65 dB or greater");
}

#[test]
fn worse_eighty_with_better_forty_or_more() {
    let result = check_eligibility(Some(85.0), Some(50.0), None, None);
    assert!(result.eligible);
    assert_eq!(result.rule, Some(EligibilityRule::UnilateralEightyWithForty));
    assert_eq!(result.reason, "one ear 85 dB / other ear 50 dB");
}

#[test]
fn worse_eighty_with_better_below_forty() {
    let result = check_eligibility(Some(30.0), Some(85.0), None, None);
    assert!(result.eligible);
    assert_eq!(result.rule, Some(EligibilityRule::UnilateralEightyBelowForty));
    assert_eq!(result.reason, "one ear 85 dB / other ear 30 dB or less");
}

#[test]
fn better_ear_exactly_forty_goes_to_rule_two() {
    let result = check_eligibility(Some(80.0), Some(40.0), None, None);
    assert_eq!(result.rule, Some(EligibilityRule::UnilateralEightyWithForty));
    assert_eq!(result.reason, "one ear 80 dB / other ear 40 dB");
}

#[test]
fn word_recognition_at_forty_five_in_both_ears_fires_rule_four() {
    let result = check_eligibility(Some(50.0), Some(50.0), Some(45.0), Some(45.0));
    assert!(result.eligible);
    assert_eq!(result.rule, Some(EligibilityRule::BilateralWordRecognition));
    assert_eq!(result.reason, "bilateral word recognition 45% or less");
}

#[test]
fn word_recognition_above_fifty_in_one_ear_is_not_eligible() {
    let result = check_eligibility(Some(50.0), Some(50.0), Some(55.0), Some(45.0));
    assert!(!result.eligible);
    assert_eq!(result.rule, None);
    assert_eq!(result.reason, "criteria not met (PTA: 50/50 dB, WRS: 55/45%)");
}

#[test]
fn bilateral_word_recognition_at_fifty() {
    let result = check_eligibility(Some(50.0), Some(50.0), Some(50.0), Some(50.0));
    assert!(result.eligible);
    assert_eq!(result.rule, Some(EligibilityRule::BilateralWordRecognition));
    assert_eq!(result.reason, "bilateral word recognition 50% or less");
}

#[test]
fn word_recognition_reason_cites_the_higher_score() {
    let result = check_eligibility(Some(30.0), Some(35.0), Some(20.0), Some(44.0));
    assert_eq!(result.reason, "bilateral word recognition 44% or less");
}

#[test]
fn one_missing_word_recognition_score_skips_rule_four() {
    let result = check_eligibility(Some(30.0), Some(35.0), Some(20.0), None);
    assert!(!result.eligible);
    assert_eq!(result.reason, "criteria not met (PTA: 30/35 dB)");
}

#[test]
fn not_eligible_reason_keeps_fractional_values() {
    let result = check_eligibility(Some(41.7), Some(58.3), None, None);
    assert_eq!(result.reason, "criteria not met (PTA: 41.7/58.3 dB)");
}
