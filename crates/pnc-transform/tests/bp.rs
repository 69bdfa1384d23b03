//! Tests for blood-pressure categorization.

use pnc_model::BpCategory;
use pnc_transform::normalization::categorize;

#[test]
fn crisis_requires_strict_excess() {
    assert_eq!(categorize("181/80"), BpCategory::HypertensiveCrisis);
    assert_eq!(categorize("120/121"), BpCategory::HypertensiveCrisis);
    // Exactly 180/120 does not cross the strict thresholds and falls
    // through to the stage-2 rule.
    assert_eq!(categorize("180/120"), BpCategory::HypertensionStage2);
}

#[test]
fn stage_two_boundaries() {
    assert_eq!(categorize("140/90"), BpCategory::HypertensionStage2);
    assert_eq!(categorize("140/60"), BpCategory::HypertensionStage2);
    assert_eq!(categorize("110/90"), BpCategory::HypertensionStage2);
}

#[test]
fn stage_one_boundaries() {
    assert_eq!(categorize("139/89"), BpCategory::HypertensionStage1);
    assert_eq!(categorize("130/80"), BpCategory::HypertensionStage1);
    assert_eq!(categorize("129/80"), BpCategory::HypertensionStage1);
    assert_eq!(categorize("110/85"), BpCategory::HypertensionStage1);
}

#[test]
fn elevated_and_normal_boundaries() {
    assert_eq!(categorize("120/79"), BpCategory::Elevated);
    assert_eq!(categorize("129/79"), BpCategory::Elevated);
    assert_eq!(categorize("119/79"), BpCategory::Normal);
    assert_eq!(categorize("90/60"), BpCategory::Normal);
}

#[test]
fn malformed_values_are_unknown() {
    assert_eq!(categorize("abc"), BpCategory::Unknown);
    assert_eq!(categorize("120"), BpCategory::Unknown);
    assert_eq!(categorize("120/80/90"), BpCategory::Unknown);
    assert_eq!(categorize("120/eighty"), BpCategory::Unknown);
    assert_eq!(categorize(""), BpCategory::Unknown);
    assert_eq!(categorize("/"), BpCategory::Unknown);
}

#[test]
fn classification_is_deterministic() {
    for value in ["118/76", "142/91", "127/79", "not-a-reading"] {
        assert_eq!(categorize(value), categorize(value));
    }
}
