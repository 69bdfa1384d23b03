//! Blood-pressure categorization.

use pnc_model::{BloodPressure, BpCategory};

/// Classify a raw "systolic/diastolic" export value.
///
/// Total over all inputs: anything that does not parse as a pair of
/// integers maps to [`BpCategory::Unknown`] instead of failing.
pub fn categorize(value: &str) -> BpCategory {
    match value.parse::<BloodPressure>() {
        Ok(reading) => BpCategory::of(reading),
        Err(_) => BpCategory::Unknown,
    }
}
