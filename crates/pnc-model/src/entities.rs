//! Registry entities and their surrogate identifiers.

use std::fmt;

macro_rules! surrogate_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(i64);

        impl $name {
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            pub fn as_i64(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

surrogate_id!(
    /// Store-assigned key of a Hospital row.
    HospitalId
);
surrogate_id!(
    /// Store-assigned key of a Woman row.
    WomanId
);
surrogate_id!(
    /// Store-assigned key of a Pregnancy row.
    PregnancyId
);
surrogate_id!(
    /// Store-assigned key of a Checkup row.
    CheckupId
);
surrogate_id!(
    /// Store-assigned key of an Analyst row.
    AnalystId
);

/// A Woman row ready for insertion. Optional fields load as SQL NULL.
#[derive(Debug, Clone)]
pub struct WomanRecord {
    pub name: String,
    pub birth_date: Option<String>,
    pub blood_type: Option<String>,
    pub hospital_id: HospitalId,
}

/// A Pregnancy row ready for insertion.
///
/// `analyst_id` is never fed by the export; it stays NULL until an analyst
/// takes the case over.
#[derive(Debug, Clone)]
pub struct PregnancyRecord {
    pub woman_id: WomanId,
    pub analyst_id: Option<AnalystId>,
    pub first_registration_date: Option<String>,
    pub delivery_date: Option<String>,
    pub baby_gender: Option<String>,
    pub delivery_type: Option<String>,
    pub number_of_checkups: Option<i64>,
    pub number_of_missed_checkups: Option<i64>,
}

/// A Checkup row ready for insertion.
#[derive(Debug, Clone)]
pub struct CheckupRecord {
    pub pregnancy_id: PregnancyId,
    pub date: Option<String>,
    pub time: Option<String>,
    pub weight: Option<f64>,
    pub blood_pressure: Option<String>,
    pub bp_category: Option<String>,
    pub gestational_age: Option<i64>,
    pub fetal_heart_rate: Option<i64>,
    pub anomaly_presence: Option<String>,
    pub maternal_mental_health: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surrogate_ids_display_as_integers() {
        assert_eq!(HospitalId::new(7).to_string(), "7");
        assert_eq!(WomanId::new(3).as_i64(), 3);
    }
}
