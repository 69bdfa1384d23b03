//! Blood pressure readings and their clinical classification.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A systolic/diastolic reading as it appears in the export ("118/76").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BloodPressure {
    pub systolic: i32,
    pub diastolic: i32,
}

/// Why a raw blood-pressure value failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBloodPressureError {
    #[error("expected systolic/diastolic, got {parts} part(s)")]
    WrongArity { parts: usize },
    #[error("{component} reading is not an integer")]
    NotAnInteger { component: &'static str },
}

impl FromStr for BloodPressure {
    type Err = ParseBloodPressureError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = value.split('/').collect();
        if parts.len() != 2 {
            return Err(ParseBloodPressureError::WrongArity { parts: parts.len() });
        }
        let systolic = parts[0]
            .trim()
            .parse()
            .map_err(|_| ParseBloodPressureError::NotAnInteger {
                component: "systolic",
            })?;
        let diastolic = parts[1]
            .trim()
            .parse()
            .map_err(|_| ParseBloodPressureError::NotAnInteger {
                component: "diastolic",
            })?;
        Ok(Self {
            systolic,
            diastolic,
        })
    }
}

impl fmt::Display for BloodPressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.systolic, self.diastolic)
    }
}

/// AHA-style blood-pressure classification bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BpCategory {
    HypertensiveCrisis,
    HypertensionStage2,
    HypertensionStage1,
    Elevated,
    Normal,
    Unknown,
}

impl BpCategory {
    /// Classify a reading.
    ///
    /// Rules are evaluated top to bottom; the first match wins.
    pub fn of(reading: BloodPressure) -> Self {
        let BloodPressure {
            systolic,
            diastolic,
        } = reading;
        if systolic > 180 || diastolic > 120 {
            Self::HypertensiveCrisis
        } else if systolic >= 140 || diastolic >= 90 {
            Self::HypertensionStage2
        } else if systolic >= 130 || diastolic >= 80 {
            Self::HypertensionStage1
        } else if systolic >= 120 && diastolic < 80 {
            Self::Elevated
        } else if systolic < 120 && diastolic < 80 {
            Self::Normal
        } else {
            Self::Unknown
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::HypertensiveCrisis => "Hypertensive Crisis",
            Self::HypertensionStage2 => "Hypertension Stage 2",
            Self::HypertensionStage1 => "Hypertension Stage 1",
            Self::Elevated => "Elevated",
            Self::Normal => "Normal",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for BpCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reading_with_padding() {
        let reading: BloodPressure = " 120 / 80 ".trim().parse().expect("parse reading");
        assert_eq!(
            reading,
            BloodPressure {
                systolic: 120,
                diastolic: 80
            }
        );
    }

    #[test]
    fn rejects_wrong_arity() {
        assert_eq!(
            "120".parse::<BloodPressure>(),
            Err(ParseBloodPressureError::WrongArity { parts: 1 })
        );
        assert_eq!(
            "120/80/90".parse::<BloodPressure>(),
            Err(ParseBloodPressureError::WrongArity { parts: 3 })
        );
    }

    #[test]
    fn rejects_non_integer_parts() {
        assert_eq!(
            "abc/80".parse::<BloodPressure>(),
            Err(ParseBloodPressureError::NotAnInteger {
                component: "systolic"
            })
        );
        assert_eq!(
            "120/".parse::<BloodPressure>(),
            Err(ParseBloodPressureError::NotAnInteger {
                component: "diastolic"
            })
        );
    }

    #[test]
    fn category_strings_are_canonical() {
        assert_eq!(BpCategory::HypertensiveCrisis.as_str(), "Hypertensive Crisis");
        assert_eq!(BpCategory::HypertensionStage2.as_str(), "Hypertension Stage 2");
        assert_eq!(BpCategory::HypertensionStage1.as_str(), "Hypertension Stage 1");
        assert_eq!(BpCategory::Unknown.to_string(), "Unknown");
    }
}
