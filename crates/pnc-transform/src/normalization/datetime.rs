//! Calendar parsing and ordering for registration/checkup date pairs.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Relative order of a registration/checkup date pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePairOrder {
    /// Registration is on or before the checkup.
    Ordered,
    /// Registration sorts strictly after the checkup.
    Reversed,
}

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Parse an export timestamp: an ISO date, optionally with a time part.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

/// Order a registration/checkup pair.
///
/// Both values are parsed as calendar timestamps first. When either side
/// fails to parse, the raw strings are compared lexically instead; that
/// fallback is only meaningful for zero-padded ISO-like values and is kept
/// as a known limitation of the source export tooling.
pub fn compare_date_pair(registration: &str, checkup: &str) -> DatePairOrder {
    let reversed = match (parse_timestamp(registration), parse_timestamp(checkup)) {
        (Some(registered), Some(checked)) => registered > checked,
        _ => registration > checkup,
    };
    if reversed {
        DatePairOrder::Reversed
    } else {
        DatePairOrder::Ordered
    }
}
