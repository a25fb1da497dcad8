//! age.rs
//!
//! Whole-year age and month offset between an origin and "now", in the
//! formats:
//!     27
//!     "27 years, 10 months"   (from the template "%y years, %m months")
//!
//! Only the year, month and day-of-month fields are compared; the time of
//! day never matters here.

use std::fmt;

use chrono::{Datelike, NaiveDateTime};

/// Result of an age query: a bare year count, or a rendered template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgeValue {
    Years(i32),
    Formatted(String),
}

impl fmt::Display for AgeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeValue::Years(y) => write!(f, "{y}"),
            AgeValue::Formatted(s) => f.write_str(s),
        }
    }
}

/// Years elapsed since `origin`.
///
/// In the origin's own month, a later day-of-month *now* takes a year off.
// TODO: confirm with product whether the same-month day check should be flipped.
pub fn years_from_origin(origin: NaiveDateTime, now: NaiveDateTime) -> i32 {
    let years = now.year() - origin.year();

    if origin.month() == now.month() {
        if now.day() > origin.day() {
            years - 1
        } else {
            years
        }
    } else if origin.month() > now.month() {
        years - 1
    } else {
        years
    }
}

/// Months from the origin's month forward to the current month, wrapping
/// around the year end.
pub fn months_diff_from_origin_month(origin: NaiveDateTime, now: NaiveDateTime) -> u32 {
    let (om, nm) = (origin.month(), now.month());
    if om == nm {
        0
    } else if om > nm {
        12 - (om - nm)
    } else {
        nm - om
    }
}

/// Replaces `%y` with the year count, then `%m` with the month offset.
pub fn format_age(format: &str, origin: NaiveDateTime, now: NaiveDateTime) -> String {
    format
        .replace("%y", &years_from_origin(origin, now).to_string())
        .replace("%m", &months_diff_from_origin_month(origin, now).to_string())
}
