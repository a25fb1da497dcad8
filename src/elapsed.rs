//! Buckets an elapsed number of seconds into the coarsest fitting unit.
//!
//! Months are a flat 30 days and years a flat 12 such months.

use tracing::trace;

const MINUTE: u64 = 60;
const HOUR: u64 = MINUTE * 60;
const DAY: u64 = HOUR * 24;
const WEEK: u64 = DAY * 7;
const MONTH: u64 = DAY * 30;
const YEAR: u64 = MONTH * 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl Unit {
    pub const ALL: [Unit; 7] = [
        Unit::Second,
        Unit::Minute,
        Unit::Hour,
        Unit::Day,
        Unit::Week,
        Unit::Month,
        Unit::Year,
    ];

    pub fn short_code(self) -> &'static str {
        match self {
            Unit::Second => "s",
            Unit::Minute => "m",
            Unit::Hour => "h",
            Unit::Day => "d",
            Unit::Week => "w",
            Unit::Month => "mo",
            Unit::Year => "y",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Month => "month",
            Unit::Year => "year",
        }
    }

    /// Seconds in one displayed unit.
    pub fn seconds(self) -> u64 {
        match self {
            Unit::Second => 1,
            Unit::Minute => MINUTE,
            Unit::Hour => HOUR,
            Unit::Day => DAY,
            Unit::Week => WEEK,
            Unit::Month => MONTH,
            Unit::Year => YEAR,
        }
    }
}

/// First matching bucket wins.
pub fn classify(diff_secs: u64) -> Unit {
    let unit = if diff_secs < MINUTE {
        Unit::Second
    } else if diff_secs / MINUTE < 60 {
        Unit::Minute
    } else if diff_secs / HOUR < 24 {
        Unit::Hour
    } else if diff_secs / DAY < 7 {
        Unit::Day
    } else if diff_secs / MONTH < 1 && diff_secs / DAY >= 7 {
        Unit::Week
    } else if diff_secs / MONTH < 12 {
        Unit::Month
    } else {
        Unit::Year
    };
    trace!(diff_secs, unit = unit.name(), "classified elapsed time");
    unit
}

/// Whole units of `unit` contained in `diff_secs`.
pub fn count_in(unit: Unit, diff_secs: u64) -> u64 {
    diff_secs / unit.seconds()
}
