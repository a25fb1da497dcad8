//! timefly: human-readable ages and elapsed times.
//!
//! ```
//! use chrono::NaiveDate;
//! use timefly::{FixedClock, FormatOptions, TemporalAge};
//!
//! let now = NaiveDate::from_ymd_opt(2015, 6, 3).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let dob = TemporalAge::with_clock("1987.08.02", FixedClock(now)).unwrap();
//!
//! assert_eq!(dob.age(&FormatOptions::default()).to_string(), "27");
//! assert_eq!(
//!     dob.age(&FormatOptions::with_format("%y years, %m months")).to_string(),
//!     "27 years, 10 months"
//! );
//! ```

pub mod age;
pub mod clock;
pub mod elapsed;
pub mod error;
pub mod options;
pub mod origin;
pub mod template;

use std::sync::OnceLock;

use chrono::NaiveDateTime;

pub use age::AgeValue;
pub use clock::{Clock, FixedClock, SystemClock};
pub use elapsed::Unit;
pub use error::{Result, TimeflyError};
pub use options::FormatOptions;
pub use origin::Origin;

/// A point in time that ages and elapsed times are measured from.
#[derive(Debug)]
pub struct TemporalAge<C = SystemClock> {
    origin_time: NaiveDateTime,
    clock: C,
    diff_secs: OnceLock<u64>,
}

impl TemporalAge<SystemClock> {
    /// Builds from a date string, date or date-time, using the host clock.
    pub fn new(origin: impl Into<Origin>) -> Result<Self> {
        Self::with_clock(origin, SystemClock)
    }
}

impl<C: Clock> TemporalAge<C> {
    pub fn with_clock(origin: impl Into<Origin>, clock: C) -> Result<Self> {
        Ok(Self {
            origin_time: origin.into().into_point_in_time()?,
            clock,
            diff_secs: OnceLock::new(),
        })
    }

    pub fn origin_time(&self) -> NaiveDateTime {
        self.origin_time
    }

    /// Whole years since the origin, or `format` with `%y` and `%m` filled in.
    pub fn age(&self, options: &FormatOptions) -> AgeValue {
        let now = self.clock.now();
        match options.format() {
            None => AgeValue::Years(age::years_from_origin(self.origin_time, now)),
            Some(format) => AgeValue::Formatted(age::format_age(format, self.origin_time, now)),
        }
    }

    /// Elapsed time since (or until) the origin, e.g. "3 days ago".
    pub fn elapsed_time(&self, options: &FormatOptions) -> String {
        let diff = self.diff_secs();
        let unit = elapsed::classify(diff);

        match (unit, options.format()) {
            (Unit::Second, None) => "a few seconds ago".to_owned(),
            (unit, format) => template::render(elapsed::count_in(unit, diff), unit, format),
        }
    }

    /// Absolute seconds between the origin and "now", sampled once per instance.
    fn diff_secs(&self) -> u64 {
        *self.diff_secs.get_or_init(|| {
            (self.clock.now() - self.origin_time)
                .num_seconds()
                .unsigned_abs()
        })
    }
}
