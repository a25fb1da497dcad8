//! Source of "now" for age and elapsed-time computations.

use chrono::{Local, NaiveDateTime};

/// Port for the current time.
///
/// Everything in this crate works on naive local wall-clock time, so the
/// clock hands back a `NaiveDateTime` in the host's local zone.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Host clock, read through `chrono::Local`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at one instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
