//! Error types for timefly.

use std::num::ParseIntError;
use thiserror::Error;

/// Result type alias for origin parsing and age computation
pub type Result<T> = std::result::Result<T, TimeflyError>;

#[derive(Debug, Error)]
pub enum TimeflyError {
    /// The origin was neither a date-like string nor a date/time value
    #[error("{type_name} is not a supported origin time")]
    UnsupportedOriginType { type_name: String },

    /// One of the year/month/day parts of a date string is not an integer
    #[error("invalid {component} component {value:?} in origin time")]
    InvalidComponent {
        component: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{year}-{month}-{day} is not a valid calendar date")]
    OutOfRange { year: i32, month: u32, day: u32 },
}

impl TimeflyError {
    pub(crate) fn unsupported(type_name: impl Into<String>) -> Self {
        Self::UnsupportedOriginType {
            type_name: type_name.into(),
        }
    }
}
