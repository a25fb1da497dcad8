//! origin.rs
//!
//! Normalizes the inputs an age can be measured from into a single
//! `NaiveDateTime`. Date strings look like `YYYY.MM.DD`, `YYYY/MM/DD` or
//! `YYYY-MM-DD`; bare dates land on local midnight.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, TimeflyError};

/// Anything a [`crate::TemporalAge`] can be built from.
///
/// Numeric and other dynamic shapes are representable so that they can be
/// rejected with [`TimeflyError::UnsupportedOriginType`].
#[derive(Debug, Clone, PartialEq)]
pub enum Origin {
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Integer(i64),
    Float(f64),
    /// Some other dynamic value, carrying its type name
    Other(&'static str),
}

impl Origin {
    pub(crate) fn into_point_in_time(self) -> Result<NaiveDateTime> {
        match self {
            Origin::Text(s) => parse_date_string(&s),
            Origin::Date(d) => Ok(d.and_time(NaiveTime::MIN)),
            Origin::DateTime(dt) => Ok(dt),
            Origin::Integer(_) => Err(TimeflyError::unsupported("Integer")),
            Origin::Float(_) => Err(TimeflyError::unsupported("Float")),
            Origin::Other(name) => Err(TimeflyError::unsupported(name)),
        }
    }
}

impl From<&str> for Origin {
    fn from(s: &str) -> Self {
        Origin::Text(s.to_owned())
    }
}

impl From<String> for Origin {
    fn from(s: String) -> Self {
        Origin::Text(s)
    }
}

impl From<NaiveDate> for Origin {
    fn from(d: NaiveDate) -> Self {
        Origin::Date(d)
    }
}

impl From<NaiveDateTime> for Origin {
    fn from(dt: NaiveDateTime) -> Self {
        Origin::DateTime(dt)
    }
}

impl From<DateTime<Local>> for Origin {
    fn from(dt: DateTime<Local>) -> Self {
        Origin::DateTime(dt.naive_local())
    }
}

impl From<i64> for Origin {
    fn from(n: i64) -> Self {
        Origin::Integer(n)
    }
}

impl From<f64> for Origin {
    fn from(n: f64) -> Self {
        Origin::Float(n)
    }
}

impl From<Value> for Origin {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Origin::Text(s),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Origin::Integer(i),
                None => Origin::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::Null => Origin::Other("Null"),
            Value::Bool(_) => Origin::Other("Boolean"),
            Value::Array(_) => Origin::Other("Array"),
            Value::Object(_) => Origin::Other("Object"),
        }
    }
}

/// `/` wins over `-`; anything else is treated as dot-separated.
fn detect_separator(s: &str) -> char {
    if s.contains('/') {
        '/'
    } else if s.contains('-') {
        '-'
    } else {
        '.'
    }
}

fn parse_component<T: std::str::FromStr<Err = std::num::ParseIntError>>(
    component: &'static str,
    raw: &str,
) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|source| TimeflyError::InvalidComponent {
            component,
            value: raw.to_owned(),
            source,
        })
}

/// Parses `YYYY<sep>MM<sep>DD` into local midnight of that day.
///
/// Missing month/day default to 1. Parts past the third are ignored.
pub fn parse_date_string(s: &str) -> Result<NaiveDateTime> {
    let separator = detect_separator(s);
    let mut parts = s.split(separator);

    let year: i32 = parse_component("year", parts.next().unwrap_or_default())?;
    let month: u32 = match parts.next() {
        Some(raw) => parse_component("month", raw)?,
        None => 1,
    };
    let day: u32 = match parts.next() {
        Some(raw) => parse_component("day", raw)?,
        None => 1,
    };

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(TimeflyError::OutOfRange { year, month, day })?;
    let origin = date.and_time(NaiveTime::MIN);
    debug!(input = s, %separator, %origin, "parsed origin time");
    Ok(origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn every_separator_yields_local_midnight() {
        for sep in ['.', '/', '-'] {
            let input = format!("1989{sep}01{sep}24");
            assert_eq!(parse_date_string(&input).unwrap(), midnight(1989, 1, 24));
        }
    }

    #[test]
    fn slash_takes_precedence_over_dash() {
        // Splitting on '/' leaves "01-02" as the month, which is not an integer
        let err = parse_date_string("2001/01-02/03").unwrap_err();
        assert!(matches!(
            err,
            TimeflyError::InvalidComponent {
                component: "month",
                ..
            }
        ));
    }

    #[test]
    fn missing_month_and_day_default_to_first() {
        assert_eq!(parse_date_string("1987").unwrap(), midnight(1987, 1, 1));
        assert_eq!(parse_date_string("1987.08").unwrap(), midnight(1987, 8, 1));
    }

    #[test]
    fn out_of_range_date_is_rejected() {
        let err = parse_date_string("2015.02.30").unwrap_err();
        assert!(matches!(
            err,
            TimeflyError::OutOfRange {
                year: 2015,
                month: 2,
                day: 30
            }
        ));
    }

    #[test]
    fn non_numeric_year_is_rejected() {
        assert!(matches!(
            parse_date_string("").unwrap_err(),
            TimeflyError::InvalidComponent {
                component: "year",
                ..
            }
        ));
        assert!(matches!(
            parse_date_string("abcd.01.01").unwrap_err(),
            TimeflyError::InvalidComponent {
                component: "year",
                ..
            }
        ));
    }

    #[test]
    fn date_lands_on_midnight_and_datetime_is_kept() {
        let d = NaiveDate::from_ymd_opt(2015, 4, 6).unwrap();
        assert_eq!(
            Origin::from(d).into_point_in_time().unwrap(),
            midnight(2015, 4, 6)
        );

        let dt = d.and_hms_opt(13, 45, 10).unwrap();
        assert_eq!(Origin::from(dt).into_point_in_time().unwrap(), dt);
    }

    #[test]
    fn numbers_are_unsupported() {
        for (origin, name) in [
            (Origin::from(1i64), "Integer"),
            (Origin::from(1.0f64), "Float"),
        ] {
            match origin.into_point_in_time() {
                Err(TimeflyError::UnsupportedOriginType { type_name }) => {
                    assert_eq!(type_name, name)
                }
                other => panic!("expected unsupported origin, got {other:?}"),
            }
        }
    }

    #[test]
    fn json_values_map_onto_origins() {
        assert_eq!(
            Origin::from(serde_json::json!("1987.08.02")),
            Origin::Text("1987.08.02".into())
        );
        assert_eq!(Origin::from(serde_json::json!(7)), Origin::Integer(7));
        assert_eq!(Origin::from(serde_json::json!(7.5)), Origin::Float(7.5));
        assert_eq!(Origin::from(serde_json::json!(true)), Origin::Other("Boolean"));
        assert_eq!(Origin::from(serde_json::json!(null)), Origin::Other("Null"));
    }

    proptest! {
        #[test]
        fn separator_does_not_change_the_origin(
            year in 1900i32..2100,
            month in 1u32..=12,
            day in 1u32..=28,
        ) {
            let dotted = parse_date_string(&format!("{year}.{month:02}.{day:02}")).unwrap();
            let slashed = parse_date_string(&format!("{year}/{month:02}/{day:02}")).unwrap();
            let dashed = parse_date_string(&format!("{year}-{month:02}-{day:02}")).unwrap();
            prop_assert_eq!(dotted, slashed);
            prop_assert_eq!(dotted, dashed);
            prop_assert_eq!(dotted, midnight(year, month, day));
        }
    }
}
