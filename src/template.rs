//! `%n` / `%u` / `%U` placeholder rendering for elapsed times.

use lazy_static::lazy_static;
use regex::{NoExpand, Regex};

use crate::elapsed::Unit;

pub const DEFAULT_FORMAT: &str = "%n %U ago";

lazy_static! {
    static ref UNIT_TOKEN: Regex = Regex::new(r"(?i)%u").unwrap();
}

/// The string a unit placeholder stands for in `format`, if any.
///
/// A lowercase `%u` anywhere selects the short code; otherwise `%U` selects
/// the full name with a trailing "s" for counts above one.
fn unit_text(format: &str, count: u64, unit: Unit) -> Option<String> {
    if format.contains("%u") {
        Some(unit.short_code().to_owned())
    } else if format.contains("%U") {
        let plural = if count > 1 { "s" } else { "" };
        Some(format!("{}{plural}", unit.name()))
    } else {
        None
    }
}

/// Renders `count` of `unit` through `format`, or [`DEFAULT_FORMAT`].
pub fn render(count: u64, unit: Unit, format: Option<&str>) -> String {
    let format = format.unwrap_or(DEFAULT_FORMAT);
    let rendered = format.replace("%n", &count.to_string());

    match unit_text(format, count, unit) {
        Some(text) => UNIT_TOKEN
            .replace_all(&rendered, NoExpand(&text))
            .into_owned(),
        None => rendered,
    }
}
