//! Calendar-day parsing and formatting shared by exercise creation and logs.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Output format, e.g. `Sun Jan 15 2023`.
const DISPLAY_FORMAT: &str = "%a %b %d %Y";

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    DISPLAY_FORMAT,
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

/// Parse caller-supplied text into a calendar date.
///
/// Accepts ISO and slash dates, the display format itself, month-name
/// forms, timestamps (RFC 3339 or naive) and the long `Date.toString()`
/// style (`Sun Jan 15 2023 10:30:00 GMT+0000 (...)`). Time parts are dropped.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    parse_day(input)
        .or_else(|| strip_time_suffix(input).and_then(parse_day))
        .or_else(|| {
            DateTime::parse_from_rfc3339(input)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
                .map(|dt| dt.date())
        })
}

fn parse_day(input: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
}

/// `Www Mmm DD YYYY HH:MM:SS ...` -> `Www Mmm DD YYYY`.
fn strip_time_suffix(input: &str) -> Option<&str> {
    let mut tokens = input.split_whitespace();
    let day: Vec<&str> = tokens.by_ref().take(4).collect();
    let time = tokens.next()?;
    if day.len() != 4 || !time.contains(':') {
        return None;
    }

    let end = time.as_ptr() as usize - input.as_ptr() as usize;
    Some(input[..end].trim_end())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}
