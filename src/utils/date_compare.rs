use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::sort::SortDirection;

// Day key format, day/month/year without padding ("1/12/2023")
const DAY_FORMAT: &str = "%-d/%-m/%Y";

const DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// Normalise a date-like string into a comparable date-time.
///
/// Accepts RFC 3339 (converted to UTC), ISO date-times without an offset,
/// plain ISO dates and the `DD/MM/YYYY` form typed into the search form.
/// Plain dates resolve to midnight. Returns `None` when nothing matches.
pub fn parse_date_like(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Order two optional values so that present values always come before
/// absent ones, whatever the direction. Only present values are affected by
/// `direction`.
pub fn compare_nulls_last<T: Ord>(a: Option<T>, b: Option<T>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => direction.apply(a.cmp(&b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// Compare two date-times with missing dates sorted last in both directions
pub fn compare_dates(
    a: Option<&NaiveDateTime>,
    b: Option<&NaiveDateTime>,
    direction: SortDirection,
) -> Ordering {
    compare_nulls_last(a, b, direction)
}

/// Calendar-day key used for day-equality, e.g. `"1/12/2023"`.
pub fn format_day(value: &NaiveDateTime) -> String {
    value.format(DAY_FORMAT).to_string()
}

// Same calendar day, time of day ignored
pub fn equals_by_day(a: &NaiveDateTime, b: &NaiveDateTime) -> bool {
    format_day(a) == format_day(b)
}
