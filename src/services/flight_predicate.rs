use chrono::NaiveDateTime;

use crate::models::flight::{FlightRecord, SearchCriteria};
use crate::utils::date_compare::equals_by_day;

/// Decide whether a flight satisfies every criterion.
///
/// Each check is independent and permissive when its criterion is unset.
/// `one_way` and `returning_date` are consulted separately: the one-way check
/// reads only the flag, the return-date check reads only the date.
pub fn matches(flight: &FlightRecord, criteria: &SearchCriteria) -> bool {
    contains_ignore_case(&flight.departure_airport, &criteria.departure_airport_text)
        && contains_ignore_case(&flight.arrival_airport, &criteria.arrival_airport_text)
        && departure_date_matches(flight, criteria.departure_date.as_ref())
        && returning_date_matches(flight, criteria)
        && (!criteria.one_way_only || flight.one_way)
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn departure_date_matches(flight: &FlightRecord, wanted: Option<&NaiveDateTime>) -> bool {
    match wanted {
        Some(date) => equals_by_day(&flight.departure_date, date),
        None => true,
    }
}

// The return date filter is ignored for one-way searches
fn returning_date_matches(flight: &FlightRecord, criteria: &SearchCriteria) -> bool {
    match (criteria.returning_date.as_ref(), criteria.one_way_only) {
        (Some(wanted), false) => flight
            .returning_date
            .as_ref()
            .is_some_and(|returning| equals_by_day(returning, wanted)),
        _ => true,
    }
}
