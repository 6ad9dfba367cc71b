use crate::models::flight::FlightRecord;
use crate::models::sort::{SortDirection, SortKey, SortState};
use crate::utils::date_compare::{compare_dates, compare_nulls_last};
use crate::utils::duration::parse_duration;

#[derive(Debug, Clone, PartialEq)]
pub struct SortOutcome {
    pub flights: Vec<FlightRecord>,
    pub direction: SortDirection,
    pub next_direction: SortDirection,
}

/// Sort a copy of `records` by `key` in `direction`.
///
/// The input is never reordered. Ties keep their original relative order.
/// Flights without a usable value for the key (no return date, unparseable
/// price or duration) go to the end in both directions. The outcome carries
/// the flipped direction for the caller to pass into its next sort.
pub fn sort_flights(records: &[FlightRecord], key: SortKey, direction: SortDirection) -> SortOutcome {
    let mut flights = records.to_vec();

    match key {
        SortKey::DepartureDate => flights.sort_by(|a, b| {
            compare_dates(Some(&a.departure_date), Some(&b.departure_date), direction)
        }),
        SortKey::ReturnDate => flights.sort_by(|a, b| {
            compare_dates(a.returning_date.as_ref(), b.returning_date.as_ref(), direction)
        }),
        SortKey::Price => sort_by_cached(&mut flights, direction, |f| f.price.amount()),
        SortKey::Duration => sort_by_cached(&mut flights, direction, duration_minutes),
    }

    SortOutcome {
        flights,
        direction,
        next_direction: direction.toggled(),
    }
}

impl SortState {
    // Sort with the current direction and return the state for the next sort
    pub fn apply(self, key: SortKey, records: &[FlightRecord]) -> (Vec<FlightRecord>, SortState) {
        let outcome = sort_flights(records, key, self.direction);
        let next = SortState {
            key: Some(key),
            direction: outcome.next_direction,
        };
        (outcome.flights, next)
    }
}

// Parse each sort value once instead of on every comparison
fn sort_by_cached<K, F>(flights: &mut Vec<FlightRecord>, direction: SortDirection, value: F)
where
    K: Ord,
    F: Fn(&FlightRecord) -> Option<K>,
{
    let mut keyed: Vec<(Option<K>, FlightRecord)> =
        flights.drain(..).map(|f| (value(&f), f)).collect();
    keyed.sort_by(|(a, _), (b, _)| compare_nulls_last(a.as_ref(), b.as_ref(), direction));
    flights.extend(keyed.into_iter().map(|(_, f)| f));
}

fn duration_minutes(flight: &FlightRecord) -> Option<u32> {
    match parse_duration(&flight.duration) {
        Ok(minutes) => Some(minutes),
        Err(e) => {
            tracing::debug!("flight {:?} sorts last by duration: {}", flight.id, e);
            None
        }
    }
}
