use flight_search::data::parse_flights;
use flight_search::models::flight::SearchCriteria;
use flight_search::models::sort::{SortDirection, SortKey, SortState};
use flight_search::services::flight_service::filter_flights;
use flight_search::services::sort_service::sort_flights;
use strum::IntoEnumIterator;

mod common {
    pub mod fixtures;
}
use common::fixtures::{flights, ids};

use SortDirection::{Ascending, Descending};

#[test]
fn test_sort_by_departure_date() {
    let records = flights();

    assert_eq!(ids(&sort_flights(&records, SortKey::DepartureDate, Ascending).flights), vec![1, 3, 5, 2, 4, 6, 7]);
    assert_eq!(ids(&sort_flights(&records, SortKey::DepartureDate, Descending).flights), vec![7, 6, 4, 2, 5, 3, 1]);
}

#[test]
fn test_sort_by_return_date_puts_missing_last_both_ways() {
    let records = flights();

    assert_eq!(ids(&sort_flights(&records, SortKey::ReturnDate, Ascending).flights), vec![5, 3, 6, 2, 1, 4, 7]);
    assert_eq!(ids(&sort_flights(&records, SortKey::ReturnDate, Descending).flights), vec![2, 6, 3, 5, 1, 4, 7]);
}

#[test]
fn test_sort_by_price_puts_unparseable_last_and_keeps_ties_stable() {
    let records = flights();

    // Flights 1 and 6 both cost 250
    assert_eq!(ids(&sort_flights(&records, SortKey::Price, Ascending).flights), vec![4, 7, 1, 6, 5, 3, 2]);
    assert_eq!(ids(&sort_flights(&records, SortKey::Price, Descending).flights), vec![3, 5, 1, 6, 7, 4, 2]);
}

#[test]
fn test_sort_by_duration_puts_malformed_last() {
    let records = flights();

    assert_eq!(ids(&sort_flights(&records, SortKey::Duration, Ascending).flights), vec![4, 6, 5, 1, 2, 3, 7]);
    assert_eq!(ids(&sort_flights(&records, SortKey::Duration, Descending).flights), vec![3, 2, 1, 5, 6, 4, 7]);
}

#[test]
fn test_sort_leaves_input_untouched() {
    let records = flights();
    let _ = sort_flights(&records, SortKey::Price, Descending);

    assert_eq!(records, flights());
}

#[test]
fn test_sort_is_idempotent_for_same_direction() {
    let records = flights();

    for key in SortKey::iter() {
        for direction in [Ascending, Descending] {
            let once = sort_flights(&records, key, direction).flights;
            let twice = sort_flights(&once, key, direction).flights;
            assert_eq!(once, twice, "{} {} is not idempotent", key, direction);
        }
    }
}

#[test]
fn test_date_keys_put_present_before_missing() {
    let records = parse_flights(
        r#"[
            { "id": 1, "departureDate": "2023-12-01T08:00:00Z", "returningDate": null },
            { "id": 2, "departureDate": "2023-12-02T08:00:00Z", "returningDate": "2023-12-06T08:00:00Z" }
        ]"#,
    )
    .unwrap();

    for direction in [Ascending, Descending] {
        let sorted = sort_flights(&records, SortKey::ReturnDate, direction).flights;
        assert_eq!(ids(&sorted), vec![2, 1]);
    }
}

#[test]
fn test_jfk_scenario_price_missing_last() {
    let records = parse_flights(
        r#"[
            { "id": 1, "departureAirport": "JFK", "arrivalAirport": "LAX",
              "departureDate": "2023-12-01T08:00:00Z", "returningDate": null, "oneWay": true,
              "price": "250", "duration": "5 hours, 30 minutes" },
            { "id": 2, "departureAirport": "jfk", "arrivalAirport": "SFO",
              "departureDate": "2023-12-02T08:00:00Z", "returningDate": "2023-12-09T08:00:00Z",
              "oneWay": false, "price": "bad", "duration": "6 hours" }
        ]"#,
    )
    .unwrap();

    let matched = filter_flights(&records, &SearchCriteria::default().departure_airport("jfk"));
    assert_eq!(ids(&matched), vec![1, 2]);

    for direction in [Ascending, Descending] {
        assert_eq!(ids(&sort_flights(&matched, SortKey::Price, direction).flights), vec![1, 2]);
    }
}

#[test]
fn test_direction_toggles_through_returned_state() {
    let records = flights();

    let first = sort_flights(&records, SortKey::Price, Ascending);
    assert_eq!(first.direction, Ascending);
    assert_eq!(first.next_direction, Descending);

    let second = sort_flights(&first.flights, SortKey::Price, first.next_direction);
    assert_eq!(ids(&second.flights), vec![3, 5, 1, 6, 7, 4, 2]);
    assert_eq!(second.next_direction, Ascending);
}

#[test]
fn test_sort_state_shares_one_direction_across_keys() {
    let records = flights();
    let state = SortState::default();

    let (by_price, state) = state.apply(SortKey::Price, &records);
    assert_eq!(ids(&by_price), vec![4, 7, 1, 6, 5, 3, 2]);
    assert_eq!(state, SortState { key: Some(SortKey::Price), direction: Descending });

    // Switching keys reuses the flipped direction
    let (by_departure, state) = state.apply(SortKey::DepartureDate, &by_price);
    assert_eq!(ids(&by_departure), vec![7, 6, 4, 2, 5, 3, 1]);
    assert_eq!(state.direction, Ascending);
}
