#![allow(dead_code)]

use flight_search::data::parse_flights;
use flight_search::models::flight::{FlightId, FlightRecord};
use once_cell::sync::Lazy;

// Seven flights covering every sortable edge: a missing return date,
// an unparseable price, an unparseable duration, a price tie (ids 1 and 6)
// and a one-way flag that disagrees with a present return date (id 5).
const FLIGHTS_JSON: &str = r#"{
  "flights": [
    { "id": 1, "flightNumber": "AA100", "airline": "American Airlines",
      "departureAirport": "JFK", "arrivalAirport": "LAX",
      "departureLocation": "New York", "arrivalLocation": "Los Angeles",
      "departureDate": "2023-12-01T08:00:00Z", "returningDate": null,
      "oneWay": true, "duration": "5 hours, 30 minutes", "price": "250" },
    { "id": 2, "flightNumber": "UA200", "airline": "United",
      "departureAirport": "jfk", "arrivalAirport": "SFO",
      "departureLocation": "New York", "arrivalLocation": "San Francisco",
      "departureDate": "2023-12-02T09:00:00Z", "returningDate": "2023-12-09T18:00:00Z",
      "oneWay": false, "duration": "6 hours", "price": "bad" },
    { "id": 3, "flightNumber": "BA300", "airline": "British Airways",
      "departureAirport": "LHR", "arrivalAirport": "JFK",
      "departureLocation": "London", "arrivalLocation": "New York",
      "departureDate": "2023-12-01T22:00:00Z", "returningDate": "2023-12-08T10:00:00Z",
      "oneWay": false, "duration": "7 hours, 45 minutes", "price": 610 },
    { "id": 4, "flightNumber": "AS400", "airline": "Alaska",
      "departureAirport": "SFO", "arrivalAirport": "SEA",
      "departureLocation": "San Francisco", "arrivalLocation": "Seattle",
      "departureDate": "2023-12-03T07:15:00Z",
      "oneWay": true, "duration": "2 hours, 5 minutes", "price": 120.5 },
    { "id": 5, "flightNumber": "DL500", "airline": "Delta",
      "departureAirport": "LAX", "arrivalAirport": "JFK",
      "departureLocation": "Los Angeles", "arrivalLocation": "New York",
      "departureDate": "2023-12-02T06:00:00Z", "returningDate": "2023-12-05T12:00:00Z",
      "oneWay": true, "duration": "5 hours", "price": "310" },
    { "id": 6, "flightNumber": "AA600", "airline": "American Airlines",
      "departureAirport": "ORD", "arrivalAirport": "LAX",
      "departureLocation": "Chicago", "arrivalLocation": "Los Angeles",
      "departureDate": "2023-12-04T11:30:00Z", "returningDate": "2023-12-09T08:00:00Z",
      "oneWay": false, "duration": "4 hours, 20 minutes", "price": 250 },
    { "id": 7, "flightNumber": "B6700", "airline": "JetBlue",
      "departureAirport": "SEA", "arrivalAirport": "JFK",
      "departureLocation": "Seattle", "arrivalLocation": "New York",
      "departureDate": "2023-12-05T13:00:00Z", "returningDate": null,
      "oneWay": false, "duration": "about five hours", "price": 199 }
  ]
}"#;

pub static FLIGHTS: Lazy<Vec<FlightRecord>> =
    Lazy::new(|| parse_flights(FLIGHTS_JSON).expect("Failed to parse flight fixtures"));

pub fn flights() -> Vec<FlightRecord> {
    FLIGHTS.clone()
}

// Numeric ids in order, for compact assertions
pub fn ids(flights: &[FlightRecord]) -> Vec<u64> {
    flights
        .iter()
        .map(|flight| match &flight.id {
            FlightId::Number(n) => *n,
            FlightId::Text(s) => panic!("fixture ids are numeric, got {}", s),
        })
        .collect()
}

pub fn day(date: &str) -> chrono::NaiveDateTime {
    flight_search::utils::date_compare::parse_date_like(date)
        .unwrap_or_else(|| panic!("bad fixture date {}", date))
}
