use std::str::FromStr;

use chrono::NaiveDateTime;
use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

use crate::config::AppConfig;
use crate::models::flight::{
    FlightListResponse, FlightRecord, FlightSearchQuery, FlightSearchResponse, SearchCriteria,
};
use crate::models::sort::{SortDirection, SortKey};
use crate::services::flight_service::FlightService;
use crate::utils::date_compare::parse_date_like;
use crate::utils::error::AppError;

/// List every flight in the snapshot
#[openapi(tag = "Flights")]
#[get("/flights")]
pub async fn list_flights(flight_service: &State<FlightService>) -> Json<FlightListResponse> {
    Json(flight_service.all_flights())
}

/// Search flights
///
/// Filters by airport text and travel dates, optionally sorts by
/// `departureDate`, `returnDate`, `price` or `duration`, and returns one page.
/// Send the returned `next_direction` as `direction` on the next sort.
#[openapi(tag = "Flights")]
#[get("/flights/search?<departure_airport>&<arrival_airport>&<departure_date>&<returning_date>&<one_way>&<sort>&<direction>&<page>&<page_size>")]
#[allow(clippy::too_many_arguments)]
pub async fn search_flights(
    departure_airport: Option<String>,
    arrival_airport: Option<String>,
    departure_date: Option<String>,
    returning_date: Option<String>,
    one_way: Option<bool>,
    sort: Option<String>,
    direction: Option<String>,
    page: Option<usize>,
    page_size: Option<usize>,
    flight_service: &State<FlightService>,
    config: &State<AppConfig>,
) -> Result<Json<FlightSearchResponse>, AppError> {
    let criteria = SearchCriteria {
        departure_airport_text: departure_airport.unwrap_or_default(),
        arrival_airport_text: arrival_airport.unwrap_or_default(),
        departure_date: parse_query_date("departure", departure_date)?,
        returning_date: parse_query_date("returning", returning_date)?,
        one_way_only: one_way.unwrap_or(false),
    };

    let sort = match sort.filter(|s| !s.is_empty()) {
        Some(key) => Some(
            SortKey::from_str(&key)
                .map_err(|_| AppError::BadRequest(format!("Unknown sort key '{}'", key)))?,
        ),
        None => None,
    };

    let direction = match direction.filter(|d| !d.is_empty()) {
        Some(d) => SortDirection::from_str(&d)
            .map_err(|_| AppError::BadRequest(format!("Unknown sort direction '{}'", d)))?,
        None => SortDirection::default(),
    };

    let query = FlightSearchQuery {
        criteria,
        sort,
        direction,
        page_index: page.unwrap_or(0),
        page_size: page_size.unwrap_or(config.default_page_size),
    };

    let response = flight_service.search(query)?;
    Ok(Json(response))
}

/// Get a single flight
#[openapi(tag = "Flights")]
#[get("/flights/<id>")]
pub async fn get_flight(
    id: String,
    flight_service: &State<FlightService>,
) -> Result<Json<FlightRecord>, AppError> {
    Ok(Json(flight_service.find(&id)?))
}

// Empty values mean the filter is unset
fn parse_query_date(field: &str, value: Option<String>) -> Result<Option<NaiveDateTime>, AppError> {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(raw) => parse_date_like(&raw)
            .map(Some)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid {} date '{}'", field, raw))),
        None => Ok(None),
    }
}
