use std::sync::Arc;

use validator::Validate;

use crate::models::flight::{
    FlightListResponse, FlightRecord, FlightRow, FlightSearchQuery, FlightSearchResponse, SearchCriteria,
    PAGE_SIZE_OPTIONS,
};
use crate::models::sort::AppliedSort;
use crate::services::flight_predicate::matches;
use crate::services::pagination::Page;
use crate::services::sort_service::sort_flights;
use crate::utils::error::{AppError, AppResult};

/// Keep the flights matching `criteria`, in their original order.
///
/// No match is an empty vector, not an error.
pub fn filter_flights(records: &[FlightRecord], criteria: &SearchCriteria) -> Vec<FlightRecord> {
    records
        .iter()
        .filter(|flight| matches(flight, criteria))
        .cloned()
        .collect()
}

// Query engine over the snapshot loaded at start-up
pub struct FlightService {
    flights: Arc<[FlightRecord]>,
}

impl FlightService {
    pub fn new(flights: Vec<FlightRecord>) -> Self {
        FlightService {
            flights: flights.into(),
        }
    }

    pub fn snapshot(&self) -> &[FlightRecord] {
        &self.flights
    }

    pub fn all_flights(&self) -> FlightListResponse {
        FlightListResponse {
            flights: self.flights.to_vec(),
        }
    }

    // Ids compare by their text form, so "7" finds a numeric id 7
    pub fn find(&self, id: &str) -> AppResult<FlightRecord> {
        self.flights
            .iter()
            .find(|flight| flight.id.to_string() == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("No flight with id {}", id)))
    }

    pub fn filter(&self, criteria: &SearchCriteria) -> Vec<FlightRecord> {
        filter_flights(&self.flights, criteria)
    }

    // Filter, optionally sort, then cut out the requested page
    pub fn search(&self, query: FlightSearchQuery) -> AppResult<FlightSearchResponse> {
        query.validate()?;

        let filtered = self.filter(&query.criteria);
        tracing::debug!(
            "{} of {} flights match {:?}",
            filtered.len(),
            self.flights.len(),
            query.criteria
        );

        let (ordered, sort, next_direction) = match query.sort {
            Some(key) => {
                let outcome = sort_flights(&filtered, key, query.direction);
                let applied = AppliedSort {
                    key,
                    direction: outcome.direction,
                };
                (outcome.flights, Some(applied), outcome.next_direction)
            }
            // Nothing sorted, so the caller's direction stays as it was
            None => (filtered, None, query.direction),
        };

        let page = Page::from_slice(&ordered, query.page_index, query.page_size).map(FlightRow::from);

        Ok(FlightSearchResponse {
            flights: page.items,
            total_results: page.total_results,
            page_index: page.page_index,
            page_size: page.page_size,
            total_pages: page.total_pages,
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
            sort,
            next_direction,
        })
    }
}
