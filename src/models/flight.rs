use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::sort::{AppliedSort, SortDirection, SortKey};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

// Page sizes offered by the results pager
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 25];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum FlightId {
    Number(u64),
    Text(String),
}

impl fmt::Display for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightId::Number(n) => write!(f, "{}", n),
            FlightId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Price exactly as the data source sent it.
///
/// Upstream data sometimes carries text where a number belongs, so the raw
/// value is kept and only turned into an amount when something needs to
/// compare prices. `null` and other non-price values are `Missing`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Price {
    Number(#[schemars(with = "f64")] serde_json::Number),
    Text(String),
    Missing,
}

impl Price {
    pub fn amount(&self) -> Option<Decimal> {
        match self {
            Price::Number(n) => parse_amount(&n.to_string()),
            Price::Text(s) => parse_amount(s),
            Price::Missing => None,
        }
    }
}

impl Default for Price {
    fn default() -> Self {
        Price::Missing
    }
}

// Digit separators are not numbers to the data source, e.g. "1_000"
fn parse_amount(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.contains('_') {
        return None;
    }
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

/// A single flight from the loaded snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlightRecord {
    pub id: FlightId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub flight_number: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub airline: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub departure_airport: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub arrival_airport: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub departure_location: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub arrival_location: String,
    #[serde(deserialize_with = "lenient::required_date")]
    pub departure_date: NaiveDateTime,
    // Unparseable returning dates are treated as absent
    #[serde(default, deserialize_with = "lenient::optional_date")]
    pub returning_date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub one_way: bool,
    #[serde(default, deserialize_with = "lenient::text")]
    pub duration: String,
    #[serde(default, deserialize_with = "lenient::price")]
    pub price: Price,
}

/// Filter criteria for a single search. Every unset field matches all flights.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    pub departure_airport_text: String,
    pub arrival_airport_text: String,
    pub departure_date: Option<NaiveDateTime>,
    pub returning_date: Option<NaiveDateTime>,
    pub one_way_only: bool,
}

impl SearchCriteria {
    pub fn departure_airport(mut self, text: impl Into<String>) -> Self {
        self.departure_airport_text = text.into();
        self
    }

    pub fn arrival_airport(mut self, text: impl Into<String>) -> Self {
        self.arrival_airport_text = text.into();
        self
    }

    pub fn departing_on(mut self, date: NaiveDateTime) -> Self {
        self.departure_date = Some(date);
        self
    }

    pub fn returning_on(mut self, date: NaiveDateTime) -> Self {
        self.returning_date = Some(date);
        self
    }

    pub fn one_way_only(mut self, one_way_only: bool) -> Self {
        self.one_way_only = one_way_only;
        self
    }
}

// Parsed search request: criteria plus ordering and paging
#[derive(Debug, Clone, Validate)]
pub struct FlightSearchQuery {
    pub criteria: SearchCriteria,
    pub sort: Option<SortKey>,
    pub direction: SortDirection,
    pub page_index: usize,
    #[validate(range(min = 1, max = MAX_PAGE_SIZE))]
    pub page_size: usize,
}

impl FlightSearchQuery {
    pub fn new(criteria: SearchCriteria) -> Self {
        FlightSearchQuery {
            criteria,
            sort: None,
            direction: SortDirection::Ascending,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct FlightListResponse {
    pub flights: Vec<FlightRecord>,
}

// Flight row with display-ready dates
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FlightRow {
    #[serde(flatten)]
    pub flight: FlightRecord,
    pub departure_date_display: String,
    pub returning_date_display: String,
}

impl From<FlightRecord> for FlightRow {
    fn from(flight: FlightRecord) -> Self {
        FlightRow {
            departure_date_display: format_date_output(Some(&flight.departure_date)),
            returning_date_display: format_date_output(flight.returning_date.as_ref()),
            flight,
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[schemars(example = "FlightSearchResponse::example")]
pub struct FlightSearchResponse {
    pub flights: Vec<FlightRow>,
    pub total_results: usize,
    pub page_index: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub page_size_options: Vec<usize>,
    #[schemars(title = "Sort applied to this result set")]
    pub sort: Option<AppliedSort>,
    #[schemars(title = "Direction to send with the next sort request")]
    pub next_direction: SortDirection,
}

impl FlightSearchResponse {
    pub fn example() -> Self {
        Self {
            flights: vec![],
            total_results: 0,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
            total_pages: 0,
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
            sort: Some(AppliedSort {
                key: SortKey::Price,
                direction: SortDirection::Ascending,
            }),
            next_direction: SortDirection::Descending,
        }
    }
}

/// Render a date-time for the results table, e.g. `"1 Dec 2023, 08:00 UTC"`.
/// Missing dates render as `"NA"`.
pub fn format_date_output(value: Option<&NaiveDateTime>) -> String {
    match value {
        Some(dt) => dt.format("%-d %b %Y, %H:%M UTC").to_string(),
        None => "NA".to_string(),
    }
}

mod lenient {
    use chrono::NaiveDateTime;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::Price;
    use crate::utils::date_compare::parse_date_like;

    // Accept strings and numbers; null becomes an empty string
    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            Value::Null => Ok(String::new()),
            other => Err(D::Error::custom(format!("expected text, found {}", other))),
        }
    }

    // Only true and "true" count as set
    pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Bool(b) => Ok(b),
            Value::String(s) => Ok(s.trim().eq_ignore_ascii_case("true")),
            _ => Ok(false),
        }
    }

    pub fn price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Price, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => Ok(Price::Number(n)),
            Value::String(s) => Ok(Price::Text(s)),
            other => {
                if !other.is_null() {
                    tracing::debug!("treating price {} as missing", other);
                }
                Ok(Price::Missing)
            }
        }
    }

    pub fn required_date<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date_like(&raw)
            .ok_or_else(|| D::Error::custom(format!("unparseable date '{}'", raw)))
    }

    pub fn optional_date<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(raw) => {
                let parsed = parse_date_like(&raw);
                if parsed.is_none() {
                    tracing::debug!("treating unparseable date '{}' as absent", raw);
                }
                Ok(parsed)
            }
            _ => Ok(None),
        }
    }
}
