use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::models::flight::FlightRecord;
use crate::utils::error::{AppError, AppResult};

// Read the flight snapshot once at start-up
pub fn load_flights(path: impl AsRef<Path>) -> AppResult<Vec<FlightRecord>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::DataSource(format!("{}: {}", path.display(), e)))?;

    let flights = parse_flights(&raw)?;
    tracing::info!("Loaded {} flights from {}", flights.len(), path.display());
    Ok(flights)
}

/// Parse a snapshot document.
///
/// Both a bare array of flights and a `{ "flights": [...] }` document are
/// accepted. Records that do not decode are skipped with a warning so one bad
/// entry cannot empty the whole collection.
pub fn parse_flights(raw: &str) -> AppResult<Vec<FlightRecord>> {
    let entries = match serde_json::from_str::<Value>(raw)? {
        Value::Array(entries) => entries,
        Value::Object(mut doc) => match doc.remove("flights") {
            Some(Value::Array(entries)) => entries,
            _ => {
                return Err(AppError::DataSource(
                    "expected a \"flights\" array in the snapshot document".into(),
                ))
            }
        },
        _ => {
            return Err(AppError::DataSource(
                "snapshot must be an array or an object with a \"flights\" array".into(),
            ))
        }
    };

    let flights = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<FlightRecord>(entry) {
            Ok(flight) => Some(flight),
            Err(e) => {
                tracing::warn!("Skipping flight record #{}: {}", index, e);
                None
            }
        })
        .collect();

    Ok(flights)
}
