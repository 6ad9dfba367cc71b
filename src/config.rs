use std::env;
use std::path::PathBuf;

use crate::models::flight::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::utils::error::{AppError, AppResult};

const DEFAULT_FLIGHTS_DATA_PATH: &str = "data/flights.json";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub flights_data_path: PathBuf,
    pub default_page_size: usize,
}

impl AppConfig {
    // Read settings from the environment (after dotenv has loaded .env)
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let flights_data_path = lookup("FLIGHTS_DATA_PATH")
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FLIGHTS_DATA_PATH.to_string())
            .into();

        let default_page_size = match lookup("DEFAULT_PAGE_SIZE") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|size| (1..=MAX_PAGE_SIZE).contains(size))
                .ok_or_else(|| {
                    AppError::ValidationError(format!(
                        "DEFAULT_PAGE_SIZE must be between 1 and {}, got '{}'",
                        MAX_PAGE_SIZE, raw
                    ))
                })?,
            None => DEFAULT_PAGE_SIZE,
        };

        Ok(AppConfig {
            flights_data_path,
            default_page_size,
        })
    }
}
