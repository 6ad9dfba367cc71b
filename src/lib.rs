#[macro_use]
extern crate rocket;

pub mod config;
pub mod data;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use rocket::fairing::AdHoc;
use rocket::{Build, Rocket};
use rocket_okapi::swagger_ui::make_swagger_ui;

pub use models::flight::{FlightRecord, SearchCriteria};
pub use models::sort::{SortDirection, SortKey, SortState};
pub use services::flight_service::{filter_flights, FlightService};
pub use services::pagination::page;
pub use services::sort_service::{sort_flights, SortOutcome};

use crate::config::AppConfig;

// Assemble the service around an already-loaded snapshot
pub fn build_rocket(flights: Vec<FlightRecord>, config: AppConfig) -> Rocket<Build> {
    let flight_service = FlightService::new(flights);

    rocket::build()
        .manage(flight_service)
        .manage(config)
        .mount("/api", routes::api_routes())
        .mount("/swagger", make_swagger_ui(&routes::swagger_ui()))
        .attach(AdHoc::on_response("CORS", |_, res| {
            Box::pin(async move {
                res.set_header(rocket::http::Header::new(
                    "Access-Control-Allow-Origin",
                    "*",
                ));
            })
        }))
}
