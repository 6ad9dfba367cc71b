use dotenv::dotenv;
use flight_search::config::AppConfig;
use flight_search::data::load_flights;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[rocket::launch]
fn rocket() -> _ {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flight_search=debug,rocket=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().expect("Failed to load config");

    // The snapshot is loaded once and never refreshed while serving
    let flights = load_flights(&config.flights_data_path).expect("Failed to load flight data");
    tracing::info!("Serving {} flights", flights.len());

    flight_search::build_rocket(flights, config)
}
