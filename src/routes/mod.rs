use rocket::Route;
use rocket_okapi::openapi_get_routes;
use rocket_okapi::swagger_ui::SwaggerUIConfig;

pub mod flight_route;

// Routes mounted under /api, together with the generated openapi.json
pub fn api_routes() -> Vec<Route> {
    openapi_get_routes![
        flight_route::list_flights,
        flight_route::search_flights,
        flight_route::get_flight,
    ]
}

pub fn swagger_ui() -> SwaggerUIConfig {
    SwaggerUIConfig {
        url: "/api/openapi.json".to_string(),
        deep_linking: true,
        ..Default::default()
    }
}
