pub mod flight_predicate;
pub mod flight_service;
pub mod pagination;
pub mod sort_service;
