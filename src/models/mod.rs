pub mod flight;
pub mod sort;
