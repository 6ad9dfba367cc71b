pub mod date_compare;
pub mod duration;
pub mod error;
pub mod swagger_doc;
