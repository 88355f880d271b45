//! Per-record extraction of operation parameters and responses.

pub mod params;
pub mod response;

pub use params::{body_parameter, extract_parameters, path_parameters, query_parameters};
pub use response::extract_response;
