pub mod types;
pub mod classification;

pub use types::FlightRiskError;
pub use classification::ErrorClassification;
