pub mod analysis;
pub mod api;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod errors;
pub mod models;
pub mod reporting;
pub mod risk;
pub mod utils;
