use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlightRiskError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Error reading the dataset: {0}")]
    Read(String),

    #[error("Invalid dataset: {0}")]
    Validation(String),

    #[error("Analysis error: {0}")]
    Computation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
