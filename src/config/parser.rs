use std::path::Path;
use crate::errors::FlightRiskError;
use super::types::FlightRiskConfig;
use super::schema::CONFIG_SCHEMA;
use tracing::{info, warn};

pub async fn parse_config(path: &Path) -> Result<FlightRiskConfig, FlightRiskError> {
    if !path.exists() {
        return Err(FlightRiskError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(FlightRiskError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config = parse_config_str(&content)?;
    info!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

/// Parse and validate configuration from YAML text.
pub fn parse_config_str(content: &str) -> Result<FlightRiskConfig, FlightRiskError> {
    // An empty file is a valid, empty configuration.
    if content.trim().is_empty() {
        return Ok(FlightRiskConfig::default());
    }

    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;

    // JSON Schema validation
    validate_schema(&yaml)?;

    // Parse into typed config
    let config: FlightRiskConfig = serde_yaml::from_value(yaml)?;

    // Semantic validation
    validate_values(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), FlightRiskError> {
    // Convert YAML value to JSON for schema validation
    let json_value: serde_json::Value = serde_json::to_value(yaml)
        .map_err(|e| FlightRiskError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| FlightRiskError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        // Advisory only, typed parsing and value checks below are authoritative
        for error in errors {
            warn!(validation_error = %error, path = %error.instance_path, "Config schema warning");
        }
    }

    Ok(())
}

/// Check value ranges the type system cannot express.
fn validate_values(config: &FlightRiskConfig) -> Result<(), FlightRiskError> {
    config.rates().validate()?;
    config.cost_model().validate()?;

    if let Some(keywords) = config.validation.as_ref().and_then(|v| v.keywords.as_ref()) {
        if keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(FlightRiskError::Config(
                "validation.keywords must contain at least one non-empty keyword".into(),
            ));
        }
    }

    if config.server.as_ref().and_then(|s| s.max_body_bytes) == Some(0) {
        return Err(FlightRiskError::Config("server.max_body_bytes must be at least 1".into()));
    }

    if config.output.as_ref().and_then(|o| o.chart_width) == Some(0) {
        return Err(FlightRiskError::Config("output.chart_width must be at least 1".into()));
    }

    Ok(())
}
