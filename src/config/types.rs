use serde::{Deserialize, Serialize};

use crate::dataset::default_keywords;
use crate::models::RateParameters;
use crate::risk::CostModel;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct FlightRiskConfig {
    pub rates: Option<RatesConfig>,
    pub columns: Option<ColumnsConfig>,
    pub validation: Option<ValidationConfig>,
    pub cost_model: Option<CostModelConfig>,
    pub output: Option<OutputConfig>,
    pub server: Option<ServerConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct RatesConfig {
    pub compensation_rate: Option<f64>,
    pub operational_cost_rate: Option<f64>,
    pub insurance_multiplier: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ColumnsConfig {
    pub airline: Option<String>,
    pub delay: Option<String>,
    pub passengers: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ValidationConfig {
    pub keywords: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CostModelConfig {
    pub cost_per_minute: Option<f64>,
    pub compensation_per_passenger: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct OutputConfig {
    pub report_path: Option<String>,
    pub chart_width: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Largest accepted request body. Datasets travel inline in the JSON body.
    pub max_body_bytes: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Some("127.0.0.1".to_string()),
            port: Some(8080),
            max_body_bytes: Some(DEFAULT_MAX_BODY_BYTES),
        }
    }
}

pub const DEFAULT_CHART_WIDTH: usize = 40;

pub const DEFAULT_MAX_BODY_BYTES: usize = 256 * 1024 * 1024;

impl FlightRiskConfig {
    /// Rates from the file, falling back to the defaults per field.
    pub fn rates(&self) -> RateParameters {
        let defaults = RateParameters::default();
        let file = self.rates.clone().unwrap_or_default();
        RateParameters {
            compensation_rate: file.compensation_rate.unwrap_or(defaults.compensation_rate),
            operational_cost_rate: file.operational_cost_rate.unwrap_or(defaults.operational_cost_rate),
            insurance_multiplier: file.insurance_multiplier.unwrap_or(defaults.insurance_multiplier),
        }
    }

    pub fn cost_model(&self) -> CostModel {
        let defaults = CostModel::default();
        let file = self.cost_model.clone().unwrap_or_default();
        CostModel {
            cost_per_minute: file.cost_per_minute.unwrap_or(defaults.cost_per_minute),
            compensation_per_passenger: file
                .compensation_per_passenger
                .unwrap_or(defaults.compensation_per_passenger),
        }
    }

    pub fn keywords(&self) -> Vec<String> {
        self.validation
            .as_ref()
            .and_then(|v| v.keywords.clone())
            .unwrap_or_else(default_keywords)
    }

    pub fn columns(&self) -> ColumnsConfig {
        self.columns.clone().unwrap_or_default()
    }

    pub fn max_body_bytes(&self) -> usize {
        self.server
            .as_ref()
            .and_then(|s| s.max_body_bytes)
            .unwrap_or(DEFAULT_MAX_BODY_BYTES)
    }

    pub fn chart_width(&self) -> usize {
        self.output
            .as_ref()
            .and_then(|o| o.chart_width)
            .unwrap_or(DEFAULT_CHART_WIDTH)
    }
}
