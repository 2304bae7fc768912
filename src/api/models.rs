use serde::{Deserialize, Serialize};
use crate::config::{ColumnsConfig, RatesConfig};
use crate::dataset::ColumnCatalog;
use crate::models::{AirlineRisk, ColumnSelection, PredictionOutcome, RateParameters};

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    /// Delimited dataset text with a header row.
    pub dataset: String,
    #[serde(default)]
    pub delimiter: Option<char>,
    #[serde(default)]
    pub columns: Option<ColumnsConfig>,
    #[serde(default)]
    pub airline: Option<String>,
    /// Rate overrides, each field falling back to the server config.
    #[serde(default)]
    pub rates: Option<RatesConfig>,
    #[serde(default)]
    pub predict: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub rows: usize,
    pub catalog: ColumnCatalog,
    pub columns: ColumnSelection,
    pub rates: RateParameters,
    pub selected: AirlineRisk,
    pub comparison: Vec<AirlineRisk>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction: Option<PredictionOutcome>,
}
