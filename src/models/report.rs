use serde::{Deserialize, Serialize};
use super::prediction::PredictionOutcome;
use super::rates::RateParameters;
use super::record::ColumnSelection;
use super::summary::AirlineRisk;

/// One line of the downloadable airline comparison report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    #[serde(rename = "Airline")]
    pub airline: String,
    #[serde(rename = "Total Delay (min)")]
    pub total_delay: f64,
    #[serde(rename = "Compensation ($)")]
    pub compensation: f64,
    #[serde(rename = "Operational ($)")]
    pub operational: f64,
    #[serde(rename = "Insurance ($)")]
    pub insurance: f64,
    #[serde(rename = "Total Risk ($)")]
    pub total_risk: f64,
}

impl From<&AirlineRisk> for ComparisonRow {
    fn from(risk: &AirlineRisk) -> Self {
        Self {
            airline: risk.airline.clone(),
            total_delay: risk.summary.total_delay,
            compensation: risk.summary.compensation,
            operational: risk.summary.operational_cost,
            insurance: risk.summary.insurance_cost,
            total_risk: risk.summary.total_risk,
        }
    }
}

/// Machine-readable form of a full analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskReport {
    pub generated_at: String,
    pub dataset: String,
    pub rows: usize,
    pub columns: ColumnSelection,
    pub rates: RateParameters,
    pub selected: AirlineRisk,
    pub comparison: Vec<AirlineRisk>,
    pub prediction: Option<PredictionOutcome>,
}
