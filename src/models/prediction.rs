use serde::{Deserialize, Serialize};

/// A regression point estimate of total risk for one airline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskPrediction {
    pub airline: String,
    /// Mean delay of the airline's records, the query point of the fit.
    pub average_delay: f64,
    pub predicted_risk: f64,
    /// Records used to fit the model.
    pub training_rows: usize,
    /// Effective rank of the centered design matrix.
    pub rank: usize,
}

/// Outcome of a prediction attempt. A failed prediction does not void the rest
/// of an analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PredictionOutcome {
    Predicted(RiskPrediction),
    Failed { airline: String, error: String },
}

impl PredictionOutcome {
    pub fn predicted_risk(&self) -> Option<f64> {
        match self {
            Self::Predicted(p) => Some(p.predicted_risk),
            Self::Failed { .. } => None,
        }
    }
}
