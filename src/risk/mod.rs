pub mod calculator;
pub mod regression;
pub mod predictor;
pub mod cost_model;

/// Synthetic passenger count per record when no passenger data is available.
pub const PASSENGERS_PER_RECORD: f64 = 100.0;

pub use calculator::{summarize, summarize_airline, summarize_by_airline};
pub use cost_model::{loss_analysis, percentile, record_costs, AirlineLoss, CostModel, CostTable, LossAnalysis, RecordCost};
pub use predictor::{predict_risk, risk_target, RiskModel, TrainingSchema};
pub use regression::LinearRegression;
