use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::regression::LinearRegression;
use super::PASSENGERS_PER_RECORD;
use crate::errors::FlightRiskError;
use crate::models::{FlightRecords, RateParameters, RiskPrediction};

/// Per-record regression target.
///
/// Always assumes [`PASSENGERS_PER_RECORD`] passengers, independent of any
/// passenger column.
pub fn risk_target(delay: f64, rates: &RateParameters) -> f64 {
    (delay / 60.0) * PASSENGERS_PER_RECORD * rates.compensation_rate
        + delay * rates.operational_cost_rate
        + delay * rates.operational_cost_rate * rates.insurance_multiplier
}

/// Column layout of the design matrix: delay first, then one indicator per
/// airline except the reference airline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSchema {
    /// Dropped level. The lexicographically smallest airline.
    pub reference: String,
    pub indicators: Vec<String>,
}

impl TrainingSchema {
    pub fn from_airlines<'a, I>(airlines: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut levels: Vec<String> = airlines.into_iter().map(str::to_string).collect();
        levels.sort();
        levels.dedup();
        let mut levels = levels.into_iter();
        let reference = levels.next()?;
        Some(Self {
            reference,
            indicators: levels.collect(),
        })
    }

    pub fn width(&self) -> usize {
        1 + self.indicators.len()
    }

    /// Project a (delay, airline) query onto the training columns.
    ///
    /// The airline's indicator is set when it has one; the reference airline
    /// and airlines unseen in training project to an all-zero indicator block.
    pub fn project(&self, delay: f64, airline: &str) -> Vec<f64> {
        let mut features = Vec::with_capacity(self.width());
        features.push(delay);
        features.extend(
            self.indicators
                .iter()
                .map(|level| if level == airline { 1.0 } else { 0.0 }),
        );
        features
    }
}

/// A fitted delay-to-risk model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskModel {
    pub schema: TrainingSchema,
    pub regression: LinearRegression,
    pub training_rows: usize,
}

impl RiskModel {
    pub fn fit(records: &FlightRecords, rates: &RateParameters) -> Result<Self, FlightRiskError> {
        let missing = records.records().iter().filter(|r| r.delay_minutes.is_none()).count();
        if missing > 0 {
            return Err(FlightRiskError::Computation(format!(
                "Delay column has {} missing values, the risk model needs a delay for every record",
                missing
            )));
        }

        let schema = TrainingSchema::from_airlines(records.airlines()).ok_or_else(|| {
            FlightRiskError::Computation("No records available to fit the risk model".into())
        })?;

        let rows = records.len();
        let mut design = Vec::with_capacity(rows * schema.width());
        let mut target = Vec::with_capacity(rows);
        for record in records.records() {
            let delay = record.delay_minutes.unwrap_or_default();
            design.extend(schema.project(delay, &record.airline));
            target.push(risk_target(delay, rates));
        }

        let x = DMatrix::from_row_slice(rows, schema.width(), &design);
        let y = DVector::from_vec(target);
        let regression = LinearRegression::fit(&x, &y)?;

        debug!(
            rows,
            indicators = schema.indicators.len(),
            reference = %schema.reference,
            "Risk model fitted"
        );

        Ok(Self {
            schema,
            regression,
            training_rows: rows,
        })
    }

    pub fn predict(&self, delay: f64, airline: &str) -> Result<f64, FlightRiskError> {
        self.regression.predict(&self.schema.project(delay, airline))
    }
}

/// Refit the risk model on all records and predict the chosen airline's risk
/// at its average delay.
pub fn predict_risk(
    records: &FlightRecords,
    airline: &str,
    rates: &RateParameters,
) -> Result<RiskPrediction, FlightRiskError> {
    if !records.contains_airline(airline) {
        return Err(FlightRiskError::Validation(format!(
            "Airline '{}' does not appear in the dataset",
            airline
        )));
    }

    let model = RiskModel::fit(records, rates)?;

    let delays: Vec<f64> = records
        .for_airline(airline)
        .filter_map(|r| r.delay_minutes)
        .collect();
    let average_delay = delays.iter().sum::<f64>() / delays.len() as f64;

    let predicted_risk = model.predict(average_delay, airline)?;
    info!(airline, average_delay, predicted_risk, "Predicted financial risk");

    Ok(RiskPrediction {
        airline: airline.to_string(),
        average_delay,
        predicted_risk,
        training_rows: model.training_rows,
        rank: model.regression.rank,
    })
}
