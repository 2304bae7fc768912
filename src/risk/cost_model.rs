use serde::{Deserialize, Serialize};
use tracing::warn;

use super::PASSENGERS_PER_RECORD;
use crate::errors::FlightRiskError;
use crate::models::FlightRecords;

/// Flat per-record cost constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    /// Operational cost per minute of delay.
    pub cost_per_minute: f64,
    /// Compensation paid per delayed passenger.
    pub compensation_per_passenger: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            cost_per_minute: 75.0,
            compensation_per_passenger: 100.0,
        }
    }
}

impl CostModel {
    pub fn validate(&self) -> Result<(), FlightRiskError> {
        for (name, value) in [
            ("cost_per_minute", self.cost_per_minute),
            ("compensation_per_passenger", self.compensation_per_passenger),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FlightRiskError::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordCost {
    pub airline: String,
    pub delay_minutes: f64,
    pub passengers: f64,
    pub operational_cost: f64,
    pub compensation_cost: f64,
    pub total_cost: f64,
}

/// Derived per-record costs. The source records are left untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostTable {
    pub rows: Vec<RecordCost>,
    /// Records left out for a missing delay or passenger value.
    pub excluded: usize,
}

/// Cost every record under a flat cost model.
///
/// Without a passenger column each record counts as
/// [`PASSENGERS_PER_RECORD`] passengers.
pub fn record_costs(records: &FlightRecords, model: &CostModel) -> CostTable {
    let mut rows = Vec::with_capacity(records.len());
    let mut excluded = 0usize;

    for record in records.records() {
        let passengers = if records.has_passenger_data() {
            record.passengers
        } else {
            Some(PASSENGERS_PER_RECORD)
        };
        let (Some(delay), Some(passengers)) = (record.delay_minutes, passengers) else {
            excluded += 1;
            continue;
        };

        let operational_cost = delay * model.cost_per_minute;
        let compensation_cost = passengers * model.compensation_per_passenger;
        rows.push(RecordCost {
            airline: record.airline.clone(),
            delay_minutes: delay,
            passengers,
            operational_cost,
            compensation_cost,
            total_cost: operational_cost + compensation_cost,
        });
    }

    if excluded > 0 {
        warn!(excluded, "Records without delay or passenger values left out of the cost table");
    }

    CostTable { rows, excluded }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirlineLoss {
    pub airline: String,
    pub total_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LossAnalysis {
    /// Total cost per airline, largest first.
    pub airline_losses: Vec<AirlineLoss>,
    /// 95th percentile of per-record total cost.
    pub worst_case: Option<f64>,
}

pub const WORST_CASE_PERCENTILE: f64 = 95.0;

/// Rank airlines by total loss and estimate the worst-case record cost.
pub fn loss_analysis(table: &CostTable) -> LossAnalysis {
    let mut airline_losses: Vec<AirlineLoss> = Vec::new();
    for row in &table.rows {
        match airline_losses.iter_mut().find(|l| l.airline == row.airline) {
            Some(loss) => loss.total_cost += row.total_cost,
            None => airline_losses.push(AirlineLoss {
                airline: row.airline.clone(),
                total_cost: row.total_cost,
            }),
        }
    }
    airline_losses.sort_by(|a, b| b.total_cost.total_cmp(&a.total_cost));

    let costs: Vec<f64> = table.rows.iter().map(|r| r.total_cost).collect();
    LossAnalysis {
        airline_losses,
        worst_case: percentile(&costs, WORST_CASE_PERCENTILE),
    }
}

/// Percentile with linear interpolation between the closest ranks.
pub fn percentile(values: &[f64], pct: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = (pct / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let fraction = rank - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}
