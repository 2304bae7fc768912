use serde::{Deserialize, Serialize};
use crate::errors::FlightRiskError;

/// The three scalars that turn delay minutes into money.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateParameters {
    /// Currency per passenger per hour of delay.
    pub compensation_rate: f64,
    /// Currency per minute of delay.
    pub operational_cost_rate: f64,
    /// Fraction of operational cost, in [0, 1].
    pub insurance_multiplier: f64,
}

impl Default for RateParameters {
    fn default() -> Self {
        Self {
            compensation_rate: 50.0,
            operational_cost_rate: 100.0,
            insurance_multiplier: 0.02,
        }
    }
}

impl RateParameters {
    pub fn validate(&self) -> Result<(), FlightRiskError> {
        for (name, value) in [
            ("compensation_rate", self.compensation_rate),
            ("operational_cost_rate", self.operational_cost_rate),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FlightRiskError::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.insurance_multiplier) {
            return Err(FlightRiskError::Config(format!(
                "insurance_multiplier must be between 0 and 1, got {}",
                self.insurance_multiplier
            )));
        }
        Ok(())
    }
}
