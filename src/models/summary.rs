use serde::{Deserialize, Serialize};

/// Aggregate financial-risk figures for a group of records.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskSummary {
    /// Sum of delay minutes.
    pub total_delay: f64,
    pub compensation: f64,
    pub operational_cost: f64,
    pub insurance_cost: f64,
    /// Compensation plus operational plus insurance cost.
    pub total_risk: f64,
    /// Passenger figure used for compensation, real or synthetic.
    pub passengers: f64,
    /// Number of records in the group.
    pub flights: usize,
    /// Number of records with a delay value.
    pub delay_observations: usize,
}

impl RiskSummary {
    /// Mean delay over records that have one.
    pub fn average_delay(&self) -> Option<f64> {
        if self.delay_observations == 0 {
            None
        } else {
            Some(self.total_delay / self.delay_observations as f64)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirlineRisk {
    pub airline: String,
    #[serde(flatten)]
    pub summary: RiskSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_delay() {
        let summary = RiskSummary {
            total_delay: 90.0,
            flights: 4,
            delay_observations: 3,
            ..Default::default()
        };
        assert_eq!(summary.average_delay(), Some(30.0));
        assert_eq!(RiskSummary::default().average_delay(), None);
    }

    #[test]
    fn test_airline_risk_serializes_flat() {
        let risk = AirlineRisk {
            airline: "AA".into(),
            summary: RiskSummary { total_risk: 12.5, ..Default::default() },
        };
        let json = serde_json::to_value(&risk).unwrap();
        assert_eq!(json["airline"], "AA");
        assert_eq!(json["total_risk"], 12.5);
    }
}
