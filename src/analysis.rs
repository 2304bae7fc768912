use tracing::{info, warn};

use crate::config::ColumnsConfig;
use crate::dataset::{validate_dataset, ColumnCatalog, Dataset};
use crate::errors::FlightRiskError;
use crate::models::{AirlineRisk, ColumnSelection, FlightRecords, PredictionOutcome, RateParameters};
use crate::risk::{predict_risk, summarize_airline, summarize_by_airline};

/// A validated dataset with resolved columns and a chosen airline, ready for
/// any number of computations under different rates.
#[derive(Debug, Clone)]
pub struct PreparedAnalysis {
    pub dataset: Dataset,
    pub catalog: ColumnCatalog,
    pub selection: ColumnSelection,
    pub records: FlightRecords,
    pub airline: String,
}

/// Validate a dataset, resolve the requested columns and pick the airline.
///
/// Without an explicit airline the first one seen in the dataset is used.
pub fn prepare(
    dataset: Dataset,
    keywords: &[String],
    columns: &ColumnsConfig,
    airline: Option<&str>,
) -> Result<PreparedAnalysis, FlightRiskError> {
    let catalog = validate_dataset(&dataset, keywords)?;
    let selection = ColumnSelection::resolve(
        &catalog,
        columns.airline.as_deref(),
        columns.delay.as_deref(),
        columns.passengers.as_deref(),
    )?;
    let records = FlightRecords::from_dataset(&dataset, &selection)?;

    let airline = match airline {
        Some(name) if records.contains_airline(name) => name.to_string(),
        Some(name) => {
            return Err(FlightRiskError::Validation(format!(
                "Airline '{}' not found in column '{}'",
                name, selection.airline
            )));
        }
        None => records
            .airlines()
            .first()
            .map(|a| a.to_string())
            .ok_or_else(|| {
                FlightRiskError::Validation(format!("Column '{}' has no airline values", selection.airline))
            })?,
    };

    info!(
        airline_column = %selection.airline,
        delay_column = %selection.delay,
        passenger_column = selection.passengers.as_deref().unwrap_or("none"),
        airline = %airline,
        records = records.len(),
        "Analysis prepared"
    );

    Ok(PreparedAnalysis {
        dataset,
        catalog,
        selection,
        records,
        airline,
    })
}

impl PreparedAnalysis {
    pub fn selected(&self, rates: &RateParameters) -> AirlineRisk {
        summarize_airline(&self.records, &self.airline, rates)
    }

    pub fn comparison(&self, rates: &RateParameters) -> Vec<AirlineRisk> {
        summarize_by_airline(&self.records, rates)
    }

    /// Fit and predict, keeping a failure as an outcome instead of an error.
    pub fn predict(&self, rates: &RateParameters) -> PredictionOutcome {
        match predict_risk(&self.records, &self.airline, rates) {
            Ok(prediction) => PredictionOutcome::Predicted(prediction),
            Err(e) => {
                warn!(airline = %self.airline, error = %e, "Risk prediction failed");
                PredictionOutcome::Failed {
                    airline: self.airline.clone(),
                    error: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{default_keywords, parse_delimited};

    const CSV: &[u8] = b"Airline,DelayMinutes,Passengers\nAA,60,100\nDL,30,150\nAA,0,90\n";

    fn prepared(airline: Option<&str>) -> Result<PreparedAnalysis, FlightRiskError> {
        let dataset = parse_delimited(CSV, b',').unwrap();
        prepare(dataset, &default_keywords(), &ColumnsConfig::default(), airline)
    }

    #[test]
    fn test_defaults_pick_first_airline() {
        let analysis = prepared(None).unwrap();
        assert_eq!(analysis.airline, "AA");
        assert_eq!(analysis.selection.delay, "DelayMinutes");
        assert_eq!(analysis.catalog.numeric, vec!["DelayMinutes", "Passengers"]);
    }

    #[test]
    fn test_unknown_airline_rejected() {
        let err = prepared(Some("ZZ")).unwrap_err();
        assert!(matches!(err, FlightRiskError::Validation(_)));
    }

    #[test]
    fn test_selected_and_comparison_agree() {
        let analysis = prepared(Some("DL")).unwrap();
        let rates = RateParameters::default();
        let selected = analysis.selected(&rates);
        let comparison = analysis.comparison(&rates);
        assert_eq!(comparison.len(), 2);
        let dl = comparison.iter().find(|r| r.airline == "DL").unwrap();
        assert_eq!(dl, &selected);
    }

    #[test]
    fn test_prediction_failure_is_outcome() {
        let dataset = parse_delimited(b"Airline,Delay\nAA,10\n", b',').unwrap();
        let analysis = prepare(dataset, &default_keywords(), &ColumnsConfig::default(), None).unwrap();
        let outcome = analysis.predict(&RateParameters::default());
        assert!(matches!(outcome, PredictionOutcome::Failed { .. }));
    }
}
