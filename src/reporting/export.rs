use std::path::Path;

use tracing::info;

use crate::errors::FlightRiskError;
use crate::models::{
    AirlineRisk, ColumnSelection, ComparisonRow, PredictionOutcome, RateParameters, RiskReport,
};

pub const REPORT_FILE_NAME: &str = "airline_risk_report.csv";

pub const COMPARISON_HEADERS: [&str; 6] = [
    "Airline",
    "Total Delay (min)",
    "Compensation ($)",
    "Operational ($)",
    "Insurance ($)",
    "Total Risk ($)",
];

pub fn comparison_rows(comparison: &[AirlineRisk]) -> Vec<ComparisonRow> {
    comparison.iter().map(ComparisonRow::from).collect()
}

/// Encode the airline comparison as CSV with a header row.
///
/// Floats are written in shortest round-trip form, so parsing the output
/// reproduces the same values.
pub fn write_comparison_csv(comparison: &[AirlineRisk]) -> Result<String, FlightRiskError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if comparison.is_empty() {
        writer.write_record(COMPARISON_HEADERS)?;
    }
    for row in comparison_rows(comparison) {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| FlightRiskError::Internal(format!("Failed to flush report: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| FlightRiskError::Internal(format!("Report is not UTF-8: {}", e)))
}

/// Parse a previously exported comparison report.
pub fn parse_comparison_csv(content: &str) -> Result<Vec<ComparisonRow>, FlightRiskError> {
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let headers = reader.headers()?.clone();
    if headers.iter().ne(COMPARISON_HEADERS.iter().copied()) {
        return Err(FlightRiskError::Read(format!(
            "Unexpected report header: {}",
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }
    reader
        .deserialize::<ComparisonRow>()
        .map(|row| row.map_err(FlightRiskError::from))
        .collect()
}

pub async fn write_report_file(path: &Path, comparison: &[AirlineRisk]) -> Result<(), FlightRiskError> {
    let csv = write_comparison_csv(comparison)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, csv).await?;
    info!(path = %path.display(), airlines = comparison.len(), "Risk report written");
    Ok(())
}

pub fn build_report(
    dataset: &str,
    rows: usize,
    columns: &ColumnSelection,
    rates: &RateParameters,
    selected: &AirlineRisk,
    comparison: &[AirlineRisk],
    prediction: Option<PredictionOutcome>,
) -> RiskReport {
    RiskReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        dataset: dataset.to_string(),
        rows,
        columns: columns.clone(),
        rates: *rates,
        selected: selected.clone(),
        comparison: comparison.to_vec(),
        prediction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskSummary;

    fn risk(airline: &str, total_delay: f64) -> AirlineRisk {
        AirlineRisk {
            airline: airline.to_string(),
            summary: RiskSummary {
                total_delay,
                compensation: total_delay / 3.0,
                operational_cost: total_delay * 100.0,
                insurance_cost: total_delay * 100.0 * 0.02,
                total_risk: total_delay / 3.0 + total_delay * 100.0 + total_delay * 2.0,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_header_row() {
        let csv = write_comparison_csv(&[risk("AA", 10.0)]).unwrap();
        let first = csv.lines().next().unwrap();
        assert_eq!(
            first,
            "Airline,Total Delay (min),Compensation ($),Operational ($),Insurance ($),Total Risk ($)"
        );
        assert_eq!(csv.lines().count(), 2);
    }

    #[test]
    fn test_empty_comparison_still_has_header() {
        let csv = write_comparison_csv(&[]).unwrap();
        assert_eq!(csv.trim_end(), COMPARISON_HEADERS.join(","));
        assert!(parse_comparison_csv(&csv).unwrap().is_empty());
    }

    #[test]
    fn test_export_parse_preserves_values() {
        let comparison = vec![risk("AA", 10.0), risk("Delta, Inc.", 37.7), risk("UA", 0.1)];
        let csv = write_comparison_csv(&comparison).unwrap();
        let parsed = parse_comparison_csv(&csv).unwrap();
        assert_eq!(parsed, comparison_rows(&comparison));
    }

    #[test]
    fn test_parse_rejects_foreign_header() {
        let err = parse_comparison_csv("Carrier,Delay\nAA,5\n").unwrap_err();
        assert!(matches!(err, FlightRiskError::Read(_)));
    }
}
