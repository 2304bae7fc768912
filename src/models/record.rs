use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::dataset::{ColumnCatalog, Dataset};
use crate::errors::FlightRiskError;

/// Which dataset columns feed the analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSelection {
    pub airline: String,
    pub delay: String,
    #[serde(default)]
    pub passengers: Option<String>,
}

impl ColumnSelection {
    /// Resolve requested column names against the catalog.
    ///
    /// Unspecified airline and delay columns default to the first
    /// categorical and first numeric column. A passenger column named
    /// `none` (any case) means no passenger column.
    pub fn resolve(
        catalog: &ColumnCatalog,
        airline: Option<&str>,
        delay: Option<&str>,
        passengers: Option<&str>,
    ) -> Result<Self, FlightRiskError> {
        let airline = pick(airline, &catalog.categorical, "Airline/flight", "categorical")?;
        let delay = pick(delay, &catalog.numeric, "Delay", "numeric")?;
        let passengers = match passengers {
            None => None,
            Some(name) if name.eq_ignore_ascii_case("none") => None,
            Some(name) => Some(pick(Some(name), &catalog.numeric, "Passenger", "numeric")?),
        };
        Ok(Self { airline, delay, passengers })
    }
}

fn pick(
    requested: Option<&str>,
    candidates: &[String],
    role: &str,
    kind: &str,
) -> Result<String, FlightRiskError> {
    match requested {
        Some(name) if candidates.iter().any(|c| c == name) => Ok(name.to_string()),
        Some(name) => Err(FlightRiskError::Validation(format!(
            "{} column '{}' is not one of the {} columns: {}",
            role,
            name,
            kind,
            candidates.join(", ")
        ))),
        None => candidates.first().cloned().ok_or_else(|| {
            FlightRiskError::Validation(format!("No {} column available for {}", kind, role))
        }),
    }
}

/// One flight row reduced to the fields the risk formulas use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub airline: String,
    /// Delay in minutes. Negative values are kept as-is.
    pub delay_minutes: Option<f64>,
    pub passengers: Option<f64>,
}

/// The records of one dataset under a column selection.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightRecords {
    records: Vec<FlightRecord>,
    passenger_data: bool,
}

impl FlightRecords {
    pub fn new(records: Vec<FlightRecord>, passenger_data: bool) -> Self {
        Self { records, passenger_data }
    }

    /// Extract records from a dataset. Rows with no airline value are skipped.
    pub fn from_dataset(dataset: &Dataset, selection: &ColumnSelection) -> Result<Self, FlightRiskError> {
        let airlines = dataset.categorical(&selection.airline)?;
        let delays = dataset.numeric(&selection.delay)?;
        let passengers = match &selection.passengers {
            Some(column) => Some(dataset.numeric(column)?),
            None => None,
        };

        let mut skipped = 0usize;
        let mut records = Vec::with_capacity(dataset.row_count());
        for (row, airline) in airlines.iter().enumerate() {
            let Some(airline) = airline else {
                skipped += 1;
                continue;
            };
            records.push(FlightRecord {
                airline: airline.clone(),
                delay_minutes: delays[row],
                passengers: passengers.and_then(|p| p[row]),
            });
        }

        if skipped > 0 {
            warn!(skipped, column = %selection.airline, "Skipped rows without an airline value");
        }

        Ok(Self::new(records, passengers.is_some()))
    }

    pub fn records(&self) -> &[FlightRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether a passenger column was selected.
    pub fn has_passenger_data(&self) -> bool {
        self.passenger_data
    }

    /// Distinct airlines in first-seen order.
    pub fn airlines(&self) -> Vec<&str> {
        self.grouped().into_iter().map(|(airline, _)| airline).collect()
    }

    /// Records grouped by airline in one pass, groups in first-seen order.
    pub fn grouped(&self) -> Vec<(&str, Vec<&FlightRecord>)> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut groups: Vec<(&str, Vec<&FlightRecord>)> = Vec::new();
        for record in &self.records {
            let slot = *index.entry(record.airline.as_str()).or_insert_with(|| {
                groups.push((record.airline.as_str(), Vec::new()));
                groups.len() - 1
            });
            groups[slot].1.push(record);
        }
        groups
    }

    pub fn for_airline<'a>(&'a self, airline: &'a str) -> impl Iterator<Item = &'a FlightRecord> + 'a {
        self.records.iter().filter(move |r| r.airline == airline)
    }

    pub fn contains_airline(&self, airline: &str) -> bool {
        self.records.iter().any(|r| r.airline == airline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{default_keywords, parse_delimited, validate_dataset};

    fn dataset() -> Dataset {
        parse_delimited(
            b"Airline,Flight,DelayMinutes,Passengers\nAA,AA1,10,100\nDL,DL7,20,\n,XX0,5,50\nAA,AA2,,80\n",
            b',',
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_defaults_to_first_columns() {
        let catalog = validate_dataset(&dataset(), &default_keywords()).unwrap();
        let selection = ColumnSelection::resolve(&catalog, None, None, None).unwrap();
        assert_eq!(selection.airline, "Airline");
        assert_eq!(selection.delay, "DelayMinutes");
        assert_eq!(selection.passengers, None);
    }

    #[test]
    fn test_resolve_rejects_wrong_kind() {
        let catalog = validate_dataset(&dataset(), &default_keywords()).unwrap();
        let err = ColumnSelection::resolve(&catalog, Some("DelayMinutes"), None, None).unwrap_err();
        assert!(matches!(err, FlightRiskError::Validation(_)));
        let err = ColumnSelection::resolve(&catalog, None, Some("Flight"), None).unwrap_err();
        assert!(err.to_string().contains("Flight"));
    }

    #[test]
    fn test_resolve_passenger_none_literal() {
        let catalog = validate_dataset(&dataset(), &default_keywords()).unwrap();
        let selection = ColumnSelection::resolve(&catalog, None, None, Some("None")).unwrap();
        assert_eq!(selection.passengers, None);
        let selection = ColumnSelection::resolve(&catalog, None, None, Some("Passengers")).unwrap();
        assert_eq!(selection.passengers.as_deref(), Some("Passengers"));
    }

    #[test]
    fn test_from_dataset_skips_missing_airline() {
        let selection = ColumnSelection {
            airline: "Airline".into(),
            delay: "DelayMinutes".into(),
            passengers: Some("Passengers".into()),
        };
        let records = FlightRecords::from_dataset(&dataset(), &selection).unwrap();
        assert_eq!(records.len(), 3);
        assert!(records.has_passenger_data());
        assert_eq!(records.airlines(), vec!["AA", "DL"]);
        assert_eq!(records.records()[1].passengers, None);
        assert_eq!(records.records()[2].delay_minutes, None);
        assert_eq!(records.for_airline("AA").count(), 2);
    }

    #[test]
    fn test_flight_column_as_airline() {
        let selection = ColumnSelection {
            airline: "Flight".into(),
            delay: "DelayMinutes".into(),
            passengers: None,
        };
        let records = FlightRecords::from_dataset(&dataset(), &selection).unwrap();
        assert_eq!(records.len(), 4);
        assert!(!records.has_passenger_data());
        assert!(records.contains_airline("XX0"));
    }

    #[test]
    fn test_grouped_keeps_first_seen_order() {
        let records = FlightRecords::new(
            ["DL", "AA", "DL", "UA", "AA", "DL"]
                .iter()
                .enumerate()
                .map(|(i, airline)| FlightRecord {
                    airline: airline.to_string(),
                    delay_minutes: Some(i as f64),
                    passengers: None,
                })
                .collect(),
            false,
        );
        let groups = records.grouped();
        let names: Vec<&str> = groups.iter().map(|(airline, _)| *airline).collect();
        assert_eq!(names, vec!["DL", "AA", "UA"]);
        assert_eq!(records.airlines(), names);

        let dl: Vec<Option<f64>> = groups[0].1.iter().map(|r| r.delay_minutes).collect();
        assert_eq!(dl, vec![Some(0.0), Some(2.0), Some(5.0)]);
        assert_eq!(groups[2].1.len(), 1);
    }

    #[test]
    fn test_grouped_with_one_airline_per_row() {
        let records = FlightRecords::new(
            (0..5000)
                .map(|i| FlightRecord {
                    airline: format!("FL{}", i),
                    delay_minutes: Some(1.0),
                    passengers: None,
                })
                .collect(),
            false,
        );
        let groups = records.grouped();
        assert_eq!(groups.len(), 5000);
        assert_eq!(groups[4999].0, "FL4999");
        assert!(groups.iter().all(|(_, rows)| rows.len() == 1));
    }
}
