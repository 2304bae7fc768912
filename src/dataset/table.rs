use serde::{Deserialize, Serialize};
use crate::errors::FlightRiskError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Categorical,
    Numeric,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Categorical => "categorical",
            Self::Numeric => "numeric",
        }
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cell storage for one column. `None` marks a missing cell.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Categorical(Vec<Option<String>>),
    Numeric(Vec<Option<f64>>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            Self::Categorical(values) => values.len(),
            Self::Numeric(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    pub fn kind(&self) -> ColumnKind {
        match self.data {
            ColumnData::Categorical(_) => ColumnKind::Categorical,
            ColumnData::Numeric(_) => ColumnKind::Numeric,
        }
    }

    /// Render one cell for display. Missing cells render as an empty string.
    pub fn display_cell(&self, row: usize) -> String {
        match &self.data {
            ColumnData::Categorical(values) => values.get(row).cloned().flatten().unwrap_or_default(),
            ColumnData::Numeric(values) => values
                .get(row)
                .copied()
                .flatten()
                .map(|v| v.to_string())
                .unwrap_or_default(),
        }
    }
}

/// A typed, column-oriented table.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
    rows: usize,
}

impl Dataset {
    pub fn new(columns: Vec<Column>) -> Result<Self, FlightRiskError> {
        let rows = columns.first().map(|c| c.data.len()).unwrap_or(0);
        if let Some(bad) = columns.iter().find(|c| c.data.len() != rows) {
            return Err(FlightRiskError::Internal(format!(
                "Column '{}' has {} rows, expected {}",
                bad.name,
                bad.data.len(),
                rows
            )));
        }
        Ok(Self { columns, rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn columns_of_kind(&self, kind: ColumnKind) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.kind() == kind)
            .map(|c| c.name.as_str())
            .collect()
    }

    pub fn categorical(&self, name: &str) -> Result<&[Option<String>], FlightRiskError> {
        match self.column(name).map(|c| &c.data) {
            Some(ColumnData::Categorical(values)) => Ok(values),
            Some(ColumnData::Numeric(_)) => Err(FlightRiskError::Validation(format!(
                "Column '{}' is numeric, expected a categorical column",
                name
            ))),
            None => Err(FlightRiskError::Validation(format!("Column '{}' not found", name))),
        }
    }

    pub fn numeric(&self, name: &str) -> Result<&[Option<f64>], FlightRiskError> {
        match self.column(name).map(|c| &c.data) {
            Some(ColumnData::Numeric(values)) => Ok(values),
            Some(ColumnData::Categorical(_)) => Err(FlightRiskError::Validation(format!(
                "Column '{}' is not numeric",
                name
            ))),
            None => Err(FlightRiskError::Validation(format!("Column '{}' not found", name))),
        }
    }

    /// The first `n` rows as display strings, one inner vector per row.
    pub fn head(&self, n: usize) -> Vec<Vec<String>> {
        (0..self.rows.min(n))
            .map(|row| self.columns.iter().map(|c| c.display_cell(row)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::new(vec![
            Column {
                name: "Airline".into(),
                data: ColumnData::Categorical(vec![Some("AA".into()), None, Some("DL".into())]),
            },
            Column {
                name: "DelayMinutes".into(),
                data: ColumnData::Numeric(vec![Some(10.0), Some(2.5), None]),
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let result = Dataset::new(vec![
            Column { name: "a".into(), data: ColumnData::Numeric(vec![Some(1.0)]) },
            Column { name: "b".into(), data: ColumnData::Numeric(vec![]) },
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_typed_accessors() {
        let ds = sample();
        assert_eq!(ds.row_count(), 3);
        assert_eq!(ds.numeric("DelayMinutes").unwrap()[1], Some(2.5));
        assert!(ds.numeric("Airline").is_err());
        assert!(ds.categorical("DelayMinutes").is_err());
        assert!(ds.categorical("Missing").is_err());
    }

    #[test]
    fn test_columns_of_kind() {
        let ds = sample();
        assert_eq!(ds.columns_of_kind(ColumnKind::Categorical), vec!["Airline"]);
        assert_eq!(ds.columns_of_kind(ColumnKind::Numeric), vec!["DelayMinutes"]);
    }

    #[test]
    fn test_head_renders_missing_as_empty() {
        let ds = sample();
        let rows = ds.head(2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["AA".to_string(), "10".to_string()]);
        assert_eq!(rows[1], vec![String::new(), "2.5".to_string()]);
        assert_eq!(ds.head(10).len(), 3);
    }

    #[test]
    fn test_column_kind_display() {
        assert_eq!(ColumnKind::Numeric.to_string(), "numeric");
        assert_eq!(ColumnKind::Categorical.to_string(), "categorical");
    }
}
