use serde::{Deserialize, Serialize};
use tracing::warn;

use super::table::{ColumnKind, Dataset};
use crate::errors::FlightRiskError;

/// Column-name fragments that mark a dataset as aviation data.
pub const DEFAULT_KEYWORDS: &[&str] = &["airline", "flight", "carrier", "delay", "dep", "arr", "minutes"];

/// Column names split by inferred type, in dataset order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnCatalog {
    pub categorical: Vec<String>,
    pub numeric: Vec<String>,
}

/// Reject datasets that do not look like aviation data or lack the column
/// types the analysis needs.
///
/// Column names are lower-cased and concatenated without a separator before
/// the keyword search, so a keyword may match across two adjacent names.
pub fn validate_dataset(dataset: &Dataset, keywords: &[String]) -> Result<ColumnCatalog, FlightRiskError> {
    let joined: String = dataset
        .column_names()
        .iter()
        .map(|name| name.to_lowercase())
        .collect();

    let relevant = keywords
        .iter()
        .map(|k| k.to_lowercase())
        .any(|keyword| !keyword.is_empty() && joined.contains(&keyword));
    if !relevant {
        warn!(columns = ?dataset.column_names(), "Dataset rejected by relevance check");
        return Err(FlightRiskError::Validation(
            "This dataset does not look like an aviation dataset. Please upload aviation data.".into(),
        ));
    }

    let catalog = ColumnCatalog {
        categorical: owned(dataset.columns_of_kind(ColumnKind::Categorical)),
        numeric: owned(dataset.columns_of_kind(ColumnKind::Numeric)),
    };
    if catalog.categorical.is_empty() || catalog.numeric.is_empty() {
        return Err(FlightRiskError::Validation(
            "No valid columns found. The dataset needs at least one text and one numeric column.".into(),
        ));
    }

    Ok(catalog)
}

pub fn default_keywords() -> Vec<String> {
    owned(DEFAULT_KEYWORDS.to_vec())
}

fn owned(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(str::to_string).collect()
}
