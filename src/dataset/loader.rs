use std::collections::HashSet;
use std::path::Path;

use csv::StringRecord;
use tracing::{debug, info};

use super::table::{Column, ColumnData, Dataset};
use crate::errors::FlightRiskError;

pub const DEFAULT_DELIMITER: u8 = b',';

/// Cell values treated as missing, matched after trimming.
///
/// Other text that parses to a non-finite float (`inf`, `-infinity`, `NAN`)
/// is not a number either: it makes its column categorical.
const MISSING_MARKERS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "null", "NULL", "None", "#N/A",
];

const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xls", "xlsm", "ods"];

/// Load a delimited-text dataset from disk.
///
/// The delimiter is picked from the file extension (`.tsv` is tab separated,
/// `.csv` and `.txt` are comma separated) unless `delimiter` overrides it.
pub async fn load_dataset(path: &Path, delimiter: Option<u8>) -> Result<Dataset, FlightRiskError> {
    if !path.exists() {
        return Err(FlightRiskError::Read(format!("File not found: {}", path.display())));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let detected = match extension.as_str() {
        "csv" | "txt" => DEFAULT_DELIMITER,
        "tsv" => b'\t',
        ext if SPREADSHEET_EXTENSIONS.contains(&ext) => {
            return Err(FlightRiskError::Read(format!(
                "Spreadsheet format '.{}' is not supported, export the sheet as CSV",
                ext
            )));
        }
        other => {
            return Err(FlightRiskError::Read(format!(
                "Unrecognized file format '{}' for {}",
                other,
                path.display()
            )));
        }
    };

    let bytes = tokio::fs::read(path).await?;
    let dataset = parse_delimited(&bytes, delimiter.unwrap_or(detected))?;
    info!(
        path = %path.display(),
        rows = dataset.row_count(),
        columns = dataset.columns().len(),
        "Dataset loaded"
    );
    Ok(dataset)
}

/// Convert a user-supplied delimiter character to the byte the reader expects.
pub fn delimiter_byte(delimiter: Option<char>) -> Result<Option<u8>, FlightRiskError> {
    match delimiter {
        None => Ok(None),
        Some(c) if c.is_ascii() => Ok(Some(c as u8)),
        Some(c) => Err(FlightRiskError::Config(format!(
            "Delimiter must be a single ASCII character, got '{}'",
            c
        ))),
    }
}

/// Parse delimited text with a header row into a typed dataset.
///
/// A column is numeric when every non-missing cell parses as a float;
/// anything else is categorical.
pub fn parse_delimited(bytes: &[u8], delimiter: u8) -> Result<Dataset, FlightRiskError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| FlightRiskError::Read(format!("Failed to read header row: {}", e)))?
        .clone();
    let names = normalize_headers(&headers)?;

    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); names.len()];
    for (idx, result) in reader.records().enumerate() {
        // records() starts after the header, lines are 1-based
        let line = idx + 2;
        let record = result.map_err(|e| FlightRiskError::Read(format!("Line {}: {}", line, e)))?;
        for (column, value) in cells.iter_mut().zip(record.iter()) {
            column.push(parse_cell(value));
        }
    }

    let columns = names
        .into_iter()
        .zip(cells)
        .map(|(name, values)| Column {
            data: infer_column(values),
            name,
        })
        .collect::<Vec<_>>();

    for column in &columns {
        debug!(column = %column.name, kind = %column.kind(), "Inferred column type");
    }

    Dataset::new(columns)
}

fn normalize_headers(headers: &StringRecord) -> Result<Vec<String>, FlightRiskError> {
    if headers.is_empty() {
        return Err(FlightRiskError::Read("Dataset has no columns".into()));
    }

    let mut seen = HashSet::new();
    let mut names = Vec::with_capacity(headers.len());
    for (idx, raw) in headers.iter().enumerate() {
        // Spreadsheet exports often prefix the first header with a BOM.
        let name = raw.trim().trim_start_matches('\u{feff}').trim().to_string();
        if name.is_empty() {
            return Err(FlightRiskError::Read(format!("Column {} has an empty header", idx + 1)));
        }
        if !seen.insert(name.clone()) {
            return Err(FlightRiskError::Read(format!("Duplicate column name '{}'", name)));
        }
        names.push(name);
    }
    Ok(names)
}

fn parse_cell(raw: &str) -> Option<String> {
    let value = raw.trim();
    if MISSING_MARKERS.contains(&value) {
        None
    } else {
        Some(value.to_string())
    }
}

fn infer_column(values: Vec<Option<String>>) -> ColumnData {
    let numeric: Option<Vec<Option<f64>>> = values
        .iter()
        .map(|cell| match cell {
            None => Some(None),
            Some(text) => text.parse::<f64>().ok().filter(|v| v.is_finite()).map(Some),
        })
        .collect();

    match numeric {
        Some(parsed) => ColumnData::Numeric(parsed),
        None => ColumnData::Categorical(values),
    }
}
