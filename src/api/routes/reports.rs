use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::IntoResponse,
    Json,
};
use tracing::info;

use crate::api::models::AnalyzeRequest;
use crate::api::routes::analyze::prepare_request;
use crate::api::AppState;
use crate::errors::FlightRiskError;
use crate::reporting::{write_comparison_csv, REPORT_FILE_NAME};

/// Comparison report for the posted dataset as a CSV attachment.
pub async fn export_report(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, FlightRiskError> {
    let Json(request) = payload?;
    let (prepared, rates) = prepare_request(&state, &request)?;
    let comparison = prepared.comparison(&rates);
    let body = write_comparison_csv(&comparison)?;

    info!(airlines = comparison.len(), bytes = body.len(), "Report exported");
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", REPORT_FILE_NAME),
            ),
        ],
        body,
    ))
}
