use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::info;

use crate::analysis::{self, PreparedAnalysis};
use crate::api::models::{AnalyzeRequest, AnalyzeResponse};
use crate::api::AppState;
use crate::config::ColumnsConfig;
use crate::dataset::{delimiter_byte, parse_delimited, DEFAULT_DELIMITER};
use crate::errors::FlightRiskError;
use crate::models::RateParameters;

/// Parse the request body's dataset and resolve it against the server defaults.
///
/// Request fields win over the loaded config field by field.
pub(crate) fn prepare_request(
    state: &AppState,
    request: &AnalyzeRequest,
) -> Result<(PreparedAnalysis, RateParameters), FlightRiskError> {
    let rates = resolve_rates(state, request);
    rates.validate()?;

    let delimiter = delimiter_byte(request.delimiter)?.unwrap_or(DEFAULT_DELIMITER);
    let dataset = parse_delimited(request.dataset.as_bytes(), delimiter)?;

    let defaults = state.config.columns();
    let requested = request.columns.clone().unwrap_or_default();
    let columns = ColumnsConfig {
        airline: requested.airline.or(defaults.airline),
        delay: requested.delay.or(defaults.delay),
        passengers: requested.passengers.or(defaults.passengers),
    };

    let prepared = analysis::prepare(
        dataset,
        &state.config.keywords(),
        &columns,
        request.airline.as_deref(),
    )?;
    Ok((prepared, rates))
}

fn resolve_rates(state: &AppState, request: &AnalyzeRequest) -> RateParameters {
    let defaults = state.config.rates();
    let Some(requested) = &request.rates else {
        return defaults;
    };
    RateParameters {
        compensation_rate: requested.compensation_rate.unwrap_or(defaults.compensation_rate),
        operational_cost_rate: requested
            .operational_cost_rate
            .unwrap_or(defaults.operational_cost_rate),
        insurance_multiplier: requested
            .insurance_multiplier
            .unwrap_or(defaults.insurance_multiplier),
    }
}

pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, FlightRiskError> {
    let Json(request) = payload?;
    let (prepared, rates) = prepare_request(&state, &request)?;

    let prediction = request.predict.then(|| prepared.predict(&rates));
    let response = AnalyzeResponse {
        rows: prepared.dataset.row_count(),
        catalog: prepared.catalog.clone(),
        columns: prepared.selection.clone(),
        rates,
        selected: prepared.selected(&rates),
        comparison: prepared.comparison(&rates),
        prediction,
    };

    info!(
        airline = %prepared.airline,
        rows = response.rows,
        airlines = response.comparison.len(),
        "Analysis served"
    );
    Ok(Json(response))
}
