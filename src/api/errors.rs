use axum::{extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::warn;
use crate::errors::FlightRiskError;

impl IntoResponse for FlightRiskError {
    fn into_response(self) -> axum::response::Response {
        let class = self.classify();
        let status = match class.error_type {
            "ConfigError" | "ReadError" => StatusCode::BAD_REQUEST,
            "ValidationError" | "ComputationError" => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        warn!(error_type = class.error_type, status = status.as_u16(), error = %self, "Request failed");

        (status, Json(json!({"error": self.to_string(), "type": class.error_type}))).into_response()
    }
}

/// Bodies that are not JSON, or exceed the size limit, are unreadable input.
/// Well-formed JSON of the wrong shape is a validation failure.
impl From<JsonRejection> for FlightRiskError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => {
                FlightRiskError::Validation(format!("Request body: {}", e.body_text()))
            }
            other => FlightRiskError::Read(format!("Request body: {}", other.body_text())),
        }
    }
}
