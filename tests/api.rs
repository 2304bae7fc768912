use axum::body::Body;
use axum::http::{header, StatusCode};
use flightrisk::api::{build_router, create_app_state, AppState};
use flightrisk::config::{FlightRiskConfig, ServerConfig};
use flightrisk::reporting::parse_comparison_csv;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

const DATASET: &str = "Airline,DelayMinutes,Passengers\nA,60,100\nB,30,50\nB,90,80\n";

fn create_test_state() -> AppState {
    create_app_state(FlightRiskConfig::default())
}

fn app(state: &AppState) -> axum::Router {
    build_router(state.clone())
}

fn make_request(method: &str, uri: &str, body: Option<Value>) -> axum::http::Request<Body> {
    let builder = axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    match body {
        Some(b) => builder.body(Body::from(serde_json::to_string(&b).unwrap())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn response_bytes(response: axum::http::Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

async fn response_json(response: axum::http::Response<Body>) -> Value {
    let bytes = response_bytes(response).await;
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("JSON parse error: {}. Body: {:?}", e, String::from_utf8_lossy(&bytes)))
}

fn close(actual: &Value, expected: f64) -> bool {
    (actual.as_f64().unwrap() - expected).abs() < 1e-9
}

#[tokio::test]
async fn test_health_endpoint() {
    let state = create_test_state();
    let req = make_request("GET", "/api/health", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "flightrisk");
}

#[tokio::test]
async fn test_analyze_selected_airline() {
    let state = create_test_state();
    let req = make_request("POST", "/api/analyze", Some(json!({"dataset": DATASET, "airline": "A"})));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["rows"], 3);
    assert_eq!(body["columns"]["airline"], "Airline");
    assert_eq!(body["columns"]["delay"], "DelayMinutes");

    let selected = &body["selected"];
    assert_eq!(selected["airline"], "A");
    assert!(close(&selected["compensation"], 5000.0));
    assert!(close(&selected["operational_cost"], 6000.0));
    assert!(close(&selected["insurance_cost"], 120.0));
    assert!(close(&selected["total_risk"], 11120.0));

    let comparison = body["comparison"].as_array().unwrap();
    assert_eq!(comparison.len(), 2);
    assert_eq!(comparison[0]["airline"], "A");
    assert_eq!(comparison[1]["airline"], "B");
    assert!(close(&comparison[1]["total_delay"], 120.0));
    assert!(body.get("prediction").is_none());
}

#[tokio::test]
async fn test_analyze_with_passenger_column_and_rates() {
    let state = create_test_state();
    let req = make_request(
        "POST",
        "/api/analyze",
        Some(json!({
            "dataset": DATASET,
            "airline": "B",
            "columns": {"passengers": "Passengers"},
            "rates": {"compensation_rate": 10.0, "operational_cost_rate": 1.0, "insurance_multiplier": 0.0}
        })),
    );
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let selected = &body["selected"];
    // 120 minutes, 130 passengers: (120 / 60) * 130 * 10
    assert!(close(&selected["compensation"], 2600.0));
    assert!(close(&selected["operational_cost"], 120.0));
    assert!(close(&selected["insurance_cost"], 0.0));
    assert!(close(&selected["total_risk"], 2720.0));
}

#[tokio::test]
async fn test_analyze_prediction() {
    let state = create_test_state();
    let req = make_request(
        "POST",
        "/api/analyze",
        Some(json!({"dataset": DATASET, "airline": "B", "predict": true})),
    );
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let prediction = &body["prediction"];
    assert_eq!(prediction["status"], "predicted");
    assert_eq!(prediction["airline"], "B");
    assert!(close(&prediction["average_delay"], 60.0));
    assert_eq!(prediction["training_rows"], 3);
}

#[tokio::test]
async fn test_prediction_failure_keeps_analysis() {
    let state = create_test_state();
    let req = make_request(
        "POST",
        "/api/analyze",
        Some(json!({"dataset": "Airline,Delay\nA,15\n", "predict": true})),
    );
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["prediction"]["status"], "failed");
    assert!(body["prediction"]["error"].as_str().unwrap().starts_with("Analysis error"));
    assert!(close(&body["selected"]["total_delay"], 15.0));
}

#[tokio::test]
async fn test_irrelevant_dataset_rejected() {
    let state = create_test_state();
    let req = make_request(
        "POST",
        "/api/analyze",
        Some(json!({"dataset": "Name,Score\nalice,3\nbob,4\n"})),
    );
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = response_json(response).await;
    assert_eq!(body["type"], "ValidationError");
    assert!(body["error"].as_str().unwrap().starts_with("Invalid dataset"));
}

#[tokio::test]
async fn test_malformed_dataset_rejected() {
    let state = create_test_state();
    let req = make_request(
        "POST",
        "/api/analyze",
        Some(json!({"dataset": "Airline,Delay\nA,10\nB,20,30\n"})),
    );
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["type"], "ReadError");
    assert!(body["error"].as_str().unwrap().contains("Line 3"));
}

#[tokio::test]
async fn test_unknown_airline_rejected() {
    let state = create_test_state();
    let req = make_request("POST", "/api/analyze", Some(json!({"dataset": DATASET, "airline": "ZZ"})));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_invalid_rates_rejected() {
    let state = create_test_state();
    let req = make_request(
        "POST",
        "/api/analyze",
        Some(json!({
            "dataset": DATASET,
            "rates": {"compensation_rate": 50.0, "operational_cost_rate": 100.0, "insurance_multiplier": 1.5}
        })),
    );
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["type"], "ConfigError");
}

#[tokio::test]
async fn test_server_survives_failed_request() {
    let state = create_test_state();
    let bad = make_request("POST", "/api/analyze", Some(json!({"dataset": ""})));
    let response = app(&state).oneshot(bad).await.unwrap();
    assert!(response.status().is_client_error());

    let good = make_request("POST", "/api/analyze", Some(json!({"dataset": DATASET})));
    let response = app(&state).oneshot(good).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_report_download() {
    let state = create_test_state();
    let req = make_request("POST", "/api/report", Some(json!({"dataset": DATASET})));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");
    let disposition = response.headers()[header::CONTENT_DISPOSITION].to_str().unwrap().to_string();
    assert!(disposition.contains("airline_risk_report.csv"));

    let body = String::from_utf8(response_bytes(response).await).unwrap();
    let rows = parse_comparison_csv(&body).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].airline, "A");
    assert!((rows[0].total_risk - 11120.0).abs() < 1e-9);
    assert!((rows[1].total_delay - 120.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_partial_rates_fall_back_to_defaults() {
    let state = create_test_state();
    let req = make_request(
        "POST",
        "/api/analyze",
        Some(json!({"dataset": DATASET, "airline": "A", "rates": {"compensation_rate": 70.0}})),
    );
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert!(close(&body["rates"]["compensation_rate"], 70.0));
    assert!(close(&body["rates"]["operational_cost_rate"], 100.0));
    assert!(close(&body["rates"]["insurance_multiplier"], 0.02));
    // (60 / 60) * 100 * 70
    assert!(close(&body["selected"]["compensation"], 7000.0));
    assert!(close(&body["selected"]["total_risk"], 13120.0));
}

#[tokio::test]
async fn test_wrongly_typed_body_is_json_error() {
    let state = create_test_state();
    let req = make_request("POST", "/api/analyze", Some(json!({"dataset": 5})));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = response_json(response).await;
    assert_eq!(body["type"], "ValidationError");
    assert!(body["error"].as_str().unwrap().contains("dataset"));
}

#[tokio::test]
async fn test_non_json_body_is_json_error() {
    let state = create_test_state();
    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/api/report")
        .header("content-type", "application/json")
        .body(Body::from("Airline,Delay\nA,10\n"))
        .unwrap();
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["type"], "ReadError");
}

#[tokio::test]
async fn test_dataset_larger_than_two_megabytes() {
    let state = create_test_state();
    let rows = 400_000;
    let mut dataset = String::from("Airline,Delay\n");
    for i in 0..rows {
        dataset.push_str(if i % 2 == 0 { "AA,12\n" } else { "DL,30\n" });
    }
    assert!(dataset.len() > 2 * 1024 * 1024);

    let req = make_request("POST", "/api/analyze", Some(json!({"dataset": dataset})));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["rows"], rows);
    assert_eq!(body["comparison"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_body_limit_from_config() {
    let config = FlightRiskConfig {
        server: Some(ServerConfig {
            max_body_bytes: Some(1024),
            ..Default::default()
        }),
        ..Default::default()
    };
    let state = create_app_state(config);
    let dataset = format!("Airline,Delay\n{}", "AA,12\n".repeat(1000));

    let req = make_request("POST", "/api/analyze", Some(json!({"dataset": dataset})));
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["type"], "ReadError");
}
