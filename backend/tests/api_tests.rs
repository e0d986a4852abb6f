//! HTTP API tests
//!
//! Drives the router end to end with an in-memory text generator:
//! - Landing and health endpoints
//! - Input → analysis → dashboard navigation
//! - Report downloads and session teardown
//! - Contact form validation

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use agrosense_server::{create_app, AppState, Config};

use common::*;

fn app(generator: Arc<ScriptedGenerator>) -> Router {
    create_app(AppState::new(Config::default(), service(generator)))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, HeaderMap, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

fn parse(body: &str) -> Value {
    serde_json::from_str(body).unwrap()
}

fn soil_json() -> Value {
    json!({
        "ph": 6.5,
        "nitrogen": 100,
        "phosphorus": 40,
        "potassium": 150,
        "soilType": "Loamy",
        "location": "Test Valley"
    })
}

#[tokio::test]
async fn test_landing_lists_views() {
    let app = app(ScriptedGenerator::new(Reply::Nothing));
    let (status, _, body) = send(&app, Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    let json = parse(&body);
    assert_eq!(json["name"], "AgroSense");
    let paths: Vec<&str> = json["navigation"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, vec!["/", "/input", "/dashboard", "/contact"]);
}

#[tokio::test]
async fn test_health_check() {
    let app = app(ScriptedGenerator::new(Reply::Nothing));
    let (status, _, body) = send(&app, Method::GET, "/api/v1/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body)["status"], "healthy");
}

#[tokio::test]
async fn test_dashboard_without_result_redirects_to_input() {
    let app = app(ScriptedGenerator::new(Reply::Nothing));
    let (status, headers, _) = send(&app, Method::GET, "/api/v1/dashboard", None).await;

    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(headers[header::LOCATION], "/api/v1/input");
}

#[tokio::test]
async fn test_report_without_result_is_not_found() {
    let app = app(ScriptedGenerator::new(Reply::Nothing));
    let (status, _, body) = send(&app, Method::GET, "/api/v1/report", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(parse(&body)["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_input_form_defaults() {
    let app = app(ScriptedGenerator::new(Reply::Nothing));
    let (status, _, body) = send(&app, Method::GET, "/api/v1/input", None).await;

    assert_eq!(status, StatusCode::OK);
    let json = parse(&body);
    assert_eq!(json["defaults"]["ph"], 6.5);
    assert_eq!(json["defaults"]["soilType"], "Loamy");
    assert_eq!(json["soilTypes"], json!(["Clay", "Sandy", "Loamy", "Red", "Black"]));
    assert_eq!(json["canSubmit"], false);
    assert_eq!(json["phase"]["state"], "idle");
}

#[tokio::test]
async fn test_submit_without_weather_is_rejected() {
    let generator = ScriptedGenerator::new(Reply::Text(maize_payload()));
    let app = app(generator.clone());

    let (status, _, body) = send(
        &app,
        Method::POST,
        "/api/v1/analysis",
        Some(json!({ "soil": soil_json() })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = &parse(&body)["error"];
    assert_eq!(error["message"], "Please fetch weather data first.");
    assert_eq!(error["field"], "weather");
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn test_invalid_soil_form_lists_fields() {
    let app = app(ScriptedGenerator::new(Reply::Text(maize_payload())));
    let mut soil = soil_json();
    soil["ph"] = json!(-1);

    let (status, _, body) = send(
        &app,
        Method::POST,
        "/api/v1/analysis",
        Some(json!({ "soil": soil, "weather": serde_json::to_value(cloudy_weather()).unwrap() })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields = &parse(&body)["error"]["fields"];
    assert_eq!(fields[0]["field"], "ph");
    assert_eq!(fields[0]["message"], "pH must be between 0 and 14");
}

#[tokio::test]
async fn test_full_analysis_flow() {
    let generator = ScriptedGenerator::new(Reply::Text(maize_payload()));
    let app = app(generator.clone());

    // Weather first
    let (status, _, body) = send(&app, Method::POST, "/api/v1/weather/simulate", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse(&body)["isSimulated"], true);

    let (_, _, body) = send(&app, Method::GET, "/api/v1/input", None).await;
    assert_eq!(parse(&body)["canSubmit"], true);

    // Analyze against the weather draft
    let (status, _, body) = send(
        &app,
        Method::POST,
        "/api/v1/analysis",
        Some(json!({ "soil": soil_json() })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let created = parse(&body);
    assert_eq!(created["redirect"], "/dashboard");
    assert_eq!(created["result"]["soilData"]["location"], "Test Valley");
    assert_eq!(created["result"]["recommendations"][0]["crop"], "Maize");

    let (_, _, body) = send(&app, Method::GET, "/api/v1/analysis/status", None).await;
    let phase = parse(&body);
    assert_eq!(phase["state"], "ready");
    assert_eq!(phase["resultId"], created["result"]["id"]);

    // Dashboard
    let (status, _, body) = send(&app, Method::GET, "/api/v1/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    let dashboard = parse(&body);
    assert_eq!(dashboard["topPick"]["crop"], "Maize");
    assert_eq!(dashboard["nutrients"][0]["max"], 200.0);
    assert_eq!(dashboard["result"]["id"], created["result"]["id"]);

    // Downloads
    let (status, headers, body) = send(&app, Method::GET, "/api/v1/report", None).await;
    assert_eq!(status, StatusCode::OK);
    let disposition = headers[header::CONTENT_DISPOSITION].to_str().unwrap();
    assert!(disposition.starts_with("attachment; filename=\"AgroSense_Report_"));
    assert!(disposition.ends_with(".txt\""));
    assert!(body.contains("AgroSense Crop Analysis Report"));
    assert!(body.contains("Powered by AgroSense AI"));

    let (status, headers, body) = send(&app, Method::GET, "/api/v1/report.csv", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/csv"));
    let mut lines = body.lines();
    assert!(lines.next().unwrap().starts_with("Rank,Crop"));
    assert!(lines.next().unwrap().starts_with("1,Maize,82"));

    // Leaving the session clears everything
    let (status, _, _) = send(&app, Method::DELETE, "/api/v1/session", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _, _) = send(&app, Method::GET, "/api/v1/dashboard", None).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    let (status, _, _) = send(&app, Method::GET, "/api/v1/weather", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert_eq!(generator.calls(), 1);
}

#[tokio::test]
async fn test_service_failure_shows_generic_message() {
    let app = app(ScriptedGenerator::new(Reply::Status(500)));

    let (status, _, body) = send(
        &app,
        Method::POST,
        "/api/v1/analysis",
        Some(json!({
            "soil": soil_json(),
            "weather": serde_json::to_value(cloudy_weather()).unwrap()
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let error = &parse(&body)["error"];
    assert_eq!(error["code"], "RECOMMENDATION_FAILED");
    assert_eq!(
        error["message"],
        "Failed to generate recommendations. Please check your inputs and try again."
    );

    let (_, _, body) = send(&app, Method::GET, "/api/v1/analysis/status", None).await;
    assert_eq!(parse(&body)["state"], "failed");
    let (status, _, _) = send(&app, Method::GET, "/api/v1/dashboard", None).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_contact_form() {
    let app = app(ScriptedGenerator::new(Reply::Nothing));

    let (status, _, body) = send(
        &app,
        Method::POST,
        "/api/v1/contact",
        Some(json!({ "name": "Ada", "email": "ada@farm.example", "message": "Hello" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(parse(&body)["id"].is_string());

    let (status, _, body) = send(
        &app,
        Method::POST,
        "/api/v1/contact",
        Some(json!({ "name": "Ada", "email": "not-an-email", "message": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields: Vec<String> = parse(&body)["error"]["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(fields, vec!["email", "message"]);
}
