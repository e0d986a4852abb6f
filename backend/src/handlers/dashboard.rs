//! HTTP handlers for the dashboard and report export

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use chrono::Utc;

use crate::error::{AppError, AppResult};
use crate::services::dashboard::build_dashboard;
use crate::services::ReportingService;
use crate::AppState;

/// Where the dashboard sends users who have no result yet
pub const INPUT_ROUTE: &str = "/api/v1/input";

/// Dashboard for the current result, or a redirect to the input view
pub async fn get_dashboard(State(state): State<AppState>) -> Response {
    match state.session.get().await {
        Some(result) => Json(build_dashboard(result)).into_response(),
        None => Redirect::to(INPUT_ROUTE).into_response(),
    }
}

/// Download the text report
pub async fn download_report(State(state): State<AppState>) -> AppResult<Response> {
    let result = state
        .session
        .get()
        .await
        .ok_or_else(|| AppError::NotFound("Analysis result".to_string()))?;

    let service = ReportingService::new(state.config.report.lines_per_page);
    let report = service.text_report(&result, Utc::now());

    Ok(attachment(
        "text/plain; charset=utf-8",
        &report.file_name,
        report.to_text(),
    ))
}

/// Download the recommendation table as CSV
pub async fn download_csv(State(state): State<AppState>) -> AppResult<Response> {
    let result = state
        .session
        .get()
        .await
        .ok_or_else(|| AppError::NotFound("Analysis result".to_string()))?;

    let service = ReportingService::new(state.config.report.lines_per_page);
    let export = service.csv_report(&result, Utc::now())?;

    Ok(attachment("text/csv; charset=utf-8", &export.file_name, export.body))
}

fn attachment(content_type: &str, file_name: &str, body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        body,
    )
        .into_response()
}
