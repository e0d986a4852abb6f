//! Error handling for the AgroSense server
//!
//! Recommendation failures keep their full cause for the logs but are shown
//! to the user as a single generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::FieldError;
use thiserror::Error;

use crate::external::TransportError;

/// Message shown for every recommendation failure
pub const RECOMMENDATION_FAILED_MESSAGE: &str =
    "Failed to generate recommendations. Please check your inputs and try again.";

/// Failure kinds of a recommendation request
#[derive(Error, Debug)]
pub enum OrchestrationError {
    /// Credential or configuration missing; no request was sent
    #[error("Recommendation service is not configured: {0}")]
    Configuration(String),

    /// Transport, authentication, rate-limit or non-2xx failure
    #[error("Recommendation generation failed")]
    Service(#[source] TransportError),

    /// The service answered without any text
    #[error("No response from AI model")]
    EmptyResponse,

    /// Text came back but does not match the response schema
    #[error("Malformed recommendation response: {0}")]
    MalformedResponse(String),
}

impl OrchestrationError {
    /// Stable code used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            OrchestrationError::Configuration(_) => "configuration",
            OrchestrationError::Service(_) => "service",
            OrchestrationError::EmptyResponse => "empty_response",
            OrchestrationError::MalformedResponse(_) => "malformed_response",
        }
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Validation failed on {} field(s)", .0.len())]
    InvalidForm(Vec<FieldError>),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Session errors
    #[error("An analysis is already in progress")]
    AnalysisInProgress,

    // External service errors
    #[error(transparent)]
    Recommendation(#[from] OrchestrationError),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::InvalidForm(shared::field_errors(&errors))
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

impl ErrorDetail {
    fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            field: None,
            fields: Vec::new(),
        }
    }
}

impl AppError {
    fn status_and_detail(&self) -> (StatusCode, ErrorDetail) {
        match self {
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    field: Some(field.clone()),
                    ..ErrorDetail::new("VALIDATION_ERROR", message.clone())
                },
            ),
            AppError::InvalidForm(fields) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    fields: fields.clone(),
                    ..ErrorDetail::new("VALIDATION_ERROR", "Please correct the highlighted fields")
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail::new("NOT_FOUND", format!("{} not found", resource)),
            ),
            AppError::AnalysisInProgress => (
                StatusCode::CONFLICT,
                ErrorDetail::new(
                    "ANALYSIS_IN_PROGRESS",
                    "An analysis is already running. Please wait for it to finish.",
                ),
            ),
            AppError::Recommendation(_) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail::new("RECOMMENDATION_FAILED", RECOMMENDATION_FAILED_MESSAGE),
            ),
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail::new("INTERNAL_ERROR", "An internal server error occurred"),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = self.status_and_detail();

        // Full detail stays in the logs
        if status.is_server_error() {
            tracing::error!("Error: {:?}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
