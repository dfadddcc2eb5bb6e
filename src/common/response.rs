use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::time::Duration;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Plain `{"error": "..."}` body with a status code, used for validation
/// and parse failures.
pub struct ApiError(pub String, pub StatusCode);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError(message, status) = self;
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Structured 500 body for a job that started and then failed downstream.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerationFailure {
    pub error: String,
    pub details: String,
    pub processing_time: f64,
    pub timestamp: String,
}

impl GenerationFailure {
    pub fn new(details: String, elapsed: Duration) -> Self {
        Self {
            error: "Video generation failed".to_string(),
            details,
            processing_time: elapsed.as_secs_f64(),
            timestamp: now_iso8601(),
        }
    }
}

impl IntoResponse for GenerationFailure {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self)).into_response()
    }
}

pub fn now_iso8601() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}
