use super::dto::GenerateVideoRequest;
use super::error::GenerateError;
use super::service::VideoService;
use crate::common::response::{ApiError, ErrorResponse, GenerationFailure};
use crate::state::AppState;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderName, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::time::{Duration, Instant};
use tracing::{error, info};

#[utoipa::path(
    post,
    path = "/generate",
    request_body = GenerateVideoRequest,
    responses(
        (status = 200, description = "Generated MP4 video", body = Vec<u8>, content_type = "video/mp4"),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 500, description = "Generation failed", body = GenerationFailure)
    ),
    tag = "Video"
)]
pub async fn generate_video(
    State(state): State<AppState>,
    payload: Result<Json<GenerateVideoRequest>, JsonRejection>,
) -> Response {
    let started = Instant::now();

    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            // oversized / wrong-media-type rejections keep their status,
            // everything else about a bad body is a plain 400
            let status = match rejection.status() {
                s if s == StatusCode::PAYLOAD_TOO_LARGE => s,
                s if s == StatusCode::UNSUPPORTED_MEDIA_TYPE => s,
                _ => StatusCode::BAD_REQUEST,
            };
            return ApiError(rejection.body_text(), status).into_response();
        }
    };

    let budget = Duration::from_secs(state.config.job_timeout_secs);
    match tokio::time::timeout(budget, VideoService::generate(&state, req)).await {
        Ok(Ok(video)) => {
            let elapsed = started.elapsed().as_secs_f64();
            info!(
                "✅ job {} done in {:.2}s ({} bytes)",
                video.job_id,
                elapsed,
                video.bytes.len()
            );
            (
                [
                    (header::CONTENT_TYPE, "video/mp4".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"video_{}.mp4\"", video.job_id),
                    ),
                    (
                        HeaderName::from_static("x-processing-time"),
                        format!("{elapsed:.3}"),
                    ),
                    (
                        HeaderName::from_static("x-video-duration"),
                        video.duration_secs.to_string(),
                    ),
                ],
                video.bytes,
            )
                .into_response()
        }
        Ok(Err(GenerateError::InvalidInput(reason))) => {
            ApiError(reason, StatusCode::BAD_REQUEST).into_response()
        }
        Ok(Err(e)) => {
            error!("❌ video generation failed: {e}");
            GenerationFailure::new(e.to_string(), started.elapsed()).into_response()
        }
        Err(_) => {
            // job future was dropped; its workspace guard cleans up behind it
            error!(
                "❌ video generation exceeded the {}s budget",
                state.config.job_timeout_secs
            );
            GenerationFailure::new(
                format!(
                    "generation exceeded the {}s execution budget",
                    state.config.job_timeout_secs
                ),
                started.elapsed(),
            )
            .into_response()
        }
    }
}
