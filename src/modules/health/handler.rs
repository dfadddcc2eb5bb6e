use super::dto::{EndpointMap, EnvironmentInfo, HealthResponse};
use crate::common::response::now_iso8601;
use crate::state::AppState;
use axum::{Json, extract::State, response::IntoResponse};

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service status", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy",
        service: "Stillcast Video API",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: now_iso8601(),
        environment: EnvironmentInfo {
            platform: std::env::consts::OS,
            arch: std::env::consts::ARCH,
            pid: std::process::id(),
            memory_rss_bytes: resident_memory_bytes(),
            uptime_seconds: state.started_at.elapsed().as_secs_f64(),
        },
        features: vec![
            "Native ffmpeg process execution",
            "Multiple audio file concatenation",
            "Static image video composition",
            "Direct MP4 response",
        ],
        endpoints: EndpointMap {
            generate: "/generate",
            health: "/health",
        },
    })
}

#[cfg(target_os = "linux")]
fn resident_memory_bytes() -> Option<u64> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    let line = status.lines().find(|l| l.starts_with("VmRSS:"))?;
    let kib: u64 = line.split_whitespace().nth(1)?.parse().ok()?;
    Some(kib * 1024)
}

#[cfg(not(target_os = "linux"))]
fn resident_memory_bytes() -> Option<u64> {
    None
}
