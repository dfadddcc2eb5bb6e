use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub environment: EnvironmentInfo,
    pub features: Vec<&'static str>,
    pub endpoints: EndpointMap,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentInfo {
    pub platform: &'static str,
    pub arch: &'static str,
    pub pid: u32,
    /// Resident set size, where the platform exposes it.
    pub memory_rss_bytes: Option<u64>,
    pub uptime_seconds: f64,
}

#[derive(Serialize, ToSchema)]
pub struct EndpointMap {
    pub generate: &'static str,
    pub health: &'static str,
}
