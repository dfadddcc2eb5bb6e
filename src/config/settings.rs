use crate::config::env::{self, EnvKey};

/// Process-wide configuration, fixed at startup. No hot reload.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_port: u16,
    /// Request body ceiling. Responses are deliberately unbounded since
    /// generated videos can be large.
    pub max_body_bytes: usize,
    /// Per-URL fetch timeout.
    pub download_timeout_secs: u64,
    /// Ceiling for a whole generation job.
    pub job_timeout_secs: u64,
    pub ffmpeg_path: Option<String>,
    pub ffprobe_path: Option<String>,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            max_body_bytes: env::get_parsed(EnvKey::MaxBodyBytes, 50 * 1024 * 1024),
            download_timeout_secs: env::get_parsed(EnvKey::DownloadTimeoutSecs, 60),
            job_timeout_secs: env::get_parsed(EnvKey::JobTimeoutSecs, 300),
            ffmpeg_path: env::get_opt(EnvKey::FfmpegPath),
            ffprobe_path: env::get_opt(EnvKey::FfprobePath),
        }
    }
}
