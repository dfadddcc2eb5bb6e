use crate::config::settings::AppConfig;
use crate::infrastructure::fetch::Fetcher;
use crate::infrastructure::ffmpeg::backend::TranscodeBackend;
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub fetcher: Fetcher,
    pub transcoder: Arc<dyn TranscodeBackend>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: AppConfig, fetcher: Fetcher, transcoder: Arc<dyn TranscodeBackend>) -> Self {
        Self {
            config,
            fetcher,
            transcoder,
            started_at: Instant::now(),
        }
    }
}
