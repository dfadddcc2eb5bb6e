use super::{args, locate};
use crate::config::settings::AppConfig;
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;
use tracing::debug;

// ffmpeg writes its whole banner plus progress to stderr; on failure only
// the tail carries the actual diagnostic.
const STDERR_TAIL_BYTES: usize = 2048;

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("{0} is not available in this environment")]
    NotAvailable(&'static str),
    #[error("failed to spawn {tool}: {source}")]
    Spawn {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("{tool} exited with status {status}: {stderr}")]
    CommandFailed {
        tool: &'static str,
        status: i32,
        stderr: String,
    },
    #[error("could not parse duration from ffprobe output: {0:?}")]
    UnreadableDuration(String),
}

/// Execution seam for the transcoder. The orchestrator only ever hands an
/// argument vector to `run`, so swapping the execution strategy (or
/// substituting a scripted double in tests) never touches the job logic.
#[async_trait]
pub trait TranscodeBackend: Send + Sync {
    /// Execute one ffmpeg invocation. Non-zero exit is an error carrying
    /// the captured diagnostic output.
    async fn run(&self, args: &[String]) -> Result<(), BackendError>;

    /// Duration of a media file in seconds.
    async fn media_duration(&self, input: &Path) -> Result<f64, BackendError>;
}

/// Native-process backend: spawns the ffmpeg/ffprobe binaries resolved by
/// the environment probe against real paths inside the job workspace.
pub struct ProcessBackend {
    ffmpeg_path: Option<String>,
    ffprobe_path: Option<String>,
}

impl ProcessBackend {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            ffmpeg_path: config.ffmpeg_path.clone(),
            ffprobe_path: config.ffprobe_path.clone(),
        }
    }
}

#[async_trait]
impl TranscodeBackend for ProcessBackend {
    async fn run(&self, args: &[String]) -> Result<(), BackendError> {
        let ffmpeg = locate::ffmpeg(self.ffmpeg_path.as_deref())
            .await
            .ok_or(BackendError::NotAvailable("ffmpeg"))?;

        debug!("running {} {}", ffmpeg, args.join(" "));
        let output = Command::new(ffmpeg)
            .args(args)
            .output()
            .await
            .map_err(|source| BackendError::Spawn {
                tool: "ffmpeg",
                source,
            })?;

        if !output.status.success() {
            return Err(BackendError::CommandFailed {
                tool: "ffmpeg",
                status: output.status.code().unwrap_or(-1),
                stderr: stderr_tail(&output.stderr),
            });
        }
        Ok(())
    }

    async fn media_duration(&self, input: &Path) -> Result<f64, BackendError> {
        let ffprobe = locate::ffprobe(self.ffprobe_path.as_deref())
            .await
            .ok_or(BackendError::NotAvailable("ffprobe"))?;

        let output = Command::new(ffprobe)
            .args(args::probe_duration_args(input))
            .output()
            .await
            .map_err(|source| BackendError::Spawn {
                tool: "ffprobe",
                source,
            })?;

        if !output.status.success() {
            return Err(BackendError::CommandFailed {
                tool: "ffprobe",
                status: output.status.code().unwrap_or(-1),
                stderr: stderr_tail(&output.stderr),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let raw = stdout.trim();
        raw.parse::<f64>()
            .map_err(|_| BackendError::UnreadableDuration(raw.to_string()))
    }
}

fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let trimmed = text.trim();
    match trimmed.char_indices().nth_back(STDERR_TAIL_BYTES) {
        Some((idx, _)) => trimmed[idx..].to_string(),
        None => trimmed.to_string(),
    }
}
