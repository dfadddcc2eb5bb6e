use super::dto::{DEFAULT_TARGET_DURATION_SECS, GenerateVideoRequest};
use super::error::GenerateError;
use crate::infrastructure::ffmpeg::args::{compose_args, concat_args, concat_manifest};
use crate::infrastructure::workspace::JobScope;
use crate::state::AppState;
use bytes::Bytes;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;
use validator::Validate;

const IMAGE_FILE: &str = "image.jpg";
const CONCAT_LIST_FILE: &str = "concat.txt";
const COMBINED_AUDIO_FILE: &str = "combined_audio.mp3";
const OUTPUT_FILE: &str = "output.mp4";

pub struct GeneratedVideo {
    pub job_id: String,
    pub bytes: Bytes,
    pub duration_secs: f64,
}

pub struct VideoService;

impl VideoService {
    /// Runs one generation job end to end: validate, download inputs,
    /// concatenate the audio, compose the video, read it back. Strictly
    /// sequential; any failing step aborts the job, and the workspace is
    /// released on every path.
    pub async fn generate(
        state: &AppState,
        req: GenerateVideoRequest,
    ) -> Result<GeneratedVideo, GenerateError> {
        // Shape check happens before any scope, network or subprocess work.
        req.validate()
            .map_err(|e| GenerateError::InvalidInput(validation_message(&e)))?;

        let audio_urls = req.audio_urls.unwrap_or_default();
        let image_url = req.image_url.unwrap_or_default();
        let target_duration = req
            .target_duration
            .unwrap_or(DEFAULT_TARGET_DURATION_SECS);

        let job_id = new_job_id();
        info!("🎥 starting job {} ({} audio inputs)", job_id, audio_urls.len());

        let mut scope = JobScope::open(&job_id).await?;
        let result = Self::run_job(state, &scope, &audio_urls, &image_url, target_duration).await;
        scope.release().await;

        let (bytes, duration_secs) = result?;
        Ok(GeneratedVideo {
            job_id,
            bytes,
            duration_secs,
        })
    }

    async fn run_job(
        state: &AppState,
        scope: &JobScope,
        audio_urls: &[String],
        image_url: &str,
        target_duration: f64,
    ) -> Result<(Bytes, f64), GenerateError> {
        info!("⬇️ downloading image");
        let image = state.fetcher.download(image_url).await?;
        let image_path = scope.write(IMAGE_FILE, &image).await?;

        // Download order is input order, which is also concat order.
        let mut audio_paths: Vec<PathBuf> = Vec::with_capacity(audio_urls.len());
        for (i, url) in audio_urls.iter().enumerate() {
            info!("⬇️ downloading audio {}/{}", i + 1, audio_urls.len());
            let audio = state.fetcher.download(url).await?;
            let path = scope.write(&format!("audio_{i}.mp3"), &audio).await?;
            audio_paths.push(path);
        }

        let combined_path = if audio_paths.len() == 1 {
            // single input needs no concat pass
            audio_paths.into_iter().next().unwrap_or_default()
        } else {
            let manifest = concat_manifest(&audio_paths);
            let list_path = scope.write(CONCAT_LIST_FILE, manifest.as_bytes()).await?;
            let combined_path = scope.path(COMBINED_AUDIO_FILE);
            info!("concatenating {} audio files", audio_paths.len());
            state
                .transcoder
                .run(&concat_args(&list_path, &combined_path))
                .await?;
            combined_path
        };

        let measured = state.transcoder.media_duration(&combined_path).await?;
        let duration = target_duration.max(measured);
        info!(
            "resolved duration {:.1}s (requested {:.1}s, audio {:.1}s)",
            duration, target_duration, measured
        );

        let output_path = scope.path(OUTPUT_FILE);
        info!("composing video");
        state
            .transcoder
            .run(&compose_args(&image_path, &combined_path, duration, &output_path))
            .await?;

        let video = tokio::fs::read(&output_path)
            .await
            .map_err(|_| GenerateError::OutputMissing)?;
        if video.is_empty() {
            return Err(GenerateError::OutputMissing);
        }

        info!("✅ generated {} bytes", video.len());
        Ok((Bytes::from(video), duration))
    }
}

fn validation_message(errors: &validator::ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    // fixed priority so the reported reason is deterministic
    for field in ["audio_urls", "image_url", "target_duration"] {
        if let Some(errs) = field_errors.get(field) {
            if let Some(message) = errs.iter().find_map(|e| e.message.clone()) {
                return message.into_owned();
            }
        }
    }
    "invalid request".to_string()
}

/// Timestamp-derived job token. The random suffix keeps two requests that
/// land on the same millisecond out of each other's workspace.
fn new_job_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let suffix: u16 = rand::random();
    format!("{millis}_{suffix:04x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_ids_are_timestamp_derived_tokens() {
        let id = new_job_id();
        let (millis, suffix) = id.split_once('_').unwrap();
        assert!(millis.parse::<u128>().is_ok());
        assert_eq!(suffix.len(), 4);

        // the random suffix keeps same-millisecond ids apart
        let ids: std::collections::HashSet<String> = (0..16).map(|_| new_job_id()).collect();
        assert!(ids.len() > 1);
    }
}
