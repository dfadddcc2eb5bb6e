use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

pub const DEFAULT_TARGET_DURATION_SECS: f64 = 120.0;

/// Body of `POST /generate`. Fields are `Option` so that a missing field
/// reaches the validator (and its 400 message) instead of dying in serde.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVideoRequest {
    /// Audio files to concatenate, in timeline order.
    #[validate(
        required(message = "audioUrls must be a non-empty array"),
        length(min = 1, message = "audioUrls must be a non-empty array")
    )]
    pub audio_urls: Option<Vec<String>>,
    /// Still image shown for the whole video.
    #[validate(
        required(message = "imageUrl is required"),
        length(min = 1, message = "imageUrl is required")
    )]
    pub image_url: Option<String>,
    /// Requested video length in seconds. Defaults to 120. The effective
    /// length is never shorter than the combined audio.
    #[validate(range(
        exclusive_min = 0.0,
        message = "targetDuration must be a positive number"
    ))]
    pub target_duration: Option<f64>,
}
