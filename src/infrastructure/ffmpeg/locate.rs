use std::process::Stdio;
use tokio::process::Command;
use tokio::sync::OnceCell;
use tracing::{info, warn};

const FFMPEG_FALLBACKS: &[&str] = &["/usr/bin/ffmpeg", "/usr/local/bin/ffmpeg", "/opt/bin/ffmpeg"];
const FFPROBE_FALLBACKS: &[&str] = &[
    "/usr/bin/ffprobe",
    "/usr/local/bin/ffprobe",
    "/opt/bin/ffprobe",
];

// Tool locations do not change at runtime, so the first probe result is
// kept for the process lifetime. Concurrent first uses converge on one
// probe through the OnceCell.
static FFMPEG: OnceCell<Option<String>> = OnceCell::const_new();
static FFPROBE: OnceCell<Option<String>> = OnceCell::const_new();

/// Resolve the ffmpeg binary: configured path first, then PATH lookup,
/// then the well-known install locations. `None` means not available.
pub async fn ffmpeg(configured: Option<&str>) -> Option<&'static str> {
    FFMPEG
        .get_or_init(|| locate("ffmpeg", configured, FFMPEG_FALLBACKS))
        .await
        .as_deref()
}

pub async fn ffprobe(configured: Option<&str>) -> Option<&'static str> {
    FFPROBE
        .get_or_init(|| locate("ffprobe", configured, FFPROBE_FALLBACKS))
        .await
        .as_deref()
}

async fn locate(tool: &str, configured: Option<&str>, fallbacks: &[&str]) -> Option<String> {
    let mut candidates: Vec<&str> = Vec::with_capacity(fallbacks.len() + 2);
    if let Some(path) = configured {
        candidates.push(path);
    }
    candidates.push(tool);
    candidates.extend_from_slice(fallbacks);

    for candidate in candidates {
        if version_check(candidate).await {
            info!("located {} at {}", tool, candidate);
            return Some(candidate.to_string());
        }
    }

    warn!("{} is not available in this environment", tool);
    None
}

async fn version_check(candidate: &str) -> bool {
    Command::new(candidate)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map(|status| status.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn locate_fails_closed_when_no_candidate_responds() {
        let found = locate(
            "stillcast-no-such-tool",
            None,
            &["/definitely/not/here", "/also/missing"],
        )
        .await;
        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn locate_walks_fallbacks_in_order() {
        // /bin/true exits 0 for any arguments, standing in for a healthy tool
        let found = locate("stillcast-no-such-tool", None, &["/no/such/path", "/bin/true"]).await;
        assert_eq!(found.as_deref(), Some("/bin/true"));
    }

    #[tokio::test]
    async fn configured_path_wins_over_the_search() {
        let found = locate("stillcast-no-such-tool", Some("/bin/true"), &[]).await;
        assert_eq!(found.as_deref(), Some("/bin/true"));
    }
}
