use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Per-job scratch directory under the system temp dir. Every intermediate
/// artifact of a job lives here and nowhere else, so releasing the scope
/// removes everything the job produced.
///
/// `release` must run on every exit path. The `Drop` impl covers the paths
/// that cannot reach it (panic, request timeout dropping the future).
pub struct JobScope {
    root: PathBuf,
    released: bool,
}

impl JobScope {
    pub async fn open(job_id: &str) -> std::io::Result<Self> {
        let root = std::env::temp_dir().join(format!("stillcast_{job_id}"));
        tokio::fs::create_dir_all(&root).await?;
        debug!("opened workspace {}", root.display());
        Ok(Self {
            root,
            released: false,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub async fn write(&self, name: &str, bytes: &[u8]) -> std::io::Result<PathBuf> {
        let path = self.path(name);
        tokio::fs::write(&path, bytes).await?;
        Ok(path)
    }

    /// Removes the workspace and all artifacts in it. Idempotent. A removal
    /// failure is logged and swallowed so it never masks the job's result.
    pub async fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if let Err(e) = tokio::fs::remove_dir_all(&self.root).await {
            warn!("failed to clean up workspace {}: {}", self.root.display(), e);
        } else {
            debug!("released workspace {}", self.root.display());
        }
    }
}

impl Drop for JobScope {
    fn drop(&mut self) {
        if !self.released {
            let _ = std::fs::remove_dir_all(&self.root);
        }
    }
}
