use async_trait::async_trait;
use std::path::PathBuf;

/// Content store for synthesized audio artifacts.
///
/// `write` persists the bytes under `name` and returns the public URL the
/// client can fetch the clip from. Collisions overwrite silently, so callers
/// keep names unique across concurrent writes.
#[async_trait]
pub trait AudioStore: Send + Sync {
    async fn write(&self, name: &str, bytes: &[u8]) -> Result<String, String>;
}

/// Filesystem store backing the `/audio` static mount
pub struct FsAudioStore {
    root: PathBuf,
}

impl FsAudioStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl AudioStore for FsAudioStore {
    async fn write(&self, name: &str, bytes: &[u8]) -> Result<String, String> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| format!("Failed to create audio directory: {}", e))?;

        let file_name = format!("{}.mp3", name);
        let path = self.root.join(&file_name);

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;

        tracing::debug!(
            path = %path.display(),
            size = bytes.len(),
            "Audio clip written"
        );

        Ok(format!("/audio/{}", file_name))
    }
}
