use crate::error::AppError;
use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Path, PathBuf};

/// Longest image reference a post row can hold.
pub const MAX_REFERENCE_LEN: usize = 212;

/// An uploaded file as received from the client.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub bytes: Bytes,
}

#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Stores `bytes` under `filename` and returns the reference to persist.
    /// An existing blob with the same name is overwritten.
    async fn put(&self, filename: &str, bytes: Bytes) -> Result<String, AppError>;
}

/// Writes blobs as plain files under one directory.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    root: PathBuf,
}

impl LocalBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn put(&self, filename: &str, bytes: Bytes) -> Result<String, AppError> {
        let name = sanitize_filename(filename)?;
        let path = self.root.join(name);
        let reference = path.display().to_string();
        if reference.chars().count() > MAX_REFERENCE_LEN {
            return Err(AppError::validation(format!(
                "image: reference longer than {MAX_REFERENCE_LEN} characters"
            )));
        }

        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(&path, &bytes).await?;
        tracing::debug!(reference = %reference, size = bytes.len(), "image stored");

        Ok(reference)
    }
}

// Client filenames may carry directories; only the last component is kept.
pub fn sanitize_filename(filename: &str) -> Result<&str, AppError> {
    Path::new(filename)
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AppError::validation("image: filename is required"))
}
