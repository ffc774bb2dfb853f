use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use chrono::Utc;
use uuid::Uuid;

use crate::error::AppResult;

/// URL prefix under which stored files are served.
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

/// File written to the uploads directory, ready to become a `Media` record.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredFile {
    pub filename: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: i64,
    pub url: String,
}

/// Owner of the uploads directory. Nothing else writes to or deletes from it.
#[derive(Debug, Clone)]
pub struct UploadDir {
    root: PathBuf,
}

impl UploadDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `bytes` under a freshly generated name, creating the directory on first use.
    pub async fn save(
        &self,
        original_name: &str,
        mime_type: &str,
        bytes: &[u8],
    ) -> AppResult<StoredFile> {
        tokio::fs::create_dir_all(&self.root).await?;

        let filename = generate_filename(original_name);
        tokio::fs::write(self.root.join(&filename), bytes).await?;
        tracing::debug!(%filename, size = bytes.len(), "stored upload");

        Ok(StoredFile {
            url: format!("{UPLOADS_URL_PREFIX}/{filename}"),
            filename,
            original_name: original_name.to_string(),
            mime_type: mime_type.to_string(),
            size: bytes.len() as i64,
        })
    }

    /// Delete a stored file. A file that is already gone is not an error.
    pub async fn remove(&self, filename: &str) -> AppResult<()> {
        let Some(path) = self.path_of(filename) else {
            tracing::warn!(%filename, "refusing to remove file outside uploads directory");
            return Ok(());
        };
        match tokio::fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(%filename, "upload already missing");
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn path_of(&self, filename: &str) -> Option<PathBuf> {
        let name = Path::new(filename).file_name()?;
        (name == filename).then(|| self.root.join(name))
    }
}

/// `{millis}-{16 hex chars}{.ext}`, with the extension taken from the client's name.
pub fn generate_filename(original_name: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    let extension = Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
        .unwrap_or_default();
    format!("{}-{}{}", Utc::now().timestamp_millis(), &suffix[..16], extension)
}
