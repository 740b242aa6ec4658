//! File-based blob storage

use crate::error::Result;
use crate::key::CacheKey;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// A blob store backed by one file per key in a single directory
#[derive(Debug, Clone)]
pub struct BlobStore {
    /// Directory where cached images are stored
    cache_dir: PathBuf,
}

impl BlobStore {
    /// Create a new store. The directory is not touched until `ensure_dir`.
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
        }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Path of the entry for `key`
    pub fn path_for(&self, key: &CacheKey) -> PathBuf {
        self.cache_dir.join(key.file_name())
    }

    /// Create the cache directory and its parents if missing. Idempotent.
    pub async fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.cache_dir).await?;
        Ok(())
    }

    /// Read an entry. A missing file is `Ok(None)`; any other I/O failure is
    /// an error.
    pub async fn get(&self, key: &CacheKey) -> Result<Option<Vec<u8>>> {
        match fs::read(self.path_for(key)).await {
            Ok(data) => {
                debug!(code = %key, size = data.len(), "Store hit");
                Ok(Some(data))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(code = %key, "Store miss");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Write an entry, replacing whatever was stored under `key`
    pub async fn put(&self, key: &CacheKey, data: &[u8]) -> Result<()> {
        fs::write(self.path_for(key), data).await?;
        debug!(code = %key, size = data.len(), "Stored image");
        Ok(())
    }

    /// Remove an entry. Returns `false` when there was nothing to remove,
    /// including when another request unlinked it after the existence check.
    pub async fn remove(&self, key: &CacheKey) -> Result<bool> {
        let path = self.path_for(key);
        if !fs::try_exists(&path).await? {
            return Ok(false);
        }

        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(code = %key, "Removed image");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
