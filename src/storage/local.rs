use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::storage::{MediaStorage, StorageError};

/// Local filesystem storage backend.
///
/// Objects are written as `{uuid}{ext}` under the configured root directory
/// and served from `{base_url}/{name}`. The original file name only
/// contributes its extension, so callers cannot influence the stored path.
#[derive(Clone)]
pub struct LocalMediaStorage {
    root_dir: PathBuf,
    base_url: String,
}

impl LocalMediaStorage {
    pub fn new(root_dir: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root_dir: root_dir.into(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl MediaStorage for LocalMediaStorage {
    async fn store(&self, file_name: &str, bytes: &[u8]) -> Result<String, StorageError> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e))
            .unwrap_or_default();

        let stored_name = format!("{}{}", Uuid::new_v4(), extension);

        tokio::fs::create_dir_all(&self.root_dir)
            .await
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;

        let path = self.root_dir.join(&stored_name);

        let mut file = tokio::fs::File::create(&path)
            .await
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        file.write_all(bytes)
            .await
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;

        Ok(format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            stored_name
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stores_bytes_and_returns_url_under_base() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = LocalMediaStorage::new(dir.path(), "http://localhost:3000/media/");

        let url = storage
            .store("chair.jpg", b"not really a jpeg")
            .await
            .expect("store");

        assert!(url.starts_with("http://localhost:3000/media/"));
        assert!(url.ends_with(".jpg"));

        let stored_name = url.rsplit('/').next().unwrap();
        let contents = tokio::fs::read(dir.path().join(stored_name))
            .await
            .expect("read back");
        assert_eq!(contents, b"not really a jpeg");
    }

    #[tokio::test]
    async fn file_without_extension_still_stores() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = LocalMediaStorage::new(dir.path(), "http://localhost:3000/media");

        let url = storage.store("README", b"plain").await.expect("store");

        let stored_name = url.rsplit('/').next().unwrap();
        assert!(!stored_name.contains('.'));
        assert!(dir.path().join(stored_name).exists());
    }

    #[tokio::test]
    async fn distinct_uploads_get_distinct_names() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = LocalMediaStorage::new(dir.path(), "http://localhost:3000/media");

        let first = storage.store("a.png", b"one").await.expect("store");
        let second = storage.store("a.png", b"two").await.expect("store");

        assert_ne!(first, second);
    }
}
