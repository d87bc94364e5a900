//! Media storage backends.
//!
//! Controllers never touch the filesystem directly; uploads go through the
//! [`MediaStorage`] trait, which accepts raw bytes and hands back a durable
//! URL for the stored object.

pub mod local;

pub use local::LocalMediaStorage;

use async_trait::async_trait;

#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Store the given bytes under a name derived from `file_name` and
    /// return the URL where the object can be fetched.
    async fn store(&self, file_name: &str, bytes: &[u8]) -> Result<String, StorageError>;
}

#[derive(Debug)]
pub enum StorageError {
    WriteFailed(String),
}

impl std::error::Error for StorageError {}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::WriteFailed(detail) => write!(f, "Media write failed: {}", detail),
        }
    }
}
