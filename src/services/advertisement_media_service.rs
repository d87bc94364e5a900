use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::api::config::Config;
use crate::data::models::media_file::{AdvertisementMediaFile, NewMediaFile};
use crate::data::repos::implementors::media_file_repo::MediaFileRepo;
use crate::services::errors::MediaServiceError;
use crate::storage::{LocalMediaStorage, MediaStorage};

pub struct AdvertisementMediaService {
    storage: Box<dyn MediaStorage>,
}

impl AdvertisementMediaService {
    pub fn new() -> Self {
        let config = Config::default();
        Self {
            storage: Box::new(LocalMediaStorage::new(
                config.media_storage_root,
                config.media_base_url,
            )),
        }
    }

    pub fn with_storage(storage: Box<dyn MediaStorage>) -> Self {
        Self { storage }
    }

    /// Decodes the base64 payload and hands it to the storage backend,
    /// returning the durable URL of the uploaded object.
    pub async fn upload_media_file(
        &self,
        file_name: &str,
        content_base64: &str,
    ) -> Result<String, MediaServiceError> {
        let bytes = BASE64
            .decode(content_base64)
            .map_err(|_| MediaServiceError::InvalidContent)?;

        self.storage.store(file_name, &bytes).await.map_err(|e| {
            tracing::error!("Media upload failed: {}", e);
            MediaServiceError::StorageError
        })
    }

    pub async fn create_media_file<'a>(
        &self,
        media_file: NewMediaFile<'a>,
    ) -> Result<(), MediaServiceError> {
        let repo = MediaFileRepo::new();
        repo.add(media_file)
            .await
            .map_err(|_| MediaServiceError::MediaCreationFailed)
    }

    pub async fn get_media_for_advertisement(
        &self,
        advertisement_id: i32,
    ) -> Result<Vec<AdvertisementMediaFile>, MediaServiceError> {
        let repo = MediaFileRepo::new();
        repo.get_by_advertisement_id(advertisement_id)
            .await
            .map_err(|_| MediaServiceError::DatabaseError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_with_tempdir(dir: &tempfile::TempDir) -> AdvertisementMediaService {
        AdvertisementMediaService::with_storage(Box::new(LocalMediaStorage::new(
            dir.path(),
            "http://localhost:3000/media",
        )))
    }

    #[tokio::test]
    async fn upload_rejects_invalid_base64() {
        let dir = tempfile::tempdir().expect("tempdir");
        let service = service_with_tempdir(&dir);

        let result = service.upload_media_file("chair.jpg", "%%not-base64%%").await;

        assert_eq!(result, Err(MediaServiceError::InvalidContent));
    }

    #[tokio::test]
    async fn upload_stores_decoded_bytes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let service = service_with_tempdir(&dir);

        let encoded = BASE64.encode(b"image bytes");
        let url = service
            .upload_media_file("chair.jpg", &encoded)
            .await
            .expect("upload");

        let stored_name = url.rsplit('/').next().unwrap();
        let contents = std::fs::read(dir.path().join(stored_name)).expect("read back");
        assert_eq!(contents, b"image bytes");
    }
}
