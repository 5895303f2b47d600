//! Files service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::files::{
        errors::FilesServiceError,
        records::FileMetadataRecord,
        repository::PgFilesRepository,
        storage::{StorageKind, StorageProvider},
    },
};

#[derive(Clone)]
pub struct PgFilesService {
    db: Db,
    repository: PgFilesRepository,
    storage: Arc<dyn StorageProvider>,
}

impl PgFilesService {
    #[must_use]
    pub fn new(db: Db, storage: Arc<dyn StorageProvider>) -> Self {
        Self {
            db,
            repository: PgFilesRepository::new(),
            storage,
        }
    }
}

#[async_trait]
impl FilesService for PgFilesService {
    async fn find_by_hash(&self, hash: &str) -> Result<FileMetadataRecord, FilesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let file = self.repository.find_file_by_hash(&mut tx, hash).await?;

        tx.commit().await?;

        Ok(file)
    }

    async fn get_download_url(&self, hash: &str) -> Result<String, FilesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let file = self.repository.find_file_by_hash(&mut tx, hash).await?;

        if let Some(download_url) = file.download_url {
            return Ok(download_url);
        }

        let download_url = self.storage.download_url(&file.path).await?;

        self.repository
            .update_download_url(&mut tx, hash, &download_url)
            .await?;

        tx.commit().await?;

        Ok(download_url)
    }

    async fn confirm_uploaded(&self, hash: &str) -> Result<FileMetadataRecord, FilesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let file = self.repository.mark_uploaded(&mut tx, hash).await?;

        tx.commit().await?;

        Ok(file)
    }

    async fn delete_file(&self, hash: &str) -> Result<(), FilesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let file = self.repository.find_file_by_hash(&mut tx, hash).await?;

        self.storage.delete_file(&file.path).await?;

        self.repository.delete_file_metadata(&mut tx, hash).await?;

        tx.commit().await?;

        info!(file_hash = hash, storage = %self.storage.kind(), "deleted file");

        Ok(())
    }

    fn storage_kind(&self) -> StorageKind {
        self.storage.kind()
    }
}

#[automock]
#[async_trait]
pub trait FilesService: Send + Sync {
    /// Retrieve the metadata of a stored file.
    async fn find_by_hash(&self, hash: &str) -> Result<FileMetadataRecord, FilesServiceError>;

    /// A download link for the file, issued by the storage backend once and then cached.
    async fn get_download_url(&self, hash: &str) -> Result<String, FilesServiceError>;

    /// Marks the file as uploaded.
    async fn confirm_uploaded(&self, hash: &str) -> Result<FileMetadataRecord, FilesServiceError>;

    /// Removes the file from the storage backend, then forgets its metadata.
    async fn delete_file(&self, hash: &str) -> Result<(), FilesServiceError>;

    /// The storage backend in use.
    fn storage_kind(&self) -> StorageKind;
}
