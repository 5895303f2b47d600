//! Storage providers issuing signed URLs for uploaded media.

mod dropbox;
mod s3;

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

pub use dropbox::{DropboxConfig, DropboxStorage};
pub use s3::{S3Config, S3Storage};

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-2xx response or an unexpected body.
    #[error("unexpected response from storage backend: {0}")]
    UnexpectedResponse(String),

    /// The S3 SDK rejected the request.
    #[error("s3 error: {0}")]
    S3(String),
}

/// Which backend holds the files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    S3,
    Dropbox,
}

impl StorageKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::S3 => "S3",
            Self::Dropbox => "DROPBOX",
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backend selection made at startup.
#[derive(Debug, Clone)]
pub enum StorageSettings {
    S3(S3Config),
    Dropbox(DropboxConfig),
}

impl StorageSettings {
    /// Build the configured backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend client cannot be created.
    pub fn build(self) -> Result<Arc<dyn StorageProvider>, StorageError> {
        Ok(match self {
            Self::S3(config) => Arc::new(S3Storage::new(config)),
            Self::Dropbox(config) => Arc::new(DropboxStorage::new(config)?),
        })
    }
}

#[automock]
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// The backend kind.
    fn kind(&self) -> StorageKind;

    /// A URL the client can upload the file at `path` to.
    async fn upload_url(&self, path: &str) -> Result<String, StorageError>;

    /// A URL the file at `path` can be downloaded from.
    async fn download_url(&self, path: &str) -> Result<String, StorageError>;

    /// Remove the file at `path`.
    async fn delete_file(&self, path: &str) -> Result<(), StorageError>;
}
