//! File Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

pub type FileUuid = TypedUuid<FileMetadataRecord>;

/// Where an uploaded media file lives.
#[derive(Debug, Clone, PartialEq)]
pub struct FileMetadataRecord {
    pub uuid: FileUuid,
    pub hash: String,

    /// Path inside the storage backend.
    pub path: String,

    /// Set once the client confirms the upload finished.
    pub uploaded: bool,

    /// Cached after the first download link is issued.
    pub download_url: Option<String>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
