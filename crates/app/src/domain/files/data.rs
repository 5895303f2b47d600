//! File Data

use crate::domain::files::records::FileUuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFileMetadata {
    pub uuid: FileUuid,
    pub hash: String,
    pub path: String,
}

/// Where the client should upload a file it was asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceUploadUrl {
    pub upload_url: String,
    pub file_hash: String,
    pub is_thumbnail: bool,
    pub is_blurred: bool,
}
