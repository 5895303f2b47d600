//! Model Records

use jiff::Timestamp;

use crate::{domain::persons::records::PersonUuid, uuids::TypedUuid};

/// Model UUID
pub type ModelUuid = TypedUuid<ModelRecord>;

/// Model Record
#[derive(Debug, Clone, PartialEq)]
pub struct ModelRecord {
    pub uuid: ModelUuid,
    pub person_uuid: PersonUuid,
    pub nick_name: String,
    pub profile_image_file_hash: Option<String>,
    pub profile_image_thumbnail_file_hash: Option<String>,
    pub about_me: Option<String>,
    pub created_at: Timestamp,
}
