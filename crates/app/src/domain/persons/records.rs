//! Person Records

use jiff::Timestamp;

use crate::{domain::profiles::ProfileCode, uuids::TypedUuid};

/// Person UUID
pub type PersonUuid = TypedUuid<PersonRecord>;

/// Person Record
#[derive(Debug, Clone, PartialEq)]
pub struct PersonRecord {
    pub uuid: PersonUuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_code: ProfileCode,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
