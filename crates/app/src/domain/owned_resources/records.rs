//! Owned Resources Records

use jiff::Timestamp;

use crate::domain::{packs::records::PackUuid, persons::records::PersonUuid};

/// Packs bought by a single person.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedResourcesRecord {
    pub person_uuid: PersonUuid,
    pub pack_uuids: Vec<PackUuid>,
    pub updated_at: Timestamp,
}
