//! Pack Data

use crate::domain::{models::records::ModelUuid, packs::records::PackUuid};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPack {
    pub uuid: PackUuid,
    pub model_uuid: ModelUuid,
    pub pack_number: u32,
}

/// Title and description of a pack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackInfo {
    pub title: Option<String>,
    pub description: Option<String>,
}
