//! Persons Data

use crate::domain::{persons::records::PersonUuid, profiles::ProfileCode};

/// New Person Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewPerson {
    pub uuid: PersonUuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_code: ProfileCode,
}
