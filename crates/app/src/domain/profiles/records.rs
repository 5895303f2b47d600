//! Profile Records

use smallvec::SmallVec;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileCodeError {
    #[error("unknown profile code: {0}")]
    Unknown(i16),
}

/// Profile assigned to a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileCode {
    Administrator,
    User,
    Model,
    Moderator,
}

impl ProfileCode {
    #[must_use]
    pub const fn as_i16(self) -> i16 {
        match self {
            Self::Administrator => 1,
            Self::User => 2,
            Self::Model => 3,
            Self::Moderator => 4,
        }
    }
}

impl TryFrom<i16> for ProfileCode {
    type Error = ProfileCodeError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Administrator),
            2 => Ok(Self::User),
            3 => Ok(Self::Model),
            4 => Ok(Self::Moderator),
            other => Err(ProfileCodeError::Unknown(other)),
        }
    }
}

impl From<ProfileCode> for i16 {
    fn from(value: ProfileCode) -> Self {
        value.as_i16()
    }
}

/// Permission granted through a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionCode {
    ManageSystem,
    EditOwnProfile,
    CreateRoom,
    EditAllModels,
}

impl PermissionCode {
    #[must_use]
    pub const fn as_i16(self) -> i16 {
        match self {
            Self::ManageSystem => 1,
            Self::EditOwnProfile => 2,
            Self::CreateRoom => 3,
            Self::EditAllModels => 4,
        }
    }
}

/// Permission set small enough to live inline.
pub type Permissions = SmallVec<[PermissionCode; 4]>;

/// Profile Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub code: ProfileCode,
    pub name: &'static str,
    pub permissions: &'static [PermissionCode],
}

impl Profile {
    #[must_use]
    pub fn has_permission(&self, permission: PermissionCode) -> bool {
        self.permissions.contains(&permission)
    }
}
