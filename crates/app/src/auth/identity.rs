//! Authenticated identities and authorization checks.

use thiserror::Error;

use crate::domain::{
    persons::records::PersonUuid,
    profiles::{PermissionCode, Permissions, ProfileCode},
};

/// The request was authenticated but is not allowed.
///
/// The reason is meant for logs only.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("access denied: {reason}")]
pub struct AccessDenied {
    pub reason: String,
}

impl AccessDenied {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Who is calling, resolved from a bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub person_uuid: PersonUuid,
    pub email: String,
    pub profile_code: ProfileCode,
    pub permissions: Permissions,

    /// Set when the person is registered as a model.
    pub model_nick_name: Option<String>,
}

impl Identity {
    #[must_use]
    pub fn has_permission(&self, permission: PermissionCode) -> bool {
        self.permissions.contains(&permission)
    }

    /// # Errors
    ///
    /// Returns [`AccessDenied`] when the profile lacks `permission`.
    pub fn must_have_permission(&self, permission: PermissionCode) -> Result<(), AccessDenied> {
        if self.has_permission(permission) {
            return Ok(());
        }

        Err(AccessDenied::new(format!(
            "person {} lacks permission {permission:?}",
            self.person_uuid
        )))
    }

    /// Models may edit their own packs. Anyone else needs [`PermissionCode::EditAllModels`].
    ///
    /// # Errors
    ///
    /// Returns [`AccessDenied`] when neither condition holds.
    pub fn must_be_able_to_edit_model(&self, nick_name: &str) -> Result<(), AccessDenied> {
        if self.model_nick_name.as_deref() == Some(nick_name) {
            return Ok(());
        }

        self.must_have_permission(PermissionCode::EditAllModels)
    }
}
