//! Static profile catalog.

use crate::domain::profiles::records::{PermissionCode, Permissions, Profile, ProfileCode};

static PROFILES: [Profile; 4] = [
    Profile {
        code: ProfileCode::Administrator,
        name: "Administrator",
        permissions: &[
            PermissionCode::ManageSystem,
            PermissionCode::CreateRoom,
            PermissionCode::EditAllModels,
        ],
    },
    Profile {
        code: ProfileCode::User,
        name: "User",
        permissions: &[PermissionCode::EditOwnProfile],
    },
    Profile {
        code: ProfileCode::Model,
        name: "Model",
        permissions: &[PermissionCode::EditOwnProfile, PermissionCode::CreateRoom],
    },
    Profile {
        code: ProfileCode::Moderator,
        name: "Moderator",
        permissions: &[PermissionCode::EditAllModels],
    },
];

/// Look up a profile in the catalog.
#[must_use]
pub fn find_profile(code: ProfileCode) -> &'static Profile {
    match code {
        ProfileCode::Administrator => &PROFILES[0],
        ProfileCode::User => &PROFILES[1],
        ProfileCode::Model => &PROFILES[2],
        ProfileCode::Moderator => &PROFILES[3],
    }
}

/// All catalog profiles, ordered by code.
#[must_use]
pub fn list_profiles() -> &'static [Profile] {
    &PROFILES
}

/// Permissions granted to a profile.
#[must_use]
pub fn permissions_for(code: ProfileCode) -> Permissions {
    find_profile(code).permissions.iter().copied().collect()
}
