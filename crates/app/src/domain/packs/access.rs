//! Access levels to pack content.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::{
    models::records::ModelRecord,
    owned_resources::{OwnedResourcesService, OwnedResourcesServiceError},
    packs::records::PackRecord,
    persons::{
        PersonsService, PersonsServiceError,
        records::{PersonRecord, PersonUuid},
    },
    profiles::{PermissionCode, find_profile},
};

/// How much of a pack a requester may see, from least to most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AccessLevel {
    /// The pack is hidden.
    Denied = 0,

    /// Only public items and locked thumbnails are visible.
    Locked = 1,

    /// Everything is visible.
    View = 2,

    /// The requester authored the pack.
    Model = 3,

    /// The requester may edit any model's packs.
    Edit = 4,
}

impl AccessLevel {
    /// Unrestricted access to every item.
    #[must_use]
    pub fn can_view_content(self) -> bool {
        self >= Self::View
    }
}

#[derive(Debug, Error)]
pub enum AccessError {
    #[error("requester not found")]
    RequesterNotFound,

    #[error("requester is not active")]
    RequesterInactive,

    #[error("failed to load requester")]
    Persons(#[source] PersonsServiceError),

    #[error("failed to load owned resources")]
    OwnedResources(#[from] OwnedResourcesServiceError),
}

impl From<PersonsServiceError> for AccessError {
    fn from(error: PersonsServiceError) -> Self {
        match error {
            PersonsServiceError::NotFound => Self::RequesterNotFound,
            other => Self::Persons(other),
        }
    }
}

/// Decides which [`AccessLevel`] applies to a (pack, requester) pair.
#[derive(Clone)]
pub struct AccessResolver {
    persons: Arc<dyn PersonsService>,
    owned_resources: Arc<dyn OwnedResourcesService>,
}

impl AccessResolver {
    #[must_use]
    pub fn new(
        persons: Arc<dyn PersonsService>,
        owned_resources: Arc<dyn OwnedResourcesService>,
    ) -> Self {
        Self {
            persons,
            owned_resources,
        }
    }

    /// Resolve the access level of `requester` to `pack`, authored by `model`.
    ///
    /// # Errors
    ///
    /// Fails when the requester is unknown or inactive, or a lookup fails.
    pub async fn resolve_access_level(
        &self,
        pack: &PackRecord,
        model: &ModelRecord,
        requester: Option<PersonUuid>,
    ) -> Result<AccessLevel, AccessError> {
        let requester = match requester {
            Some(person) => Some(self.load_requester(person).await?),
            None => None,
        };

        self.resolve(pack, model, requester.as_ref()).await
    }

    /// Load a requester, who must exist and be active.
    ///
    /// # Errors
    ///
    /// Fails when the person is unknown or inactive, or the lookup fails.
    pub async fn load_requester(&self, person: PersonUuid) -> Result<PersonRecord, AccessError> {
        let person = self.persons.find_person(person).await?;

        if !person.active {
            return Err(AccessError::RequesterInactive);
        }

        Ok(person)
    }

    /// Resolve the access level of an already loaded requester.
    ///
    /// # Errors
    ///
    /// Fails when the ownership lookup fails.
    pub async fn resolve(
        &self,
        pack: &PackRecord,
        model: &ModelRecord,
        requester: Option<&PersonRecord>,
    ) -> Result<AccessLevel, AccessError> {
        let published_or_denied = if pack.published {
            AccessLevel::Locked
        } else {
            AccessLevel::Denied
        };

        let Some(requester) = requester else {
            return Ok(published_or_denied);
        };

        if self
            .owned_resources
            .person_has_pack(requester.uuid, pack.uuid)
            .await?
        {
            return Ok(if pack.published {
                AccessLevel::View
            } else {
                AccessLevel::Denied
            });
        }

        if model.person_uuid == requester.uuid {
            return Ok(AccessLevel::Model);
        }

        if find_profile(requester.profile_code).has_permission(PermissionCode::EditAllModels) {
            return Ok(AccessLevel::Edit);
        }

        Ok(published_or_denied)
    }
}
