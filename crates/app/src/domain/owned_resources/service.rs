//! Owned resources service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        owned_resources::{
            errors::OwnedResourcesServiceError, repository::PgOwnedResourcesRepository,
        },
        packs::records::PackUuid,
        persons::records::PersonUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgOwnedResourcesService {
    db: Db,
    repository: PgOwnedResourcesRepository,
}

impl PgOwnedResourcesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgOwnedResourcesRepository::new(),
        }
    }
}

#[async_trait]
impl OwnedResourcesService for PgOwnedResourcesService {
    async fn add_pack_to_person(
        &self,
        person: PersonUuid,
        pack: PackUuid,
    ) -> Result<(), OwnedResourcesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        self.repository
            .add_pack_to_person(&mut tx, person, pack)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn person_has_pack(
        &self,
        person: PersonUuid,
        pack: PackUuid,
    ) -> Result<bool, OwnedResourcesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let has_pack = self.repository.person_has_pack(&mut tx, person, pack).await?;

        tx.commit().await?;

        Ok(has_pack)
    }

    async fn list_person_packs(
        &self,
        person: PersonUuid,
    ) -> Result<Vec<PackUuid>, OwnedResourcesServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let owned = self.repository.find_owned_resources(&mut tx, person).await?;

        tx.commit().await?;

        Ok(owned.map(|owned| owned.pack_uuids).unwrap_or_default())
    }
}

#[automock]
#[async_trait]
pub trait OwnedResourcesService: Send + Sync {
    /// Grants a pack to a person. Granting an owned pack again changes nothing.
    async fn add_pack_to_person(
        &self,
        person: PersonUuid,
        pack: PackUuid,
    ) -> Result<(), OwnedResourcesServiceError>;

    /// Whether the person bought the pack. A person without a ledger owns nothing.
    async fn person_has_pack(
        &self,
        person: PersonUuid,
        pack: PackUuid,
    ) -> Result<bool, OwnedResourcesServiceError>;

    /// Packs owned by the person, in purchase order. Empty when they never bought anything.
    async fn list_person_packs(
        &self,
        person: PersonUuid,
    ) -> Result<Vec<PackUuid>, OwnedResourcesServiceError>;
}
