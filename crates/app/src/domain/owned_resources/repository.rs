//! Owned Resources Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, query_scalar};
use tracing::debug;
use uuid::Uuid;

use crate::domain::{
    owned_resources::records::OwnedResourcesRecord, packs::records::PackUuid,
    persons::records::PersonUuid,
};

const ADD_PACK_TO_PERSON_SQL: &str = include_str!("sql/add_pack_to_person.sql");
const PERSON_HAS_PACK_SQL: &str = include_str!("sql/person_has_pack.sql");
const FIND_OWNED_RESOURCES_SQL: &str = include_str!("sql/find_owned_resources.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOwnedResourcesRepository;

impl PgOwnedResourcesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Appends the pack to the person's ledger unless it is already there.
    ///
    /// Returns whether the ledger changed.
    #[tracing::instrument(
        name = "owned_resources.repository.add_pack_to_person",
        skip(self, tx),
        fields(person_uuid = %person, pack_uuid = %pack),
        err
    )]
    pub(crate) async fn add_pack_to_person(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        person: PersonUuid,
        pack: PackUuid,
    ) -> Result<bool, sqlx::Error> {
        let rows_affected = query(ADD_PACK_TO_PERSON_SQL)
            .bind(person.into_uuid())
            .bind(pack.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        if rows_affected == 0 {
            debug!("pack already owned, ledger unchanged");
        }

        Ok(rows_affected > 0)
    }

    pub(crate) async fn person_has_pack(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        person: PersonUuid,
        pack: PackUuid,
    ) -> Result<bool, sqlx::Error> {
        query_scalar::<Postgres, bool>(PERSON_HAS_PACK_SQL)
            .bind(person.into_uuid())
            .bind(pack.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_owned_resources(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        person: PersonUuid,
    ) -> Result<Option<OwnedResourcesRecord>, sqlx::Error> {
        query_as::<Postgres, OwnedResourcesRecord>(FIND_OWNED_RESOURCES_SQL)
            .bind(person.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for OwnedResourcesRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let pack_uuids: Vec<Uuid> = row.try_get("pack_uuids")?;

        Ok(Self {
            person_uuid: PersonUuid::from_uuid(row.try_get("person_uuid")?),
            pack_uuids: pack_uuids.into_iter().map(PackUuid::from_uuid).collect(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
