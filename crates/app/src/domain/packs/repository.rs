//! Packs Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{
    FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar, types::Json,
};
use tracing::Span;

use crate::domain::{
    models::records::ModelUuid,
    packs::{
        data::NewPack,
        records::{PackItemRecord, PackRecord, PackUuid},
    },
};

const FIND_ACTIVE_PACK_SQL: &str = include_str!("sql/find_active_pack.sql");
const LOCK_ACTIVE_PACK_SQL: &str = include_str!("sql/lock_active_pack.sql");
const FIND_PACK_SQL: &str = include_str!("sql/find_pack.sql");
const FIND_ACTIVE_PACKS_BY_MODEL_SQL: &str = include_str!("sql/find_active_packs_by_model.sql");
const MAX_ACTIVE_PACK_NUMBER_SQL: &str = include_str!("sql/max_active_pack_number.sql");
const CREATE_PACK_SQL: &str = include_str!("sql/create_pack.sql");
const SAVE_PACK_SQL: &str = include_str!("sql/save_pack.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPacksRepository;

impl PgPacksRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_active_pack(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        model: ModelUuid,
        pack_number: u32,
    ) -> Result<Option<PackRecord>, sqlx::Error> {
        let Some(pack_number) = stored_pack_number(pack_number) else {
            return Ok(None);
        };

        query_as::<Postgres, PackRecord>(FIND_ACTIVE_PACK_SQL)
            .bind(model.into_uuid())
            .bind(pack_number)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Same as [`Self::find_active_pack`], holding a row lock until the transaction ends.
    pub(crate) async fn lock_active_pack(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        model: ModelUuid,
        pack_number: u32,
    ) -> Result<Option<PackRecord>, sqlx::Error> {
        let Some(pack_number) = stored_pack_number(pack_number) else {
            return Ok(None);
        };

        query_as::<Postgres, PackRecord>(LOCK_ACTIVE_PACK_SQL)
            .bind(model.into_uuid())
            .bind(pack_number)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn find_pack(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        pack: PackUuid,
    ) -> Result<PackRecord, sqlx::Error> {
        query_as::<Postgres, PackRecord>(FIND_PACK_SQL)
            .bind(pack.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    #[tracing::instrument(
        name = "packs.repository.find_active_packs_by_model",
        skip(self, tx),
        fields(model_uuid = %model, packs_count = tracing::field::Empty),
        err
    )]
    pub(crate) async fn find_active_packs_by_model(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        model: ModelUuid,
    ) -> Result<Vec<PackRecord>, sqlx::Error> {
        let packs = query_as::<Postgres, PackRecord>(FIND_ACTIVE_PACKS_BY_MODEL_SQL)
            .bind(model.into_uuid())
            .fetch_all(&mut **tx)
            .await?;

        Span::current().record("packs_count", packs.len());

        Ok(packs)
    }

    pub(crate) async fn max_active_pack_number(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        model: ModelUuid,
    ) -> Result<Option<u32>, sqlx::Error> {
        let max = query_scalar::<Postgres, Option<i32>>(MAX_ACTIVE_PACK_NUMBER_SQL)
            .bind(model.into_uuid())
            .fetch_one(&mut **tx)
            .await?;

        max.map(|number| decode_column("pack_number", u32::try_from(number)))
            .transpose()
    }

    #[tracing::instrument(
        name = "packs.repository.create_pack",
        skip(self, tx, pack),
        fields(pack_uuid = %pack.uuid, model_uuid = %pack.model_uuid, pack_number = pack.pack_number),
        err
    )]
    pub(crate) async fn create_pack(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        pack: NewPack,
    ) -> Result<PackRecord, sqlx::Error> {
        query_as::<Postgres, PackRecord>(CREATE_PACK_SQL)
            .bind(pack.uuid.into_uuid())
            .bind(pack.model_uuid.into_uuid())
            .bind(encode_pack_number(pack.pack_number)?)
            .fetch_one(&mut **tx)
            .await
    }

    /// Persist every mutable field of the pack, items included.
    #[tracing::instrument(
        name = "packs.repository.save_pack",
        skip(self, tx, pack),
        fields(pack_uuid = %pack.uuid, items_count = pack.items.len()),
        err
    )]
    pub(crate) async fn save_pack(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        pack: &PackRecord,
    ) -> Result<PackRecord, sqlx::Error> {
        let price = pack
            .price
            .map(i64::try_from)
            .transpose()
            .map_err(|error| sqlx::Error::Encode(Box::new(error)))?;

        query_as::<Postgres, PackRecord>(SAVE_PACK_SQL)
            .bind(pack.uuid.into_uuid())
            .bind(pack.title.as_deref())
            .bind(pack.description.as_deref())
            .bind(price)
            .bind(pack.ready_to_publish)
            .bind(pack.ready_to_publish_at.map(SqlxTimestamp::from))
            .bind(pack.published)
            .bind(pack.published_at.map(SqlxTimestamp::from))
            .bind(Json(&pack.items))
            .bind(pack.active)
            .fetch_one(&mut **tx)
            .await
    }
}

/// Numbers past the column range were never stored, so they match no pack.
fn stored_pack_number(pack_number: u32) -> Option<i32> {
    i32::try_from(pack_number).ok()
}

fn encode_pack_number(pack_number: u32) -> Result<i32, sqlx::Error> {
    i32::try_from(pack_number).map_err(|error| sqlx::Error::Encode(Box::new(error)))
}

fn decode_column<T, E>(column: &str, value: Result<T, E>) -> Result<T, sqlx::Error>
where
    E: std::error::Error + Send + Sync + 'static,
{
    value.map_err(|error| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(error),
    })
}

impl<'r> FromRow<'r, PgRow> for PackRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let pack_number: i32 = row.try_get("pack_number")?;
        let price: Option<i64> = row.try_get("price")?;
        let items: Json<Vec<PackItemRecord>> = row.try_get("items")?;

        Ok(Self {
            uuid: PackUuid::from_uuid(row.try_get("uuid")?),
            model_uuid: ModelUuid::from_uuid(row.try_get("model_uuid")?),
            pack_number: decode_column("pack_number", u32::try_from(pack_number))?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            price: price
                .map(|price| decode_column("price", u64::try_from(price)))
                .transpose()?,
            ready_to_publish: row.try_get("ready_to_publish")?,
            ready_to_publish_at: row
                .try_get::<Option<SqlxTimestamp>, _>("ready_to_publish_at")?
                .map(SqlxTimestamp::to_jiff),
            published: row.try_get("published")?,
            published_at: row
                .try_get::<Option<SqlxTimestamp>, _>("published_at")?
                .map(SqlxTimestamp::to_jiff),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            items: items.0,
            active: row.try_get("active")?,
        })
    }
}
