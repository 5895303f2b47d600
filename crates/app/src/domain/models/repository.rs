//! Models Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};

use crate::domain::{
    models::records::{ModelRecord, ModelUuid},
    persons::records::PersonUuid,
};

const FIND_MODEL_BY_NICK_NAME_SQL: &str = include_str!("sql/find_model_by_nick_name.sql");
const LOCK_MODEL_BY_NICK_NAME_SQL: &str = include_str!("sql/lock_model_by_nick_name.sql");
const FIND_MODEL_BY_PERSON_SQL: &str = include_str!("sql/find_model_by_person.sql");
const CREATE_MODEL_SQL: &str = include_str!("sql/create_model.sql");
const SEARCH_MODELS_SQL: &str = include_str!("sql/search_models.sql");
const COUNT_MODELS_SQL: &str = include_str!("sql/count_models.sql");
const SET_PROFILE_IMAGE_SQL: &str = include_str!("sql/set_profile_image.sql");
const SET_ABOUT_ME_SQL: &str = include_str!("sql/set_about_me.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgModelsRepository;

impl PgModelsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_model_by_nick_name(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        nick_name: &str,
    ) -> Result<Option<ModelRecord>, sqlx::Error> {
        query_as::<Postgres, ModelRecord>(FIND_MODEL_BY_NICK_NAME_SQL)
            .bind(nick_name)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Same as [`Self::find_model_by_nick_name`] but holds a row lock until the
    /// transaction ends, serialising pack creation per model.
    pub(crate) async fn lock_model_by_nick_name(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        nick_name: &str,
    ) -> Result<Option<ModelRecord>, sqlx::Error> {
        query_as::<Postgres, ModelRecord>(LOCK_MODEL_BY_NICK_NAME_SQL)
            .bind(nick_name)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn find_model_by_person(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        person: PersonUuid,
    ) -> Result<Option<ModelRecord>, sqlx::Error> {
        query_as::<Postgres, ModelRecord>(FIND_MODEL_BY_PERSON_SQL)
            .bind(person.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    #[tracing::instrument(
        name = "models.repository.create_model",
        skip(self, tx),
        fields(model_uuid = %model, person_uuid = %person),
        err
    )]
    pub(crate) async fn create_model(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        model: ModelUuid,
        person: PersonUuid,
        nick_name: &str,
    ) -> Result<ModelRecord, sqlx::Error> {
        query_as::<Postgres, ModelRecord>(CREATE_MODEL_SQL)
            .bind(model.into_uuid())
            .bind(person.into_uuid())
            .bind(nick_name)
            .fetch_one(&mut **tx)
            .await
    }

    /// `pattern` is an `ILIKE` pattern; `None` matches every model.
    pub(crate) async fn search_models(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        pattern: Option<&str>,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<ModelRecord>, sqlx::Error> {
        query_as::<Postgres, ModelRecord>(SEARCH_MODELS_SQL)
            .bind(pattern)
            .bind(i64::from(offset))
            .bind(i64::from(limit))
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn count_models(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        pattern: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        query_scalar::<Postgres, i64>(COUNT_MODELS_SQL)
            .bind(pattern)
            .fetch_one(&mut **tx)
            .await
    }

    #[tracing::instrument(
        name = "models.repository.set_profile_image",
        skip(self, tx),
        fields(model_uuid = %model),
        err
    )]
    pub(crate) async fn set_profile_image(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        model: ModelUuid,
        file_hash: &str,
        thumbnail_file_hash: &str,
    ) -> Result<ModelRecord, sqlx::Error> {
        query_as::<Postgres, ModelRecord>(SET_PROFILE_IMAGE_SQL)
            .bind(model.into_uuid())
            .bind(file_hash)
            .bind(thumbnail_file_hash)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn set_about_me(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        nick_name: &str,
        about_me: Option<&str>,
    ) -> Result<Option<ModelRecord>, sqlx::Error> {
        query_as::<Postgres, ModelRecord>(SET_ABOUT_ME_SQL)
            .bind(nick_name)
            .bind(about_me)
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ModelRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: ModelUuid::from_uuid(row.try_get("uuid")?),
            person_uuid: PersonUuid::from_uuid(row.try_get("person_uuid")?),
            nick_name: row.try_get("nick_name")?,
            profile_image_file_hash: row.try_get("profile_image_file_hash")?,
            profile_image_thumbnail_file_hash: row.try_get("profile_image_thumbnail_file_hash")?,
            about_me: row.try_get("about_me")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
