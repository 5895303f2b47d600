//! Persons Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    persons::{
        data::NewPerson,
        records::{PersonRecord, PersonUuid},
    },
    profiles::ProfileCode,
};

const FIND_PERSON_SQL: &str = include_str!("sql/find_person.sql");
const FIND_PERSON_BY_EMAIL_SQL: &str = include_str!("sql/find_person_by_email.sql");
const CREATE_PERSON_SQL: &str = include_str!("sql/create_person.sql");
const UPDATE_PROFILE_CODE_SQL: &str = include_str!("sql/update_profile_code.sql");
const UPDATE_ACTIVE_SQL: &str = include_str!("sql/update_active.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPersonsRepository;

impl PgPersonsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_person(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        person: PersonUuid,
    ) -> Result<PersonRecord, sqlx::Error> {
        query_as::<Postgres, PersonRecord>(FIND_PERSON_SQL)
            .bind(person.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_person_by_email(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        email: &str,
    ) -> Result<Option<PersonRecord>, sqlx::Error> {
        query_as::<Postgres, PersonRecord>(FIND_PERSON_BY_EMAIL_SQL)
            .bind(email)
            .fetch_optional(&mut **tx)
            .await
    }

    #[tracing::instrument(
        name = "persons.repository.create_person",
        skip(self, tx, person),
        fields(person_uuid = %person.uuid),
        err
    )]
    pub(crate) async fn create_person(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        person: NewPerson,
    ) -> Result<PersonRecord, sqlx::Error> {
        query_as::<Postgres, PersonRecord>(CREATE_PERSON_SQL)
            .bind(person.uuid.into_uuid())
            .bind(person.email)
            .bind(person.first_name)
            .bind(person.last_name)
            .bind(person.profile_code.as_i16())
            .fetch_one(&mut **tx)
            .await
    }

    #[tracing::instrument(
        name = "persons.repository.update_profile_code",
        skip(self, tx),
        fields(person_uuid = %person),
        err
    )]
    pub(crate) async fn update_profile_code(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        person: PersonUuid,
        profile_code: ProfileCode,
    ) -> Result<PersonRecord, sqlx::Error> {
        query_as::<Postgres, PersonRecord>(UPDATE_PROFILE_CODE_SQL)
            .bind(person.into_uuid())
            .bind(profile_code.as_i16())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_active(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        person: PersonUuid,
        active: bool,
    ) -> Result<PersonRecord, sqlx::Error> {
        query_as::<Postgres, PersonRecord>(UPDATE_ACTIVE_SQL)
            .bind(person.into_uuid())
            .bind(active)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for PersonRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let profile_code_i16: i16 = row.try_get("profile_code")?;

        let profile_code =
            ProfileCode::try_from(profile_code_i16).map_err(|e| sqlx::Error::ColumnDecode {
                index: "profile_code".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: PersonUuid::from_uuid(row.try_get("uuid")?),
            email: row.try_get("email")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            profile_code,
            active: row.try_get("active")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
