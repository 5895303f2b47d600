//! File Metadata Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::files::{
    data::NewFileMetadata,
    records::{FileMetadataRecord, FileUuid},
};

const CREATE_FILE_METADATA_SQL: &str = include_str!("sql/create_file_metadata.sql");
const FIND_FILE_BY_HASH_SQL: &str = include_str!("sql/find_file_by_hash.sql");
const UPDATE_DOWNLOAD_URL_SQL: &str = include_str!("sql/update_download_url.sql");
const MARK_UPLOADED_SQL: &str = include_str!("sql/mark_uploaded.sql");
const DELETE_FILE_METADATA_SQL: &str = include_str!("sql/delete_file_metadata.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgFilesRepository;

impl PgFilesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    #[tracing::instrument(
        name = "files.repository.create_file_metadata",
        skip(self, tx, file),
        fields(file_hash = %file.hash),
        err
    )]
    pub(crate) async fn create_file_metadata(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        file: NewFileMetadata,
    ) -> Result<FileMetadataRecord, sqlx::Error> {
        query_as::<Postgres, FileMetadataRecord>(CREATE_FILE_METADATA_SQL)
            .bind(file.uuid.into_uuid())
            .bind(file.hash)
            .bind(file.path)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_file_by_hash(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        hash: &str,
    ) -> Result<FileMetadataRecord, sqlx::Error> {
        query_as::<Postgres, FileMetadataRecord>(FIND_FILE_BY_HASH_SQL)
            .bind(hash)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_download_url(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        hash: &str,
        download_url: &str,
    ) -> Result<FileMetadataRecord, sqlx::Error> {
        query_as::<Postgres, FileMetadataRecord>(UPDATE_DOWNLOAD_URL_SQL)
            .bind(hash)
            .bind(download_url)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn mark_uploaded(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        hash: &str,
    ) -> Result<FileMetadataRecord, sqlx::Error> {
        query_as::<Postgres, FileMetadataRecord>(MARK_UPLOADED_SQL)
            .bind(hash)
            .fetch_one(&mut **tx)
            .await
    }

    #[tracing::instrument(
        name = "files.repository.delete_file_metadata",
        skip(self, tx),
        err
    )]
    pub(crate) async fn delete_file_metadata(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        hash: &str,
    ) -> Result<(), sqlx::Error> {
        let rows_affected = query(DELETE_FILE_METADATA_SQL)
            .bind(hash)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        if rows_affected == 0 {
            return Err(sqlx::Error::RowNotFound);
        }

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for FileMetadataRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: FileUuid::from_uuid(row.try_get("uuid")?),
            hash: row.try_get("hash")?,
            path: row.try_get("path")?,
            uploaded: row.try_get("uploaded")?,
            download_url: row.try_get("download_url")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
