//! Files service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::files::storage::StorageError;

#[derive(Debug, Error)]
pub enum FilesServiceError {
    #[error("file already exists")]
    AlreadyExists,

    #[error("file not found")]
    NotFound,

    #[error("storage backend error")]
    Storage(#[from] StorageError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for FilesServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
