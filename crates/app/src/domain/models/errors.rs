//! Models service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::{exceptions::BusinessException, files::storage::StorageError};

#[derive(Debug, Error)]
pub enum ModelsServiceError {
    #[error("model already exists")]
    AlreadyExists,

    #[error("model not found")]
    NotFound,

    #[error("person not found")]
    PersonNotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error(transparent)]
    Business(BusinessException),

    #[error("file storage error")]
    Storage(#[from] StorageError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ModelsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
