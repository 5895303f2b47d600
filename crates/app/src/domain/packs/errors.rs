//! Packs service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::{
    exceptions::BusinessException, files::storage::StorageError, packs::access::AccessError,
};

#[derive(Debug, Error)]
pub enum PacksServiceError {
    #[error("pack already exists")]
    AlreadyExists,

    #[error("pack not found")]
    NotFound,

    #[error("model not found")]
    ModelNotFound,

    #[error("pack item not found")]
    ItemNotFound,

    #[error("invalid data")]
    InvalidData,

    #[error(transparent)]
    Business(BusinessException),

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("storage backend error")]
    Storage(#[from] StorageError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for PacksServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::CheckViolation | ErrorKind::NotNullViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
