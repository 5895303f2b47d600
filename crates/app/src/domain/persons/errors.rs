//! Persons service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::exceptions::BusinessException;

#[derive(Debug, Error)]
pub enum PersonsServiceError {
    #[error("person already exists")]
    AlreadyExists,

    #[error("person not found")]
    NotFound,

    #[error("invalid data")]
    InvalidData,

    #[error(transparent)]
    Business(BusinessException),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for PersonsServiceError {
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
