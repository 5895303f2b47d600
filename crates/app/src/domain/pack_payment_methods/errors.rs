//! Pack payment methods service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::exceptions::BusinessException;

#[derive(Debug, Error)]
pub enum PackPaymentMethodsServiceError {
    #[error("pack not found")]
    NotFound,

    #[error("model not found")]
    ModelNotFound,

    #[error("invalid data")]
    InvalidData,

    #[error(transparent)]
    Business(#[from] BusinessException),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for PackPaymentMethodsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::ForeignKeyViolation) => Self::NotFound,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
