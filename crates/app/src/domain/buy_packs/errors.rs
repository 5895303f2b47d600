//! Buy packs service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::{exceptions::BusinessException, payments::PaymentProcessorError};

#[derive(Debug, Error)]
pub enum BuyPacksServiceError {
    #[error("payment order already exists")]
    AlreadyExists,

    #[error("pack not found")]
    PackNotFound,

    #[error("model not found")]
    ModelNotFound,

    #[error("person not found")]
    PersonNotFound,

    #[error("payment order not found")]
    OrderNotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error(transparent)]
    Business(BusinessException),

    #[error("payment processor error")]
    Payment(#[from] PaymentProcessorError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for BuyPacksServiceError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
