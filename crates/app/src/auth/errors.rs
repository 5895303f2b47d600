//! Auth service errors.

use thiserror::Error;

use crate::{
    auth::TokenError,
    domain::{models::ModelsServiceError, persons::PersonsServiceError},
};

#[derive(Debug, Error)]
pub enum AuthServiceError {
    /// The token is malformed, expired, forged or names an unknown person.
    #[error("invalid token")]
    InvalidToken,

    #[error("person is not active")]
    Inactive,

    #[error("token processing error")]
    Token(#[source] TokenError),

    #[error("failed to load person")]
    Persons(#[source] PersonsServiceError),

    #[error("failed to load model")]
    Models(#[from] ModelsServiceError),
}

impl From<PersonsServiceError> for AuthServiceError {
    fn from(error: PersonsServiceError) -> Self {
        match error {
            PersonsServiceError::NotFound => Self::InvalidToken,
            other => Self::Persons(other),
        }
    }
}
