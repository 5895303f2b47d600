//! Auth Errors

use meet_app::auth::AuthServiceError;
use salvo::http::StatusError;
use tracing::error;

pub(crate) fn into_status_error(error: AuthServiceError) -> StatusError {
    match error {
        AuthServiceError::InvalidToken => StatusError::unauthorized().brief("Invalid bearer token"),
        AuthServiceError::Inactive => StatusError::unauthorized().brief("Account is not active"),
        AuthServiceError::Token(source) => {
            error!("failed to process bearer token: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Persons(source) => {
            error!("failed to load person for bearer token: {source}");

            StatusError::internal_server_error()
        }
        AuthServiceError::Models(source) => {
            error!("failed to load model for bearer token: {source}");

            StatusError::internal_server_error()
        }
    }
}
