//! Model Errors

use salvo::http::StatusError;
use tracing::error;

use meet_app::domain::models::ModelsServiceError;

use crate::errors::business_error;

pub(crate) fn into_status_error(error: ModelsServiceError) -> StatusError {
    match error {
        ModelsServiceError::NotFound => StatusError::not_found().brief("Model not found"),
        ModelsServiceError::PersonNotFound => StatusError::not_found().brief("Person not found"),
        ModelsServiceError::AlreadyExists => StatusError::conflict().brief("Model already exists"),
        ModelsServiceError::InvalidReference => {
            StatusError::bad_request().brief("Invalid model reference")
        }
        ModelsServiceError::Business(exception) => business_error(&exception),
        ModelsServiceError::Storage(source) => {
            error!("model file storage failed: {source}");

            StatusError::internal_server_error()
        }
        ModelsServiceError::Sql(source) => {
            error!("model query failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
