//! Pack Errors

use salvo::http::StatusError;
use tracing::error;

use meet_app::domain::packs::{PacksServiceError, access::AccessError};

use crate::errors::business_error;

pub(crate) fn into_status_error(error: PacksServiceError) -> StatusError {
    match error {
        PacksServiceError::NotFound => StatusError::not_found().brief("Pack not found"),
        PacksServiceError::ModelNotFound => StatusError::not_found().brief("Model not found"),
        PacksServiceError::ItemNotFound => StatusError::not_found().brief("Pack item not found"),
        PacksServiceError::AlreadyExists => StatusError::conflict().brief("Pack already exists"),
        PacksServiceError::InvalidData => StatusError::bad_request().brief("Invalid pack data"),
        PacksServiceError::Business(exception) => business_error(&exception),
        PacksServiceError::Access(AccessError::RequesterNotFound | AccessError::RequesterInactive) => {
            StatusError::forbidden()
        }
        PacksServiceError::Access(source) => {
            error!("failed to resolve pack access: {source}");

            StatusError::internal_server_error()
        }
        PacksServiceError::Storage(source) => {
            error!("storage backend failed: {source}");

            StatusError::internal_server_error()
        }
        PacksServiceError::Sql(source) => {
            error!("pack query failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
