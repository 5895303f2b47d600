//! Person Errors

use salvo::http::StatusError;
use tracing::error;

use meet_app::domain::{owned_resources::OwnedResourcesServiceError, persons::PersonsServiceError};

use crate::errors::business_error;

pub(crate) fn into_status_error(error: PersonsServiceError) -> StatusError {
    match error {
        PersonsServiceError::NotFound => StatusError::not_found().brief("Person not found"),
        PersonsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Person already exists")
        }
        PersonsServiceError::InvalidData => StatusError::bad_request().brief("Invalid person data"),
        PersonsServiceError::Business(exception) => business_error(&exception),
        PersonsServiceError::Sql(source) => {
            error!("person query failed: {source}");

            StatusError::internal_server_error()
        }
    }
}

pub(crate) fn owned_resources_status_error(error: OwnedResourcesServiceError) -> StatusError {
    match error {
        OwnedResourcesServiceError::InvalidReference => {
            StatusError::not_found().brief("Person not found")
        }
        OwnedResourcesServiceError::Sql(source) => {
            error!("owned resources query failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
