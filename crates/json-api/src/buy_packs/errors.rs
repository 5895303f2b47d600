//! Buy Pack Errors

use salvo::http::StatusError;
use tracing::error;

use meet_app::domain::buy_packs::BuyPacksServiceError;

use crate::errors::business_error;

pub(crate) fn into_status_error(error: BuyPacksServiceError) -> StatusError {
    match error {
        BuyPacksServiceError::PackNotFound => StatusError::not_found().brief("Pack not found"),
        BuyPacksServiceError::ModelNotFound => StatusError::not_found().brief("Model not found"),
        BuyPacksServiceError::PersonNotFound => StatusError::not_found().brief("Person not found"),
        BuyPacksServiceError::OrderNotFound => {
            StatusError::not_found().brief("Payment order not found")
        }
        BuyPacksServiceError::AlreadyExists => {
            StatusError::conflict().brief("Payment order already exists")
        }
        BuyPacksServiceError::InvalidReference => {
            StatusError::bad_request().brief("Invalid payment order reference")
        }
        BuyPacksServiceError::Business(exception) => business_error(&exception),
        BuyPacksServiceError::Payment(source) => {
            error!("payment processor failed: {source}");

            StatusError::internal_server_error()
        }
        BuyPacksServiceError::Sql(source) => {
            error!("buy pack query failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
