//! Pack Payment Method Errors

use salvo::http::StatusError;
use tracing::error;

use meet_app::domain::pack_payment_methods::PackPaymentMethodsServiceError;

use crate::errors::business_error;

pub(crate) fn into_status_error(error: PackPaymentMethodsServiceError) -> StatusError {
    match error {
        PackPaymentMethodsServiceError::NotFound => StatusError::not_found().brief("Pack not found"),
        PackPaymentMethodsServiceError::ModelNotFound => {
            StatusError::not_found().brief("Model not found")
        }
        PackPaymentMethodsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid payment method data")
        }
        PackPaymentMethodsServiceError::Business(exception) => business_error(&exception),
        PackPaymentMethodsServiceError::Sql(source) => {
            error!("pack payment methods query failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
