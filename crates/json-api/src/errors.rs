//! Shared error mapping.

use meet_app::domain::exceptions::BusinessException;
use salvo::http::StatusError;
use tracing::info;

use crate::observability::{Rejection, record_rejection};

/// Business rule violations become 422 with the machine-readable code in `detail`.
pub(crate) fn business_error(exception: &BusinessException) -> StatusError {
    info!(code = exception.code, details = ?exception.details, "business rule violated");
    record_rejection(Rejection::Business, exception.code);

    StatusError::unprocessable_entity()
        .brief(exception.message)
        .detail(exception.code)
}
