//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use meet_app::auth::AccessDenied;
use salvo::prelude::StatusError;
use tracing::{error, warn};

use crate::observability::{Rejection, record_rejection};

/// Map any error to a logged internal server error.
pub(crate) trait ResultExt<T> {
    fn or_500(self, context: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error()
        })
    }
}

/// Map an authorization failure to 403, keeping the reason in the logs.
pub(crate) trait AccessExt<T> {
    fn or_403(self) -> Result<T, StatusError>;
}

impl<T> AccessExt<T> for Result<T, AccessDenied> {
    fn or_403(self) -> Result<T, StatusError> {
        self.map_err(|denied| {
            warn!(reason = %denied.reason, "access denied");
            record_rejection(Rejection::Forbidden, "access-denied");

            StatusError::forbidden()
        })
    }
}
