//! File Errors

use salvo::http::StatusError;
use tracing::error;

use meet_app::domain::files::FilesServiceError;

pub(crate) fn into_status_error(error: FilesServiceError) -> StatusError {
    match error {
        FilesServiceError::NotFound => StatusError::not_found().brief("File not found"),
        FilesServiceError::AlreadyExists => StatusError::conflict().brief("File already exists"),
        FilesServiceError::Storage(source) => {
            error!("storage backend failed: {source}");

            StatusError::internal_server_error()
        }
        FilesServiceError::Sql(source) => {
            error!("file query failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
