//! Delete File Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use tracing::info;

use meet_app::domain::profiles::PermissionCode;

use crate::{extensions::*, files::errors::into_status_error, state::State};

/// Delete File Handler
///
/// Takedown of a stored file by a moderator. Removes it from storage first, then its metadata.
#[endpoint(
    tags("files"),
    summary = "Delete File",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "File deleted"),
        (status_code = StatusCode::FORBIDDEN, description = "Not allowed to delete files"),
        (status_code = StatusCode::NOT_FOUND, description = "File not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    hash: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    identity
        .must_have_permission(PermissionCode::EditAllModels)
        .or_403()?;

    let hash = hash.into_inner();

    state
        .app
        .files
        .delete_file(&hash)
        .await
        .map_err(into_status_error)?;

    info!(hash = %hash, deleted_by = %identity.person_uuid, "file deleted");

    Ok(StatusCode::OK)
}
