//! Publish Pack Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use meet_app::domain::profiles::PermissionCode;

use crate::{extensions::*, packs::errors::into_status_error, state::State};

/// Publish Pack Handler
///
/// Only moderators and administrators publish packs.
#[endpoint(
    tags("packs"),
    summary = "Publish Pack",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Pack published"),
        (status_code = StatusCode::FORBIDDEN, description = "Not allowed to publish"),
        (status_code = StatusCode::NOT_FOUND, description = "Pack not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    nick_name: PathParam<String>,
    pack_number: PathParam<u32>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    identity
        .must_have_permission(PermissionCode::EditAllModels)
        .or_403()?;

    state
        .app
        .packs
        .publish_pack(&nick_name.into_inner(), pack_number.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
