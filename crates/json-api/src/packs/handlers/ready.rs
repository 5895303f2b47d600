//! Ready To Publish Pack Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{extensions::*, packs::errors::into_status_error, state::State};

/// Ready To Publish Pack Handler
///
/// The model flags the pack for review.
#[endpoint(
    tags("packs"),
    summary = "Mark Pack Ready To Publish",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Pack flagged"),
        (status_code = StatusCode::FORBIDDEN, description = "Not allowed to edit this model"),
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
    let nick_name = nick_name.into_inner();

    identity.must_be_able_to_edit_model(&nick_name).or_403()?;

    state
        .app
        .packs
        .ready_to_publish_pack(&nick_name, pack_number.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
