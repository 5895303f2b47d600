//! Edit Pack Title Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, packs::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct EditPackTitleRequest {
    pub title: String,
}

/// Edit Pack Title Handler
#[endpoint(
    tags("packs"),
    summary = "Edit Pack Title",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Title updated"),
        (status_code = StatusCode::FORBIDDEN, description = "Not allowed to edit this model"),
        (status_code = StatusCode::NOT_FOUND, description = "Pack not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    nick_name: PathParam<String>,
    pack_number: PathParam<u32>,
    json: JsonBody<EditPackTitleRequest>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;
    let nick_name = nick_name.into_inner();

    identity.must_be_able_to_edit_model(&nick_name).or_403()?;

    state
        .app
        .packs
        .edit_pack_title(&nick_name, pack_number.into_inner(), json.into_inner().title)
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}
