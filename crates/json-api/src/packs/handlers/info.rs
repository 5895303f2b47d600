//! Pack Info Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use meet_app::domain::packs::data::PackInfo;

use crate::{extensions::*, packs::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PackInfoResponse {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl From<PackInfo> for PackInfoResponse {
    fn from(info: PackInfo) -> Self {
        PackInfoResponse {
            title: info.title,
            description: info.description,
        }
    }
}

/// Pack Info Handler
#[endpoint(
    tags("packs"),
    summary = "Get Pack Info",
    responses(
        (status_code = StatusCode::OK, description = "Pack title and description"),
        (status_code = StatusCode::NOT_FOUND, description = "Pack not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    nick_name: PathParam<String>,
    pack_number: PathParam<u32>,
    depot: &mut Depot,
) -> Result<Json<PackInfoResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let info = state
        .app
        .packs
        .get_pack_info(&nick_name.into_inner(), pack_number.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(info.into()))
}
