//! List Pack Items Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use meet_app::domain::packs::content::PackItemView;

use crate::{extensions::*, packs::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PackItemResponse {
    pub type_code: String,
    pub item_number: u32,

    /// Present only when the item is unlocked for the caller
    pub resource_file_hash: Option<String>,
    pub thumbnail_file_hash: String,
    pub is_locked: bool,
}

impl From<PackItemView> for PackItemResponse {
    fn from(item: PackItemView) -> Self {
        PackItemResponse {
            type_code: item.type_code.to_string(),
            item_number: item.item_number,
            resource_file_hash: item.resource_file_hash,
            thumbnail_file_hash: item.thumbnail_file_hash,
            is_locked: item.is_locked,
        }
    }
}

/// List Pack Items Handler
///
/// Locked items carry only their blurred thumbnail.
#[endpoint(
    tags("packs"),
    summary = "List Pack Items",
    responses(
        (status_code = StatusCode::OK, description = "Pack items"),
        (status_code = StatusCode::FORBIDDEN, description = "Requester not allowed"),
        (status_code = StatusCode::NOT_FOUND, description = "Pack not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    nick_name: PathParam<String>,
    pack_number: PathParam<u32>,
    depot: &mut Depot,
) -> Result<Json<Vec<PackItemResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let items = state
        .app
        .packs
        .get_items_from_pack(
            &nick_name.into_inner(),
            pack_number.into_inner(),
            depot.requester(),
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(items.into_iter().map(Into::into).collect()))
}
