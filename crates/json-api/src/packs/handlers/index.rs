//! List Model Packs Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use meet_app::domain::packs::content::PackSummary;

use crate::{extensions::*, packs::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PackSummaryResponse {
    pub pack_number: u32,
    pub title: Option<String>,

    /// Hash of the cover thumbnail; blurred when the pack is locked
    pub cover_image_file_hash: Option<String>,

    /// Whether the requester still has to buy the pack
    pub is_locked: bool,
}

impl From<PackSummary> for PackSummaryResponse {
    fn from(summary: PackSummary) -> Self {
        PackSummaryResponse {
            pack_number: summary.pack_number,
            title: summary.title,
            cover_image_file_hash: summary.cover_image_file_hash,
            is_locked: summary.is_locked,
        }
    }
}

/// List Model Packs Handler
///
/// Lists the packs of a model the caller may see. Anonymous callers see published packs.
#[endpoint(
    tags("packs"),
    summary = "List Model Packs",
    responses(
        (status_code = StatusCode::OK, description = "Visible packs"),
        (status_code = StatusCode::NOT_FOUND, description = "Model not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    nick_name: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<Vec<PackSummaryResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let packs = state
        .app
        .packs
        .get_packs_from_model(&nick_name.into_inner(), depot.requester())
        .await
        .map_err(into_status_error)?;

    Ok(Json(packs.into_iter().map(Into::into).collect()))
}
