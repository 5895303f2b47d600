//! Pack Buy Details Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use meet_app::domain::buy_packs::data::PackBuyDetails;

use crate::{buy_packs::errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PackBuyDetailsResponse {
    pub model_nick_name: String,
    pub pack_title: Option<String>,

    /// Price in USD cents
    pub price: u64,
}

impl From<PackBuyDetails> for PackBuyDetailsResponse {
    fn from(details: PackBuyDetails) -> Self {
        PackBuyDetailsResponse {
            model_nick_name: details.model_nick_name,
            pack_title: details.pack_title,
            price: details.price,
        }
    }
}

/// Pack Buy Details Handler
#[endpoint(
    tags("buy-packs"),
    summary = "Get Pack Buy Details",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Title and price of the pack"),
        (status_code = StatusCode::NOT_FOUND, description = "Pack not found"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Pack has no price"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    nick_name: PathParam<String>,
    pack_number: PathParam<u32>,
    depot: &mut Depot,
) -> Result<Json<PackBuyDetailsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let details = state
        .app
        .buy_packs
        .get_pack_buy_details(&nick_name.into_inner(), pack_number.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(details.into()))
}
