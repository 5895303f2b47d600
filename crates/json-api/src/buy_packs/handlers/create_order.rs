//! Create Buy Pack Order Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{buy_packs::errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateOrderRequest {
    pub nick_name: String,
    pub pack_number: u32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderCreatedResponse {
    /// Order id assigned by the payment processor
    pub order_id: String,
}

/// Create Buy Pack Order Handler
///
/// Opens a payment order for the caller. The pack is granted once the order is captured.
#[endpoint(
    tags("buy-packs"),
    summary = "Create Buy Pack Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order created"),
        (status_code = StatusCode::NOT_FOUND, description = "Pack not found"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Pack cannot be bought"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;
    let request = json.into_inner();

    let order_id = state
        .app
        .buy_packs
        .create_buy_pack_order(identity.person_uuid, &request.nick_name, request.pack_number)
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(OrderCreatedResponse { order_id }))
}
