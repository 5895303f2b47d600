//! Capture Buy Pack Payment Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use meet_app::domain::payments::records::PaymentOrderRecord;

use crate::{buy_packs::errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CapturedOrderResponse {
    pub order_id: String,
    pub pack_uuid: Uuid,

    /// Amount in USD cents
    pub amount: u64,

    /// RFC 3339 capture time
    pub captured_at: Option<String>,
}

impl From<PaymentOrderRecord> for CapturedOrderResponse {
    fn from(order: PaymentOrderRecord) -> Self {
        CapturedOrderResponse {
            order_id: order.order_id,
            pack_uuid: order.pack_uuid.into_uuid(),
            amount: order.amount,
            captured_at: order.captured_at.map(|at| at.to_string()),
        }
    }
}

/// Capture Buy Pack Payment Handler
///
/// Captures the caller's order and grants them the pack.
#[endpoint(
    tags("buy-packs"),
    summary = "Capture Buy Pack Payment",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Payment captured"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Order already captured"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    order_id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CapturedOrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;
    let order_id = order_id.into_inner();

    let order = state
        .app
        .buy_packs
        .find_payment_order(&order_id)
        .await
        .map_err(into_status_error)?;

    // other buyers' orders are reported as missing
    if order.person_uuid != identity.person_uuid {
        warn!(order_id = %order_id, "capture attempted by a person other than the buyer");

        return Err(StatusError::not_found().brief("Payment order not found"));
    }

    let captured = state
        .app
        .buy_packs
        .capture_pack_payment(&order_id)
        .await
        .map_err(into_status_error)?;

    Ok(Json(captured.into()))
}
