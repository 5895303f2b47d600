//! Save Pack Payment Methods Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use crate::{
    extensions::*,
    packs::payment_methods::{
        PackPaymentMethodsRequest, PackPaymentMethodsResponse, errors::into_status_error,
    },
    state::State,
};

/// Save Pack Payment Methods Handler
///
/// Replaces every payment method of the pack.
#[endpoint(
    tags("packs"),
    summary = "Save Pack Payment Methods",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Payment methods saved"),
        (status_code = StatusCode::FORBIDDEN, description = "Not allowed to edit this model"),
        (status_code = StatusCode::NOT_FOUND, description = "Pack not found"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Enabled method without recipient or price"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    nick_name: PathParam<String>,
    pack_number: PathParam<u32>,
    json: JsonBody<PackPaymentMethodsRequest>,
    depot: &mut Depot,
) -> Result<Json<PackPaymentMethodsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;
    let nick_name = nick_name.into_inner();

    identity.must_be_able_to_edit_model(&nick_name).or_403()?;

    let saved = state
        .app
        .pack_payment_methods
        .save_pack_payment_methods(&nick_name, pack_number.into_inner(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(saved.into()))
}
