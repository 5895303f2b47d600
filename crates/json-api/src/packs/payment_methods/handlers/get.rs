//! Get Pack Payment Methods Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*,
    packs::payment_methods::{PackPaymentMethodsResponse, errors::into_status_error},
    state::State,
};

/// Get Pack Payment Methods Handler
///
/// Every method reads as disabled until the model saves them.
#[endpoint(
    tags("packs"),
    summary = "Get Pack Payment Methods",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Payment methods"),
        (status_code = StatusCode::FORBIDDEN, description = "Not allowed to edit this model"),
        (status_code = StatusCode::NOT_FOUND, description = "Pack not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    nick_name: PathParam<String>,
    pack_number: PathParam<u32>,
    depot: &mut Depot,
) -> Result<Json<PackPaymentMethodsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;
    let nick_name = nick_name.into_inner();

    identity.must_be_able_to_edit_model(&nick_name).or_403()?;

    let methods = state
        .app
        .pack_payment_methods
        .find_pack_payment_methods(&nick_name, pack_number.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(methods.map(Into::into).unwrap_or_default()))
}
