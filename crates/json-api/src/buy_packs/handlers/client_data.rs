//! Payment Client Data Handler

use std::sync::Arc;

use salvo::prelude::*;
use serde_json::Value;

use crate::{buy_packs::errors::into_status_error, extensions::*, state::State};

/// Payment Client Data Handler
///
/// Public values the checkout widget needs, such as the processor's client id.
#[endpoint(
    tags("buy-packs"),
    summary = "Get Payment Client Data",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Client data"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Value>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let data = state
        .app
        .buy_packs
        .get_payment_client_data()
        .await
        .map_err(into_status_error)?;

    Ok(Json(Value::Object(data)))
}
