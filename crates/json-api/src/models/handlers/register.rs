//! Register Model Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{extensions::*, models::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RegisterModelRequest {
    pub nick_name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ModelRegisteredResponse {
    pub uuid: Uuid,
    pub nick_name: String,
}

/// Register Model Handler
///
/// Registers the caller as a model under the requested nickname.
#[endpoint(
    tags("models"),
    summary = "Register Model",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Model registered"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Already a model or nickname taken"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<RegisterModelRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ModelRegisteredResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;
    let nick_name = json.into_inner().nick_name;

    if nick_name.is_empty() || nick_name.contains('/') {
        return Err(StatusError::bad_request().brief("Invalid nickname"));
    }

    let model = state
        .app
        .models
        .register_model(identity.person_uuid, &nick_name)
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/packs/{}", model.nick_name), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(ModelRegisteredResponse {
        uuid: model.uuid.into_uuid(),
        nick_name: model.nick_name,
    }))
}
