//! Edit About Me Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    models::{errors::into_status_error, profile::ModelResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct EditAboutMeRequest {
    /// `null` or blank clears the text
    pub about_me: Option<String>,
}

/// Edit About Me Handler
#[endpoint(
    tags("models"),
    summary = "Edit About Me",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Profile updated"),
        (status_code = StatusCode::FORBIDDEN, description = "Not allowed to edit this model"),
        (status_code = StatusCode::NOT_FOUND, description = "Model not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    nick_name: PathParam<String>,
    json: JsonBody<EditAboutMeRequest>,
    depot: &mut Depot,
) -> Result<Json<ModelResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;
    let nick_name = nick_name.into_inner();

    identity.must_be_able_to_edit_model(&nick_name).or_403()?;

    let about_me = json
        .into_inner()
        .about_me
        .filter(|text| !text.trim().is_empty());

    let model = state
        .app
        .models
        .edit_about_me(&nick_name, about_me)
        .await
        .map_err(into_status_error)?;

    Ok(Json(model.into()))
}
