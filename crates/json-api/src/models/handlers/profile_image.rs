//! Profile Image Upload Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    extensions::*, models::errors::into_status_error, packs::items::create::UploadUrlResponse,
    state::State,
};

/// Profile Image Upload Handler
///
/// Replaces the model's profile image and returns upload URLs for the image and its thumbnail.
#[endpoint(
    tags("models"),
    summary = "Prepare Profile Image Upload",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Upload URLs issued"),
        (status_code = StatusCode::FORBIDDEN, description = "Not allowed to edit this model"),
        (status_code = StatusCode::NOT_FOUND, description = "Model not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    nick_name: PathParam<String>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<Vec<UploadUrlResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;
    let nick_name = nick_name.into_inner();

    identity.must_be_able_to_edit_model(&nick_name).or_403()?;

    let uploads = state
        .app
        .profile_images
        .prepare_upload_for_profile_image(&nick_name)
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(uploads.into_iter().map(Into::into).collect()))
}
