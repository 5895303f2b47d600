//! Add Pack Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use meet_app::domain::files::data::ResourceUploadUrl;

use crate::{extensions::*, packs::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AddPackItemRequest {
    /// One of `img-jpg`, `img-png`, `video-mp4`, `video-ogg`
    pub type_code: String,
    pub is_public: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UploadUrlResponse {
    pub upload_url: String,
    pub file_hash: String,
    pub is_thumbnail: bool,
    pub is_blurred: bool,
}

impl From<ResourceUploadUrl> for UploadUrlResponse {
    fn from(upload: ResourceUploadUrl) -> Self {
        UploadUrlResponse {
            upload_url: upload.upload_url,
            file_hash: upload.file_hash,
            is_thumbnail: upload.is_thumbnail,
            is_blurred: upload.is_blurred,
        }
    }
}

/// Add Pack Item Handler
///
/// Appends an item and returns one upload URL each for the resource and both thumbnails.
#[endpoint(
    tags("packs"),
    summary = "Add Pack Item",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Item added"),
        (status_code = StatusCode::FORBIDDEN, description = "Not allowed to edit this model"),
        (status_code = StatusCode::NOT_FOUND, description = "Pack not found"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Unsupported type code"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    nick_name: PathParam<String>,
    pack_number: PathParam<u32>,
    json: JsonBody<AddPackItemRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<Vec<UploadUrlResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;
    let nick_name = nick_name.into_inner();
    let request = json.into_inner();

    identity.must_be_able_to_edit_model(&nick_name).or_403()?;

    let uploads = state
        .app
        .packs
        .prepare_upload_for_pack_item(
            &nick_name,
            pack_number.into_inner(),
            &request.type_code,
            request.is_public,
        )
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(uploads.into_iter().map(Into::into).collect()))
}
