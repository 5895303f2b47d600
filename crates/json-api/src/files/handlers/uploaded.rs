//! Confirm File Upload Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, files::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct FileUploadedResponse {
    pub hash: String,
    pub uploaded: bool,
}

/// Confirm File Upload Handler
///
/// Called by the client once the file was PUT to its upload URL.
#[endpoint(
    tags("files"),
    summary = "Confirm File Upload",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "File marked as uploaded"),
        (status_code = StatusCode::NOT_FOUND, description = "File not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    hash: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<FileUploadedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let file = state
        .app
        .files
        .confirm_uploaded(&hash.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(FileUploadedResponse {
        hash: file.hash,
        uploaded: file.uploaded,
    }))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use meet_app::domain::files::{
        MockFilesService,
        records::{FileMetadataRecord, FileUuid},
    };

    use crate::test_helpers::{MockServices, service_as, user_identity};

    use super::*;

    #[tokio::test]
    async fn test_marks_file_uploaded() -> TestResult {
        let mut files = MockFilesService::new();

        files
            .expect_confirm_uploaded()
            .once()
            .withf(|hash| hash == "abc")
            .return_once(|hash| {
                Ok(FileMetadataRecord {
                    uuid: FileUuid::new(),
                    hash: hash.to_string(),
                    path: "alice/1/abc.jpg".to_string(),
                    uploaded: true,
                    download_url: None,
                    created_at: Timestamp::UNIX_EPOCH,
                    updated_at: Timestamp::UNIX_EPOCH,
                })
            });

        let service = service_as(
            MockServices::with_files(files),
            Some(user_identity()),
            Router::with_path("files/{hash}/uploaded").post(handler),
        );

        let mut res = TestClient::post("http://example.com/files/abc/uploaded")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: FileUploadedResponse = res.take_json().await?;

        assert!(body.uploaded);
        assert_eq!(body.hash, "abc");

        Ok(())
    }
}
