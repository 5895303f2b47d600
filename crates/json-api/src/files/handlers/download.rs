//! File Download URL Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, files::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DownloadUrlResponse {
    pub download_url: String,
}

/// File Download URL Handler
#[endpoint(
    tags("files"),
    summary = "Get File Download URL",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Download URL"),
        (status_code = StatusCode::NOT_FOUND, description = "File not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    hash: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<DownloadUrlResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let download_url = state
        .app
        .files
        .get_download_url(&hash.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(DownloadUrlResponse { download_url }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use meet_app::domain::files::{FilesServiceError, MockFilesService};

    use crate::test_helpers::{MockServices, service_as, user_identity};

    use super::*;

    fn make_service(files: MockFilesService) -> Service {
        service_as(
            MockServices::with_files(files),
            Some(user_identity()),
            Router::with_path("files/{hash}/download-url").get(handler),
        )
    }

    #[tokio::test]
    async fn test_returns_download_url() -> TestResult {
        let mut files = MockFilesService::new();

        files
            .expect_get_download_url()
            .once()
            .withf(|hash| hash == "abc")
            .return_once(|_| Ok("https://cdn.test/abc.jpg".to_string()));

        let mut res = TestClient::get("http://example.com/files/abc/download-url")
            .send(&make_service(files))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: DownloadUrlResponse = res.take_json().await?;

        assert_eq!(body.download_url, "https://cdn.test/abc.jpg");

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_hash_returns_404() -> TestResult {
        let mut files = MockFilesService::new();

        files
            .expect_get_download_url()
            .once()
            .return_once(|_| Err(FilesServiceError::NotFound));

        let res = TestClient::get("http://example.com/files/nope/download-url")
            .send(&make_service(files))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
