//! Model Profile Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use meet_app::domain::models::records::ModelRecord;

use crate::{extensions::*, models::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ModelResponse {
    pub uuid: Uuid,
    pub nick_name: String,
    pub about_me: Option<String>,

    /// Hash to pass to the download URL endpoint
    pub profile_image_file_hash: Option<String>,
    pub profile_image_thumbnail_file_hash: Option<String>,
}

impl From<ModelRecord> for ModelResponse {
    fn from(model: ModelRecord) -> Self {
        ModelResponse {
            uuid: model.uuid.into_uuid(),
            nick_name: model.nick_name,
            about_me: model.about_me,
            profile_image_file_hash: model.profile_image_file_hash,
            profile_image_thumbnail_file_hash: model.profile_image_thumbnail_file_hash,
        }
    }
}

/// Model Profile Handler
#[endpoint(
    tags("models"),
    summary = "Get Model Profile",
    responses(
        (status_code = StatusCode::OK, description = "Model profile"),
        (status_code = StatusCode::NOT_FOUND, description = "Model not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    nick_name: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ModelResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let model = state
        .app
        .models
        .find_model_by_nick_name(&nick_name.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(model.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use meet_app::domain::models::{MockModelsService, ModelsServiceError};

    use crate::{
        models::handlers::tests::make_model,
        test_helpers::{MockServices, service_as},
    };

    use super::*;

    fn make_service(models: MockModelsService) -> Service {
        service_as(
            MockServices::with_models(models),
            None,
            Router::with_path("models/{nick_name}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_returns_public_profile() -> TestResult {
        let mut models = MockModelsService::new();

        models
            .expect_find_model_by_nick_name()
            .once()
            .withf(|nick_name| nick_name == "alice")
            .return_once(|nick_name| {
                let mut model = make_model(nick_name);
                model.about_me = Some("Hi".to_string());
                model.profile_image_file_hash = Some("abc".to_string());
                Ok(model)
            });

        let mut res = TestClient::get("http://example.com/models/alice")
            .send(&make_service(models))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: ModelResponse = res.take_json().await?;

        assert_eq!(body.nick_name, "alice");
        assert_eq!(body.about_me.as_deref(), Some("Hi"));
        assert_eq!(body.profile_image_file_hash.as_deref(), Some("abc"));

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_model_returns_404() -> TestResult {
        let mut models = MockModelsService::new();

        models
            .expect_find_model_by_nick_name()
            .once()
            .return_once(|_| Err(ModelsServiceError::NotFound));

        let res = TestClient::get("http://example.com/models/nobody")
            .send(&make_service(models))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
