//! Create Pack Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{extensions::*, packs::errors::into_status_error, state::State};

/// Pack Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PackCreatedResponse {
    pub uuid: Uuid,

    /// Number assigned to the pack within the model's packs
    pub pack_number: u32,
}

/// Create Pack Handler
#[endpoint(
    tags("packs"),
    summary = "Create Pack",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Pack created"),
        (status_code = StatusCode::FORBIDDEN, description = "Not allowed to edit this model"),
        (status_code = StatusCode::NOT_FOUND, description = "Model not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    nick_name: PathParam<String>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PackCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;
    let nick_name = nick_name.into_inner();

    identity.must_be_able_to_edit_model(&nick_name).or_403()?;

    let pack = state
        .app
        .packs
        .create_new_pack(&nick_name)
        .await
        .map_err(into_status_error)?;

    res.add_header(
        LOCATION,
        format!("/packs/{nick_name}/{}", pack.pack_number),
        true,
    )
    .or_500("failed to set location header")?
    .status_code(StatusCode::CREATED);

    Ok(Json(PackCreatedResponse {
        uuid: pack.uuid.into_uuid(),
        pack_number: pack.pack_number,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use meet_app::{
        auth::Identity,
        domain::packs::{MockPacksService, PacksServiceError},
    };

    use crate::{
        packs::handlers::tests::make_pack,
        test_helpers::{MockServices, model_identity, moderator_identity, service_as},
    };

    use super::*;

    fn make_service(packs: MockPacksService, caller: Identity) -> Service {
        service_as(
            MockServices::with_packs(packs),
            Some(caller),
            Router::with_path("packs/{nick_name}").put(handler),
        )
    }

    #[tokio::test]
    async fn test_model_creates_own_pack() -> TestResult {
        let mut packs = MockPacksService::new();

        packs
            .expect_create_new_pack()
            .once()
            .withf(|nick_name| nick_name == "alice")
            .return_once(|_| Ok(make_pack(3)));

        let mut res = TestClient::put("http://example.com/packs/alice")
            .send(&make_service(packs, model_identity("alice")))
            .await;

        let body: PackCreatedResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/packs/alice/3"));
        assert_eq!(body.pack_number, 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_other_model_is_forbidden() -> TestResult {
        let mut packs = MockPacksService::new();

        packs.expect_create_new_pack().never();

        let res = TestClient::put("http://example.com/packs/alice")
            .send(&make_service(packs, model_identity("bob")))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }

    #[tokio::test]
    async fn test_moderator_creates_for_unknown_model_gets_404() -> TestResult {
        let mut packs = MockPacksService::new();

        packs
            .expect_create_new_pack()
            .once()
            .return_once(|_| Err(PacksServiceError::ModelNotFound));

        let res = TestClient::put("http://example.com/packs/nobody")
            .send(&make_service(packs, moderator_identity()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
