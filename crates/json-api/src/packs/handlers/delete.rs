//! Delete Pack Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{extensions::*, packs::errors::into_status_error, state::State};

/// Delete Pack Handler
///
/// Deleted packs keep their number; new packs are numbered after the highest remaining one.
#[endpoint(
    tags("packs"),
    summary = "Delete Pack",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Pack deleted"),
        (status_code = StatusCode::FORBIDDEN, description = "Not allowed to edit this model"),
        (status_code = StatusCode::NOT_FOUND, description = "Pack not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    nick_name: PathParam<String>,
    pack_number: PathParam<u32>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;
    let nick_name = nick_name.into_inner();

    identity.must_be_able_to_edit_model(&nick_name).or_403()?;

    state
        .app
        .packs
        .delete_pack(&nick_name, pack_number.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use meet_app::domain::packs::{MockPacksService, PacksServiceError};

    use crate::test_helpers::{MockServices, model_identity, service_as};

    use super::*;

    fn make_service(packs: MockPacksService) -> Service {
        service_as(
            MockServices::with_packs(packs),
            Some(model_identity("alice")),
            Router::with_path("packs/{nick_name}/{pack_number}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_delete_pack_success() -> TestResult {
        let mut packs = MockPacksService::new();

        packs
            .expect_delete_pack()
            .once()
            .withf(|nick_name, pack_number| nick_name == "alice" && *pack_number == 2)
            .return_once(|_, _| Ok(()));

        let res = TestClient::delete("http://example.com/packs/alice/2")
            .send(&make_service(packs))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_pack_returns_404() -> TestResult {
        let mut packs = MockPacksService::new();

        packs
            .expect_delete_pack()
            .once()
            .return_once(|_, _| Err(PacksServiceError::NotFound));

        let res = TestClient::delete("http://example.com/packs/alice/9")
            .send(&make_service(packs))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_non_numeric_pack_number_is_rejected() -> TestResult {
        let mut packs = MockPacksService::new();

        packs.expect_delete_pack().never();

        let res = TestClient::delete("http://example.com/packs/alice/first")
            .send(&make_service(packs))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
