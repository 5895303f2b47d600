//! App Router

use salvo::Router;

use crate::{auth, buy_packs, files, models, packs, persons};

/// Routes readable by anonymous visitors. A bearer token, when sent, must still be valid.
fn public_router() -> Router {
    Router::new()
        .hoop(auth::middleware::optional)
        .push(Router::with_path("persons").post(persons::create::handler))
        .push(
            Router::with_path("models")
                .get(models::search::handler)
                .push(Router::with_path("{nick_name}").get(models::profile::handler)),
        )
        .push(
            Router::with_path("packs/{nick_name}")
                .get(packs::index::handler)
                .push(
                    Router::with_path("{pack_number}")
                        .push(Router::with_path("info").get(packs::info::handler))
                        .push(Router::with_path("items").get(packs::items::index::handler)),
                ),
        )
}

fn authenticated_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(
            Router::with_path("models")
                .post(models::register::handler)
                .push(
                    Router::with_path("{nick_name}")
                        .push(Router::with_path("about-me").put(models::about_me::handler))
                        .push(
                            Router::with_path("profile-image")
                                .post(models::profile_image::handler),
                        ),
                ),
        )
        .push(Router::with_path("persons/me/packs").get(persons::owned_packs::handler))
        .push(
            Router::with_path("packs/{nick_name}")
                .put(packs::create::handler)
                .push(
                    Router::with_path("{pack_number}")
                        .delete(packs::delete::handler)
                        .push(Router::with_path("title").put(packs::title::handler))
                        .push(Router::with_path("description").put(packs::description::handler))
                        .push(Router::with_path("price").put(packs::price::handler))
                        .push(Router::with_path("ready-to-publish").post(packs::ready::handler))
                        .push(Router::with_path("publish").post(packs::publish::handler))
                        .push(
                            Router::with_path("payment-methods")
                                .get(packs::payment_methods::get::handler)
                                .put(packs::payment_methods::save::handler),
                        )
                        .push(
                            Router::with_path("items")
                                .post(packs::items::create::handler)
                                .push(
                                    Router::with_path("{item_number}")
                                        .delete(packs::items::delete::handler),
                                ),
                        ),
                ),
        )
        .push(
            Router::with_path("buy-packs")
                .push(Router::with_path("client-data").get(buy_packs::client_data::handler))
                .push(
                    Router::with_path("orders")
                        .post(buy_packs::create_order::handler)
                        .push(
                            Router::with_path("{order_id}/capture")
                                .post(buy_packs::capture::handler),
                        ),
                )
                .push(
                    Router::with_path("{nick_name}/{pack_number}")
                        .get(buy_packs::details::handler),
                ),
        )
        .push(
            Router::with_path("files/{hash}")
                .delete(files::delete::handler)
                .push(Router::with_path("download-url").get(files::download::handler))
                .push(Router::with_path("uploaded").post(files::uploaded::handler)),
        )
}

pub fn app_router() -> Router {
    Router::new()
        .push(public_router())
        .push(authenticated_router())
}

#[cfg(test)]
mod tests {
    use salvo::{affix_state::inject, http::header::AUTHORIZATION, prelude::*, test::TestClient};
    use testresult::TestResult;

    use meet_app::{
        auth::{AuthServiceError, MockAuthService},
        domain::{
            models::{MockModelsService, data::ModelSearchPage},
            packs::MockPacksService,
        },
    };

    use crate::test_helpers::MockServices;

    use super::*;

    fn make_service(services: MockServices) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(services.into_state()))
                .push(app_router()),
        )
    }

    #[tokio::test]
    async fn test_pack_listing_is_open_to_anonymous() -> TestResult {
        let mut packs = MockPacksService::new();

        packs
            .expect_get_packs_from_model()
            .once()
            .return_once(|_, _| Ok(Vec::new()));

        let res = TestClient::get("http://example.com/packs/alice")
            .send(&make_service(MockServices::with_packs(packs)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_model_search_is_open_to_anonymous() -> TestResult {
        let mut models = MockModelsService::new();

        models.expect_search_models().once().return_once(|_| {
            Ok(ModelSearchPage {
                total_count: 0,
                models: Vec::new(),
            })
        });

        let res = TestClient::get("http://example.com/models")
            .send(&make_service(MockServices::with_models(models)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_about_me_requires_token() -> TestResult {
        let mut models = MockModelsService::new();

        models.expect_edit_about_me().never();

        let res = TestClient::put("http://example.com/models/alice/about-me")
            .send(&make_service(MockServices::with_models(models)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_pack_creation_requires_token() -> TestResult {
        let mut packs = MockPacksService::new();

        packs.expect_create_new_pack().never();

        let res = TestClient::put("http://example.com/packs/alice")
            .send(&make_service(MockServices::with_packs(packs)))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_token_is_rejected_on_public_routes() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .return_once(|_| Err(AuthServiceError::InvalidToken));

        let services = MockServices {
            auth,
            ..MockServices::default()
        };

        let res = TestClient::get("http://example.com/packs/alice/1/items")
            .add_header(AUTHORIZATION, "Bearer garbage", true)
            .send(&make_service(services))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
