//! Auth middleware.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};

use crate::{auth::into_status_error, extensions::*, state::State};

/// Rejects requests without a valid bearer token.
#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if resolve_caller(req, depot, res, true).await {
        ctrl.call_next(req, depot, res).await;
    } else {
        ctrl.skip_rest();
    }
}

/// Authenticates the caller when a bearer token is sent, and lets anonymous requests through.
#[salvo::handler]
pub(crate) async fn optional(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if resolve_caller(req, depot, res, false).await {
        ctrl.call_next(req, depot, res).await;
    } else {
        ctrl.skip_rest();
    }
}

/// Puts the caller's identity in the depot. Returns false once a rejection has been rendered.
async fn resolve_caller(
    req: &Request,
    depot: &mut Depot,
    res: &mut Response,
    required: bool,
) -> bool {
    if !required && req.headers().get(AUTHORIZATION).is_none() {
        return true;
    }

    let Some(token) = extract_bearer_token(req) else {
        res.render(StatusError::unauthorized().brief("Missing or invalid Authorization header"));

        return false;
    };

    let state = match depot.obtain_or_500::<Arc<State>>() {
        Ok(state) => state.clone(),
        Err(status) => {
            res.render(status);

            return false;
        }
    };

    match state.app.auth.authenticate_bearer(token).await {
        Ok(identity) => {
            depot.insert_identity(identity);

            true
        }
        Err(error) => {
            res.render(into_status_error(error));

            false
        }
    }
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}

#[cfg(test)]
mod tests {
    use meet_app::auth::{AuthServiceError, Identity, MockAuthService};
    use salvo::{
        affix_state::inject,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use crate::test_helpers::{MockServices, model_identity, user_identity};

    use super::*;

    const PACKS_URL: &str = "http://example.com/packs/alice";

    /// Answers with the nick the caller may edit, `-` for plain users, `anonymous` without a caller.
    #[salvo::handler]
    async fn whoami(depot: &mut Depot, res: &mut Response) {
        let body = match depot.identity_or_401() {
            Ok(identity) => identity
                .model_nick_name
                .clone()
                .unwrap_or_else(|| "-".to_string()),
            Err(_) => "anonymous".to_string(),
        };

        res.render(body);
    }

    fn guarded(auth: MockAuthService, required: bool) -> Service {
        let state = MockServices {
            auth,
            ..MockServices::default()
        }
        .into_state();

        let guard = Router::new().hoop(inject(state));
        let guard = if required {
            guard.hoop(handler)
        } else {
            guard.hoop(optional)
        };

        Service::new(guard.push(Router::with_path("packs/{nick_name}").get(whoami)))
    }

    fn accepting(token: &'static str, identity: Identity) -> MockAuthService {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .withf(move |sent| sent == token)
            .return_once(move |_| Ok(identity));

        auth
    }

    #[tokio::test]
    async fn malformed_authorization_headers_never_reach_the_auth_service() -> TestResult {
        for header in [None, Some("Basic YWxpY2U6cHc="), Some("Bearer"), Some("Bearer   ")] {
            let mut auth = MockAuthService::new();

            auth.expect_authenticate_bearer().never();

            let mut req = TestClient::get(PACKS_URL);

            if let Some(value) = header {
                req = req.add_header(AUTHORIZATION, value, true);
            }

            let res = req.send(&guarded(auth, true)).await;

            assert_eq!(
                res.status_code,
                Some(StatusCode::UNAUTHORIZED),
                "header {header:?}"
            );
        }

        Ok(())
    }

    #[tokio::test]
    async fn model_token_exposes_editable_nick() -> TestResult {
        let auth = accepting("model-token", model_identity("alice"));

        let mut res = TestClient::get(PACKS_URL)
            .add_header(AUTHORIZATION, "bearer model-token", true)
            .send(&guarded(auth, true))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "alice");

        Ok(())
    }

    #[tokio::test]
    async fn user_token_has_no_model() -> TestResult {
        let auth = accepting("user-token", user_identity());

        let mut res = TestClient::get(PACKS_URL)
            .add_header(AUTHORIZATION, "Bearer user-token", true)
            .send(&guarded(auth, true))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "-");

        Ok(())
    }

    #[tokio::test]
    async fn deactivated_person_is_rejected() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .return_once(|_| Err(AuthServiceError::Inactive));

        let res = TestClient::get(PACKS_URL)
            .add_header(AUTHORIZATION, "Bearer stale-token", true)
            .send(&guarded(auth, true))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }

    #[tokio::test]
    async fn anonymous_visitor_browses_public_routes() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer().never();

        let mut res = TestClient::get(PACKS_URL)
            .send(&guarded(auth, false))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await?, "anonymous");

        Ok(())
    }

    #[tokio::test]
    async fn forged_token_fails_even_on_public_routes() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .withf(|sent| sent == "forged")
            .return_once(|_| Err(AuthServiceError::InvalidToken));

        let res = TestClient::get(PACKS_URL)
            .add_header(AUTHORIZATION, "Bearer forged", true)
            .send(&guarded(auth, false))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
