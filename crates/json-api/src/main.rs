//! Meet JSON API Server

use std::{process, sync::Arc};

use salvo::{
    affix_state::inject,
    oapi::{
        OpenApi,
        security::{Http, HttpAuthScheme, SecurityScheme},
        swagger_ui::SwaggerUi,
    },
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use meet_app::context::AppContext;

use crate::{config::ServerConfig, observability::Observability, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod auth;
mod buy_packs;
mod config;
mod errors;
mod extensions;
mod files;
mod healthcheck;
mod models;
mod observability;
mod packs;
mod persons;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Full routing tree: probes, API routes and their OpenAPI document.
fn service_router(state: Arc<State>) -> Router {
    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(observability::request_logging)
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(router::app_router());

    let doc = OpenApi::new("Meet API", env!("CARGO_PKG_VERSION"))
        .add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
        .merge_router(&router);

    router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"))
}

/// Exits with status 1 when configuration or startup fails.
#[tokio::main]
pub async fn main() {
    // .env first, then flags and environment
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    let telemetry = Observability::init(&config.logging, &config.observability)
        .unwrap_or_else(|init_error| {
            #[expect(
                clippy::print_stderr,
                reason = "logging failed to initialize, must use eprintln"
            )]
            {
                eprintln!("Observability error: {init_error}");
            }

            process::exit(1);
        });

    let app_config = match config.app_config() {
        Ok(app_config) => app_config,
        Err(config_error) => {
            error!("invalid configuration: {config_error}");

            process::exit(1);
        }
    };

    let addr = config.socket_addr();
    let shutdown_grace = config.server.shutdown_grace();

    info!("Starting server on {addr}");

    let listener = TcpListener::new(addr).bind().await;

    let app = match AppContext::from_config(app_config).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let router = service_router(State::from_app_context(app));

    let server = Server::new(listener);

    let handle = server.handle();

    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle, shutdown_grace).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(router).await;

    telemetry.shutdown();
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::Value;
    use testresult::TestResult;

    use crate::test_helpers::MockServices;

    use super::*;

    #[tokio::test]
    async fn openapi_document_lists_pack_routes() -> TestResult {
        let service = Service::new(service_router(MockServices::default().into_state()));

        let mut res = TestClient::get("http://example.com/api-doc/openapi.json")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let doc: Value = res.take_json().await?;
        let paths = doc
            .get("paths")
            .and_then(Value::as_object)
            .ok_or("document has no paths")?;

        for path in [
            "/packs/{nick_name}",
            "/packs/{nick_name}/{pack_number}/items",
            "/buy-packs/orders/{order_id}/capture",
            "/files/{hash}/download-url",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }

        Ok(())
    }
}
