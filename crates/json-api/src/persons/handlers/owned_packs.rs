//! Owned Packs Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use meet_app::domain::packs::records::PackUuid;

use crate::{extensions::*, persons::errors::owned_resources_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OwnedPacksResponse {
    /// Bought packs, oldest purchase first
    pub pack_uuids: Vec<Uuid>,
}

/// Owned Packs Handler
///
/// Packs the caller has bought.
#[endpoint(
    tags("persons"),
    summary = "List Owned Packs",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Owned packs"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Unauthorized"),
        (status_code = StatusCode::NOT_FOUND, description = "Person not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OwnedPacksResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.identity_or_401()?;

    let packs = state
        .app
        .owned_resources
        .list_person_packs(identity.person_uuid)
        .await
        .map_err(owned_resources_status_error)?;

    Ok(Json(OwnedPacksResponse {
        pack_uuids: packs.into_iter().map(PackUuid::into_uuid).collect(),
    }))
}
