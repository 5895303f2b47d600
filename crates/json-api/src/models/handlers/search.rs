//! Model Search Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use meet_app::domain::models::data::ModelSearch;

use crate::{
    extensions::*,
    models::{errors::into_status_error, profile::ModelResponse},
    state::State,
};

const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ModelSearchResponse {
    /// Matches across every page
    pub total_count: u64,
    pub models: Vec<ModelResponse>,
}

/// Model Search Handler
///
/// Pages through active models, optionally filtered by a nickname fragment.
#[endpoint(
    tags("models"),
    summary = "Search Models",
    responses(
        (status_code = StatusCode::OK, description = "One page of models"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    nick_name: QueryParam<String, false>,
    offset: QueryParam<u32, false>,
    limit: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<ModelSearchResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let page = state
        .app
        .models
        .search_models(ModelSearch {
            nick_name: nick_name.into_inner(),
            offset: offset.into_inner().unwrap_or_default(),
            limit: limit.into_inner().unwrap_or(DEFAULT_PAGE_SIZE),
        })
        .await
        .map_err(into_status_error)?;

    Ok(Json(ModelSearchResponse {
        total_count: page.total_count,
        models: page.models.into_iter().map(Into::into).collect(),
    }))
}
