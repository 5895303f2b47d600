//! Create Person Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use meet_app::domain::{
    persons::{data::NewPerson, records::PersonUuid},
    profiles::ProfileCode,
};

use crate::{extensions::*, persons::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreatePersonRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PersonCreatedResponse {
    pub uuid: Uuid,
}

/// Create Person Handler
///
/// Signs up a plain user. Other profiles are assigned from the command line.
#[endpoint(
    tags("persons"),
    summary = "Create Person",
    responses(
        (status_code = StatusCode::CREATED, description = "Person created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Email not available"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreatePersonRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<PersonCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    if request.email.trim().is_empty() {
        return Err(StatusError::bad_request().brief("Email must not be empty"));
    }

    let person = state
        .app
        .persons
        .create_person(NewPerson {
            uuid: PersonUuid::new(),
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            profile_code: ProfileCode::User,
        })
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/persons/{}", person.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(PersonCreatedResponse {
        uuid: person.uuid.into_uuid(),
    }))
}
