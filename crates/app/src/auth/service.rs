//! Auth service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use mockall::automock;
use tracing::debug;

use crate::{
    auth::{AuthServiceError, Identity, JwtSecret, TokenError, issue_token, verify_token},
    domain::{
        models::ModelsService,
        persons::{PersonsService, records::PersonUuid},
        profiles::permissions_for,
    },
};

#[derive(Clone)]
pub struct JwtAuthService {
    secret: JwtSecret,
    token_ttl: SignedDuration,
    persons: Arc<dyn PersonsService>,
    models: Arc<dyn ModelsService>,
}

impl JwtAuthService {
    #[must_use]
    pub fn new(
        secret: JwtSecret,
        token_ttl: SignedDuration,
        persons: Arc<dyn PersonsService>,
        models: Arc<dyn ModelsService>,
    ) -> Self {
        Self {
            secret,
            token_ttl,
            persons,
            models,
        }
    }
}

#[async_trait]
impl AuthService for JwtAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Identity, AuthServiceError> {
        let claims = verify_token(&self.secret, bearer_token).map_err(|error| {
            debug!(%error, "rejected bearer token");

            match error {
                TokenError::Jwt(_) => AuthServiceError::InvalidToken,
                other => AuthServiceError::Token(other),
            }
        })?;

        let person = self.persons.find_person(claims.person_uuid()).await?;

        if !person.active {
            return Err(AuthServiceError::Inactive);
        }

        let model = self.models.find_model_by_person(person.uuid).await?;

        Ok(Identity {
            person_uuid: person.uuid,
            email: person.email,
            profile_code: person.profile_code,
            permissions: permissions_for(person.profile_code),
            model_nick_name: model.map(|model| model.nick_name),
        })
    }

    fn issue_token(&self, person: PersonUuid) -> Result<String, AuthServiceError> {
        issue_token(&self.secret, person, self.token_ttl, Timestamp::now())
            .map_err(AuthServiceError::Token)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve the identity behind a bearer token. The person must be active.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Identity, AuthServiceError>;

    /// Sign a bearer token for a person.
    fn issue_token(&self, person: PersonUuid) -> Result<String, AuthServiceError>;
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use crate::domain::{
        models::{
            MockModelsService,
            records::{ModelRecord, ModelUuid},
        },
        persons::{MockPersonsService, PersonsServiceError, records::PersonRecord},
        profiles::{PermissionCode, ProfileCode},
    };

    use super::*;

    fn person(profile_code: ProfileCode, active: bool) -> PersonRecord {
        PersonRecord {
            uuid: PersonUuid::new(),
            email: "alice@example.com".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Liddell".to_string(),
            profile_code,
            active,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn service(persons: MockPersonsService, models: MockModelsService) -> JwtAuthService {
        JwtAuthService::new(
            JwtSecret::new("test-secret"),
            SignedDuration::from_hours(1),
            Arc::new(persons),
            Arc::new(models),
        )
    }

    #[tokio::test]
    async fn bearer_resolves_model_identity() -> TestResult {
        let record = person(ProfileCode::Model, true);
        let uuid = record.uuid;

        let mut persons = MockPersonsService::new();
        let mut models = MockModelsService::new();

        persons
            .expect_find_person()
            .once()
            .withf(move |person| *person == uuid)
            .return_once(move |_| Ok(record));
        models
            .expect_find_model_by_person()
            .once()
            .return_once(move |person| {
                Ok(Some(ModelRecord {
                    uuid: ModelUuid::new(),
                    person_uuid: person,
                    nick_name: "alice".to_string(),
                    profile_image_file_hash: None,
                    profile_image_thumbnail_file_hash: None,
                    about_me: None,
                    created_at: Timestamp::UNIX_EPOCH,
                }))
            });

        let service = service(persons, models);
        let token = service.issue_token(uuid)?;

        let identity = service.authenticate_bearer(&token).await?;

        assert_eq!(identity.person_uuid, uuid);
        assert_eq!(identity.model_nick_name.as_deref(), Some("alice"));
        assert!(identity.has_permission(PermissionCode::CreateRoom));

        Ok(())
    }

    #[tokio::test]
    async fn garbage_token_is_invalid() {
        let mut persons = MockPersonsService::new();

        persons.expect_find_person().never();

        let result = service(persons, MockModelsService::new())
            .authenticate_bearer("not-a-jwt")
            .await;

        assert!(
            matches!(result, Err(AuthServiceError::InvalidToken)),
            "expected InvalidToken, got {result:?}"
        );
    }

    #[tokio::test]
    async fn token_for_unknown_person_is_invalid() -> TestResult {
        let mut persons = MockPersonsService::new();

        persons
            .expect_find_person()
            .once()
            .return_once(|_| Err(PersonsServiceError::NotFound));

        let service = service(persons, MockModelsService::new());
        let token = service.issue_token(PersonUuid::new())?;

        let result = service.authenticate_bearer(&token).await;

        assert!(matches!(result, Err(AuthServiceError::InvalidToken)));

        Ok(())
    }

    #[tokio::test]
    async fn inactive_person_is_rejected() -> TestResult {
        let record = person(ProfileCode::User, false);
        let uuid = record.uuid;

        let mut persons = MockPersonsService::new();
        let mut models = MockModelsService::new();

        persons
            .expect_find_person()
            .once()
            .return_once(move |_| Ok(record));
        models.expect_find_model_by_person().never();

        let service = service(persons, models);
        let token = service.issue_token(uuid)?;

        let result = service.authenticate_bearer(&token).await;

        assert!(matches!(result, Err(AuthServiceError::Inactive)));

        Ok(())
    }
}
