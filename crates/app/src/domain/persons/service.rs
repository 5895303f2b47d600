//! Persons service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        exceptions::BusinessException,
        persons::{
            data::NewPerson,
            errors::PersonsServiceError,
            records::{PersonRecord, PersonUuid},
            repository::PgPersonsRepository,
        },
        profiles::ProfileCode,
    },
};

#[derive(Debug, Clone)]
pub struct PgPersonsService {
    db: Db,
    repository: PgPersonsRepository,
}

impl PgPersonsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgPersonsRepository::new(),
        }
    }
}

#[async_trait]
impl PersonsService for PgPersonsService {
    async fn find_person(&self, person: PersonUuid) -> Result<PersonRecord, PersonsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let person = self.repository.find_person(&mut tx, person).await?;

        tx.commit().await?;

        Ok(person)
    }

    async fn find_person_by_email(
        &self,
        email: &str,
    ) -> Result<PersonRecord, PersonsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let person = self
            .repository
            .find_person_by_email(&mut tx, email)
            .await?
            .ok_or(PersonsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(person)
    }

    async fn create_person(&self, person: NewPerson) -> Result<PersonRecord, PersonsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        if self
            .repository
            .find_person_by_email(&mut tx, &person.email)
            .await?
            .is_some()
        {
            return Err(PersonsServiceError::Business(
                BusinessException::person_email_not_available(&person.email),
            ));
        }

        let created = self.repository.create_person(&mut tx, person).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn change_profile(
        &self,
        person: PersonUuid,
        profile_code: ProfileCode,
    ) -> Result<PersonRecord, PersonsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let updated = self
            .repository
            .update_profile_code(&mut tx, person, profile_code)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn set_person_active(
        &self,
        person: PersonUuid,
        active: bool,
    ) -> Result<PersonRecord, PersonsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let updated = self.repository.update_active(&mut tx, person, active).await?;

        tx.commit().await?;

        Ok(updated)
    }
}

#[automock]
#[async_trait]
pub trait PersonsService: Send + Sync {
    /// Retrieve a single person.
    async fn find_person(&self, person: PersonUuid) -> Result<PersonRecord, PersonsServiceError>;

    /// Retrieve a person by email, ignoring case.
    async fn find_person_by_email(&self, email: &str)
    -> Result<PersonRecord, PersonsServiceError>;

    /// Creates a person. The email must not be registered yet.
    async fn create_person(&self, person: NewPerson) -> Result<PersonRecord, PersonsServiceError>;

    /// Moves a person to another profile.
    async fn change_profile(
        &self,
        person: PersonUuid,
        profile_code: ProfileCode,
    ) -> Result<PersonRecord, PersonsServiceError>;

    /// Activates or deactivates a person.
    async fn set_person_active(
        &self,
        person: PersonUuid,
        active: bool,
    ) -> Result<PersonRecord, PersonsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::{TestContext, helpers::new_person};

    use super::*;

    #[tokio::test]
    async fn create_person_returns_active_person() -> TestResult {
        let ctx = TestContext::new().await;
        let new = new_person("ana@example.com", ProfileCode::User);
        let uuid = new.uuid;

        let person = ctx.persons.create_person(new).await?;

        assert_eq!(person.uuid, uuid);
        assert_eq!(person.profile_code, ProfileCode::User);
        assert!(person.active);

        Ok(())
    }

    #[tokio::test]
    async fn create_person_with_taken_email_is_business_error() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.persons
            .create_person(new_person("ana@example.com", ProfileCode::User))
            .await?;

        let result = ctx
            .persons
            .create_person(new_person("ANA@example.com", ProfileCode::User))
            .await;

        assert!(
            matches!(
                result,
                Err(PersonsServiceError::Business(ref exception))
                    if exception.code == "person-email-not-available"
            ),
            "expected person-email-not-available, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn find_person_unknown_uuid_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.persons.find_person(PersonUuid::new()).await;

        assert!(
            matches!(result, Err(PersonsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn find_person_by_email_ignores_case() -> TestResult {
        let ctx = TestContext::new().await;
        let created = ctx
            .persons
            .create_person(new_person("Bob@Example.com", ProfileCode::User))
            .await?;

        let found = ctx.persons.find_person_by_email("bob@example.com").await?;

        assert_eq!(found.uuid, created.uuid);

        Ok(())
    }

    #[tokio::test]
    async fn change_profile_and_deactivate_are_persisted() -> TestResult {
        let ctx = TestContext::new().await;
        let created = ctx
            .persons
            .create_person(new_person("carla@example.com", ProfileCode::User))
            .await?;

        ctx.persons
            .change_profile(created.uuid, ProfileCode::Moderator)
            .await?;
        ctx.persons.set_person_active(created.uuid, false).await?;

        let person = ctx.persons.find_person(created.uuid).await?;

        assert_eq!(person.profile_code, ProfileCode::Moderator);
        assert!(!person.active);

        Ok(())
    }
}
