//! Models service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::{
        exceptions::BusinessException,
        models::{
            data::{ModelSearch, ModelSearchPage},
            errors::ModelsServiceError,
            records::{ModelRecord, ModelUuid},
            repository::PgModelsRepository,
        },
        persons::{records::PersonUuid, repository::PgPersonsRepository},
        profiles::ProfileCode,
    },
};

/// Page size ceiling for [`ModelsService::search_models`].
pub const MAX_SEARCH_LIMIT: u32 = 100;

/// `ILIKE` pattern matching names that contain `fragment` literally.
fn contains_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);

    pattern.push('%');

    for ch in fragment.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }

        pattern.push(ch);
    }

    pattern.push('%');

    pattern
}

#[derive(Debug, Clone)]
pub struct PgModelsService {
    db: Db,
    repository: PgModelsRepository,
    persons_repository: PgPersonsRepository,
}

impl PgModelsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgModelsRepository::new(),
            persons_repository: PgPersonsRepository::new(),
        }
    }
}

#[async_trait]
impl ModelsService for PgModelsService {
    async fn find_model_by_nick_name(
        &self,
        nick_name: &str,
    ) -> Result<ModelRecord, ModelsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let model = self
            .repository
            .find_model_by_nick_name(&mut tx, nick_name)
            .await?
            .ok_or(ModelsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(model)
    }

    async fn find_model_by_person(
        &self,
        person: PersonUuid,
    ) -> Result<Option<ModelRecord>, ModelsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let model = self.repository.find_model_by_person(&mut tx, person).await?;

        tx.commit().await?;

        Ok(model)
    }

    async fn register_model(
        &self,
        person: PersonUuid,
        nick_name: &str,
    ) -> Result<ModelRecord, ModelsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let person = self
            .persons_repository
            .find_person(&mut tx, person)
            .await
            .map_err(|error| match error {
                sqlx::Error::RowNotFound => ModelsServiceError::PersonNotFound,
                other => ModelsServiceError::from(other),
            })?;

        if !person.active {
            return Err(ModelsServiceError::Business(
                BusinessException::person_is_not_active(&person.email),
            ));
        }

        if let Some(existing) = self
            .repository
            .find_model_by_person(&mut tx, person.uuid)
            .await?
        {
            return Err(ModelsServiceError::Business(
                BusinessException::model_already_registered(person.uuid, &existing.nick_name),
            ));
        }

        if self
            .repository
            .find_model_by_nick_name(&mut tx, nick_name)
            .await?
            .is_some()
        {
            return Err(ModelsServiceError::Business(
                BusinessException::model_nick_name_not_available(nick_name),
            ));
        }

        let model = self
            .repository
            .create_model(&mut tx, ModelUuid::new(), person.uuid, nick_name)
            .await?;

        if person.profile_code == ProfileCode::User {
            self.persons_repository
                .update_profile_code(&mut tx, person.uuid, ProfileCode::Model)
                .await?;
        }

        tx.commit().await?;

        info!(model_uuid = %model.uuid, nick_name, "registered model");

        Ok(model)
    }

    async fn search_models(
        &self,
        search: ModelSearch,
    ) -> Result<ModelSearchPage, ModelsServiceError> {
        let pattern = search
            .nick_name
            .as_deref()
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .map(contains_pattern);
        let limit = search.limit.min(MAX_SEARCH_LIMIT);

        let mut tx = self.db.begin_transaction().await?;

        let total_count = self
            .repository
            .count_models(&mut tx, pattern.as_deref())
            .await?;

        let models = if total_count > 0 && limit > 0 {
            self.repository
                .search_models(&mut tx, pattern.as_deref(), search.offset, limit)
                .await?
        } else {
            Vec::new()
        };

        tx.commit().await?;

        Ok(ModelSearchPage {
            total_count: u64::try_from(total_count).unwrap_or_default(),
            models,
        })
    }

    async fn edit_about_me(
        &self,
        nick_name: &str,
        about_me: Option<String>,
    ) -> Result<ModelRecord, ModelsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let model = self
            .repository
            .set_about_me(&mut tx, nick_name, about_me.as_deref())
            .await?
            .ok_or(ModelsServiceError::NotFound)?;

        tx.commit().await?;

        Ok(model)
    }
}

#[automock]
#[async_trait]
pub trait ModelsService: Send + Sync {
    /// Retrieve a model by its public nickname.
    async fn find_model_by_nick_name(
        &self,
        nick_name: &str,
    ) -> Result<ModelRecord, ModelsServiceError>;

    /// Retrieve the model registered by a person, if any.
    async fn find_model_by_person(
        &self,
        person: PersonUuid,
    ) -> Result<Option<ModelRecord>, ModelsServiceError>;

    /// Registers a person as a model and promotes plain users to the model profile.
    async fn register_model(
        &self,
        person: PersonUuid,
        nick_name: &str,
    ) -> Result<ModelRecord, ModelsServiceError>;

    /// Active models whose nickname contains the fragment, ordered by nickname.
    ///
    /// The limit is capped at [`MAX_SEARCH_LIMIT`].
    async fn search_models(&self, search: ModelSearch)
    -> Result<ModelSearchPage, ModelsServiceError>;

    /// Sets or clears the model's presentation text.
    async fn edit_about_me(
        &self,
        nick_name: &str,
        about_me: Option<String>,
    ) -> Result<ModelRecord, ModelsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::persons::PersonsService,
        test::{
            TestContext,
            helpers::{new_person, register_model},
        },
    };

    use super::*;

    #[tokio::test]
    async fn register_model_promotes_user_to_model_profile() -> TestResult {
        let ctx = TestContext::new().await;
        let person = ctx
            .persons
            .create_person(new_person("alice@example.com", ProfileCode::User))
            .await?;

        let model = ctx.models.register_model(person.uuid, "alice").await?;
        let promoted = ctx.persons.find_person(person.uuid).await?;

        assert_eq!(model.person_uuid, person.uuid);
        assert_eq!(model.nick_name, "alice");
        assert_eq!(promoted.profile_code, ProfileCode::Model);

        Ok(())
    }

    #[tokio::test]
    async fn register_model_keeps_moderator_profile() -> TestResult {
        let ctx = TestContext::new().await;
        let person = ctx
            .persons
            .create_person(new_person("mod@example.com", ProfileCode::Moderator))
            .await?;

        ctx.models.register_model(person.uuid, "moddy").await?;
        let unchanged = ctx.persons.find_person(person.uuid).await?;

        assert_eq!(unchanged.profile_code, ProfileCode::Moderator);

        Ok(())
    }

    #[tokio::test]
    async fn register_model_twice_is_business_error() -> TestResult {
        let ctx = TestContext::new().await;
        let person = ctx
            .persons
            .create_person(new_person("alice@example.com", ProfileCode::User))
            .await?;

        ctx.models.register_model(person.uuid, "alice").await?;

        let result = ctx.models.register_model(person.uuid, "alice-2").await;

        assert!(
            matches!(
                result,
                Err(ModelsServiceError::Business(ref exception))
                    if exception.code == "model-already-registered"
            ),
            "expected model-already-registered, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn register_model_with_taken_nick_name_is_business_error() -> TestResult {
        let ctx = TestContext::new().await;
        let alice = ctx
            .persons
            .create_person(new_person("alice@example.com", ProfileCode::User))
            .await?;
        let bob = ctx
            .persons
            .create_person(new_person("bob@example.com", ProfileCode::User))
            .await?;

        ctx.models.register_model(alice.uuid, "star").await?;

        let result = ctx.models.register_model(bob.uuid, "star").await;

        assert!(
            matches!(
                result,
                Err(ModelsServiceError::Business(ref exception))
                    if exception.code == "model-nickname-not-available"
            ),
            "expected model-nickname-not-available, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn register_model_for_inactive_person_is_business_error() -> TestResult {
        let ctx = TestContext::new().await;
        let person = ctx
            .persons
            .create_person(new_person("gone@example.com", ProfileCode::User))
            .await?;

        ctx.persons.set_person_active(person.uuid, false).await?;

        let result = ctx.models.register_model(person.uuid, "gone").await;

        assert!(
            matches!(
                result,
                Err(ModelsServiceError::Business(ref exception))
                    if exception.code == "person-is-not-active"
            ),
            "expected person-is-not-active, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn find_model_by_unknown_nick_name_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.models.find_model_by_nick_name("nobody").await;

        assert!(
            matches!(result, Err(ModelsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[test]
    fn contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("ann"), "%ann%");
        assert_eq!(contains_pattern("a_b%c\\d"), "%a\\_b\\%c\\\\d%");
    }

    async fn search(
        ctx: &TestContext,
        nick_name: Option<&str>,
        offset: u32,
        limit: u32,
    ) -> TestResult<ModelSearchPage> {
        Ok(ctx
            .models
            .search_models(ModelSearch {
                nick_name: nick_name.map(str::to_string),
                offset,
                limit,
            })
            .await?)
    }

    fn nick_names(page: &ModelSearchPage) -> Vec<&str> {
        page.models
            .iter()
            .map(|model| model.nick_name.as_str())
            .collect()
    }

    #[tokio::test]
    async fn search_models_filters_and_pages_by_nick_name() -> TestResult {
        let ctx = TestContext::new().await;

        for nick in ["anna", "joanna", "ben", "hannah"] {
            register_model(&ctx, &format!("{nick}@example.com"), nick).await?;
        }

        let matching = search(&ctx, Some("ANN"), 0, 10).await?;

        assert_eq!(matching.total_count, 3);
        assert_eq!(nick_names(&matching), vec!["anna", "hannah", "joanna"]);

        let second_page = search(&ctx, Some("ann"), 1, 1).await?;

        assert_eq!(second_page.total_count, 3);
        assert_eq!(nick_names(&second_page), vec!["hannah"]);

        let everyone = search(&ctx, Some("  "), 0, 10).await?;

        assert_eq!(everyone.total_count, 4);

        Ok(())
    }

    #[tokio::test]
    async fn search_models_treats_wildcards_literally_and_skips_inactive() -> TestResult {
        let ctx = TestContext::new().await;

        register_model(&ctx, "under@example.com", "under_score").await?;
        register_model(&ctx, "plain@example.com", "underscore").await?;
        let (gone, _) = register_model(&ctx, "gone@example.com", "under_gone").await?;

        ctx.persons.set_person_active(gone.uuid, false).await?;

        let page = search(&ctx, Some("under_"), 0, 10).await?;

        assert_eq!(page.total_count, 1);
        assert_eq!(nick_names(&page), vec!["under_score"]);

        Ok(())
    }

    #[tokio::test]
    async fn search_models_with_zero_limit_only_counts() -> TestResult {
        let ctx = TestContext::new().await;
        register_model(&ctx, "alice@example.com", "alice").await?;

        let page = search(&ctx, None, 0, 0).await?;

        assert_eq!(page.total_count, 1);
        assert!(page.models.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn edit_about_me_sets_and_clears_text() -> TestResult {
        let ctx = TestContext::new().await;
        register_model(&ctx, "alice@example.com", "alice").await?;

        let edited = ctx
            .models
            .edit_about_me("alice", Some("Sunsets and film".to_string()))
            .await?;

        assert_eq!(edited.about_me.as_deref(), Some("Sunsets and film"));

        let cleared = ctx.models.edit_about_me("alice", None).await?;

        assert_eq!(cleared.about_me, None);

        let missing = ctx.models.edit_about_me("nobody", None).await;

        assert!(
            matches!(missing, Err(ModelsServiceError::NotFound)),
            "expected NotFound, got {missing:?}"
        );

        Ok(())
    }
}
