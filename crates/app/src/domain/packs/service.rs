//! Packs service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    database::Db,
    domain::{
        exceptions::BusinessException,
        files::{
            data::{NewFileMetadata, ResourceUploadUrl},
            records::FileUuid,
            repository::PgFilesRepository,
            storage::StorageProvider,
        },
        models::{records::ModelRecord, repository::PgModelsRepository},
        packs::{
            access::AccessResolver,
            content::{PackItemView, PackSummary, assemble_items, assemble_pack_summary},
            data::{NewPack, PackInfo},
            errors::PacksServiceError,
            records::{ItemTypeCode, PackItemRecord, PackRecord, PackUuid},
            repository::PgPacksRepository,
            uploads::UploadPlan,
        },
        persons::records::PersonUuid,
    },
};

#[derive(Clone)]
pub struct PgPacksService {
    db: Db,
    repository: PgPacksRepository,
    models_repository: PgModelsRepository,
    files_repository: PgFilesRepository,
    resolver: AccessResolver,
    storage: Arc<dyn StorageProvider>,
}

impl PgPacksService {
    #[must_use]
    pub fn new(db: Db, resolver: AccessResolver, storage: Arc<dyn StorageProvider>) -> Self {
        Self {
            db,
            repository: PgPacksRepository::new(),
            models_repository: PgModelsRepository::new(),
            files_repository: PgFilesRepository::new(),
            resolver,
            storage,
        }
    }

    async fn model(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        nick_name: &str,
    ) -> Result<ModelRecord, PacksServiceError> {
        self.models_repository
            .find_model_by_nick_name(tx, nick_name)
            .await?
            .ok_or(PacksServiceError::ModelNotFound)
    }

    async fn active_pack(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        nick_name: &str,
        pack_number: u32,
    ) -> Result<(ModelRecord, PackRecord), PacksServiceError> {
        let model = self.model(tx, nick_name).await?;

        let pack = self
            .repository
            .find_active_pack(tx, model.uuid, pack_number)
            .await?
            .ok_or(PacksServiceError::NotFound)?;

        Ok((model, pack))
    }

    async fn lock_active_pack(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        nick_name: &str,
        pack_number: u32,
    ) -> Result<(ModelRecord, PackRecord), PacksServiceError> {
        let model = self.model(tx, nick_name).await?;

        let pack = self
            .repository
            .lock_active_pack(tx, model.uuid, pack_number)
            .await?
            .ok_or(PacksServiceError::NotFound)?;

        Ok((model, pack))
    }

    /// Lock the active pack, apply `change` and save it in one transaction.
    async fn update_pack<F>(
        &self,
        nick_name: &str,
        pack_number: u32,
        change: F,
    ) -> Result<PackRecord, PacksServiceError>
    where
        F: FnOnce(&mut PackRecord) -> Result<(), PacksServiceError> + Send,
    {
        let mut tx = self.db.begin_transaction().await?;

        let (_, mut pack) = self.lock_active_pack(&mut tx, nick_name, pack_number).await?;

        change(&mut pack)?;

        let saved = self.repository.save_pack(&mut tx, &pack).await?;

        tx.commit().await?;

        Ok(saved)
    }
}

#[async_trait]
impl PacksService for PgPacksService {
    async fn create_new_pack(&self, nick_name: &str) -> Result<PackRecord, PacksServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let model = self
            .models_repository
            .lock_model_by_nick_name(&mut tx, nick_name)
            .await?
            .ok_or(PacksServiceError::ModelNotFound)?;

        let pack_number = self
            .repository
            .max_active_pack_number(&mut tx, model.uuid)
            .await?
            .unwrap_or(0)
            + 1;

        let pack = self
            .repository
            .create_pack(
                &mut tx,
                NewPack {
                    uuid: PackUuid::new(),
                    model_uuid: model.uuid,
                    pack_number,
                },
            )
            .await?;

        tx.commit().await?;

        info!(pack_uuid = %pack.uuid, nick_name, pack_number, "created pack");

        Ok(pack)
    }

    async fn delete_pack(&self, nick_name: &str, pack_number: u32) -> Result<(), PacksServiceError> {
        self.update_pack(nick_name, pack_number, |pack| {
            pack.active = false;
            Ok(())
        })
        .await?;

        Ok(())
    }

    async fn delete_pack_item(
        &self,
        nick_name: &str,
        pack_number: u32,
        item_number: u32,
    ) -> Result<(), PacksServiceError> {
        self.update_pack(nick_name, pack_number, |pack| {
            let item = pack
                .active_item_mut(item_number)
                .ok_or(PacksServiceError::ItemNotFound)?;

            item.active = false;

            Ok(())
        })
        .await?;

        Ok(())
    }

    async fn prepare_upload_for_pack_item(
        &self,
        nick_name: &str,
        pack_number: u32,
        type_code: &str,
        is_public: bool,
    ) -> Result<Vec<ResourceUploadUrl>, PacksServiceError> {
        let type_code: ItemTypeCode = type_code.parse().map_err(|_| {
            PacksServiceError::Business(BusinessException::pack_type_code_not_supported(type_code))
        })?;

        let mut tx = self.db.begin_transaction().await?;

        let (model, mut pack) = self.lock_active_pack(&mut tx, nick_name, pack_number).await?;

        let now = Timestamp::now();
        let item_number = pack.next_item_number();
        let plan = UploadPlan::new(
            model.uuid,
            pack.pack_number,
            item_number,
            type_code,
            now,
            Uuid::now_v7(),
        );

        let mut upload_urls = Vec::with_capacity(3);

        for file in plan.files() {
            self.files_repository
                .create_file_metadata(
                    &mut tx,
                    NewFileMetadata {
                        uuid: FileUuid::new(),
                        hash: file.hash.clone(),
                        path: file.path.clone(),
                    },
                )
                .await?;

            upload_urls.push(ResourceUploadUrl {
                upload_url: self.storage.upload_url(&file.path).await?,
                file_hash: file.hash.clone(),
                is_thumbnail: file.is_thumbnail,
                is_blurred: file.is_blurred,
            });
        }

        pack.items.push(PackItemRecord {
            type_code,
            item_number,
            resource_file_hash: plan.resource.hash.clone(),
            thumbnail_file_hash: plan.thumbnail.hash.clone(),
            thumbnail_locked_file_hash: plan.locked_thumbnail.hash.clone(),
            public_item: is_public,
            created_at: now,
            active: true,
        });

        self.repository.save_pack(&mut tx, &pack).await?;

        tx.commit().await?;

        debug!(pack_uuid = %pack.uuid, item_number, %type_code, "prepared pack item upload");

        Ok(upload_urls)
    }

    async fn ready_to_publish_pack(
        &self,
        nick_name: &str,
        pack_number: u32,
    ) -> Result<(), PacksServiceError> {
        self.update_pack(nick_name, pack_number, |pack| {
            pack.ready_to_publish = true;
            pack.ready_to_publish_at = Some(Timestamp::now());
            Ok(())
        })
        .await?;

        Ok(())
    }

    async fn publish_pack(&self, nick_name: &str, pack_number: u32) -> Result<(), PacksServiceError> {
        let pack = self
            .update_pack(nick_name, pack_number, |pack| {
                pack.published = true;
                pack.published_at = Some(Timestamp::now());
                Ok(())
            })
            .await?;

        info!(pack_uuid = %pack.uuid, nick_name, pack_number, "published pack");

        Ok(())
    }

    async fn edit_pack_title(
        &self,
        nick_name: &str,
        pack_number: u32,
        title: String,
    ) -> Result<(), PacksServiceError> {
        self.update_pack(nick_name, pack_number, |pack| {
            pack.title = Some(title);
            Ok(())
        })
        .await?;

        Ok(())
    }

    async fn edit_pack_description(
        &self,
        nick_name: &str,
        pack_number: u32,
        description: String,
    ) -> Result<(), PacksServiceError> {
        self.update_pack(nick_name, pack_number, |pack| {
            pack.description = Some(description);
            Ok(())
        })
        .await?;

        Ok(())
    }

    async fn edit_pack_price(
        &self,
        nick_name: &str,
        pack_number: u32,
        price: Option<u64>,
    ) -> Result<(), PacksServiceError> {
        self.update_pack(nick_name, pack_number, |pack| {
            pack.price = price;
            Ok(())
        })
        .await?;

        Ok(())
    }

    async fn get_pack_info(
        &self,
        nick_name: &str,
        pack_number: u32,
    ) -> Result<PackInfo, PacksServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let (_, pack) = self.active_pack(&mut tx, nick_name, pack_number).await?;

        tx.commit().await?;

        Ok(PackInfo {
            title: pack.title,
            description: pack.description,
        })
    }

    async fn get_items_from_pack(
        &self,
        nick_name: &str,
        pack_number: u32,
        requester: Option<PersonUuid>,
    ) -> Result<Vec<PackItemView>, PacksServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let (model, pack) = self.active_pack(&mut tx, nick_name, pack_number).await?;

        tx.commit().await?;

        let level = self
            .resolver
            .resolve_access_level(&pack, &model, requester)
            .await?;

        Ok(assemble_items(&pack, level))
    }

    async fn get_packs_from_model(
        &self,
        nick_name: &str,
        requester: Option<PersonUuid>,
    ) -> Result<Vec<PackSummary>, PacksServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let model = self.model(&mut tx, nick_name).await?;

        let packs = self
            .repository
            .find_active_packs_by_model(&mut tx, model.uuid)
            .await?;

        tx.commit().await?;

        let requester = match requester {
            Some(person) => Some(self.resolver.load_requester(person).await?),
            None => None,
        };

        let mut summaries = Vec::with_capacity(packs.len());

        for pack in &packs {
            let level = self.resolver.resolve(pack, &model, requester.as_ref()).await?;

            summaries.extend(assemble_pack_summary(pack, level));
        }

        Ok(summaries)
    }

    async fn find_pack(&self, pack: PackUuid) -> Result<PackRecord, PacksServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let pack = self.repository.find_pack(&mut tx, pack).await?;

        tx.commit().await?;

        Ok(pack)
    }
}

#[automock]
#[async_trait]
pub trait PacksService: Send + Sync {
    /// Creates an empty pack numbered after the model's highest active pack.
    async fn create_new_pack(&self, nick_name: &str) -> Result<PackRecord, PacksServiceError>;

    /// Soft-deletes a pack.
    async fn delete_pack(&self, nick_name: &str, pack_number: u32) -> Result<(), PacksServiceError>;

    /// Soft-deletes an item of a pack.
    async fn delete_pack_item(
        &self,
        nick_name: &str,
        pack_number: u32,
        item_number: u32,
    ) -> Result<(), PacksServiceError>;

    /// Adds an item to the pack and returns where its three files should be uploaded.
    async fn prepare_upload_for_pack_item(
        &self,
        nick_name: &str,
        pack_number: u32,
        type_code: &str,
        is_public: bool,
    ) -> Result<Vec<ResourceUploadUrl>, PacksServiceError>;

    async fn ready_to_publish_pack(
        &self,
        nick_name: &str,
        pack_number: u32,
    ) -> Result<(), PacksServiceError>;

    async fn publish_pack(&self, nick_name: &str, pack_number: u32) -> Result<(), PacksServiceError>;

    async fn edit_pack_title(
        &self,
        nick_name: &str,
        pack_number: u32,
        title: String,
    ) -> Result<(), PacksServiceError>;

    async fn edit_pack_description(
        &self,
        nick_name: &str,
        pack_number: u32,
        description: String,
    ) -> Result<(), PacksServiceError>;

    /// Sets the price in USD cents, or clears it.
    async fn edit_pack_price(
        &self,
        nick_name: &str,
        pack_number: u32,
        price: Option<u64>,
    ) -> Result<(), PacksServiceError>;

    async fn get_pack_info(
        &self,
        nick_name: &str,
        pack_number: u32,
    ) -> Result<PackInfo, PacksServiceError>;

    /// Active items of the pack, redacted for the requester.
    async fn get_items_from_pack(
        &self,
        nick_name: &str,
        pack_number: u32,
        requester: Option<PersonUuid>,
    ) -> Result<Vec<PackItemView>, PacksServiceError>;

    /// The model's packs the requester may see, ordered by pack number.
    async fn get_packs_from_model(
        &self,
        nick_name: &str,
        requester: Option<PersonUuid>,
    ) -> Result<Vec<PackSummary>, PacksServiceError>;

    /// Retrieve a pack by uuid, whether active or not.
    async fn find_pack(&self, pack: PackUuid) -> Result<PackRecord, PacksServiceError>;
}

#[cfg(test)]
mod tests {
    use sqlx::query_scalar;
    use testresult::TestResult;

    use crate::{
        domain::{
            files::{
                FilesService,
                storage::{MockStorageProvider, StorageError},
            },
            packs::access::AccessError,
        },
        test::{TestContext, helpers::register_model},
    };

    use super::*;

    #[tokio::test]
    async fn pack_numbers_continue_after_highest_active_pack() -> TestResult {
        let ctx = TestContext::new().await;
        register_model(&ctx, "alice@example.com", "alice").await?;

        let mut numbers = Vec::new();

        for _ in 0..3 {
            numbers.push(ctx.packs.create_new_pack("alice").await?.pack_number);
        }

        assert_eq!(numbers, vec![1, 2, 3]);

        ctx.packs.delete_pack("alice", 2).await?;

        let next = ctx.packs.create_new_pack("alice").await?;

        assert_eq!(next.pack_number, 4);
        assert!(next.items.is_empty());
        assert!(next.active);

        Ok(())
    }

    #[tokio::test]
    async fn concurrent_pack_creation_assigns_distinct_numbers() -> TestResult {
        let ctx = TestContext::new().await;
        register_model(&ctx, "alice@example.com", "alice").await?;

        let (first, second) = tokio::join!(
            ctx.packs.create_new_pack("alice"),
            ctx.packs.create_new_pack("alice"),
        );

        let mut numbers = vec![first?.pack_number, second?.pack_number];
        numbers.sort_unstable();

        assert_eq!(numbers, vec![1, 2]);

        Ok(())
    }

    #[tokio::test]
    async fn pack_number_past_stored_range_is_not_found() -> TestResult {
        let ctx = TestContext::new().await;
        register_model(&ctx, "alice@example.com", "alice").await?;
        ctx.packs.create_new_pack("alice").await?;

        let info = ctx.packs.get_pack_info("alice", u32::MAX).await;

        assert!(
            matches!(info, Err(PacksServiceError::NotFound)),
            "expected NotFound, got {info:?}"
        );

        let edit = ctx
            .packs
            .edit_pack_title("alice", u32::MAX, "Beach".to_string())
            .await;

        assert!(
            matches!(edit, Err(PacksServiceError::NotFound)),
            "expected NotFound, got {edit:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_new_pack_for_unknown_model_is_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx.packs.create_new_pack("nobody").await;

        assert!(
            matches!(result, Err(PacksServiceError::ModelNotFound)),
            "expected ModelNotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn deleted_pack_is_no_longer_addressable() -> TestResult {
        let ctx = TestContext::new().await;
        register_model(&ctx, "alice@example.com", "alice").await?;

        let pack = ctx.packs.create_new_pack("alice").await?;

        ctx.packs.delete_pack("alice", 1).await?;

        let result = ctx.packs.get_pack_info("alice", 1).await;

        assert!(
            matches!(result, Err(PacksServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        let result = ctx.packs.delete_pack("alice", 1).await;

        assert!(matches!(result, Err(PacksServiceError::NotFound)));
        assert!(!ctx.packs.find_pack(pack.uuid).await?.active);

        Ok(())
    }

    #[tokio::test]
    async fn anonymous_viewer_sees_public_item_and_locked_private_item() -> TestResult {
        let ctx = TestContext::new().await;
        register_model(&ctx, "alice@example.com", "alice").await?;

        ctx.packs.create_new_pack("alice").await?;

        let public_urls = ctx
            .packs
            .prepare_upload_for_pack_item("alice", 1, "img-jpg", true)
            .await?;
        let private_urls = ctx
            .packs
            .prepare_upload_for_pack_item("alice", 1, "video-mp4", false)
            .await?;

        ctx.packs.ready_to_publish_pack("alice", 1).await?;
        ctx.packs.publish_pack("alice", 1).await?;

        let items = ctx.packs.get_items_from_pack("alice", 1, None).await?;

        assert_eq!(items.len(), 2);

        assert_eq!(items[0].item_number, 1);
        assert_eq!(
            items[0].resource_file_hash.as_deref(),
            Some(public_urls[0].file_hash.as_str())
        );
        assert_eq!(items[0].thumbnail_file_hash, public_urls[1].file_hash);
        assert!(!items[0].is_locked);

        assert_eq!(items[1].item_number, 2);
        assert_eq!(items[1].type_code, ItemTypeCode::VideoMp4);
        assert_eq!(items[1].resource_file_hash, None);
        assert_eq!(items[1].thumbnail_file_hash, private_urls[2].file_hash);
        assert!(items[1].is_locked);

        Ok(())
    }

    #[tokio::test]
    async fn prepare_upload_records_three_files() -> TestResult {
        let ctx = TestContext::new().await;
        let (_, model) = register_model(&ctx, "alice@example.com", "alice").await?;

        ctx.packs.create_new_pack("alice").await?;

        let urls = ctx
            .packs
            .prepare_upload_for_pack_item("alice", 1, "img-png", false)
            .await?;

        let flags: Vec<_> = urls
            .iter()
            .map(|url| (url.is_thumbnail, url.is_blurred))
            .collect();

        assert_eq!(flags, vec![(false, false), (true, false), (true, true)]);

        for url in &urls {
            let file = ctx.files.find_by_hash(&url.file_hash).await?;
            let prefix = format!("models/{}/packs/pack-1/item-1/", model.uuid);

            assert!(file.path.starts_with(&prefix), "{}", file.path);
            assert!(url.upload_url.ends_with(&file.path), "{}", url.upload_url);
            assert!(!file.uploaded);
        }

        assert!(urls[0].upload_url.ends_with(".png"));

        Ok(())
    }

    #[tokio::test]
    async fn unsupported_type_code_is_business_error() -> TestResult {
        let mut storage = MockStorageProvider::new();

        storage.expect_upload_url().never();

        let ctx = TestContext::with_storage(storage).await;
        register_model(&ctx, "alice@example.com", "alice").await?;

        ctx.packs.create_new_pack("alice").await?;

        let result = ctx
            .packs
            .prepare_upload_for_pack_item("alice", 1, "img-gif", true)
            .await;

        assert!(
            matches!(
                result,
                Err(PacksServiceError::Business(ref exception))
                    if exception.code == "pack-type-code-not-supported"
            ),
            "expected pack-type-code-not-supported, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn storage_failure_leaves_no_item_or_metadata() -> TestResult {
        let mut storage = MockStorageProvider::new();

        storage
            .expect_upload_url()
            .once()
            .return_once(|_| Err(StorageError::UnexpectedResponse("503".to_string())));

        let ctx = TestContext::with_storage(storage).await;
        register_model(&ctx, "alice@example.com", "alice").await?;

        let pack = ctx.packs.create_new_pack("alice").await?;

        let result = ctx
            .packs
            .prepare_upload_for_pack_item("alice", 1, "img-jpg", true)
            .await;

        assert!(matches!(result, Err(PacksServiceError::Storage(_))));

        let files = query_scalar::<Postgres, i64>("SELECT COUNT(*) FROM file_metadata")
            .fetch_one(ctx.db.pool())
            .await?;

        assert_eq!(files, 0);
        assert!(ctx.packs.find_pack(pack.uuid).await?.items.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn deleted_items_are_hidden_from_listing() -> TestResult {
        let ctx = TestContext::new().await;
        let (person, _) = register_model(&ctx, "alice@example.com", "alice").await?;

        ctx.packs.create_new_pack("alice").await?;

        for _ in 0..2 {
            ctx.packs
                .prepare_upload_for_pack_item("alice", 1, "img-jpg", false)
                .await?;
        }

        ctx.packs.delete_pack_item("alice", 1, 1).await?;

        let items = ctx
            .packs
            .get_items_from_pack("alice", 1, Some(person.uuid))
            .await?;

        let numbers: Vec<u32> = items.iter().map(|item| item.item_number).collect();

        assert_eq!(numbers, vec![2]);
        assert!(!items[0].is_locked);

        let result = ctx.packs.delete_pack_item("alice", 1, 1).await;

        assert!(
            matches!(result, Err(PacksServiceError::ItemNotFound)),
            "expected ItemNotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn readding_deleted_last_item_reuses_number_with_fresh_files() -> TestResult {
        let ctx = TestContext::new().await;
        register_model(&ctx, "alice@example.com", "alice").await?;

        let created = ctx.packs.create_new_pack("alice").await?;

        ctx.packs
            .prepare_upload_for_pack_item("alice", 1, "img-png", false)
            .await?;
        let deleted = ctx
            .packs
            .prepare_upload_for_pack_item("alice", 1, "img-png", false)
            .await?;

        ctx.packs.delete_pack_item("alice", 1, 2).await?;

        let readded = ctx
            .packs
            .prepare_upload_for_pack_item("alice", 1, "img-png", false)
            .await?;

        for (old, new) in deleted.iter().zip(&readded) {
            assert_ne!(old.file_hash, new.file_hash);
        }

        let pack = ctx.packs.find_pack(created.uuid).await?;
        let numbers: Vec<u32> = pack.active_items().map(|item| item.item_number).collect();

        assert_eq!(numbers, vec![1, 2]);

        Ok(())
    }

    #[tokio::test]
    async fn edits_are_persisted_on_active_pack() -> TestResult {
        let ctx = TestContext::new().await;
        register_model(&ctx, "alice@example.com", "alice").await?;

        let pack = ctx.packs.create_new_pack("alice").await?;

        ctx.packs
            .edit_pack_title("alice", 1, "Beach day".to_string())
            .await?;
        ctx.packs
            .edit_pack_description("alice", 1, "Sun and sand".to_string())
            .await?;
        ctx.packs.edit_pack_price("alice", 1, Some(1000)).await?;

        let info = ctx.packs.get_pack_info("alice", 1).await?;

        assert_eq!(
            info,
            PackInfo {
                title: Some("Beach day".to_string()),
                description: Some("Sun and sand".to_string()),
            }
        );

        let stored = ctx.packs.find_pack(pack.uuid).await?;

        assert_eq!(stored.price, Some(1000));
        assert!(!stored.published);

        ctx.packs.ready_to_publish_pack("alice", 1).await?;
        ctx.packs.publish_pack("alice", 1).await?;

        let stored = ctx.packs.find_pack(pack.uuid).await?;

        assert!(stored.ready_to_publish && stored.ready_to_publish_at.is_some());
        assert!(stored.published && stored.published_at.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn model_pack_list_depends_on_requester() -> TestResult {
        let ctx = TestContext::new().await;
        let (author, _) = register_model(&ctx, "alice@example.com", "alice").await?;

        ctx.packs.create_new_pack("alice").await?;
        ctx.packs.create_new_pack("alice").await?;
        ctx.packs
            .prepare_upload_for_pack_item("alice", 2, "img-jpg", false)
            .await?;
        ctx.packs.publish_pack("alice", 2).await?;

        let anonymous = ctx.packs.get_packs_from_model("alice", None).await?;

        assert_eq!(anonymous.len(), 1);
        assert_eq!(anonymous[0].pack_number, 2);
        assert!(anonymous[0].is_locked);
        assert!(anonymous[0].cover_image_file_hash.is_some());

        let own = ctx
            .packs
            .get_packs_from_model("alice", Some(author.uuid))
            .await?;

        let numbers: Vec<u32> = own.iter().map(|summary| summary.pack_number).collect();

        assert_eq!(numbers, vec![1, 2]);
        assert!(own.iter().all(|summary| !summary.is_locked));
        assert_eq!(own[0].cover_image_file_hash, None);

        Ok(())
    }

    #[tokio::test]
    async fn unknown_requester_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        register_model(&ctx, "alice@example.com", "alice").await?;

        ctx.packs.create_new_pack("alice").await?;

        let result = ctx
            .packs
            .get_items_from_pack("alice", 1, Some(PersonUuid::new()))
            .await;

        assert!(
            matches!(
                result,
                Err(PacksServiceError::Access(AccessError::RequesterNotFound))
            ),
            "expected RequesterNotFound, got {result:?}"
        );

        Ok(())
    }
}
