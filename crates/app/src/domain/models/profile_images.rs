//! Model profile images.
//!
//! A profile image is a PNG plus its thumbnail. Preparing an upload records
//! both files and points the model at them right away; the client then PUTs
//! the bytes to the returned URLs and confirms each file.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::info;
use uuid::Uuid;

use crate::{
    database::Db,
    domain::{
        files::{
            data::{NewFileMetadata, ResourceUploadUrl},
            records::FileUuid,
            repository::PgFilesRepository,
            storage::StorageProvider,
        },
        models::{
            errors::ModelsServiceError,
            records::{ModelRecord, ModelUuid},
            repository::PgModelsRepository,
        },
        packs::uploads::file_hash,
    },
};

const PROFILE_IMAGE_EXTENSION: &str = "png";

/// Hashes and storage paths for a new profile image.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ProfileImagePlan {
    image_hash: String,
    image_path: String,
    thumbnail_hash: String,
    thumbnail_path: String,
}

impl ProfileImagePlan {
    fn new(model: &ModelRecord, at: Timestamp, nonce: Uuid) -> Self {
        let ModelRecord {
            uuid, nick_name, ..
        } = model;

        let stamp = at.strftime("%Y%m%d%H%M%S");
        let seed = format!("{uuid}-{nick_name}-{stamp}-{}-profile-image", nonce.simple());

        let image_hash = file_hash(&seed);
        let thumbnail_hash = file_hash(&format!("{seed}-thumbnail"));

        Self {
            image_path: profile_path(*uuid, &image_hash),
            thumbnail_path: profile_path(*uuid, &thumbnail_hash),
            image_hash,
            thumbnail_hash,
        }
    }
}

fn profile_path(model: ModelUuid, hash: &str) -> String {
    format!("models/{model}/profile/{hash}.{PROFILE_IMAGE_EXTENSION}")
}

#[derive(Clone)]
pub struct PgProfileImagesService {
    db: Db,
    models_repository: PgModelsRepository,
    files_repository: PgFilesRepository,
    storage: Arc<dyn StorageProvider>,
}

impl PgProfileImagesService {
    #[must_use]
    pub fn new(db: Db, storage: Arc<dyn StorageProvider>) -> Self {
        Self {
            db,
            models_repository: PgModelsRepository::new(),
            files_repository: PgFilesRepository::new(),
            storage,
        }
    }
}

#[async_trait]
impl ProfileImagesService for PgProfileImagesService {
    async fn prepare_upload_for_profile_image(
        &self,
        nick_name: &str,
    ) -> Result<Vec<ResourceUploadUrl>, ModelsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let model = self
            .models_repository
            .lock_model_by_nick_name(&mut tx, nick_name)
            .await?
            .ok_or(ModelsServiceError::NotFound)?;

        let plan = ProfileImagePlan::new(&model, Timestamp::now(), Uuid::now_v7());

        let mut upload_urls = Vec::with_capacity(2);

        for (hash, path, is_thumbnail) in [
            (&plan.image_hash, &plan.image_path, false),
            (&plan.thumbnail_hash, &plan.thumbnail_path, true),
        ] {
            self.files_repository
                .create_file_metadata(
                    &mut tx,
                    NewFileMetadata {
                        uuid: FileUuid::new(),
                        hash: hash.clone(),
                        path: path.clone(),
                    },
                )
                .await?;

            upload_urls.push(ResourceUploadUrl {
                upload_url: self.storage.upload_url(path).await?,
                file_hash: hash.clone(),
                is_thumbnail,
                is_blurred: false,
            });
        }

        self.models_repository
            .set_profile_image(&mut tx, model.uuid, &plan.image_hash, &plan.thumbnail_hash)
            .await?;

        tx.commit().await?;

        info!(model_uuid = %model.uuid, nick_name, "prepared profile image upload");

        Ok(upload_urls)
    }
}

#[automock]
#[async_trait]
pub trait ProfileImagesService: Send + Sync {
    /// Registers a new profile image and thumbnail for the model and returns
    /// where to upload them, image first.
    async fn prepare_upload_for_profile_image(
        &self,
        nick_name: &str,
    ) -> Result<Vec<ResourceUploadUrl>, ModelsServiceError>;
}
