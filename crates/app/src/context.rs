//! App Context

use std::sync::Arc;

use jiff::SignedDuration;
use thiserror::Error;

use crate::{
    auth::{AuthService, JwtAuthService, JwtSecret},
    database::{self, Db},
    domain::{
        buy_packs::{BuyPacksService, PgBuyPacksService},
        files::{
            FilesService, PgFilesService,
            storage::{StorageError, StorageSettings},
        },
        models::{ModelsService, PgModelsService, PgProfileImagesService, ProfileImagesService},
        owned_resources::{OwnedResourcesService, PgOwnedResourcesService},
        pack_payment_methods::{PackPaymentMethodsService, PgPackPaymentMethodsService},
        packs::{PacksService, PgPacksService, access::AccessResolver},
        payments::{PayPalClient, PayPalConfig, PaymentProcessorError},
        persons::{PersonsService, PgPersonsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to run database migrations")]
    Migrations(#[source] sqlx::migrate::MigrateError),

    #[error("failed to configure file storage")]
    Storage(#[source] StorageError),

    #[error("failed to configure payment processor")]
    Payments(#[source] PaymentProcessorError),
}

/// Everything needed to wire the services together.
#[derive(Debug)]
pub struct AppConfig {
    pub database_url: String,

    /// Apply pending migrations before serving.
    pub run_migrations: bool,

    pub jwt_secret: JwtSecret,
    pub token_ttl: SignedDuration,
    pub storage: StorageSettings,
    pub paypal: PayPalConfig,
}

#[derive(Clone)]
pub struct AppContext {
    pub persons: Arc<dyn PersonsService>,
    pub models: Arc<dyn ModelsService>,
    pub profile_images: Arc<dyn ProfileImagesService>,
    pub owned_resources: Arc<dyn OwnedResourcesService>,
    pub files: Arc<dyn FilesService>,
    pub packs: Arc<dyn PacksService>,
    pub pack_payment_methods: Arc<dyn PackPaymentMethodsService>,
    pub buy_packs: Arc<dyn BuyPacksService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Connect to the database and build every service.
    ///
    /// # Errors
    ///
    /// Returns an error when the database is unreachable, migrations fail, or
    /// the storage or payment clients cannot be built.
    pub async fn from_config(config: AppConfig) -> Result<Self, AppInitError> {
        let pool = database::connect(&config.database_url)
            .await
            .map_err(AppInitError::Database)?;

        if config.run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrations)?;
        }

        let db = Db::new(pool);

        let storage = config.storage.build().map_err(AppInitError::Storage)?;
        let processor = PayPalClient::new(config.paypal).map_err(AppInitError::Payments)?;

        let persons: Arc<dyn PersonsService> = Arc::new(PgPersonsService::new(db.clone()));
        let models: Arc<dyn ModelsService> = Arc::new(PgModelsService::new(db.clone()));
        let owned_resources: Arc<dyn OwnedResourcesService> =
            Arc::new(PgOwnedResourcesService::new(db.clone()));

        let resolver = AccessResolver::new(persons.clone(), owned_resources.clone());

        Ok(Self {
            profile_images: Arc::new(PgProfileImagesService::new(db.clone(), storage.clone())),
            files: Arc::new(PgFilesService::new(db.clone(), storage.clone())),
            packs: Arc::new(PgPacksService::new(db.clone(), resolver, storage)),
            pack_payment_methods: Arc::new(PgPackPaymentMethodsService::new(db.clone())),
            buy_packs: Arc::new(PgBuyPacksService::new(db, Arc::new(processor))),
            auth: Arc::new(JwtAuthService::new(
                config.jwt_secret,
                config.token_ttl,
                persons.clone(),
                models.clone(),
            )),
            persons,
            models,
            owned_resources,
        })
    }
}
