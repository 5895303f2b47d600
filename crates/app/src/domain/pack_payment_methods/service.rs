//! Pack payment methods service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::info;

use crate::{
    database::Db,
    domain::{
        models::repository::PgModelsRepository,
        pack_payment_methods::{
            data::PackPaymentMethods, errors::PackPaymentMethodsServiceError,
            records::PackPaymentMethodsRecord, repository::PgPackPaymentMethodsRepository,
        },
        packs::{records::PackRecord, repository::PgPacksRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgPackPaymentMethodsService {
    db: Db,
    repository: PgPackPaymentMethodsRepository,
    models_repository: PgModelsRepository,
    packs_repository: PgPacksRepository,
}

impl PgPackPaymentMethodsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgPackPaymentMethodsRepository::new(),
            models_repository: PgModelsRepository::new(),
            packs_repository: PgPacksRepository::new(),
        }
    }

    async fn active_pack(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        nick_name: &str,
        pack_number: u32,
    ) -> Result<PackRecord, PackPaymentMethodsServiceError> {
        let model = self
            .models_repository
            .find_model_by_nick_name(tx, nick_name)
            .await?
            .ok_or(PackPaymentMethodsServiceError::ModelNotFound)?;

        self.packs_repository
            .lock_active_pack(tx, model.uuid, pack_number)
            .await?
            .ok_or(PackPaymentMethodsServiceError::NotFound)
    }
}

#[async_trait]
impl PackPaymentMethodsService for PgPackPaymentMethodsService {
    async fn save_pack_payment_methods(
        &self,
        nick_name: &str,
        pack_number: u32,
        methods: PackPaymentMethods,
    ) -> Result<PackPaymentMethodsRecord, PackPaymentMethodsServiceError> {
        methods.validate()?;

        let mut tx = self.db.begin_transaction().await?;

        let pack = self.active_pack(&mut tx, nick_name, pack_number).await?;

        let saved = self
            .repository
            .save_pack_payment_methods(&mut tx, pack.uuid, &methods)
            .await?;

        tx.commit().await?;

        info!(
            pack_uuid = %pack.uuid,
            paypal_receipt = saved.paypal_receipt.enabled,
            paypal_online = saved.paypal_online.enabled,
            "saved pack payment methods"
        );

        Ok(saved)
    }

    async fn find_pack_payment_methods(
        &self,
        nick_name: &str,
        pack_number: u32,
    ) -> Result<Option<PackPaymentMethodsRecord>, PackPaymentMethodsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let pack = self.active_pack(&mut tx, nick_name, pack_number).await?;

        let methods = self
            .repository
            .find_pack_payment_methods(&mut tx, pack.uuid)
            .await?;

        tx.commit().await?;

        Ok(methods)
    }
}

#[automock]
#[async_trait]
pub trait PackPaymentMethodsService: Send + Sync {
    /// Replaces how buyers may pay for the model's pack.
    async fn save_pack_payment_methods(
        &self,
        nick_name: &str,
        pack_number: u32,
        methods: PackPaymentMethods,
    ) -> Result<PackPaymentMethodsRecord, PackPaymentMethodsServiceError>;

    /// `None` when the model never configured payment for the pack.
    async fn find_pack_payment_methods(
        &self,
        nick_name: &str,
        pack_number: u32,
    ) -> Result<Option<PackPaymentMethodsRecord>, PackPaymentMethodsServiceError>;
}
