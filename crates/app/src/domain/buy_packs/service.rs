//! Buy packs service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::info;

use crate::{
    database::Db,
    domain::{
        buy_packs::{data::PackBuyDetails, errors::BuyPacksServiceError},
        exceptions::BusinessException,
        models::{records::ModelRecord, repository::PgModelsRepository},
        owned_resources::repository::PgOwnedResourcesRepository,
        packs::{records::PackRecord, repository::PgPacksRepository},
        payments::{
            PaymentDetails, PaymentProcessor,
            data::NewPaymentOrder,
            records::{PaymentOrderRecord, PaymentOrderUuid},
            repository::PgPaymentOrdersRepository,
        },
        persons::{records::PersonUuid, repository::PgPersonsRepository},
    },
};

const CURRENCY: &str = "USD";

#[derive(Clone)]
pub struct PgBuyPacksService {
    db: Db,
    persons_repository: PgPersonsRepository,
    models_repository: PgModelsRepository,
    packs_repository: PgPacksRepository,
    owned_resources_repository: PgOwnedResourcesRepository,
    orders_repository: PgPaymentOrdersRepository,
    processor: Arc<dyn PaymentProcessor>,
}

impl PgBuyPacksService {
    #[must_use]
    pub fn new(db: Db, processor: Arc<dyn PaymentProcessor>) -> Self {
        Self {
            db,
            persons_repository: PgPersonsRepository::new(),
            models_repository: PgModelsRepository::new(),
            packs_repository: PgPacksRepository::new(),
            owned_resources_repository: PgOwnedResourcesRepository::new(),
            orders_repository: PgPaymentOrdersRepository::new(),
            processor,
        }
    }

    async fn active_pack(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        nick_name: &str,
        pack_number: u32,
    ) -> Result<(ModelRecord, PackRecord), BuyPacksServiceError> {
        let model = self
            .models_repository
            .find_model_by_nick_name(tx, nick_name)
            .await?
            .ok_or(BuyPacksServiceError::ModelNotFound)?;

        let pack = self
            .packs_repository
            .find_active_pack(tx, model.uuid, pack_number)
            .await?
            .ok_or(BuyPacksServiceError::PackNotFound)?;

        Ok((model, pack))
    }

    async fn pending_order(&self, order_id: &str) -> Result<PaymentOrderRecord, BuyPacksServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let order = self
            .orders_repository
            .find_payment_order_by_order_id(&mut tx, order_id)
            .await?
            .ok_or(BuyPacksServiceError::OrderNotFound)?;

        tx.commit().await?;

        if order.is_captured() {
            return Err(BuyPacksServiceError::Business(
                BusinessException::payment_order_already_captured(order_id),
            ));
        }

        Ok(order)
    }
}

#[async_trait]
impl BuyPacksService for PgBuyPacksService {
    async fn get_payment_client_data(&self) -> Result<PaymentDetails, BuyPacksServiceError> {
        Ok(self.processor.client_data().await?)
    }

    async fn get_pack_buy_details(
        &self,
        nick_name: &str,
        pack_number: u32,
    ) -> Result<PackBuyDetails, BuyPacksServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let (model, pack) = self.active_pack(&mut tx, nick_name, pack_number).await?;

        tx.commit().await?;

        let price = pack.price.ok_or_else(|| {
            BuyPacksServiceError::Business(BusinessException::pack_without_price(pack.uuid))
        })?;

        Ok(PackBuyDetails {
            model_nick_name: model.nick_name,
            pack_title: pack.title,
            price,
        })
    }

    async fn create_buy_pack_order(
        &self,
        person: PersonUuid,
        nick_name: &str,
        pack_number: u32,
    ) -> Result<String, BuyPacksServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let buyer = self
            .persons_repository
            .find_person(&mut tx, person)
            .await
            .map_err(|error| match error {
                sqlx::Error::RowNotFound => BuyPacksServiceError::PersonNotFound,
                other => BuyPacksServiceError::from(other),
            })?;

        let (model, pack) = self.active_pack(&mut tx, nick_name, pack_number).await?;

        if !pack.published {
            return Err(BuyPacksServiceError::Business(
                BusinessException::pack_not_published(pack.uuid),
            ));
        }

        let Some(price) = pack.price else {
            return Err(BuyPacksServiceError::Business(
                BusinessException::pack_without_price(pack.uuid),
            ));
        };

        if self
            .owned_resources_repository
            .person_has_pack(&mut tx, buyer.uuid, pack.uuid)
            .await?
        {
            return Err(BuyPacksServiceError::Business(
                BusinessException::pack_already_owned(buyer.uuid, pack.uuid),
            ));
        }

        tx.commit().await?;

        let order_id = self.processor.create_order(price, CURRENCY).await?;

        let mut tx = self.db.begin_transaction().await?;

        let order = self
            .orders_repository
            .create_payment_order(
                &mut tx,
                NewPaymentOrder {
                    uuid: PaymentOrderUuid::new(),
                    order_id,
                    person_uuid: buyer.uuid,
                    pack_uuid: pack.uuid,
                    model_uuid: model.uuid,
                    amount: price,
                },
            )
            .await?;

        tx.commit().await?;

        info!(
            order_id = %order.order_id,
            person_uuid = %buyer.uuid,
            pack_uuid = %pack.uuid,
            amount = price,
            "created buy pack order"
        );

        Ok(order.order_id)
    }

    async fn capture_pack_payment(
        &self,
        order_id: &str,
    ) -> Result<PaymentOrderRecord, BuyPacksServiceError> {
        self.pending_order(order_id).await?;

        let details = self.processor.capture_payment(order_id).await?;

        let mut tx = self.db.begin_transaction().await?;

        let order = self
            .orders_repository
            .capture_payment_order(&mut tx, order_id, &details)
            .await?
            .ok_or_else(|| {
                BuyPacksServiceError::Business(BusinessException::payment_order_already_captured(
                    order_id,
                ))
            })?;

        self.owned_resources_repository
            .add_pack_to_person(&mut tx, order.person_uuid, order.pack_uuid)
            .await?;

        tx.commit().await?;

        info!(
            order_id,
            person_uuid = %order.person_uuid,
            pack_uuid = %order.pack_uuid,
            "captured pack payment"
        );

        Ok(order)
    }

    async fn find_payment_order(
        &self,
        order_id: &str,
    ) -> Result<PaymentOrderRecord, BuyPacksServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let order = self
            .orders_repository
            .find_payment_order_by_order_id(&mut tx, order_id)
            .await?
            .ok_or(BuyPacksServiceError::OrderNotFound)?;

        tx.commit().await?;

        Ok(order)
    }
}

#[automock]
#[async_trait]
pub trait BuyPacksService: Send + Sync {
    /// Public data the checkout needs from the payment processor.
    async fn get_payment_client_data(&self) -> Result<PaymentDetails, BuyPacksServiceError>;

    /// Price and title of an active pack. Fails when the pack has no price.
    async fn get_pack_buy_details(
        &self,
        nick_name: &str,
        pack_number: u32,
    ) -> Result<PackBuyDetails, BuyPacksServiceError>;

    /// Opens a payment order for a published, priced pack the person does not own yet.
    ///
    /// Returns the processor's order id.
    async fn create_buy_pack_order(
        &self,
        person: PersonUuid,
        nick_name: &str,
        pack_number: u32,
    ) -> Result<String, BuyPacksServiceError>;

    /// Captures a pending order and grants the pack to the buyer.
    async fn capture_pack_payment(
        &self,
        order_id: &str,
    ) -> Result<PaymentOrderRecord, BuyPacksServiceError>;

    async fn find_payment_order(
        &self,
        order_id: &str,
    ) -> Result<PaymentOrderRecord, BuyPacksServiceError>;
}
