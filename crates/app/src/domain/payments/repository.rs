//! Payment Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, types::Json};

use crate::domain::{
    models::records::ModelUuid,
    packs::records::PackUuid,
    payments::{
        data::NewPaymentOrder,
        processor::PaymentDetails,
        records::{PaymentOrderRecord, PaymentOrderUuid},
    },
    persons::records::PersonUuid,
};

const CREATE_PAYMENT_ORDER_SQL: &str = include_str!("sql/create_payment_order.sql");
const FIND_PAYMENT_ORDER_BY_ORDER_ID_SQL: &str =
    include_str!("sql/find_payment_order_by_order_id.sql");
const CAPTURE_PAYMENT_ORDER_SQL: &str = include_str!("sql/capture_payment_order.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPaymentOrdersRepository;

impl PgPaymentOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    #[tracing::instrument(
        name = "payments.repository.create_payment_order",
        skip(self, tx, order),
        fields(order_id = %order.order_id, pack_uuid = %order.pack_uuid),
        err
    )]
    pub(crate) async fn create_payment_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: NewPaymentOrder,
    ) -> Result<PaymentOrderRecord, sqlx::Error> {
        let amount =
            i64::try_from(order.amount).map_err(|error| sqlx::Error::Encode(Box::new(error)))?;

        query_as::<Postgres, PaymentOrderRecord>(CREATE_PAYMENT_ORDER_SQL)
            .bind(order.uuid.into_uuid())
            .bind(order.order_id)
            .bind(order.person_uuid.into_uuid())
            .bind(order.pack_uuid.into_uuid())
            .bind(order.model_uuid.into_uuid())
            .bind(amount)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_payment_order_by_order_id(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order_id: &str,
    ) -> Result<Option<PaymentOrderRecord>, sqlx::Error> {
        query_as::<Postgres, PaymentOrderRecord>(FIND_PAYMENT_ORDER_BY_ORDER_ID_SQL)
            .bind(order_id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// Marks a pending order captured. Returns `None` when the order was already captured.
    #[tracing::instrument(
        name = "payments.repository.capture_payment_order",
        skip(self, tx, details),
        err
    )]
    pub(crate) async fn capture_payment_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order_id: &str,
        details: &PaymentDetails,
    ) -> Result<Option<PaymentOrderRecord>, sqlx::Error> {
        query_as::<Postgres, PaymentOrderRecord>(CAPTURE_PAYMENT_ORDER_SQL)
            .bind(order_id)
            .bind(Json(details))
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for PaymentOrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let amount: i64 = row.try_get("amount")?;

        let amount = u64::try_from(amount).map_err(|e| sqlx::Error::ColumnDecode {
            index: "amount".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: PaymentOrderUuid::from_uuid(row.try_get("uuid")?),
            order_id: row.try_get("order_id")?,
            person_uuid: PersonUuid::from_uuid(row.try_get("person_uuid")?),
            pack_uuid: PackUuid::from_uuid(row.try_get("pack_uuid")?),
            model_uuid: ModelUuid::from_uuid(row.try_get("model_uuid")?),
            amount,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            captured_at: row
                .try_get::<Option<SqlxTimestamp>, _>("captured_at")?
                .map(SqlxTimestamp::to_jiff),
            model_paid_at: row
                .try_get::<Option<SqlxTimestamp>, _>("model_paid_at")?
                .map(SqlxTimestamp::to_jiff),
            payment_details: row
                .try_get::<Option<Json<serde_json::Value>>, _>("payment_details")?
                .map(|details| details.0),
        })
    }
}
