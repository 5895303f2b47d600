//! Pack Payment Methods Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    pack_payment_methods::{
        data::PackPaymentMethods,
        records::{PackPaymentMethodsRecord, PayPalMethod},
    },
    packs::records::PackUuid,
};

const SAVE_PACK_PAYMENT_METHODS_SQL: &str = include_str!("sql/save_pack_payment_methods.sql");
const FIND_PACK_PAYMENT_METHODS_SQL: &str = include_str!("sql/find_pack_payment_methods.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgPackPaymentMethodsRepository;

impl PgPackPaymentMethodsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Inserts or replaces the payment methods of a pack.
    #[tracing::instrument(
        name = "pack_payment_methods.repository.save",
        skip(self, tx, methods),
        fields(pack_uuid = %pack),
        err
    )]
    pub(crate) async fn save_pack_payment_methods(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        pack: PackUuid,
        methods: &PackPaymentMethods,
    ) -> Result<PackPaymentMethodsRecord, sqlx::Error> {
        let PackPaymentMethods {
            paypal_receipt,
            paypal_online,
        } = methods;

        query_as::<Postgres, PackPaymentMethodsRecord>(SAVE_PACK_PAYMENT_METHODS_SQL)
            .bind(pack.into_uuid())
            .bind(paypal_receipt.enabled)
            .bind(paypal_receipt.recipient_email.as_deref())
            .bind(encode_price(paypal_receipt.price)?)
            .bind(paypal_online.enabled)
            .bind(paypal_online.recipient_email.as_deref())
            .bind(encode_price(paypal_online.price)?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_pack_payment_methods(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        pack: PackUuid,
    ) -> Result<Option<PackPaymentMethodsRecord>, sqlx::Error> {
        query_as::<Postgres, PackPaymentMethodsRecord>(FIND_PACK_PAYMENT_METHODS_SQL)
            .bind(pack.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }
}

fn encode_price(price: Option<u64>) -> Result<Option<i64>, sqlx::Error> {
    price
        .map(i64::try_from)
        .transpose()
        .map_err(|error| sqlx::Error::Encode(Box::new(error)))
}

fn paypal_method(row: &PgRow, prefix: &str) -> sqlx::Result<PayPalMethod> {
    let price: Option<i64> = row.try_get(format!("{prefix}_price").as_str())?;

    Ok(PayPalMethod {
        enabled: row.try_get(format!("{prefix}_enabled").as_str())?,
        recipient_email: row.try_get(format!("{prefix}_recipient_email").as_str())?,
        price: price
            .map(u64::try_from)
            .transpose()
            .map_err(|error| sqlx::Error::ColumnDecode {
                index: format!("{prefix}_price"),
                source: Box::new(error),
            })?,
    })
}

impl<'r> FromRow<'r, PgRow> for PackPaymentMethodsRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            pack_uuid: PackUuid::from_uuid(row.try_get("pack_uuid")?),
            paypal_receipt: paypal_method(row, "paypal_receipt")?,
            paypal_online: paypal_method(row, "paypal_online")?,
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
