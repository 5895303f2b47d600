//! Payment Order Records

use jiff::Timestamp;
use serde_json::Value;

use crate::{
    domain::{
        models::records::ModelUuid, packs::records::PackUuid, persons::records::PersonUuid,
    },
    uuids::TypedUuid,
};

pub type PaymentOrderUuid = TypedUuid<PaymentOrderRecord>;

/// A pack purchase. Pending until `captured_at` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentOrderRecord {
    pub uuid: PaymentOrderUuid,

    /// Order id assigned by the payment processor.
    pub order_id: String,

    pub person_uuid: PersonUuid,
    pub pack_uuid: PackUuid,
    pub model_uuid: ModelUuid,

    /// Amount in USD cents.
    pub amount: u64,

    pub created_at: Timestamp,
    pub captured_at: Option<Timestamp>,
    pub model_paid_at: Option<Timestamp>,
    pub payment_details: Option<Value>,
}

impl PaymentOrderRecord {
    #[must_use]
    pub fn is_captured(&self) -> bool {
        self.captured_at.is_some()
    }
}
