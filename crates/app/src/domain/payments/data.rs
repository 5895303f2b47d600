//! Payment Order Data

use crate::domain::{
    models::records::ModelUuid,
    packs::records::PackUuid,
    payments::records::PaymentOrderUuid,
    persons::records::PersonUuid,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPaymentOrder {
    pub uuid: PaymentOrderUuid,
    pub order_id: String,
    pub person_uuid: PersonUuid,
    pub pack_uuid: PackUuid,
    pub model_uuid: ModelUuid,
    pub amount: u64,
}
