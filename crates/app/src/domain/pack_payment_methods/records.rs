//! Pack Payment Method Records

use jiff::Timestamp;

use crate::domain::packs::records::PackUuid;

/// One PayPal payment option for a pack. Prices are in cents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayPalMethod {
    pub enabled: bool,
    pub recipient_email: Option<String>,
    pub price: Option<u64>,
}

/// How a buyer may pay for a pack.
#[derive(Debug, Clone, PartialEq)]
pub struct PackPaymentMethodsRecord {
    pub pack_uuid: PackUuid,

    /// The buyer pays the model directly and sends the receipt.
    pub paypal_receipt: PayPalMethod,

    /// The buyer pays through the PayPal checkout.
    pub paypal_online: PayPalMethod,

    pub updated_at: Timestamp,
}
