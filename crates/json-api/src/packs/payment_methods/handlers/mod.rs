//! Pack Payment Method Handlers

pub(crate) mod get;
pub(crate) mod save;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use meet_app::domain::pack_payment_methods::{
    data::PackPaymentMethods,
    records::{PackPaymentMethodsRecord, PayPalMethod},
};

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct PayPalMethodBody {
    pub enabled: bool,
    pub recipient_email: Option<String>,

    /// Price in cents
    pub price: Option<u64>,
}

impl From<PayPalMethod> for PayPalMethodBody {
    fn from(method: PayPalMethod) -> Self {
        PayPalMethodBody {
            enabled: method.enabled,
            recipient_email: method.recipient_email,
            price: method.price,
        }
    }
}

impl From<PayPalMethodBody> for PayPalMethod {
    fn from(body: PayPalMethodBody) -> Self {
        PayPalMethod {
            enabled: body.enabled,
            recipient_email: body.recipient_email,
            price: body.price,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PackPaymentMethodsRequest {
    /// Pay the model directly and send the receipt
    #[serde(default)]
    pub paypal_receipt: PayPalMethodBody,

    /// Pay through the PayPal checkout
    #[serde(default)]
    pub paypal_online: PayPalMethodBody,
}

impl From<PackPaymentMethodsRequest> for PackPaymentMethods {
    fn from(request: PackPaymentMethodsRequest) -> Self {
        PackPaymentMethods {
            paypal_receipt: request.paypal_receipt.into(),
            paypal_online: request.paypal_online.into(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct PackPaymentMethodsResponse {
    pub paypal_receipt: PayPalMethodBody,
    pub paypal_online: PayPalMethodBody,

    /// Absent until the model saves the methods once
    pub updated_at: Option<String>,
}

impl From<PackPaymentMethodsRecord> for PackPaymentMethodsResponse {
    fn from(record: PackPaymentMethodsRecord) -> Self {
        PackPaymentMethodsResponse {
            paypal_receipt: record.paypal_receipt.into(),
            paypal_online: record.paypal_online.into(),
            updated_at: Some(record.updated_at.to_string()),
        }
    }
}
