//! Pack Payment Method Data

use crate::domain::{exceptions::BusinessException, pack_payment_methods::records::PayPalMethod};

/// Payment options as submitted by the model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackPaymentMethods {
    pub paypal_receipt: PayPalMethod,
    pub paypal_online: PayPalMethod,
}

impl PackPaymentMethods {
    /// Every enabled method needs somewhere to send the money and a price.
    /// Disabled methods may keep whatever the model typed in.
    ///
    /// # Errors
    ///
    /// Returns the first incomplete enabled method.
    pub fn validate(&self) -> Result<(), BusinessException> {
        for (name, method) in [
            ("paypal-receipt", &self.paypal_receipt),
            ("paypal-online", &self.paypal_online),
        ] {
            if !method.enabled {
                continue;
            }

            let has_email = method
                .recipient_email
                .as_deref()
                .is_some_and(|email| email.contains('@'));
            let has_price = method.price.is_some_and(|price| price > 0);

            if !(has_email && has_price) {
                return Err(BusinessException::payment_method_incomplete(name));
            }
        }

        Ok(())
    }
}
