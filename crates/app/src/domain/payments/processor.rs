//! Payment processor abstraction.

use async_trait::async_trait;
use mockall::automock;
use serde_json::{Map, Value};
use thiserror::Error;

/// Free-form JSON object returned by a processor.
pub type PaymentDetails = Map<String, Value>;

/// Errors raised by a payment processor.
#[derive(Debug, Error)]
pub enum PaymentProcessorError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The processor returned a non-2xx response or an unexpected body.
    #[error("unexpected response from payment processor: {0}")]
    UnexpectedResponse(String),
}

#[automock]
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Opens an order for `amount` cents of `currency` and returns the processor's order id.
    async fn create_order(&self, amount: u64, currency: &str)
    -> Result<String, PaymentProcessorError>;

    /// Captures an approved order, returning the processor's payment details.
    async fn capture_payment(&self, order_id: &str)
    -> Result<PaymentDetails, PaymentProcessorError>;

    /// Public configuration the browser needs to render the checkout.
    async fn client_data(&self) -> Result<PaymentDetails, PaymentProcessorError>;
}
