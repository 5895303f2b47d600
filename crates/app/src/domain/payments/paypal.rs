//! PayPal checkout client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::json;

use super::processor::{PaymentDetails, PaymentProcessor, PaymentProcessorError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Credentials of a PayPal REST app.
#[derive(Debug, Clone)]
pub struct PayPalConfig {
    /// API base, e.g. `"https://api-m.sandbox.paypal.com"`.
    pub base_url: String,
    pub client_id: String,
    pub app_secret: String,
}

#[derive(Debug, Clone)]
pub struct PayPalClient {
    http: Client,
    config: PayPalConfig,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct OrderResponse {
    id: String,
}

impl PayPalClient {
    /// Create a client for the given app.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: PayPalConfig) -> Result<Self, PaymentProcessorError> {
        Ok(Self {
            http: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            config: PayPalConfig {
                base_url: config.base_url.trim_end_matches('/').to_owned(),
                ..config
            },
        })
    }

    async fn access_token(&self) -> Result<String, PaymentProcessorError> {
        let response = self
            .http
            .post(format!("{}/v1/oauth2/token", self.config.base_url))
            .basic_auth(&self.config.client_id, Some(&self.config.app_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let token: TokenResponse = ensure_success(response).await?.json().await?;

        Ok(token.access_token)
    }
}

async fn ensure_success(response: Response) -> Result<Response, PaymentProcessorError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    Err(PaymentProcessorError::UnexpectedResponse(format!(
        "request failed with status {status}: {text}"
    )))
}

/// Formats cents the way PayPal expects amounts, e.g. `1050` as `"10.50"`.
fn format_amount(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

#[async_trait]
impl PaymentProcessor for PayPalClient {
    async fn create_order(
        &self,
        amount: u64,
        currency: &str,
    ) -> Result<String, PaymentProcessorError> {
        let token = self.access_token().await?;

        let body = json!({
            "intent": "CAPTURE",
            "purchase_units": [{
                "amount": {
                    "currency_code": currency,
                    "value": format_amount(amount),
                },
            }],
        });

        let response = self
            .http
            .post(format!("{}/v2/checkout/orders", self.config.base_url))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        let order: OrderResponse = ensure_success(response).await?.json().await?;

        tracing::debug!(order_id = %order.id, "created paypal order");

        Ok(order.id)
    }

    async fn capture_payment(
        &self,
        order_id: &str,
    ) -> Result<PaymentDetails, PaymentProcessorError> {
        let token = self.access_token().await?;

        let response = self
            .http
            .post(format!(
                "{}/v2/checkout/orders/{order_id}/capture",
                self.config.base_url
            ))
            .bearer_auth(token)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        Ok(ensure_success(response).await?.json().await?)
    }

    async fn client_data(&self) -> Result<PaymentDetails, PaymentProcessorError> {
        let mut data = PaymentDetails::new();

        data.insert("clientId".to_string(), self.config.client_id.clone().into());

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn amounts_have_two_decimals() {
        assert_eq!(format_amount(1000), "10.00");
        assert_eq!(format_amount(1050), "10.50");
        assert_eq!(format_amount(7), "0.07");
    }

    #[tokio::test]
    async fn client_data_exposes_only_client_id() -> TestResult {
        let client = PayPalClient::new(PayPalConfig {
            base_url: "https://api-m.sandbox.paypal.com/".to_string(),
            client_id: "client-123".to_string(),
            app_secret: "secret".to_string(),
        })?;

        let data = client.client_data().await?;

        assert_eq!(data.len(), 1);
        assert_eq!(data.get("clientId"), Some(&Value::from("client-123")));

        Ok(())
    }
}
