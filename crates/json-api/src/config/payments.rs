//! Payments Config

use clap::Args;
use meet_app::domain::payments::PayPalConfig;

/// `PayPal` settings.
#[derive(Debug, Args)]
pub struct PaymentsConfig {
    /// `PayPal` REST API base URL
    #[arg(
        long,
        env = "PAYPAL_BASE_URL",
        default_value = "https://api-m.sandbox.paypal.com"
    )]
    pub paypal_base_url: String,

    /// `PayPal` client id, also handed to the checkout page
    #[arg(long, env = "PAYPAL_CLIENT_ID")]
    pub paypal_client_id: String,

    /// `PayPal` app secret
    #[arg(long, env = "PAYPAL_APP_SECRET", hide_env_values = true)]
    pub paypal_app_secret: String,
}

impl PaymentsConfig {
    pub(crate) fn paypal(&self) -> PayPalConfig {
        PayPalConfig {
            base_url: self.paypal_base_url.clone(),
            client_id: self.paypal_client_id.clone(),
            app_secret: self.paypal_app_secret.clone(),
        }
    }
}
