//! Auth Config

use clap::Args;
use jiff::SignedDuration;
use meet_app::auth::JwtSecret;

/// Bearer token settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// HMAC secret used to sign and verify bearer tokens
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// Lifetime of issued tokens in seconds
    #[arg(long, env = "JWT_TTL_SECONDS", default_value_t = 86_400)]
    pub jwt_ttl_seconds: u32,
}

impl AuthConfig {
    pub(crate) fn secret(&self) -> JwtSecret {
        JwtSecret::new(self.jwt_secret.as_bytes())
    }

    pub(crate) fn token_ttl(&self) -> SignedDuration {
        SignedDuration::from_secs(i64::from(self.jwt_ttl_seconds))
    }
}
