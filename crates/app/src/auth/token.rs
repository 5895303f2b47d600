//! Bearer token issuing and verification.

use jiff::{SignedDuration, Timestamp};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;
use zeroize::Zeroize;

use crate::domain::persons::records::PersonUuid;

/// HMAC key used to sign bearer tokens. Wiped from memory on drop.
#[derive(Clone)]
pub struct JwtSecret(Vec<u8>);

impl JwtSecret {
    #[must_use]
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self(secret.into())
    }

    fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for JwtSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("JwtSecret(..)")
    }
}

impl Drop for JwtSecret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("secret must not be empty")]
    EmptySecret,

    #[error("token lifetime out of range")]
    InvalidLifetime,

    #[error(transparent)]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

/// Claims carried by a bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Person the token was issued to.
    pub sub: Uuid,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    #[must_use]
    pub fn person_uuid(&self) -> PersonUuid {
        PersonUuid::from_uuid(self.sub)
    }
}

/// Sign an HS256 token for `person`, valid for `ttl` from `now`.
///
/// # Errors
///
/// Returns an error if the secret is empty, the lifetime overflows or signing fails.
pub fn issue_token(
    secret: &JwtSecret,
    person: PersonUuid,
    ttl: SignedDuration,
    now: Timestamp,
) -> Result<String, TokenError> {
    if secret.as_bytes().is_empty() {
        return Err(TokenError::EmptySecret);
    }

    let expires_at = now
        .checked_add(ttl)
        .map_err(|_| TokenError::InvalidLifetime)?;

    let claims = Claims {
        sub: person.into_uuid(),
        iat: now.as_second(),
        exp: expires_at.as_second(),
    };

    Ok(encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}

/// Verify signature and expiry of an HS256 token.
///
/// # Errors
///
/// Returns an error if the token is malformed, forged or expired.
pub fn verify_token(secret: &JwtSecret, token: &str) -> Result<Claims, TokenError> {
    if secret.as_bytes().is_empty() {
        return Err(TokenError::EmptySecret);
    }

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )?;

    Ok(data.claims)
}
