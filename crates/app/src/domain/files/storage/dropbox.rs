//! Dropbox storage.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::json;
use tokio::sync::Mutex;

use super::{StorageError, StorageKind, StorageProvider};

const TOKEN_URL: &str = "https://api.dropbox.com/oauth2/token";
const API_URL: &str = "https://api.dropboxapi.com/2";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Refresh tokens a little before Dropbox expires them.
const TOKEN_EXPIRY_MARGIN: SignedDuration = SignedDuration::from_secs(60);

/// Credentials for a Dropbox app with offline access.
#[derive(Debug, Clone)]
pub struct DropboxConfig {
    pub app_key: String,
    pub app_secret: String,
    pub refresh_token: String,

    /// Lifetime of temporary upload links.
    pub upload_url_ttl: Duration,
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: Timestamp,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Deserialize)]
struct TemporaryLinkResponse {
    link: String,
}

#[derive(Debug, Deserialize)]
struct SharedLinkResponse {
    url: String,
}

#[derive(Debug, Clone)]
pub struct DropboxStorage {
    http: Client,
    config: DropboxConfig,
    token: Arc<Mutex<Option<CachedToken>>>,
}

impl DropboxStorage {
    /// Create a client for the given app.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: DropboxConfig) -> Result<Self, StorageError> {
        Ok(Self {
            http: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            config,
            token: Arc::new(Mutex::new(None)),
        })
    }

    async fn access_token(&self) -> Result<String, StorageError> {
        let mut cached = self.token.lock().await;

        if let Some(token) = cached.as_ref()
            && token.expires_at > Timestamp::now()
        {
            return Ok(token.access_token.clone());
        }

        let response = self
            .http
            .post(TOKEN_URL)
            .basic_auth(&self.config.app_key, Some(&self.config.app_secret))
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", self.config.refresh_token.as_str()),
            ])
            .send()
            .await?;

        let body: TokenResponse = ensure_success(response).await?.json().await?;

        let expires_at = Timestamp::now()
            .checked_add(SignedDuration::from_secs(body.expires_in) - TOKEN_EXPIRY_MARGIN)
            .unwrap_or_else(|_| Timestamp::now());

        tracing::debug!(%expires_at, "refreshed dropbox access token");

        *cached = Some(CachedToken {
            access_token: body.access_token.clone(),
            expires_at,
        });

        Ok(body.access_token)
    }

    async fn rpc(&self, endpoint: &str, body: serde_json::Value) -> Result<Response, StorageError> {
        let token = self.access_token().await?;

        let response = self
            .http
            .post(format!("{API_URL}/{endpoint}"))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        ensure_success(response).await
    }
}

async fn ensure_success(response: Response) -> Result<Response, StorageError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    Err(StorageError::UnexpectedResponse(format!("{status}: {body}")))
}

/// Dropbox paths are absolute.
fn dropbox_path(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}

/// Shared links point at a preview page unless `raw=1` is requested.
fn raw_link(url: &str) -> String {
    url.replace("dl=0", "raw=1")
}

#[async_trait]
impl StorageProvider for DropboxStorage {
    fn kind(&self) -> StorageKind {
        StorageKind::Dropbox
    }

    async fn upload_url(&self, path: &str) -> Result<String, StorageError> {
        let response = self
            .rpc(
                "files/get_temporary_upload_link",
                json!({
                    "commit_info": { "path": dropbox_path(path) },
                    "duration": self.config.upload_url_ttl.as_secs(),
                }),
            )
            .await?;

        let body: TemporaryLinkResponse = response.json().await?;

        Ok(body.link)
    }

    async fn download_url(&self, path: &str) -> Result<String, StorageError> {
        let response = self
            .rpc(
                "sharing/create_shared_link_with_settings",
                json!({ "path": dropbox_path(path) }),
            )
            .await?;

        let body: SharedLinkResponse = response.json().await?;

        Ok(raw_link(&body.url))
    }

    async fn delete_file(&self, path: &str) -> Result<(), StorageError> {
        self.rpc("files/delete_v2", json!({ "path": dropbox_path(path) }))
            .await?;

        Ok(())
    }
}
