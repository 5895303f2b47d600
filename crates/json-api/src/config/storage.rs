//! Storage Config

use std::time::Duration;

use clap::{Args, ValueEnum};
use meet_app::domain::files::storage::{DropboxConfig, S3Config, StorageSettings};
use thiserror::Error;

/// Storage backend selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StorageProviderKind {
    /// S3 compatible object storage.
    S3,

    /// Dropbox app folder.
    Dropbox,
}

/// Storage settings that are missing for the selected provider.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageConfigError {
    /// A provider specific variable was not set.
    #[error("{0} is required when STORAGE_PROVIDER={1}")]
    Missing(&'static str, &'static str),
}

/// File storage settings.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Storage backend (s3, dropbox)
    #[arg(long, env = "STORAGE_PROVIDER", value_enum, default_value_t = StorageProviderKind::S3)]
    pub storage_provider: StorageProviderKind,

    /// Lifetime of upload links in seconds
    #[arg(long, env = "STORAGE_UPLOAD_URL_TTL_SECONDS", default_value_t = 3_600)]
    pub upload_url_ttl_seconds: u64,

    /// S3 endpoint, e.g. `https://s3.eu-west-1.amazonaws.com`
    #[arg(long, env = "S3_ENDPOINT")]
    pub s3_endpoint: Option<String>,

    /// S3 region
    #[arg(long, env = "S3_REGION", default_value = "us-east-1")]
    pub s3_region: String,

    /// S3 bucket holding every pack file
    #[arg(long, env = "S3_BUCKET")]
    pub s3_bucket: Option<String>,

    /// S3 access key id
    #[arg(long, env = "S3_ACCESS_KEY_ID", hide_env_values = true)]
    pub s3_access_key_id: Option<String>,

    /// S3 secret access key
    #[arg(long, env = "S3_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub s3_secret_access_key: Option<String>,

    /// Dropbox app key
    #[arg(long, env = "DROPBOX_APP_KEY")]
    pub dropbox_app_key: Option<String>,

    /// Dropbox app secret
    #[arg(long, env = "DROPBOX_APP_SECRET", hide_env_values = true)]
    pub dropbox_app_secret: Option<String>,

    /// Dropbox offline refresh token
    #[arg(long, env = "DROPBOX_REFRESH_TOKEN", hide_env_values = true)]
    pub dropbox_refresh_token: Option<String>,
}

impl StorageConfig {
    pub(crate) fn settings(&self) -> Result<StorageSettings, StorageConfigError> {
        let upload_url_ttl = Duration::from_secs(self.upload_url_ttl_seconds);

        match self.storage_provider {
            StorageProviderKind::S3 => Ok(StorageSettings::S3(S3Config {
                endpoint: required(self.s3_endpoint.as_ref(), "S3_ENDPOINT", "s3")?,
                region: self.s3_region.clone(),
                bucket: required(self.s3_bucket.as_ref(), "S3_BUCKET", "s3")?,
                access_key_id: required(self.s3_access_key_id.as_ref(), "S3_ACCESS_KEY_ID", "s3")?,
                secret_access_key: required(
                    self.s3_secret_access_key.as_ref(),
                    "S3_SECRET_ACCESS_KEY",
                    "s3",
                )?,
                upload_url_ttl,
            })),
            StorageProviderKind::Dropbox => Ok(StorageSettings::Dropbox(DropboxConfig {
                app_key: required(self.dropbox_app_key.as_ref(), "DROPBOX_APP_KEY", "dropbox")?,
                app_secret: required(
                    self.dropbox_app_secret.as_ref(),
                    "DROPBOX_APP_SECRET",
                    "dropbox",
                )?,
                refresh_token: required(
                    self.dropbox_refresh_token.as_ref(),
                    "DROPBOX_REFRESH_TOKEN",
                    "dropbox",
                )?,
                upload_url_ttl,
            })),
        }
    }
}

fn required(
    value: Option<&String>,
    name: &'static str,
    provider: &'static str,
) -> Result<String, StorageConfigError> {
    value
        .filter(|value| !value.trim().is_empty())
        .cloned()
        .ok_or(StorageConfigError::Missing(name, provider))
}
