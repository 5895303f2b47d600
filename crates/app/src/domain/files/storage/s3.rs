//! S3 compatible storage.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::{
    Client,
    config::{BehaviorVersion, Credentials, Region},
    error::DisplayErrorContext,
    presigning::PresigningConfig,
};

use super::{StorageError, StorageKind, StorageProvider};

/// Connection settings for an S3 compatible bucket.
#[derive(Debug, Clone)]
pub struct S3Config {
    /// Endpoint, e.g. `"https://s3.us-east-1.amazonaws.com"`.
    pub endpoint: String,
    pub region: String,
    pub bucket: String,
    pub access_key_id: String,
    pub secret_access_key: String,

    /// Lifetime of presigned upload URLs.
    pub upload_url_ttl: Duration,
}

#[derive(Debug, Clone)]
pub struct S3Storage {
    client: Client,
    endpoint: String,
    bucket: String,
    upload_url_ttl: Duration,
}

impl S3Storage {
    #[must_use]
    pub fn new(config: S3Config) -> Self {
        let credentials = Credentials::new(
            config.access_key_id,
            config.secret_access_key,
            None,
            None,
            "meet-static",
        );

        let sdk_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region))
            .endpoint_url(&config.endpoint)
            .credentials_provider(credentials)
            .force_path_style(true)
            .build();

        Self {
            client: Client::from_conf(sdk_config),
            endpoint: config.endpoint.trim_end_matches('/').to_owned(),
            bucket: config.bucket,
            upload_url_ttl: config.upload_url_ttl,
        }
    }
}

#[async_trait]
impl StorageProvider for S3Storage {
    fn kind(&self) -> StorageKind {
        StorageKind::S3
    }

    async fn upload_url(&self, path: &str) -> Result<String, StorageError> {
        let presigning = PresigningConfig::expires_in(self.upload_url_ttl)
            .map_err(|error| StorageError::S3(error.to_string()))?;

        let request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(path)
            .presigned(presigning)
            .await
            .map_err(|error| StorageError::S3(DisplayErrorContext(&error).to_string()))?;

        Ok(request.uri().to_owned())
    }

    async fn download_url(&self, path: &str) -> Result<String, StorageError> {
        Ok(format!("{}/{}/{path}", self.endpoint, self.bucket))
    }

    async fn delete_file(&self, path: &str) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(path)
            .send()
            .await
            .map_err(|error| StorageError::S3(DisplayErrorContext(&error).to_string()))?;

        Ok(())
    }
}
