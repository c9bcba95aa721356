use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::error::TransportError;

pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";
pub const DEFAULT_CLIENT_ID: &str = "gtx";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// One text to translate between a language pair.
#[derive(Debug, Clone, Copy)]
pub struct ProviderQuery<'a> {
    pub source_language: &'a str,
    pub target_language: &'a str,
    pub text: &'a str,
}

/// Raw provider answer; interpretation is left to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderReply {
    pub status: u16,
    pub body: String,
}

impl ProviderReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// The wire side of the translation provider.
///
/// Implementations perform exactly one request per call; retries belong to
/// the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, query: &ProviderQuery<'_>) -> Result<ProviderReply, TransportError>;
}

/// Where and how to reach the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    pub endpoint: String,
    pub client_id: String,
    pub timeout: Duration,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// HTTP GET transport for the `translate_a/single` endpoint.
///
/// Holds one connection pool for the whole run.
pub struct HttpTransport {
    client: Client,
    settings: ProviderSettings,
}

impl HttpTransport {
    pub fn new(settings: ProviderSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, settings })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, query: &ProviderQuery<'_>) -> Result<ProviderReply, TransportError> {
        let params = [
            ("client", self.settings.client_id.as_str()),
            ("sl", query.source_language),
            ("tl", query.target_language),
            ("dt", "t"),
            ("q", query.text),
        ];

        let response = self
            .client
            .get(&self.settings.endpoint)
            .query(&params)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(ProviderReply { status, body })
    }
}
