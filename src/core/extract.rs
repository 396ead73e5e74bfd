//! Content extraction boundary.
//!
//! The extraction service is a black box: given a URL it answers
//! `GET {endpoint}?url=<percent-encoded URL>` with
//! `{"title": ..., "textContent": ...}`. Any transport failure, non-2xx
//! status or unparsable body is reported as a single
//! [`DocsiftError::Extraction`]. There are no retries.

use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

use crate::core::config::ExtractionConfig;
use crate::core::error::{DocsiftError, Result};
use crate::core::types::ExtractedContent;

/// Source of document text
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Fetch title and plain text for `source`
    async fn extract(&self, source: &str) -> Result<ExtractedContent>;
}

/// Check that `source` is an absolute http(s) URL
pub fn validate_source_url(source: &str) -> Result<url::Url> {
    let trimmed = source.trim();
    if trimmed.is_empty() {
        return Err(DocsiftError::InvalidUrl("URL cannot be empty".to_string()));
    }

    let parsed = url::Url::parse(trimmed)
        .map_err(|e| DocsiftError::InvalidUrl(format!("{trimmed}: {e}")))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(DocsiftError::InvalidUrl(format!(
            "{trimmed}: only http and https links can be loaded"
        )));
    }

    Ok(parsed)
}

/// Client for the HTTP extraction service
#[derive(Debug, Clone)]
pub struct HttpExtractor {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpExtractor {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DocsiftError::ConfigError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &ExtractionConfig) -> Result<Self> {
        Self::new(config.endpoint.clone(), config.timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Full request URL for `source`
    pub fn request_url(&self, source: &str) -> String {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{}{separator}url={}",
            self.endpoint,
            urlencoding::encode(source)
        )
    }
}

#[async_trait]
impl Extractor for HttpExtractor {
    async fn extract(&self, source: &str) -> Result<ExtractedContent> {
        let url = validate_source_url(source)?;
        let request_url = self.request_url(url.as_str());

        tracing::debug!(source = %url, request = %request_url, "Requesting extraction");

        let response = self
            .client
            .get(&request_url)
            .send()
            .await
            .map_err(|e| DocsiftError::Extraction(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(source = %url, status = status.as_u16(), "Extraction service refused");
            return Err(DocsiftError::Extraction(format!("HTTP {status}")));
        }

        response
            .json::<ExtractedContent>()
            .await
            .map_err(|e| DocsiftError::Extraction(format!("Malformed response: {e}")))
    }
}

/// Reads plain text from local files
#[derive(Debug, Clone, Copy, Default)]
pub struct FileExtractor;

#[async_trait]
impl Extractor for FileExtractor {
    async fn extract(&self, source: &str) -> Result<ExtractedContent> {
        let path = Path::new(source.trim());

        let text = tokio::fs::read_to_string(path).await.map_err(|e| {
            DocsiftError::Extraction(format!("Failed to read {}: {e}", path.display()))
        })?;

        let title = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned());

        Ok(ExtractedContent {
            title,
            text_content: Some(text),
        })
    }
}
