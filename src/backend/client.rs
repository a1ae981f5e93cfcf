use std::future::Future;
use std::time::Duration;
use thiserror::Error;

use crate::config::BackendConfig;

/// Errors on the transport channel: no usable response was obtained.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("{0}")]
    Transport(String),
}

/// Outcome of a bounded count query, on the success channel.
///
/// The backend answered. Either it returned a row count, or it reported
/// an application-level error (missing permissions, unknown collection).
/// The latter still proves the network and auth plumbing works.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CountReply {
    Rows(u64),
    Denied { message: String },
}

/// Capability the connectivity probe is handed: count at most one row
/// from a named collection. Injected so tests can substitute a stub.
pub trait CountProbe: Send + Sync {
    fn count_one(
        &self,
        collection: &str,
    ) -> impl Future<Output = Result<CountReply, BackendError>> + Send;
}

/// PostgREST-style client against the hosted backend.
pub struct HttpBackendClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpBackendClient {
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .build()
            .map_err(BackendError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

impl CountProbe for HttpBackendClient {
    fn count_one(
        &self,
        collection: &str,
    ) -> impl Future<Output = Result<CountReply, BackendError>> + Send {
        let url = format!("{}/rest/v1/{}", self.base_url, collection);
        async move {
            let response = self
                .http
                .get(&url)
                .query(&[("select", "id"), ("limit", "1")])
                .header("apikey", &self.api_key)
                .bearer_auth(&self.api_key)
                .header("Prefer", "count=exact")
                .send()
                .await
                .map_err(|e| BackendError::Transport(e.to_string()))?;

            let status = response.status();
            if status.is_success() {
                let count = response
                    .headers()
                    .get("content-range")
                    .and_then(|v| v.to_str().ok())
                    .and_then(parse_content_range_total)
                    .unwrap_or(0);
                return Ok(CountReply::Rows(count));
            }

            // The backend answered with an error payload; surface its message.
            let body: serde_json::Value = response.json().await.unwrap_or_default();
            let message = body
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {status}"));
            Ok(CountReply::Denied { message })
        }
    }
}

/// Extracts the total from a `Content-Range` value such as `0-0/42`.
fn parse_content_range_total(value: &str) -> Option<u64> {
    let total = value.rsplit('/').next()?;
    total.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::parse_content_range_total;

    #[test]
    fn content_range_total_parses() {
        assert_eq!(parse_content_range_total("0-0/42"), Some(42));
        assert_eq!(parse_content_range_total("*/0"), Some(0));
    }

    #[test]
    fn content_range_unknown_total_is_none() {
        assert_eq!(parse_content_range_total("0-0/*"), None);
        assert_eq!(parse_content_range_total("garbage"), None);
    }
}
