use crate::{Error, Result};
use reqwest::Proxy;

/// Header the service reads the API key from.
pub const API_KEY_HEADER: &str = "X-Api-Key";

const DEFAULT_USER_AGENT: &str = concat!("newsapi-rs/", env!("CARGO_PKG_VERSION"));

/// Knobs for building the underlying `reqwest::Client`.
///
/// No timeout is configured; requests use the transport defaults.
#[derive(Debug, Clone, Default)]
pub struct TransportConfig {
    pub proxy: Option<String>,
    pub user_agent: Option<String>,
}

/// Status and body of a completed round-trip.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &TransportConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(
            config
                .user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        );

        if let Some(proxy_url) = &config.proxy {
            let proxy = Proxy::all(proxy_url)
                .map_err(|e| Error::configuration(format!("invalid proxy url {proxy_url:?}: {e}")))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        Ok(Self { client })
    }

    /// Issue one GET, attaching `api_key` as the key header when present.
    ///
    /// Only network-level failures are errors here. Any HTTP status is a
    /// successful round-trip; the body decides the outcome.
    pub async fn get(&self, url: &str, api_key: Option<&str>) -> Result<RawResponse> {
        let mut request = self.client.get(url);

        if let Some(key) = api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        Ok(RawResponse { status, body })
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport").finish_non_exhaustive()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        assert!(HttpTransport::new(&TransportConfig::default()).is_ok());
    }
}
