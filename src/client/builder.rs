use crate::client::core::NewsApi;
use crate::client::dispatch::Dispatcher;
use crate::transport::{HttpTransport, TransportConfig};
use crate::{Error, Result};
use std::sync::Arc;

pub const DEFAULT_HOST: &str = "https://newsapi.org";

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small; anything not set falls back to defaults.
#[derive(Clone, Default)]
pub struct NewsApiBuilder {
    api_key: Option<String>,
    host: Option<String>,
    proxy: Option<String>,
    user_agent: Option<String>,
}

impl NewsApiBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the builder from the environment:
    /// - `NEWSAPI_KEY`: API key
    /// - `NEWSAPI_HOST`: host override (default `https://newsapi.org`)
    /// - `NEWSAPI_PROXY_URL`: proxy for all requests
    ///
    /// Explicit setters called afterwards take precedence.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        Self {
            api_key: var("NEWSAPI_KEY"),
            host: var("NEWSAPI_HOST"),
            proxy: var("NEWSAPI_PROXY_URL"),
            user_agent: None,
        }
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the host, primarily for testing with mock servers.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy = Some(proxy_url.into());
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the client. Performs no network I/O.
    pub fn build(self) -> Result<NewsApi> {
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| Error::configuration("an API key is required"))?;

        let host = self.host.unwrap_or_else(|| DEFAULT_HOST.to_string());
        validate_host(&host)?;

        let transport = HttpTransport::new(&TransportConfig {
            proxy: self.proxy,
            user_agent: self.user_agent,
        })?;

        Ok(NewsApi {
            api_key: Arc::from(api_key),
            host: host.trim_end_matches('/').to_string(),
            dispatcher: Dispatcher::new(Arc::new(transport)),
        })
    }
}

fn validate_host(host: &str) -> Result<()> {
    let parsed = url::Url::parse(host)
        .map_err(|e| Error::configuration(format!("invalid host {host:?}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(Error::configuration(format!(
            "unsupported scheme {other:?} in host {host:?}"
        ))),
    }
}

impl std::fmt::Debug for NewsApiBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsApiBuilder")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("proxy", &self.proxy)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_fails() {
        let err = NewsApiBuilder::new().build().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn blank_key_fails() {
        assert!(NewsApiBuilder::new().api_key("   ").build().is_err());
    }

    #[test]
    fn default_host() {
        let client = NewsApiBuilder::new().api_key("k").build().unwrap();
        assert_eq!(client.host(), DEFAULT_HOST);
    }

    #[test]
    fn host_override_drops_trailing_slash() {
        let client = NewsApiBuilder::new()
            .api_key("k")
            .host("http://127.0.0.1:8080/")
            .build()
            .unwrap();
        assert_eq!(client.host(), "http://127.0.0.1:8080");
    }

    #[test]
    fn rejects_non_http_hosts() {
        let err = NewsApiBuilder::new()
            .api_key("k")
            .host("ftp://newsapi.org")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
        assert!(NewsApiBuilder::new().api_key("k").host("not a url").build().is_err());
    }

    #[test]
    fn debug_redacts_key() {
        let rendered = format!("{:?}", NewsApiBuilder::new().api_key("secret"));
        assert!(!rendered.contains("secret"));
    }
}
