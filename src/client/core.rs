use super::args::{CallArgs, Normalized};
use super::dispatch::Dispatcher;
use super::endpoint::{self, Endpoint};
use super::sink::{Callback, Delivery};
use crate::query::{build_url, Options};
use crate::{ResponseFuture, Result};
use std::sync::Arc;

/// Client for the News API.
///
/// Cheap to clone; clones share the HTTP client and the API key. The key is
/// fixed at construction and sent only to endpoints that require it.
#[derive(Clone)]
pub struct NewsApi {
    pub(crate) api_key: Arc<str>,
    pub(crate) host: String,
    pub(crate) dispatcher: Dispatcher,
}

impl NewsApi {
    /// Create a client with the default host.
    ///
    /// Fails with `Error::Configuration` when `api_key` is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        crate::client::builder::NewsApiBuilder::new()
            .api_key(api_key)
            .build()
    }

    pub fn builder() -> crate::client::builder::NewsApiBuilder {
        crate::client::builder::NewsApiBuilder::new()
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Endpoints of the current (v2) API.
    pub fn v2(&self) -> V2<'_> {
        V2 { client: self }
    }

    /// Legacy v1 source listing. Sent without the API key.
    pub fn sources(&self, args: impl Into<CallArgs>) -> ResponseFuture {
        self.endpoint(&endpoint::LEGACY_SOURCES, args)
    }

    /// Legacy v1 article fetch.
    pub fn articles(&self, args: impl Into<CallArgs>) -> ResponseFuture {
        self.endpoint(&endpoint::LEGACY_ARTICLES, args)
    }

    /// Call any endpoint descriptor with the usual argument shapes.
    ///
    /// The returned future always settles. When a callback is among `args`
    /// the request starts immediately and the callback sees the outcome
    /// first.
    pub fn endpoint(&self, endpoint: &Endpoint, args: impl Into<CallArgs>) -> ResponseFuture {
        let Normalized { options, callback } = args.into().normalize();
        self.request(endpoint, options, callback)
    }

    /// The URL a call with `options` would hit.
    pub fn url_for(&self, endpoint: &Endpoint, options: Option<&Options>) -> String {
        build_url(&self.host, endpoint.path, options)
    }

    fn request(
        &self,
        endpoint: &Endpoint,
        options: Option<Options>,
        callback: Option<Callback>,
    ) -> ResponseFuture {
        let url = self.url_for(endpoint, options.as_ref());
        let credential = endpoint.requires_auth.then(|| Arc::clone(&self.api_key));
        self.dispatcher
            .dispatch(url, credential, Delivery::from_callback(callback))
    }
}

impl std::fmt::Debug for NewsApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsApi")
            .field("host", &self.host)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Current API endpoints, borrowed from a [`NewsApi`].
#[derive(Debug, Clone, Copy)]
pub struct V2<'a> {
    client: &'a NewsApi,
}

impl V2<'_> {
    /// `GET /v2/top-headlines`. Defaults to `language=en` when no options are given.
    pub fn top_headlines(&self, args: impl Into<CallArgs>) -> ResponseFuture {
        let Normalized { options, callback } = args.into().normalize();
        let options = options.unwrap_or_else(default_headline_options);
        self.client
            .request(&endpoint::TOP_HEADLINES, Some(options), callback)
    }

    /// `GET /v2/everything`.
    pub fn everything(&self, args: impl Into<CallArgs>) -> ResponseFuture {
        self.client.endpoint(&endpoint::EVERYTHING, args)
    }

    /// `GET /v2/sources`.
    pub fn sources(&self, args: impl Into<CallArgs>) -> ResponseFuture {
        self.client.endpoint(&endpoint::SOURCES, args)
    }
}

fn default_headline_options() -> Options {
    Options::new().set("language", "en")
}
