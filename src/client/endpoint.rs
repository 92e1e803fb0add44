//! Fixed endpoint descriptors, one per public method.

/// Remote path plus whether the API key header is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    pub path: &'static str,
    pub requires_auth: bool,
}

impl Endpoint {
    pub const fn new(path: &'static str, requires_auth: bool) -> Self {
        Self {
            path,
            requires_auth,
        }
    }
}

pub const TOP_HEADLINES: Endpoint = Endpoint::new("/v2/top-headlines", true);
pub const EVERYTHING: Endpoint = Endpoint::new("/v2/everything", true);
pub const SOURCES: Endpoint = Endpoint::new("/v2/sources", true);

// v1 API, kept for existing callers.
pub const LEGACY_SOURCES: Endpoint = Endpoint::new("/v1/sources", false);
pub const LEGACY_ARTICLES: Endpoint = Endpoint::new("/v1/articles", true);
