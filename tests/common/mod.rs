//! Mock News API server shared by the integration tests

#![allow(dead_code)]

use mockito::{Matcher, Mock, Server, ServerGuard};
use newsapi_rs::NewsApi;

pub const TEST_KEY: &str = "test-api-key";

/// Test fixture that owns a mock server and builds clients pointed at it
pub struct MockNewsApi {
    pub server: ServerGuard,
}

impl MockNewsApi {
    pub async fn new() -> Self {
        Self {
            server: Server::new_async().await,
        }
    }

    pub fn base_url(&self) -> String {
        self.server.url()
    }

    /// Client using the mock server as host and [`TEST_KEY`] as key
    pub fn client(&self) -> NewsApi {
        NewsApi::builder()
            .api_key(TEST_KEY)
            .host(self.base_url())
            .build()
            .expect("client should build")
    }

    /// GET `path` with an exact raw query string (any query when empty),
    /// answering `status` + `body`
    pub async fn mock_get(&mut self, path: &str, query: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock("GET", path)
            .match_query(query_matcher(query))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Like [`mock_get`](Self::mock_get) but also requires the key header
    pub async fn mock_authed_get(&mut self, path: &str, query: &str, body: &str) -> Mock {
        self.server
            .mock("GET", path)
            .match_query(query_matcher(query))
            .match_header("x-api-key", TEST_KEY)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}

fn query_matcher(query: &str) -> Matcher {
    if query.is_empty() {
        Matcher::Any
    } else {
        Matcher::Exact(query.to_string())
    }
}

/// A client whose host refuses connections
pub fn unreachable_client() -> NewsApi {
    NewsApi::builder()
        .api_key(TEST_KEY)
        .host("http://127.0.0.1:1")
        .build()
        .expect("client should build")
}

pub const OK_BODY: &str = r#"{"status":"ok","totalResults":1,"articles":[]}"#;
pub const ERROR_BODY: &str = r#"{"status":"error","code":"apiKeyInvalid","message":"bad key"}"#;
