//! Integration tests for NewsApi against a mock server (future convention)

mod common;

use common::{unreachable_client, MockNewsApi, ERROR_BODY, OK_BODY};
use mockito::Matcher;
use newsapi_rs::{Error, ErrorCode, NewsApi, Options};
use serde_json::json;

#[tokio::test]
async fn everything_resolves_with_the_whole_body() {
    let mut mock = MockNewsApi::new().await;
    let m = mock.mock_authed_get("/v2/everything", "", OK_BODY).await;

    let body = mock.client().v2().everything(()).await.unwrap();

    assert_eq!(body, json!({"status": "ok", "totalResults": 1, "articles": []}));
    m.assert_async().await;
}

#[tokio::test]
async fn options_are_sent_in_order() {
    let mut mock = MockNewsApi::new().await;
    let m = mock
        .mock_authed_get("/v2/everything", "q=tesla&language=en", OK_BODY)
        .await;

    let opts = Options::new().set("q", "tesla").set("language", "en");
    mock.client().v2().everything(opts).await.unwrap();

    m.assert_async().await;
}

#[tokio::test]
async fn json_object_arguments_are_options() {
    let mut mock = MockNewsApi::new().await;
    let m = mock
        .mock_authed_get("/v2/sources", "category=technology&country=us", OK_BODY)
        .await;

    mock.client()
        .v2()
        .sources(json!({"category": "technology", "country": "us"}))
        .await
        .unwrap();

    m.assert_async().await;
}

#[tokio::test]
async fn top_headlines_defaults_to_english() {
    let mut mock = MockNewsApi::new().await;
    let m = mock
        .mock_authed_get("/v2/top-headlines", "language=en", OK_BODY)
        .await;

    mock.client().v2().top_headlines(()).await.unwrap();

    m.assert_async().await;
}

#[tokio::test]
async fn explicit_options_replace_headline_defaults() {
    let mut mock = MockNewsApi::new().await;
    let m = mock
        .mock_authed_get("/v2/top-headlines", "country=de", OK_BODY)
        .await;

    mock.client()
        .v2()
        .top_headlines(Options::new().set("country", "de"))
        .await
        .unwrap();

    m.assert_async().await;
}

#[tokio::test]
async fn legacy_sources_sends_no_key() {
    let mut mock = MockNewsApi::new().await;
    let m = mock
        .server
        .mock("GET", "/v1/sources")
        .match_query(Matcher::Exact("language=en".to_string()))
        .match_header("x-api-key", Matcher::Missing)
        .with_body(r#"{"status":"ok","sources":[]}"#)
        .create_async()
        .await;

    let body = mock
        .client()
        .sources(Options::new().set("language", "en"))
        .await
        .unwrap();

    assert_eq!(body["sources"], json!([]));
    m.assert_async().await;
}

#[tokio::test]
async fn legacy_articles_is_authenticated() {
    let mut mock = MockNewsApi::new().await;
    let m = mock
        .mock_authed_get("/v1/articles", "source=bbc-news", r#"{"status":"ok","articles":[]}"#)
        .await;

    mock.client()
        .articles(Options::new().set("source", "bbc-news"))
        .await
        .unwrap();

    m.assert_async().await;
}

#[tokio::test]
async fn each_client_sends_its_own_key() {
    let mut mock = MockNewsApi::new().await;
    let first_mock = mock.mock_authed_get("/v2/everything", "", OK_BODY).await;
    let second_mock = mock
        .server
        .mock("GET", "/v2/everything")
        .match_header("x-api-key", "second-key")
        .with_body(OK_BODY)
        .create_async()
        .await;

    let first = mock.client();
    let second = NewsApi::builder()
        .api_key("second-key")
        .host(mock.base_url())
        .build()
        .unwrap();
    first.v2().everything(()).await.unwrap();
    second.v2().everything(()).await.unwrap();

    first_mock.assert_async().await;
    second_mock.assert_async().await;
}

#[tokio::test]
async fn error_envelope_becomes_api_error() {
    let mut mock = MockNewsApi::new().await;
    let _mock = mock.mock_get("/v2/everything", "q=x", 401, ERROR_BODY).await;

    let err = mock
        .client()
        .v2()
        .everything(Options::new().set("q", "x"))
        .await
        .unwrap_err();

    let api = err.as_api().expect("expected a remote error");
    assert_eq!(api.code, "apiKeyInvalid");
    assert_eq!(api.name(), "NewsAPIError: apiKeyInvalid");
    assert_eq!(api.message, "bad key");
    assert_eq!(api.kind(), ErrorCode::ApiKeyInvalid);
    assert_eq!(api.http_status, Some(401));
}

#[tokio::test]
async fn error_envelope_with_http_200_still_fails() {
    let mut mock = MockNewsApi::new().await;
    let _mock = mock.mock_get("/v2/sources", "", 200, ERROR_BODY).await;

    let err = mock.client().v2().sources(()).await.unwrap_err();
    assert!(matches!(err, Error::Api(_)));
}

#[tokio::test]
async fn non_error_status_with_http_500_succeeds() {
    let mut mock = MockNewsApi::new().await;
    let _mock = mock.mock_get("/v2/sources", "", 500, r#"{"status":"ok","sources":[]}"#)
        .await;

    assert!(mock.client().v2().sources(()).await.is_ok());
}

#[tokio::test]
async fn invalid_json_is_a_parse_error() {
    let mut mock = MockNewsApi::new().await;
    let _mock = mock.mock_get("/v2/everything", "", 502, "<html>bad gateway</html>")
        .await;

    let err = mock.client().v2().everything(()).await.unwrap_err();
    assert!(err.is_parse(), "unexpected error: {err:?}");
}

#[tokio::test]
async fn network_failure_is_a_transport_error() {
    let err = unreachable_client().v2().everything(()).await.unwrap_err();

    assert!(err.is_transport(), "unexpected error: {err:?}");
    assert!(err.as_api().is_none());
}

#[test]
fn empty_key_fails_before_any_request() {
    assert!(matches!(NewsApi::new(""), Err(Error::Configuration { .. })));
}
